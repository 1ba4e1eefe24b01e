//! Fetal biophysical profile (Manning).
//!
//! Five components score 2 when normal and 0 when abnormal. Amniotic fluid
//! volume also changes how an 8/10 or 6/10 is read: oligohydramnios points
//! to chronic compromise even when the acute markers are reassuring.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum Finding {
        Normal => "normal",
        Abnormal => "abnormal",
    }
}

impl Finding {
    fn points(self) -> i64 {
        match self {
            Finding::Normal => 2,
            Finding::Abnormal => 0,
        }
    }
}

calculator_input! {
    pub struct FetalBppInput {
        pub fetal_breathing: Finding,
        pub fetal_movement: Finding,
        pub fetal_tone: Finding,
        pub amniotic_fluid: Finding,
        pub nonstress_test: Finding,
    }
}

pub fn calculate(input: &FetalBppInput) -> CalcResult {
    let score = [
        input.fetal_breathing,
        input.fetal_movement,
        input.fetal_tone,
        input.amniotic_fluid,
        input.nonstress_test,
    ]
    .iter()
    .map(|f| f.points())
    .sum::<i64>();
    let fluid_normal = input.amniotic_fluid == Finding::Normal;

    Ok(CalculatorResponse::new(score, "points", interpret(score, fluid_normal))
        .with("oligohydramnios", !fluid_normal))
}

fn interpret(score: i64, fluid_normal: bool) -> Interpretation {
    match (score, fluid_normal) {
        (10, _) | (8, true) => Interpretation::new(
            "Normal",
            "Normal biophysical profile",
            "Low risk of fetal asphyxia. Repeat testing per clinical indication; intervene only for obstetric or maternal factors.",
        ),
        (8, false) => Interpretation::new(
            "Abnormal",
            "Oligohydramnios with otherwise normal profile",
            "Chronic fetal compromise suspected. Consider delivery at term; if preterm, intensify surveillance with twice-weekly testing.",
        ),
        (6, true) => Interpretation::new(
            "Equivocal",
            "Equivocal biophysical profile",
            "Possible fetal asphyxia. Deliver if at term; otherwise repeat the profile within 24 hours.",
        ),
        (6, false) | (4, _) => Interpretation::new(
            "Abnormal",
            "Abnormal biophysical profile",
            "Probable fetal asphyxia. Delivery is indicated for fetal reasons, with intensive monitoring if very preterm.",
        ),
        _ => Interpretation::new(
            "Abnormal",
            "Severely abnormal biophysical profile",
            "Almost certain fetal asphyxia. Immediate delivery is indicated regardless of gestational age.",
        ),
    }
}
