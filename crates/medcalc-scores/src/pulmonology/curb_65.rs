//! CURB-65 severity score for community-acquired pneumonia.
//!
//! One point each for confusion, urea > 19 mg/dL (BUN, about 7 mmol/L),
//! respiratory rate ≥ 30, systolic < 90 or diastolic ≤ 60 mmHg, and age
//! ≥ 65. Stage labels and texts are Portuguese and are kept verbatim.

use medcalc_core::math::ensure_positive;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

calculator_input! {
    pub struct Curb65Input {
        pub confusion: bool,
        /// mg/dL
        pub urea: f64 => 0.0..=300.0,
        /// Breaths per minute.
        pub respiratory_rate: i64 => 0..=80,
        /// mmHg
        pub systolic_bp: i64 => 30..=300,
        /// mmHg
        pub diastolic_bp: i64 => 10..=200,
        pub age: i64 => 0..=120,
    }
}

impl Curb65Input {
    fn validate(&self) -> CalcResult<()> {
        ensure_positive("urea", self.urea)?;
        Ok(())
    }

    fn criteria(&self) -> [(&'static str, bool); 5] {
        [
            ("confusion", self.confusion),
            ("urea", self.urea > 19.0),
            ("respiratory_rate", self.respiratory_rate >= 30),
            (
                "blood_pressure",
                self.systolic_bp < 90 || self.diastolic_bp <= 60,
            ),
            ("age_65_or_older", self.age >= 65),
        ]
    }
}

pub fn calculate(input: &Curb65Input) -> CalcResult {
    input.validate()?;

    let criteria = input.criteria();
    let score = criteria.iter().filter(|(_, met)| *met).count() as i64;

    let interpretation = match score {
        0..=1 => Interpretation::new(
            "Baixo Risco",
            "Mortalidade em 30 dias de 0,6-2,7%",
            format!("CURB-65 de {score} ponto(s): baixo risco de mortalidade. Considerar tratamento ambulatorial com antibioticoterapia oral e reavaliação clínica em 48-72 horas."),
        ),
        2 => Interpretation::new(
            "Risco Moderado",
            "Mortalidade em 30 dias de 6,8%",
            format!("CURB-65 de {score} pontos: risco moderado de mortalidade. Considerar internação hospitalar de curta duração ou tratamento ambulatorial com supervisão rigorosa."),
        ),
        _ => Interpretation::new(
            "Alto Risco",
            "Mortalidade em 30 dias de 14-57%",
            format!("CURB-65 de {score} pontos: alto risco de mortalidade. Internação hospitalar indicada; com 4-5 pontos avaliar admissão em unidade de terapia intensiva."),
        ),
    };

    let breakdown: serde_json::Map<String, serde_json::Value> = criteria
        .iter()
        .map(|(name, met)| (name.to_string(), json!(i64::from(*met))))
        .collect();

    Ok(CalculatorResponse::new(score, "points", interpretation).with("criteria", breakdown))
}
