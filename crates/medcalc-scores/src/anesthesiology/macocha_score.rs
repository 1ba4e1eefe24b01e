//! MACOCHA score: predicts difficult intubation in the ICU.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

calculator_input! {
    pub struct MacochaInput {
        pub mallampati_3_or_4: YesNo,
        pub obstructive_sleep_apnea: YesNo,
        pub reduced_cervical_mobility: YesNo,
        pub limited_mouth_opening: YesNo,
        pub coma: YesNo,
        pub severe_hypoxemia: YesNo,
        pub non_anesthesiologist: YesNo,
    }
}

struct Preparation {
    level: &'static str,
    equipment: &'static str,
    personnel: &'static str,
    backup_plan: &'static str,
}

const LOW: Preparation = Preparation {
    level: "Standard intubation preparation",
    equipment: "Standard laryngoscope, endotracheal tubes, bag-mask ventilation",
    personnel: "Standard medical team",
    backup_plan: "Standard backup airway management",
};
const INTERMEDIATE: Preparation = Preparation {
    level: "Enhanced preparation with additional equipment",
    equipment: "Video laryngoscope, supraglottic airway devices, fiberoptic bronchoscope availability",
    personnel: "Experienced intubator, additional skilled assistant",
    backup_plan: "Supraglottic airway device, consider awake fiberoptic intubation",
};
const HIGH: Preparation = Preparation {
    level: "Comprehensive difficult airway preparation",
    equipment: "Video laryngoscope, fiberoptic bronchoscope, supraglottic airways, surgical airway kit",
    personnel: "Most experienced available intubator, anesthesiologist if available, surgical backup",
    backup_plan: "Immediate surgical airway capability, consider awake fiberoptic intubation",
};

pub fn calculate(input: &MacochaInput) -> CalcResult {
    let patient = input.mallampati_3_or_4.points(5)
        + input.obstructive_sleep_apnea.points(2)
        + input.reduced_cervical_mobility.points(1)
        + input.limited_mouth_opening.points(1);
    let pathology = input.coma.points(1) + input.severe_hypoxemia.points(1);
    let operator = input.non_anesthesiologist.points(1);
    let total = patient + pathology + operator;

    Ok(
        CalculatorResponse::new(total, "points", interpret(total, patient, pathology, operator))
            .with(
                "component_scores",
                json!({
                    "patient_related": patient,
                    "pathology_related": pathology,
                    "operator_related": operator,
                }),
            ),
    )
}

fn interpret(total: i64, patient: i64, pathology: i64, operator: i64) -> Interpretation {
    let (stage, description, probability, prep, management) = match total {
        ..=2 => (
            "Low Risk",
            "Low risk for difficult intubation",
            "<10%",
            &LOW,
            "Low Risk Management (Score ≤2): standard intubation protocols and equipment appropriate. Difficult intubation very unlikely (NPV 98%). Continue with planned intubation approach and monitor for unexpected complications.",
        ),
        3..=5 => (
            "Intermediate Risk",
            "Intermediate risk for difficult intubation",
            "10-30%",
            &INTERMEDIATE,
            "Intermediate Risk Management (Score 3-5): consider video laryngoscopy as first-line approach with a supraglottic airway device immediately available. Ensure an experienced intubator performs the procedure, pre-oxygenate thoroughly and optimize positioning. Have a clearly defined backup airway plan.",
        ),
        _ => (
            "High Risk",
            "High risk for difficult intubation",
            ">30%",
            &HIGH,
            "High Risk Management (Score ≥6): comprehensive difficult airway preparation mandatory. Video laryngoscopy recommended as first-line technique with a fiberoptic bronchoscope and surgical airway capability immediately available. Consider awake fiberoptic intubation strongly. The most experienced available operator should perform the procedure. Consider postponing non-emergent intubation for optimization.",
        ),
    };

    let text = format!(
        "MACOCHA Score Assessment:\n\n\
         Component Scores:\n\
         • Patient-related factors: {patient} points\n\
         • Pathology-related factors: {pathology} points\n\
         • Operator-related factors: {operator} points\n\
         • Total MACOCHA score: {total}/12 points\n\n\
         Risk Assessment:\n\
         • Risk category: {stage}\n\
         • Probability of difficult intubation: {probability}\n\
         • Negative predictive value: 98% (if score ≤2)\n\n\
         Preparation Recommendations:\n\
         • Preparation level: {}\n\
         • Required equipment: {}\n\
         • Personnel requirements: {}\n\
         • Backup plan: {}\n\n\
         {management}\n\n\
         MACOCHA performance: AUC 0.89 (development), 0.86 (validation); sensitivity 73%, specificity 89%, NPV 98%, PPV 36%. \
         Mallampati III/IV is the strongest predictor (5 points), obstructive sleep apnea scores 2 and all other factors 1 point each.",
        prep.level, prep.equipment, prep.personnel, prep.backup_plan,
    );
    Interpretation::new(stage, description, text)
}
