//! ABCD² score for early stroke risk after transient ischemic attack.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

choice! {
    pub enum BloodPressure {
        Normal => "normal",
        /// SBP ≥140 or DBP ≥90 at first assessment.
        Elevated => "elevated",
    }
}

choice! {
    pub enum ClinicalFeatures {
        UnilateralWeakness => "unilateral_weakness",
        SpeechDisturbance => "speech_disturbance",
        Other => "other",
    }
}

choice! {
    pub enum Duration {
        LessThan10Min => "less_than_10min",
        From10To59Min => "10_59min",
        SixtyMinOrMore => "60min_or_more",
    }
}

calculator_input! {
    pub struct Abcd2Input {
        pub age: i64 => 18..=120,
        pub blood_pressure: BloodPressure,
        pub clinical_features: ClinicalFeatures,
        pub duration: Duration,
        pub diabetes: YesNo,
    }
}

pub fn calculate(input: &Abcd2Input) -> CalcResult {
    let age = i64::from(input.age >= 60);
    let blood_pressure = i64::from(input.blood_pressure == BloodPressure::Elevated);
    let clinical = match input.clinical_features {
        ClinicalFeatures::UnilateralWeakness => 2,
        ClinicalFeatures::SpeechDisturbance => 1,
        ClinicalFeatures::Other => 0,
    };
    let duration = match input.duration {
        Duration::SixtyMinOrMore => 2,
        Duration::From10To59Min => 1,
        Duration::LessThan10Min => 0,
    };
    let diabetes = input.diabetes.points(1);
    let score = age + blood_pressure + clinical + duration + diabetes;

    let (interpretation, two_day_risk) = match score {
        ..=3 => (
            Interpretation::new(
                "Low Risk",
                "Low stroke risk",
                format!("ABCD² score {score}: 2-day stroke risk about 1.0%, 7-day risk 1.2%. Outpatient workup within days is reasonable if imaging and vascular studies can be obtained promptly."),
            ),
            1.0,
        ),
        4..=5 => (
            Interpretation::new(
                "Moderate Risk",
                "Moderate stroke risk",
                format!("ABCD² score {score}: 2-day stroke risk about 4.1%, 7-day risk 5.9%. Hospital observation or expedited evaluation is justified in most cases."),
            ),
            4.1,
        ),
        _ => (
            Interpretation::new(
                "High Risk",
                "High stroke risk",
                format!("ABCD² score {score}: 2-day stroke risk about 8.1%, 7-day risk 11.7%. Admit for urgent evaluation including brain and vascular imaging and early secondary prevention."),
            ),
            8.1,
        ),
    };

    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("two_day_stroke_risk", two_day_risk)
        .with(
            "component_scores",
            json!({
                "age": age,
                "blood_pressure": blood_pressure,
                "clinical_features": clinical,
                "duration": duration,
                "diabetes": diabetes,
            }),
        ))
}
