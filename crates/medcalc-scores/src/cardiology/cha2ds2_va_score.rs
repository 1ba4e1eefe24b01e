//! CHA₂DS₂-VA score: the sex-neutral revision of CHA₂DS₂-VASc (ESC 2024).

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

calculator_input! {
    pub struct Cha2ds2VaInput {
        pub age: i64 => 18..=120,
        pub congestive_heart_failure: YesNo,
        pub hypertension: YesNo,
        pub diabetes_mellitus: YesNo,
        pub stroke_tia_thromboembolism: YesNo,
        pub vascular_disease: YesNo,
    }
}

/// Strokes per 100 patient-years by score.
const STROKE_RATE: [f64; 9] = [0.5, 1.5, 2.9, 4.6, 6.7, 9.2, 11.9, 15.2, 19.5];

pub fn calculate(input: &Cha2ds2VaInput) -> CalcResult {
    let age_points = match input.age {
        a if a < 65 => 0,
        a if a < 75 => 1,
        _ => 2,
    };
    let score = age_points
        + input.congestive_heart_failure.points(1)
        + input.hypertension.points(1)
        + input.diabetes_mellitus.points(1)
        + input.stroke_tia_thromboembolism.points(2)
        + input.vascular_disease.points(1);

    let rate = STROKE_RATE[score as usize];
    let (interpretation, recommendation) = match score {
        0 => (
            Interpretation::new(
                "Low Risk",
                "Very low stroke risk",
                format!("CHA₂DS₂-VA Score {score}: Very low stroke risk ({rate} strokes per 100 patient-years). Anticoagulation is not recommended. Consider bleeding risk assessment."),
            ),
            "No Anticoagulation",
        ),
        1 => (
            Interpretation::new(
                "Moderate Risk",
                "Low-moderate stroke risk",
                format!("CHA₂DS₂-VA Score {score}: Low-moderate stroke risk ({rate} strokes per 100 patient-years). Use clinical judgment to weigh risks and benefits of anticoagulation. Consider individual patient factors."),
            ),
            "Clinical Judgment Required",
        ),
        _ => (
            Interpretation::new(
                "High Risk",
                "High stroke risk",
                format!("CHA₂DS₂-VA Score {score}: High stroke risk ({rate} strokes per 100 patient-years). Oral anticoagulation is recommended to reduce stroke risk unless contraindicated."),
            ),
            "Oral Anticoagulation Recommended",
        ),
    };

    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("annual_stroke_risk_percent", rate)
        .with("stroke_incidence", format!("{rate} per 100 patient-years"))
        .with("anticoagulation_recommendation", recommendation)
        .with(
            "component_scores",
            json!({
                "age": age_points,
                "congestive_heart_failure": input.congestive_heart_failure.points(1),
                "hypertension": input.hypertension.points(1),
                "diabetes_mellitus": input.diabetes_mellitus.points(1),
                "stroke_tia_thromboembolism": input.stroke_tia_thromboembolism.points(2),
                "vascular_disease": input.vascular_disease.points(1),
            }),
        ))
}
