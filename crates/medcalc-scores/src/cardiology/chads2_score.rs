//! CHADS₂ score for stroke risk in atrial fibrillation.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

calculator_input! {
    pub struct Chads2Input {
        pub congestive_heart_failure: YesNo,
        pub hypertension: YesNo,
        pub age_75_or_older: YesNo,
        pub diabetes_mellitus: YesNo,
        pub stroke_tia_thromboembolism: YesNo,
    }
}

/// Annual stroke rate (%), 95% CI and category, indexed by score (Gage 2001).
const STROKE_RISK: [(f64, &str, &str); 7] = [
    (1.9, "1.2-3.0", "Low"),
    (2.8, "2.0-3.8", "Low-Intermediate"),
    (4.0, "3.1-5.1", "Intermediate"),
    (5.9, "4.6-7.3", "High"),
    (8.5, "6.3-11.1", "High"),
    (12.5, "8.2-17.5", "Very High"),
    (18.2, "10.5-27.4", "Very High"),
];

pub fn calculate(input: &Chads2Input) -> CalcResult {
    let score = input.congestive_heart_failure.points(1)
        + input.hypertension.points(1)
        + input.age_75_or_older.points(1)
        + input.diabetes_mellitus.points(1)
        + input.stroke_tia_thromboembolism.points(2);

    let (rate, ci, category) = STROKE_RISK[score as usize];
    let (recommendation, therapy) = anticoagulation(score);

    Ok(CalculatorResponse::new(score, "points", interpret(score, rate, ci, category))
        .with("annual_stroke_risk_percent", rate)
        .with("stroke_risk_range", ci)
        .with("risk_category", category)
        .with("anticoagulation_recommendation", recommendation)
        .with("therapy_details", therapy)
        .with(
            "component_scores",
            json!({
                "congestive_heart_failure": input.congestive_heart_failure.points(1),
                "hypertension": input.hypertension.points(1),
                "age_75_or_older": input.age_75_or_older.points(1),
                "diabetes_mellitus": input.diabetes_mellitus.points(1),
                "stroke_tia_thromboembolism": input.stroke_tia_thromboembolism.points(2),
            }),
        ))
}

fn anticoagulation(score: i64) -> (&'static str, &'static str) {
    match score {
        0 => (
            "Consider further risk stratification",
            "Consider CHA₂DS₂-VASc score or aspirin based on bleeding risk",
        ),
        1 => (
            "Consider anticoagulation or further risk stratification",
            "CHA₂DS₂-VASc score or anticoagulation based on bleeding risk assessment",
        ),
        2 => (
            "Anticoagulation generally recommended",
            "Warfarin or direct oral anticoagulants (DOACs) unless contraindicated",
        ),
        _ => (
            "Strong recommendation for anticoagulation",
            "Warfarin or direct oral anticoagulants (DOACs)",
        ),
    }
}

fn interpret(score: i64, rate: f64, ci: &str, category: &str) -> Interpretation {
    let text = match score {
        0 => format!(
            "CHADS₂ Score {score}: Low stroke risk ({rate:.1}% per year, 95% CI: {ci}%). Consider further risk stratification with CHA₂DS₂-VASc score. May consider aspirin or observation based on bleeding risk and patient preferences."
        ),
        1 => format!(
            "CHADS₂ Score {score}: Low-intermediate stroke risk ({rate:.1}% per year, 95% CI: {ci}%). Consider further risk stratification with CHA₂DS₂-VASc score or anticoagulation based on bleeding risk assessment."
        ),
        2 => format!(
            "CHADS₂ Score {score}: Intermediate stroke risk ({rate:.1}% per year, 95% CI: {ci}%). Anticoagulation generally recommended unless contraindicated due to bleeding risk."
        ),
        _ => format!(
            "CHADS₂ Score {score}: {} stroke risk ({rate:.1}% per year, 95% CI: {ci}%). Strong recommendation for anticoagulation therapy with warfarin or direct oral anticoagulants (DOACs).",
            category.to_lowercase()
        ),
    };
    Interpretation::new(
        format!("{category} Risk"),
        format!("{category} annual stroke risk"),
        text,
    )
}
