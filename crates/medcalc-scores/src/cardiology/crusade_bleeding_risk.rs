//! CRUSADE score for in-hospital major bleeding in NSTEMI.

use medcalc_core::math::banded_points;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};
use serde_json::json;

calculator_input! {
    pub struct CrusadeInput {
        pub baseline_hematocrit: f64 => 15.0..=55.0,
        pub creatinine_clearance: f64 => 5.0..=200.0,
        pub heart_rate: i64 => 30..=200,
        pub patient_sex: Sex,
        pub signs_chf: YesNo,
        pub diabetes_mellitus: YesNo,
        pub prior_vascular_disease: YesNo,
        pub systolic_blood_pressure: i64 => 60..=250,
    }
}

const HEMATOCRIT: [(f64, i64); 5] = [
    (31.0, 9),
    (34.0, 7),
    (37.0, 3),
    (40.0, 2),
    (f64::INFINITY, 0),
];
const CREATININE_CLEARANCE: [(f64, i64); 6] = [
    (15.0, 39),
    (30.0, 35),
    (60.0, 28),
    (90.0, 17),
    (120.0, 7),
    (f64::INFINITY, 0),
];
const HEART_RATE: [(f64, i64); 7] = [
    (70.0, 0),
    (80.0, 1),
    (90.0, 3),
    (100.0, 6),
    (110.0, 8),
    (120.0, 10),
    (f64::INFINITY, 11),
];
const SYSTOLIC_BP: [(f64, i64); 6] = [
    (90.0, 10),
    (100.0, 8),
    (120.0, 5),
    (180.0, 1),
    (200.0, 3),
    (f64::INFINITY, 5),
];

pub fn calculate(input: &CrusadeInput) -> CalcResult {
    let components = [
        ("hematocrit", banded_points(input.baseline_hematocrit, &HEMATOCRIT)),
        (
            "creatinine_clearance",
            banded_points(input.creatinine_clearance, &CREATININE_CLEARANCE),
        ),
        ("heart_rate", banded_points(input.heart_rate as f64, &HEART_RATE)),
        ("sex", if input.patient_sex.is_female() { 8 } else { 0 }),
        ("chf", input.signs_chf.points(7)),
        ("diabetes", input.diabetes_mellitus.points(6)),
        ("vascular_disease", input.prior_vascular_disease.points(6)),
        (
            "systolic_bp",
            banded_points(input.systolic_blood_pressure as f64, &SYSTOLIC_BP),
        ),
    ];
    let score: i64 = components.iter().map(|(_, points)| points).sum();
    let breakdown: serde_json::Map<String, serde_json::Value> = components
        .iter()
        .map(|(name, points)| (name.to_string(), json!(points)))
        .collect();

    let (risk, interpretation) = interpret(score);
    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("component_breakdown", breakdown)
        .with("estimated_bleeding_risk", format!("{risk}%")))
}

fn interpret(score: i64) -> (f64, Interpretation) {
    if score <= 20 {
        (3.1, Interpretation::new(
            "Very Low Risk",
            "Very low bleeding risk",
            format!("CRUSADE score of {score} indicates very low bleeding risk (3.1% major bleeding rate). Standard antithrombotic therapy is appropriate. Monitor for bleeding but expect low incidence."),
        ))
    } else if score <= 30 {
        (5.5, Interpretation::new(
            "Low Risk",
            "Low bleeding risk",
            format!("CRUSADE score of {score} indicates low bleeding risk (5.5% major bleeding rate). Standard antithrombotic therapy is appropriate with routine monitoring for bleeding complications."),
        ))
    } else if score <= 40 {
        (8.6, Interpretation::new(
            "Moderate Risk",
            "Moderate bleeding risk",
            format!("CRUSADE score of {score} indicates moderate bleeding risk (8.6% major bleeding rate). Consider reduced-dose antithrombotic therapy and enhanced bleeding monitoring. Balance ischemic vs bleeding risk."),
        ))
    } else if score <= 50 {
        (11.9, Interpretation::new(
            "High Risk",
            "High bleeding risk",
            format!("CRUSADE score of {score} indicates high bleeding risk (11.9% major bleeding rate). Consider reduced-dose antithrombotic regimens, shorter duration therapy, and intensive bleeding monitoring."),
        ))
    } else {
        (19.5, Interpretation::new(
            "Very High Risk",
            "Very high bleeding risk",
            format!("CRUSADE score of {score} indicates very high bleeding risk (19.5% major bleeding rate). Strongly consider alternative treatment strategies, minimal effective antithrombotic therapy, and very close monitoring."),
        ))
    }
}
