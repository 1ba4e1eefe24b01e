//! MIPSS70 / MIPSS70+ for transplant-age primary myelofibrosis.
//!
//! The "+" variant is reported when the very-high-risk mutation status is
//! known (`yes` or `no`).

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

choice! {
    pub enum MutationStatus {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
}

calculator_input! {
    pub struct Mipss70Input {
        pub age_years: i64 => 18..=120,
        pub hemoglobin: f64 => 3.0..=20.0,
        pub white_blood_count: f64 => 0.1..=500.0,
        pub platelet_count: f64 => 1.0..=2000.0,
        pub circulating_blasts: f64 => 0.0..=100.0,
        pub constitutional_symptoms: YesNo,
        pub high_molecular_risk_mutations: YesNo,
        pub very_high_molecular_risk: Option<MutationStatus>,
    }
}

pub fn calculate(input: &Mipss70Input) -> CalcResult {
    let very_high = input.very_high_molecular_risk.unwrap_or(MutationStatus::Unknown);
    let components = [
        ("age", if input.age_years > 65 { 2 } else { 0 }),
        ("hemoglobin", if input.hemoglobin < 10.0 { 1 } else { 0 }),
        ("wbc", if input.white_blood_count > 25.0 { 2 } else { 0 }),
        ("platelets", if input.platelet_count < 100.0 { 2 } else { 0 }),
        ("blasts", if input.circulating_blasts > 2.0 { 1 } else { 0 }),
        ("symptoms", input.constitutional_symptoms.points(1)),
        ("high_risk_mutations", input.high_molecular_risk_mutations.points(1)),
        ("very_high_risk", if very_high == MutationStatus::Yes { 1 } else { 0 }),
    ];
    let score: i64 = components.iter().map(|(_, points)| points).sum();
    let version = if very_high == MutationStatus::Unknown { "MIPSS70" } else { "MIPSS70+" };

    let interpretation = match score {
        ..=2 => Interpretation::new(
            "Low Risk",
            "Low risk primary myelofibrosis",
            format!(
                "LOW RISK PRIMARY MYELOFIBROSIS ({version} Score: {score}): Excellent prognosis with median survival exceeding 20 years. \
                 MANAGEMENT: Standard monitoring with regular clinical assessments every 3-6 months. \
                 TRANSPLANT: Allogeneic stem cell transplantation not indicated due to excellent prognosis."
            ),
        ),
        3..=4 => Interpretation::new(
            "Intermediate-1 Risk",
            "Intermediate-1 risk primary myelofibrosis",
            format!(
                "INTERMEDIATE-1 RISK PRIMARY MYELOFIBROSIS ({version} Score: {score}): Good prognosis with median survival 8-20 years. \
                 TREATMENT: Consider JAK inhibitor therapy for symptomatic disease (splenomegaly, constitutional symptoms). \
                 TRANSPLANT: Allogeneic transplantation generally not recommended unless disease progression or development of high-risk features."
            ),
        ),
        5..=6 => Interpretation::new(
            "Intermediate-2 Risk",
            "Intermediate-2 risk primary myelofibrosis",
            format!(
                "INTERMEDIATE-2 RISK PRIMARY MYELOFIBROSIS ({version} Score: {score}): Intermediate prognosis with median survival 4-8 years. \
                 TREATMENT: JAK inhibitor therapy for symptom control and potential survival benefit. \
                 TRANSPLANT: Consider allogeneic stem cell transplantation evaluation if appropriate candidate."
            ),
        ),
        _ => Interpretation::new(
            "High Risk",
            "High risk primary myelofibrosis",
            format!(
                "HIGH RISK PRIMARY MYELOFIBROSIS ({version} Score: {score}): Poor prognosis with median survival less than 4 years. \
                 TREATMENT: JAK inhibitor therapy for symptom palliation. \
                 TRANSPLANT: Prioritize urgent allogeneic stem cell transplantation evaluation and referral to transplant center."
            ),
        ),
    };

    let breakdown: serde_json::Map<String, serde_json::Value> = components
        .iter()
        .map(|(name, points)| (name.to_string(), json!(points)))
        .collect();
    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("score_version", version)
        .with("component_scores", breakdown))
}
