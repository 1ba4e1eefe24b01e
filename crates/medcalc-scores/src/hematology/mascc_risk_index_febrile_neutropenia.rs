//! MASCC Risk Index for febrile neutropenia. Higher is better: ≥21 points
//! identifies low-risk patients.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

const LOW_RISK_THRESHOLD: i64 = 21;

choice! {
    pub enum BurdenOfIllness {
        NoneMild => "none_mild",
        Moderate => "moderate",
        Severe => "severe",
    }
}

choice! {
    pub enum CancerType {
        SolidOrHematologicNoFungal => "solid_tumor_or_hematologic_no_prior_fungal",
        HematologicWithPriorFungal => "hematologic_with_prior_fungal",
    }
}

choice! {
    pub enum FeverOnset {
        Outpatient => "outpatient",
        Inpatient => "inpatient",
    }
}

calculator_input! {
    pub struct MasccInput {
        pub burden_of_illness: BurdenOfIllness,
        pub hypotension: YesNo,
        pub active_copd: YesNo,
        pub cancer_type: CancerType,
        pub dehydration_requiring_iv: YesNo,
        pub fever_onset_status: FeverOnset,
        pub patient_age: i64 => 18..=100,
    }
}

/// Points awarded when the adverse finding is absent.
fn absent(finding: YesNo, points: i64) -> i64 {
    if finding.is_yes() { 0 } else { points }
}

pub fn calculate(input: &MasccInput) -> CalcResult {
    let components = [
        (
            "burden_of_illness",
            match input.burden_of_illness {
                BurdenOfIllness::NoneMild => 5,
                BurdenOfIllness::Moderate => 3,
                BurdenOfIllness::Severe => 0,
            },
        ),
        ("hypotension", absent(input.hypotension, 5)),
        ("active_copd", absent(input.active_copd, 4)),
        (
            "cancer_type",
            match input.cancer_type {
                CancerType::SolidOrHematologicNoFungal => 4,
                CancerType::HematologicWithPriorFungal => 0,
            },
        ),
        ("dehydration", absent(input.dehydration_requiring_iv, 3)),
        (
            "fever_onset",
            match input.fever_onset_status {
                FeverOnset::Outpatient => 3,
                FeverOnset::Inpatient => 0,
            },
        ),
        ("age", if input.patient_age < 60 { 2 } else { 0 }),
    ];
    let score: i64 = components.iter().map(|(_, points)| points).sum();
    let component_scores: serde_json::Map<String, serde_json::Value> = components
        .iter()
        .map(|(name, points)| (name.to_string(), json!(points)))
        .collect();

    let (interpretation, recommendation, management) = if score >= LOW_RISK_THRESHOLD {
        (
            Interpretation::new(
                "Low Risk",
                "Low risk for complications",
                format!(
                    "MASCC Risk Index score of {score} indicates low risk for serious complications of febrile neutropenia with 91% positive \
                     predictive value for uncomplicated course. These patients may be considered for oral antibiotic therapy and/or outpatient \
                     management with close follow-up. Clinical judgment should always override the score."
                ),
            ),
            "Consider oral antibiotic therapy and/or outpatient management",
            "Outpatient management with close follow-up may be appropriate",
        )
    } else {
        (
            Interpretation::new(
                "High Risk",
                "High risk for complications",
                format!(
                    "MASCC Risk Index score of {score} indicates high risk for serious complications of febrile neutropenia. These patients \
                     require admission for empiric intravenous antibiotics if not already hospitalized. Inpatient monitoring with prompt \
                     recognition and treatment of complications is essential."
                ),
            ),
            "Admit for empiric intravenous antibiotics if not already inpatient",
            "Inpatient monitoring and aggressive supportive care essential",
        )
    };

    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("component_scores", component_scores)
        .with("recommendation", recommendation)
        .with("management_approach", management)
        .with("score_threshold", format!("Cut-off ≥{LOW_RISK_THRESHOLD} points for low risk")))
}
