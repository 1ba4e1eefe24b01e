//! VACS 2.0 Index: five-year all-cause mortality burden in people living with HIV.
//!
//! Each biomarker contributes a linear, zero-floored component; FIB-4 and
//! CKD-EPI eGFR are derived from the raw labs first.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};
use serde_json::json;

use super::hiv_labs::{ckd_epi_egfr, fib4, Race};

const MAX_SCORE: f64 = 164.0;
const HCV_POINTS: f64 = 6.0;

calculator_input! {
    pub struct Vacs2Input {
        pub age: i64 => 18..=100,
        pub sex: Sex,
        pub race: Race,
        /// cells/μL
        pub cd4_count: i64 => 0..=2000,
        /// log10 copies/mL
        pub hiv_rna_log: f64 => 0.0..=7.0,
        pub hemoglobin: f64 => 5.0..=20.0,
        pub platelets: i64 => 10..=1000,
        pub ast: i64 => 10..=500,
        pub alt: i64 => 10..=500,
        pub creatinine: f64 => 0.5..=10.0,
        pub albumin: f64 => 1.0..=6.0,
        pub wbc_count: f64 => 1.0..=50.0,
        pub bmi: f64 => 10.0..=50.0,
        pub hepatitis_c: YesNo,
    }
}

/// `max(0, value * slope + intercept)`
fn component(value: f64, slope: f64, intercept: f64) -> f64 {
    (value * slope + intercept).max(0.0)
}

fn mortality_estimate(score: f64) -> String {
    const BASE_SCORE: f64 = 38.0;
    let risk = if score <= BASE_SCORE {
        score / BASE_SCORE
    } else {
        2f64.powf((score - BASE_SCORE) / 10.0)
    };
    format!("Approximately {}% 5-year mortality risk", fixed(risk.min(95.0), 1))
}

pub fn calculate(input: &Vacs2Input) -> CalcResult {
    let fib4_index = fib4(input.age, input.ast, input.alt, input.platelets);
    let egfr = ckd_epi_egfr(input.creatinine, input.age, input.sex, input.race);
    let components = [
        ("age_score", component(input.age as f64, 0.6, 14.0)),
        ("cd4_score", component(input.cd4_count as f64, -0.026, 23.0)),
        ("hiv_rna_score", component(input.hiv_rna_log, 4.86, -6.32)),
        ("hemoglobin_score", component(input.hemoglobin, -2.29, 32.64)),
        ("fib4_score", component(fib4_index, 2.86, -1.43)),
        ("egfr_score", component(egfr, -0.089, 16.0)),
        ("albumin_score", component(input.albumin, -8.67, 82.34)),
        ("wbc_score", component(input.wbc_count, 0.5, 0.0)),
        ("bmi_score", component(input.bmi, -0.5, 12.5)),
        ("hcv_score", if input.hepatitis_c.is_yes() { HCV_POINTS } else { 0.0 }),
    ];
    let score = components.iter().map(|(_, points)| points).sum::<f64>().clamp(0.0, MAX_SCORE);
    let shown = fixed(score, 1);

    let (stage, description, guidance) = match score {
        s if s <= 25.0 => (
            "Low Risk",
            "Low 5-year mortality risk",
            "Low disease burden and mortality risk. Continue routine HIV care and monitoring. \
             Excellent prognosis with current management.",
        ),
        s if s <= 50.0 => (
            "Moderate Risk",
            "Moderate 5-year mortality risk",
            "Moderate disease burden. Consider enhanced monitoring and preventive interventions. \
             Optimize HIV therapy and address modifiable risk factors.",
        ),
        s if s <= 75.0 => (
            "High Risk",
            "High 5-year mortality risk",
            "High disease burden. Intensify monitoring, optimize HIV therapy, and address comorbidities. \
             Consider multidisciplinary care approach.",
        ),
        _ => (
            "Very High Risk",
            "Very high 5-year mortality risk",
            "Very high disease burden. Consider aggressive intervention strategies and end-of-life planning \
             discussions. Urgent optimization of all modifiable factors.",
        ),
    };
    let text = format!("VACS 2.0 Index score: {shown} points. {guidance}");

    let component_scores: serde_json::Map<String, serde_json::Value> = components
        .iter()
        .map(|(name, points)| (name.to_string(), json!(round_to(*points, 1))))
        .collect();

    Ok(
        CalculatorResponse::new(round_to(score, 1), "points", Interpretation::new(stage, description, text))
            .with("component_scores", component_scores)
            .with(
                "composite_biomarkers",
                json!({ "fib4": round_to(fib4_index, 2), "egfr": round_to(egfr, 1) }),
            )
            .with("mortality_risk_5year", mortality_estimate(score)),
    )
}
