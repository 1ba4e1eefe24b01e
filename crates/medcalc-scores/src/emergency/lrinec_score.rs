//! LRINEC score for necrotizing soft tissue infection.

use medcalc_core::math::ensure;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

calculator_input! {
    pub struct LrinecInput {
        pub crp: f64,
        pub wbc: f64,
        pub hemoglobin: f64,
        pub sodium: f64 => 100.0..=180.0,
        pub creatinine: f64,
        pub glucose: f64,
    }
}

pub fn calculate(input: &LrinecInput) -> CalcResult {
    for (name, value) in [
        ("crp", input.crp),
        ("wbc", input.wbc),
        ("hemoglobin", input.hemoglobin),
        ("creatinine", input.creatinine),
        ("glucose", input.glucose),
    ] {
        ensure(value >= 0.0, format!("{name} must be a non-negative number"))?;
    }

    let crp = if input.crp >= 150.0 { 4 } else { 0 };
    let wbc = if input.wbc > 25_000.0 {
        2
    } else if input.wbc >= 15_000.0 {
        1
    } else {
        0
    };
    let hemoglobin = if input.hemoglobin < 11.0 {
        2
    } else if input.hemoglobin <= 13.5 {
        1
    } else {
        0
    };
    let sodium = if input.sodium < 135.0 { 2 } else { 0 };
    let creatinine = if input.creatinine > 1.6 { 2 } else { 0 };
    let glucose = if input.glucose > 180.0 { 1 } else { 0 };
    let score = crp + wbc + hemoglobin + sodium + creatinine + glucose;

    let (stage, description, probability, management, surgical, monitoring, plan) = if score <= 5 {
        (
            "Low Risk",
            "Necrotizing fasciitis unlikely",
            "<50%",
            "Continue standard soft tissue infection management with close monitoring",
            "Not routinely required unless clinical suspicion remains high",
            "Serial reassessment and monitoring for clinical deterioration",
            "Continue standard antibiotic therapy and monitor for improvement within 24-48 hours. 10% of patients with necrotizing fasciitis had scores <6, so maintain high clinical suspicion and repeat scoring if the patient deteriorates.",
        )
    } else if score <= 7 {
        (
            "Moderate Risk",
            "Intermediate probability",
            "50-75%",
            "Urgent evaluation for necrotizing fasciitis",
            "Consider urgent surgical consultation",
            "Close monitoring with frequent reassessment",
            "Urgent surgical evaluation recommended. Consider empirical broad-spectrum antibiotics, serial examinations for progression and ICU-level monitoring. Prepare for potential operative intervention.",
        )
    } else {
        (
            "High Risk",
            "Necrotizing fasciitis likely",
            ">75%",
            "Immediate operative intervention strongly recommended",
            "Urgent surgical consultation required",
            "Continuous monitoring in appropriate care setting",
            "URGENT surgical consultation and operative intervention. Start immediate broad-spectrum antibiotics (e.g., vancomycin + piperacillin/tazobactam + clindamycin), ICU-level hemodynamic support and aggressive fluid resuscitation. Serial debridements may be necessary.",
        )
    };
    let text = format!(
        "LRINEC score {score}/13 points. Risk category: {stage}. Probability of necrotizing fasciitis: {probability}. Recommended management: {management}. Surgical consultation: {surgical}. {plan} The LRINEC score should supplement, not replace, clinical judgment; high clinical suspicion warrants surgical consultation regardless of score."
    );

    Ok(
        CalculatorResponse::new(score, "points", Interpretation::new(stage, description, text))
            .with("probability", probability)
            .with("monitoring", monitoring)
            .with(
                "component_scores",
                json!({
                    "crp": crp,
                    "wbc": wbc,
                    "hemoglobin": hemoglobin,
                    "sodium": sodium,
                    "creatinine": creatinine,
                    "glucose": glucose,
                }),
            ),
    )
}
