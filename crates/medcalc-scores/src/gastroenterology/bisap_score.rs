//! BISAP score for in-hospital mortality in acute pancreatitis.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct BisapInput {
        pub bun_over_25: YesNo,
        pub impaired_mental_status: YesNo,
        pub sirs: YesNo,
        pub age_over_60: YesNo,
        pub pleural_effusion: YesNo,
    }
}

/// Observed in-hospital mortality (%) by score 0..=5.
const MORTALITY: [f64; 6] = [0.1, 0.4, 1.6, 3.6, 7.4, 9.5];

pub fn calculate(input: &BisapInput) -> CalcResult {
    let score = [
        input.bun_over_25,
        input.impaired_mental_status,
        input.sirs,
        input.age_over_60,
        input.pleural_effusion,
    ]
    .iter()
    .map(|c| c.points(1))
    .sum::<i64>();
    let mortality = MORTALITY[score as usize];

    let interpretation = if score <= 2 {
        Interpretation::new(
            "Low Risk",
            "Low mortality risk",
            format!("BISAP score {score}: low risk of in-hospital mortality ({mortality}%). Standard supportive care with fluid resuscitation and monitoring."),
        )
    } else {
        Interpretation::new(
            "High Risk",
            "High mortality risk",
            format!("BISAP score {score}: high risk of in-hospital mortality ({mortality}%) and of organ failure. Consider ICU or high-dependency monitoring and early aggressive supportive care."),
        )
    };

    Ok(CalculatorResponse::new(score, "points", interpretation).with("mortality_risk", mortality))
}
