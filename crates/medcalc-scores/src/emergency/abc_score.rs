//! ABC (Assessment of Blood Consumption) score for massive transfusion.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct AbcInput {
        pub penetrating_mechanism: YesNo,
        pub systolic_bp_90_or_less: YesNo,
        pub heart_rate_120_or_more: YesNo,
        pub positive_fast: YesNo,
    }
}

pub fn calculate(input: &AbcInput) -> CalcResult {
    let score = [
        input.penetrating_mechanism,
        input.systolic_bp_90_or_less,
        input.heart_rate_120_or_more,
        input.positive_fast,
    ]
    .iter()
    .map(|c| c.points(1))
    .sum::<i64>();

    let interpretation = if score >= 2 {
        Interpretation::new(
            "High Risk",
            "Massive transfusion likely",
            format!("ABC score {score}: a score of 2 or more predicts the need for massive transfusion (sensitivity about 75%, specificity about 86%). Activate the massive transfusion protocol."),
        )
    } else {
        Interpretation::new(
            "Low Risk",
            "Massive transfusion unlikely",
            format!("ABC score {score}: massive transfusion is unlikely. Continue resuscitation guided by clinical response and reassess."),
        )
    };

    Ok(CalculatorResponse::new(score, "points", interpretation))
}
