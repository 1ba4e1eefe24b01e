//! AST to Platelet Ratio Index: `(AST / AST ULN) / platelets (10⁹/L) * 100`.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct ApriInput {
        pub ast: f64 => 1.0..=10000.0,
        pub ast_upper_limit: f64 => 10.0..=100.0,
        pub platelet_count: f64 => 1.0..=1000.0,
    }
}

pub fn calculate(input: &ApriInput) -> CalcResult {
    let apri = (input.ast / input.ast_upper_limit) / input.platelet_count * 100.0;
    let value = round_to(apri, 2);

    Ok(CalculatorResponse::new(value, "ratio", interpret(apri))
        .with("ast_ratio", round_to(input.ast / input.ast_upper_limit, 2)))
}

fn interpret(apri: f64) -> Interpretation {
    let shown = fixed(apri, 2);
    if apri <= 0.5 {
        Interpretation::new(
            "Low Risk",
            "Significant fibrosis unlikely",
            format!("APRI {shown}: significant fibrosis and cirrhosis are unlikely (high negative predictive value at ≤0.5). Routine monitoring of liver disease is appropriate."),
        )
    } else if apri <= 1.5 {
        Interpretation::new(
            "Moderate Risk",
            "Indeterminate for significant fibrosis",
            format!("APRI {shown}: indeterminate range. Significant fibrosis cannot be excluded; consider elastography or other non-invasive fibrosis assessment."),
        )
    } else if apri <= 2.0 {
        Interpretation::new(
            "High Risk",
            "Significant fibrosis likely",
            format!("APRI {shown}: significant fibrosis is likely (>1.5). Hepatology referral and further staging are recommended."),
        )
    } else {
        Interpretation::new(
            "Very High Risk",
            "Cirrhosis likely",
            format!("APRI {shown}: cirrhosis is likely (>2.0). Refer to hepatology and begin cirrhosis surveillance including hepatocellular carcinoma and varices screening."),
        )
    }
}
