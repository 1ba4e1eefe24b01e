//! FIB-4 index for liver fibrosis: `(age * AST) / (platelets * sqrt(ALT))`.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct Fib4Input {
        pub age: i64 => 18..=120,
        pub ast: f64 => 1.0..=10000.0,
        pub alt: f64 => 1.0..=10000.0,
        pub platelet_count: f64 => 1.0..=1000.0,
    }
}

pub fn calculate(input: &Fib4Input) -> CalcResult {
    let fib4 = (input.age as f64 * input.ast) / (input.platelet_count * input.alt.sqrt());

    Ok(CalculatorResponse::new(round_to(fib4, 2), "index", interpret(fib4)))
}

fn interpret(fib4: f64) -> Interpretation {
    let shown = fixed(fib4, 2);
    if fib4 <= 1.45 {
        Interpretation::new(
            "Low risk",
            "Advanced fibrosis unlikely",
            format!("FIB-4 {shown}: advanced fibrosis (F3-F4) is unlikely (negative predictive value about 90%). Reassess periodically; no immediate need for liver biopsy."),
        )
    } else if fib4 <= 3.25 {
        Interpretation::new(
            "Indeterminate",
            "Indeterminate for advanced fibrosis",
            format!("FIB-4 {shown}: indeterminate range. Further evaluation with elastography or another non-invasive test is recommended."),
        )
    } else {
        Interpretation::new(
            "High risk",
            "Advanced fibrosis likely",
            format!("FIB-4 {shown}: advanced fibrosis is likely (positive predictive value about 65%). Refer to hepatology for further assessment."),
        )
    }
}
