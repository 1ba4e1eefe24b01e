//! Fatty Liver Index (Bedogni 2006).
//!
//! `y = 0.953 ln(TG) + 0.139 BMI + 0.718 ln(GGT) + 0.053 waist - 15.745`,
//! `FLI = e^y / (1 + e^y) * 100`.

use medcalc_core::math::{fixed, logistic, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

calculator_input! {
    pub struct FattyLiverIndexInput {
        pub triglycerides: f64 => 10.0..=5000.0,
        pub bmi: f64 => 10.0..=80.0,
        pub ggt: f64 => 1.0..=3000.0,
        pub waist_circumference: f64 => 40.0..=250.0,
    }
}

pub fn calculate(input: &FattyLiverIndexInput) -> CalcResult {
    let y = 0.953 * input.triglycerides.ln() + 0.139 * input.bmi + 0.718 * input.ggt.ln()
        + 0.053 * input.waist_circumference
        - 15.745;
    let fli = round_to(logistic(y) * 100.0, 1);

    Ok(CalculatorResponse::new(fli, "points", interpret(fli)))
}

fn interpret(fli: f64) -> Interpretation {
    let shown = fixed(fli, 1);
    if fli < 30.0 {
        Interpretation::new(
            "Low",
            "Hepatic steatosis ruled out",
            format!("FLI {shown}: hepatic steatosis is ruled out (negative likelihood ratio 0.2)."),
        )
    } else if fli < 60.0 {
        Interpretation::new(
            "Intermediate",
            "Indeterminate for hepatic steatosis",
            format!("FLI {shown}: indeterminate. Hepatic steatosis can be neither ruled in nor ruled out; consider ultrasound."),
        )
    } else {
        Interpretation::new(
            "High",
            "Hepatic steatosis ruled in",
            format!("FLI {shown}: hepatic steatosis is ruled in (positive likelihood ratio 4.3). Assess for metabolic risk factors and liver fibrosis."),
        )
    }
}
