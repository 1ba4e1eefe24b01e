//! EHMRG: 7-day mortality in acute heart failure presenting to the ED.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct EhmrgInput {
        pub age: i64 => 18..=120,
        pub ems_transport: YesNo,
        pub systolic_bp: i64 => 40..=300,
        pub heart_rate: i64 => 30..=200,
        pub oxygen_saturation: i64 => 50..=100,
        pub creatinine: f64 => 0.1..=20.0,
        pub potassium: f64 => 2.0..=8.0,
        pub troponin_elevated: YesNo,
        pub active_cancer: YesNo,
        pub metolazone_use: YesNo,
    }
}

const ADJUSTMENT: f64 = 12.0;

pub fn calculate(input: &EhmrgInput) -> CalcResult {
    let potassium_points = if input.potassium <= 3.9 {
        5.0
    } else if input.potassium >= 4.6 {
        30.0
    } else {
        0.0
    };

    let score = 2.0 * input.age as f64
        + input.ems_transport.points(60) as f64
        - input.systolic_bp.min(160) as f64
        + input.heart_rate.clamp(80, 120) as f64
        - 2.0 * input.oxygen_saturation.min(92) as f64
        + 20.0 * input.creatinine
        + potassium_points
        + input.troponin_elevated.points(60) as f64
        + input.active_cancer.points(45) as f64
        + input.metolazone_use.points(60) as f64
        + ADJUSTMENT;

    Ok(CalculatorResponse::new(round_to(score, 1), "points", interpret(score)))
}

fn interpret(score: f64) -> Interpretation {
    if score <= -49.1 {
        Interpretation::new(
            "Risk Group 1 (Very Low)",
            "Very low 7-day mortality risk",
            "7-day mortality rate 0.5%. Very low risk for short-term mortality. Standard heart failure management with routine follow-up appropriate. Consider early discharge planning if clinically stable.",
        )
    } else if score <= -15.9 {
        Interpretation::new(
            "Risk Group 2 (Low)",
            "Low 7-day mortality risk",
            "7-day mortality rate 0.3%. Low risk for short-term mortality. Standard heart failure care with close outpatient follow-up. May be suitable for accelerated discharge pathway if appropriate support available.",
        )
    } else if score <= 17.9 {
        Interpretation::new(
            "Risk Group 3 (Intermediate)",
            "Intermediate 7-day mortality risk",
            "7-day mortality rate 0.7%. Intermediate risk requiring careful monitoring. Standard inpatient management with attention to optimization of heart failure therapy. Ensure adequate follow-up arrangements.",
        )
    } else if score <= 56.5 {
        Interpretation::new(
            "Risk Group 4 (High)",
            "High 7-day mortality risk",
            "7-day mortality rate 2.1%. High risk requiring intensive monitoring and aggressive management. Consider cardiology consultation, advanced heart failure therapies, and close inpatient observation.",
        )
    } else if score <= 89.3 {
        Interpretation::new(
            "Risk Group 5a (Very High)",
            "Very high 7-day mortality risk",
            "7-day mortality rate 3.3%. Very high risk requiring immediate intensive intervention. Strong consideration for ICU-level care, advanced heart failure specialist consultation, and evaluation for advanced therapies.",
        )
    } else {
        Interpretation::new(
            "Risk Group 5b (Highest)",
            "Highest 7-day mortality risk",
            "7-day mortality rate 8.0%. Highest risk category requiring immediate intensive care. Urgent cardiology/heart failure specialist consultation, ICU-level monitoring, and consideration of advanced mechanical support or palliative care discussions.",
        )
    }
}
