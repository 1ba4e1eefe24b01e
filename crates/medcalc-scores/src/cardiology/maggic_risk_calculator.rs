//! MAGGIC integer risk score for mortality in chronic heart failure.

use medcalc_core::math::banded_points;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};

choice! {
    pub enum Nyha {
        I => "I",
        II => "II",
        III => "III",
        IV => "IV",
    }
}

calculator_input! {
    pub struct MaggicInput {
        pub age: i64 => 18..=120,
        pub gender: Sex,
        pub ejection_fraction: i64 => 10..=80,
        pub nyha_class: Nyha,
        pub creatinine: f64 => 0.3..=15.0,
        pub systolic_bp: i64 => 60..=250,
        pub bmi: f64 => 10.0..=60.0,
        pub diabetes: YesNo,
        pub copd: YesNo,
        pub current_smoker: YesNo,
        pub hf_duration_over_18_months: YesNo,
        pub beta_blocker: YesNo,
        pub ace_arb: YesNo,
    }
}

/// Age weighting depends on whether ejection fraction is reduced (≤40%).
const AGE_REDUCED_EF: [(f64, i64); 7] = [
    (55.0, 0), (60.0, 1), (65.0, 2), (70.0, 3), (75.0, 5), (80.0, 6), (f64::INFINITY, 8),
];
const AGE_PRESERVED_EF: [(f64, i64); 7] = [
    (55.0, 0), (60.0, 2), (65.0, 4), (70.0, 6), (75.0, 8), (80.0, 10), (f64::INFINITY, 13),
];
const EJECTION_FRACTION: [(f64, i64); 6] =
    [(19.0, 6), (24.0, 5), (29.0, 3), (34.0, 2), (39.0, 1), (f64::INFINITY, 0)];
const CREATININE: [(f64, i64); 6] =
    [(1.2, 0), (1.4, 1), (1.8, 2), (2.3, 3), (2.8, 4), (f64::INFINITY, 5)];

fn systolic_points(sbp: i64) -> i64 {
    match sbp {
        ..100 => 5,
        100..110 => 3,
        110..120 => 2,
        120..140 => 1,
        _ => 0,
    }
}

fn bmi_points(bmi: f64) -> i64 {
    if bmi < 18.0 {
        5
    } else if bmi < 22.0 {
        3
    } else if bmi < 25.0 {
        2
    } else if bmi < 30.0 {
        1
    } else {
        0
    }
}

pub fn calculate(input: &MaggicInput) -> CalcResult {
    let age_bands: &[(f64, i64)] = if input.ejection_fraction <= 40 {
        &AGE_REDUCED_EF
    } else {
        &AGE_PRESERVED_EF
    };
    let nyha_points = match input.nyha_class {
        Nyha::I => 0,
        Nyha::II => 2,
        Nyha::III => 6,
        Nyha::IV => 8,
    };

    let score = banded_points(input.age as f64, age_bands)
        + if input.gender == Sex::Male { 1 } else { 0 }
        + banded_points(input.ejection_fraction as f64, &EJECTION_FRACTION)
        + nyha_points
        + banded_points(input.creatinine, &CREATININE)
        + systolic_points(input.systolic_bp)
        + bmi_points(input.bmi)
        + input.diabetes.points(3)
        + input.copd.points(2)
        + input.current_smoker.points(1)
        + input.hf_duration_over_18_months.points(2)
        + if input.beta_blocker.is_yes() { 0 } else { 3 }
        + if input.ace_arb.is_yes() { 0 } else { 1 };

    Ok(CalculatorResponse::new(score, "points", interpret(score)))
}

fn interpret(score: i64) -> Interpretation {
    match score {
        ..=15 => Interpretation::new(
            "Low Risk",
            "Low mortality risk",
            "Low risk for 1-year (<5%) and 3-year (<15%) mortality. Standard heart failure management appropriate. Continue evidence-based medical therapy including ACE-I/ARB, beta-blockers, and lifestyle modifications. Regular monitoring and optimization of medical therapy recommended.",
        ),
        16..=25 => Interpretation::new(
            "Intermediate Risk",
            "Intermediate mortality risk",
            "Intermediate risk for 1-year (5-15%) and 3-year (15-40%) mortality. Consider optimized medical therapy and closer monitoring. Ensure maximal tolerated evidence-based therapy. Consider device therapy evaluation if indicated. Regular cardiology follow-up recommended.",
        ),
        26..=35 => Interpretation::new(
            "High Risk",
            "High mortality risk",
            "High risk for 1-year (15-40%) and 3-year (40-70%) mortality. Aggressive management and advanced therapies may be indicated. Consider referral to advanced heart failure specialist. Evaluate for device therapy (ICD/CRT). Consider advanced therapies including transplant evaluation if appropriate.",
        ),
        _ => Interpretation::new(
            "Very High Risk",
            "Very high mortality risk",
            "Very high risk for 1-year (>40%) and 3-year (>70%) mortality. Urgent referral to advanced heart failure center recommended. Consider advanced heart failure therapies including mechanical circulatory support, heart transplant evaluation, or palliative care discussions. Intensive monitoring and maximal medical therapy essential.",
        ),
    }
}
