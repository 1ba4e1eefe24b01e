//! SCORE2: 10-year risk of fatal and non-fatal cardiovascular disease in
//! European adults aged 40-69, by risk region.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex};

choice! {
    pub enum SmokingStatus {
        Current => "current",
        Other => "other",
    }
}

choice! {
    pub enum RiskRegion {
        Low => "low",
        Moderate => "moderate",
        High => "high",
        VeryHigh => "very_high",
    }
}

calculator_input! {
    pub struct Score2Input {
        pub sex: Sex,
        pub age: i64 => 40..=69,
        pub smoking: SmokingStatus,
        pub systolic_bp: f64 => 80.0..=250.0,
        pub total_cholesterol: f64 => 2.0..=12.0,
        pub hdl_cholesterol: f64 => 0.5..=3.5,
        pub risk_region: RiskRegion,
    }
}

/// Baseline 10-year survival followed by the coefficients for age, SBP,
/// total cholesterol, HDL, smoking, age×HDL and age×smoking.
type Model = (f64, [f64; 7]);

fn model(sex: Sex, region: RiskRegion) -> Model {
    match (sex, region) {
        (Sex::Male, RiskRegion::Low) => (0.9605, [0.3742, 0.3018, 0.2900, -0.4231, 0.6012, -0.0755, -0.0701]),
        (Sex::Male, RiskRegion::Moderate) => (0.9434, [0.3744, 0.3016, 0.2898, -0.4230, 0.6014, -0.0756, -0.0700]),
        (Sex::Male, RiskRegion::High) => (0.9281, [0.3746, 0.3015, 0.2896, -0.4229, 0.6015, -0.0757, -0.0699]),
        (Sex::Male, RiskRegion::VeryHigh) => (0.8954, [0.3748, 0.3014, 0.2894, -0.4228, 0.6016, -0.0758, -0.0698]),
        (Sex::Female, RiskRegion::Low) => (0.9766, [0.4648, 0.3131, 0.1471, -0.5347, 0.7744, -0.0665, -0.0790]),
        (Sex::Female, RiskRegion::Moderate) => (0.9701, [0.4650, 0.3130, 0.1470, -0.5346, 0.7746, -0.0666, -0.0789]),
        (Sex::Female, RiskRegion::High) => (0.9634, [0.4652, 0.3129, 0.1469, -0.5345, 0.7747, -0.0667, -0.0788]),
        (Sex::Female, RiskRegion::VeryHigh) => (0.9511, [0.4654, 0.3128, 0.1468, -0.5344, 0.7748, -0.0668, -0.0787]),
    }
}

pub fn calculate(input: &Score2Input) -> CalcResult {
    let cage = (input.age - 60) as f64 / 5.0;
    let csbp = (input.systolic_bp - 120.0) / 20.0;
    let ctchol = input.total_cholesterol - 6.0;
    let chdl = (input.hdl_cholesterol - 1.3) / 0.5;
    let smoking = if input.smoking == SmokingStatus::Current { 1.0 } else { 0.0 };

    let (s0, b) = model(input.sex, input.risk_region);
    let x = b[0] * cage
        + b[1] * csbp
        + b[2] * ctchol
        + b[3] * chdl
        + b[4] * smoking
        + b[5] * cage * chdl
        + b[6] * cage * smoking;
    let risk = ((1.0 - s0.powf(x.exp())) * 100.0).clamp(0.0, 100.0);

    Ok(CalculatorResponse::new(round_to(risk, 1), "%", interpret(input.age, risk)))
}

fn interpret(age: i64, risk: f64) -> Interpretation {
    let description = format!("{risk:.1}% 10-year risk");
    let (low_cut, high_cut) = if age < 50 { (2.5, 7.5) } else { (5.0, 10.0) };
    if risk < low_cut {
        let text = if age < 50 {
            "Low to moderate cardiovascular risk. Focus on lifestyle counseling including smoking cessation, healthy diet, and regular physical activity. Generally, no specific risk factor treatment needed unless individual risk factors are severely elevated."
        } else {
            "Low to moderate cardiovascular risk. Focus on lifestyle interventions including smoking cessation, healthy diet, and regular physical activity. Generally, no specific risk factor treatment needed unless individual risk factors are severely elevated."
        };
        Interpretation::new("Low to Moderate Risk", description, text)
    } else if risk < high_cut {
        let text = if age < 50 {
            "High cardiovascular risk. Consider risk factor treatment, particularly for LDL-C reduction with statin therapy. Lifestyle modification remains essential. Consider blood pressure management if hypertensive."
        } else {
            "High cardiovascular risk. Consider risk factor treatment including lipid-lowering therapy (statins) and blood pressure management. Lifestyle modification remains essential."
        };
        Interpretation::new("High Risk", description, text)
    } else {
        let text = if age < 50 {
            "Very high cardiovascular risk. Recommend aggressive risk factor treatment including high-intensity statin therapy, optimal blood pressure control, and intensive lifestyle modification. Consider aspirin if bleeding risk is low."
        } else {
            "Very high cardiovascular risk. Recommend intensive risk factor treatment including high-intensity statin therapy, optimal blood pressure control, and aggressive lifestyle modification. Consider aspirin if bleeding risk is low."
        };
        Interpretation::new("Very High Risk", description, text)
    }
}
