//! Get With The Guidelines–Heart Failure in-hospital mortality score.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct GwtgHfInput {
        pub age: i64 => 18..=120,
        pub systolic_bp: i64 => 50..=300,
        pub bun: i64 => 5..=200,
        pub heart_rate: i64 => 30..=200,
        pub sodium: i64 => 110..=160,
        pub copd: YesNo,
        pub black_race: YesNo,
    }
}

/// (exclusive upper bound on points, mortality %, level, description)
const MORTALITY: [(f64, f64, &str, &str); 9] = [
    (34.0, 1.0, "Very Low Risk", "Minimal mortality risk"),
    (51.0, 3.0, "Low Risk", "Low mortality risk"),
    (58.0, 7.5, "Moderate Risk", "Moderate mortality risk"),
    (62.0, 12.5, "High Risk", "High mortality risk"),
    (66.0, 17.5, "High Risk", "High mortality risk"),
    (71.0, 25.0, "Very High Risk", "Very high mortality risk"),
    (75.0, 35.0, "Very High Risk", "Very high mortality risk"),
    (79.0, 45.0, "Very High Risk", "Very high mortality risk"),
    (f64::INFINITY, 55.0, "Very High Risk", "Very high mortality risk"),
];

fn excess(value: i64, threshold: i64) -> f64 {
    (value - threshold).max(0) as f64
}

pub fn calculate(input: &GwtgHfInput) -> CalcResult {
    let raw = 25.0
        + excess(input.age, 65) * 0.7
        + excess(140, input.systolic_bp) * 0.08
        + excess(input.bun, 20) * 0.3
        + excess(input.heart_rate, 70) * 0.08
        + excess(140, input.sodium) * 0.5
        + input.copd.points(2) as f64
        + if input.black_race.is_yes() { 1.0 } else { 4.0 };
    let score = raw.clamp(0.0, 100.0);

    let (_, mortality, level, description) = MORTALITY
        .iter()
        .copied()
        .find(|(upper, ..)| score < *upper)
        .unwrap_or(MORTALITY[MORTALITY.len() - 1]);

    Ok(CalculatorResponse::new(
        round_to(mortality, 1),
        "percentage",
        interpret(input, score, mortality, level, description),
    )
    .with("gwtg_points", round_to(score, 1)))
}

fn interpret(
    input: &GwtgHfInput,
    score: f64,
    mortality: f64,
    level: &str,
    description: &str,
) -> Interpretation {
    let copd = if input.copd.is_yes() { "COPD present" } else { "no COPD" };
    let race = if input.black_race.is_yes() { "Black race" } else { "non-Black race" };
    let summary = format!(
        "Patient characteristics: {} years old, systolic BP {} mmHg, BUN {} mg/dL, heart rate {} bpm, sodium {} mEq/L, {copd}, {race}. GWTG-HF Score: {score:.0} points. ",
        input.age, input.systolic_bp, input.bun, input.heart_rate, input.sodium,
    );
    let recommendations = if mortality < 5.0 {
        "Low risk of in-hospital mortality (1-5%). Standard care with attention to optimization of heart failure therapy. Ensure guideline-directed medical therapy is maximized, provide patient education, and consider cardiology follow-up within 1-2 weeks of discharge."
    } else if mortality < 15.0 {
        "Moderate risk of in-hospital mortality (5-15%). Consider enhanced monitoring and aggressive heart failure management. Optimize diuretics, vasodilators, and neurohormonal blockade. Consider cardiology consultation, advanced heart failure evaluation, and closer outpatient follow-up within 3-7 days."
    } else if mortality < 30.0 {
        "High risk of in-hospital mortality (15-30%). Implement intensive monitoring and consider advanced therapies. Evaluate for advanced heart failure interventions including mechanical circulatory support, heart transplantation evaluation, or specialized heart failure care. Initiate palliative care discussions if appropriate."
    } else {
        "Very high risk of in-hospital mortality (>30%). Intensive care management with advanced heart failure therapies and end-of-life care planning discussions recommended. Consider ICU-level monitoring, inotropic support, mechanical circulatory support evaluation, and comprehensive palliative care involvement."
    };
    Interpretation::new(
        level,
        description,
        format!("{summary}Predicted in-hospital mortality risk: {mortality:.1}%. Risk Category: {level} ({description}). Clinical recommendations: {recommendations} Important considerations: The GWTG-HF risk score provides validated in-hospital mortality prediction for heart failure patients. This score is applicable to patients with both preserved and reduced ejection fraction. Use in conjunction with clinical judgment for comprehensive heart failure management, advanced therapy consideration, and care planning discussions with patients and families."),
    )
}
