//! GARFIELD-AF: 1- and 2-year risk of death, stroke/systemic embolism and
//! major bleeding in newly diagnosed atrial fibrillation.

use medcalc_core::math::round_to;
use medcalc_core::{
    calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo,
};

choice! {
    pub enum Race {
        Asian => "asian",
        Black => "black",
        Other => "other",
    }
}

calculator_input! {
    pub struct GarfieldAfInput {
        pub age: i64 => 18..=120,
        pub weight: f64 => 30.0..=300.0,
        pub race: Race,
        pub sex: Sex,
        pub pulse: i64 => 30..=250,
        pub diastolic_bp: i64 => 40..=150,
        pub history_of_bleeding: YesNo,
        pub heart_failure: YesNo,
        pub history_of_stroke: YesNo,
        pub chronic_kidney_disease: YesNo,
        pub vascular_disease: YesNo,
        pub diabetes_mellitus: YesNo,
        pub current_smoking: YesNo,
        pub dementia: YesNo,
        pub antiplatelet_use: YesNo,
        pub carotid_disease: YesNo,
    }
}

/// Intercept followed by one coefficient per predictor, in the order of
/// [`predictors`].
type Model = [f64; 18];

const MORTALITY_1Y: Model = [
    -7.8435, 0.0655, -0.0056, -0.4770, -0.2765, 0.3655, 0.0056, -0.0089, 0.6656, 1.0139,
    0.4219, 0.6919, 0.2658, 0.1540, 0.2262, 1.2963, 0.2469, 0.2624,
];
const MORTALITY_2Y: Model = [
    -7.4528, 0.0634, -0.0051, -0.4356, -0.2543, 0.3421, 0.0052, -0.0083, 0.6198, 0.9458,
    0.3825, 0.6438, 0.2485, 0.1445, 0.2112, 1.2056, 0.2298, 0.2447,
];
const STROKE_1Y: Model = [
    -8.2581, 0.0421, -0.0078, 0.1875, 0.4538, -0.1369, 0.0029, -0.0051, 0.2842, 0.2658,
    1.1756, 0.2847, 0.3895, 0.2658, 0.1947, 0.4219, 0.1584, 0.5187,
];
const STROKE_2Y: Model = [
    -7.8974, 0.0405, -0.0072, 0.1798, 0.4365, -0.1278, 0.0028, -0.0047, 0.2736, 0.2554,
    1.1296, 0.2738, 0.3742, 0.2554, 0.1869, 0.4055, 0.1522, 0.4982,
];
const BLEEDING_1Y: Model = [
    -9.1584, 0.0298, -0.0065, -0.5869, -0.1542, -0.2847, 0.0045, -0.0078, 1.2639, 0.1584,
    0.4658, 0.5487, 0.2154, 0.0847, 0.2639, 0.6219, 0.4985, 0.1869,
];
const BLEEDING_2Y: Model = [
    -8.7896, 0.0287, -0.0061, -0.5635, -0.1481, -0.2736, 0.0043, -0.0075, 1.2145, 0.1522,
    0.4475, 0.5271, 0.2069, 0.0814, 0.2536, 0.5974, 0.4792, 0.1796,
];

fn indicator(present: bool) -> f64 {
    if present { 1.0 } else { 0.0 }
}

fn predictors(input: &GarfieldAfInput) -> [f64; 17] {
    [
        input.age as f64,
        input.weight,
        indicator(input.race == Race::Asian),
        indicator(input.race == Race::Black),
        indicator(input.sex == Sex::Male),
        input.pulse as f64,
        input.diastolic_bp as f64,
        indicator(input.history_of_bleeding.is_yes()),
        indicator(input.heart_failure.is_yes()),
        indicator(input.history_of_stroke.is_yes()),
        indicator(input.chronic_kidney_disease.is_yes()),
        indicator(input.vascular_disease.is_yes()),
        indicator(input.diabetes_mellitus.is_yes()),
        indicator(input.current_smoking.is_yes()),
        indicator(input.dementia.is_yes()),
        indicator(input.antiplatelet_use.is_yes()),
        indicator(input.carotid_disease.is_yes()),
    ]
}

/// Complementary log-log link: `100 * (1 - exp(-exp(lp)))`.
fn risk(model: &Model, x: &[f64; 17]) -> f64 {
    let lp = model[0]
        + model[1..]
            .iter()
            .zip(x)
            .map(|(beta, value)| beta * value)
            .sum::<f64>();
    100.0 * (1.0 - (-lp.exp()).exp())
}

#[derive(Debug, Clone, Copy)]
struct Risks {
    mortality_1y: f64,
    mortality_2y: f64,
    stroke_1y: f64,
    stroke_2y: f64,
    bleeding_1y: f64,
    bleeding_2y: f64,
}

pub fn calculate(input: &GarfieldAfInput) -> CalcResult {
    let x = predictors(input);
    let r = Risks {
        mortality_1y: risk(&MORTALITY_1Y, &x),
        mortality_2y: risk(&MORTALITY_2Y, &x),
        stroke_1y: risk(&STROKE_1Y, &x),
        stroke_2y: risk(&STROKE_2Y, &x),
        bleeding_1y: risk(&BLEEDING_1Y, &x),
        bleeding_2y: risk(&BLEEDING_2Y, &x),
    };

    Ok(
        CalculatorResponse::new(round_to(r.mortality_1y, 2), "percentage", interpret(&r))
            .with("mortality_1_year", round_to(r.mortality_1y, 2))
            .with("mortality_2_year", round_to(r.mortality_2y, 2))
            .with("stroke_se_1_year", round_to(r.stroke_1y, 2))
            .with("stroke_se_2_year", round_to(r.stroke_2y, 2))
            .with("major_bleeding_1_year", round_to(r.bleeding_1y, 2))
            .with("major_bleeding_2_year", round_to(r.bleeding_2y, 2)),
    )
}

fn interpret(r: &Risks) -> Interpretation {
    let max_risk = r.mortality_1y.max(r.stroke_1y).max(r.bleeding_1y);
    let one_year = format!(
        "1-year risks of {:.1}% mortality, {:.1}% stroke/systemic embolism, and {:.1}% major bleeding.",
        r.mortality_1y, r.stroke_1y, r.bleeding_1y
    );
    let two_year = format!(
        "2-year risks: {:.1}% mortality, {:.1}% stroke/SE, {:.1}% bleeding.",
        r.mortality_2y, r.stroke_2y, r.bleeding_2y
    );
    if max_risk < 2.0 {
        Interpretation::new(
            "Low Risk",
            "Low risk across all outcomes",
            format!("Low risk profile with {one_year} Standard anticoagulation management appropriate if indicated for stroke prevention. Consider individual patient factors and preferences when making treatment decisions. Regular monitoring per standard guidelines recommended."),
        )
    } else if max_risk < 5.0 {
        Interpretation::new(
            "Moderate Risk",
            "Moderate risk requiring careful monitoring",
            format!("Moderate risk profile with {one_year} {two_year} Consider individualized approach to anticoagulation with careful benefit-risk assessment. Regular follow-up every 3-6 months recommended to monitor clinical status and treatment response."),
        )
    } else {
        Interpretation::new(
            "High Risk",
            "High risk requiring intensive management",
            format!("High risk profile with {one_year} {two_year} Requires intensive management with frequent monitoring (every 1-3 months). Careful consideration of anticoagulation benefits versus bleeding risks essential. Consider specialist consultation for complex decision-making. Optimize management of modifiable risk factors."),
        )
    }
}
