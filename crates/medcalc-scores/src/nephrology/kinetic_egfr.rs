//! Kinetic eGFR (Chen): GFR estimate while creatinine is not at steady state.
//!
//! Baseline eGFR comes from the 4-variable MDRD equation; volume of
//! distribution and BSA use standard adult body habitus by sex.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex};

const MDRD_CONSTANT: f64 = 175.0;
const MINUTES_PER_DAY: f64 = 1440.0;

choice! {
    pub enum Race {
        Black => "black",
        NonBlack => "non_black",
    }
}

calculator_input! {
    pub struct KineticEgfrInput {
        pub age: i64 => 18..=120,
        pub sex: Sex,
        pub race: Race,
        pub baseline_creatinine: f64 => 0.1..=15.0,
        pub creatinine_1: f64 => 0.1..=25.0,
        pub creatinine_2: f64 => 0.1..=25.0,
        /// Interval between the two creatinine draws.
        pub time_hours: f64 => 1.0..=168.0,
    }
}

impl KineticEgfrInput {

    fn mdrd_egfr(&self) -> f64 {
        let mut egfr = MDRD_CONSTANT * self.baseline_creatinine.powf(-1.154) * (self.age as f64).powf(-0.203);
        if self.sex.is_female() {
            egfr *= 0.742;
        }
        if self.race == Race::Black {
            egfr *= 1.212;
        }
        egfr
    }

    fn kinetic_egfr(&self, baseline: f64) -> f64 {
        // (weight kg, height cm, Vd mL/kg)
        let (weight, height, vd_per_kg) = if self.sex.is_female() { (60.0, 160.0, 500.0) } else { (70.0, 170.0, 600.0) };
        let vd = vd_per_kg * weight;
        let bsa = 0.007184 * f64::powf(weight, 0.425) * f64::powf(height, 0.725);
        let delta = self.creatinine_2 - self.creatinine_1;
        let days = self.time_hours / 24.0;
        (baseline - delta * vd / (days * bsa * MINUTES_PER_DAY)).max(0.0)
    }
}

pub fn calculate(input: &KineticEgfrInput) -> CalcResult {
    let baseline = input.mdrd_egfr();
    let kinetic = input.kinetic_egfr(baseline);
    let change = kinetic - baseline;
    let percent = if baseline > 0.0 { change / baseline * 100.0 } else { 0.0 };

    let (stage, description, guidance) = if kinetic >= 60.0 {
        (
            "Low AKI Risk",
            "Normal/near-normal kidney function",
            "Preserved kidney function with low AKI risk. Continue routine monitoring. \
             Consider nephrotoxin avoidance and maintain adequate hydration.",
        )
    } else if kinetic >= 30.0 {
        (
            "Intermediate AKI Risk",
            "Moderate kidney dysfunction",
            "Moderate kidney impairment with intermediate AKI risk. Increase monitoring frequency, avoid nephrotoxins, \
             ensure adequate perfusion, and consider nephrology consultation if deteriorating.",
        )
    } else if kinetic >= 15.0 {
        (
            "High AKI Risk",
            "Severe kidney dysfunction",
            "Severe kidney impairment with high AKI risk. Close monitoring required, strict nephrotoxin avoidance, \
             optimize hemodynamics, and nephrology consultation recommended. Consider RRT preparation.",
        )
    } else {
        (
            "Very High AKI Risk",
            "Kidney failure",
            "Kidney failure with very high AKI risk. Urgent nephrology consultation required. Consider immediate RRT \
             initiation, optimize fluid status, and manage uremic complications.",
        )
    };

    let mut text = format!(
        "Kinetic eGFR: {kinetic:.1} mL/min/1.73 m² (baseline: {baseline:.1}). \
         Change from baseline: {change:+.1} mL/min/1.73 m² ({percent:+.1}%). "
    );
    if kinetic < 30.0 {
        text.push_str("keGFR <30 mL/min/1.73 m² is 90% specific for acute kidney injury. ");
    }
    text.push_str(guidance);

    Ok(
        CalculatorResponse::new(round_to(kinetic, 1), "mL/min/1.73 m²", Interpretation::new(stage, description, text))
            .with("baseline_egfr", round_to(baseline, 1))
            .with("change_in_gfr", round_to(change, 1)),
    )
}
