//! Single-pool Kt/V (Daugirdas second generation) and urea reduction ratio.

use medcalc_core::math::{ensure, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const HD_MINIMUM: f64 = 1.2;
const HD_TARGET: f64 = 1.3;
const PD_TARGET: f64 = 1.7;
/// Urea generation during the session, per hour.
const UREA_GENERATION: f64 = 0.008;

choice! {
    pub enum DialysisType {
        Hemodialysis => "hemodialysis",
        PeritonealDialysis => "peritoneal_dialysis",
    }
}

calculator_input! {
    pub struct KtvInput {
        /// mg/dL
        pub pre_dialysis_bun: f64 => 5.0..=200.0,
        pub post_dialysis_bun: f64 => 2.0..=150.0,
        pub dialysis_time_hours: f64 => 0.0..=24.0,
        /// L
        pub ultrafiltration_volume: f64,
        /// kg
        pub post_dialysis_weight: f64 => 20.0..=300.0,
        pub dialysis_type: DialysisType,
    }
}

impl KtvInput {
    fn validate(&self) -> CalcResult<()> {
        ensure(
            self.post_dialysis_bun < self.pre_dialysis_bun,
            "Post-dialysis BUN must be lower than pre-dialysis BUN",
        )?;
        ensure(self.dialysis_time_hours > 0.0, "Dialysis time must be a positive number")?;
        ensure(
            self.ultrafiltration_volume >= 0.0,
            "Ultrafiltration volume must be a non-negative number",
        )?;
        Ok(())
    }
}

/// (stage, description, meets guidelines, guidance)
fn adequacy(ktv: f64, dialysis: DialysisType) -> (&'static str, &'static str, bool, String) {
    match dialysis {
        DialysisType::Hemodialysis if ktv < HD_MINIMUM => (
            "Inadequate",
            "Below minimum adequacy threshold",
            false,
            format!(
                "KDOQI guidelines recommend minimum Kt/V ≥{HD_MINIMUM} and target ≥{HD_TARGET} for hemodialysis. \
                 Consider increasing dialysis time, frequency, or optimizing dialyzer efficiency. "
            ),
        ),
        DialysisType::Hemodialysis if ktv < HD_TARGET => (
            "Minimum Adequate (HD)",
            "Meets minimum hemodialysis adequacy",
            true,
            format!(
                "Kt/V meets minimum adequacy ({HD_MINIMUM}) but below target ({HD_TARGET}). \
                 Consider optimization to achieve target Kt/V for improved outcomes. "
            ),
        ),
        DialysisType::Hemodialysis => (
            "Target Adequate (HD)",
            "Meets target hemodialysis adequacy",
            true,
            format!("Kt/V meets KDOQI target guidelines (≥{HD_TARGET}). Adequate dialysis clearance achieved. "),
        ),
        DialysisType::PeritonealDialysis if ktv < PD_TARGET => (
            "Inadequate",
            "Below peritoneal dialysis adequacy threshold",
            false,
            format!(
                "ISPD and KDOQI guidelines recommend Kt/V ≥{PD_TARGET}/week for peritoneal dialysis. Consider \
                 increasing dwell times, exchange volumes, or daily exchange frequency. Assess residual renal function \
                 contribution. "
            ),
        ),
        DialysisType::PeritonealDialysis => (
            "Target Adequate (PD)",
            "Meets peritoneal dialysis adequacy",
            true,
            format!(
                "Kt/V meets ISPD/KDOQI guidelines (≥{PD_TARGET}/week) for peritoneal dialysis. Adequate clearance achieved. "
            ),
        ),
    }
}

pub fn calculate(input: &KtvInput) -> CalcResult {
    input.validate()?;

    let ratio = input.post_dialysis_bun / input.pre_dialysis_bun;
    let corrected = ratio - UREA_GENERATION * input.dialysis_time_hours;
    ensure(
        corrected > 0.0,
        "Invalid BUN ratio or dialysis time leading to negative logarithm argument",
    )?;
    let first_term = -corrected.ln();
    let second_term = (4.0 - 3.5 * ratio) * (input.ultrafiltration_volume / input.post_dialysis_weight);
    let ktv = round_to(first_term + second_term, 3);
    let urr = round_to((input.pre_dialysis_bun - input.post_dialysis_bun) / input.pre_dialysis_bun * 100.0, 1);

    let dialysis = input.dialysis_type;
    let (stage, description, meets, guidance) = adequacy(ktv, dialysis);

    let mut text = format!(
        "Kt/V = {ktv:.3} for {} treatment. Urea Reduction Ratio (URR) = {urr:.1}%. ",
        dialysis.to_string().replace('_', " "),
    );
    text.push_str(if meets {
        "This Kt/V value meets clinical adequacy guidelines. "
    } else {
        "This Kt/V value is below recommended adequacy thresholds. "
    });
    text.push_str(&guidance);
    if dialysis == DialysisType::Hemodialysis && ktv < HD_MINIMUM {
        text.push_str(&format!("URR target is ≥65% (current: {urr:.1}%). "));
    }
    text.push_str(
        "Monitor dialysis adequacy regularly (monthly for hemodialysis, every 4-6 months for peritoneal dialysis). \
         Consider patient symptoms, laboratory values, and overall clinical status in addition to Kt/V.",
    );
    if ktv > HD_TARGET {
        text.push_str(
            " Note: Daugirdas equation may overestimate Kt/V when values exceed 1.3. \
             Consider equilibrated Kt/V (eKt/V) for more accurate assessment.",
        );
    }

    let thresholds = match dialysis {
        DialysisType::Hemodialysis => json!({ "minimum": HD_MINIMUM, "target": HD_TARGET }),
        DialysisType::PeritonealDialysis => json!({ "target": PD_TARGET }),
    };

    Ok(CalculatorResponse::new(ktv, "dimensionless", Interpretation::new(stage, description, text))
        .with("urea_reduction_ratio", urr)
        .with("bun_ratio", ratio)
        .with("dialysis_type", dialysis.to_string())
        .with("meets_guidelines", meets)
        .with(
            "calculation_components",
            json!({
                "first_term": first_term,
                "second_term": second_term,
            }),
        )
        .with("thresholds", thresholds))
}
