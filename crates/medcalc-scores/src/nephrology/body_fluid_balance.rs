//! Body fluid balance split into isotonic saline and free water components.
//!
//! Every intake and output stream is weighted by its typical sodium content
//! relative to 154 mEq/L; absent volumes count as zero.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};

const ISOTONIC_SODIUM: f64 = 154.0;
const MAX_VOLUME: f64 = 10000.0;

calculator_input! {
    pub struct FluidBalanceInput {
        pub gastric_losses: Option<f64> => 0.0..=MAX_VOLUME,
        pub biliary_losses: Option<f64> => 0.0..=MAX_VOLUME,
        pub small_bowel_losses: Option<f64> => 0.0..=MAX_VOLUME,
        pub diarrhea_losses: Option<f64> => 0.0..=MAX_VOLUME,
        pub urine_output: Option<f64> => 0.0..=MAX_VOLUME,
        pub insensible_losses: Option<f64> => 0.0..=MAX_VOLUME,
        pub other_losses: Option<f64> => 0.0..=MAX_VOLUME,
        pub normal_saline_iv: Option<f64> => 0.0..=MAX_VOLUME,
        pub half_normal_saline_iv: Option<f64> => 0.0..=MAX_VOLUME,
        pub lactated_ringers_iv: Option<f64> => 0.0..=MAX_VOLUME,
        pub d5w_iv: Option<f64> => 0.0..=MAX_VOLUME,
        pub oral_intake: Option<f64> => 0.0..=MAX_VOLUME,
    }
}

/// (volume mL, sodium mEq/L)
type Stream = (f64, f64);

impl FluidBalanceInput {
    fn losses(&self) -> [(&'static str, Stream); 7] {
        [
            ("gastric_losses", (self.gastric_losses.unwrap_or(0.0), 60.0)),
            ("biliary_losses", (self.biliary_losses.unwrap_or(0.0), 130.0)),
            ("small_bowel_losses", (self.small_bowel_losses.unwrap_or(0.0), 110.0)),
            ("diarrhea_losses", (self.diarrhea_losses.unwrap_or(0.0), 60.0)),
            ("urine_output", (self.urine_output.unwrap_or(0.0), 40.0)),
            ("insensible_losses", (self.insensible_losses.unwrap_or(0.0), 0.0)),
            ("other_losses", (self.other_losses.unwrap_or(0.0), 140.0)),
        ]
    }

    fn gains(&self) -> [(&'static str, Stream); 5] {
        [
            ("normal_saline_iv", (self.normal_saline_iv.unwrap_or(0.0), 154.0)),
            ("half_normal_saline_iv", (self.half_normal_saline_iv.unwrap_or(0.0), 77.0)),
            ("lactated_ringers_iv", (self.lactated_ringers_iv.unwrap_or(0.0), 130.0)),
            ("d5w_iv", (self.d5w_iv.unwrap_or(0.0), 0.0)),
            ("oral_intake", (self.oral_intake.unwrap_or(0.0), 0.0)),
        ]
    }
}

/// Sum of (saline equivalent, free water) over the streams.
fn split(streams: &[(&str, Stream)]) -> (f64, f64) {
    streams.iter().fold((0.0, 0.0), |(saline, water), (_, (volume, sodium))| {
        let fraction = sodium / ISOTONIC_SODIUM;
        (saline + volume * fraction, water + volume * (1.0 - fraction))
    })
}

fn total_volume(streams: &[(&str, Stream)]) -> f64 {
    streams.iter().map(|(_, (volume, _))| volume).sum()
}

pub fn calculate(input: &FluidBalanceInput) -> CalcResult {
    let losses = input.losses();
    let gains = input.gains();
    let (saline_lost, water_lost) = split(&losses);
    let (saline_gained, water_gained) = split(&gains);
    let net_saline = saline_gained - saline_lost;
    let net_water = water_gained - water_lost;
    let total = net_saline + net_water;

    let (stage, description, guidance) = if total <= -500.0 {
        (
            "Significant Negative Balance",
            "Net fluid loss >500 mL",
            "Significant fluid deficit requiring prompt replacement. Assess for signs of volume depletion including \
             hypotension, tachycardia, decreased urine output, and elevated BUN/Cr ratio. Consider IV fluid \
             resuscitation based on sodium and free water deficits.",
        )
    } else if total <= -200.0 {
        (
            "Moderate Negative Balance",
            "Net fluid loss 200-500 mL",
            "Moderate fluid deficit that may require intervention. Monitor vital signs and urine output closely. \
             Consider fluid replacement if clinical signs of dehydration present or if trend continues.",
        )
    } else if total <= 200.0 {
        (
            "Neutral Balance",
            "Net fluid balance -200 to +200 mL",
            "Appropriate fluid balance maintained. Continue current fluid management strategy with routine \
             monitoring. This represents euvolemia in most clinical contexts.",
        )
    } else if total <= 500.0 {
        (
            "Moderate Positive Balance",
            "Net fluid gain 200-500 mL",
            "Moderate fluid accumulation. Monitor for signs of volume overload including peripheral edema, pulmonary \
             congestion, and weight gain. Consider fluid restriction or diuretics if clinically indicated.",
        )
    } else {
        (
            "Significant Positive Balance",
            "Net fluid gain >500 mL",
            "Significant fluid overload risk. Assess for signs of congestion including elevated JVP, crackles, S3 \
             gallop, and orthopnea. Strong consideration for diuretic therapy or fluid restriction unless intentional \
             volume expansion indicated.",
        )
    };

    let total_ml = total.round() as i64;
    let saline_ml = net_saline.round() as i64;
    let water_ml = net_water.round() as i64;
    let gains_ml = total_volume(&gains).round() as i64;
    let losses_ml = total_volume(&losses).round() as i64;
    let direction = if total_ml > 0 { "positive" } else { "negative" };
    let text = format!(
        "Total fluid balance: {total_ml:+} mL ({direction} balance). Saline balance: {saline_ml:+} mL, Free water \
         balance: {water_ml:+} mL. Total inputs: {gains_ml} mL, Total outputs: {losses_ml} mL. {guidance} This \
         calculation assumes standard sodium concentrations which may vary based on individual patient factors."
    );

    Ok(CalculatorResponse::new(total_ml, "mL", Interpretation::new(stage, description, text))
        .with("net_saline_balance", saline_ml)
        .with("net_water_balance", water_ml)
        .with("total_losses", losses_ml)
        .with("total_gains", gains_ml))
}
