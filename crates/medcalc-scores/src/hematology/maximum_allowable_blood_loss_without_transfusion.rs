//! Maximum allowable blood loss (ABL) before transfusion (Gross formula).
//!
//! ABL = EBV × (Hb_initial − Hb_final) / Hb_average, with EBV from an
//! age-group coefficient in mL/kg.

use medcalc_core::math::{ensure, fixed, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const ACCURACY_LIMIT_PERCENT: f64 = 20.0;

choice! {
    pub enum BloodVolumeGroup {
        AdultMan => "adult_man",
        AdultWoman => "adult_woman",
        Infant => "infant",
        Neonate => "neonate",
        PrematureNeonate => "premature_neonate",
    }
}

impl BloodVolumeGroup {
    /// Blood volume in mL/kg.
    fn coefficient(self) -> f64 {
        match self {
            BloodVolumeGroup::AdultMan => 75.0,
            BloodVolumeGroup::AdultWoman => 65.0,
            BloodVolumeGroup::Infant => 80.0,
            BloodVolumeGroup::Neonate => 85.0,
            BloodVolumeGroup::PrematureNeonate => 96.0,
        }
    }

    fn description(self) -> &'static str {
        match self {
            BloodVolumeGroup::AdultMan => "Adult male (≥18 years)",
            BloodVolumeGroup::AdultWoman => "Adult female (≥18 years)",
            BloodVolumeGroup::Infant => "Infant (1 month - 2 years)",
            BloodVolumeGroup::Neonate => "Neonate (birth - 1 month)",
            BloodVolumeGroup::PrematureNeonate => "Premature neonate (<37 weeks gestation)",
        }
    }
}

calculator_input! {
    pub struct AllowableBloodLossInput {
        pub age_group: BloodVolumeGroup,
        /// kg
        pub body_weight: f64 => 0.5..=200.0,
        /// g/dL
        pub initial_hemoglobin: f64 => 3.0..=25.0,
        /// g/dL, the lowest acceptable value
        pub final_hemoglobin: f64 => 3.0..=15.0,
    }
}

pub fn calculate(input: &AllowableBloodLossInput) -> CalcResult {
    ensure(
        input.final_hemoglobin < input.initial_hemoglobin,
        "Final hemoglobin must be lower than initial hemoglobin",
    )?;

    let ebv = input.body_weight * input.age_group.coefficient();
    let hb_difference = input.initial_hemoglobin - input.final_hemoglobin;
    let hb_average = (input.initial_hemoglobin + input.final_hemoglobin) / 2.0;
    let abl = (ebv * hb_difference / hb_average).max(0.0);
    let percent_ebv = abl / ebv * 100.0;
    let reliable = percent_ebv <= ACCURACY_LIMIT_PERCENT;

    let threshold_assessment = if input.final_hemoglobin < 6.0 {
        "Very low - transfusion almost always required"
    } else if (7.0..=10.0).contains(&input.final_hemoglobin) {
        "Within typical transfusion threshold range"
    } else {
        "Above typical transfusion threshold"
    };
    let risk = if abl < 300.0 {
        "High risk - minimal blood loss tolerance"
    } else if abl < 800.0 {
        "Moderate risk - limited blood loss tolerance"
    } else if abl < 2000.0 {
        "Standard risk - typical blood loss tolerance"
    } else {
        "Low risk - good blood loss tolerance"
    };

    let abl_text = fixed(abl, 1);
    let interpretation = if abl <= 500.0 {
        Interpretation::new(
            "Low Volume Loss",
            "Small allowable blood loss",
            format!(
                "Maximum allowable blood loss of {abl_text} mL indicates limited tolerance for intraoperative bleeding. \
                 Requires meticulous hemostasis and frequent hemoglobin monitoring during surgery. \
                 Consider blood conservation strategies and prepare for early transfusion if blood loss approaches this threshold."
            ),
        )
    } else if abl <= 1500.0 {
        Interpretation::new(
            "Moderate Volume Loss",
            "Moderate allowable blood loss",
            format!(
                "Maximum allowable blood loss of {abl_text} mL represents moderate tolerance for surgical bleeding, suitable for most routine procedures. \
                 Transfusion should be considered when blood loss approaches this calculated threshold. Ensure type and screen or crossmatch is current."
            ),
        )
    } else if abl <= 3000.0 {
        Interpretation::new(
            "High Volume Loss",
            "Large allowable blood loss",
            format!(
                "Maximum allowable blood loss of {abl_text} mL indicates good tolerance for significant surgical bleeding, appropriate for major surgical procedures. \
                 Maintain close hemodynamic monitoring and serial hemoglobin assessment."
            ),
        )
    } else {
        Interpretation::new(
            "Very High Volume Loss",
            "Very large allowable blood loss",
            format!(
                "Maximum allowable blood loss of {abl_text} mL indicates excellent tolerance for major surgical bleeding. \
                 Consider intraoperative cell salvage and prepare massive transfusion protocols for prolonged high-volume procedures."
            ),
        )
    };

    Ok(CalculatorResponse::new(round_to(abl, 1), "mL", interpretation)
        .with("estimated_blood_volume_ml", round_to(ebv, 1))
        .with("blood_volume_coefficient_ml_kg", input.age_group.coefficient())
        .with("average_hemoglobin_g_dl", round_to(hb_average, 2))
        .with("hemoglobin_difference_g_dl", round_to(hb_difference, 2))
        .with("percentage_of_blood_volume", round_to(percent_ebv, 1))
        .with(
            "clinical_assessment",
            json!({
                "age_group_description": input.age_group.description(),
                "accuracy_reliable": reliable,
                "accuracy_note": if reliable { "Calculation reliable" } else { "Calculation may be inaccurate >20% EBV loss" },
                "transfusion_threshold_assessment": threshold_assessment,
                "risk_stratification": risk,
            }),
        ))
}
