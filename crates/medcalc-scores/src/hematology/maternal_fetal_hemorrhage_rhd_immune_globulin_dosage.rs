//! RhIG (anti-D) vial count after fetomaternal hemorrhage, from a
//! Kleihauer-Betke fetal cell percentage.
//!
//! Each 300 μg vial covers 30 mL of fetal whole blood. The raw vial count is
//! rounded as in the AABB method: a fraction <0.5 rounds up, ≥0.5 rounds up
//! and adds a vial, and an exact integer gets one extra vial.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const VIAL_DOSE_MCG: i64 = 300;
const PROTECTION_PER_VIAL_ML: f64 = 30.0;
const NORMAL_BASELINE_PERCENT: f64 = 0.1;
const SIGNIFICANCE_PERCENT: f64 = 0.3;

calculator_input! {
    pub struct RhigDoseInput {
        /// mL
        pub maternal_blood_volume: f64 => 2000.0..=6000.0,
        pub fetal_cell_percentage: f64 => 0.0..=10.0,
    }
}

fn vials_for(fetal_blood_ml: f64) -> i64 {
    let raw = fetal_blood_ml / PROTECTION_PER_VIAL_ML;
    let fraction = raw - raw.floor();
    let vials = if fraction == 0.0 {
        raw as i64 + 1
    } else if fraction < 0.5 {
        raw.ceil() as i64
    } else {
        raw.ceil() as i64 + 1
    };
    vials.max(1)
}

pub fn calculate(input: &RhigDoseInput) -> CalcResult {
    let fetal_blood_ml = input.maternal_blood_volume * input.fetal_cell_percentage / 100.0;
    let vials = vials_for(fetal_blood_ml);
    let total_dose = vials * VIAL_DOSE_MCG;
    let coverage_ml = vials as f64 * PROTECTION_PER_VIAL_ML;

    let (significance, alloimmunization_risk) = if input.fetal_cell_percentage < NORMAL_BASELINE_PERCENT {
        ("Normal baseline", "Minimal")
    } else if input.fetal_cell_percentage < SIGNIFICANCE_PERCENT {
        ("Below clinical significance threshold", "Low")
    } else {
        ("Clinically significant", "Significant")
    };
    let severity = match vials {
        ..=1 => "Minimal hemorrhage",
        2..=3 => "Moderate hemorrhage",
        4..=10 => "Large hemorrhage",
        _ => "Massive hemorrhage",
    };
    let coverage_ratio = if fetal_blood_ml > 0.0 { coverage_ml / fetal_blood_ml } else { 0.0 };

    let interpretation = match vials {
        ..=1 => Interpretation::new(
            "Standard Dose",
            "Minimal maternal-fetal hemorrhage",
            format!(
                "Standard single dose of {VIAL_DOSE_MCG} μg RhIG (1 vial) is sufficient to prevent alloimmunization. \
                 This covers fetal blood exposure up to 30 mL. Administer within 72 hours of delivery or hemorrhage event for optimal efficacy."
            ),
        ),
        2..=3 => Interpretation::new(
            "Moderate Hemorrhage",
            "Moderate maternal-fetal hemorrhage",
            format!(
                "Moderate hemorrhage requiring {vials} vials of {VIAL_DOSE_MCG} μg RhIG (total dose: {total_dose} μg). \
                 Total protection coverage: {coverage_ml} mL. Administer within 72 hours. \
                 Consider follow-up Kleihauer-Betke testing to confirm adequate coverage."
            ),
        ),
        4..=10 => Interpretation::new(
            "Large Hemorrhage",
            "Large maternal-fetal hemorrhage",
            format!(
                "Significant hemorrhage requiring {vials} vials of {VIAL_DOSE_MCG} μg RhIG (total dose: {total_dose} μg). \
                 Total protection coverage: {coverage_ml} mL of fetal blood. Recommend obstetric consultation \
                 and follow-up Kleihauer-Betke testing to ensure adequate coverage."
            ),
        ),
        _ => Interpretation::new(
            "Massive Hemorrhage",
            "Massive maternal-fetal hemorrhage",
            format!(
                "Massive hemorrhage requiring {vials} vials of {VIAL_DOSE_MCG} μg RhIG (total dose: {total_dose} μg). \
                 Total protection coverage: {coverage_ml} mL of fetal blood. Requires immediate obstetric and hematology consultation. \
                 Consider intravenous RhIG administration if available."
            ),
        ),
    };

    Ok(CalculatorResponse::new(vials, "vials", interpretation)
        .with("fetal_blood_volume_ml", round_to(fetal_blood_ml, 2))
        .with("calculated_vials_raw", round_to(fetal_blood_ml / PROTECTION_PER_VIAL_ML, 2))
        .with("total_dose_mcg", total_dose)
        .with(
            "clinical_assessment",
            json!({
                "fetal_cell_significance": significance,
                "alloimmunization_risk": alloimmunization_risk,
                "hemorrhage_severity": severity,
                "total_protection_ml": coverage_ml,
                "coverage_ratio": round_to(coverage_ratio, 2),
                "follow_up_needed": vials > 3,
            }),
        ))
}
