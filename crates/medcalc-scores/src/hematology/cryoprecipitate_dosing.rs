//! Cryoprecipitate dose for fibrinogen replacement.
//!
//! Plasma volume (dL) = weight × (0.07 male, 0.065 female) × (1 − Hct).
//! Units = ⌈(target − current) × plasma volume / fibrinogen per unit⌉.
//!
//! Data to verify: 0.07 and 0.065 are blood volume in L/kg, yet the product is
//! treated as decilitres. Read as dL/kg (0.70 and 0.65) the dose would be ten
//! times larger. The factors are kept until checked against the transfusion
//! reference they were taken from.

use medcalc_core::math::{ensure, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, Sex};
use serde_json::json;

const DEFAULT_FIBRINOGEN_PER_UNIT: f64 = 200.0;
const CRITICAL_FIBRINOGEN: f64 = 50.0;
const MAJOR_BLEEDING_TARGET: f64 = 200.0;

calculator_input! {
    pub struct CryoprecipitateInput {
        pub patient_weight: f64 => 1.0..=300.0,
        pub patient_sex: Sex,
        /// Fraction, e.g. 0.40.
        pub hematocrit: f64 => 0.15..=0.65,
        pub current_fibrinogen: f64 => 0.0..=1000.0,
        pub target_fibrinogen: f64 => 50.0..=500.0,
        pub fibrinogen_per_unit: Option<f64> => 150.0..=300.0,
    }
}

pub fn calculate(input: &CryoprecipitateInput) -> CalcResult {
    ensure(
        input.current_fibrinogen < input.target_fibrinogen,
        "Target fibrinogen must be higher than current fibrinogen",
    )?;
    let per_unit = input.fibrinogen_per_unit.unwrap_or(DEFAULT_FIBRINOGEN_PER_UNIT);

    let blood_volume_factor = if input.patient_sex.is_female() { 0.065 } else { 0.07 };
    let plasma_volume_dl = input.patient_weight * blood_volume_factor * (1.0 - input.hematocrit);
    let increase = input.target_fibrinogen - input.current_fibrinogen;
    let fibrinogen_needed = increase * plasma_volume_dl;
    let exact_units = fibrinogen_needed / per_unit;
    let units = exact_units.max(0.0).ceil() as i64;

    let mut considerations = Vec::new();
    if input.current_fibrinogen < CRITICAL_FIBRINOGEN {
        considerations.push("CRITICAL: Current fibrinogen <50 mg/dL requires urgent replacement");
    }
    if input.target_fibrinogen >= MAJOR_BLEEDING_TARGET {
        considerations.push("Target appropriate for major bleeding or surgery");
    }
    if units > 20 {
        considerations.push("Consider fibrinogen concentrate for large dose requirements");
        considerations.push("Monitor for volume overload");
    }
    considerations.push("Each unit is approximately 15-20 mL volume");
    match units {
        8..=12 => considerations.push("Consider requesting 1 pooled unit (10 units) for convenience"),
        18..=22 => considerations.push("Consider requesting 2 pooled units (20 units) for convenience"),
        _ => {}
    }

    let weight = input.patient_weight;
    Ok(CalculatorResponse::new(
        units,
        "units",
        interpret(units, input.current_fibrinogen, input.target_fibrinogen),
    )
    .with(
        "calculation_details",
        json!({
            "plasma_volume_dL": round_to(plasma_volume_dl, 1),
            "fibrinogen_increase_needed": round_to(increase, 1),
            "total_fibrinogen_needed_mg": round_to(fibrinogen_needed, 0),
            "fibrinogen_per_unit_mg": per_unit,
            "exact_units_calculated": round_to(exact_units, 2),
        }),
    )
    .with("clinical_considerations", considerations)
    .with("volume_ml", (units as f64 * 17.5).round())
    .with(
        "alternative_dosing",
        json!({
            "weight_based_5kg": (weight / 5.0).ceil(),
            "weight_based_10kg": (weight / 10.0).ceil(),
            "standard_adult_dose": 10,
        }),
    ))
}

fn interpret(units: i64, current: f64, target: f64) -> Interpretation {
    match units {
        ..=5 => Interpretation::new(
            "Low Dose",
            "Small fibrinogen replacement",
            format!(
                "Calculated dose of {units} cryoprecipitate units represents a small fibrinogen replacement to increase levels from {current} to {target} mg/dL. \
                 Monitor response with repeat fibrinogen levels 1-2 hours post-transfusion."
            ),
        ),
        6..=15 => Interpretation::new(
            "Standard Dose",
            "Typical therapeutic replacement",
            format!(
                "Calculated dose of {units} cryoprecipitate units represents standard therapeutic replacement. \
                 Consider using pooled units (typically 10 units per pool) for efficient administration. \
                 This dose should increase fibrinogen from {current} to approximately {target} mg/dL."
            ),
        ),
        16..=30 => Interpretation::new(
            "High Dose",
            "Large fibrinogen replacement",
            format!(
                "Calculated dose of {units} cryoprecipitate units represents a high dose replacement. \
                 Consider alternative therapies like fibrinogen concentrate for more efficient administration. \
                 Monitor for volume overload in patients with cardiac or renal compromise."
            ),
        ),
        _ => Interpretation::new(
            "Very High Dose",
            "Massive fibrinogen replacement",
            format!(
                "Calculated dose of {units} cryoprecipitate units represents a very high dose requirement. \
                 Strongly consider fibrinogen concentrate instead of cryoprecipitate for this patient. \
                 Monitor closely for volume overload and transfusion reactions."
            ),
        ),
    }
}
