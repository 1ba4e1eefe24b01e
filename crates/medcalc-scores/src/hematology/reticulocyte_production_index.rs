//! Reticulocyte Production Index (RPI).
//!
//! RPI = retic% × (Hct / normal Hct) / maturation factor, where the factor
//! grows from 1.0 to 2.5 as the hematocrit falls.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

calculator_input! {
    pub struct RpiInput {
        pub reticulocyte_percentage: f64 => 0.0..=50.0,
        pub measured_hematocrit: f64 => 5.0..=65.0,
        pub normal_hematocrit: f64 => 35.0..=50.0,
        /// ×10⁶/μL
        pub rbc_count: Option<f64> => 1.0..=8.0,
    }
}

/// (factor, level) by hematocrit band.
fn maturation_factor(hematocrit: f64) -> (f64, &'static str) {
    match hematocrit {
        h if h < 20.0 => (2.5, "severe"),
        h if h < 25.0 => (2.0, "moderate"),
        h if h < 35.0 => (1.5, "mild"),
        _ => (1.0, "normal"),
    }
}

fn anemia_severity(hematocrit: f64) -> &'static str {
    if hematocrit >= 35.0 {
        "No anemia or mild anemia"
    } else if hematocrit >= 25.0 {
        "Mild to moderate anemia"
    } else if hematocrit >= 20.0 {
        "Moderate anemia"
    } else {
        "Severe anemia"
    }
}

pub fn calculate(input: &RpiInput) -> CalcResult {
    let hct = input.measured_hematocrit;
    let corrected = input.reticulocyte_percentage * (hct / input.normal_hematocrit);
    let (factor, level) = maturation_factor(hct);
    let rpi = corrected / factor;
    let rpi_text = fixed(rpi, 2);

    let (mut interpretation, marrow_response, significance) = if rpi < 0.5 {
        (
            Interpretation::new(
                "Very Low Response",
                "Very decreased reticulocyte production",
                format!(
                    "RPI of {rpi_text} is <0.5, indicating very decreased reticulocyte production. This suggests bone marrow failure, \
                     severe nutritional deficiency, or other causes of impaired erythropoiesis requiring immediate evaluation."
                ),
            ),
            "Severely impaired",
            "Bone marrow failure or severe deficiency",
        )
    } else if rpi < 2.0 {
        (
            Interpretation::new(
                "Inadequate Response",
                "Inadequate bone marrow response",
                format!(
                    "RPI of {rpi_text} is <2.0, indicating inadequate bone marrow response to anemia. This suggests hypoproliferative \
                     anemia due to bone marrow dysfunction, nutritional deficiencies, chronic disease, or renal failure."
                ),
            ),
            "Impaired",
            "Hypoproliferative anemia",
        )
    } else if rpi < 3.0 {
        (
            Interpretation::new(
                "Borderline Response",
                "Borderline bone marrow response",
                format!(
                    "RPI of {rpi_text} is borderline (2.0-3.0), indicating a marginal bone marrow response. This may suggest early \
                     recovery from bone marrow suppression or mild nutritional deficiency."
                ),
            ),
            "Borderline",
            "Early recovery or mild dysfunction",
        )
    } else {
        (
            Interpretation::new(
                "Appropriate Response",
                "Appropriate bone marrow response",
                format!(
                    "RPI of {rpi_text} is >3.0, indicating appropriate bone marrow response to anemia. This suggests hemolytic anemia, \
                     acute blood loss, or other causes of increased red cell destruction with compensatory reticulocytosis."
                ),
            ),
            "Normal",
            "Hemolytic or hemorrhagic anemia",
        )
    };
    let severity = anemia_severity(hct);
    interpretation
        .text
        .push_str(&format!(" Patient has {} (Hct {hct}%).", severity.to_lowercase()));

    let absolute_count = input
        .rbc_count
        .map(|rbc| round_to(input.reticulocyte_percentage / 100.0 * rbc * 1_000_000.0, 0));

    Ok(CalculatorResponse::new(round_to(rpi, 2), "index", interpretation).with(
        "calculation_details",
        json!({
            "reticulocyte_percentage": input.reticulocyte_percentage,
            "corrected_reticulocyte_percentage": round_to(corrected, 2),
            "maturation_factor": factor,
            "maturation_level": level,
            "hematocrit_severity": severity,
            "absolute_reticulocyte_count": absolute_count,
            "bone_marrow_response": marrow_response,
            "clinical_significance": significance,
        }),
    ))
}
