//! IMWG 2014 diagnostic criteria for multiple myeloma: clonal plasma cell
//! evidence plus at least one myeloma-defining event (CRAB or SLiM).

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

calculator_input! {
    pub struct MyelomaDiagnosisInput {
        pub clonal_plasma_cells_bone_marrow: YesNo,
        pub biopsy_proven_plasmacytoma: YesNo,
        pub hypercalcemia: YesNo,
        pub renal_insufficiency: YesNo,
        pub anemia: YesNo,
        pub bone_lesions: YesNo,
        pub plasma_cells_60_percent: YesNo,
        pub light_chain_ratio: YesNo,
        pub focal_mri_lesions: YesNo,
    }
}

fn present<const N: usize>(items: [(YesNo, &'static str); N]) -> Vec<&'static str> {
    items
        .into_iter()
        .filter(|(answer, _)| answer.is_yes())
        .map(|(_, label)| label)
        .collect()
}

pub fn calculate(input: &MyelomaDiagnosisInput) -> CalcResult {
    let clonal = present([
        (input.clonal_plasma_cells_bone_marrow, "clonal bone marrow plasma cells ≥10%"),
        (input.biopsy_proven_plasmacytoma, "biopsy-proven plasmacytoma"),
    ]);
    let crab = present([
        (input.hypercalcemia, "hypercalcemia"),
        (input.renal_insufficiency, "renal insufficiency"),
        (input.anemia, "anemia"),
        (input.bone_lesions, "bone lesions"),
    ]);
    let slim = present([
        (input.plasma_cells_60_percent, "≥60% clonal plasma cells"),
        (input.light_chain_ratio, "serum free light chain ratio ≥100"),
        (input.focal_mri_lesions, ">1 focal MRI lesion"),
    ]);
    let clonal_met = !clonal.is_empty();
    let defining_events = !crab.is_empty() || !slim.is_empty();
    let diagnosed = clonal_met && defining_events;

    let interpretation = if diagnosed {
        let mut parts = vec![
            "DIAGNOSIS: Multiple myeloma according to IMWG criteria.".to_string(),
            format!("CLONAL EVIDENCE: {}.", clonal.join(", ")),
        ];
        if !crab.is_empty() {
            parts.push(format!("CRAB CRITERIA: {}.", crab.join(", ")));
        }
        if !slim.is_empty() {
            parts.push(format!("SLiM BIOMARKERS: {}.", slim.join(", ")));
        }
        parts.push(
            "NEXT STEPS: Proceed with staging (ISS/R-ISS), cytogenetic analysis, and treatment planning.".to_string(),
        );
        Interpretation::new("Multiple Myeloma", "Criteria met for multiple myeloma", parts.join(" "))
    } else {
        let mut missing = Vec::new();
        if !clonal_met {
            missing.push("clonal plasma cell evidence (need ≥10% clonal bone marrow plasma cells OR biopsy-proven plasmacytoma)");
        }
        if !defining_events {
            missing.push("myeloma defining events (need ≥1 CRAB criterion OR ≥1 SLiM biomarker)");
        }
        let mut parts = vec![
            "DIAGNOSIS: Does not meet IMWG criteria for multiple myeloma.".to_string(),
            format!("MISSING CRITERIA: {}.", missing.join("; ")),
        ];
        if clonal_met {
            parts.push(
                "Consider evaluation for MGUS (monoclonal gammopathy of undetermined significance) or smoldering multiple myeloma."
                    .to_string(),
            );
        }
        parts.push(
            "RECOMMENDATIONS: Monitor for progression with regular SPEP, immunofixation, and serum free light chains.".to_string(),
        );
        Interpretation::new("Not Diagnostic", "Criteria not met for multiple myeloma", parts.join(" "))
    };

    let result = interpretation.stage.clone();
    Ok(CalculatorResponse::new(result, "", interpretation).with(
        "criteria_details",
        json!({
            "clonal_criteria_met": clonal_met,
            "myeloma_defining_events": defining_events,
            "crab_criteria_met": !crab.is_empty(),
            "slim_criteria_met": !slim.is_empty(),
        }),
    ))
}
