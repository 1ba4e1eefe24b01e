//! CCS "CHADS-65" algorithm for antithrombotic therapy in nonvalvular AF.
//!
//! A sequential decision tree, not a point score: age first, then CHADS₂
//! risk factors, then vascular disease.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct Chads65Input {
        pub age_65_or_older: YesNo,
        pub congestive_heart_failure: YesNo,
        pub hypertension: YesNo,
        pub diabetes_mellitus: YesNo,
        pub stroke_tia_history: YesNo,
        pub coronary_artery_disease: YesNo,
        pub peripheral_artery_disease: YesNo,
    }
}

const OAC: &str = "Oral Anticoagulation";
const ANTIPLATELET: &str = "Antiplatelet Therapy";
const NONE: &str = "No Antithrombotic Therapy";

pub fn calculate(input: &Chads65Input) -> CalcResult {
    let (therapy, step, rationale, interpretation) = decide(input);

    let (medication, monitoring) = match therapy {
        OAC => (
            "Direct oral anticoagulants (DOACs) preferred over warfarin",
            "Regular follow-up for efficacy and bleeding complications",
        ),
        ANTIPLATELET => (
            "ASA 81mg daily",
            "Annual reassessment and bleeding risk evaluation",
        ),
        _ => (
            "No anticoagulation or antiplatelet therapy recommended",
            "Annual reassessment as risk factors may change with time",
        ),
    };

    Ok(CalculatorResponse::new(therapy, "algorithm", interpretation)
        .with("decision_step", step)
        .with("rationale", rationale)
        .with("medication_details", medication)
        .with("monitoring_requirements", monitoring))
}

fn decide(input: &Chads65Input) -> (&'static str, &'static str, String, Interpretation) {
    if input.age_65_or_older.is_yes() {
        return (
            OAC,
            "Step 1: Age Assessment",
            "Age ≥65 years qualifies for oral anticoagulation".to_string(),
            Interpretation::new(
                OAC,
                "Age ≥65 or CHADS₂ risk factors present",
                "CHADS-65 Algorithm - Step 1: Age ≥65 years. Oral anticoagulation recommended. Direct oral anticoagulants (DOACs) preferred over warfarin for stroke prevention in nonvalvular atrial fibrillation. Annual stroke risk: 2.1% for ages 65-74, 4.4% for ages ≥75.",
            ),
        );
    }

    let chads2: Vec<&str> = [
        (input.congestive_heart_failure, "Congestive Heart Failure"),
        (input.hypertension, "Hypertension"),
        (input.diabetes_mellitus, "Diabetes Mellitus"),
        (input.stroke_tia_history, "Stroke/TIA History"),
    ]
    .into_iter()
    .filter(|(present, _)| present.is_yes())
    .map(|(_, name)| name)
    .collect();
    if !chads2.is_empty() {
        let listed = chads2.join(", ");
        return (
            OAC,
            "Step 2: CHADS₂ Risk Factor Assessment",
            format!("CHADS₂ risk factors present: {listed}"),
            Interpretation::new(
                OAC,
                "Age ≥65 or CHADS₂ risk factors present",
                format!("CHADS-65 Algorithm - Step 2: CHADS₂ risk factors present ({listed}). Oral anticoagulation recommended despite age <65 years. These risk factors significantly increase stroke risk and warrant anticoagulation therapy."),
            ),
        );
    }

    let vascular: Vec<&str> = [
        (input.coronary_artery_disease, "Coronary Artery Disease"),
        (input.peripheral_artery_disease, "Peripheral Artery Disease"),
    ]
    .into_iter()
    .filter(|(present, _)| present.is_yes())
    .map(|(_, name)| name)
    .collect();
    if !vascular.is_empty() {
        let listed = vascular.join(", ");
        return (
            ANTIPLATELET,
            "Step 3: Vascular Disease Assessment",
            format!("Vascular disease present: {listed}"),
            Interpretation::new(
                ANTIPLATELET,
                "Age <65, no CHADS₂ risk factors, vascular disease present",
                format!("CHADS-65 Algorithm - Step 3: Vascular disease present ({listed}) in patient <65 years without CHADS₂ risk factors. Antiplatelet therapy with ASA 81mg daily recommended for stroke prevention."),
            ),
        );
    }

    (
        NONE,
        "Step 3: No High-Risk Features",
        "Age <65 years, no CHADS₂ risk factors, no vascular disease".to_string(),
        Interpretation::new(
            NONE,
            "Age <65, no CHADS₂ risk factors, no vascular disease",
            "CHADS-65 Algorithm - No high-risk features: Age <65 years, no CHADS₂ risk factors, and no vascular disease. No antithrombotic therapy recommended. Annual reassessment advised as patient age and risk factors may change.",
        ),
    )
}
