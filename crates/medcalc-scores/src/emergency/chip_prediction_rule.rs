//! CHIP rule for CT after minor head injury.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct ChipInput {
        pub pedestrian_cyclist_vehicle: YesNo,
        pub ejected_from_vehicle: YesNo,
        pub vomiting: YesNo,
        pub amnesia_4_hours_or_more: YesNo,
        pub clinical_skull_fracture: YesNo,
        pub gcs_less_than_15: YesNo,
        pub gcs_deterioration_2_points: YesNo,
        pub anticoagulant_use: YesNo,
        pub post_traumatic_seizure: YesNo,
        pub age_60_or_older: YesNo,
        pub fall_from_elevation: YesNo,
        pub anterograde_amnesia: YesNo,
        pub amnesia_2_to_4_hours: YesNo,
        pub skull_contusion: YesNo,
        pub neurologic_deficit: YesNo,
        pub loss_of_consciousness: YesNo,
        pub gcs_deterioration_1_point: YesNo,
        pub age_40_to_60: YesNo,
    }
}

fn present(criteria: &[(YesNo, &'static str)]) -> Vec<&'static str> {
    criteria
        .iter()
        .filter(|(answer, _)| answer.is_yes())
        .map(|(_, label)| *label)
        .collect()
}

pub fn calculate(input: &ChipInput) -> CalcResult {
    let major = present(&[
        (input.pedestrian_cyclist_vehicle, "Pedestrian or cyclist struck by vehicle"),
        (input.ejected_from_vehicle, "Patient ejected from vehicle during accident"),
        (input.vomiting, "Post-traumatic vomiting"),
        (input.amnesia_4_hours_or_more, "Post-traumatic amnesia ≥4 hours"),
        (input.clinical_skull_fracture, "Clinical signs of skull fracture"),
        (input.gcs_less_than_15, "Glasgow Coma Scale <15"),
        (input.gcs_deterioration_2_points, "GCS deterioration ≥2 points"),
        (input.anticoagulant_use, "Current anticoagulant medication use"),
        (input.post_traumatic_seizure, "Post-traumatic seizure"),
        (input.age_60_or_older, "Age ≥60 years"),
    ]);
    let minor = present(&[
        (input.fall_from_elevation, "Fall from any elevation"),
        (input.anterograde_amnesia, "Persistent anterograde amnesia"),
        (input.amnesia_2_to_4_hours, "Post-traumatic amnesia 2 to <4 hours"),
        (input.skull_contusion, "Skull contusion present"),
        (input.neurologic_deficit, "Neurologic deficit present"),
        (input.loss_of_consciousness, "Loss of consciousness"),
        (input.gcs_deterioration_1_point, "GCS deterioration of 1 point"),
        (input.age_40_to_60, "Age 40-60 years"),
    ]);

    let (major_count, minor_count) = (major.len(), minor.len());
    let (recommendation, risk_level, description, rationale, text) = if major_count > 0 {
        (
            "CT Recommended",
            "High Risk",
            "High risk for intracranial injury",
            format!("One or more major criteria present ({major_count} major criteria met)"),
            format!(
                "CHIP Rule: CT RECOMMENDED. {major_count} major criterion(s) present indicating high risk for intracranial traumatic findings. Proceed with CT imaging to evaluate for potential neurosurgical lesions."
            ),
        )
    } else if minor_count >= 2 {
        (
            "CT Recommended",
            "Moderate to High Risk",
            "Moderate to high risk for intracranial injury",
            format!("Two or more minor criteria present ({minor_count} minor criteria met)"),
            format!(
                "CHIP Rule: CT RECOMMENDED. {minor_count} minor criteria present indicating moderate to high risk for intracranial traumatic findings. Proceed with CT imaging for evaluation."
            ),
        )
    } else if minor_count == 1 {
        (
            "Clinical Judgment",
            "Low to Moderate Risk",
            "Low to moderate risk for intracranial injury",
            "One minor criterion present (1 minor criteria met)".to_string(),
            "CHIP Rule: CLINICAL JUDGMENT REQUIRED. 1 minor criterion present. Consider CT imaging based on clinical assessment, patient factors, and physician judgment.".to_string(),
        )
    } else {
        (
            "CT Not Indicated",
            "Low Risk",
            "Low risk for intracranial injury",
            "No major or minor criteria present".to_string(),
            "CHIP Rule: CT NOT INDICATED. No major or minor criteria met indicating low risk for intracranial traumatic findings. Continue clinical observation and provide appropriate discharge instructions.".to_string(),
        )
    };

    Ok(CalculatorResponse::new(
        recommendation,
        "",
        Interpretation::new(recommendation, description, text),
    )
    .with("risk_level", risk_level)
    .with("major_criteria_count", major_count)
    .with("minor_criteria_count", minor_count)
    .with("major_criteria_present", major)
    .with("minor_criteria_present", minor)
    .with("clinical_rationale", rationale))
}
