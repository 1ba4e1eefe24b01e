//! Canadian CT Head Rule for minor head injury (GCS 13-15).
//!
//! High-risk criteria are checked first; medium-risk criteria only matter
//! when no high-risk criterion is present.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};

calculator_input! {
    pub struct CanadianCtHeadInput {
        pub gcs_below_15_at_2h: YesNo,
        pub suspected_skull_fracture: YesNo,
        pub basal_skull_fracture_signs: YesNo,
        pub vomiting_two_or_more: YesNo,
        pub age_65_or_older: YesNo,
        pub amnesia_30_min_or_more: YesNo,
        pub dangerous_mechanism: YesNo,
    }
}

pub fn calculate(input: &CanadianCtHeadInput) -> CalcResult {
    let high: Vec<&str> = [
        (input.gcs_below_15_at_2h, "GCS <15 at 2 hours after injury"),
        (input.suspected_skull_fracture, "Suspected open or depressed skull fracture"),
        (input.basal_skull_fracture_signs, "Signs of basal skull fracture"),
        (input.vomiting_two_or_more, "Vomiting ≥2 episodes"),
        (input.age_65_or_older, "Age ≥65 years"),
    ]
    .into_iter()
    .filter(|(answer, _)| answer.is_yes())
    .map(|(_, label)| label)
    .collect();
    let medium: Vec<&str> = [
        (input.amnesia_30_min_or_more, "Retrograde amnesia ≥30 minutes"),
        (input.dangerous_mechanism, "Dangerous mechanism of injury"),
    ]
    .into_iter()
    .filter(|(answer, _)| answer.is_yes())
    .map(|(_, label)| label)
    .collect();

    let (result, interpretation) = if !high.is_empty() {
        (
            "CT Required",
            Interpretation::new(
                "High Risk",
                "High risk for neurosurgical intervention",
                format!("High-risk criteria present ({}). CT head is indicated; risk of needing neurosurgical intervention.", high.join("; ")),
            ),
        )
    } else if !medium.is_empty() {
        (
            "CT Required",
            Interpretation::new(
                "Medium Risk",
                "Medium risk for brain injury on CT",
                format!("Medium-risk criteria present ({}). CT head is indicated; risk of clinically important brain injury on CT.", medium.join("; ")),
            ),
        )
    } else {
        (
            "CT Not Required",
            Interpretation::new(
                "Low Risk",
                "No high or medium risk criteria",
                "No high- or medium-risk criteria present. CT head is not required by the rule; provide head injury advice and return precautions.",
            ),
        )
    };

    Ok(CalculatorResponse::new(result, "recommendation", interpretation)
        .with("high_risk_criteria", high)
        .with("medium_risk_criteria", medium))
}
