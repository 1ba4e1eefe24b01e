//! Wisconsin Criteria for facial CT in maxillofacial trauma.
//!
//! Any single positive criterion indicates CT imaging.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

calculator_input! {
    pub struct WisconsinInput {
        pub high_energy_mechanism: YesNo,
        pub facial_deformity: YesNo,
        pub malocclusion: YesNo,
        pub facial_numbness: YesNo,
        pub periorbital_swelling: YesNo,
        pub diplopia: YesNo,
        pub palpable_step_off: YesNo,
        pub epistaxis: YesNo,
    }
}

impl WisconsinInput {
    fn criteria(&self) -> [(&'static str, &'static str, YesNo); 8] {
        [
            ("high_energy_mechanism", "High-energy mechanism of injury", self.high_energy_mechanism),
            ("facial_deformity", "Visible facial deformity or asymmetry", self.facial_deformity),
            ("malocclusion", "Dental malocclusion or inability to open mouth", self.malocclusion),
            ("facial_numbness", "Facial numbness or altered sensation", self.facial_numbness),
            ("periorbital_swelling", "Significant periorbital swelling or hematoma", self.periorbital_swelling),
            ("diplopia", "Double vision or diplopia", self.diplopia),
            ("palpable_step_off", "Palpable step-off deformity of facial bones", self.palpable_step_off),
            ("epistaxis", "Epistaxis or nasal deformity", self.epistaxis),
        ]
    }

    fn suspected_patterns(&self) -> Vec<&'static str> {
        let mut patterns = Vec::new();
        if self.diplopia.is_yes() || self.periorbital_swelling.is_yes() {
            patterns.push("Orbital fracture (floor, medial wall, or complex)");
        }
        if self.malocclusion.is_yes() || self.palpable_step_off.is_yes() {
            patterns.push("Mandibular or maxillary fracture");
        }
        if self.epistaxis.is_yes() {
            patterns.push("Nasal fracture or nasoethmoid complex injury");
        }
        if self.facial_numbness.is_yes() {
            patterns.push("Infraorbital nerve injury (orbital floor fracture)");
        }
        if self.facial_deformity.is_yes() {
            patterns.push("Complex facial fracture with displacement");
        }
        if self.high_energy_mechanism.is_yes() {
            patterns.push("High-energy trauma with potential for multiple fractures");
        }
        patterns
    }
}

pub fn calculate(input: &WisconsinInput) -> CalcResult {
    let positive: Vec<_> = input
        .criteria()
        .into_iter()
        .filter(|(_, _, answer)| answer.is_yes())
        .map(|(criterion, description, _)| (criterion, description))
        .collect();

    let (result, interpretation) = if positive.is_empty() {
        (
            "CT not indicated",
            Interpretation::new(
                "Low Risk",
                "CT not indicated",
                "No high-risk criteria present according to the Wisconsin Criteria. CT imaging is not indicated for facial fracture evaluation. \
                 Clinical observation and symptomatic treatment are appropriate. Reassess if clinical status changes.",
            ),
        )
    } else {
        let listed = positive
            .iter()
            .map(|(_, description)| *description)
            .collect::<Vec<_>>()
            .join(", ");
        (
            "CT indicated",
            Interpretation::new(
                "High Risk",
                "CT indicated",
                format!(
                    "One or more high-risk criteria present: {listed}. According to the Wisconsin Criteria, CT imaging is indicated to evaluate for significant facial fractures. \
                     Proceed with facial CT with coronal and sagittal reconstructions. Consider consultation with oral and maxillofacial surgery, plastic surgery, or otolaryngology."
                ),
            ),
        )
    };

    let criteria_json: Vec<_> = positive
        .iter()
        .map(|(criterion, description)| json!({ "criterion": criterion, "description": description }))
        .collect();

    Ok(CalculatorResponse::new(result, "", interpretation)
        .with("positive_criteria_count", positive.len())
        .with("positive_criteria", criteria_json)
        .with("suspected_injury_patterns", input.suspected_patterns()))
}
