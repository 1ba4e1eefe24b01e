//! 2017 McDonald criteria for multiple sclerosis.
//!
//! CSF-specific oligoclonal bands substitute for dissemination in time,
//! but only when dissemination in space is shown.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Value};

choice! {
    pub enum Count {
        Zero => "0",
        One => "1",
        TwoOrMore => "2_or_more",
    }
}

choice! {
    pub enum Dissemination {
        NotDemonstrated => "not_demonstrated",
        Demonstrated => "demonstrated",
    }
}

choice! {
    pub enum OligoclonalBands {
        Absent => "absent",
        Present => "present",
        NotTested => "not_tested",
    }
}

choice! {
    pub enum AlternativeDiagnosis {
        Excluded => "excluded",
        Possible => "possible",
    }
}

calculator_input! {
    pub struct McdonaldInput {
        pub clinical_attacks: Count,
        pub objective_clinical_evidence: Count,
        pub dissemination_in_space: Dissemination,
        pub dissemination_in_time: Dissemination,
        pub csf_oligoclonal_bands: OligoclonalBands,
        pub alternative_diagnosis: AlternativeDiagnosis,
    }
}

enum Outcome {
    Diagnosed,
    Insufficient,
    NotDiagnosed,
}

fn demonstrated(shown: bool) -> &'static str {
    if shown { "Demonstrated" } else { "Not demonstrated" }
}

impl McdonaldInput {
    fn evaluate(&self) -> (Outcome, Value) {
        if self.alternative_diagnosis == AlternativeDiagnosis::Possible {
            return (
                Outcome::NotDiagnosed,
                json!({
                    "alternative_diagnosis": "Possible alternative diagnosis present",
                    "recommendation": "Further investigation needed to exclude other conditions",
                }),
            );
        }

        let dis = self.dissemination_in_space == Dissemination::Demonstrated;
        let dit = self.dissemination_in_time == Dissemination::Demonstrated;
        let effective_dit = dit || (dis && self.csf_oligoclonal_bands == OligoclonalBands::Present);
        let dit_label = if dit { "Demonstrated" } else { "Substituted by CSF oligoclonal bands" };

        match (self.clinical_attacks, self.objective_clinical_evidence) {
            (Count::TwoOrMore, Count::TwoOrMore) => (
                Outcome::Diagnosed,
                json!({
                    "clinical_attacks": "≥2 attacks present",
                    "objective_evidence": "≥2 lesions with objective evidence",
                    "additional_requirements": "None needed",
                }),
            ),
            (Count::TwoOrMore, Count::One) => (
                if dis { Outcome::Diagnosed } else { Outcome::Insufficient },
                json!({
                    "clinical_attacks": "≥2 attacks present",
                    "objective_evidence": "1 lesion with objective evidence",
                    "dissemination_in_space": if dis { "Demonstrated" } else { "Not demonstrated - required for diagnosis" },
                }),
            ),
            (Count::One, Count::TwoOrMore) if effective_dit => (
                Outcome::Diagnosed,
                json!({
                    "clinical_attacks": "1 attack present",
                    "objective_evidence": "≥2 lesions with objective evidence",
                    "dissemination_in_time": dit_label,
                }),
            ),
            (Count::One, Count::TwoOrMore) => (
                Outcome::Insufficient,
                json!({
                    "clinical_attacks": "1 attack present",
                    "objective_evidence": "≥2 lesions with objective evidence",
                    "dissemination_in_time": "Not demonstrated",
                    "csf_oligoclonal_bands": "Not present/tested - could substitute for DIT",
                }),
            ),
            (Count::One, Count::One) if dis && effective_dit => (
                Outcome::Diagnosed,
                json!({
                    "clinical_attacks": "1 attack present",
                    "objective_evidence": "1 lesion with objective evidence",
                    "dissemination_in_space": "Demonstrated",
                    "dissemination_in_time": dit_label,
                }),
            ),
            (Count::One, Count::One) => {
                let mut missing = Vec::new();
                if !dis {
                    missing.push("DIS");
                }
                if !effective_dit {
                    missing.push("DIT");
                }
                (
                    Outcome::Insufficient,
                    json!({
                        "clinical_attacks": "1 attack present",
                        "objective_evidence": "1 lesion with objective evidence",
                        "dissemination_in_space": demonstrated(dis),
                        "dissemination_in_time": demonstrated(effective_dit),
                        "missing_criteria": missing,
                    }),
                )
            }
            (attacks, evidence) => (
                Outcome::Insufficient,
                json!({
                    "clinical_attacks": format!("{attacks} attacks"),
                    "objective_evidence": format!("{evidence} lesions with objective evidence"),
                    "recommendation": "At least 1 clinical attack with objective evidence required",
                }),
            ),
        }
    }
}

pub fn calculate(input: &McdonaldInput) -> CalcResult {
    let (outcome, details) = input.evaluate();

    let interpretation = match outcome {
        Outcome::Diagnosed => Interpretation::new(
            "MS Diagnosed",
            "Criteria fulfilled",
            "The 2017 McDonald Criteria for multiple sclerosis are fulfilled. The patient meets the diagnostic requirements for MS with evidence of dissemination in space and time, appropriate clinical presentation, and exclusion of alternative diagnoses. Initiate appropriate disease-modifying therapy, provide patient education, and establish multidisciplinary care. Monitor for disease progression and treatment response. Consider referral to MS specialist if not already involved in care.",
        ),
        Outcome::Insufficient => Interpretation::new(
            "Possible MS",
            "Insufficient criteria",
            "The clinical and radiological findings are suggestive of multiple sclerosis but do not fully meet the 2017 McDonald Criteria. This may represent early disease, clinically isolated syndrome (CIS), or an alternative diagnosis. Continue clinical monitoring with serial neurological examinations and follow-up MRI in 3-6 months. Consider CSF analysis if not already performed. Discuss risk of conversion to MS and potential early treatment options if high-risk features are present.",
        ),
        Outcome::NotDiagnosed => Interpretation::new(
            "MS Not Diagnosed",
            "Criteria not met",
            "The 2017 McDonald Criteria for multiple sclerosis are not fulfilled. The clinical presentation and findings do not meet the diagnostic requirements for MS. Consider alternative diagnoses, continue clinical monitoring, or repeat MRI evaluation in 3-6 months if clinical suspicion remains high. Additional testing such as CSF analysis, visual evoked potentials, or other investigations may be warranted based on clinical judgment.",
        ),
    };

    let stage = interpretation.stage.clone();
    Ok(CalculatorResponse::new(stage, "diagnosis", interpretation).with("criteria_details", details))
}
