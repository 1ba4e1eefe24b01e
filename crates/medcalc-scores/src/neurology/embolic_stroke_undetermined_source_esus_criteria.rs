//! Embolic Stroke of Undetermined Source (ESUS) criteria.
//!
//! The evaluation must be complete before the clinical criteria are
//! judged; an incomplete workup is reported as such.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    /// This instrument uses capitalised tokens on the wire.
    pub enum Answer {
        Yes => "Yes",
        No => "No",
    }
}

calculator_input! {
    pub struct EsusInput {
        pub stroke_type_non_lacunar: Answer,
        pub no_significant_atherosclerosis: Answer,
        pub no_major_cardioembolic_source: Answer,
        pub no_other_specific_cause: Answer,
        pub adequate_cardiac_monitoring: Answer,
        pub adequate_vascular_imaging: Answer,
        pub adequate_cardiac_imaging: Answer,
    }
}

impl EsusInput {
    fn clinical(&self) -> [(&'static str, &'static str, Answer); 4] {
        [
            (
                "stroke_type_non_lacunar",
                "Non-lacunar stroke detected by CT or MRI",
                self.stroke_type_non_lacunar,
            ),
            (
                "no_significant_atherosclerosis",
                "Absence of ≥50% luminal stenosis in arteries supplying ischemic area",
                self.no_significant_atherosclerosis,
            ),
            (
                "no_major_cardioembolic_source",
                "No major cardioembolic sources identified",
                self.no_major_cardioembolic_source,
            ),
            (
                "no_other_specific_cause",
                "No other specific cause of stroke identified",
                self.no_other_specific_cause,
            ),
        ]
    }

    fn evaluation(&self) -> [(&'static str, &'static str, Answer); 3] {
        [
            (
                "adequate_cardiac_monitoring",
                "Cardiac rhythm monitoring ≥24 hours with automated rhythm detection",
                self.adequate_cardiac_monitoring,
            ),
            (
                "adequate_vascular_imaging",
                "Adequate vascular imaging completed",
                self.adequate_vascular_imaging,
            ),
            (
                "adequate_cardiac_imaging",
                "Adequate cardiac imaging completed",
                self.adequate_cardiac_imaging,
            ),
        ]
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Diagnosis {
    Confirmed,
    NotMet,
    InadequateEvaluation,
}

pub fn calculate(input: &EsusInput) -> CalcResult {
    let clinical = input.clinical();
    let evaluation = input.evaluation();

    let failed: Vec<_> = clinical.iter().filter(|c| c.2 == Answer::No).collect();
    let incomplete: Vec<_> = evaluation.iter().filter(|c| c.2 == Answer::No).collect();

    let diagnosis = if !incomplete.is_empty() {
        Diagnosis::InadequateEvaluation
    } else if failed.is_empty() {
        Diagnosis::Confirmed
    } else {
        Diagnosis::NotMet
    };

    let (stage, description, base) = match diagnosis {
        Diagnosis::Confirmed => (
            "ESUS Diagnosis Confirmed",
            "Meets all ESUS criteria",
            "Patient meets all diagnostic criteria for Embolic Stroke of Undetermined Source (ESUS). This diagnosis applies when all four clinical criteria are satisfied AND adequate diagnostic evaluation has been completed. Consider anticoagulation strategies, extended cardiac monitoring, and targeted embolic source investigation. Patient may be eligible for ESUS-specific clinical trials and treatment protocols.",
        ),
        Diagnosis::InadequateEvaluation => (
            "Inadequate Evaluation",
            "Insufficient diagnostic workup",
            "Diagnostic evaluation is inadequate to determine ESUS status. Complete the minimum required diagnostic evaluation including: ≥24-hour cardiac monitoring with automated rhythm detection, comprehensive vascular imaging of extracranial and intracranial arteries, and adequate cardiac imaging (TTE and/or TEE). Reassess ESUS criteria after completing appropriate diagnostic workup.",
        ),
        Diagnosis::NotMet => (
            "ESUS Diagnosis Not Met",
            "Does not meet ESUS criteria",
            "Patient does not meet diagnostic criteria for Embolic Stroke of Undetermined Source (ESUS). Either clinical criteria are not fulfilled or adequate diagnostic evaluation is incomplete. Complete recommended diagnostic evaluation and identify specific stroke etiology. Consider alternative stroke classifications such as large artery atherosclerosis, cardioembolic stroke, small vessel disease, or other determined etiology.",
        ),
    };

    let mut text = base.to_string();
    if !failed.is_empty() {
        let list: Vec<_> = failed.iter().map(|c| c.1.to_lowercase()).collect();
        text.push_str(&format!(" Clinical criteria not met: {}.", list.join("; ")));
    }
    if !incomplete.is_empty() {
        let list: Vec<_> = incomplete.iter().map(|c| c.1.to_lowercase()).collect();
        text.push_str(&format!(" Incomplete diagnostic evaluations: {}.", list.join("; ")));
    }
    text.push_str(match diagnosis {
        Diagnosis::Confirmed => " Recommended next steps: Consider extended cardiac monitoring (>24-48 hours), evaluation for patent foramen ovale, assessment for hypercoagulable states, and discussion of anticoagulation vs antiplatelet therapy. Monitor for clinical trial eligibility and emerging treatment options.",
        Diagnosis::InadequateEvaluation => " Priority actions: Complete missing diagnostic evaluations before determining stroke subtype. Ensure comprehensive vascular imaging includes both extracranial and intracranial circulation. Consider extended cardiac monitoring if initial monitoring was borderline adequate.",
        Diagnosis::NotMet => " Next steps: Identify specific stroke etiology based on positive findings. Apply appropriate TOAST classification. Initiate etiology-specific secondary prevention strategies. Consider additional targeted investigations based on clinical presentation and initial findings.",
    });
    text.push_str(" Important considerations: ESUS diagnosis requires rigorous exclusion of other stroke etiologies. The classification may change with additional testing or emerging diagnostic techniques. Regular reassessment is recommended as new information becomes available.");

    Ok(CalculatorResponse::new(stage, "", Interpretation::new(stage, description, text))
        .with("clinical_criteria_failed", json!(failed.iter().map(|c| c.0).collect::<Vec<_>>()))
        .with(
            "diagnostic_evaluation_incomplete",
            json!(incomplete.iter().map(|c| c.0).collect::<Vec<_>>()),
        ))
}
