//! Fisher grade: vasospasm risk from the CT pattern of subarachnoid hemorrhage.
//!
//! Each grade is a fixed CT description, looked up directly.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum CtFindings {
        NoHemorrhage => "no_hemorrhage",
        DiffuseThin => "diffuse_thin",
        LocalizedClotOrThickLayer => "localized_clot_or_thick_layer",
        IntracerebralOrIntraventricular => "intracerebral_or_intraventricular",
    }
}

calculator_input! {
    pub struct FisherInput {
        pub ct_findings: CtFindings,
    }
}

pub fn calculate(input: &FisherInput) -> CalcResult {
    let (grade, stage, description, text) = match input.ct_findings {
        CtFindings::NoHemorrhage => (
            1,
            "Grade 1",
            "No blood detected",
            "No subarachnoid blood on CT. Low risk of symptomatic vasospasm (about 21% angiographic, rarely clinical).",
        ),
        CtFindings::DiffuseThin => (
            2,
            "Grade 2",
            "Diffuse or thin layer <1 mm",
            "Diffuse deposition or thin layer of blood under 1 mm with no clots. Low to moderate vasospasm risk (about 25%).",
        ),
        CtFindings::LocalizedClotOrThickLayer => (
            3,
            "Grade 3",
            "Localized clot or thick layer ≥1 mm",
            "Localized clots or vertical layers of blood 1 mm or thicker. Highest risk of symptomatic vasospasm (about 37%). Monitor closely with transcranial Doppler and neurological exams.",
        ),
        CtFindings::IntracerebralOrIntraventricular => (
            4,
            "Grade 4",
            "Intracerebral or intraventricular clot",
            "Intracerebral or intraventricular clot with diffuse or no subarachnoid blood. Moderate vasospasm risk (about 31%); watch for hydrocephalus.",
        ),
    };

    Ok(CalculatorResponse::new(grade, "grade", Interpretation::new(stage, description, text)))
}
