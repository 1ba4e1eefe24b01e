//! Montreal Cognitive Assessment (MoCA).
//!
//! Memory registration is validated but not scored. Less than 12 years of
//! education adds one point, capped at 30.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

const MAX_SCORE: i64 = 30;

choice! {
    pub enum EducationLevel {
        LessThan12Years => "less_than_12_years",
        TwelveOrMoreYears => "12_or_more_years",
    }
}

calculator_input! {
    pub struct MocaInput {
        pub visuospatial_executive: i64 => 0..=5,
        pub naming: i64 => 0..=3,
        pub memory_registration: i64 => 0..=5,
        pub attention: i64 => 0..=6,
        pub language: i64 => 0..=3,
        pub abstraction: i64 => 0..=2,
        pub delayed_recall: i64 => 0..=5,
        pub orientation: i64 => 0..=6,
        pub education_level: EducationLevel,
    }
}

pub fn calculate(input: &MocaInput) -> CalcResult {
    let raw = input.visuospatial_executive
        + input.naming
        + input.attention
        + input.language
        + input.abstraction
        + input.delayed_recall
        + input.orientation;
    let score = match input.education_level {
        EducationLevel::LessThan12Years => (raw + 1).min(MAX_SCORE),
        EducationLevel::TwelveOrMoreYears => raw,
    };

    let (stage, description, guidance) = match score {
        26.. => (
            "Normal Cognition",
            "Normal cognitive function",
            "Normal cognitive function. This score indicates intact cognitive abilities across all assessed domains including visuospatial/executive function, naming, attention, language, abstraction, memory, and orientation. No cognitive impairment is detected. This score suggests the individual is functioning at an expected cognitive level for their age and education. Regular cognitive health maintenance through mental stimulation, physical exercise, and social engagement is recommended. Routine cognitive screening may be appropriate during regular healthcare visits, especially for individuals with risk factors for cognitive decline such as cardiovascular disease, diabetes, or family history of dementia.",
        ),
        18..=25 => (
            "Mild Cognitive Impairment",
            "Possible mild cognitive impairment",
            "Possible mild cognitive impairment (MCI). This score suggests subtle cognitive changes that may affect daily functioning but do not meet criteria for dementia. Further comprehensive neuropsychological evaluation is recommended to confirm the diagnosis and identify specific cognitive domains affected. Consider assessment of activities of daily living, depression screening, and evaluation of potential reversible causes of cognitive impairment such as medication effects, sleep disorders, vitamin deficiencies, or thyroid dysfunction. Regular monitoring is essential as individuals with MCI have increased risk of progression to dementia. Cognitive training, lifestyle modifications including regular exercise, Mediterranean diet, social engagement, and management of cardiovascular risk factors may help slow cognitive decline.",
        ),
        10..=17 => (
            "Moderate Cognitive Impairment",
            "Moderate cognitive impairment",
            "Moderate cognitive impairment. This score indicates significant cognitive decline that likely affects multiple domains of cognitive function and impacts daily activities and independence. Comprehensive evaluation is needed including detailed neuropsychological testing, brain imaging (MRI), laboratory studies to exclude reversible causes, and assessment of functional abilities. Consider referral to neurology, geriatrics, or memory disorders clinic for specialized evaluation and management. Assessment of decision-making capacity, safety concerns, and need for supervision or support services is important. Family education about cognitive impairment, safety planning, legal and financial planning, and caregiver support resources should be provided. Treatment may include cholinesterase inhibitors or other medications depending on underlying etiology. Regular monitoring for progression and adjustment of care plan is essential.",
        ),
        _ => (
            "Severe Cognitive Impairment",
            "Severe cognitive impairment",
            "Severe cognitive impairment. This score indicates marked cognitive decline across multiple domains that significantly impairs daily functioning and independence. Immediate comprehensive evaluation is required including neurological assessment, brain imaging, laboratory studies, and functional assessment. Consider urgent referral to neurology or memory disorders specialty clinic. Assessment of safety, decision-making capacity, and need for supervised care or placement is critical. Evaluation for reversible causes of cognitive impairment should be prioritized. Family meeting to discuss diagnosis, prognosis, care planning, safety concerns, and available support services is essential. Consider advanced directives and legal/financial planning while some capacity may remain. Treatment may include medications for underlying dementia if appropriate, management of behavioral symptoms, and comprehensive care coordination. Regular monitoring for complications, caregiver support, and end-of-life planning discussions may be needed.",
        ),
    };

    Ok(CalculatorResponse::new(
        score,
        "points",
        Interpretation::new(stage, description, format!("MoCA Score {score}: {guidance}")),
    ))
}
