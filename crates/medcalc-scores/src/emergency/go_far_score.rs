//! GO-FAR: Good Outcome Following Attempted Resuscitation.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum GoFarAge {
        Under70 => "under_70",
        From70To74 => "70_to_74",
        From75To79 => "75_to_79",
        From80To84 => "80_to_84",
        From85 => "85_or_over",
    }
}

calculator_input! {
    pub struct GoFarInput {
        pub age_category: GoFarAge,
        pub neurologically_intact: YesNo,
        pub major_trauma: YesNo,
        pub acute_stroke: YesNo,
        pub metastatic_hematologic_cancer: YesNo,
        pub septicemia: YesNo,
        pub medical_noncardiac_diagnosis: YesNo,
        pub hepatic_insufficiency: YesNo,
        pub skilled_nursing_facility: YesNo,
        pub hypotension_hypoperfusion: YesNo,
        pub renal_insufficiency: YesNo,
        pub respiratory_insufficiency: YesNo,
        pub pneumonia: YesNo,
    }
}

pub fn calculate(input: &GoFarInput) -> CalcResult {
    let age = match input.age_category {
        GoFarAge::Under70 => 0,
        GoFarAge::From70To74 => 2,
        GoFarAge::From75To79 => 5,
        GoFarAge::From80To84 => 6,
        GoFarAge::From85 => 11,
    };
    let score = age
        + input.neurologically_intact.points(-15)
        + input.major_trauma.points(10)
        + input.acute_stroke.points(8)
        + input.metastatic_hematologic_cancer.points(7)
        + input.septicemia.points(7)
        + input.medical_noncardiac_diagnosis.points(7)
        + input.hepatic_insufficiency.points(6)
        + input.skilled_nursing_facility.points(6)
        + input.hypotension_hypoperfusion.points(5)
        + input.renal_insufficiency.points(4)
        + input.respiratory_insufficiency.points(4)
        + input.pneumonia.points(1);

    Ok(CalculatorResponse::new(score, "points", interpret(score)))
}

fn interpret(score: i64) -> Interpretation {
    let (stage, description, probability, recommendations) = if score <= -6 {
        (
            "Above Average Survival",
            "Good prognosis",
            ">15%",
            "Above average probability of survival with good neurological outcome. Resuscitation is generally appropriate and should be discussed with patient and family. Consider patient values and preferences in decision-making. Full resuscitation measures are typically warranted unless patient has expressed different preferences.",
        )
    } else if score <= 13 {
        (
            "Average Survival",
            "Intermediate prognosis",
            "3-15%",
            "Average probability of survival with good neurological outcome. Individualized decision-making is recommended based on patient values, preferences, and goals of care. Discuss benefits and risks of resuscitation with patient and family. Consider patient's quality of life expectations and advance directives.",
        )
    } else if score <= 23 {
        (
            "Low Survival",
            "Poor prognosis",
            "1-3%",
            "Low probability of survival with good neurological outcome. Consider discussing limitations of resuscitation with patient and family. Focus on comfort measures and quality of life. Explore patient's values and preferences regarding aggressive interventions. Consider palliative care consultation.",
        )
    } else {
        (
            "Very Low Survival",
            "Very poor prognosis",
            "<1%",
            "Very low probability of survival with good neurological outcome. Strong consideration for do-not-attempt-resuscitation (DNAR) order after appropriate discussion with patient and family. Focus on comfort care and symptom management. Consider palliative care consultation and transition to comfort-focused goals of care.",
        )
    };
    Interpretation::new(
        stage,
        description,
        format!(
            "GO-FAR Score: {score} points. Survival probability category: {stage} ({probability}). Clinical recommendations: {recommendations} Important note: This score should be used as part of comprehensive clinical assessment and shared decision-making, not as the sole determinant of resuscitation status. Consider patient autonomy, cultural factors, and individual circumstances."
        ),
    )
}
