//! I-SEE: index of severity for eosinophilic esophagitis.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};

choice! {
    pub enum SymptomFrequency {
        None => "none",
        Weekly => "weekly",
        Daily => "daily",
        MultipleDaily => "multiple_daily",
    }
}

choice! {
    pub enum FoodImpaction {
        None => "none",
        AdultWithEr => "adult_with_er",
        PediatricWithEr => "pediatric_with_er",
    }
}

choice! {
    pub enum Presence {
        None => "none",
        Present => "present",
    }
}

choice! {
    pub enum InflammatoryFeatures {
        None => "none",
        Localized => "localized",
        Diffuse => "diffuse",
    }
}

choice! {
    pub enum EosinophilCount {
        Under15 => "under_15",
        From15To60 => "15_to_60",
        Over60 => "over_60",
    }
}

choice! {
    pub enum RingsStrictures {
        None => "none",
        EndoscopePassesEasily => "endoscope_passes_easily",
        RequiresDilation => "requires_dilation",
        CannotPassEndoscope => "cannot_pass_endoscope",
    }
}

calculator_input! {
    pub struct ISeeInput {
        pub symptoms_frequency: SymptomFrequency,
        pub food_impaction: FoodImpaction,
        pub hospitalization_due_eoe: YesNo,
        pub esophageal_perforation: YesNo,
        pub malnutrition: Presence,
        pub persistent_inflammation: Presence,
        pub inflammatory_features: InflammatoryFeatures,
        pub eosinophil_count: EosinophilCount,
        pub rings_strictures: RingsStrictures,
    }
}

fn complication(presence: Presence) -> i64 {
    match presence {
        Presence::None => 0,
        Presence::Present => 15,
    }
}

pub fn calculate(input: &ISeeInput) -> CalcResult {
    let symptoms = match input.symptoms_frequency {
        SymptomFrequency::None => 0,
        SymptomFrequency::Weekly => 1,
        SymptomFrequency::Daily => 2,
        SymptomFrequency::MultipleDaily => 4,
    };
    let impaction = match input.food_impaction {
        FoodImpaction::None => 0,
        FoodImpaction::AdultWithEr => 2,
        FoodImpaction::PediatricWithEr => 4,
    };
    let inflammatory = match input.inflammatory_features {
        InflammatoryFeatures::None => 0,
        InflammatoryFeatures::Localized => 1,
        InflammatoryFeatures::Diffuse => 2,
    };
    let eosinophils = match input.eosinophil_count {
        EosinophilCount::Under15 => 0,
        EosinophilCount::From15To60 => 1,
        EosinophilCount::Over60 => 2,
    };
    let fibrostenotic = match input.rings_strictures {
        RingsStrictures::None => 0,
        RingsStrictures::EndoscopePassesEasily => 1,
        RingsStrictures::RequiresDilation => 2,
        RingsStrictures::CannotPassEndoscope => 15,
    };

    let score = symptoms
        + impaction
        + input.hospitalization_due_eoe.points(4)
        + input.esophageal_perforation.points(15)
        + complication(input.malnutrition)
        + complication(input.persistent_inflammation)
        + inflammatory
        + eosinophils
        + fibrostenotic;

    Ok(CalculatorResponse::new(score, "points", interpret(score)))
}

fn interpret(score: i64) -> Interpretation {
    match score {
        0 => Interpretation::new(
            "Inactive",
            "Score 0 points",
            "Inactive EoE. No evidence of active disease. Continue current management and monitor for disease recurrence.",
        ),
        1..=6 => Interpretation::new(
            "Mild",
            format!("Score {score} points (1-6 points)"),
            "Mild EoE severity. Disease is present but with minimal impact on function and low complication risk. Standard topical corticosteroid therapy typically effective.",
        ),
        7..=14 => Interpretation::new(
            "Moderate",
            format!("Score {score} points (7-14 points)"),
            "Moderate EoE severity. Significant disease activity with moderate functional impact. May require combination therapy or dietary interventions alongside standard treatment.",
        ),
        _ => Interpretation::new(
            "Severe",
            format!("Score {score} points (≥15 points)"),
            "Severe EoE. High disease burden with significant complications or refractory features. May require advanced therapies, mechanical interventions (dilation), or multidisciplinary management approach.",
        ),
    }
}
