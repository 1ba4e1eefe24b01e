//! Crohn's Disease Activity Index (CDAI).

use medcalc_core::math::round_to;
use medcalc_core::{
    calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo,
};
use serde_json::json;

choice! {
    pub enum AbdominalPain {
        None => "none",
        Mild => "mild",
        Moderate => "moderate",
        Severe => "severe",
    }
}

choice! {
    pub enum Wellbeing {
        GenerallyWell => "generally_well",
        SlightlyUnderPar => "slightly_under_par",
        Poor => "poor",
        VeryPoor => "very_poor",
        Terrible => "terrible",
    }
}

choice! {
    pub enum AbdominalMass {
        None => "none",
        Questionable => "questionable",
        Definite => "definite",
    }
}

calculator_input! {
    pub struct CdaiCrohnsInput {
        pub liquid_stools_week: i64 => 0..=200,
        pub abdominal_pain_score: AbdominalPain,
        pub general_wellbeing_score: Wellbeing,
        pub arthritis_arthralgias: YesNo,
        pub iritis_uveitis: YesNo,
        pub erythema_nodosum: YesNo,
        pub anal_fissure_fistula: YesNo,
        pub other_fistulas: YesNo,
        pub fever: YesNo,
        pub antidiarrheal_use: YesNo,
        pub abdominal_mass: AbdominalMass,
        pub patient_sex: Sex,
        pub observed_hematocrit: f64 => 10.0..=60.0,
        pub current_weight: f64 => 30.0..=300.0,
        pub ideal_weight: f64 => 30.0..=300.0,
    }
}

pub fn calculate(input: &CdaiCrohnsInput) -> CalcResult {
    let pain = match input.abdominal_pain_score {
        AbdominalPain::None => 0,
        AbdominalPain::Mild => 1,
        AbdominalPain::Moderate => 2,
        AbdominalPain::Severe => 3,
    };
    let wellbeing = match input.general_wellbeing_score {
        Wellbeing::GenerallyWell => 0,
        Wellbeing::SlightlyUnderPar => 1,
        Wellbeing::Poor => 2,
        Wellbeing::VeryPoor => 3,
        Wellbeing::Terrible => 4,
    };
    let mass = match input.abdominal_mass {
        AbdominalMass::None => 0,
        AbdominalMass::Questionable => 2,
        AbdominalMass::Definite => 5,
    };
    let complications = [
        input.arthritis_arthralgias,
        input.iritis_uveitis,
        input.erythema_nodosum,
        input.anal_fissure_fistula,
        input.other_fistulas,
        input.fever,
    ]
    .iter()
    .filter(|c| c.is_yes())
    .count() as i64;

    let expected_hct = if input.patient_sex.is_female() { 42.0 } else { 47.0 };
    let hematocrit = (expected_hct - input.observed_hematocrit).max(0.0) * 6.0;
    let weight =
        ((input.ideal_weight - input.current_weight) / input.ideal_weight * 100.0).max(0.0);

    let components = [
        ("liquid_stools", (input.liquid_stools_week * 2) as f64, "Number of liquid stools × 2"),
        ("abdominal_pain", (pain * 5) as f64, "Abdominal pain rating × 5"),
        ("general_wellbeing", (wellbeing * 7) as f64, "General well-being rating × 7"),
        ("extraintestinal", (complications * 20) as f64, "Number of extraintestinal complications × 20"),
        ("antidiarrheal", input.antidiarrheal_use.points(30) as f64, "Antidiarrheal drug use × 30"),
        ("abdominal_mass", (mass * 10) as f64, "Abdominal mass presence × 10"),
        ("hematocrit", hematocrit, "Hematocrit deficit × 6"),
        ("weight", weight, "Weight deficit percentage × 1"),
    ];
    let total = components.iter().map(|(_, score, _)| score).sum::<f64>().round() as i64;

    let breakdown: serde_json::Map<String, serde_json::Value> = components
        .iter()
        .map(|(key, score, description)| {
            (
                key.to_string(),
                json!({"score": round_to(*score, 1), "description": description}),
            )
        })
        .collect();

    Ok(CalculatorResponse::new(total, "points", interpret(total))
        .with("component_breakdown", breakdown)
        .with(
            "clinical_significance",
            json!({
                "treatment_response_criteria": {
                    "significant_response": "≥70 point decrease from baseline",
                    "major_response": "≥100 point decrease from baseline",
                    "remission_threshold": "<150 points",
                },
                "monitoring_frequency": monitoring_frequency(total),
                "treatment_considerations": treatment_considerations(total),
            }),
        ))
}

fn monitoring_frequency(total: i64) -> &'static str {
    match total {
        ..150 => "Every 3-6 months or as clinically indicated",
        150..220 => "Every 2-4 weeks until improvement",
        220..300 => "Every 1-2 weeks with close monitoring",
        _ => "Weekly or more frequently, consider hospitalization",
    }
}

fn treatment_considerations(total: i64) -> &'static [&'static str] {
    match total {
        ..150 => &[
            "Continue current maintenance therapy",
            "Monitor for disease recurrence",
            "Focus on quality of life and nutrition",
        ],
        150..220 => &[
            "Optimize current medications",
            "Consider dose escalation",
            "Evaluate adherence and absorption",
        ],
        220..300 => &[
            "Consider corticosteroids for rapid symptom control",
            "Initiate or optimize immunomodulators",
            "Consider biologic therapy",
            "Nutritional assessment and support",
        ],
        _ => &[
            "Consider hospitalization",
            "Intensive medical therapy",
            "Evaluate for complications",
            "Consider surgical consultation",
            "Nutritional support and monitoring",
        ],
    }
}

fn interpret(total: i64) -> Interpretation {
    match total {
        ..150 => Interpretation::new(
            "Remission",
            "Clinical remission",
            format!("CDAI score of {total} indicates clinical remission. Patients in this range are typically rated as 'very well' by physicians. Continue current maintenance therapy and monitor regularly."),
        ),
        150..220 => Interpretation::new(
            "Mild Disease",
            "Mild disease activity",
            format!("CDAI score of {total} indicates mild disease activity. Consider optimization of current therapy or step-up treatment. Monitor closely and reassess in 2-4 weeks."),
        ),
        220..300 => Interpretation::new(
            "Moderate Disease",
            "Moderate disease activity",
            format!("CDAI score of {total} indicates moderate disease activity. Consider corticosteroids, immunomodulators, or biologic therapy. Reassess in 2-4 weeks."),
        ),
        300..=450 => Interpretation::new(
            "Severe Disease",
            "Severe disease activity",
            format!("CDAI score of {total} indicates severe disease activity. Consider hospitalization, corticosteroids, immunosuppressants, or biologic therapy. Close monitoring required."),
        ),
        _ => Interpretation::new(
            "Very Severe Disease",
            "Very severe disease activity",
            format!("CDAI score of {total} indicates very severe disease activity. Consider hospitalization, intensive medical therapy, or surgical intervention. Immediate specialist consultation recommended."),
        ),
    }
}
