//! Mayo Alliance Prognostic System (MAPS) for systemic mastocytosis.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum SmType {
        IndolentSmoldering => "indolent_smoldering_sm",
        Advanced => "advanced_sm",
    }
}

choice! {
    pub enum AlpLevel {
        Normal => "normal",
        Elevated => "elevated",
    }
}

choice! {
    pub enum AdverseMutations {
        Absent => "absent",
        Present => "present",
    }
}

calculator_input! {
    pub struct MapsInput {
        pub sm_type: SmType,
        pub patient_age: i64 => 18..=100,
        /// ×10⁹/L
        pub platelet_count: f64 => 10.0..=1000.0,
        pub serum_alp: AlpLevel,
        pub adverse_mutations: AdverseMutations,
    }
}

pub fn calculate(input: &MapsInput) -> CalcResult {
    let components = json!({
        "sm_type": if input.sm_type == SmType::Advanced { 2 } else { 0 },
        "age": if input.patient_age > 60 { 1 } else { 0 },
        "platelets": if input.platelet_count < 150.0 { 1 } else { 0 },
        "serum_alp": if input.serum_alp == AlpLevel::Elevated { 1 } else { 0 },
        "adverse_mutations": if input.adverse_mutations == AdverseMutations::Present { 1 } else { 0 },
    });
    let score: i64 = components
        .as_object()
        .map(|parts| parts.values().filter_map(|v| v.as_i64()).sum())
        .unwrap_or(0);

    let (interpretation, median_survival, five_year, approach) = match score {
        ..=2 => (
            Interpretation::new(
                "Low Risk",
                "Excellent prognosis",
                format!(
                    "MAPS score of {score} indicates low risk systemic mastocytosis with excellent prognosis. Median survival is 198 months \
                     (16.5 years) with 5-year survival rate approaching 99%. Standard monitoring and supportive care are usually sufficient, \
                     with treatment reserved for symptomatic disease or disease progression."
                ),
            ),
            "198 months (16.5 years)",
            "99%",
            "Standard monitoring and supportive care",
        ),
        3..=4 => (
            Interpretation::new(
                "Intermediate Risk",
                "Intermediate prognosis",
                format!(
                    "MAPS score of {score} indicates intermediate risk systemic mastocytosis with variable prognosis. Median survival ranges \
                     from 36-85 months (3-7 years) depending on specific risk factors present. These patients require closer monitoring for \
                     disease progression and may benefit from earlier intervention."
                ),
            ),
            "36-85 months (3-7 years)",
            "50-91%",
            "Closer monitoring with earlier intervention consideration",
        ),
        _ => (
            Interpretation::new(
                "High Risk",
                "Poor prognosis",
                format!(
                    "MAPS score of {score} indicates high risk systemic mastocytosis with poor prognosis. Median survival is approximately \
                     12 months with 5-year survival rate of only 4-24%. Aggressive treatment should be considered, including targeted \
                     therapies (such as KIT inhibitors), cytoreductive treatment, or enrollment in clinical trials."
                ),
            ),
            "12 months (1 year)",
            "4-24%",
            "Aggressive treatment and clinical trial consideration",
        ),
    };

    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("component_scores", components)
        .with(
            "risk_assessment",
            json!({
                "median_survival": median_survival,
                "five_year_survival_rate": five_year,
                "clinical_approach": approach,
                "score_range": format!("{score}/6 points"),
            }),
        ))
}
