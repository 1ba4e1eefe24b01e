//! Clinical Frailty Scale (CFS), validated for patients aged 65 and over.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum DementiaStatus {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
}

calculator_input! {
    pub struct ClinicalFrailtyInput {
        pub frailty_level: i64 => 1..=9,
        pub age: i64 => 65..=120,
        pub dementia_present: Option<DementiaStatus>,
    }
}

/// Label, description and risk tier per CFS level.
fn level_details(level: i64) -> (&'static str, &'static str, RiskTier) {
    match level {
        1 => (
            "Very Fit",
            "People who are robust, active, energetic, and motivated. These people commonly exercise regularly. They are among the fittest for their age.",
            RiskTier::VeryLow,
        ),
        2 => (
            "Fit",
            "People who have no severe disease symptoms but are less fit than category 1. They exercise or are very active occasionally, e.g., seasonally.",
            RiskTier::VeryLow,
        ),
        3 => (
            "Managing Well",
            "People whose medical problems are well-controlled but are not regularly active beyond routine walking.",
            RiskTier::Low,
        ),
        4 => (
            "Living with Very Mild Frailty",
            "Previously named 'Vulnerable'. While not dependent on others for daily help, symptoms often limit activities.",
            RiskTier::Mild,
        ),
        5 => (
            "Living with Mild Frailty",
            "These people often have more evident slowing, and need help in high order instrumental activities of daily living (finances, transportation, heavy housework, medications). Typically, mild frailty progressively impairs shopping and walking outside alone, meal preparation, and housework.",
            RiskTier::Moderate,
        ),
        6 => (
            "Living with Moderate Frailty",
            "People need help with all outside activities and with keeping house. Inside, they often have problems with stairs and need help with bathing and might need minimal assistance (cuing, standby) with dressing.",
            RiskTier::Moderate,
        ),
        7 => (
            "Living with Severe Frailty",
            "Completely dependent for personal care, from whatever cause (physical or cognitive). Even so, they seem stable and not at high risk of dying (within ~6 months).",
            RiskTier::High,
        ),
        8 => (
            "Living with Very Severe Frailty",
            "Completely dependent, approaching the end of life. Typically, they could not recover even from a minor illness.",
            RiskTier::VeryHigh,
        ),
        _ => (
            "Terminally Ill",
            "Approaching the end of life. This category applies to people with a life expectancy of under 6 months, who are not otherwise evidently frail.",
            RiskTier::VeryHigh,
        ),
    }
}

#[derive(Debug, Clone, Copy)]
enum RiskTier {
    VeryLow,
    Low,
    Mild,
    Moderate,
    High,
    VeryHigh,
}

impl RiskTier {
    fn token(self) -> &'static str {
        match self {
            RiskTier::VeryLow => "very_low",
            RiskTier::Low => "low",
            RiskTier::Mild => "mild",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
            RiskTier::VeryHigh => "very_high",
        }
    }

    /// Overall label, six-month mortality, readmission and functional decline.
    fn outlook(self) -> (&'static str, &'static str, &'static str, &'static str) {
        match self {
            RiskTier::VeryLow => ("Very Low Risk", "<5%", "<15%", "<10%"),
            RiskTier::Low => ("Low Risk", "5-10%", "15-25%", "10-20%"),
            RiskTier::Mild => ("Mild Risk", "10-15%", "25-35%", "20-30%"),
            RiskTier::Moderate => ("Moderate Risk", "15-25%", "35-45%", "30-50%"),
            RiskTier::High => ("High Risk", "25-40%", "45-60%", "50-70%"),
            RiskTier::VeryHigh => ("Very High Risk", ">40%", ">60%", ">70%"),
        }
    }
}

fn frailty_category(level: i64) -> &'static str {
    match level {
        ..=3 => "Fit to Managing Well",
        4 => "Very Mild Frailty",
        5 | 6 => "Mild to Moderate Frailty",
        7 | 8 => "Severe to Very Severe Frailty",
        _ => "Terminally Ill",
    }
}

pub fn calculate(input: &ClinicalFrailtyInput) -> CalcResult {
    let level = input.frailty_level;

    let (label, description, tier) = level_details(level);
    let (overall, mortality, readmission, decline) = tier.outlook();
    let institutionalization = match level {
        ..=3 => "Very low risk of requiring institutional care",
        4 => "Low risk of requiring institutional care",
        5 | 6 => "Moderate to high risk of requiring institutional care",
        _ => "High risk or already requiring institutional care",
    };

    let (mut recommendations, monitoring, mut interventions, setting) = match level {
        ..=3 => (
            vec![
                "Focus on maintaining current fitness and preventing decline",
                "Encourage regular physical activity and exercise",
                "Ensure adequate nutrition and hydration",
                "Annual comprehensive health assessment",
            ],
            "Annual frailty reassessment",
            vec!["Exercise programs", "Nutritional counseling", "Preventive care"],
            "Community-based care with outpatient follow-up",
        ),
        4 => (
            vec![
                "Close monitoring for early signs of decline",
                "Consider preventive interventions",
                "Optimize management of chronic conditions",
                "Fall prevention strategies",
            ],
            "6-monthly frailty reassessment",
            vec!["Comprehensive geriatric assessment", "Physical therapy", "Medication review"],
            "Community-based care with outpatient follow-up",
        ),
        5 | 6 => (
            vec![
                "Comprehensive geriatric assessment indicated",
                "Consider targeted interventions for identified deficits",
                "Coordinate care with geriatrics team",
                "Assess need for home support services",
            ],
            "3-6 monthly reassessment",
            vec!["Multidisciplinary care team", "Home care services", "Caregiver support"],
            "Consider home care services or assisted living",
        ),
        _ => (
            vec![
                "Focus on comfort and quality of life",
                "Consider palliative care consultation",
                "Assess appropriate care setting",
                "Support family and caregivers",
            ],
            "Frequent reassessment as clinically indicated",
            vec!["Palliative care", "End-of-life planning", "Symptom management"],
            "May require skilled nursing or residential care",
        ),
    };
    if input.dementia_present == Some(DementiaStatus::Yes) {
        recommendations.push("Consider dementia-specific care pathways");
        interventions.push("Cognitive support services");
    }

    let outlook = match level {
        ..=3 => "This represents low frailty risk with good prognosis for recovery and suitability for intensive interventions. \
                 Focus should be on maintaining current fitness level and preventing decline through regular activity and preventive care.",
        4 => "This represents vulnerability to stressors with need for close monitoring. \
              Patient may benefit from preventive interventions and comprehensive assessment while maintaining relative independence.",
        5 | 6 => "This represents significant functional limitations requiring assistance with complex activities. \
                  Comprehensive geriatric assessment and targeted interventions are recommended.",
        _ => "This represents very high risk of adverse outcomes with focus needed on comfort, quality of life, and appropriate care setting. \
              Consider palliative care consultation and end-of-life planning.",
    };
    let text = format!(
        "CFS level {level} ({label}) indicates {} {outlook}",
        description.to_lowercase()
    );

    Ok(
        CalculatorResponse::new(level, "CFS level", Interpretation::new(label, description, text))
            .with(
                "risk_assessment",
                json!({
                    "overall_risk": overall,
                    "mortality_6_month": mortality,
                    "hospital_readmission": readmission,
                    "functional_decline": decline,
                    "institutionalization_risk": institutionalization,
                }),
            )
            .with(
                "clinical_recommendations",
                json!({
                    "primary_recommendations": recommendations,
                    "monitoring_schedule": [monitoring],
                    "suggested_interventions": interventions,
                    "care_setting": setting,
                }),
            )
            .with("frailty_category", frailty_category(level))
            .with("mortality_risk", if level == 4 { "low" } else { tier.token() }),
    )
}
