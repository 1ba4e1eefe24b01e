//! DECAF score for in-hospital mortality in acute exacerbations of COPD:
//! Dyspnea (eMRCD), Eosinopenia, Consolidation, Acidemia, atrial
//! Fibrillation. Range 0-6.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::{json, Value};

choice! {
    pub enum Dyspnea {
        /// eMRCD 1-4.
        NotTooDyspneic => "not_too_dyspneic",
        /// eMRCD 5a.
        TooDyspneicIndependent => "too_dyspneic_independent",
        /// eMRCD 5b.
        TooDyspneicDependent => "too_dyspneic_dependent",
    }
}

choice! {
    pub enum SmokingHistory {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
}

calculator_input! {
    pub struct DecafInput {
        pub emrcd_dyspnea: Dyspnea,
        pub eosinopenia: YesNo,
        pub consolidation: YesNo,
        pub acidemia: YesNo,
        pub atrial_fibrillation: YesNo,
        pub patient_age: Option<i64> => 35..=120,
        pub smoking_history: Option<SmokingHistory>,
    }
}

impl DecafInput {

    fn dyspnea_points(&self) -> i64 {
        match self.emrcd_dyspnea {
            Dyspnea::NotTooDyspneic => 0,
            Dyspnea::TooDyspneicIndependent => 1,
            Dyspnea::TooDyspneicDependent => 2,
        }
    }

    fn score(&self) -> i64 {
        self.dyspnea_points()
            + self.eosinopenia.points(1)
            + self.consolidation.points(1)
            + self.acidemia.points(1)
            + self.atrial_fibrillation.points(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Risk {
    Low,
    Intermediate,
    High,
}

impl Risk {
    fn from_score(score: i64) -> Self {
        match score {
            ..=1 => Risk::Low,
            2 => Risk::Intermediate,
            _ => Risk::High,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Risk::Low => "low",
            Risk::Intermediate => "intermediate",
            Risk::High => "high",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Risk::Low => "Low Risk",
            Risk::Intermediate => "Intermediate Risk",
            Risk::High => "High Risk",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Risk::Low => "Low mortality risk",
            Risk::Intermediate => "Intermediate mortality risk",
            Risk::High => "High mortality risk",
        }
    }

    fn mortality_range(self) -> &'static str {
        match self {
            Risk::Low => "0-1.5%",
            Risk::Intermediate => "5.4%",
            Risk::High => "15.3-50%",
        }
    }

    /// (recommendation, disposition, monitoring level)
    fn care(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Risk::Low => ("Routine management", "Standard ward care", "Routine monitoring"),
            Risk::Intermediate => (
                "Use clinician judgment re: disposition",
                "Consider higher level care",
                "Close monitoring",
            ),
            Risk::High => (
                "Consider escalation of care vs. palliative care",
                "HDU/ICU consideration",
                "Intensive monitoring",
            ),
        }
    }
}

fn specific_mortality(score: i64) -> &'static str {
    match score {
        0 => "0%",
        1 => "1.5%",
        2 => "5.4%",
        3 => "15.3%",
        4 => "31%",
        5 => "40%",
        _ => "50%",
    }
}

fn risk_comparison(score: i64) -> &'static str {
    match score {
        ..=1 => "Very low risk - similar to general medical ward patients",
        2 => "Moderate risk - 5-10 times higher than low-risk patients",
        3 => "High risk - 10-15 times higher than low-risk patients",
        _ => "Very high risk - >20 times higher than low-risk patients",
    }
}

fn clinical_assessment(input: &DecafInput, score: i64, risk: Risk) -> Value {
    let dyspnea = match input.emrcd_dyspnea {
        Dyspnea::NotTooDyspneic => "Not too dyspneic to leave house (0 points)",
        Dyspnea::TooDyspneicIndependent => {
            "Too dyspneic to leave house but independent with washing/dressing (1 point)"
        }
        Dyspnea::TooDyspneicDependent => "Too dyspneic to leave house and wash/dress (2 points)",
    };
    let components = vec![
        dyspnea.to_string(),
        format!(
            "Eosinopenia (<0.05×10⁹/L): {} ({} point)",
            input.eosinopenia,
            input.eosinopenia.points(1)
        ),
        format!(
            "Consolidation on chest X-ray: {} ({} point)",
            input.consolidation,
            input.consolidation.points(1)
        ),
        format!(
            "Acidemia (pH <7.30): {} ({} point)",
            input.acidemia,
            input.acidemia.points(1)
        ),
        format!(
            "Atrial fibrillation: {} ({} point)",
            input.atrial_fibrillation,
            input.atrial_fibrillation.points(1)
        ),
    ];

    let mut validity = Vec::new();
    if let Some(age) = input.patient_age {
        validity.push(format!("Age ≥35 years (age {age}) - score validity met"));
    }
    if let Some(smoking) = input.smoking_history {
        validity.push(
            match smoking {
                SmokingHistory::Yes => "≥10 pack-year smoking history assumed - score validity supported",
                SmokingHistory::No => "No significant smoking history - score validity may be limited",
                SmokingHistory::Unknown => {
                    "Smoking history unknown - consider verification for score validity"
                }
            }
            .to_string(),
        );
    }

    let considerations: Vec<&str> = [
        (
            input.consolidation,
            "Presence of consolidation suggests pneumonic process requiring antimicrobial therapy",
        ),
        (
            input.acidemia,
            "Acidemia indicates respiratory failure - consider ventilatory support",
        ),
        (
            input.atrial_fibrillation,
            "Atrial fibrillation may require rate control and anticoagulation consideration",
        ),
        (
            input.eosinopenia,
            "Eosinopenia may indicate systemic inflammation and poor prognosis",
        ),
    ]
    .into_iter()
    .filter_map(|(present, text)| present.is_yes().then_some(text))
    .collect();

    json!({
        "decaf_score": score,
        "risk_category": risk.token(),
        "score_components": components,
        "clinical_factors": [
            "Acute COPD exacerbation requiring hospitalization",
            format!("DECAF score of {score} indicates {} risk for in-hospital mortality", risk.token()),
            "Risk-appropriate management and monitoring recommended",
        ],
        "validity_criteria": validity,
        "additional_considerations": considerations,
    })
}

fn management(risk: Risk, score: i64, age: Option<i64>) -> Value {
    let primary: &[&str] = match risk {
        Risk::Low => &[
            "Standard ward-based care is appropriate",
            "Routine COPD exacerbation management protocol",
            "Standard bronchodilator and corticosteroid therapy",
            "Regular monitoring for clinical improvement",
            "Discharge planning and outpatient follow-up arrangement",
        ],
        Risk::Intermediate => &[
            "Close clinical monitoring and frequent reassessment",
            "Consider higher level of nursing care or step-down unit",
            "Aggressive bronchodilator and anti-inflammatory therapy",
            "Early assessment for respiratory failure and need for ventilation",
            "Consider early mobilization and respiratory therapy",
        ],
        Risk::High => &[
            "Strong consideration for HDU/ICU level care",
            "Intensive monitoring for respiratory failure",
            "Early assessment for non-invasive or invasive ventilation",
            "Aggressive medical management with close monitoring",
            "Palliative care consultation for goals of care discussion",
            "Consider early family meetings and advance directive discussions",
        ],
    };

    let mut specific = Vec::new();
    if let Some(age) = age {
        if age >= 75 {
            specific.push(
                "Advanced age requires careful assessment of goals of care and functional status",
            );
        }
        if age >= 80 && risk == Risk::High {
            specific.push(
                "Consider early palliative care consultation for comprehensive care planning",
            );
        }
    }
    if score >= 4 {
        specific.push(
            "DECAF score ≥4 indicates very high mortality risk - consider immediate escalation",
        );
    }
    if score == 6 {
        specific.push(
            "Maximum DECAF score - urgent consideration for intensive care or comfort measures",
        );
    }

    let monitoring: &[&str] = match risk {
        Risk::Low => &[
            "Standard nursing observations every 4-6 hours",
            "Daily chest X-ray if indicated",
            "Monitor response to bronchodilator therapy",
            "Assess for clinical improvement and discharge readiness",
        ],
        Risk::Intermediate => &[
            "Enhanced nursing observations every 2-4 hours",
            "Frequent assessment of respiratory status",
            "Consider arterial blood gas monitoring",
            "Monitor for signs of respiratory failure",
            "Regular reassessment of DECAF components",
        ],
        Risk::High => &[
            "Intensive monitoring with continuous assessment",
            "Frequent arterial blood gas monitoring",
            "Cardiac monitoring for arrhythmias",
            "Hourly respiratory assessment",
            "Consider HDU/ICU level monitoring",
            "Multidisciplinary team involvement",
        ],
    };

    json!({
        "primary_recommendations": primary,
        "specific_considerations": specific,
        "monitoring_requirements": monitoring,
        "escalation_criteria": {
            "respiratory": [
                "Worsening dyspnea or respiratory distress",
                "Deteriorating arterial blood gases",
                "Need for non-invasive or invasive ventilation",
                "Respiratory rate >30 or <8 breaths per minute",
            ],
            "cardiovascular": [
                "Hemodynamic instability",
                "New or worsening arrhythmias",
                "Signs of right heart failure",
                "Hypotension requiring vasopressor support",
            ],
            "general": [
                "Altered mental status or confusion",
                "Failure to respond to standard therapy",
                "Development of complications",
                "Patient or family request for escalation",
            ],
        },
    })
}

fn score_components(input: &DecafInput) -> Value {
    json!([
        {
            "component": "Extended MRC Dyspnea",
            "value": input.emrcd_dyspnea,
            "points": input.dyspnea_points(),
            "description": "Functional limitation due to dyspnea",
        },
        {
            "component": "Eosinopenia",
            "value": input.eosinopenia,
            "points": input.eosinopenia.points(1),
            "description": "Eosinophils <0.05×10⁹/L",
        },
        {
            "component": "Consolidation",
            "value": input.consolidation,
            "points": input.consolidation.points(1),
            "description": "Consolidation on chest X-ray",
        },
        {
            "component": "Acidemia",
            "value": input.acidemia,
            "points": input.acidemia.points(1),
            "description": "Arterial pH <7.30",
        },
        {
            "component": "Atrial Fibrillation",
            "value": input.atrial_fibrillation,
            "points": input.atrial_fibrillation.points(1),
            "description": "Atrial fibrillation on ECG or history",
        },
    ])
}

fn guidance(risk: Risk) -> Value {
    let (disposition, priority, family, prognosis) = match risk {
        Risk::Low => (
            "Standard ward care appropriate",
            "Routine priority for medical management",
            "Reassuring prognosis with standard care",
            "Excellent prognosis with appropriate treatment",
        ),
        Risk::Intermediate => (
            "Consider higher level care or close monitoring",
            "Moderate priority requiring frequent assessment",
            "Guarded prognosis requiring close monitoring",
            "Moderate risk requiring individualized care planning",
        ),
        Risk::High => (
            "Strong consideration for HDU/ICU care",
            "High priority requiring immediate attention",
            "Serious condition requiring family meeting",
            "High mortality risk warranting goals of care discussion",
        ),
    };
    json!({
        "disposition": disposition,
        "priority": priority,
        "family_communication": family,
        "prognosis_discussion": prognosis,
    })
}

fn follow_up(risk: Risk) -> Value {
    let (inpatient, discharge, outpatient) = match risk {
        Risk::Low => (
            "Daily assessment until discharge readiness",
            "Standard COPD action plan and outpatient follow-up",
            "Pulmonology follow-up within 2-4 weeks",
        ),
        Risk::Intermediate => (
            "Twice daily specialist review",
            "Enhanced discharge planning with home monitoring",
            "Early pulmonology follow-up within 1-2 weeks",
        ),
        Risk::High => (
            "Daily multidisciplinary team review",
            "Comprehensive discharge planning with community support",
            "Urgent pulmonology follow-up within 1 week",
        ),
    };
    json!({"inpatient": inpatient, "discharge": discharge, "outpatient": outpatient})
}

pub fn calculate(input: &DecafInput) -> CalcResult {
    let score = input.score();
    let risk = Risk::from_score(score);
    let mortality = specific_mortality(score);
    let (recommendation, disposition, monitoring) = risk.care();

    let base = format!(
        "DECAF score of {score} indicates {} with {} in-hospital mortality risk.",
        risk.label(),
        risk.mortality_range()
    );
    let text = match risk {
        Risk::Low => format!("{base} Routine ward-based management is appropriate with standard COPD exacerbation care."),
        Risk::Intermediate => format!("{base} Use clinical judgment regarding disposition and consider closer monitoring with frequent reassessment."),
        Risk::High => format!("{base} Strong consideration for escalation of care (HDU/ICU) or palliative care discussions depending on goals of care."),
    };

    Ok(CalculatorResponse::new(
        score,
        "DECAF score",
        Interpretation::new(risk.label(), risk.description(), text),
    )
    .with("decaf_score", score)
    .with("risk_category", risk.token())
    .with("mortality_risk", mortality)
    .with("mortality_range", risk.mortality_range())
    .with("recommendation", recommendation)
    .with("disposition", disposition)
    .with("monitoring_level", monitoring)
    .with("clinical_assessment", clinical_assessment(input, score, risk))
    .with("management_recommendations", management(risk, score, input.patient_age))
    .with(
        "mortality_details",
        json!({
            "risk": mortality,
            "confidence": if risk == Risk::Intermediate { "Moderate" } else { "High" },
            "basis": "Derived from prospective cohort studies with external validation",
            "time_frame": "In-hospital mortality risk",
            "comparison": risk_comparison(score),
        }),
    )
    .with("score_components", score_components(input))
    .with("clinical_guidance", guidance(risk))
    .with("follow_up_recommendations", follow_up(risk)))
}
