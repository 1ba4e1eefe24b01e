//! DHAKA dehydration score for children under five with acute diarrhea.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Value};

choice! {
    pub enum GeneralAppearance {
        Normal => "normal",
        RestlessIrritable => "restless_irritable",
        LethargicUnconscious => "lethargic_unconscious",
    }
}

choice! {
    pub enum Respirations {
        Normal => "normal",
        Deep => "deep",
    }
}

choice! {
    pub enum SkinPinch {
        Normal => "normal",
        Slow => "slow",
        VerySlow => "very_slow",
    }
}

choice! {
    pub enum Tears {
        Normal => "normal",
        Decreased => "decreased",
        Absent => "absent",
    }
}

calculator_input! {
    pub struct DhakaInput {
        pub general_appearance: GeneralAppearance,
        pub respirations: Respirations,
        pub skin_pinch: SkinPinch,
        pub tears: Tears,
        pub child_age_months: Option<i64> => 1..=59,
        /// Days.
        pub diarrhea_duration: Option<i64> => 1..=13,
    }
}

impl DhakaInput {

    fn appearance(&self) -> (i64, &'static str) {
        match self.general_appearance {
            GeneralAppearance::Normal => (0, "Normal general appearance (0 points)"),
            GeneralAppearance::RestlessIrritable => (2, "Restless or irritable (2 points)"),
            GeneralAppearance::LethargicUnconscious => (4, "Lethargic or unconscious (4 points)"),
        }
    }

    fn respiration(&self) -> (i64, &'static str) {
        match self.respirations {
            Respirations::Normal => (0, "Normal respirations (0 points)"),
            Respirations::Deep => (2, "Deep respirations (2 points)"),
        }
    }

    fn skin(&self) -> (i64, &'static str) {
        match self.skin_pinch {
            SkinPinch::Normal => (0, "Normal skin pinch (0 points)"),
            SkinPinch::Slow => (2, "Slow skin pinch return (2 points)"),
            SkinPinch::VerySlow => (4, "Very slow skin pinch return (4 points)"),
        }
    }

    fn tear(&self) -> (i64, &'static str) {
        match self.tears {
            Tears::Normal => (0, "Normal tears when crying (0 points)"),
            Tears::Decreased => (1, "Decreased tears when crying (1 point)"),
            Tears::Absent => (2, "Absent tears when crying (2 points)"),
        }
    }

    fn score(&self) -> i64 {
        self.appearance().0 + self.respiration().0 + self.skin().0 + self.tear().0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dehydration {
    None,
    Some,
    Severe,
}

impl Dehydration {
    fn from_score(score: i64) -> Self {
        match score {
            ..=1 => Dehydration::None,
            2..=3 => Dehydration::Some,
            _ => Dehydration::Severe,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Dehydration::None => "none",
            Dehydration::Some => "some",
            Dehydration::Severe => "severe",
        }
    }
}

struct Category {
    label: &'static str,
    description: &'static str,
    fluid_loss: &'static str,
    management: &'static str,
    monitoring: &'static str,
    disposition: &'static str,
}

fn category(d: Dehydration) -> Category {
    match d {
        Dehydration::None => Category {
            label: "No Dehydration",
            description: "Minimal or no fluid loss",
            fluid_loss: "<3%",
            management: "Encourage fluid intake, continue normal diet",
            monitoring: "Routine monitoring",
            disposition: "Outpatient management",
        },
        Dehydration::Some => Category {
            label: "Some Dehydration",
            description: "Mild to moderate fluid loss",
            fluid_loss: "3-9%",
            management: "Supervised oral rehydration therapy",
            monitoring: "Close monitoring",
            disposition: "Outpatient with close follow-up",
        },
        Dehydration::Severe => Category {
            label: "Severe Dehydration",
            description: "Significant fluid loss requiring immediate intervention",
            fluid_loss: "≥10%",
            management: "Immediate IV rehydration, potential hospitalization",
            monitoring: "Intensive monitoring",
            disposition: "Hospitalization required",
        },
    }
}

fn clinical_assessment(input: &DhakaInput, score: i64, d: Dehydration, c: &Category) -> Value {
    let mut validity = Vec::new();
    if let Some(age) = input.child_age_months {
        validity.push(format!("Age {age} months (<60 months) - score validity met"));
    }
    if let Some(days) = input.diarrhea_duration {
        validity.push(format!(
            "Diarrhea duration {days} days (<14 days) - acute diarrhea criteria met"
        ));
    }

    let mut risk_factors = Vec::new();
    if input.general_appearance != GeneralAppearance::Normal {
        risk_factors.push("Altered mental status indicates significant dehydration");
    }
    if input.respirations == Respirations::Deep {
        risk_factors.push("Deep respirations suggest metabolic acidosis");
    }
    if input.skin_pinch != SkinPinch::Normal {
        risk_factors.push("Poor skin elasticity indicates volume depletion");
    }
    if input.tears != Tears::Normal {
        risk_factors.push("Reduced tear production indicates dehydration");
    }

    json!({
        "dhaka_score": score,
        "dehydration_category": d.token(),
        "score_components": [input.appearance().1, input.respiration().1, input.skin().1, input.tear().1],
        "clinical_factors": [
            "Child with acute diarrhea presenting with dehydration assessment",
            format!("DHAKA score of {score} indicates {} dehydration", d.token()),
            format!("Requires {}", c.management.to_lowercase()),
        ],
        "validity_criteria": validity,
        "risk_factors": risk_factors,
    })
}

fn management_recommendations(d: Dehydration, score: i64, age: Option<i64>) -> Value {
    let primary: &[&str] = match d {
        Dehydration::None => &[
            "Encourage continued fluid intake and breastfeeding",
            "Continue normal age-appropriate diet",
            "Provide zinc supplementation as recommended",
            "Monitor for signs of worsening dehydration",
            "Educate caregivers on warning signs",
            "Follow-up as needed based on clinical course",
        ],
        Dehydration::Some => &[
            "Initiate supervised oral rehydration therapy (ORT)",
            "Administer ORS solution according to WHO/UNICEF recommendations",
            "Monitor response to therapy closely",
            "Continue breastfeeding and age-appropriate feeding",
            "Provide zinc supplementation",
            "Reassess hydration status frequently",
            "Consider admission if ORT fails or tolerance is poor",
        ],
        Dehydration::Severe => &[
            "Immediate intravenous fluid resuscitation",
            "Rapid assessment and stabilization of vital signs",
            "Monitor for complications (shock, electrolyte imbalances)",
            "Hospitalization for close monitoring",
            "Transition to ORT once clinically stable",
            "Address underlying causes and complications",
            "Multidisciplinary care coordination",
        ],
    };

    let mut specific = Vec::new();
    match age {
        Some(a) if a < 6 => {
            specific.push("Infant <6 months - breastfeeding strongly encouraged");
            specific.push("Consider lower threshold for admission due to higher risk");
        }
        Some(a) if a < 12 => {
            specific.push("Infant <12 months - close monitoring for rapid deterioration")
        }
        Some(a) if a < 24 => {
            specific.push("Toddler - may require modified approach for cooperation with ORT")
        }
        _ => {}
    }
    if score >= 6 {
        specific.push("High DHAKA score indicates very severe dehydration - urgent intervention needed");
    }
    if d == Dehydration::Severe {
        specific.push("Consider ICU admission if shock or complications present");
        specific.push("Rapid sequence rehydration with careful monitoring");
    }

    let (fluid_therapy, monitoring) = match d {
        Dehydration::None => (
            json!({
                "route": "Oral",
                "solution": "Continue normal fluids and breast milk",
                "rate": "As tolerated",
                "duration": "Until clinically improved",
                "monitoring": "Routine observation",
            }),
            json!([
                "Monitor for worsening symptoms",
                "Assess fluid intake and output",
                "Watch for signs of deterioration",
                "Follow-up in 24-48 hours",
            ]),
        ),
        Dehydration::Some => (
            json!({
                "route": "Oral rehydration therapy",
                "solution": "WHO/UNICEF ORS solution",
                "rate": "75 mL/kg over 4 hours if <2 years, 50 mL/kg if ≥2 years",
                "duration": "4-6 hours with reassessment",
                "monitoring": "Hourly assessment for first 4 hours",
            }),
            json!([
                "Assess hydration status every 1-2 hours",
                "Monitor tolerance of oral rehydration",
                "Watch for signs of improvement or deterioration",
                "Reassess DHAKA score after 4 hours of therapy",
                "Monitor urine output and frequency",
            ]),
        ),
        Dehydration::Severe => (
            json!({
                "route": "Intravenous",
                "solution": "Lactated Ringer's or Normal Saline",
                "rate": "20 mL/kg bolus, then 100 mL/kg over 6 hours",
                "duration": "Until hemodynamically stable, then transition to ORT",
                "monitoring": "Continuous monitoring with frequent vital signs",
            }),
            json!([
                "Continuous monitoring of vital signs",
                "Frequent assessment of perfusion and mental status",
                "Hourly urine output measurement",
                "Monitor for fluid overload and electrolyte imbalances",
                "Serial assessment of hydration parameters",
                "Consider central venous access if difficult IV access",
            ]),
        ),
    };

    json!({
        "primary_recommendations": primary,
        "specific_considerations": specific,
        "fluid_therapy": fluid_therapy,
        "monitoring_requirements": monitoring,
    })
}

fn rehydration_details(d: Dehydration) -> Value {
    match d {
        Dehydration::None => json!({
            "urgency": "Non-urgent",
            "setting": "Home or outpatient",
            "expected_duration": "24-48 hours",
            "success_indicators": ["Maintained normal activity level", "Good fluid intake", "Normal urination pattern"],
            "failure_indicators": ["Decreased fluid intake", "Worsening lethargy", "Decreased urination"],
        }),
        Dehydration::Some => json!({
            "urgency": "Moderate urgency",
            "setting": "Outpatient with close supervision",
            "expected_duration": "4-6 hours",
            "success_indicators": [
                "Improved alertness and activity",
                "Good tolerance of ORS",
                "Improved skin elasticity",
                "Increased urination",
            ],
            "failure_indicators": [
                "Poor tolerance of ORS",
                "Persistent lethargy",
                "Worsening dehydration signs",
                "Inability to keep fluids down",
            ],
        }),
        Dehydration::Severe => json!({
            "urgency": "Emergency",
            "setting": "Emergency department or hospital",
            "expected_duration": "6-24 hours",
            "success_indicators": [
                "Improved perfusion and mental status",
                "Stabilized vital signs",
                "Improved urine output",
                "Ability to transition to oral intake",
            ],
            "failure_indicators": [
                "Persistent shock",
                "Worsening mental status",
                "Electrolyte abnormalities",
                "Complications of rapid rehydration",
            ],
        }),
    }
}

fn caregiver_education(d: Dehydration) -> Vec<&'static str> {
    let mut education = vec![
        "Continue breastfeeding throughout illness if applicable",
        "Offer fluids frequently in small amounts",
        "Watch for signs of worsening dehydration",
        "Seek medical attention if child becomes more lethargic",
        "Complete zinc supplementation course as prescribed",
    ];
    education.extend_from_slice(match d {
        Dehydration::None => &[
            "Child has minimal dehydration and can be managed at home",
            "Continue normal feeding and encourage extra fluids",
            "Monitor for any worsening of condition",
            "Return for follow-up if symptoms persist or worsen",
        ][..],
        Dehydration::Some => &[
            "Child needs oral rehydration therapy",
            "Give ORS solution frequently in small amounts",
            "Continue feeding once vomiting stops",
            "Watch closely for improvement over next few hours",
            "Return immediately if unable to keep fluids down",
        ][..],
        Dehydration::Severe => &[
            "Child has severe dehydration requiring immediate medical care",
            "Hospital treatment is necessary",
            "IV fluids will be needed initially",
            "Close monitoring is required until stable",
            "Follow all medical team instructions carefully",
        ][..],
    });
    education
}

fn follow_up(d: Dehydration) -> Value {
    match d {
        Dehydration::None => json!({
            "timing": "24-48 hours if symptoms persist",
            "location": "Primary care or return visit as needed",
            "monitoring": "Home monitoring by caregivers",
            "red_flags": "Persistent vomiting, lethargy, decreased urination",
        }),
        Dehydration::Some => json!({
            "timing": "4-6 hours for reassessment, then daily until resolved",
            "location": "Healthcare facility for initial reassessment",
            "monitoring": "Close outpatient monitoring",
            "red_flags": "Inability to tolerate ORS, worsening lethargy, signs of severe dehydration",
        }),
        Dehydration::Severe => json!({
            "timing": "Continuous until stable, then daily monitoring",
            "location": "Hospital until stable, then outpatient follow-up",
            "monitoring": "Inpatient monitoring until clinical improvement",
            "red_flags": "Any signs of clinical deterioration or complications",
        }),
    }
}

const WARNING_SIGNS: [&str; 8] = [
    "Child becomes increasingly lethargic or difficult to wake",
    "Persistent vomiting preventing fluid intake",
    "Blood in vomit or stool",
    "High fever (>39°C/102.2°F)",
    "Significant decrease or absence of urination",
    "Worsening of any dehydration signs",
    "Child appears severely ill or distressed",
    "Convulsions or loss of consciousness",
];

pub fn calculate(input: &DhakaInput) -> CalcResult {
    let score = input.score();
    let d = Dehydration::from_score(score);
    let c = category(d);

    let base = format!(
        "DHAKA score of {score} indicates {} with {} estimated fluid loss.",
        c.label, c.fluid_loss
    );
    let text = match d {
        Dehydration::None => format!("{base} Child has minimal dehydration and can be managed with continued fluid intake and normal diet. Monitor for any worsening."),
        Dehydration::Some => format!("{base} Child requires supervised oral rehydration therapy with close monitoring for response to treatment and possible deterioration."),
        Dehydration::Severe => format!("{base} Child has severe dehydration requiring immediate intravenous rehydration and hospitalization for intensive monitoring."),
    };

    let components = json!([
        {"component": "General Appearance", "value": input.general_appearance, "points": input.appearance().0, "description": "Child's level of consciousness and activity"},
        {"component": "Respirations", "value": input.respirations, "points": input.respiration().0, "description": "Respiratory pattern and effort"},
        {"component": "Skin Pinch", "value": input.skin_pinch, "points": input.skin().0, "description": "Skin elasticity and turgor"},
        {"component": "Tears", "value": input.tears, "points": input.tear().0, "description": "Tear production when crying"},
    ]);

    Ok(
        CalculatorResponse::new(score, "DHAKA score", Interpretation::new(c.label, c.description, text))
            .with("dhaka_score", score)
            .with("dehydration_category", d.token())
            .with("fluid_loss", c.fluid_loss)
            .with("management", c.management)
            .with("monitoring_level", c.monitoring)
            .with("disposition", c.disposition)
            .with("clinical_assessment", clinical_assessment(input, score, d, &c))
            .with(
                "management_recommendations",
                management_recommendations(d, score, input.child_age_months),
            )
            .with("rehydration_details", rehydration_details(d))
            .with("score_components", components)
            .with("caregiver_education", caregiver_education(d))
            .with("follow_up_recommendations", follow_up(d))
            .with("warning_signs", &WARNING_SIGNS[..]),
    )
}
