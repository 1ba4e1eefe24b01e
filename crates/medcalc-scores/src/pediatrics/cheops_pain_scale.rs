//! CHEOPS (Children's Hospital of Eastern Ontario Pain Scale) for
//! post-operative pain in children aged 1-5. Six behaviors, 4-13 points.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum Cry {
        NoCrying => "no_crying",
        MoaningCrying => "moaning_crying",
        Screaming => "screaming",
    }
}

choice! {
    pub enum Facial {
        Smiling => "smiling",
        Composed => "composed",
        Grimace => "grimace",
    }
}

choice! {
    pub enum Verbal {
        Positive => "positive",
        NotTalkingOther => "not_talking_other",
        PainComplaints => "pain_complaints",
    }
}

choice! {
    pub enum Torso {
        Neutral => "neutral",
        ShiftingTense => "shifting_tense",
    }
}

choice! {
    pub enum Touch {
        NotTouching => "not_touching",
        ReachingTouching => "reaching_touching",
    }
}

choice! {
    pub enum Legs {
        Neutral => "neutral",
        SquirmingTensed => "squirming_tensed",
    }
}

calculator_input! {
    pub struct CheopsInput {
        pub cry: Cry,
        pub facial: Facial,
        pub verbal: Verbal,
        pub torso: Torso,
        pub touch: Touch,
        pub legs: Legs,
    }
}

impl CheopsInput {
    fn cry(&self) -> (i64, &'static str) {
        match self.cry {
            Cry::NoCrying => (1, "No crying"),
            Cry::MoaningCrying => (2, "Moaning or crying"),
            Cry::Screaming => (3, "Screaming"),
        }
    }

    fn facial(&self) -> (i64, &'static str) {
        match self.facial {
            Facial::Smiling => (0, "Smiling"),
            Facial::Composed => (1, "Composed/neutral expression"),
            Facial::Grimace => (2, "Grimace or frowning"),
        }
    }

    fn verbal(&self) -> (i64, &'static str) {
        match self.verbal {
            Verbal::Positive => (0, "Positive statements or compliant"),
            Verbal::NotTalkingOther => (1, "Not talking or other complaints"),
            Verbal::PainComplaints => (2, "Pain complaints"),
        }
    }

    fn torso(&self) -> (i64, &'static str) {
        match self.torso {
            Torso::Neutral => (1, "Neutral position, resting comfortably"),
            Torso::ShiftingTense => (2, "Shifting, tense, shivering, upright, or restrained"),
        }
    }

    fn touch(&self) -> (i64, &'static str) {
        match self.touch {
            Touch::NotTouching => (1, "Not touching or reaching toward wound"),
            Touch::ReachingTouching => (2, "Reaching toward, touching, or grabbing wound"),
        }
    }

    fn legs(&self) -> (i64, &'static str) {
        match self.legs {
            Legs::Neutral => (1, "Neutral position, relaxed"),
            Legs::SquirmingTensed => (2, "Squirming, tensed, standing, or restrained"),
        }
    }
}

pub fn calculate(input: &CheopsInput) -> CalcResult {
    let components = [
        ("cry", input.cry(), "Vocal response and crying behavior"),
        ("facial", input.facial(), "Facial expression assessment"),
        ("verbal", input.verbal(), "Verbal responses and complaints"),
        ("torso", input.torso(), "Body position and movement"),
        ("touch", input.touch(), "Wound evaluation and touching behavior"),
        ("legs", input.legs(), "Leg position and movement"),
    ];
    let total: i64 = components.iter().map(|(_, (points, _), _)| points).sum();

    let (interpretation, intervention_required, recommendation, monitoring, reassessment) =
        match total {
            ..=4 => (
                Interpretation::new(
                    "No Pain",
                    "Minimal discomfort",
                    format!("CHEOPS Score {total}: No significant pain. Continue routine post-operative care with standard monitoring. No analgesic intervention required at this time."),
                ),
                false,
                "No analgesic intervention required",
                "Continue routine monitoring and comfort measures",
                "Every 3 hours or as clinically indicated",
            ),
            5..=7 => (
                Interpretation::new(
                    "Mild to Moderate Pain",
                    "Consider analgesic intervention",
                    format!("CHEOPS Score {total}: Mild to moderate pain detected. Consider administering appropriate analgesic medication and reassess effectiveness."),
                ),
                true,
                "Consider administering analgesic medication",
                "Reassess pain level after intervention and provide comfort measures",
                "15-20 minutes after IV analgesics or 30-45 minutes after oral/rectal analgesics",
            ),
            _ => (
                Interpretation::new(
                    "Severe Pain",
                    "Analgesic intervention required",
                    format!("CHEOPS Score {total}: Severe pain requiring immediate intervention. Administer appropriate analgesic medication and implement comprehensive pain management strategies."),
                ),
                true,
                "Analgesic medication required immediately",
                "Implement comprehensive pain management strategies and frequent monitoring",
                "Frequent reassessment until adequate pain control achieved",
            ),
        };
    let pain_level = interpretation.stage.clone();

    let mut component_scores = serde_json::Map::new();
    for (name, (points, behavior), description) in components {
        component_scores.insert(
            name.to_string(),
            json!({"behavior": behavior, "points": points, "description": description}),
        );
    }

    Ok(CalculatorResponse::new(total, "points", interpretation)
        .with("pain_level", pain_level)
        .with("intervention_required", intervention_required)
        .with("clinical_recommendation", recommendation)
        .with("monitoring_guidance", monitoring)
        .with("reassessment_timing", reassessment)
        .with(
            "scoring_breakdown",
            json!({
                "component_scores": component_scores,
                "scoring_criteria": {
                    "cry": "No crying (1 pt), Moaning/crying (2 pts), Screaming (3 pts)",
                    "facial": "Smiling (0 pts), Composed (1 pt), Grimace (2 pts)",
                    "verbal": "Positive (0 pts), Not talking/other (1 pt), Pain complaints (2 pts)",
                    "torso": "Neutral (1 pt), Shifting/tense (2 pts)",
                    "touch": "Not touching wound (1 pt), Reaching/touching wound (2 pts)",
                    "legs": "Neutral position (1 pt), Squirming/tensed (2 pts)",
                },
                "clinical_context": {
                    "age_range": "Designed for children aged 1-5 years",
                    "setting": "Post-operative pain assessment",
                    "timing": "Assess every 3 hours during post-operative period",
                    "reassessment": "15-20 min after IV or 30-45 min after oral/rectal analgesics",
                    "limitations": "Requires direct behavioral observation; not validated for procedural pain",
                },
                "interpretation_thresholds": {
                    "no_intervention": "Score 4: No analgesic intervention required",
                    "consider_analgesic": "Score 5-7: Consider administering analgesic",
                    "immediate_intervention": "Score 8-13: Analgesic medication required immediately",
                },
            }),
        ))
}
