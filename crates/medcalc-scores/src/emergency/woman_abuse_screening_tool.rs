//! Woman Abuse Screening Tool (WAST).
//!
//! Every item scores 1 for the most concerning answer, so lower totals mean
//! higher risk. The total spans 8 to 24.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

const MIN_SCORE: i64 = 8;
const MAX_SCORE: i64 = 24;

choice! {
    pub enum Tension {
        LotsOfTension => "lots_of_tension",
        SomeTension => "some_tension",
        NoTension => "no_tension",
    }
}

choice! {
    pub enum Difficulty {
        GreatDifficulty => "great_difficulty",
        SomeDifficulty => "some_difficulty",
        NoDifficulty => "no_difficulty",
    }
}

choice! {
    pub enum Frequency {
        Often => "often",
        Sometimes => "sometimes",
        Never => "never",
    }
}

calculator_input! {
    pub struct WastInput {
        pub tension_arguments_relationship: Tension,
        pub partner_jealousy_possessiveness: Difficulty,
        pub arguments_resolution: Frequency,
        pub arguments_feeling_bad: Frequency,
        pub physical_violence_frequency: Frequency,
        pub feel_frightened: YesNo,
        pub physical_abuse_history: YesNo,
        pub emotional_abuse_history: YesNo,
    }
}

fn answer_points(answer: YesNo) -> i64 {
    if answer.is_yes() { 1 } else { 2 }
}

impl WastInput {
    fn items(&self) -> [(&'static str, &'static str, i64); 8] {
        let tension = match self.tension_arguments_relationship {
            Tension::LotsOfTension => 1,
            Tension::SomeTension => 2,
            Tension::NoTension => 3,
        };
        let difficulty = match self.partner_jealousy_possessiveness {
            Difficulty::GreatDifficulty => 1,
            Difficulty::SomeDifficulty => 2,
            Difficulty::NoDifficulty => 3,
        };
        let frequency = |f: Frequency| match f {
            Frequency::Often => 1,
            Frequency::Sometimes => 2,
            Frequency::Never => 3,
        };
        [
            ("tension_arguments_relationship", "High relationship tension reported", tension),
            ("partner_jealousy_possessiveness", "Significant difficulty resolving arguments", difficulty),
            ("arguments_resolution", "Arguments frequently result in negative self-feelings", frequency(self.arguments_resolution)),
            ("arguments_feeling_bad", "Arguments frequently escalate to physical violence", frequency(self.arguments_feeling_bad)),
            ("physical_violence_frequency", "Patient frequently feels frightened by partner", frequency(self.physical_violence_frequency)),
            ("feel_frightened", "History of physical abuse reported", answer_points(self.feel_frightened)),
            ("physical_abuse_history", "History of emotional abuse reported", answer_points(self.physical_abuse_history)),
            ("emotional_abuse_history", "History of sexual abuse reported", answer_points(self.emotional_abuse_history)),
        ]
    }
}

pub fn calculate(input: &WastInput) -> CalcResult {
    let items = input.items();
    let score: i64 = items.iter().map(|(_, _, points)| points).sum();
    let risk_factors: Vec<_> = items
        .iter()
        .filter(|(_, _, points)| *points == 1)
        .map(|(_, factor, _)| *factor)
        .collect();
    let individual: serde_json::Map<String, serde_json::Value> = items
        .iter()
        .map(|(item, _, points)| (item.to_string(), json!(points)))
        .collect();
    let risk_percentage =
        round_to((MAX_SCORE - score) as f64 / (MAX_SCORE - MIN_SCORE) as f64 * 100.0, 1);

    let (risk_level, interpretation, safety) = match score {
        ..=12 => (
            "high",
            Interpretation::new(
                "High Risk",
                "High probability of intimate partner violence",
                format!(
                    "WAST score of {score} indicates high likelihood of domestic violence. Immediate safety assessment and intervention planning required. \
                     Provide resources, safety planning, and appropriate referrals to domestic violence services. \
                     Ensure patient privacy and confidentiality throughout the intervention process."
                ),
            ),
            vec![
                "Immediate safety assessment required",
                "Develop safety plan with patient",
                "Provide emergency contact information (National DV Hotline: 1-800-799-7233)",
                "Consider immediate referral to domestic violence services",
                "Assess for immediate danger and need for emergency shelter",
                "Document injuries if present using body maps",
                "Follow mandatory reporting requirements if applicable",
                "Ensure patient privacy during assessment and discharge",
            ],
        ),
        13..=17 => (
            "moderate",
            Interpretation::new(
                "Moderate Risk",
                "Moderate probability of intimate partner violence",
                format!(
                    "WAST score of {score} suggests possible intimate partner violence. Further assessment recommended to clarify risk level and provide appropriate support. \
                     Provide information about domestic violence resources and consider follow-up screening. Document findings appropriately and ensure patient safety."
                ),
            ),
            vec![
                "Provide domestic violence resource information",
                "Offer referral to domestic violence counselor",
                "Discuss safety planning basics",
                "Provide National DV Hotline number (1-800-799-7233)",
                "Schedule follow-up appointment for re-assessment",
                "Document findings appropriately",
                "Offer social services consultation",
            ],
        ),
        _ => (
            "low",
            Interpretation::new(
                "Low Risk",
                "Low probability of intimate partner violence",
                format!(
                    "WAST score of {score} indicates low likelihood of domestic violence based on current responses. Continue routine care. \
                     Consider periodic re-screening as relationship dynamics may change over time."
                ),
            ),
            vec![
                "Continue routine screening at future visits",
                "Provide general relationship health information if appropriate",
                "Remain alert for other indicators of domestic violence",
                "Document negative screening results",
            ],
        ),
    };

    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("risk_level", risk_level)
        .with("safety_recommendations", safety)
        .with("risk_factors", risk_factors)
        .with(
            "score_breakdown",
            json!({
                "individual_scores": individual,
                "total_possible_score": MAX_SCORE,
                "risk_percentage": risk_percentage,
            }),
        ))
}
