//! BRUE 2.0: individualized risk after a brief resolved unexplained event.
//!
//! A logistic model gives the risk of a serious underlying condition. An
//! additive model gives the recurrence risk. The larger of the two selects
//! the class code (1, 6, 16 or 31; 0 when the event is not a BRUE).

use medcalc_core::math::{fixed, logistic, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

use super::brue_criteria::{not_brue, BrueDefinition};

calculator_input! {
    pub struct Brue2Input {
        pub age_under_1_year: YesNo,
        pub asymptomatic_on_presentation: YesNo,
        pub no_explanation_after_exam: YesNo,
        pub sudden_brief_resolved_episode: YesNo,
        pub cyanosis_or_pallor: YesNo,
        pub breathing_changes: YesNo,
        pub tone_changes: YesNo,
        pub altered_responsiveness: YesNo,
        pub age_in_days: i64 => 0..=365,
        pub history_similar_event: YesNo,
        pub abnormal_medical_history: YesNo,
        pub multiple_event_clusters: YesNo,
        pub prematurity: YesNo,
    }
}

impl Brue2Input {

    fn definition(&self) -> BrueDefinition {
        BrueDefinition {
            age_under_1_year: self.age_under_1_year,
            asymptomatic_on_presentation: self.asymptomatic_on_presentation,
            no_explanation_after_exam: self.no_explanation_after_exam,
            sudden_brief_resolved_episode: self.sudden_brief_resolved_episode,
            cyanosis_or_pallor: self.cyanosis_or_pallor,
            breathing_changes: self.breathing_changes,
            tone_changes: self.tone_changes,
            altered_responsiveness: self.altered_responsiveness,
        }
    }

    /// Percent risk of a serious underlying condition.
    fn serious_condition_risk(&self) -> f64 {
        let x = -2.9
            - 0.0046 * self.age_in_days as f64
            + 1.22 * self.history_similar_event.points(1) as f64
            + 0.35 * self.abnormal_medical_history.points(1) as f64;
        logistic(x) * 100.0
    }

    /// Percent risk of recurrence.
    fn recurrence_risk(&self) -> f64 {
        let points = 15
            + self.history_similar_event.points(25)
            + self.multiple_event_clusters.points(15)
            + self.prematurity.points(10)
            + self.cyanosis_or_pallor.points(8)
            + self.breathing_changes.points(6)
            + self.tone_changes.points(5);
        (points as f64).min(100.0)
    }
}

pub fn calculate(input: &Brue2Input) -> CalcResult {
    if !input.definition().is_met() {
        return Ok(CalculatorResponse::new(0, "", not_brue())
            .with(
                "risk_predictions",
                json!({"serious_condition_risk": 0.0, "recurrence_risk": 0.0, "overall_risk": 0.0}),
            )
            .with("risk_factors", json!({})));
    }

    let serious = input.serious_condition_risk();
    let recurrence = input.recurrence_risk();
    let overall = serious.max(recurrence);
    let risks = format!(
        "{}% for serious condition, {}% recurrence",
        fixed(serious, 1),
        fixed(recurrence, 1)
    );

    let (code, interpretation) = match overall {
        r if r < 2.0 => (
            1,
            Interpretation::new(
                "Very Low Risk",
                "BRUE with very low risk for serious condition or recurrence",
                format!("Meets BRUE criteria with very low risk ({risks}). Appropriate for home management with family education, CPR training, and routine follow-up. Routine diagnostic testing not recommended."),
            ),
        ),
        r if r < 10.0 => (
            6,
            Interpretation::new(
                "Low Risk",
                "BRUE with low risk for serious condition or recurrence",
                format!("Meets BRUE criteria with low risk ({risks}). Consider brief observation, family education, and shared decision-making about diagnostic testing. Close follow-up recommended."),
            ),
        ),
        r if r < 20.0 => (
            16,
            Interpretation::new(
                "Moderate Risk",
                "BRUE with moderate risk for serious condition or recurrence",
                format!("Meets BRUE criteria with moderate risk ({risks}). Consider extended monitoring, selective diagnostic testing based on clinical judgment, and close follow-up. Hospitalization may be indicated."),
            ),
        ),
        _ => (
            31,
            Interpretation::new(
                "High Risk",
                "BRUE with high risk for serious condition or recurrence",
                format!("Meets BRUE criteria with high risk ({risks}). Requires comprehensive evaluation, strong consideration for hospitalization, and extensive diagnostic workup. Close monitoring essential."),
            ),
        ),
    };

    Ok(CalculatorResponse::new(code, "", interpretation)
        .with(
            "risk_predictions",
            json!({
                "serious_condition_risk": round_to(serious, 1),
                "recurrence_risk": round_to(recurrence, 1),
                "overall_risk": round_to(overall, 1),
            }),
        )
        .with(
            "risk_factors",
            json!({
                "age_in_days": input.age_in_days,
                "risk_factors_present": {
                    "history_similar_event": input.history_similar_event.is_yes(),
                    "abnormal_medical_history": input.abnormal_medical_history.is_yes(),
                    "multiple_event_clusters": input.multiple_event_clusters.is_yes(),
                    "prematurity": input.prematurity.is_yes(),
                    "cyanosis_or_pallor": input.cyanosis_or_pallor.is_yes(),
                    "breathing_changes": input.breathing_changes.is_yes(),
                    "tone_changes": input.tone_changes.is_yes(),
                },
            }),
        ))
}
