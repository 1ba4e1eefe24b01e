//! Entry definition shared by the BRUE classifiers: all four entry criteria
//! plus at least one qualifying event characteristic.

use medcalc_core::{Interpretation, YesNo};
use serde_json::{json, Value};

pub struct BrueDefinition {
    pub age_under_1_year: YesNo,
    pub asymptomatic_on_presentation: YesNo,
    pub no_explanation_after_exam: YesNo,
    pub sudden_brief_resolved_episode: YesNo,
    pub cyanosis_or_pallor: YesNo,
    pub breathing_changes: YesNo,
    pub tone_changes: YesNo,
    pub altered_responsiveness: YesNo,
}

impl BrueDefinition {
    pub fn is_met(&self) -> bool {
        let entry = [
            self.age_under_1_year,
            self.asymptomatic_on_presentation,
            self.no_explanation_after_exam,
            self.sudden_brief_resolved_episode,
        ];
        let event = [
            self.cyanosis_or_pallor,
            self.breathing_changes,
            self.tone_changes,
            self.altered_responsiveness,
        ];
        entry.iter().all(|c| c.is_yes()) && event.iter().any(|c| c.is_yes())
    }

    pub fn summary(&self) -> (Value, Value) {
        (
            json!({
                "age_under_1_year": self.age_under_1_year.is_yes(),
                "asymptomatic_on_presentation": self.asymptomatic_on_presentation.is_yes(),
                "no_explanation_after_exam": self.no_explanation_after_exam.is_yes(),
                "sudden_brief_resolved_episode": self.sudden_brief_resolved_episode.is_yes(),
            }),
            json!({
                "cyanosis_or_pallor": self.cyanosis_or_pallor.is_yes(),
                "breathing_changes": self.breathing_changes.is_yes(),
                "tone_changes": self.tone_changes.is_yes(),
                "altered_responsiveness": self.altered_responsiveness.is_yes(),
            }),
        )
    }
}

pub fn not_brue() -> Interpretation {
    Interpretation::new(
        "Not BRUE",
        "Does not meet BRUE criteria",
        "The event does not meet the criteria for Brief Resolved Unexplained Event (BRUE). Consider alternative diagnoses and appropriate evaluation based on clinical presentation. Review entry criteria and event characteristics.",
    )
}
