//! BRUE (brief resolved unexplained event) classification, 2016 AAP
//! guideline.
//!
//! Result codes: 0 not a BRUE, 1 higher-risk BRUE, 2 lower-risk BRUE.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

use super::brue_criteria::{not_brue, BrueDefinition};

calculator_input! {
    pub struct BrueInput {
        pub age_under_1_year: YesNo,
        pub asymptomatic_on_presentation: YesNo,
        pub no_explanation_after_exam: YesNo,
        pub sudden_brief_resolved_episode: YesNo,
        pub cyanosis_or_pallor: YesNo,
        pub breathing_changes: YesNo,
        pub tone_changes: YesNo,
        pub altered_responsiveness: YesNo,
        pub episode_duration_under_1_min: YesNo,
        pub age_over_2_months: YesNo,
        pub no_history_prematurity: YesNo,
        pub no_prior_brue: YesNo,
        pub no_cpr_by_provider: YesNo,
    }
}

impl BrueInput {
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

    fn lower_risk(&self) -> bool {
        [
            self.episode_duration_under_1_min,
            self.age_over_2_months,
            self.no_history_prematurity,
            self.no_prior_brue,
            self.no_cpr_by_provider,
        ]
        .iter()
        .all(|c| c.is_yes())
    }
}

pub fn calculate(input: &BrueInput) -> CalcResult {
    let definition = input.definition();

    let (code, interpretation) = if !definition.is_met() {
        (0, not_brue())
    } else if input.lower_risk() {
        (
            2,
            Interpretation::new(
                "BRUE - Lower Risk",
                "Meets BRUE criteria and classified as lower risk",
                "Meets criteria for lower-risk BRUE. May be managed with observation, parental education, CPR training resources, and shared decision-making. Routine diagnostic testing (chest x-rays, blood gas, sleep studies, ECG, etc.) is NOT recommended. Assess social risk factors and provide family support.",
            ),
        )
    } else {
        (
            1,
            Interpretation::new(
                "BRUE - Higher Risk",
                "Meets BRUE criteria but classified as higher risk",
                "Meets BRUE criteria but does not meet all lower-risk criteria. Consider further evaluation, monitoring, and potential hospitalization based on clinical judgment and shared decision-making with family. May require diagnostic testing and close observation.",
            ),
        )
    };

    let (entry, events) = definition.summary();
    Ok(CalculatorResponse::new(code, "", interpretation).with(
        "criteria_summary",
        json!({
            "entry_criteria": entry,
            "event_characteristics": events,
            "lower_risk_criteria": {
                "episode_duration_under_1_min": input.episode_duration_under_1_min.is_yes(),
                "age_over_2_months": input.age_over_2_months.is_yes(),
                "no_history_prematurity": input.no_history_prematurity.is_yes(),
                "no_prior_brue": input.no_prior_brue.is_yes(),
                "no_cpr_by_provider": input.no_cpr_by_provider.is_yes(),
            },
        }),
    ))
}
