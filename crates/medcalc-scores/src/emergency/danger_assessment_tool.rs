//! Danger Assessment for intimate partner homicide risk.
//!
//! Each endorsed item contributes a weight derived from its published odds
//! ratio; "not_applicable" answers count as absent.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum Answer {
        Yes => "yes",
        No => "no",
        NotApplicable => "not_applicable",
    }
}

calculator_input! {
    pub struct DangerAssessmentInput {
        pub physical_violence_increased: Answer,
        pub owns_gun: Answer,
        pub threatened_weapon: Answer,
        pub threatened_kill_you: Answer,
        pub avoided_killing: Answer,
        pub beaten_pregnant: Answer,
        pub jealous_controlling: Answer,
        pub controls_activities: Answer,
        pub controls_daily_activities: Answer,
        pub violent_others: Answer,
        pub violent_toward_others: Answer,
        pub threatened_suicide: Answer,
        pub threatened_kill_children: Answer,
        pub child_not_his: Answer,
        pub employment_problems: Answer,
        pub follows_spies: Answer,
        pub forced_sex: Answer,
        pub tried_to_strangle: Answer,
        pub drugs_alcohol_problems: Answer,
        pub stepchild_present: Answer,
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Danger {
    Variable,
    Increased,
    Extreme,
}

fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl DangerAssessmentInput {
    fn items(&self) -> [(&'static str, Answer, f64); 20] {
        [
            ("physical_violence_increased", self.physical_violence_increased, 1.2),
            ("owns_gun", self.owns_gun, 2.1),
            ("threatened_weapon", self.threatened_weapon, 1.8),
            ("threatened_kill_you", self.threatened_kill_you, 1.7),
            ("avoided_killing", self.avoided_killing, 1.5),
            ("beaten_pregnant", self.beaten_pregnant, 1.4),
            ("jealous_controlling", self.jealous_controlling, 1.3),
            ("controls_activities", self.controls_activities, 1.1),
            ("controls_daily_activities", self.controls_daily_activities, 1.2),
            ("violent_others", self.violent_others, 1.3),
            ("violent_toward_others", self.violent_toward_others, 1.0),
            ("threatened_suicide", self.threatened_suicide, 1.1),
            ("threatened_kill_children", self.threatened_kill_children, 1.6),
            ("child_not_his", self.child_not_his, 1.0),
            ("employment_problems", self.employment_problems, 0.8),
            ("follows_spies", self.follows_spies, 1.1),
            ("forced_sex", self.forced_sex, 1.0),
            ("tried_to_strangle", self.tried_to_strangle, 1.9),
            ("drugs_alcohol_problems", self.drugs_alcohol_problems, 0.9),
            ("stepchild_present", self.stepchild_present, 0.8),
        ]
    }
}

pub fn calculate(input: &DangerAssessmentInput) -> CalcResult {
    let items = input.items();
    let endorsed: Vec<_> = items.iter().filter(|(_, a, _)| *a == Answer::Yes).collect();
    let score = round_to(endorsed.iter().map(|(_, _, w)| w).sum(), 1);
    let simple_score = endorsed.len();

    let level = if score <= 7.0 {
        Danger::Variable
    } else if score <= 13.0 {
        Danger::Increased
    } else {
        Danger::Extreme
    };

    let mut key_factors: Vec<_> = endorsed.iter().filter(|(_, _, w)| *w >= 1.5).collect();
    key_factors.sort_by(|a, b| b.2.total_cmp(&a.2));
    let key_factors: Vec<_> = key_factors
        .iter()
        .map(|(name, _, w)| json!({ "factor": title_case(name), "weight": w }))
        .collect();

    let yes = |a: Answer| a == Answer::Yes;
    let mut severity = Vec::new();
    if yes(input.owns_gun) {
        severity.push("Gun ownership present - highest lethality risk factor");
    }
    if yes(input.tried_to_strangle) {
        severity.push("History of strangulation - strong predictor of homicide");
    }
    if yes(input.threatened_weapon) {
        severity.push("Weapon threats - indicates escalation potential");
    }
    if yes(input.threatened_kill_you) {
        severity.push("Death threats - direct indication of lethal intent");
    }

    let mut specific = Vec::new();
    if yes(input.owns_gun) {
        specific.push("Gun in home - consider immediate relocation for safety");
    }
    if yes(input.tried_to_strangle) {
        specific.push("History of strangulation - seek immediate medical evaluation and safety planning");
    }
    if yes(input.threatened_kill_children) {
        specific.push("Threats against children - consider child protective services notification");
    }
    if yes(input.follows_spies) {
        specific.push("Stalking behavior - document incidents and consider technology safety measures");
    }

    let high_risk: Vec<_> = [
        (input.owns_gun, "Gun ownership"),
        (input.tried_to_strangle, "History of strangulation"),
        (input.threatened_weapon, "Weapon threats"),
        (input.threatened_kill_you, "Death threats"),
        (input.threatened_kill_children, "Threats against children"),
    ]
    .into_iter()
    .filter(|(a, _)| yes(*a))
    .map(|(_, label)| label)
    .collect();

    let protective: Vec<_> = [
        (input.owns_gun, "No gun in home"),
        (input.drugs_alcohol_problems, "No substance abuse issues"),
        (input.violent_toward_others, "No history of violence toward others"),
    ]
    .into_iter()
    .filter(|(a, _)| *a == Answer::No)
    .map(|(_, label)| label)
    .collect();

    let immediate_actions: &[&str] = match level {
        Danger::Variable => &[
            "Create basic safety plan",
            "Connect with domestic violence resources",
            "Document any future incidents",
            "Monitor for changes in behavior or risk factors",
        ],
        Danger::Increased => &[
            "Develop comprehensive safety plan immediately",
            "Contact domestic violence advocate",
            "Prepare emergency bag",
            "Consider legal protection options",
            "Inform trusted contacts about situation",
        ],
        Danger::Extreme => &[
            "Consider immediate safety measures (shelter, relocation)",
            "Contact law enforcement if in immediate danger",
            "Activate emergency safety plan",
            "Obtain emergency protection order if possible",
            "Coordinate with high-risk domestic violence team",
        ],
    };

    let shown = fixed(score, 1);
    let interpretation = match level {
        Danger::Variable => Interpretation::new(
            "Variable Danger",
            "Low to moderate risk",
            format!(
                "Danger Assessment score of {shown} indicates variable danger level. While the immediate risk may not be extreme, safety planning is still important. Monitor situation for changes and connect with domestic violence resources for support."
            ),
        ),
        Danger::Increased => Interpretation::new(
            "Increased Danger",
            "Moderate to high risk",
            format!(
                "Danger Assessment score of {shown} indicates increased danger level. There is elevated risk of intimate partner homicide. Enhanced safety planning is essential. Professional intervention is strongly recommended, including coordinated community response."
            ),
        ),
        Danger::Extreme => Interpretation::new(
            "Extreme Danger",
            "High to extreme risk",
            format!(
                "Danger Assessment score of {shown} indicates extreme danger level. There is severe and immediate risk of intimate partner homicide. Emergency safety planning is critical. Immediate professional intervention, law enforcement notification, and coordinated high-risk response may be necessary."
            ),
        ),
    };
    let risk_level = match level {
        Danger::Variable => "variable",
        Danger::Increased => "increased",
        Danger::Extreme => "extreme",
    };

    Ok(CalculatorResponse::new(score, "danger score", interpretation)
        .with("risk_level", risk_level)
        .with("simple_score", simple_score)
        .with(
            "risk_analysis",
            json!({ "key_risk_factors": key_factors, "severity_indicators": severity }),
        )
        .with("specific_recommendations", specific)
        .with("immediate_actions", immediate_actions)
        .with("high_risk_factors", high_risk)
        .with("protective_factors", protective)
        .with(
            "emergency_contacts",
            json!({
                "national_hotline": "1-800-799-7233 (National Domestic Violence Hotline)",
                "emergency_services": "911 for immediate danger",
                "text_line": "Text START to 88788 (Crisis Text Line)",
            }),
        ))
}
