//! Current Opioid Misuse Measure (COMM): 17 self-reported behaviors over the
//! past 30 days, each 0 (never) to 4 (very often). 9 or more is positive.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Map, Value};

const THRESHOLD: i64 = 9;

const LABELS: [&str; 5] = ["Never", "Seldom", "Sometimes", "Often", "Very often"];

const CATEGORIES: [(&str, &[&str]); 5] = [
    (
        "behavioral",
        &[
            "taking_differently",
            "taking_more_than_prescribed",
            "relief_other_sources",
            "need_medications_from_others",
            "borrowing_pain_medication",
        ],
    ),
    (
        "psychological",
        &[
            "thinking_clearly",
            "thinking_hurting_self",
            "time_thinking_medications",
            "being_in_arguments",
            "trouble_controlling_anger",
            "getting_angry_with_people",
        ],
    ),
    ("functional", &["not_completing_tasks"]),
    (
        "healthcare_seeking",
        &["emergency_clinic_visits", "visiting_emergency_room"],
    ),
    (
        "substance_concerns",
        &[
            "worried_handling_medications",
            "others_worried_handling",
            "using_for_non_pain_symptoms",
        ],
    ),
];

const HIGH_RISK: [&str; 6] = [
    "taking_more_than_prescribed",
    "borrowing_pain_medication",
    "need_medications_from_others",
    "relief_other_sources",
    "using_for_non_pain_symptoms",
    "thinking_hurting_self",
];

calculator_input! {
    pub struct CommInput {
        pub thinking_clearly: i64 => 0..=4,
        pub not_completing_tasks: i64 => 0..=4,
        pub relief_other_sources: i64 => 0..=4,
        pub taking_differently: i64 => 0..=4,
        pub thinking_hurting_self: i64 => 0..=4,
        pub time_thinking_medications: i64 => 0..=4,
        pub being_in_arguments: i64 => 0..=4,
        pub trouble_controlling_anger: i64 => 0..=4,
        pub need_medications_from_others: i64 => 0..=4,
        pub worried_handling_medications: i64 => 0..=4,
        pub others_worried_handling: i64 => 0..=4,
        pub emergency_clinic_visits: i64 => 0..=4,
        pub getting_angry_with_people: i64 => 0..=4,
        pub taking_more_than_prescribed: i64 => 0..=4,
        pub borrowing_pain_medication: i64 => 0..=4,
        pub using_for_non_pain_symptoms: i64 => 0..=4,
        pub visiting_emergency_room: i64 => 0..=4,
    }
}

impl CommInput {
    fn responses(&self) -> [(&'static str, i64); 17] {
        [
            ("thinking_clearly", self.thinking_clearly),
            ("not_completing_tasks", self.not_completing_tasks),
            ("relief_other_sources", self.relief_other_sources),
            ("taking_differently", self.taking_differently),
            ("thinking_hurting_self", self.thinking_hurting_self),
            ("time_thinking_medications", self.time_thinking_medications),
            ("being_in_arguments", self.being_in_arguments),
            ("trouble_controlling_anger", self.trouble_controlling_anger),
            ("need_medications_from_others", self.need_medications_from_others),
            ("worried_handling_medications", self.worried_handling_medications),
            ("others_worried_handling", self.others_worried_handling),
            ("emergency_clinic_visits", self.emergency_clinic_visits),
            ("getting_angry_with_people", self.getting_angry_with_people),
            ("taking_more_than_prescribed", self.taking_more_than_prescribed),
            ("borrowing_pain_medication", self.borrowing_pain_medication),
            ("using_for_non_pain_symptoms", self.using_for_non_pain_symptoms),
            ("visiting_emergency_room", self.visiting_emergency_room),
        ]
    }

    fn score(&self, question: &str) -> i64 {
        self.responses()
            .iter()
            .find(|(q, _)| *q == question)
            .map_or(0, |(_, s)| *s)
    }
}

fn label(score: i64) -> &'static str {
    LABELS[score.clamp(0, 4) as usize]
}

fn category_scores(input: &CommInput) -> Value {
    let mut out = Map::new();
    for (category, questions) in CATEGORIES {
        let total: i64 = questions.iter().map(|q| input.score(q)).sum();
        let max = questions.len() as i64 * 4;
        out.insert(
            category.to_string(),
            json!({
                "score": total,
                "max_possible": max,
                "percentage": round_to(total as f64 / max as f64 * 100.0, 1),
                "questions_count": questions.len(),
            }),
        );
    }
    Value::Object(out)
}

fn severity_pattern(high: usize, moderate: usize) -> &'static str {
    if high >= 5 {
        "Severe pattern - Multiple frequent concerning behaviors"
    } else if high >= 3 {
        "Moderate-severe pattern - Several frequent concerning behaviors"
    } else if high >= 1 || moderate >= 5 {
        "Moderate pattern - Some concerning behaviors"
    } else if moderate >= 2 {
        "Mild pattern - Occasional concerning behaviors"
    } else {
        "Minimal pattern - Few concerning behaviors"
    }
}

fn risk_factors(input: &CommInput) -> Vec<String> {
    let mut out: Vec<String> = HIGH_RISK
        .iter()
        .filter_map(|q| {
            let score = input.score(q);
            (score >= 2).then(|| {
                format!(
                    "Reports {} {}",
                    label(score).to_lowercase(),
                    q.replace('_', " ")
                )
            })
        })
        .collect();
    if input.thinking_hurting_self >= 1 {
        out.push("Endorses thoughts of self-harm".into());
    }
    if input.emergency_clinic_visits >= 2 || input.visiting_emergency_room >= 2 {
        out.push("Frequent emergency healthcare utilization".into());
    }
    if input.not_completing_tasks >= 2 {
        out.push("Functional impairment affecting task completion".into());
    }
    if input.worried_handling_medications >= 2 || input.others_worried_handling >= 2 {
        out.push("Medication handling concerns (self or others)".into());
    }
    out
}

fn red_flags(input: &CommInput) -> Vec<&'static str> {
    [
        (input.thinking_hurting_self >= 2, "Significant self-harm ideation"),
        (
            input.taking_more_than_prescribed >= 3,
            "Frequent dose escalation beyond prescription",
        ),
        (
            input.borrowing_pain_medication >= 2,
            "Obtaining medication from unauthorized sources",
        ),
        (
            input.using_for_non_pain_symptoms >= 2,
            "Using opioids for non-pain indications",
        ),
        (
            input.time_thinking_medications >= 3,
            "Preoccupation with opioid medications",
        ),
    ]
    .into_iter()
    .filter_map(|(hit, flag)| hit.then_some(flag))
    .collect()
}

pub fn calculate(input: &CommInput) -> CalcResult {
    let responses = input.responses();
    let total: i64 = responses.iter().map(|(_, s)| s).sum();
    let high_risk = total >= THRESHOLD;

    let concerning = responses.iter().filter(|(_, s)| *s >= 3).count();
    let moderate = responses.iter().filter(|(_, s)| *s == 2).count();
    let positive = responses.iter().filter(|(_, s)| *s > 0).count();
    let pattern = severity_pattern(concerning, moderate);

    let mut counts = [0usize; 5];
    for (_, score) in responses {
        counts[score.clamp(0, 4) as usize] += 1;
    }
    let frequency: Map<String, Value> = LABELS
        .iter()
        .zip(counts)
        .map(|(name, count)| (name.to_string(), json!(count)))
        .collect();
    let categories = category_scores(input);

    let interpretation = if high_risk {
        Interpretation::new(
            "High Risk",
            "Possible misuse or abuse of medications",
            format!(
                "COMM total score of {total} meets or exceeds the threshold (≥9) indicating elevated risk for opioid misuse. Patient demonstrates {} with {concerning} concerning responses. Further evaluation and enhanced monitoring are recommended. Consider substance abuse consultation and implementation of risk mitigation strategies.",
                pattern.to_lowercase()
            ),
        )
    } else {
        Interpretation::new(
            "Low Risk",
            "Not misusing or abusing medications",
            format!(
                "COMM total score of {total} is below the threshold (≥9) for opioid misuse risk. This suggests low probability of current opioid misuse behaviors. Patient demonstrates {}. Continue standard monitoring and pain management protocols with routine reassessment.",
                pattern.to_lowercase()
            ),
        )
    };

    let mut recommendations: Vec<&str> = if high_risk {
        vec![
            "Enhanced monitoring and more frequent visits",
            "Consider urine drug testing and pill counts",
            "Evaluate for substance use disorder",
            "Consider substance abuse consultation",
            "Review and potentially modify opioid regimen",
            "Implement additional risk mitigation strategies",
        ]
    } else {
        vec![
            "Continue current pain management approach",
            "Routine monitoring with periodic COMM reassessment",
            "Standard opioid safety education and counseling",
            "Regular pain and function assessment",
        ]
    };
    if concerning >= 5 {
        recommendations.push("Consider intensive intervention due to multiple concerning behaviors");
    }

    let monitoring = if high_risk {
        let additional = if concerning >= 3 {
            json!(["Urine drug testing", "Pill counts", "Prescription monitoring"])
        } else {
            json!(["Consider urine drug testing"])
        };
        json!({
            "frequency": if total >= 15 { "Monthly" } else { "Every 1-2 months" },
            "intensity": "Enhanced monitoring",
            "methods": ["Clinical assessment", "COMM reassessment", "Structured interviews"],
            "additional_measures": additional,
        })
    } else {
        json!({
            "frequency": "Every 3-6 months or as clinically indicated",
            "intensity": "Standard monitoring",
            "methods": ["Clinical assessment", "COMM reassessment", "Pain and function evaluation"],
            "additional_measures": "None routinely required",
        })
    };

    let (risk_level, misuse_risk) = if high_risk {
        ("high", "Elevated risk for opioid misuse")
    } else {
        ("low", "Low risk for opioid misuse")
    };

    Ok(CalculatorResponse::new(total, "points", interpretation)
        .with("total_score", total)
        .with("risk_level", risk_level)
        .with("misuse_risk", misuse_risk)
        .with(
            "pattern_analysis",
            json!({
                "category_scores": categories.clone(),
                "frequency_distribution": frequency,
                "concerning_responses": concerning,
                "moderate_responses": moderate,
                "total_positive_responses": positive,
                "severity_pattern": pattern,
            }),
        )
        .with("risk_factors", risk_factors(input))
        .with("clinical_recommendations", recommendations)
        .with("monitoring_guidance", monitoring)
        .with("red_flags", red_flags(input))
        .with("category_scores", categories))
}
