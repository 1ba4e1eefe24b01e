//! Diabetes Distress Scale (DDS17): mean item score and four subscales.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Map, Value};

calculator_input! {
    pub struct Dds17Input {
        pub overwhelming_demands: i64 => 1..=6,
        pub feeling_discouraged: i64 => 1..=6,
        pub failure_regimen: i64 => 1..=6,
        pub clear_concrete_goals: i64 => 1..=6,
        pub not_motivated: i64 => 1..=6,
        pub angry_frustrated: i64 => 1..=6,
        pub unsatisfied_care: i64 => 1..=6,
        pub physician_communication: i64 => 1..=6,
        pub physician_doesnt_give_direction: i64 => 1..=6,
        pub physician_doesnt_take_seriously: i64 => 1..=6,
        pub regimen_overwhelming: i64 => 1..=6,
        pub constant_thoughts: i64 => 1..=6,
        pub blood_sugar_checking: i64 => 1..=6,
        pub regimen_burden: i64 => 1..=6,
        pub friends_family_nagging: i64 => 1..=6,
        pub friends_family_interference: i64 => 1..=6,
        pub friends_family_dont_understand: i64 => 1..=6,
    }
}

impl Dds17Input {
    fn items(&self) -> [(&'static str, i64); 17] {
        [
            ("overwhelming_demands", self.overwhelming_demands),
            ("feeling_discouraged", self.feeling_discouraged),
            ("failure_regimen", self.failure_regimen),
            ("clear_concrete_goals", self.clear_concrete_goals),
            ("not_motivated", self.not_motivated),
            ("angry_frustrated", self.angry_frustrated),
            ("unsatisfied_care", self.unsatisfied_care),
            ("physician_communication", self.physician_communication),
            ("physician_doesnt_give_direction", self.physician_doesnt_give_direction),
            ("physician_doesnt_take_seriously", self.physician_doesnt_take_seriously),
            ("regimen_overwhelming", self.regimen_overwhelming),
            ("constant_thoughts", self.constant_thoughts),
            ("blood_sugar_checking", self.blood_sugar_checking),
            ("regimen_burden", self.regimen_burden),
            ("friends_family_nagging", self.friends_family_nagging),
            ("friends_family_interference", self.friends_family_interference),
            ("friends_family_dont_understand", self.friends_family_dont_understand),
        ]
    }
}

struct Subscale {
    key: &'static str,
    name: &'static str,
    /// 1-based item numbers.
    items: &'static [usize],
    flag: &'static str,
    referral: &'static str,
    actions: [&'static str; 3],
}

const SUBSCALES: [Subscale; 4] = [
    Subscale {
        key: "emotional_burden",
        name: "Emotional Burden",
        items: &[1, 2, 3, 6, 12],
        flag: "High emotional burden - consider mental health support",
        referral: "Psychologist or counselor for diabetes distress therapy",
        actions: [
            "Address emotional burden through stress management techniques",
            "Consider cognitive-behavioral therapy for diabetes distress",
            "Evaluate for clinical depression or anxiety disorders",
        ],
    },
    Subscale {
        key: "physician_distress",
        name: "Physician Distress",
        items: &[7, 8, 9, 10],
        flag: "Provider relationship issues - review care coordination",
        referral: "Endocrinologist or diabetes specialist for care optimization",
        actions: [
            "Improve patient-provider communication and shared decision making",
            "Consider diabetes care team consultation or second opinion",
            "Address concerns about diabetes care quality and coordination",
        ],
    },
    Subscale {
        key: "regimen_distress",
        name: "Regimen Distress",
        items: &[4, 11, 13, 14],
        flag: "Treatment regimen burden - consider simplification",
        referral: "Diabetes educator for self-management skill building",
        actions: [
            "Simplify diabetes management regimen when possible",
            "Provide additional diabetes self-management education",
            "Consider continuous glucose monitoring to reduce testing burden",
        ],
    },
    Subscale {
        key: "interpersonal_distress",
        name: "Interpersonal Distress",
        items: &[5, 15, 16, 17],
        flag: "Social support deficits - consider family education",
        referral: "Family therapist or diabetes support group facilitator",
        actions: [
            "Provide family education about diabetes management support",
            "Address social support needs and family dynamics",
            "Consider peer support groups or diabetes support networks",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distress {
    Little,
    Moderate,
    High,
}

impl Distress {
    fn from_mean(mean: f64) -> Self {
        if mean < 2.0 {
            Distress::Little
        } else if mean < 3.0 {
            Distress::Moderate
        } else {
            Distress::High
        }
    }

    fn key(self) -> &'static str {
        match self {
            Distress::Little => "little_no_distress",
            Distress::Moderate => "moderate_distress",
            Distress::High => "high_distress",
        }
    }

    fn immediate_actions(self) -> &'static [&'static str] {
        match self {
            Distress::Little => &[
                "Continue current diabetes management approach",
                "Maintain regular follow-up appointments",
                "Monitor for changes in distress levels over time",
                "Provide general diabetes education and support",
                "Encourage continued self-care behaviors",
            ],
            Distress::Moderate => &[
                "Discuss specific sources of diabetes distress with patient",
                "Develop targeted coping strategies for identified stressors",
                "Consider diabetes education or support group referral",
                "Monitor distress levels more frequently (every 3-6 months)",
                "Address specific subscale areas with elevated scores",
            ],
            Distress::High => &[
                "Immediate clinical attention and assessment required",
                "Refer to diabetes educator or certified diabetes care specialist",
                "Consider mental health referral or diabetes psychologist",
                "Develop comprehensive diabetes distress intervention plan",
                "Frequent monitoring and follow-up (monthly to quarterly)",
                "Address underlying causes in high-scoring subscales",
                "Consider medication review and regimen simplification",
            ],
        }
    }

    fn reassessment_interval(self) -> &'static str {
        match self {
            Distress::Little => "Annually or as clinically indicated",
            Distress::Moderate => "Every 6 months",
            Distress::High => "Every 3 months initially, then adjust based on response",
        }
    }
}

fn subscale_level(score: f64) -> &'static str {
    if score < 2.0 {
        "Low"
    } else if score < 3.0 {
        "Moderate"
    } else {
        "High"
    }
}

pub fn calculate(input: &Dds17Input) -> CalcResult {
    let items = input.items();
    let mean = items.iter().map(|(_, v)| *v as f64).sum::<f64>() / items.len() as f64;
    let subscale_scores: Vec<f64> = SUBSCALES
        .iter()
        .map(|s| s.items.iter().map(|&i| items[i - 1].1 as f64).sum::<f64>() / s.items.len() as f64)
        .collect();
    let distress = Distress::from_mean(mean);

    let elevated: Vec<&Subscale> = SUBSCALES
        .iter()
        .zip(&subscale_scores)
        .filter(|(_, score)| **score >= 3.0)
        .map(|(s, _)| s)
        .collect();

    let mut indicators = Vec::new();
    if mean >= 3.0 {
        indicators.push("Clinically significant diabetes distress requiring intervention");
    }
    indicators.extend(elevated.iter().map(|s| s.flag));
    if elevated.len() >= 3 {
        indicators.push("Multiple areas of high distress - comprehensive intervention needed");
    }

    let mut referrals = Vec::new();
    if distress == Distress::High {
        referrals.push("Diabetes educator or certified diabetes care specialist");
        referrals.push("Mental health professional with diabetes expertise");
    }
    referrals.extend(elevated.iter().map(|s| s.referral));
    if referrals.is_empty() {
        referrals.push("Continue with current care team");
    }

    let subscale_json: Map<String, Value> = SUBSCALES
        .iter()
        .zip(&subscale_scores)
        .map(|(s, score)| (s.key.to_string(), json!(round_to(*score, 2))))
        .collect();
    let breakdown: Map<String, Value> = SUBSCALES
        .iter()
        .zip(&subscale_scores)
        .map(|(s, score)| {
            (
                s.key.to_string(),
                json!({
                    "score": round_to(*score, 2),
                    "level": subscale_level(*score),
                    "clinical_significance": *score >= 3.0,
                }),
            )
        })
        .collect();
    let subscale_actions: Vec<&str> = elevated.iter().flat_map(|s| s.actions).collect();

    let names: Vec<&str> = elevated.iter().map(|s| s.name).collect();
    let total = round_to(mean, 2);

    Ok(
        CalculatorResponse::new(total, "DDS17 Score (1-6 scale)", interpret(mean, distress, &names))
            .with("total_score", total)
            .with("distress_level", distress.key())
            .with("subscale_scores", subscale_json)
            .with("subscale_analysis", breakdown)
            .with("clinical_indicators", indicators)
            .with(
                "recommendations",
                json!({
                    "immediate_actions": distress.immediate_actions(),
                    "subscale_specific": subscale_actions,
                }),
            )
            .with("referral_considerations", referrals)
            .with("reassessment_interval", distress.reassessment_interval()),
    )
}

fn interpret(mean: f64, distress: Distress, elevated: &[&str]) -> Interpretation {
    let (label, description) = match distress {
        Distress::Little => ("Little or No Distress", "Minimal diabetes-related distress"),
        Distress::Moderate => ("Moderate Distress", "Moderate diabetes-related distress"),
        Distress::High => (
            "High Distress",
            "High diabetes-related distress requiring intervention",
        ),
    };
    let mut text = format!("DDS17 total score of {mean:.2} indicates {label}. {description}.");
    if !elevated.is_empty() {
        text.push_str(&format!(" Highest distress areas: {}.", elevated.join(", ")));
    }
    text.push_str(match distress {
        Distress::High => " This level of distress is clinically significant and warrants targeted intervention and follow-up.",
        Distress::Moderate => " Monitor for progression and consider targeted support for identified areas of concern.",
        Distress::Little => " Continue current diabetes management approach with routine monitoring.",
    });
    Interpretation::new(label, description, text)
}
