//! Coronavirus Anxiety Scale (CAS): five somatic anxiety items over the last
//! two weeks, each 0-4. A total of 9 or more marks dysfunctional anxiety.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Map, Value};

const MAX_SCORE: i64 = 20;
const THRESHOLD: i64 = 9;

calculator_input! {
    pub struct CasInput {
        pub dizzy_news: i64 => 0..=4,
        pub sleep_problems: i64 => 0..=4,
        pub paralyzed_frozen: i64 => 0..=4,
        pub appetite_loss: i64 => 0..=4,
        pub nausea_stomach: i64 => 0..=4,
    }
}

struct Item {
    key: &'static str,
    text: &'static str,
    significance: [&'static str; 5],
}

const ITEMS: [Item; 5] = [
    Item {
        key: "dizzy_news",
        text: "I felt dizzy, lightheaded, or faint when I read or listened to news about the coronavirus",
        significance: [
            "No physical anxiety response to coronavirus news",
            "Minimal physical anxiety symptoms with coronavirus news exposure",
            "Mild physical anxiety symptoms affecting news consumption",
            "Moderate physical anxiety symptoms limiting news exposure",
            "Severe physical anxiety symptoms severely limiting news consumption",
        ],
    },
    Item {
        key: "sleep_problems",
        text: "I had trouble falling or staying asleep because I was thinking about the coronavirus",
        significance: [
            "No sleep disruption from coronavirus thoughts",
            "Minimal sleep disruption from coronavirus concerns",
            "Mild sleep difficulties affecting rest quality",
            "Moderate sleep problems impacting daily functioning",
            "Severe sleep disruption significantly affecting health and functioning",
        ],
    },
    Item {
        key: "paralyzed_frozen",
        text: "I felt paralyzed or frozen when I thought about or was exposed to information about the coronavirus",
        significance: [
            "No paralytic anxiety response to coronavirus information",
            "Minimal feelings of being overwhelmed by coronavirus information",
            "Mild paralytic response affecting information processing",
            "Moderate paralytic response limiting daily activities",
            "Severe paralytic response significantly impairing functioning",
        ],
    },
    Item {
        key: "appetite_loss",
        text: "I lost interest in eating when I thought about or was exposed to information about the coronavirus",
        significance: [
            "No appetite changes related to coronavirus thoughts",
            "Minimal appetite changes with coronavirus concerns",
            "Mild appetite loss affecting eating patterns",
            "Moderate appetite loss impacting nutrition",
            "Severe appetite loss posing health risks",
        ],
    },
    Item {
        key: "nausea_stomach",
        text: "I felt nauseous or had stomach problems when I thought about or was exposed to information about the coronavirus",
        significance: [
            "No gastrointestinal anxiety symptoms with coronavirus thoughts",
            "Minimal gastrointestinal discomfort with coronavirus concerns",
            "Mild gastrointestinal symptoms affecting comfort",
            "Moderate gastrointestinal symptoms impacting daily activities",
            "Severe gastrointestinal symptoms significantly affecting functioning",
        ],
    },
];

const RESPONSES: [&str; 5] = [
    "Not at all",
    "Rare, less than a day or two",
    "Several days",
    "More than 7 days",
    "Nearly every day over the last 2 weeks",
];

const ITEM_SEVERITY: [&str; 5] = ["None", "Minimal", "Mild", "Moderate", "Severe"];

impl CasInput {
    fn scores(&self) -> [i64; 5] {
        [
            self.dizzy_news,
            self.sleep_problems,
            self.paralyzed_frozen,
            self.appetite_loss,
            self.nausea_stomach,
        ]
    }
}

fn item_analysis(scores: [i64; 5]) -> Value {
    let mut analysis = Map::new();
    for (item, score) in ITEMS.iter().zip(scores) {
        let idx = score.clamp(0, 4) as usize;
        analysis.insert(
            item.key.to_string(),
            json!({
                "score": score,
                "max_score": 4,
                "description": item.text,
                "response": RESPONSES[idx],
                "severity": ITEM_SEVERITY[idx],
                "clinical_significance": item.significance[idx],
            }),
        );
    }
    Value::Object(analysis)
}

fn recommendations(input: &CasInput, total: i64) -> Value {
    let (mut immediate, therapeutic, follow_up): (Vec<&str>, Vec<&str>, Vec<&str>) = match total {
        16.. => (
            vec![
                "Comprehensive mental health evaluation recommended",
                "Consider immediate professional intervention",
                "Assess for risk of self-harm or suicide",
                "Evaluate need for crisis intervention services",
            ],
            vec![
                "Cognitive-behavioral therapy (CBT) for anxiety management",
                "Exposure therapy for coronavirus-related avoidance",
                "Consider pharmacological intervention consultation",
                "Trauma-informed care if applicable",
            ],
            vec![
                "Weekly clinical monitoring initially",
                "Reassess CAS score in 2-4 weeks",
                "Coordinate with primary care provider",
            ],
        ),
        12.. => (
            vec![
                "Mental health evaluation recommended",
                "Assess functional impairment levels",
                "Screen for comorbid mental health conditions",
            ],
            vec![
                "Cognitive-behavioral therapy for anxiety",
                "Mindfulness-based interventions",
                "Stress management techniques",
                "Consider group therapy for pandemic-related anxiety",
            ],
            vec!["Bi-weekly monitoring recommended", "Reassess in 4-6 weeks"],
        ),
        THRESHOLD.. => (
            vec![
                "Supportive counseling recommended",
                "Assess coping mechanisms and support systems",
            ],
            vec![
                "Brief supportive therapy",
                "Psychoeducation about anxiety management",
                "Relaxation techniques training",
            ],
            vec![],
        ),
        _ => (
            vec![
                "Continue current coping strategies",
                "Maintain healthy lifestyle habits",
            ],
            vec![
                "Preventive psychoeducation if desired",
                "Stress management skills building",
            ],
            vec!["Routine monitoring as needed", "Re-screen if circumstances change"],
        ),
    };

    let mut self_care = vec![
        "Limit excessive coronavirus news consumption",
        "Maintain regular sleep and exercise routines",
        "Practice relaxation and mindfulness techniques",
        "Stay connected with social support networks",
        "Engage in pleasant and meaningful activities",
    ];
    let mut monitoring = vec![
        "Monitor for changes in anxiety symptoms",
        "Track functional impairment levels",
        "Assess coping strategy effectiveness",
        "Watch for development of other mental health symptoms",
    ];
    if input.sleep_problems >= 3 {
        self_care.push("Implement sleep hygiene practices");
    }
    if input.appetite_loss >= 3 {
        monitoring.push("Monitor nutritional status and weight");
    }
    if input.nausea_stomach >= 3 {
        immediate.push("Consider medical evaluation for physical symptoms");
    }

    json!({
        "immediate_actions": immediate,
        "therapeutic_interventions": therapeutic,
        "self_care_strategies": self_care,
        "monitoring": monitoring,
        "follow_up": follow_up,
    })
}

pub fn calculate(input: &CasInput) -> CalcResult {
    let scores = input.scores();
    let total: i64 = scores.iter().sum();
    let dysfunctional = total >= THRESHOLD;

    let (severity, text) = match total {
        16.. => (
            "severe",
            format!("CAS score of {total}/{MAX_SCORE} indicates severe dysfunctional coronavirus-related anxiety. Comprehensive mental health evaluation and immediate intervention recommended."),
        ),
        12.. => (
            "moderate",
            format!("CAS score of {total}/{MAX_SCORE} indicates moderate dysfunctional coronavirus-related anxiety. Mental health evaluation and therapeutic intervention recommended."),
        ),
        THRESHOLD.. => (
            "mild",
            format!("CAS score of {total}/{MAX_SCORE} indicates mild dysfunctional coronavirus-related anxiety. Monitoring and supportive interventions recommended."),
        ),
        _ => (
            "none",
            format!("CAS score of {total}/{MAX_SCORE} is below the threshold of {THRESHOLD} for dysfunctional anxiety. Individual may experience normal concerns about COVID-19 but these do not significantly impair functioning."),
        ),
    };
    let interpretation = if dysfunctional {
        Interpretation::new(
            "Dysfunctional Anxiety",
            "Clinically significant coronavirus-related anxiety",
            text,
        )
    } else {
        Interpretation::new(
            "No Dysfunctional Anxiety",
            "Normal coronavirus-related concerns",
            text,
        )
    };

    Ok(CalculatorResponse::new(total, "points", interpretation).with(
        "assessment_details",
        json!({
            "dysfunctional_anxiety": dysfunctional,
            "total_score": total,
            "max_possible_score": MAX_SCORE,
            "threshold": THRESHOLD,
            "item_scores": item_analysis(scores),
            "severity_level": severity,
            "diagnostic_performance": {
                "sensitivity": "90%",
                "specificity": "85%",
                "note": "Diagnostic performance for identifying dysfunctional coronavirus-related anxiety",
            },
            "clinical_recommendations": recommendations(input, total),
            "assessment_context": {
                "time_frame": "Last 2 weeks",
                "purpose": "Screening for dysfunctional coronavirus-related anxiety",
                "target_population": "Adults experiencing potential COVID-19 related anxiety",
                "administration": "Self-report questionnaire",
                "limitations": [
                    "Screening tool only - does not replace comprehensive mental health evaluation",
                    "Specific to coronavirus-related anxiety, not general anxiety disorders",
                    "Cultural and linguistic considerations may affect interpretation",
                    "May need periodic re-administration as pandemic conditions change",
                ],
                "validation_note": format!("Cut-off score ≥{THRESHOLD} has 90% sensitivity and 85% specificity"),
            },
        }),
    ))
}
