//! Withdrawal Assessment Tool version 1 (WAT-1) for iatrogenic opioid and
//! benzodiazepine withdrawal in children. Eleven signs scored 0-3.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Map, Value};

const MAX_SCORE: i64 = 33;
const MILD_THRESHOLD: i64 = 3;
const MODERATE_THRESHOLD: i64 = 9;

/// Post-menstrual age cut points in weeks.
const PRETERM_PMA: i64 = 37;
const YOUNG_INFANT_PMA: i64 = 52;
const OLDER_INFANT_PMA: i64 = 104;

calculator_input! {
    pub struct Wat1Input {
        pub post_menstrual_age_weeks: i64 => 25..=200,
        pub state_sleep_wake_cycle: i64 => 0..=3,
        pub tremor: i64 => 0..=3,
        pub increased_muscle_tone: i64 => 0..=3,
        pub excoriation: i64 => 0..=3,
        pub myoclonus_seizures: i64 => 0..=3,
        pub tachypnea: i64 => 0..=3,
        pub sweating: i64 => 0..=3,
        pub fever: i64 => 0..=3,
        pub frequent_yawning_sneezing: i64 => 0..=3,
        pub nasal_stuffiness: i64 => 0..=3,
        pub poor_feeding_vomiting: i64 => 0..=3,
    }
}

struct Sign {
    key: &'static str,
    description: &'static str,
    levels: [&'static str; 4],
}

const SIGNS: [Sign; 11] = [
    Sign {
        key: "state_sleep_wake_cycle",
        description: "State/sleep-wake cycle disturbance",
        levels: ["Normal sleep pattern", "Mild restlessness", "Moderate agitation", "Severe sleep disturbance"],
    },
    Sign {
        key: "tremor",
        description: "Tremor severity",
        levels: ["No tremor", "Mild tremor when stimulated", "Moderate tremor when awake", "Severe continuous tremor"],
    },
    Sign {
        key: "increased_muscle_tone",
        description: "Increased muscle tone/hypertonia",
        levels: ["Normal muscle tone", "Mild increase in tone", "Moderate increase in tone", "Severe rigidity"],
    },
    Sign {
        key: "excoriation",
        description: "Excoriation marks from scratching",
        levels: ["No excoriation marks", "Red marks from scratching", "Scratches without bleeding", "Bleeding scratches"],
    },
    Sign {
        key: "myoclonus_seizures",
        description: "Myoclonus/seizure activity",
        levels: ["No myoclonus or seizures", "Occasional jerky movements", "Frequent jerky movements", "Continuous movements or seizures"],
    },
    Sign {
        key: "tachypnea",
        description: "Tachypnea/respiratory distress",
        levels: ["Normal respiratory rate", "Mildly elevated rate", "Moderately elevated rate", "Severely elevated or distressed"],
    },
    Sign {
        key: "sweating",
        description: "Sweating/diaphoresis",
        levels: ["No sweating", "Mild sweating", "Moderate sweating", "Profuse sweating"],
    },
    Sign {
        key: "fever",
        description: "Fever/hyperthermia",
        levels: ["Temperature <37.2°C", "Temperature 37.2-37.8°C", "Temperature 37.9-38.3°C", "Temperature >38.3°C"],
    },
    Sign {
        key: "frequent_yawning_sneezing",
        description: "Frequent yawning/sneezing",
        levels: ["No yawning/sneezing", "Occasional yawning/sneezing", "Frequent yawning/sneezing", "Continuous yawning/sneezing"],
    },
    Sign {
        key: "nasal_stuffiness",
        description: "Nasal stuffiness/rhinorrhea",
        levels: ["No nasal symptoms", "Mild nasal stuffiness", "Moderate nasal stuffiness", "Severe nasal stuffiness"],
    },
    Sign {
        key: "poor_feeding_vomiting",
        description: "Poor feeding/vomiting",
        levels: ["Normal feeding", "Poor feeding", "Refusal to feed", "Vomiting"],
    },
];

impl Wat1Input {
    fn scores(&self) -> [i64; 11] {
        [
            self.state_sleep_wake_cycle,
            self.tremor,
            self.increased_muscle_tone,
            self.excoriation,
            self.myoclonus_seizures,
            self.tachypnea,
            self.sweating,
            self.fever,
            self.frequent_yawning_sneezing,
            self.nasal_stuffiness,
            self.poor_feeding_vomiting,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Minimal,
    MildToModerate,
    ModerateToSevere,
}

impl Severity {
    fn from_score(score: i64) -> Self {
        if score < MILD_THRESHOLD {
            Severity::Minimal
        } else if score < MODERATE_THRESHOLD {
            Severity::MildToModerate
        } else {
            Severity::ModerateToSevere
        }
    }
}

fn age_note(pma: i64) -> &'static str {
    match pma {
        p if p < PRETERM_PMA => {
            "For preterm infants, consider developmental differences in withdrawal manifestations. "
        }
        p if p < YOUNG_INFANT_PMA => {
            "For young infants, withdrawal may manifest differently than in older children. "
        }
        p if p < OLDER_INFANT_PMA => {
            "For infants, consider age-appropriate assessment and intervention strategies. "
        }
        _ => "For older children, consider developmental stage and communication abilities. ",
    }
}

fn age_category(pma: i64) -> Value {
    let (category, description, considerations) = match pma {
        p if p < PRETERM_PMA => (
            "preterm",
            "Preterm infant",
            "Consider developmental immaturity and different withdrawal manifestations",
        ),
        p if p < YOUNG_INFANT_PMA => (
            "term_infant",
            "Term infant",
            "Standard infant withdrawal assessment applicable",
        ),
        p if p < OLDER_INFANT_PMA => (
            "young_infant",
            "Young infant (3-12 months)",
            "Consider motor development and behavioral expectations",
        ),
        _ => (
            "older_child",
            "Older infant/child (>12 months)",
            "Consider communication abilities and developmental milestones",
        ),
    };
    json!({
        "category": category,
        "description": description,
        "post_menstrual_age": pma,
        "considerations": considerations,
    })
}

fn parameter_breakdown(scores: [i64; 11], total: i64) -> Value {
    let mut individual = Map::new();
    let mut high = Vec::new();
    for (sign, score) in SIGNS.iter().zip(scores) {
        let idx = score.clamp(0, 3) as usize;
        let severity = ["none", "mild", "moderate", "severe"][idx];
        individual.insert(
            sign.key.to_string(),
            json!({
                "score": score,
                "description": sign.description,
                "score_description": sign.levels[idx],
                "severity": severity,
            }),
        );
        if score >= 2 {
            high.push(json!({
                "parameter": sign.key,
                "description": sign.description,
                "score": score,
            }));
        }
    }
    json!({
        "individual_scores": individual,
        "high_scoring_parameters": high,
        "total_possible_score": MAX_SCORE,
        "percentage_of_maximum": round_to(total as f64 / MAX_SCORE as f64 * 100.0, 1),
    })
}

fn severity_assessment(score: i64, severity: Severity) -> Value {
    let (label, urgency, description) = match severity {
        Severity::Minimal => ("minimal", "routine", "No significant withdrawal symptoms"),
        Severity::MildToModerate => (
            "mild_to_moderate",
            "prompt",
            "Withdrawal symptoms requiring intervention",
        ),
        Severity::ModerateToSevere => (
            "moderate_to_severe",
            "urgent",
            "Significant withdrawal requiring immediate attention",
        ),
    };
    json!({
        "severity": label,
        "urgency": urgency,
        "description": description,
        "score": score,
        "max_possible": MAX_SCORE,
        "intervention_threshold": score >= MILD_THRESHOLD,
    })
}

fn interventions(severity: Severity, pma: i64) -> Vec<&'static str> {
    let mut out = match severity {
        Severity::Minimal => vec![
            "Continue current supportive care",
            "Monitor for symptom progression",
            "Implement comfort measures",
            "Maintain environmental modifications",
        ],
        Severity::MildToModerate => vec![
            "Consider pharmacological intervention",
            "Initiate or adjust withdrawal protocol",
            "Increase monitoring frequency",
            "Enhance comfort measures",
            "Consider dose adjustments of weaning medications",
        ],
        Severity::ModerateToSevere => vec![
            "Immediate pharmacological intervention required",
            "Urgent physician notification",
            "Consider ICU-level monitoring",
            "Comprehensive withdrawal protocol implementation",
            "Consider specialist consultation",
        ],
    };
    if pma < PRETERM_PMA {
        out.push("Use preterm-specific dosing guidelines");
    } else if pma > OLDER_INFANT_PMA {
        out.push("Consider age-appropriate behavioral interventions");
    }
    out
}

fn monitoring(severity: Severity) -> Vec<&'static str> {
    match severity {
        Severity::Minimal => vec![
            "Assess WAT-1 every 8-12 hours",
            "Monitor vital signs every 4 hours",
            "Document feeding tolerance",
            "Observe for symptom changes",
        ],
        Severity::MildToModerate => vec![
            "Assess WAT-1 every 4-6 hours",
            "Monitor vital signs every 2 hours",
            "Continuous cardiorespiratory monitoring",
            "Frequent neurological assessments",
            "Document medication effectiveness",
        ],
        Severity::ModerateToSevere => vec![
            "Assess WAT-1 every 1-2 hours",
            "Continuous vital sign monitoring",
            "Continuous cardiorespiratory monitoring",
            "Frequent neurological assessments",
            "Consider arterial line for blood pressure monitoring",
            "Monitor for seizure activity",
        ],
    }
}

fn comfort_measures(input: &Wat1Input) -> Vec<&'static str> {
    let mut out = vec![
        "Maintain quiet, dimly lit environment",
        "Minimize unnecessary stimulation",
        "Use soft bedding and positioning aids",
        "Encourage family presence and involvement",
    ];
    let pma = input.post_menstrual_age_weeks;
    if pma < 40 {
        out.extend([
            "Provide developmental positioning",
            "Use gentle tactile stimulation",
            "Consider pacifier for non-nutritive sucking",
        ]);
    } else if pma < YOUNG_INFANT_PMA {
        out.extend([
            "Swaddling for comfort",
            "Gentle rocking or rhythmic movement",
            "Soft music or white noise",
        ]);
    } else {
        out.extend([
            "Age-appropriate comfort objects",
            "Structured routine and predictability",
            "Distraction techniques during procedures",
        ]);
    }
    if input.fever >= 1 {
        out.push("Temperature management and cooling measures");
    }
    if input.poor_feeding_vomiting >= 1 {
        out.push("Small, frequent feeds and feeding modifications");
    }
    out
}

fn medications(severity: Severity, pma: i64) -> Vec<&'static str> {
    if severity == Severity::Minimal {
        return vec![
            "Pharmacological intervention not typically required",
            "Continue current weaning schedule if applicable",
            "Monitor for need to slow weaning process",
        ];
    }
    let mut out = vec![
        "Consider methadone for opioid withdrawal",
        "Consider clonidine for sympathetic symptoms",
        "Lorazepam may be considered for benzodiazepine withdrawal",
        "Adjust doses based on age and weight",
    ];
    if pma < PRETERM_PMA {
        out.extend([
            "Use preterm dosing guidelines",
            "Consider pharmacokinetic differences",
            "Monitor for medication accumulation",
        ]);
    }
    if severity == Severity::ModerateToSevere {
        out.extend([
            "Consider combination therapy for severe symptoms",
            "Monitor for medication interactions",
            "Frequent reassessment of medication effectiveness",
        ]);
    }
    out
}

fn family_education(score: i64, pma: i64) -> Vec<&'static str> {
    let mut out = vec![
        "Explain withdrawal as expected response to medication weaning",
        "Teach recognition of withdrawal symptoms",
        "Demonstrate comfort measures families can provide",
        "Explain importance of consistent assessment and monitoring",
    ];
    if score >= MILD_THRESHOLD {
        out.extend([
            "Explain medication treatment plan and goals",
            "Discuss timeline for symptom improvement",
            "Teach when to notify healthcare providers",
            "Provide information about withdrawal process",
        ]);
    }
    if pma > OLDER_INFANT_PMA {
        out.extend([
            "Age-appropriate explanation for child",
            "Involve child in comfort measures when possible",
            "Explain behavioral changes child may experience",
        ]);
    }
    out
}

pub fn calculate(input: &Wat1Input) -> CalcResult {
    let scores = input.scores();
    let total: i64 = scores.iter().sum();
    let pma = input.post_menstrual_age_weeks;
    let severity = Severity::from_score(total);
    let note = age_note(pma);

    let interpretation = match severity {
        Severity::Minimal => Interpretation::new(
            "None to Mild",
            "No withdrawal or mild withdrawal symptoms",
            format!("WAT-1 score of {total} indicates no significant withdrawal or very mild withdrawal symptoms. {note} Continue current management and monitor for symptom progression. Consider comfort measures and supportive care as needed. Reassess every 4-12 hours or as clinically indicated. Environmental modifications and family presence may help maintain comfort."),
        ),
        Severity::MildToModerate => Interpretation::new(
            "Mild to Moderate",
            "Mild to moderate withdrawal symptoms",
            format!("WAT-1 score of {total} suggests mild to moderate withdrawal symptoms requiring intervention. {note} Consider pharmacological management with appropriate medications (methadone, morphine, or clonidine as per protocol). Increase monitoring frequency to every 2-4 hours. Provide comfort measures, environmental modifications, and consider non-pharmacological interventions. Notify attending physician for medication orders."),
        ),
        Severity::ModerateToSevere => Interpretation::new(
            "Moderate to Severe",
            "Moderate to severe withdrawal symptoms",
            format!("WAT-1 score of {total} indicates moderate to severe withdrawal requiring immediate pharmacological intervention. {note} Consider urgent treatment with methadone, morphine, or clonidine as appropriate for age and clinical status. Provide intensive monitoring (every 1-2 hours) and comprehensive supportive care. Consider ICU-level monitoring if symptoms are severe. Immediately notify attending physician and consider specialist consultation."),
        ),
    };

    let category = age_category(pma);
    let breakdown = parameter_breakdown(scores, total);
    let detailed = json!({
        "age_category": category,
        "parameter_breakdown": breakdown,
        "severity_assessment": severity_assessment(total, severity),
        "intervention_recommendations": interventions(severity, pma),
        "monitoring_recommendations": monitoring(severity),
        "comfort_measures": comfort_measures(input),
        "medication_considerations": medications(severity, pma),
        "family_education": family_education(total, pma),
    });

    Ok(CalculatorResponse::new(total, "points", interpretation)
        .with("age_category", category)
        .with("parameter_breakdown", breakdown)
        .with("detailed_assessment", detailed))
}
