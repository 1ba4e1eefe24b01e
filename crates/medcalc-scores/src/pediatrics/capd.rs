//! Cornell Assessment of Pediatric Delirium (CAPD).
//!
//! Eight observed domains scored 0-4 (0-32 total); 9 or more screens
//! positive for delirium.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Map, Value};

const MAX_SCORE: i64 = 32;
const DELIRIUM_THRESHOLD: i64 = 9;

calculator_input! {
    pub struct CapdInput {
        pub eye_contact: i64 => 0..=4,
        pub purposeful_actions: i64 => 0..=4,
        pub aware_surroundings: i64 => 0..=4,
        pub communicates_needs: i64 => 0..=4,
        pub restless: i64 => 0..=4,
        pub inconsolable: i64 => 0..=4,
        pub underactive: i64 => 0..=4,
        pub slow_response: i64 => 0..=4,
        /// Years.
        pub patient_age: i64 => 0..=21,
    }
}

struct Domain {
    key: &'static str,
    description: &'static str,
    significance: [&'static str; 5],
}

const DOMAINS: [Domain; 8] = [
    Domain {
        key: "eye_contact",
        description: "Makes eye contact with caregiver",
        significance: [
            "Normal eye contact pattern for age",
            "Slightly reduced eye contact",
            "Moderately impaired eye contact",
            "Severely impaired eye contact",
            "No eye contact observed",
        ],
    },
    Domain {
        key: "purposeful_actions",
        description: "Actions are purposeful",
        significance: [
            "All actions appear purposeful and goal-directed",
            "Slightly reduced purposeful actions",
            "Moderately impaired purposeful behavior",
            "Severely disorganized actions",
            "No purposeful actions observed",
        ],
    },
    Domain {
        key: "aware_surroundings",
        description: "Aware of surroundings",
        significance: [
            "Fully aware of environment and situation",
            "Slightly reduced environmental awareness",
            "Moderately impaired situational awareness",
            "Severely reduced awareness of surroundings",
            "No apparent awareness of environment",
        ],
    },
    Domain {
        key: "communicates_needs",
        description: "Communicates needs and wants",
        significance: [
            "Effectively communicates needs and wants",
            "Slightly impaired communication",
            "Moderately reduced communication ability",
            "Severely impaired communication",
            "Unable to communicate needs",
        ],
    },
    Domain {
        key: "restless",
        description: "Restless",
        significance: [
            "No restless behavior observed",
            "Rare episodes of restlessness",
            "Occasional restless behavior",
            "Frequent restlessness",
            "Constant restless behavior",
        ],
    },
    Domain {
        key: "inconsolable",
        description: "Inconsolable",
        significance: [
            "Easily consoled when distressed",
            "Rarely inconsolable",
            "Sometimes difficult to console",
            "Often inconsolable",
            "Always inconsolable when distressed",
        ],
    },
    Domain {
        key: "underactive",
        description: "Underactive (very little movement while awake)",
        significance: [
            "Normal activity level for age",
            "Slightly reduced activity",
            "Moderately underactive",
            "Markedly reduced activity",
            "Very little movement while awake",
        ],
    },
    Domain {
        key: "slow_response",
        description: "Takes long time to respond to interactions",
        significance: [
            "Normal response time to interactions",
            "Slightly delayed responses",
            "Moderately slow to respond",
            "Markedly delayed responses",
            "Very slow or no response to interactions",
        ],
    },
];

const SEVERITY: [&str; 5] = ["Normal", "Mild", "Moderate", "Severe", "Very Severe"];

impl CapdInput {
    fn scores(&self) -> [i64; 8] {
        [
            self.eye_contact,
            self.purposeful_actions,
            self.aware_surroundings,
            self.communicates_needs,
            self.restless,
            self.inconsolable,
            self.underactive,
            self.slow_response,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgeGroup {
    Newborn,
    Toddler,
    Preschool,
    SchoolAge,
    Adolescent,
}

impl AgeGroup {
    /// Whole years only; age 0 falls in the newborn band.
    fn from_years(age: i64) -> Self {
        match age {
            0 => AgeGroup::Newborn,
            1..=2 => AgeGroup::Toddler,
            3..=5 => AgeGroup::Preschool,
            6..=12 => AgeGroup::SchoolAge,
            _ => AgeGroup::Adolescent,
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgeGroup::Newborn => "Newborn",
            AgeGroup::Toddler => "Toddler",
            AgeGroup::Preschool => "Preschool",
            AgeGroup::SchoolAge => "School Age",
            AgeGroup::Adolescent => "Adolescent",
        }
    }

    fn age_range(self) -> &'static str {
        match self {
            AgeGroup::Newborn => "0-1 months",
            AgeGroup::Toddler => "1-3 years",
            AgeGroup::Preschool => "3-6 years",
            AgeGroup::SchoolAge => "6-13 years",
            AgeGroup::Adolescent => "13-21 years",
        }
    }

    fn developmental_considerations(self) -> [&'static str; 4] {
        match self {
            AgeGroup::Newborn => [
                "Limited eye contact and social interaction abilities",
                "Communication primarily through crying and basic reflexes",
                "Movement patterns are largely reflexive",
                "Assessment relies heavily on changes from baseline behavior",
            ],
            AgeGroup::Toddler => [
                "Language development affects communication assessment",
                "Increased mobility and exploration behaviors",
                "Normal oppositional behaviors may complicate assessment",
                "Separation anxiety common in hospital settings",
            ],
            AgeGroup::Preschool => [
                "Improved verbal communication abilities",
                "Fantasy play and imagination may affect reality testing",
                "Increased cooperation with assessment procedures",
                "Beginning understanding of illness and hospitalization",
            ],
            AgeGroup::SchoolAge => [
                "Concrete operational thinking develops",
                "Increased ability to articulate experiences",
                "Better cooperation with medical procedures",
                "Peer relationships become important",
            ],
            AgeGroup::Adolescent => [
                "Abstract thinking and reasoning abilities",
                "Identity formation and independence seeking",
                "May be less cooperative with assessment",
                "Privacy concerns and body image issues",
            ],
        }
    }

    fn care_recommendations(self) -> [&'static str; 3] {
        match self {
            AgeGroup::Newborn => [
                "Focus on maintaining stable physiologic parameters",
                "Minimize handling and invasive procedures",
                "Support maternal bonding and skin-to-skin contact when possible",
            ],
            AgeGroup::Toddler => [
                "Use simple, concrete language for explanations",
                "Provide choices when possible to maintain sense of control",
                "Use distraction and comfort techniques for procedures",
            ],
            AgeGroup::Preschool => [
                "Provide age-appropriate explanations about medical care",
                "Use play therapy and art activities for expression",
                "Maintain school-like routines when possible",
            ],
            AgeGroup::SchoolAge => [
                "Involve child in age-appropriate care decisions",
                "Provide educational activities to maintain cognitive engagement",
                "Support peer contact and social connections",
            ],
            AgeGroup::Adolescent => [
                "Respect privacy and independence needs",
                "Involve in care planning and decision-making",
                "Address concerns about body image and peer relationships",
            ],
        }
    }
}

fn domain_analysis(scores: [i64; 8]) -> Value {
    let mut analysis = Map::new();
    for (domain, score) in DOMAINS.iter().zip(scores) {
        let idx = score.clamp(0, 4) as usize;
        analysis.insert(
            domain.key.to_string(),
            json!({
                "score": score,
                "max_score": 4,
                "description": domain.description,
                "severity": SEVERITY[idx],
                "clinical_significance": domain.significance[idx],
            }),
        );
    }
    Value::Object(analysis)
}

fn management(positive: bool, group: AgeGroup) -> Value {
    let mut plan = if positive {
        json!({
            "immediate_actions": [
                "Implement pediatric delirium management protocol",
                "Evaluate for underlying causes (infection, metabolic disturbances, medications)",
                "Review and optimize all medications for deliriogenic effects",
                "Ensure adequate pain control without oversedation",
                "Optimize sleep-wake cycles and environmental conditions",
            ],
            "ongoing_monitoring": [
                "Continue CAPD assessments every nursing shift",
                "Monitor for delirium-related complications and safety issues",
                "Assess response to interventions and adjust treatment plan",
                "Document behavioral changes and intervention effectiveness",
            ],
            "prevention_strategies": [
                "Minimize environmental stimulation during rest periods",
                "Provide age-appropriate comfort items and familiar objects",
                "Maintain consistent caregiving staff when possible",
                "Encourage early mobilization as medically appropriate",
            ],
            "family_involvement": [
                "Educate family about pediatric delirium and management strategies",
                "Encourage family presence and participation in care",
                "Provide comfort items from home when appropriate",
                "Support family coping with child's behavioral changes",
            ],
            "reassessment_timing": "Every nursing shift and with any significant clinical changes",
        })
    } else {
        json!({
            "immediate_actions": [
                "Continue current care plan with delirium prevention focus",
                "Maintain optimal environmental conditions",
            ],
            "ongoing_monitoring": [
                "Continue routine CAPD screening every shift",
                "Monitor for risk factors that could precipitate delirium",
            ],
            "prevention_strategies": [
                "Maintain normal sleep-wake cycles",
                "Provide age-appropriate stimulation and comfort",
                "Minimize unnecessary procedures and medications",
                "Support family involvement in care",
            ],
            "family_involvement": [
                "Continue family-centered care practices",
                "Educate about delirium risk factors and prevention",
            ],
            "reassessment_timing": "Every nursing shift as per pediatric protocol",
        })
    };
    plan["age_specific_considerations"] = json!(group.care_recommendations());
    plan
}

pub fn calculate(input: &CapdInput) -> CalcResult {
    let scores = input.scores();
    let total: i64 = scores.iter().sum();
    let positive = total >= DELIRIUM_THRESHOLD;
    let group = AgeGroup::from_years(input.patient_age);

    let (severity, interpretation) = if positive {
        let (severity, text) = match total {
            20.. => (
                "severe",
                format!("Patient meets CAPD criteria for delirium with a high score of {total}/32, suggesting severe delirium symptoms. Immediate comprehensive evaluation and intervention are required."),
            ),
            15.. => (
                "moderate",
                format!("Patient meets CAPD criteria for delirium with a score of {total}/32, indicating moderate delirium symptoms. Prompt evaluation and management are recommended."),
            ),
            _ => (
                "mild",
                format!("Patient meets CAPD criteria for delirium with a score of {total}/32, suggesting mild delirium symptoms. Early intervention may prevent progression."),
            ),
        };
        (severity, Interpretation::new("CAPD Positive", "Delirium present", text))
    } else {
        (
            "none",
            Interpretation::new(
                "CAPD Negative",
                "No delirium detected",
                format!("Patient does not meet CAPD criteria for delirium with a score of {total}/32 (below threshold of {DELIRIUM_THRESHOLD}). Continue routine monitoring as delirium can fluctuate or develop suddenly."),
            ),
        )
    };

    let screening = if group == AgeGroup::Adolescent {
        json!({
            "sensitivity": "50%",
            "specificity": "98.1%",
            "note": "Lower sensitivity in adolescents, consider additional assessment tools",
        })
    } else {
        json!({
            "sensitivity": "94.1%",
            "specificity": "Variable by age group",
            "note": "High sensitivity across pediatric age groups",
        })
    };

    Ok(CalculatorResponse::new(total, "points", interpretation)
        .with("capd_positive", positive)
        .with("max_possible_score", MAX_SCORE)
        .with("delirium_threshold", DELIRIUM_THRESHOLD)
        .with("severity", severity)
        .with("domain_scores", domain_analysis(scores))
        .with(
            "age_group",
            json!({
                "group": group.label(),
                "age_range": group.age_range(),
                "developmental_considerations": group.developmental_considerations(),
            }),
        )
        .with(
            "age_considerations",
            format!(
                "Assessment performed in {} age group",
                group.label().to_lowercase()
            ),
        )
        .with("management_recommendations", management(positive, group))
        .with("screening_performance", screening))
}
