//! Clinical Institute Withdrawal Assessment for Alcohol, revised (CIWA-Ar).
//!
//! Nine symptoms scored 0-7 plus orientation 0-4, for 0-67 in total.

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Map, Value};

calculator_input! {
    pub struct CiwaArInput {
        pub nausea_vomiting: i64 => 0..=7,
        pub tremor: i64 => 0..=7,
        pub paroxysmal_sweats: i64 => 0..=7,
        pub anxiety: i64 => 0..=7,
        pub agitation: i64 => 0..=7,
        pub tactile_disturbances: i64 => 0..=7,
        pub auditory_disturbances: i64 => 0..=7,
        pub visual_disturbances: i64 => 0..=7,
        pub headache: i64 => 0..=7,
        pub orientation: i64 => 0..=4,
    }
}

struct Component {
    key: &'static str,
    name: &'static str,
    max: i64,
    /// Anchor text per score; blank where the instrument has none.
    anchors: &'static [&'static str],
    significance: &'static str,
}

const COMPONENTS: [Component; 10] = [
    Component {
        key: "nausea_vomiting",
        name: "Nausea and Vomiting",
        max: 7,
        anchors: &["None", "Mild nausea with no vomiting", "", "", "Intermittent nausea with dry heaves", "", "", "Constant nausea, frequent dry heaves and vomiting"],
        significance: "GI symptoms often early sign of withdrawal",
    },
    Component {
        key: "tremor",
        name: "Tremor",
        max: 7,
        anchors: &["No tremor", "Not visible, but can be felt fingertip to fingertip", "", "", "Moderate, with patient's arms extended", "", "", "Severe, even with arms not extended"],
        significance: "Classic withdrawal sign, often most noticeable",
    },
    Component {
        key: "paroxysmal_sweats",
        name: "Paroxysmal Sweats",
        max: 7,
        anchors: &["No sweat visible", "Barely perceptible sweating, palms moist", "", "", "Beads of sweat obvious on forehead", "", "", "Drenching sweats"],
        significance: "Autonomic instability indicator",
    },
    Component {
        key: "anxiety",
        name: "Anxiety",
        max: 7,
        anchors: &["None, at ease", "Mildly anxious", "", "", "Moderately anxious, or guarded, so anxiety is inferred", "", "", "Equivalent to acute panic states as seen in severe delirium or acute schizophrenic reactions"],
        significance: "Psychological component, may persist longer",
    },
    Component {
        key: "agitation",
        name: "Agitation",
        max: 7,
        anchors: &["Normal activity", "Somewhat more than normal activity", "", "", "Moderately fidgety and restless", "", "", "Paces back and forth during most of the interview, or constantly thrashes about"],
        significance: "Motor restlessness, risk for injury",
    },
    Component {
        key: "tactile_disturbances",
        name: "Tactile Disturbances",
        max: 7,
        anchors: &["None", "Very mild itching, pins and needles, burning or numbness", "Mild itching, pins and needles, burning or numbness", "Moderate itching, pins and needles, burning or numbness", "Moderately severe hallucinations", "Severe hallucinations", "Extremely severe hallucinations", "Continuous hallucinations"],
        significance: "May progress to tactile hallucinations",
    },
    Component {
        key: "auditory_disturbances",
        name: "Auditory Disturbances",
        max: 7,
        anchors: &["Not present", "Very mild harshness or ability to frighten", "Mild harshness or ability to frighten", "Moderate harshness or ability to frighten", "Moderately severe hallucinations", "Severe hallucinations", "Extremely severe hallucinations", "Continuous hallucinations"],
        significance: "May progress to auditory hallucinations",
    },
    Component {
        key: "visual_disturbances",
        name: "Visual Disturbances",
        max: 7,
        anchors: &["Not present", "Very mild sensitivity", "Mild sensitivity", "Moderate sensitivity", "Moderately severe hallucinations", "Severe hallucinations", "Extremely severe hallucinations", "Continuous hallucinations"],
        significance: "May progress to visual hallucinations",
    },
    Component {
        key: "headache",
        name: "Headache, Fullness in Head",
        max: 7,
        anchors: &["Not present", "Very mild", "Mild", "Moderate", "Moderately severe", "Severe", "Very severe", "Extremely severe"],
        significance: "Often accompanies other withdrawal symptoms",
    },
    Component {
        key: "orientation",
        name: "Orientation and Clouding of Sensorium",
        max: 4,
        anchors: &["Oriented and can do serial additions", "Cannot do serial additions or is uncertain about date", "Disoriented for date by no more than 2 calendar days", "Disoriented for date by more than 2 calendar days", "Disoriented for place/or person"],
        significance: "Cognitive impairment, risk for delirium",
    },
];

impl CiwaArInput {
    fn scores(&self) -> [i64; 10] {
        [
            self.nausea_vomiting,
            self.tremor,
            self.paroxysmal_sweats,
            self.anxiety,
            self.agitation,
            self.tactile_disturbances,
            self.auditory_disturbances,
            self.visual_disturbances,
            self.headache,
            self.orientation,
        ]
    }
}

fn significance(component: &Component, score: i64) -> String {
    let base = component.significance;
    let orientation = component.key == "orientation";
    if score >= 4 && !orientation {
        format!("{base} - Moderate to severe symptoms present")
    } else if score >= 2 && orientation {
        format!("{base} - Cognitive impairment present")
    } else if score > 0 {
        format!("{base} - Mild symptoms present")
    } else {
        format!("{base} - No symptoms")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Minimal,
    MildModerate,
    Severe,
}

impl Severity {
    fn from_score(score: i64) -> Self {
        match score {
            ..=8 => Severity::Minimal,
            9..=19 => Severity::MildModerate,
            _ => Severity::Severe,
        }
    }

    fn category(self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal withdrawal",
            Severity::MildModerate => "Mild to moderate withdrawal",
            Severity::Severe => "Severe withdrawal",
        }
    }

    fn risk_level(self) -> &'static str {
        match self {
            Severity::Minimal => "Low risk for complications",
            Severity::MildModerate => "Moderate risk, requires monitoring",
            Severity::Severe => "High risk for delirium tremens and seizures",
        }
    }

    fn treatment(self) -> Value {
        let (range, medication, monitoring, considerations) = match self {
            Severity::Minimal => (
                "0-8",
                "Usually none required",
                "Monitor every 4-8 hours",
                "Supportive care, hydration, vitamins",
            ),
            Severity::MildModerate => (
                "9-19",
                "Consider benzodiazepines (lorazepam 1-2mg PO/IV q1-2h PRN)",
                "Monitor every 1-2 hours",
                "Symptom-triggered therapy preferred",
            ),
            Severity::Severe => (
                "≥20",
                "Aggressive benzodiazepines (lorazepam 2-4mg IV q15-30min PRN)",
                "Continuous monitoring, consider ICU",
                "High risk for seizures and delirium tremens",
            ),
        };
        json!({
            "score_range": range,
            "medication": medication,
            "monitoring": monitoring,
            "considerations": considerations,
        })
    }
}

pub fn calculate(input: &CiwaArInput) -> CalcResult {
    let scores = input.scores();
    let total: i64 = scores.iter().sum();
    let severity = Severity::from_score(total);

    let interpretation = match severity {
        Severity::Minimal => Interpretation::new(
            "Minimal",
            "Absent or minimal withdrawal",
            format!("CIWA-Ar Score {total}: Minimal withdrawal symptoms. No pharmacological treatment typically required. Monitor every 4-8 hours. Provide supportive care including hydration and thiamine."),
        ),
        Severity::MildModerate => Interpretation::new(
            "Mild to Moderate",
            "Mild to moderate withdrawal",
            format!("CIWA-Ar Score {total}: Mild to moderate withdrawal symptoms. Consider symptom-triggered benzodiazepine therapy. Monitor every 1-2 hours. Typical dose: lorazepam 1-2mg PO/IV q1-2h PRN."),
        ),
        Severity::Severe => Interpretation::new(
            "Severe",
            "Severe withdrawal",
            format!("CIWA-Ar Score {total}: Severe withdrawal symptoms with high risk for delirium tremens and seizures. Requires immediate aggressive treatment with benzodiazepines. Consider ICU monitoring. Typical dose: lorazepam 2-4mg IV q15-30min PRN."),
        ),
    };

    let mut component_scores = Map::new();
    for (component, score) in COMPONENTS.iter().zip(scores) {
        let anchor = usize::try_from(score)
            .ok()
            .and_then(|i| component.anchors.get(i))
            .copied()
            .unwrap_or("");
        component_scores.insert(
            component.key.to_string(),
            json!({
                "name": component.name,
                "score": score,
                "max_score": component.max,
                "description": anchor,
                "clinical_significance": significance(component, score),
            }),
        );
    }

    Ok(CalculatorResponse::new(total, "points", interpretation).with(
        "scoring_breakdown",
        json!({
            "component_scores": component_scores,
            "score_summary": {
                "total_score": total,
                "max_possible_score": 67,
                "severity_category": severity.category(),
                "risk_level": severity.risk_level(),
            },
            "treatment_recommendations": severity.treatment(),
            "clinical_context": {
                "assessment_frequency": "Every 1-2 hours during active withdrawal",
                "duration": "Typically peaks 24-72 hours after last drink",
                "complications_to_monitor": [
                    "Delirium tremens (mortality 5-25% if untreated)",
                    "Withdrawal seizures (usually within 48 hours)",
                    "Cardiovascular instability",
                    "Hyperthermia and dehydration",
                ],
                "contraindications": [
                    "Not suitable for intubated patients",
                    "Not reliable in heavily sedated patients",
                    "Requires patient cooperation for accurate assessment",
                ],
            },
            "additional_considerations": {
                "thiamine_supplementation": "Thiamine 100mg daily recommended for all patients",
                "folate_supplementation": "Folate 1mg daily recommended",
                "fluid_electrolyte_monitoring": "Monitor for hyponatremia, hypokalemia, hypomagnesemia",
                "comorbidity_assessment": "Screen for concurrent medical and psychiatric conditions",
            },
        }),
    ))
}
