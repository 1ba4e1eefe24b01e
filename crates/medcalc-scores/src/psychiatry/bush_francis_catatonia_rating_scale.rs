//! Bush-Francis Catatonia Rating Scale (BFCRS).
//!
//! Items 1-14 form the screening instrument; two or more positive items
//! screen positive. Items 15-23 complete the rating scale. Six items are
//! binary and score either 0 or 3.

use medcalc_core::math::ensure;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

calculator_input! {
    pub struct BfcrsInput {
        pub excitement: i64 => 0..=3,
        pub immobility_stupor: i64 => 0..=3,
        pub mutism: i64 => 0..=3,
        pub staring: i64 => 0..=3,
        pub posturing_catalepsy: i64 => 0..=3,
        pub grimacing: i64 => 0..=3,
        pub echopraxia_echolalia: i64 => 0..=3,
        pub stereotypy: i64 => 0..=3,
        pub mannerisms: i64 => 0..=3,
        pub verbigeration: i64 => 0..=3,
        pub rigidity: i64 => 0..=3,
        pub negativism: i64 => 0..=3,
        pub waxy_flexibility: i64 => 0..=3,
        pub withdrawal: i64 => 0..=3,
        pub impulsivity: Option<i64> => 0..=3,
        pub automatic_obedience: Option<i64> => 0..=3,
        pub passive_obedience: Option<i64> => 0..=3,
        pub muscle_resistance: Option<i64> => 0..=3,
        pub motorically_stuck: Option<i64> => 0..=3,
        pub grasp_reflex: Option<i64> => 0..=3,
        pub perseveration: Option<i64> => 0..=3,
        pub combativeness: Option<i64> => 0..=3,
        pub autonomic_abnormality: Option<i64> => 0..=3,
    }
}

struct Item {
    key: &'static str,
    label: &'static str,
    binary: bool,
}

const fn item(key: &'static str, label: &'static str, binary: bool) -> Item {
    Item { key, label, binary }
}

const SCREENING: [Item; 14] = [
    item("excitement", "Excitement", false),
    item("immobility_stupor", "Immobility Stupor", false),
    item("mutism", "Mutism", false),
    item("staring", "Staring", false),
    item("posturing_catalepsy", "Posturing Catalepsy", false),
    item("grimacing", "Grimacing", false),
    item("echopraxia_echolalia", "Echopraxia Echolalia", false),
    item("stereotypy", "Stereotypy", false),
    item("mannerisms", "Mannerisms", false),
    item("verbigeration", "Verbigeration", false),
    item("rigidity", "Rigidity", false),
    item("negativism", "Negativism", false),
    item("waxy_flexibility", "Waxy Flexibility", false),
    item("withdrawal", "Withdrawal", true),
];

const ADDITIONAL: [Item; 9] = [
    item("impulsivity", "Impulsivity", false),
    item("automatic_obedience", "Automatic Obedience", false),
    item("passive_obedience", "Passive Obedience", true),
    item("muscle_resistance", "Muscle Resistance", true),
    item("motorically_stuck", "Motorically Stuck", true),
    item("grasp_reflex", "Grasp Reflex", true),
    item("perseveration", "Perseveration", true),
    item("combativeness", "Combativeness", false),
    item("autonomic_abnormality", "Autonomic Abnormality", false),
];

impl BfcrsInput {
    fn screening(&self) -> [i64; 14] {
        [
            self.excitement,
            self.immobility_stupor,
            self.mutism,
            self.staring,
            self.posturing_catalepsy,
            self.grimacing,
            self.echopraxia_echolalia,
            self.stereotypy,
            self.mannerisms,
            self.verbigeration,
            self.rigidity,
            self.negativism,
            self.waxy_flexibility,
            self.withdrawal,
        ]
    }

    fn additional(&self) -> [Option<i64>; 9] {
        [
            self.impulsivity,
            self.automatic_obedience,
            self.passive_obedience,
            self.muscle_resistance,
            self.motorically_stuck,
            self.grasp_reflex,
            self.perseveration,
            self.combativeness,
            self.autonomic_abnormality,
        ]
    }

    fn validate(&self) -> CalcResult<()> {
        let screening = SCREENING.iter().zip(self.screening().map(Some));
        let additional = ADDITIONAL.iter().zip(self.additional());
        for (item, score) in screening.chain(additional) {
            let Some(score) = score else { continue };
            if item.binary {
                ensure(
                    score == 0 || score == 3,
                    format!("{} must be either 0 (absent) or 3 (present)", item.key),
                )?;
            }
        }
        Ok(())
    }
}

fn severity(total: i64) -> &'static str {
    match total {
        ..10 => "Mild severity",
        10..20 => "Moderate severity",
        20..30 => "Severe catatonia",
        _ => "Very severe catatonia",
    }
}

fn recommendations(positive: bool, total: i64, autonomic: i64) -> serde_json::Value {
    if !positive {
        return json!({
            "immediate_actions": [],
            "diagnostic": [
                "Continue to monitor for catatonic signs if clinical suspicion exists",
                "Consider other diagnoses (depression with psychomotor symptoms, parkinsonism, etc.)",
                "Re-evaluate if symptoms change or worsen",
            ],
            "treatment": [],
            "monitoring": [],
        });
    }
    let treatment = if total >= 20 || autonomic >= 1 {
        json!([
            "URGENT: Consider intensive care setting if autonomic instability present",
            "Lorazepam 2mg IM/IV q8h, titrate to effect (up to 16-24mg/day)",
            "If no response to benzodiazepines within 48-72h, consider ECT",
            "Discontinue antipsychotics if neuroleptic malignant syndrome suspected",
            "Supportive care: hydration, nutrition, DVT prophylaxis",
        ])
    } else {
        json!([
            "Lorazepam 1-2mg PO/IM/IV TID, titrate to response",
            "Monitor response within 24-48 hours",
            "Consider ECT if no response to adequate benzodiazepine trial",
            "Address underlying psychiatric or medical condition",
            "Ensure adequate nutrition and hydration",
        ])
    };
    json!({
        "immediate_actions": [
            "Complete full 23-item BFCRS assessment if not already done",
            "Medical workup to identify underlying causes",
            "Assess for malignant catatonia (fever, autonomic instability)",
        ],
        "diagnostic": [
            "Lorazepam challenge test (1-2mg IV/IM) - diagnostic and therapeutic",
            "CBC, CMP, TSH, B12, folate, urinalysis",
            "Consider brain imaging (CT/MRI) if first episode or focal findings",
            "EEG if seizure activity suspected",
            "Review medications for potential causative agents",
        ],
        "treatment": treatment,
        "monitoring": [
            "Re-assess with BFCRS daily during acute treatment",
            "Monitor vital signs closely, especially if autonomic symptoms present",
            "Watch for complications: aspiration, dehydration, rhabdomyolysis",
            "Document response to lorazepam challenge",
            "Consider continuous monitoring if malignant features present",
        ],
    })
}

pub fn calculate(input: &BfcrsInput) -> CalcResult {
    input.validate()?;

    let screening = input.screening();
    let additional = input.additional();
    let screening_score: i64 = screening.iter().sum();
    let positive_items = screening.iter().filter(|s| **s >= 1).count();
    let positive = positive_items >= 2;
    let total = screening_score + additional.iter().flatten().sum::<i64>();

    let interpretation = if positive {
        let severity = severity(total);
        Interpretation::new(
            "Positive Screen",
            format!("Catatonia likely present - {severity}"),
            format!("Two or more items positive in screening instrument indicates positive screening for catatonia. Total score: {total}/69. {severity}. Complete full 23-item assessment if not already done. Consider immediate treatment, particularly if autonomic instability is present. Benzodiazepine trial (lorazepam) is both diagnostic and therapeutic."),
        )
    } else {
        Interpretation::new(
            "Negative Screen",
            "Catatonia unlikely",
            "Less than 2 items positive in screening instrument. Catatonia is unlikely. Consider other diagnoses or re-evaluate if clinical suspicion remains high.",
        )
    };

    let screening_items: Vec<_> = SCREENING
        .iter()
        .zip(screening)
        .map(|(item, score)| json!({"item": item.label, "score": score, "binary": item.binary}))
        .collect();
    let additional_items: Vec<_> = ADDITIONAL
        .iter()
        .zip(additional)
        .filter_map(|(item, score)| {
            score.map(|s| json!({"item": item.label, "score": s, "binary": item.binary}))
        })
        .collect();

    let autonomic = input.autonomic_abnormality.unwrap_or(0);

    Ok(CalculatorResponse::new(total, "points", interpretation)
        .with("screening_score", screening_score)
        .with("screening_positive", positive)
        .with("positive_screening_items", positive_items)
        .with(
            "item_breakdown",
            json!({"screening_items": screening_items, "additional_items": additional_items}),
        )
        .with("clinical_recommendations", recommendations(positive, total, autonomic)))
}
