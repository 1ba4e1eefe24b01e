//! Burch-Wartofsky point scale for thyroid storm.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    /// Temperature band in °F.
    pub enum Temperature {
        F99To100 => "99_100",
        F100To101 => "100_101",
        F101To102 => "101_102",
        F102To103 => "102_103",
        F103To104 => "103_104",
        Over104 => "over_104",
    }
}

choice! {
    pub enum CnsEffects {
        Absent => "absent",
        MildAgitation => "mild_agitation",
        Moderate => "moderate_delirium_psychosis_extreme_lethargy",
        Severe => "severe_coma_seizure",
    }
}

choice! {
    pub enum GiHepatic {
        Absent => "absent",
        Moderate => "moderate_diarrhea_nausea_vomiting_abdominal_pain",
        Severe => "severe_unexplained_jaundice",
    }
}

choice! {
    pub enum Cardiovascular {
        Absent => "absent",
        Moderate => "moderate_chf_pedal_edema_pulmonary_edema",
        Severe => "severe_pulmonary_edema",
    }
}

choice! {
    /// Heart rate band in beats per minute.
    pub enum Tachycardia {
        Bpm90To109 => "90_109",
        Bpm110To119 => "110_119",
        Bpm120To129 => "120_129",
        Bpm130To139 => "130_139",
        Over140 => "over_140",
    }
}

choice! {
    pub enum Presence {
        Absent => "absent",
        Present => "present",
    }
}

calculator_input! {
    pub struct BurchWartofskyInput {
        pub temperature: Temperature,
        pub cns_effects: CnsEffects,
        pub gi_hepatic_dysfunction: GiHepatic,
        pub cardiovascular_dysfunction: Cardiovascular,
        pub tachycardia: Tachycardia,
        pub atrial_fibrillation: Presence,
        pub precipitant_history: Presence,
    }
}

pub fn calculate(input: &BurchWartofskyInput) -> CalcResult {
    let temperature = match input.temperature {
        Temperature::F99To100 => 5,
        Temperature::F100To101 => 10,
        Temperature::F101To102 => 15,
        Temperature::F102To103 => 20,
        Temperature::F103To104 => 25,
        Temperature::Over104 => 30,
    };
    let cns = match input.cns_effects {
        CnsEffects::Absent => 0,
        CnsEffects::MildAgitation => 10,
        CnsEffects::Moderate => 20,
        CnsEffects::Severe => 30,
    };
    let gi = match input.gi_hepatic_dysfunction {
        GiHepatic::Absent => 0,
        GiHepatic::Moderate => 10,
        GiHepatic::Severe => 20,
    };
    let cv = match input.cardiovascular_dysfunction {
        Cardiovascular::Absent => 0,
        Cardiovascular::Moderate => 5,
        Cardiovascular::Severe => 15,
    };
    let hr = match input.tachycardia {
        Tachycardia::Bpm90To109 => 5,
        Tachycardia::Bpm110To119 => 10,
        Tachycardia::Bpm120To129 => 15,
        Tachycardia::Bpm130To139 => 20,
        Tachycardia::Over140 => 25,
    };
    let af = if input.atrial_fibrillation == Presence::Present { 10 } else { 0 };
    let precipitant = if input.precipitant_history == Presence::Present { 10 } else { 0 };
    let total = temperature + cns + gi + cv + hr + af + precipitant;

    Ok(CalculatorResponse::new(total, "points", interpret(total))
        .with("clinical_recommendations", recommendations(total))
        .with(
            "score_breakdown",
            json!({
                "temperature": { "points": temperature, "max_points": 30 },
                "cns_effects": { "points": cns, "max_points": 30 },
                "gi_hepatic_dysfunction": { "points": gi, "max_points": 20 },
                "cardiovascular_dysfunction": { "points": cv, "max_points": 15 },
                "tachycardia": { "points": hr, "max_points": 25 },
                "atrial_fibrillation": { "points": af, "max_points": 10 },
                "precipitant_history": { "points": precipitant, "max_points": 10 },
            }),
        ))
}

fn recommendations(score: i64) -> serde_json::Value {
    if score < 25 {
        json!({
            "immediate_actions": [],
            "monitoring": [
                "Continue routine monitoring of vital signs",
                "Monitor for progression of symptoms",
                "Reassess clinical status regularly",
            ],
            "medications": [],
            "supportive_care": [],
            "investigations": [
                "Consider alternative diagnoses for thyrotoxic symptoms",
                "Review precipitating factors",
                "Monitor thyroid function tests",
            ],
        })
    } else if score < 45 {
        json!({
            "immediate_actions": [
                "Initiate close monitoring in appropriate clinical setting",
                "Prepare for potential escalation to thyroid storm treatment",
                "Consider early intervention to prevent progression",
            ],
            "monitoring": [
                "Continuous cardiac monitoring",
                "Frequent vital sign assessment",
                "Monitor neurological status closely",
            ],
            "medications": [
                "Consider antithyroid medication if not already started",
                "Beta-blocker for symptom control (propranolol preferred)",
                "Prepare emergency medications for potential escalation",
            ],
            "supportive_care": [],
            "investigations": [],
        })
    } else {
        json!({
            "immediate_actions": [
                "Initiate immediate thyroid storm treatment protocol",
                "Transfer to ICU or high-dependency unit",
                "Multidisciplinary team approach (endocrinology, ICU, pharmacy)",
            ],
            "monitoring": [
                "Continuous cardiac and hemodynamic monitoring",
                "Frequent neurological assessments",
                "Monitor for complications (heart failure, arrhythmias)",
            ],
            "medications": [
                "Antithyroid drugs: methimazole 20-30mg q8h OR propylthiouracil 300-400mg q6h",
                "Beta-blocker: propranolol 1-2mg IV q5min or 40-80mg PO q6h",
                "Iodine: SSKI 5 drops PO q6h or sodium iodide 1-2g IV daily",
                "Corticosteroids: hydrocortisone 300mg IV then 100mg q8h",
            ],
            "supportive_care": [
                "Aggressive cooling measures for hyperthermia",
                "IV fluid resuscitation for dehydration",
                "Electrolyte monitoring and correction",
                "Nutritional support",
            ],
            "investigations": [],
        })
    }
}

fn interpret(score: i64) -> Interpretation {
    if score < 25 {
        Interpretation::new(
            "Unlikely_TS",
            "Thyroid storm unlikely",
            "Score <25 suggests thyroid storm is unlikely. Continue monitoring but thyroid storm diagnosis is not supported by current clinical findings. Consider alternative diagnoses for thyrotoxic symptoms.",
        )
    } else if score < 45 {
        Interpretation::new(
            "Impending_TS",
            "Impending thyroid storm",
            "Score 25-44 suggests impending thyroid storm. High clinical suspicion warranted. Consider immediate treatment while monitoring for progression to overt thyroid storm. Close observation and supportive care recommended.",
        )
    } else {
        Interpretation::new(
            "Highly_Suggestive_TS",
            "Thyroid storm highly suggestive",
            "Score ≥45 is highly suggestive of thyroid storm. This is a life-threatening endocrine emergency requiring immediate aggressive treatment including antithyroid drugs, beta-blockers, iodine, corticosteroids, and supportive care.",
        )
    }
}
