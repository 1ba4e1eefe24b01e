//! Mangled Extremity Severity Score (MESS).
//!
//! The ischemia component doubles when warm ischemia exceeds 6 hours.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const ISCHEMIA_HOURS_THRESHOLD: f64 = 6.0;

choice! {
    pub enum LimbIschemia {
        ReducedPulse => "reduced_pulse_normal_perfusion",
        Pulseless => "pulseless_paresthesias_slow_capillary_refill",
        CoolParalyzed => "cool_paralyzed_numb_insensate",
    }
}

choice! {
    pub enum ShockStatus {
        NoShock => "no_shock_sbp_greater_than_90",
        Transient => "transient_hypotension",
        Persistent => "persistent_hypotension",
    }
}

choice! {
    pub enum InjuryMechanism {
        Low => "low_energy",
        Medium => "medium_energy",
        High => "high_energy",
        VeryHigh => "very_high_energy",
    }
}

calculator_input! {
    pub struct MessInput {
        pub limb_ischemia: LimbIschemia,
        pub ischemia_duration_hours: f64 => 0.0..=24.0,
        pub patient_age: i64 => 0..=120,
        pub shock_status: ShockStatus,
        pub injury_mechanism: InjuryMechanism,
    }
}

pub fn calculate(input: &MessInput) -> CalcResult {
    let ischemia_base = match input.limb_ischemia {
        LimbIschemia::ReducedPulse => 1,
        LimbIschemia::Pulseless => 2,
        LimbIschemia::CoolParalyzed => 3,
    };
    let prolonged = input.ischemia_duration_hours > ISCHEMIA_HOURS_THRESHOLD;
    let multiplier = if prolonged { 2 } else { 1 };
    let ischemia = ischemia_base * multiplier;
    let age = match input.patient_age {
        ..30 => 0,
        30..50 => 1,
        _ => 2,
    };
    let shock = match input.shock_status {
        ShockStatus::NoShock => 0,
        ShockStatus::Transient => 1,
        ShockStatus::Persistent => 2,
    };
    let mechanism = match input.injury_mechanism {
        InjuryMechanism::Low => 1,
        InjuryMechanism::Medium => 2,
        InjuryMechanism::High => 3,
        InjuryMechanism::VeryHigh => 4,
    };
    let score = ischemia + age + shock + mechanism;

    let (recommendation, confidence) = match score {
        ..7 => ("Limb salvage recommended", "High confidence for salvage success"),
        7 => (
            "Borderline case requiring clinical judgment",
            "Consider modern thresholds and patient factors",
        ),
        _ => ("Primary amputation may be appropriate", "Discuss with multidisciplinary team"),
    };

    Ok(CalculatorResponse::new(score, "points", interpret(score))
        .with("ischemia_base_score", ischemia_base)
        .with("ischemia_multiplier", multiplier)
        .with("final_ischemia_score", ischemia)
        .with("age_score", age)
        .with("shock_score", shock)
        .with("mechanism_score", mechanism)
        .with(
            "assessment_data",
            json!({
                "traditional_threshold": "≥7 points (traditional)",
                "modern_threshold": "≥8-9 points (modern recommendation)",
                "recommendation": recommendation,
                "confidence_level": confidence,
                "ischemia_concerns": if prolonged { "Critical factor" } else { "Manageable" },
            }),
        ))
}

fn interpret(score: i64) -> Interpretation {
    match score {
        ..=6 => Interpretation::new(
            "Limb Salvage Likely",
            "Low risk for amputation with good salvage potential",
            "MESS score suggests limb salvage is likely to be successful. Proceed with aggressive limb preservation efforts including vascular repair, fracture stabilization, and soft tissue reconstruction. This score indicates good potential for functional limb preservation with appropriate surgical intervention. Close monitoring and multidisciplinary team approach recommended including orthopedic, vascular, and plastic surgery consultation. Early rehabilitation planning should be initiated to optimize functional outcomes.",
        ),
        7 => Interpretation::new(
            "Borderline Decision",
            "Traditional threshold for amputation consideration",
            "MESS score of 7 represents the traditional threshold for amputation consideration. However, modern surgical advances have led some experts to suggest higher thresholds (8-9 points) for amputation decisions. This borderline score requires careful clinical judgment considering patient factors including age, comorbidities, functional expectations, available surgical expertise, and institutional resources. Multidisciplinary discussion strongly recommended involving experienced trauma surgeons. Consider patient preferences and quality of life implications in decision-making.",
        ),
        _ => Interpretation::new(
            "Amputation Likely",
            "High probability of amputation requirement",
            "High MESS score suggests that primary amputation may be the most appropriate treatment option. While traditionally scores ≥7 indicated amputation, modern practice often uses higher thresholds due to advances in surgical techniques, vascular repair, and wound management. Even with high scores, limb salvage may be possible in selected cases with experienced surgical teams and adequate resources. Consider factors including patient comorbidities, functional expectations, available expertise, and patient preferences. Discuss risks and benefits of salvage versus amputation with patient and family.",
        ),
    }
}
