//! ACC/AHA heart failure staging (A-D).
//!
//! Stages are assigned top-down: advanced disease first, then symptoms,
//! then structural disease. Stages never regress.

use medcalc_core::{
    calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo,
};
use serde_json::json;

choice! {
    pub enum HospitalizationFrequency {
        Frequent => "frequent",
        Rare => "rare",
        None => "none",
    }
}

calculator_input! {
    pub struct AccAhaHfInput {
        pub risk_factors: YesNo,
        pub structural_disease: YesNo,
        pub current_symptoms: YesNo,
        pub advanced_symptoms: YesNo,
        pub hospitalization_frequency: HospitalizationFrequency,
        pub ejection_fraction: Option<f64> => 0.0..=100.0,
    }
}

pub fn calculate(input: &AccAhaHfInput) -> CalcResult {
    let stage = if input.advanced_symptoms.is_yes()
        || input.hospitalization_frequency == HospitalizationFrequency::Frequent
    {
        "D"
    } else if input.current_symptoms.is_yes() {
        "C"
    } else if input.structural_disease.is_yes() {
        "B"
    } else {
        "A"
    };

    let (outlook, mortality, progression) = match stage {
        "A" => (
            "Excellent with appropriate treatment",
            "Low",
            "Preventable with appropriate measures",
        ),
        "B" => (
            "Good with optimized treatment",
            "Low to moderate",
            "Prevention of symptoms is the goal",
        ),
        "C" => (
            "Moderate, dependent on control",
            "Moderate to high",
            "Focus on symptom and hospitalization control",
        ),
        _ => (
            "Reserved",
            "High",
            "Palliative care and advanced therapies",
        ),
    };
    let mut prognosis = json!({
        "outlook": outlook,
        "mortality": mortality,
        "progression": progression,
    });
    if let Some(ef) = input.ejection_fraction
        && stage != "A"
    {
        let note = if ef <= 35.0 {
            "Reduced LVEF - higher risk"
        } else if ef <= 40.0 {
            "Slightly reduced LVEF"
        } else {
            "Preserved LVEF"
        };
        prognosis["ef_note"] = json!(note);
    }

    Ok(CalculatorResponse::new(stage, "stage", interpret(stage))
        .with("therapy_recommendations", therapy(stage))
        .with("prognosis", prognosis)
        .with("ejection_fraction", input.ejection_fraction)
        .with("can_regress", false))
}

fn therapy(stage: &str) -> serde_json::Value {
    match stage {
        "A" => json!({
            "primary": ["Hypertension control", "Dyslipidemia control", "ACEI or ARB if hypertensive or diabetic", "Lifestyle modifications"],
            "medications": ["SGLT2i in diabetics with high CV risk", "Statins if indicated"],
        }),
        "B" => json!({
            "primary": ["ACEI or ARB (LVEF ≤40%)", "Evidence-based beta-blockers", "Statins", "All measures from Stage A"],
            "devices": ["ICD if LVEF ≤30% post-MI (>40 days)", "ICD in asymptomatic ischemic cardiomyopathy"],
        }),
        "C" => json!({
            "primary": ["ACEI or ARB", "Beta-blockers", "Diuretics (if fluid retention)", "All measures from Stages A and B"],
            "additional": ["Aldosterone antagonists (LVEF ≤35%)", "Sodium restriction (<3g/day)", "Supervised exercise", "Isosorbide + hydralazine (if indicated)"],
            "devices": ["ICD if LVEF ≤35%", "CRT if indicated"],
        }),
        _ => json!({
            "primary": ["All optimized measures from Stage C", "Referral to specialized team", "Evaluation for advanced therapies"],
            "advanced": ["Ventricular assist device (VAD)", "Heart transplant", "Palliative inotropes", "Palliative care"],
        }),
    }
}

fn interpret(stage: &str) -> Interpretation {
    match stage {
        "A" => Interpretation::new(
            "Stage A",
            "At risk for heart failure",
            "Patients with risk factors but no structural disease or symptoms. Recommendations: hypertension and dyslipidemia control, ACEI/ARB, lifestyle modifications, SGLT2i in diabetics. Goal: prevent HF development.",
        ),
        "B" => Interpretation::new(
            "Stage B",
            "Pre-heart failure",
            "Structural disease without symptoms. Recommendations: ACEI/ARB, beta-blockers, statins, ICD if indicated (LVEF ≤30% post-MI). Goal: prevent progression to symptomatic HF.",
        ),
        "C" => Interpretation::new(
            "Stage C",
            "Symptomatic heart failure",
            "Structural disease with current/previous symptoms. Recommendations: ACEI/ARB, beta-blockers, diuretics, aldosterone antagonists (LVEF ≤35%), supervised exercise, sodium restriction. Goal: symptom control and hospitalization prevention.",
        ),
        _ => Interpretation::new(
            "Stage D",
            "Advanced heart failure",
            "Refractory severe symptoms. Recommendations: specialized HF team, evaluation for advanced therapies (VAD, transplant), palliative care, palliative inotropes. Goal: symptom improvement and quality of life.",
        ),
    }
}
