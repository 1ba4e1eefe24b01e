//! CAM-ICU delirium assessment.
//!
//! Positive when feature 1 (acute onset or fluctuating course) and feature 2
//! (inattention) are present together with feature 3 (altered consciousness)
//! or feature 4 (disorganized thinking).

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::{json, Value};

calculator_input! {
    pub struct CamIcuInput {
        pub rass_score: i64 => -5..=4,
        pub acute_onset_fluctuating: YesNo,
        pub attention_errors: i64 => 0..=10,
        pub thinking_errors: i64 => 0..=4,
    }
}

fn rass_label(rass: i64) -> &'static str {
    match rass {
        4 => "Combative",
        3 => "Very agitated",
        2 => "Agitated",
        1 => "Restless",
        0 => "Alert and calm",
        -1 => "Drowsy",
        -2 => "Light sedation",
        -3 => "Moderate sedation",
        -4 => "Deep sedation",
        _ => "Unarousable",
    }
}

fn feature(name: &str, positive: bool, description: String) -> Value {
    json!({
        "name": name,
        "positive": positive,
        "description": description,
        "assessment": if positive { "Present" } else { "Absent" },
    })
}

pub fn calculate(input: &CamIcuInput) -> CalcResult {
    let onset = input.acute_onset_fluctuating.is_yes();
    let inattention = input.attention_errors > 2;
    let consciousness = input.rass_score != 0;
    let thinking = input.thinking_errors > 1;
    let positive = onset && inattention && (consciousness || thinking);

    let features = json!({
        "feature_1": feature(
            "Acute Onset or Fluctuating Course",
            onset,
            "Acute change in mental status or fluctuating course in past 24 hours".to_string(),
        ),
        "feature_2": feature(
            "Inattention",
            inattention,
            format!("Attention test errors: {} (>2 errors indicates inattention)", input.attention_errors),
        ),
        "feature_3": feature(
            "Altered Level of Consciousness",
            consciousness,
            format!("RASS score: {} ({})", input.rass_score, rass_label(input.rass_score)),
        ),
        "feature_4": feature(
            "Disorganized Thinking",
            thinking,
            format!("Thinking test errors: {} (>1 error indicates disorganized thinking)", input.thinking_errors),
        ),
    });

    let validity = if input.rass_score < -3 {
        json!({
            "valid": false,
            "reason": format!("RASS score {} too low for assessment (requires ≥ -3)", input.rass_score),
            "recommendation": "Patient too sedated for CAM-ICU assessment. Reassess when RASS ≥ -3",
        })
    } else {
        json!({
            "valid": true,
            "reason": format!("RASS score {} adequate for assessment", input.rass_score),
            "recommendation": "Assessment results are valid",
        })
    };

    let (result, interpretation) = if positive {
        (
            "Positive",
            Interpretation::new(
                "CAM-ICU Positive",
                "Delirium present",
                "Patient meets CAM-ICU criteria for delirium. Immediate implementation of delirium management protocols is recommended. Evaluate and address underlying causes, optimize medications, and implement non-pharmacological interventions.",
            ),
        )
    } else {
        (
            "Negative",
            Interpretation::new(
                "CAM-ICU Negative",
                "No delirium detected",
                "Patient does not meet CAM-ICU criteria for delirium at this time. Continue routine monitoring and reassess regularly as delirium can fluctuate throughout the day.",
            ),
        )
    };

    Ok(CalculatorResponse::new(result, "assessment", interpretation)
        .with("cam_icu_positive", positive)
        .with("features", features)
        .with("management_recommendations", management(positive))
        .with("assessment_validity", validity))
}

fn management(positive: bool) -> Value {
    if positive {
        json!({
            "immediate_actions": [
                "Implement delirium management protocol",
                "Evaluate and treat underlying causes (infection, metabolic disturbances, medications)",
                "Review and optimize sedative medications",
                "Ensure adequate sleep-wake cycles",
                "Consider antipsychotic therapy if agitation present and non-pharmacological measures insufficient",
            ],
            "ongoing_monitoring": [
                "Continue CAM-ICU assessments every shift",
                "Monitor for complications (falls, self-extubation, longer ICU stay)",
                "Assess functional status and cognitive recovery",
                "Family involvement in care and orientation",
            ],
            "prevention_strategies": [
                "Maintain normal sleep-wake cycles",
                "Early mobilization when appropriate",
                "Minimize unnecessary medications",
                "Frequent reorientation",
                "Noise reduction strategies",
            ],
            "reassessment_timing": "Every nursing shift or with change in clinical status",
        })
    } else {
        json!({
            "immediate_actions": [
                "Continue current care plan",
                "Maintain delirium prevention strategies",
            ],
            "ongoing_monitoring": [
                "Continue routine CAM-ICU screening",
                "Monitor for risk factors that could precipitate delirium",
            ],
            "prevention_strategies": [
                "Maintain normal sleep-wake cycles",
                "Early mobilization",
                "Minimize sedating medications",
                "Frequent reorientation",
                "Family involvement in care",
            ],
            "reassessment_timing": "Every nursing shift as per ICU protocol",
        })
    }
}
