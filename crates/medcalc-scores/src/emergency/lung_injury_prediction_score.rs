//! Lung Injury Prediction Score (LIPS).
//!
//! Diabetes reduces the score by one point, but only when sepsis is also
//! present.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

const HIGH_RISK_THRESHOLD: f64 = 4.0;

choice! {
    pub enum HighRiskSurgery {
        None => "none",
        OrthopedicSpine => "orthopedic_spine",
        AcuteAbdomen => "acute_abdomen",
        Cardiac => "cardiac",
        AorticVascular => "aortic_vascular",
        EmergencySurgery => "emergency_surgery",
    }
}

choice! {
    pub enum HighRiskTrauma {
        None => "none",
        TraumaticBrainInjury => "traumatic_brain_injury",
        SmokeInhalation => "smoke_inhalation",
        NearDrowning => "near_drowning",
        LungContusion => "lung_contusion",
        MultipleFractures => "multiple_fractures",
    }
}

calculator_input! {
    pub struct LipsInput {
        pub shock: YesNo,
        pub aspiration: YesNo,
        pub sepsis: YesNo,
        pub pneumonia: YesNo,
        pub pancreatitis: YesNo,
        pub high_risk_surgery: HighRiskSurgery,
        pub high_risk_trauma: HighRiskTrauma,
        pub alcohol_abuse: YesNo,
        pub obesity: YesNo,
        pub hypoalbuminemia: YesNo,
        pub chemotherapy: YesNo,
        pub fio2_over_35: YesNo,
        pub tachypnea: YesNo,
        pub spo2_under_95: YesNo,
        pub acidosis: YesNo,
        pub diabetes_with_sepsis: YesNo,
    }
}

fn weighted(items: &[(YesNo, f64)]) -> f64 {
    items.iter().filter(|(a, _)| a.is_yes()).map(|(_, w)| w).sum()
}

pub fn calculate(input: &LipsInput) -> CalcResult {
    let predisposing = weighted(&[
        (input.shock, 2.0),
        (input.aspiration, 2.0),
        (input.sepsis, 1.0),
        (input.pneumonia, 1.5),
        (input.pancreatitis, 1.0),
    ]);
    let surgery = match input.high_risk_surgery {
        HighRiskSurgery::None => 0.0,
        HighRiskSurgery::OrthopedicSpine => 1.0,
        HighRiskSurgery::AcuteAbdomen => 2.0,
        HighRiskSurgery::Cardiac => 2.5,
        HighRiskSurgery::AorticVascular => 3.5,
        HighRiskSurgery::EmergencySurgery => 1.5,
    };
    let trauma = match input.high_risk_trauma {
        HighRiskTrauma::None => 0.0,
        HighRiskTrauma::TraumaticBrainInjury
        | HighRiskTrauma::SmokeInhalation
        | HighRiskTrauma::NearDrowning => 2.0,
        HighRiskTrauma::LungContusion | HighRiskTrauma::MultipleFractures => 1.5,
    };
    let mut modifiers = weighted(&[
        (input.alcohol_abuse, 1.0),
        (input.obesity, 1.0),
        (input.hypoalbuminemia, 1.0),
        (input.chemotherapy, 1.0),
        (input.fio2_over_35, 2.0),
        (input.tachypnea, 1.5),
        (input.spo2_under_95, 1.0),
        (input.acidosis, 1.5),
    ]);
    if input.diabetes_with_sepsis.is_yes() && input.sepsis.is_yes() {
        modifiers -= 1.0;
    }
    let score = predisposing + surgery + trauma + modifiers;

    let interpretation = if score <= HIGH_RISK_THRESHOLD {
        Interpretation::new(
            "Low Risk",
            "Low risk for acute lung injury",
            format!(
                "LIPS score {} points. Probability of ALI development: <10%. Continue standard clinical monitoring and care, standard ventilation practices if mechanical ventilation is required and normal fluid management. Reassess the score if clinical condition changes.",
                fixed(score, 1)
            ),
        )
    } else {
        Interpretation::new(
            "High Risk",
            "High risk for acute lung injury",
            format!(
                "LIPS score {} points. Probability of ALI development: 15-25% (median time to onset 2 days). Implement lung-protective ventilation (tidal volume 6-8 mL/kg predicted body weight, PEEP 5-10 cmH₂O, plateau pressure <30 cmH₂O), conservative fluid management avoiding overload, and minimize high FiO₂ while treating underlying conditions.",
                fixed(score, 1)
            ),
        )
    };

    Ok(CalculatorResponse::new(round_to(score, 1), "points", interpretation).with(
        "component_scores",
        json!({
            "predisposing_conditions": predisposing,
            "high_risk_surgery": surgery,
            "high_risk_trauma": trauma,
            "risk_modifiers": modifiers,
        }),
    ))
}
