//! Critical-Care Pain Observation Tool.

use medcalc_core::{calculator_input, choice, CalcError, CalcResult, CalculatorResponse, Interpretation};
use serde_json::{json, Value};

choice! {
    pub enum FacialExpression {
        RelaxedNeutral => "relaxed_neutral",
        Tense => "tense",
        Grimacing => "grimacing",
    }
}

choice! {
    pub enum BodyMovements {
        Absent => "absence_of_movements",
        Protection => "protection",
        Restlessness => "restlessness",
    }
}

choice! {
    pub enum MuscleTension {
        Relaxed => "relaxed",
        TenseRigid => "tense_rigid",
        VeryTenseRigid => "very_tense_rigid",
    }
}

choice! {
    pub enum PatientStatus {
        Intubated => "intubated",
        Extubated => "extubated",
    }
}

choice! {
    pub enum VentilatorCompliance {
        Tolerating => "tolerating",
        CoughingTolerating => "coughing_tolerating",
        Fighting => "fighting_ventilator",
    }
}

choice! {
    pub enum Vocalization {
        NormalOrSilent => "normal_tone_no_sound",
        SighingMoaning => "sighing_moaning",
        CryingSobbing => "crying_sobbing",
    }
}

calculator_input! {
    pub struct CpotInput {
        pub facial_expression: FacialExpression,
        pub body_movements: BodyMovements,
        pub muscle_tension: MuscleTension,
        pub patient_status: PatientStatus,
        pub ventilator_compliance: Option<VentilatorCompliance>,
        pub vocalization: Option<Vocalization>,
    }
}

fn domain(points: i64, description: &str) -> Value {
    json!({ "score": points, "description": description })
}

pub fn calculate(input: &CpotInput) -> CalcResult {
    let (facial, facial_desc) = match input.facial_expression {
        FacialExpression::RelaxedNeutral => (0, "No muscular tension observed"),
        FacialExpression::Tense => (1, "Frowning, brow lowering, orbit tightening"),
        FacialExpression::Grimacing => (2, "All previous facial movements plus eyelids tightly closed"),
    };
    let (movements, movements_desc) = match input.body_movements {
        BodyMovements::Absent => (0, "Does not move at all"),
        BodyMovements::Protection => (1, "Slow cautious movements, touching or guarding pain site"),
        BodyMovements::Restlessness => (2, "Pulling tube, attempting to sit up, moving limbs, thrashing"),
    };
    let (tension, tension_desc) = match input.muscle_tension {
        MuscleTension::Relaxed => (0, "No resistance to passive movements"),
        MuscleTension::TenseRigid => (1, "Resistance to passive movements"),
        MuscleTension::VeryTenseRigid => (2, "Strong resistance, unable to complete passive movements"),
    };

    let (fourth_key, fourth, fourth_desc) = match input.patient_status {
        PatientStatus::Intubated => {
            let compliance = input
                .ventilator_compliance
                .ok_or_else(|| CalcError::MissingField("ventilator_compliance".into()))?;
            let (points, desc) = match compliance {
                VentilatorCompliance::Tolerating => (0, "Tolerating ventilator or movement"),
                VentilatorCompliance::CoughingTolerating => (1, "Coughing but tolerating ventilation"),
                VentilatorCompliance::Fighting => (2, "Fighting ventilator, alarms frequently"),
            };
            ("ventilator_compliance", points, desc)
        }
        PatientStatus::Extubated => {
            let vocalization = input
                .vocalization
                .ok_or_else(|| CalcError::MissingField("vocalization".into()))?;
            let (points, desc) = match vocalization {
                Vocalization::NormalOrSilent => (0, "Talking in normal tone or no vocalization"),
                Vocalization::SighingMoaning => (1, "Sighing, moaning, whimpering"),
                Vocalization::CryingSobbing => (2, "Crying out, sobbing, verbal complaints"),
            };
            ("vocalization", points, desc)
        }
    };

    let score = facial + movements + tension + fourth;
    let acceptable = score <= 2;
    let interpretation = if acceptable {
        Interpretation::new(
            "Minimal to No Pain",
            "Acceptable pain level",
            format!(
                "CPOT score of {score} indicates minimal to no pain. Continue current pain management plan and routine monitoring. Patient appears comfortable with current interventions."
            ),
        )
    } else {
        Interpretation::new(
            "Unacceptable Pain",
            "Significant pain requiring intervention",
            format!(
                "CPOT score of {score} indicates unacceptable pain level. Consider alternative analgesia, reassess pain management plan, and provide non-pharmacological comfort measures. Reassess within 30 minutes of intervention."
            ),
        )
    };

    let recommendations = if acceptable {
        json!({
            "pain_management": "Continue current analgesic regimen",
            "monitoring": "Routine pain assessments every 4 hours or per protocol",
            "reassessment": "Next scheduled assessment or if patient condition changes",
        })
    } else {
        json!({
            "pain_management": "Consider increasing analgesic dose or alternative medications",
            "monitoring": "Frequent pain assessments (every 30 minutes after intervention)",
            "reassessment": "Within 30 minutes of pain intervention",
        })
    };

    let mut breakdown = json!({
        "facial_expression": domain(facial, facial_desc),
        "body_movements": domain(movements, movements_desc),
        "muscle_tension": domain(tension, tension_desc),
    });
    breakdown[fourth_key] = domain(fourth, fourth_desc);

    Ok(CalculatorResponse::new(score, "points", interpretation)
        .with("scoring_breakdown", breakdown)
        .with("clinical_recommendations", recommendations))
}
