//! Modified NIH Stroke Scale (mNIHSS), 0 to 31 points.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};

choice! {
    pub enum Correctness {
        BothCorrect => "both_correct",
        OneCorrect => "one_correct",
        ZeroCorrect => "zero_correct",
    }
}

choice! {
    pub enum EyeMovements {
        Normal => "normal",
        PartialGazePalsy => "partial_gaze_palsy",
        TotalGazePalsy => "total_gaze_palsy",
    }
}

choice! {
    pub enum VisualFields {
        NoVisualLoss => "no_visual_loss",
        PartialHemianopia => "partial_hemianopia",
        CompleteHemianopia => "complete_hemianopia",
        BilateralHemianopia => "bilateral_hemianopia",
    }
}

choice! {
    pub enum Motor {
        NoDrift => "no_drift",
        DriftBefore10Seconds => "drift_before_10_seconds",
        FallsBefore10Seconds => "falls_before_10_seconds",
        NoEffortAgainstGravity => "no_effort_against_gravity",
        NoMovement => "no_movement",
    }
}

choice! {
    pub enum Sensation {
        Normal => "normal_no_sensory_loss",
        Abnormal => "abnormal_sensory_loss",
    }
}

choice! {
    pub enum Language {
        Normal => "normal_no_aphasia",
        MildAphasia => "mild_aphasia",
        SevereAphasia => "severe_aphasia",
        MuteGlobalAphasia => "mute_global_aphasia",
    }
}

choice! {
    pub enum Extinction {
        Normal => "normal",
        Mild => "mild",
        Severe => "severe",
    }
}

calculator_input! {
    pub struct MnihssInput {
        pub orientation_questions: Correctness,
        pub commands: Correctness,
        pub horizontal_eye_movements: EyeMovements,
        pub visual_fields: VisualFields,
        pub left_arm_motor: Motor,
        pub right_arm_motor: Motor,
        pub left_leg_motor: Motor,
        pub right_leg_motor: Motor,
        pub sensation: Sensation,
        pub language_aphasia: Language,
        pub extinction_neglect: Extinction,
    }
}

fn correctness(c: Correctness) -> i64 {
    match c {
        Correctness::BothCorrect => 0,
        Correctness::OneCorrect => 1,
        Correctness::ZeroCorrect => 2,
    }
}

fn motor(m: Motor) -> i64 {
    match m {
        Motor::NoDrift => 0,
        Motor::DriftBefore10Seconds => 1,
        Motor::FallsBefore10Seconds => 2,
        Motor::NoEffortAgainstGravity => 3,
        Motor::NoMovement => 4,
    }
}

impl MnihssInput {
    fn total(&self) -> i64 {
        let eyes = match self.horizontal_eye_movements {
            EyeMovements::Normal => 0,
            EyeMovements::PartialGazePalsy => 1,
            EyeMovements::TotalGazePalsy => 2,
        };
        let visual = match self.visual_fields {
            VisualFields::NoVisualLoss => 0,
            VisualFields::PartialHemianopia => 1,
            VisualFields::CompleteHemianopia => 2,
            VisualFields::BilateralHemianopia => 3,
        };
        let sensation = i64::from(self.sensation == Sensation::Abnormal);
        let language = match self.language_aphasia {
            Language::Normal => 0,
            Language::MildAphasia => 1,
            Language::SevereAphasia => 2,
            Language::MuteGlobalAphasia => 3,
        };
        let extinction = match self.extinction_neglect {
            Extinction::Normal => 0,
            Extinction::Mild => 1,
            Extinction::Severe => 2,
        };
        let limbs: i64 = [self.left_arm_motor, self.right_arm_motor, self.left_leg_motor, self.right_leg_motor]
            .into_iter()
            .map(motor)
            .sum();

        correctness(self.orientation_questions)
            + correctness(self.commands)
            + eyes
            + visual
            + limbs
            + sensation
            + language
            + extinction
    }
}

pub fn calculate(input: &MnihssInput) -> CalcResult {
    let score = input.total();
    let (stage, description, guidance) = match score {
        ..=4 => (
            "Minor Stroke",
            "Minimal neurological deficit",
            "Minor stroke with minimal neurological impairment. The patient demonstrates minor deficits that are unlikely to significantly impact daily activities. Good functional outcome is likely with appropriate medical management. Consider standard stroke protocols and monitor for potential improvement. Early mobilization and rehabilitation may accelerate recovery.",
        ),
        5..=15 => (
            "Moderate Stroke",
            "Moderate neurological deficit",
            "Moderate stroke severity with noticeable neurological deficits that may impact daily functioning. Functional outcomes are variable and depend on specific deficits, patient factors, and quality of rehabilitation. Comprehensive stroke evaluation is indicated, including assessment for thrombolytic therapy if within time window. Multidisciplinary rehabilitation planning should be initiated early to optimize recovery potential.",
        ),
        16..=20 => (
            "Moderate-Severe Stroke",
            "Moderate to severe neurological deficit",
            "Moderate to severe stroke with significant neurological impairment affecting multiple domains of function. Substantial rehabilitation will likely be needed to optimize functional outcomes. Consider intensive monitoring and aggressive stroke management. Early assessment by rehabilitation specialists is recommended. Patient and family education about expected recovery trajectory and long-term care needs should be provided.",
        ),
        _ => (
            "Severe Stroke",
            "Severe neurological deficit",
            "Severe stroke with major neurological deficits across multiple domains. Poor functional outcome is likely without intensive intervention and comprehensive rehabilitation. Consideration for advanced stroke therapies may be warranted if within treatment windows. Intensive monitoring for complications is essential. Early palliative care consultation may be appropriate to address goals of care and quality of life issues alongside aggressive medical management.",
        ),
    };
    Ok(CalculatorResponse::new(
        score,
        "points",
        Interpretation::new(stage, description, format!("mNIHSS Score {score}: {guidance}")),
    ))
}
