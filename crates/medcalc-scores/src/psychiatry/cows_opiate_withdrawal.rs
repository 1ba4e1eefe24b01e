//! Clinical Opiate Withdrawal Scale (COWS), 11 observed signs, 0-48.

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

choice! {
    pub enum RestingPulse {
        AtMost80 => "<=80",
        From81To100 => "81-100",
        From101To120 => "101-120",
        Over120 => ">120",
    }
}

choice! {
    pub enum Sweating {
        NoChillsFlushing => "no_chills_flushing",
        SubjectiveChills => "subjective_chills",
        FlushedMoistFace => "flushed_moist_face",
        BeadsOnBrow => "beads_on_brow",
        StreamingSweat => "streaming_sweat",
    }
}

choice! {
    pub enum Restlessness {
        SitsStill => "sits_still",
        DifficultySitting => "difficulty_sitting",
        FrequentShifting => "frequent_shifting",
        UnableToSit => "unable_to_sit",
    }
}

choice! {
    pub enum PupilSize {
        NormalPinned => "normal_pinned",
        PossiblyLarger => "possibly_larger",
        ModeratelyDilated => "moderately_dilated",
        ExtremelyDilated => "extremely_dilated",
    }
}

choice! {
    pub enum BoneJointAches {
        NotPresent => "not_present",
        MildDiffuse => "mild_diffuse",
        SevereDiffuse => "severe_diffuse",
        UnableToSitDiscomfort => "unable_to_sit_discomfort",
    }
}

choice! {
    pub enum RunnyNose {
        NotPresent => "not_present",
        NasalStuffiness => "nasal_stuffiness",
        RunnyNoseTearing => "runny_nose_tearing",
        ConstantStreaming => "constant_streaming",
    }
}

choice! {
    pub enum GiUpset {
        NoSymptoms => "no_symptoms",
        StomachCramps => "stomach_cramps",
        NauseaLooseStool => "nausea_loose_stool",
        VomitingDiarrhea => "vomiting_diarrhea",
        MultipleEpisodes => "multiple_episodes",
    }
}

choice! {
    pub enum Tremor {
        NoTremor => "no_tremor",
        BarelyPerceptible => "barely_perceptible",
        ModerateArmsExtended => "moderate_arms_extended",
        SevereRestTremor => "severe_rest_tremor",
    }
}

choice! {
    pub enum Anxiety {
        None => "none",
        OccasionallyAnxious => "occasionally_anxious",
        ModeratelyAnxious => "moderately_anxious",
        ExtremelyAnxious => "extremely_anxious",
    }
}

choice! {
    pub enum Gooseflesh {
        NoPiloerection => "no_piloerection",
        BarelyPerceptible => "barely_perceptible",
        ProminentArms => "prominent_arms",
        ExtensiveBody => "extensive_body",
    }
}

choice! {
    pub enum Yawning {
        NoYawning => "no_yawning",
        YawningOnceTwice => "yawning_once_twice",
        YawningThreeTimes => "yawning_three_times",
        UnableToConduct => "unable_to_conduct",
    }
}

calculator_input! {
    pub struct CowsInput {
        pub resting_pulse_rate: RestingPulse,
        pub sweating: Sweating,
        pub restlessness: Restlessness,
        pub pupil_size: PupilSize,
        pub bone_joint_aches: BoneJointAches,
        pub runny_nose_tearing: RunnyNose,
        pub gi_upset: GiUpset,
        pub tremor: Tremor,
        pub anxiety_irritability: Anxiety,
        pub gooseflesh_skin: Gooseflesh,
        pub yawning: Yawning,
    }
}

impl CowsInput {
    fn symptom_scores(&self) -> [(&'static str, i64); 11] {
        let pulse = match self.resting_pulse_rate {
            RestingPulse::AtMost80 => 0,
            RestingPulse::From81To100 => 1,
            RestingPulse::From101To120 => 2,
            RestingPulse::Over120 => 4,
        };
        let sweating = match self.sweating {
            Sweating::NoChillsFlushing => 0,
            Sweating::SubjectiveChills => 1,
            Sweating::FlushedMoistFace => 2,
            Sweating::BeadsOnBrow => 3,
            Sweating::StreamingSweat => 4,
        };
        let restlessness = match self.restlessness {
            Restlessness::SitsStill => 0,
            Restlessness::DifficultySitting => 1,
            Restlessness::FrequentShifting => 3,
            Restlessness::UnableToSit => 5,
        };
        let pupils = match self.pupil_size {
            PupilSize::NormalPinned => 0,
            PupilSize::PossiblyLarger => 1,
            PupilSize::ModeratelyDilated => 2,
            PupilSize::ExtremelyDilated => 5,
        };
        let aches = match self.bone_joint_aches {
            BoneJointAches::NotPresent => 0,
            BoneJointAches::MildDiffuse => 1,
            BoneJointAches::SevereDiffuse => 2,
            BoneJointAches::UnableToSitDiscomfort => 4,
        };
        let nose = match self.runny_nose_tearing {
            RunnyNose::NotPresent => 0,
            RunnyNose::NasalStuffiness => 1,
            RunnyNose::RunnyNoseTearing => 2,
            RunnyNose::ConstantStreaming => 4,
        };
        let gi = match self.gi_upset {
            GiUpset::NoSymptoms => 0,
            GiUpset::StomachCramps => 1,
            GiUpset::NauseaLooseStool => 2,
            GiUpset::VomitingDiarrhea => 3,
            GiUpset::MultipleEpisodes => 5,
        };
        let tremor = match self.tremor {
            Tremor::NoTremor => 0,
            Tremor::BarelyPerceptible => 1,
            Tremor::ModerateArmsExtended => 2,
            Tremor::SevereRestTremor => 4,
        };
        let anxiety = match self.anxiety_irritability {
            Anxiety::None => 0,
            Anxiety::OccasionallyAnxious => 1,
            Anxiety::ModeratelyAnxious => 2,
            Anxiety::ExtremelyAnxious => 4,
        };
        let gooseflesh = match self.gooseflesh_skin {
            Gooseflesh::NoPiloerection => 0,
            Gooseflesh::BarelyPerceptible => 1,
            Gooseflesh::ProminentArms => 2,
            Gooseflesh::ExtensiveBody => 3,
        };
        let yawning = match self.yawning {
            Yawning::NoYawning => 0,
            Yawning::YawningOnceTwice => 1,
            Yawning::YawningThreeTimes => 2,
            Yawning::UnableToConduct => 3,
        };
        [
            ("resting_pulse", pulse),
            ("sweating", sweating),
            ("restlessness", restlessness),
            ("pupil_size", pupils),
            ("bone_joint_aches", aches),
            ("runny_nose_tearing", nose),
            ("gi_upset", gi),
            ("tremor", tremor),
            ("anxiety_irritability", anxiety),
            ("gooseflesh_skin", gooseflesh),
            ("yawning", yawning),
        ]
    }
}

pub fn calculate(input: &CowsInput) -> CalcResult {
    let scores = input.symptom_scores();
    let total: i64 = scores.iter().map(|(_, s)| s).sum();

    let (interpretation, treatment, monitoring) = match total {
        ..=4 => (
            Interpretation::new(
                "None to Minimal",
                "None to minimal withdrawal symptoms",
                format!("COWS score of {total} indicates none to minimal withdrawal symptoms. No withdrawal treatment is necessary at this time. Continue monitoring for potential symptom development and patient comfort."),
            ),
            "No withdrawal treatment necessary",
            "Monitor for symptom development",
        ),
        5..=12 => (
            Interpretation::new(
                "Mild",
                "Mild withdrawal symptoms",
                format!("COWS score of {total} indicates mild withdrawal symptoms. Consider supportive care measures including comfort medications, hydration, and symptom-specific treatments. Monitor progression."),
            ),
            "Supportive care and comfort medications",
            "Regular symptom monitoring",
        ),
        13..=24 => (
            Interpretation::new(
                "Moderate",
                "Moderate withdrawal symptoms",
                format!("COWS score of {total} indicates moderate withdrawal symptoms. Pharmacologic treatment is indicated. Consider buprenorphine induction if appropriate. Provide supportive care and frequent monitoring."),
            ),
            "Pharmacologic treatment indicated, consider buprenorphine induction",
            "Frequent assessments and symptom management",
        ),
        25..=36 => (
            Interpretation::new(
                "Moderately Severe",
                "Moderately severe withdrawal symptoms",
                format!("COWS score of {total} indicates moderately severe withdrawal symptoms. Medication-assisted treatment (MAT) is strongly recommended. Consider intensive outpatient or inpatient treatment with close medical supervision."),
            ),
            "Medication-assisted treatment strongly recommended",
            "Intensive monitoring and medical supervision",
        ),
        _ => (
            Interpretation::new(
                "Severe",
                "Severe withdrawal symptoms",
                format!("COWS score of {total} indicates severe withdrawal symptoms. Immediate medical intervention is required. Consider inpatient treatment with intensive monitoring and comprehensive medication management."),
            ),
            "Immediate medical intervention and intensive treatment required",
            "Continuous medical monitoring and immediate intervention",
        ),
    };

    let symptom_scores: serde_json::Map<String, serde_json::Value> = scores
        .iter()
        .map(|(name, score)| (name.to_string(), json!(score)))
        .collect();

    Ok(CalculatorResponse::new(total, "points", interpretation).with(
        "calculation_details",
        json!({
            "symptom_scores": symptom_scores,
            "treatment_recommendations": treatment,
            "monitoring_recommendations": monitoring,
        }),
    ))
}
