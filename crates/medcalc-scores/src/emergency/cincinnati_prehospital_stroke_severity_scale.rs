//! Cincinnati Prehospital Stroke Severity Scale (CP-SSS).

use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

const CUTPOINT: i64 = 2;

choice! {
    pub enum LocQuestions {
        BothCorrect => "both_correct",
        OneCorrect => "one_correct",
        NeitherCorrect => "neither_correct",
    }
}

choice! {
    pub enum Commands {
        Both => "both_commands",
        One => "one_command",
        Neither => "neither_command",
    }
}

choice! {
    pub enum ArmHolding {
        CanHold => "can_hold",
        CannotHold => "cannot_hold",
    }
}

calculator_input! {
    pub struct CpSssInput {
        pub conjugate_gaze_deviation: YesNo,
        pub level_of_consciousness_questions: LocQuestions,
        pub following_commands: Commands,
        pub arm_holding_ability: ArmHolding,
    }
}

pub fn calculate(input: &CpSssInput) -> CalcResult {
    let gaze = input.conjugate_gaze_deviation.points(2);
    let (loc, loc_finding) = match input.level_of_consciousness_questions {
        LocQuestions::BothCorrect => (0, "Both questions answered correctly"),
        LocQuestions::OneCorrect => (1, "One question answered correctly"),
        LocQuestions::NeitherCorrect => (2, "Neither question answered correctly"),
    };
    let (commands, commands_finding) = match input.following_commands {
        Commands::Both => (0, "Follows both commands"),
        Commands::One => (1, "Follows one command"),
        Commands::Neither => (2, "Follows neither command"),
    };
    let (arm, arm_finding) = match input.arm_holding_ability {
        ArmHolding::CanHold => (0, "Can hold arm up for 10 seconds"),
        ArmHolding::CannotHold => (1, "Cannot hold arm up for 10 seconds"),
    };
    let score = gaze + loc + commands + arm;

    let interpretation = if score < CUTPOINT {
        Interpretation::new(
            "Low Risk",
            "LVO and severe stroke less likely",
            format!(
                "CP-SSS Score {score}: Low probability of large vessel occlusion and severe stroke (NIHSS <15). Standard stroke protocol appropriate with transport to nearest stroke-capable facility."
            ),
        )
    } else {
        Interpretation::new(
            "High Risk",
            "LVO and severe stroke likely",
            format!(
                "CP-SSS Score {score}: High probability of large vessel occlusion and severe stroke (NIHSS ≥15). Strong consideration for direct transport to comprehensive stroke center capable of endovascular thrombectomy."
            ),
        )
    };

    let gaze_finding = if input.conjugate_gaze_deviation.is_yes() { "Present" } else { "Absent" };
    Ok(CalculatorResponse::new(score, "points", interpretation).with(
        "scoring_breakdown",
        json!({
            "component_scores": {
                "conjugate_gaze_deviation": {"finding": gaze_finding, "points": gaze, "max_points": 2},
                "level_of_consciousness_questions": {"finding": loc_finding, "points": loc, "max_points": 2},
                "following_commands": {"finding": commands_finding, "points": commands, "max_points": 2},
                "arm_holding_ability": {"finding": arm_finding, "points": arm, "max_points": 1},
            },
            "max_possible_score": 7,
            "cutpoint_threshold": CUTPOINT,
        }),
    ))
}
