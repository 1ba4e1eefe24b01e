//! Ishihara 14-plate red-green color vision screening, scored per eye.
//!
//! The overall stage follows the worse eye.

use medcalc_core::math::round_to;
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

const TOTAL_PLATES: i64 = 14;
const DEFICIENCY_THRESHOLD: i64 = 2;
const MIN_RELIABLE_AGE: i64 = 5;

calculator_input! {
    pub struct ColorVisionInput {
        pub correct_plates_right_eye: i64 => 0..=TOTAL_PLATES,
        pub correct_plates_left_eye: i64 => 0..=TOTAL_PLATES,
        pub visual_acuity_adequate: YesNo,
        pub patient_age: i64 => 1..=120,
    }
}

/// Per-eye status, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EyeStatus {
    Normal,
    BorderlineNormal,
    PossibleDeficiency,
    LikelyDeficiency,
}

impl EyeStatus {
    fn from_correct(correct: i64) -> Self {
        match TOTAL_PLATES - correct {
            incorrect if incorrect <= DEFICIENCY_THRESHOLD => {
                if correct >= 12 {
                    EyeStatus::Normal
                } else {
                    EyeStatus::BorderlineNormal
                }
            }
            ..=6 => EyeStatus::PossibleDeficiency,
            _ => EyeStatus::LikelyDeficiency,
        }
    }

    fn label(self) -> &'static str {
        match self {
            EyeStatus::Normal => "Normal",
            EyeStatus::BorderlineNormal => "Borderline Normal",
            EyeStatus::PossibleDeficiency => "Possible Deficiency",
            EyeStatus::LikelyDeficiency => "Likely Deficiency",
        }
    }
}

fn eye_assessment(eye: &str, correct: i64) -> (EyeStatus, serde_json::Value) {
    let status = EyeStatus::from_correct(correct);
    let (risk_level, description, significance) = match status {
        EyeStatus::Normal => (
            "Low",
            "Normal color vision",
            "No color vision deficiency detected",
        ),
        EyeStatus::BorderlineNormal => (
            "Low-Moderate",
            "Borderline normal color vision",
            "Minimal errors may indicate mild deficiency or attention issues",
        ),
        EyeStatus::PossibleDeficiency => (
            "Moderate",
            "Possible color vision deficiency",
            "Moderate number of errors suggests possible color vision defect",
        ),
        EyeStatus::LikelyDeficiency => (
            "High",
            "Color vision deficiency likely",
            "Multiple errors strongly suggest red-green color vision deficiency",
        ),
    };
    let value = json!({
        "eye": eye,
        "correct_plates": correct,
        "incorrect_plates": TOTAL_PLATES - correct,
        "total_plates": TOTAL_PLATES,
        "accuracy_percentage": round_to(correct as f64 / TOTAL_PLATES as f64 * 100.0, 1),
        "status": status.label(),
        "risk_level": risk_level,
        "description": description,
        "clinical_significance": significance,
    });
    (status, value)
}

fn recommendations(
    worst: EyeStatus,
    primary: &str,
    input: &ColorVisionInput,
) -> serde_json::Value {
    let mut follow_up: Vec<&str> = Vec::new();
    let mut counseling: Vec<&str> = Vec::new();
    let mut occupational: Vec<&str> = Vec::new();
    match worst {
        EyeStatus::Normal | EyeStatus::BorderlineNormal => {
            follow_up.push("Routine eye care as appropriate for age");
            counseling.push("Normal color vision confirmed");
        }
        EyeStatus::PossibleDeficiency => {
            follow_up.extend([
                "Consider repeat Ishihara testing in 6-12 months",
                "Ophthalmology consultation if concerns persist",
            ]);
            counseling.extend([
                "Possible mild color vision difficulties detected",
                "Most daily activities should not be significantly affected",
            ]);
            occupational.push("May have limitations in color-critical occupations");
        }
        EyeStatus::LikelyDeficiency => {
            follow_up.extend([
                "Ophthalmology referral for comprehensive color vision assessment",
                "Formal color vision testing (Farnsworth-Munsell 100 Hue test)",
                "Genetic counseling if family planning considerations",
            ]);
            counseling.extend([
                "Color vision deficiency likely present",
                "Condition is typically congenital and stable",
                "Adaptive strategies can help with daily activities",
                "Does not affect overall eye health or visual acuity",
            ]);
            occupational.extend([
                "Limitations in color-critical occupations (pilots, electricians, some medical fields)",
                "Career counseling may be beneficial",
                "Reasonable accommodations often available",
            ]);
        }
    }
    if input.patient_age < MIN_RELIABLE_AGE {
        follow_up.push("Repeat testing when child reaches 5-6 years of age");
        counseling.push("Test may be less reliable in very young children");
    }
    if !input.visual_acuity_adequate.is_yes() {
        follow_up.push("Address visual acuity issues before repeat color vision testing");
        counseling.push("Poor visual acuity may affect color vision test accuracy");
    }
    json!({
        "primary_recommendation": primary,
        "follow_up_actions": follow_up,
        "patient_counseling": counseling,
        "occupational_considerations": occupational,
    })
}

fn limitations(input: &ColorVisionInput) -> serde_json::Value {
    let mut warnings: Vec<&str> = Vec::new();
    if input.patient_age < MIN_RELIABLE_AGE {
        warnings.extend([
            "Test less reliable in children under 5 years",
            "Attention span and comprehension may affect results",
            "Consider repeat testing at older age",
        ]);
    }
    if !input.visual_acuity_adequate.is_yes() {
        warnings.extend([
            "Test accuracy reduced with visual acuity below 20/100",
            "Refractive errors should be corrected before testing",
            "Consider formal ophthalmologic evaluation",
        ]);
    }
    let reliability = if warnings.is_empty() { "High" } else { "Reduced" };
    json!({
        "general_limitations": [
            "Screening test only - not definitive diagnosis",
            "Primarily detects red-green color deficiencies",
            "Does not reliably detect blue-yellow (tritanomaly) defects",
            "Results may vary with lighting conditions and display calibration",
        ],
        "patient_specific_warnings": warnings,
        "test_reliability": reliability,
    })
}

pub fn calculate(input: &ColorVisionInput) -> CalcResult {
    let (right, right_json) = eye_assessment("Right", input.correct_plates_right_eye);
    let (left, left_json) = eye_assessment("Left", input.correct_plates_left_eye);
    let worst = right.max(left);

    let (interpretation, primary) = match worst {
        EyeStatus::Normal => (
            Interpretation::new(
                "Normal",
                "Normal color vision both eyes",
                "Both eyes demonstrate normal color vision (>12/14 plates correct with ≤2 errors). No further color vision testing indicated unless clinical suspicion remains high.",
            ),
            "No additional color vision testing needed",
        ),
        EyeStatus::BorderlineNormal => (
            Interpretation::new(
                "Normal",
                "Normal color vision",
                "Overall normal color vision with minimal errors. Results suggest intact red-green color discrimination ability.",
            ),
            "Consider repeat testing if clinical concerns persist",
        ),
        EyeStatus::PossibleDeficiency => (
            Interpretation::new(
                "Possible Deficiency",
                "Possible color vision deficiency",
                "Moderate number of errors suggests possible color vision deficiency. May indicate mild red-green color discrimination difficulties.",
            ),
            "Consider ophthalmology referral for comprehensive color vision evaluation",
        ),
        EyeStatus::LikelyDeficiency => (
            Interpretation::new(
                "Color Vision Deficiency",
                "Color vision deficiency likely",
                "Multiple errors strongly suggest red-green color vision deficiency (protanomaly or deuteranomaly). Formal ophthalmologic evaluation recommended.",
            ),
            "Ophthalmology referral recommended for definitive diagnosis and management",
        ),
    };
    let stage = interpretation.stage.clone();

    Ok(CalculatorResponse::new(stage, "assessment", interpretation)
        .with("right_eye", right_json)
        .with("left_eye", left_json)
        .with(
            "bilateral_status",
            format!("Right: {}, Left: {}", right.label(), left.label()),
        )
        .with("clinical_recommendations", recommendations(worst, primary, input))
        .with(
            "test_performance",
            json!({
                "sensitivity": "92%",
                "specificity": "100%",
                "applicable_deficiencies": "Red-green color vision defects (protanomaly, deuteranomaly)",
            }),
        )
        .with("test_limitations", limitations(input)))
}
