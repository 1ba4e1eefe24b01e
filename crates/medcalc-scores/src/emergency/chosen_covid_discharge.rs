//! CHOSEN score for COVID-19 home discharge.
//!
//! The full score uses albumin; without it the modified score falls back to
//! respiratory rate with a lower threshold.
//!
//! Albumin bands are contiguous, each starting at its lower bound (3.8, 3.4
//! and 2.8 g/dL).

use medcalc_core::math::points_from_lower;
use medcalc_core::{calculator_input, CalcError, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const FULL_THRESHOLD: i64 = 30;
const MODIFIED_THRESHOLD: i64 = 20;

calculator_input! {
    pub struct ChosenInput {
        pub age: i64 => 18..=120,
        pub oxygen_saturation: i64 => 80..=100,
        pub albumin_level: Option<f64> => 1.0..=6.0,
        pub respiratory_rate: Option<i64> => 8..=50,
    }
}

pub fn calculate(input: &ChosenInput) -> CalcResult {
    let age_points = points_from_lower(input.age as f64, &[(74.0, 0), (60.0, 1), (46.0, 2)], 5);
    let spo2_points =
        points_from_lower(input.oxygen_saturation as f64, &[(99.0, 21), (97.0, 14), (94.0, 9)], 0);

    let (third_points, score_type, threshold, third_component) = match (input.albumin_level, input.respiratory_rate) {
        (Some(albumin), _) => {
            let points = points_from_lower(albumin, &[(3.8, 29), (3.4, 15), (2.8, 5)], 0);
            (points, "Full CHOSEN Score", FULL_THRESHOLD, format!("Albumin: {albumin} g/dL ({points} pts)"))
        }
        (None, Some(rr)) => {
            let points = points_from_lower(rr as f64, &[(25.0, 0), (21.0, 5)], 10);
            (
                points,
                "Modified CHOSEN Score",
                MODIFIED_THRESHOLD,
                format!("Respiratory Rate: {rr} breaths/min ({points} pts)"),
            )
        }
        (None, None) => {
            return Err(CalcError::constraint(
                "Either albumin_level or respiratory_rate must be provided",
            ));
        }
    };
    let score = age_points + spo2_points + third_points;

    let (stage, description, recommendation, considerations) = if score >= threshold {
        (
            "Likely Suitable for Discharge",
            "Low risk - may be appropriate for home management",
            "Consider for home discharge",
            vec![
                "Low risk for clinical deterioration within 14 days",
                "Ensure appropriate follow-up is arranged",
                "Provide clear instructions for symptom monitoring",
                "Consider telemedicine or nursing follow-up",
                "Ensure patient has adequate social support",
            ],
        )
    } else if input.albumin_level.is_some() && score < MODIFIED_THRESHOLD {
        (
            "Unlikely Suitable for Discharge",
            "High risk - strongly consider inpatient management",
            "Not recommended for discharge",
            vec![
                "High risk for clinical deterioration within 14 days",
                "Consider need for supplemental oxygen, ICU care, or increased mortality risk",
                "Evaluate for continued inpatient monitoring",
                "Assess social support and follow-up capabilities",
            ],
        )
    } else {
        (
            "Borderline Risk",
            "Intermediate risk - clinical judgment required",
            "Use clinical judgment for discharge decision",
            vec![
                "Intermediate risk for clinical deterioration",
                "Consider additional risk factors and patient-specific circumstances",
                "Evaluate social support, comorbidities, and follow-up availability",
                "May benefit from close outpatient monitoring if discharged",
            ],
        )
    };
    let text = if score >= threshold {
        format!(
            "{score_type} of {score} points is above the threshold of {threshold}, indicating the patient is likely suitable for home discharge with appropriate follow-up and monitoring arrangements."
        )
    } else {
        format!(
            "{score_type} of {score} points is below the threshold of {threshold}, indicating the patient is {}. Consider continued inpatient management or very close outpatient monitoring if discharge is considered.",
            stage.to_lowercase()
        )
    };

    Ok(
        CalculatorResponse::new(score, "points", Interpretation::new(stage, description, text)).with(
            "calculation_details",
            json!({
                "score_type": score_type,
                "age_points": age_points,
                "spo2_points": spo2_points,
                "third_component": third_component,
                "threshold_used": threshold,
                "discharge_recommendation": recommendation,
                "clinical_considerations": considerations,
            }),
        ),
    )
}
