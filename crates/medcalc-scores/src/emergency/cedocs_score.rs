//! Community Emergency Department Overcrowding Scale.
//!
//! Bands are contiguous: each level runs up to and includes its upper bound.

use medcalc_core::math::{fixed, round_to};
use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

const BASE_CONSTANT: f64 = -29.53;
const DEFAULT_SCALING: f64 = 2.0;

/// Cubic volume adjustments: (threshold visits, coefficient).
const VOLUME_SPLINE: [(i64, f64); 4] = [
    (18_811, -1.09e-12),
    (43_012, 8.18e-12),
    (49_466, -8.18e-12),
    (67_273, 1.08e-12),
];

calculator_input! {
    pub struct CedocsInput {
        pub critical_care_patients: i64 => 0..=100,
        pub longest_wait_time_minutes: i64 => 0..=2880,
        pub waiting_room_patients: i64 => 0..=500,
        pub total_ed_patients: i64 => 0..=1000,
        pub ed_beds: i64 => 1..=500,
        pub annual_ed_visits: i64 => 1000..=500_000,
        pub scaling_factor: Option<f64> => 0.1..=10.0,
    }
}

pub fn calculate(input: &CedocsInput) -> CalcResult {
    let scaling = input.scaling_factor.unwrap_or(DEFAULT_SCALING);
    let ratio = input.total_ed_patients as f64 / input.ed_beds as f64;
    let visits = input.annual_ed_visits;

    let critical = 3.14 * input.critical_care_patients as f64;
    let wait = 0.52 * input.longest_wait_time_minutes as f64;
    let waiting_room = 1.14 * input.waiting_room_patients as f64;
    let bed_ratio = 20.55 * ratio;
    let volume = 0.00124 * visits as f64;
    let raw = BASE_CONSTANT + critical + wait + waiting_room + bed_ratio + volume;

    let mut adjustments = 0.0;
    let mut applied = Vec::new();
    for ((threshold, coeff), label) in VOLUME_SPLINE.iter().zip(["A", "B", "C", "D"]) {
        if visits >= *threshold {
            adjustments += coeff * ((visits - threshold) as f64).powi(3);
            applied.push(format!("Adjustment {label} applied (visits >= {threshold})"));
        }
    }
    if applied.is_empty() {
        applied.push("No volume adjustments applied".to_string());
    }

    let score = ((raw + adjustments) * scaling).max(1.0);
    let (interpretation, status) = interpret(score);

    Ok(CalculatorResponse::new(round_to(score, 1), "points", interpretation.clone())
        .with("overcrowding_level", interpretation.stage.clone())
        .with("overcrowding_status", status)
        .with("is_overcrowded", score > 100.0)
        .with("patient_bed_ratio", round_to(ratio, 2))
        .with(
            "calculation_breakdown",
            json!({
                "base_constant": BASE_CONSTANT,
                "critical_care_contribution": round_to(critical, 2),
                "wait_time_contribution": round_to(wait, 2),
                "waiting_room_contribution": round_to(waiting_room, 2),
                "patient_bed_ratio_contribution": round_to(bed_ratio, 2),
                "annual_visits_contribution": round_to(volume, 2),
                "raw_score": round_to(raw, 2),
                "conditional_adjustments": round_to(adjustments, 2),
                "scaling_factor": scaling,
                "volume_adjustments": applied,
            }),
        ))
}

fn interpret(score: f64) -> (Interpretation, &'static str) {
    let (level, description, status, guidance) = if score <= 20.0 {
        (
            "Level 1",
            "Not busy",
            "Normal operations",
            "Normal ED operations with minimal crowding. Adequate resources and optimal patient flow. Continue standard protocols.",
        )
    } else if score <= 60.0 {
        (
            "Level 2",
            "Busy",
            "Increased activity",
            "Increased activity but manageable. Monitor patient flow and resource allocation. Prepare for potential volume increases.",
        )
    } else if score <= 100.0 {
        (
            "Level 3",
            "Extremely busy but not overcrowded",
            "High activity",
            "High activity level approaching capacity. Consider proactive measures to prevent overcrowding including expedited discharge planning.",
        )
    } else if score <= 140.0 {
        (
            "Level 4",
            "Overcrowded",
            "Overcrowding threshold exceeded",
            "Overcrowding threshold exceeded. Implement overcrowding protocols, resource reallocation, and consider reducing non-urgent admissions.",
        )
    } else if score <= 180.0 {
        (
            "Level 5",
            "Severely overcrowded",
            "Severe overcrowding",
            "Severe overcrowding requiring immediate intervention. Consider diversion protocols, emergency staffing, and expedited patient placement.",
        )
    } else if score <= 200.0 {
        (
            "Level 6",
            "Dangerously overcrowded",
            "Critical overcrowding",
            "Critical overcrowding situation. Implement emergency measures including possible ambulance diversion and crisis management protocols.",
        )
    } else {
        let text = format!(
            "CEDOCS Score {}: Extreme overcrowding situation exceeding validated scale. Immediate crisis intervention required including emergency protocols, ambulance diversion, and urgent administrative intervention to protect patient safety.",
            fixed(score, 1)
        );
        return (
            Interpretation::new("Level 6+", "Extreme overcrowding", text),
            "Crisis-level overcrowding",
        );
    };
    let text = format!("CEDOCS Score {}: {description}. {guidance}", fixed(score, 1));
    (Interpretation::new(level, description, text), status)
}
