//! Rapid Emergency Medicine Score (REMS).

use medcalc_core::{calculator_input, CalcResult, CalculatorResponse, Interpretation};
use serde_json::json;

calculator_input! {
    pub struct RemsInput {
        pub age: i64 => 0..=120,
        pub body_temperature: f64 => 25.0..=45.0,
        pub mean_arterial_pressure: i64 => 20..=250,
        pub heart_rate: i64 => 20..=250,
        pub respiratory_rate: i64 => 1..=80,
        pub oxygen_saturation: i64 => 50..=100,
        pub glasgow_coma_scale: i64 => 3..=15,
    }
}

fn age_points(age: i64) -> i64 {
    match age {
        ..45 => 0,
        45..55 => 2,
        55..65 => 3,
        65..75 => 5,
        _ => 6,
    }
}

fn temperature_points(celsius: f64) -> i64 {
    if celsius < 30.0 {
        4
    } else if celsius < 32.0 {
        3
    } else if celsius < 34.0 {
        2
    } else if celsius < 36.0 {
        1
    } else if celsius <= 38.4 {
        0
    } else if celsius < 38.9 {
        1
    } else if celsius <= 40.9 {
        3
    } else {
        4
    }
}

fn map_points(map: i64) -> i64 {
    match map {
        ..50 => 2,
        50..70 => 1,
        70..110 => 0,
        110..130 => 2,
        130..160 => 3,
        _ => 4,
    }
}

fn heart_rate_points(rate: i64) -> i64 {
    match rate {
        ..40 => 3,
        40..55 => 2,
        55..70 => 1,
        70..110 => 0,
        110..140 => 2,
        140..180 => 3,
        _ => 4,
    }
}

fn respiratory_rate_points(rate: i64) -> i64 {
    match rate {
        ..6 => 3,
        6..10 => 2,
        10..12 => 1,
        12..25 => 0,
        25..35 => 2,
        35..50 => 3,
        _ => 4,
    }
}

fn saturation_points(spo2: i64) -> i64 {
    match spo2 {
        ..75 => 4,
        75..86 => 3,
        86..90 => 2,
        _ => 0,
    }
}

fn gcs_points(gcs: i64) -> i64 {
    match gcs {
        ..5 => 4,
        5..8 => 3,
        8..11 => 2,
        11..14 => 1,
        _ => 0,
    }
}

pub fn calculate(input: &RemsInput) -> CalcResult {
    let components = [
        ("age_score", age_points(input.age)),
        ("temperature_score", temperature_points(input.body_temperature)),
        ("map_score", map_points(input.mean_arterial_pressure)),
        ("heart_rate_score", heart_rate_points(input.heart_rate)),
        ("respiratory_rate_score", respiratory_rate_points(input.respiratory_rate)),
        ("oxygen_saturation_score", saturation_points(input.oxygen_saturation)),
        ("glasgow_coma_scale_score", gcs_points(input.glasgow_coma_scale)),
    ];
    let score: i64 = components.iter().map(|(_, points)| points).sum();
    let breakdown: serde_json::Map<String, serde_json::Value> = components
        .iter()
        .map(|(name, points)| (name.to_string(), json!(points)))
        .collect();

    Ok(CalculatorResponse::new(score, "points", interpret(score))
        .with("component_scores", breakdown))
}

fn interpret(score: i64) -> Interpretation {
    let (stage, description, outlook) = match score {
        ..=2 => (
            "Very Low Risk",
            "Very low mortality risk",
            "Very low risk of in-hospital mortality (0.3%). Standard care and monitoring appropriate.",
        ),
        3..=5 => (
            "Low Risk",
            "Low mortality risk",
            "Low risk of in-hospital mortality (2%). Close monitoring recommended.",
        ),
        6..=9 => (
            "Moderate Risk",
            "Moderate mortality risk",
            "Moderate risk of in-hospital mortality (6.7%). Enhanced monitoring and prompt intervention indicated.",
        ),
        10..=11 => (
            "High Risk",
            "High mortality risk",
            "High risk of in-hospital mortality (20.3%). Intensive monitoring and aggressive intervention required.",
        ),
        12..=21 => (
            "Very High Risk",
            "Very high mortality risk",
            "Very high risk of in-hospital mortality (>20%). Critical care management and intensive intervention required.",
        ),
        _ => (
            "Extremely High Risk",
            "Extremely high mortality risk",
            "Extremely high risk of in-hospital mortality (approaching 100%). Palliative care considerations may be appropriate.",
        ),
    };
    Interpretation::new(stage, description, format!("REMS Score: {score} points. {outlook}"))
}
