//! APACHE II severity of disease classification for ICU admissions.
//!
//! Physiology bands are contiguous: each band starts at its published lower
//! bound and runs up to the next band.

use medcalc_core::math::points_from_lower;
use medcalc_core::{calculator_input, choice, CalcError, CalcResult, CalculatorResponse, Interpretation, YesNo};
use serde_json::json;

choice! {
    pub enum ChronicHealth {
        None => "none",
        Present => "present",
    }
}

choice! {
    pub enum AdmissionType {
        ElectivePostoperative => "elective_postoperative",
        Nonoperative => "nonoperative",
        EmergencyPostoperative => "emergency_postoperative",
    }
}

calculator_input! {
    pub struct ApacheIiInput {
        pub age: i64 => 0..=120,
        pub temperature: f64 => 25.0..=46.0,
        pub mean_arterial_pressure: i64 => 30..=250,
        pub ph: f64 => 6.5..=8.0,
        pub heart_rate: i64 => 20..=250,
        pub respiratory_rate: i64 => 5..=80,
        pub sodium: i64 => 100..=200,
        pub potassium: f64 => 1.0..=10.0,
        pub creatinine: f64 => 0.1..=20.0,
        pub acute_renal_failure: YesNo,
        pub hematocrit: f64 => 10.0..=70.0,
        pub white_blood_cell_count: f64 => 0.1..=100.0,
        pub glasgow_coma_scale: i64 => 3..=15,
        pub fio2: f64 => 0.21..=1.0,
        pub pao2: Option<f64> => 30.0..=700.0,
        pub aado2: Option<f64> => 0.0..=800.0,
        pub chronic_health_status: Option<ChronicHealth>,
        pub admission_type: Option<AdmissionType>,
    }
}

const TEMPERATURE: &[(f64, i64)] = &[
    (41.0, 4), (39.0, 3), (38.5, 1), (36.0, 0), (34.0, 1), (32.0, 2), (30.0, 3),
];
const MAP: &[(f64, i64)] = &[(160.0, 4), (130.0, 3), (110.0, 2), (70.0, 0), (50.0, 2)];
const HEART_RATE: &[(f64, i64)] = &[
    (180.0, 4), (140.0, 3), (110.0, 2), (70.0, 0), (55.0, 2), (40.0, 3),
];
const RESPIRATORY_RATE: &[(f64, i64)] = &[
    (50.0, 4), (35.0, 3), (25.0, 1), (12.0, 0), (10.0, 1), (6.0, 2),
];
const PH: &[(f64, i64)] = &[
    (7.7, 4), (7.6, 3), (7.5, 1), (7.33, 0), (7.25, 2), (7.15, 3),
];
const SODIUM: &[(f64, i64)] = &[
    (180.0, 4), (160.0, 3), (155.0, 2), (150.0, 1), (130.0, 0), (120.0, 2), (111.0, 3),
];
const POTASSIUM: &[(f64, i64)] = &[
    (7.0, 4), (6.0, 3), (5.5, 1), (3.5, 0), (3.0, 1), (2.5, 2),
];
const CREATININE: &[(f64, i64)] = &[(3.5, 4), (2.0, 3), (1.5, 2), (0.6, 0)];
const HEMATOCRIT: &[(f64, i64)] = &[(60.0, 4), (50.0, 2), (46.0, 1), (30.0, 0), (20.0, 2)];
const WBC: &[(f64, i64)] = &[(40.0, 4), (20.0, 2), (15.0, 1), (3.0, 0), (1.0, 2)];
const PAO2: &[(f64, i64)] = &[
    (500.0, 4), (350.0, 3), (200.0, 1), (70.0, 0), (61.0, 1), (55.0, 3),
];
const AADO2: &[(f64, i64)] = &[(500.0, 4), (350.0, 3), (200.0, 2)];

fn age_points(age: i64) -> i64 {
    match age {
        ..=44 => 0,
        45..=54 => 2,
        55..=64 => 3,
        65..=74 => 5,
        _ => 6,
    }
}

pub fn calculate(input: &ApacheIiInput) -> CalcResult {
    let oxygenation = if input.fio2 < 0.5 {
        let pao2 = input
            .pao2
            .ok_or_else(|| CalcError::constraint("PaO2 is required when FiO2 < 0.5"))?;
        points_from_lower(pao2, PAO2, 4)
    } else {
        let aado2 = input
            .aado2
            .ok_or_else(|| CalcError::constraint("A-aDO2 is required when FiO2 ≥ 0.5"))?;
        points_from_lower(aado2, AADO2, 0)
    };

    let mut creatinine = points_from_lower(input.creatinine, CREATININE, 2);
    if input.acute_renal_failure.is_yes() {
        creatinine *= 2;
    }

    let aps = points_from_lower(input.temperature, TEMPERATURE, 4)
        + points_from_lower(input.mean_arterial_pressure as f64, MAP, 4)
        + points_from_lower(input.heart_rate as f64, HEART_RATE, 4)
        + points_from_lower(input.respiratory_rate as f64, RESPIRATORY_RATE, 4)
        + points_from_lower(input.ph, PH, 4)
        + points_from_lower(input.sodium as f64, SODIUM, 4)
        + points_from_lower(input.potassium, POTASSIUM, 4)
        + creatinine
        + points_from_lower(input.hematocrit, HEMATOCRIT, 4)
        + points_from_lower(input.white_blood_cell_count, WBC, 4)
        + (15 - input.glasgow_coma_scale)
        + oxygenation;

    let age = age_points(input.age);
    let chronic = match (
        input.chronic_health_status.unwrap_or(ChronicHealth::None),
        input.admission_type.unwrap_or(AdmissionType::Nonoperative),
    ) {
        (ChronicHealth::None, _) => 0,
        (ChronicHealth::Present, AdmissionType::ElectivePostoperative) => 2,
        (ChronicHealth::Present, _) => 5,
    };
    let total = aps + age + chronic;

    Ok(CalculatorResponse::new(total, "points", interpret(total)).with(
        "score_components",
        json!({
            "acute_physiology_score": aps,
            "age_points": age,
            "chronic_health_points": chronic,
        }),
    ))
}

fn interpret(score: i64) -> Interpretation {
    match score {
        ..=9 => Interpretation::new(
            "Low Risk",
            "Low mortality risk",
            "APACHE II score 0-9 points indicates low severity of illness with predicted mortality typically <10%. Patients in this range generally have a good prognosis for ICU survival.",
        ),
        10..=19 => Interpretation::new(
            "Moderate Risk",
            "Moderate mortality risk",
            "APACHE II score 10-19 points indicates moderate severity of illness with predicted mortality typically 10-25%. Close monitoring and standard ICU care are appropriate.",
        ),
        20..=29 => Interpretation::new(
            "High Risk",
            "High mortality risk",
            "APACHE II score 20-29 points indicates high severity of illness with predicted mortality typically 25-50%. Aggressive intensive care management is warranted.",
        ),
        30..=39 => Interpretation::new(
            "Very High Risk",
            "Very high mortality risk",
            "APACHE II score 30-39 points indicates very high severity of illness with predicted mortality typically 50-75%. Maximum intensive care support and consideration of goals of care discussions may be appropriate.",
        ),
        _ => Interpretation::new(
            "Extremely High Risk",
            "Extremely high mortality risk",
            "APACHE II score ≥40 points indicates extremely high severity of illness with predicted mortality typically >75%. Consider palliative care consultation and careful evaluation of treatment goals.",
        ),
    }
}
