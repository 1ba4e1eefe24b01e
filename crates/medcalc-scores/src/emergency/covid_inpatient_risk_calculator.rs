//! COVID-19 Inpatient Risk Calculator (CIRC).
//!
//! Weighted risk factors are summed and mapped through a logistic curve to a
//! probability of severe disease or death within 7 days, clamped to 1-95%.

use medcalc_core::math::{fixed, logistic, round_to};
use medcalc_core::{calculator_input, choice, CalcResult, CalculatorResponse, Interpretation, Sex, YesNo};
use serde_json::json;

choice! {
    pub enum Race {
        White => "white",
        NonWhite => "non_white",
    }
}

calculator_input! {
    pub struct CircInput {
        pub age: i64 => 18..=120,
        pub sex: Sex,
        pub race: Race,
        pub nursing_home_admission: YesNo,
        pub bmi: f64 => 15.0..=60.0,
        pub charlson_score: i64 => 0..=20,
        pub respiratory_symptoms: YesNo,
        pub gastrointestinal_symptoms: YesNo,
        pub constitutional_symptoms: YesNo,
        pub loss_taste_smell: YesNo,
        pub fever: YesNo,
        pub respiratory_rate: i64 => 8..=50,
        pub pulse: i64 => 40..=200,
        pub hemoglobin: f64 => 5.0..=20.0,
        pub white_blood_cell_count: f64 => 1.0..=50.0,
        pub absolute_lymphocyte_count: f64 => 0.1..=10.0,
        pub albumin: f64 => 1.0..=6.0,
        pub creatinine: f64 => 0.5..=15.0,
        pub alt: f64 => 5.0..=1000.0,
        pub d_dimer: f64 => 0.1..=50.0,
        pub c_reactive_protein: f64 => 0.1..=500.0,
        pub ferritin: f64 => 10.0..=5000.0,
        pub troponin_elevated: YesNo,
    }
}

fn weight(present: bool, w: f64) -> f64 {
    if present { w } else { 0.0 }
}

pub fn calculate(input: &CircInput) -> CalcResult {
    let age_score = match input.age {
        ..40 => 0.0,
        40..50 => 0.5,
        50..60 => 1.0,
        60..70 => 1.8,
        70..80 => 2.5,
        _ => 3.5,
    };

    let vital_score = weight(input.respiratory_rate > 24, 1.2)
        + if input.pulse > 100 {
            0.8
        } else if input.pulse < 60 {
            0.5
        } else {
            0.0
        };

    let lab_score = weight(input.absolute_lymphocyte_count < 1.0, 1.5)
        + weight(input.d_dimer > 1.0, 1.2)
        + weight(input.albumin < 3.5, 1.0)
        + weight(input.c_reactive_protein > 100.0, 0.8)
        + weight(input.ferritin > 500.0, 0.6)
        + weight(input.troponin_elevated.is_yes(), 1.8)
        + weight(input.hemoglobin < 12.0, 0.5)
        + weight(input.creatinine > 1.2, 1.0);

    // Preserved taste and smell is protective.
    let clinical_score = weight(input.sex == Sex::Male, 0.4)
        + weight(input.race == Race::NonWhite, 0.3)
        + weight(input.nursing_home_admission.is_yes(), 2.0)
        + weight(input.bmi > 30.0, 0.6)
        + weight(input.charlson_score > 3, 1.5)
        + weight(!input.loss_taste_smell.is_yes(), -0.5);

    let symptom_score = weight(input.respiratory_symptoms.is_yes(), 0.3)
        + weight(input.gastrointestinal_symptoms.is_yes(), 0.2)
        + weight(input.constitutional_symptoms.is_yes(), 0.2)
        + weight(input.fever.is_yes(), 0.1);

    let total = age_score + vital_score + lab_score + clinical_score + symptom_score;
    let probability = (logistic(-2.0 + 1.5 * total) * 100.0).clamp(1.0, 95.0);

    let (stage, description, monitoring, risk_factors, outlook) = if probability < 10.0 {
        (
            "Low Risk",
            "Low risk of severe disease progression or death",
            "Standard monitoring and care",
            "Few high-risk factors present",
            "low risk for severe disease progression or death within 7 days. Standard monitoring and care protocols are appropriate for this patient.",
        )
    } else if probability < 30.0 {
        (
            "Intermediate Risk",
            "Intermediate risk - enhanced monitoring recommended",
            "Enhanced monitoring with frequent assessments",
            "Moderate risk factor burden",
            "intermediate risk for severe disease progression or death within 7 days. Enhanced monitoring and close observation are recommended.",
        )
    } else if probability < 60.0 {
        (
            "High Risk",
            "High risk - intensive monitoring required",
            "Intensive monitoring with ICU consideration",
            "Multiple high-risk factors present",
            "high risk for severe disease progression or death within 7 days. Intensive monitoring and potential ICU consideration are recommended.",
        )
    } else {
        (
            "Very High Risk",
            "Very high risk - urgent intensive care consideration",
            "Urgent ICU evaluation and maximal support",
            "Extensive high-risk factor burden",
            "very high risk for severe disease progression or death within 7 days. Urgent consideration for intensive care and aggressive management is recommended.",
        )
    };
    let text = format!("CIRC risk probability of {}% indicates {outlook}", fixed(probability, 1));

    Ok(CalculatorResponse::new(
        round_to(probability, 1),
        "%",
        Interpretation::new(stage, description, text),
    )
    .with(
        "calculation_details",
        json!({
            "total_risk_score": round_to(total, 2),
            "age_score": round_to(age_score, 2),
            "vital_score": round_to(vital_score, 2),
            "lab_score": round_to(lab_score, 2),
            "clinical_score": round_to(clinical_score, 2),
            "symptom_score": round_to(symptom_score, 2),
            "risk_factors": risk_factors,
            "monitoring_recommendations": monitoring,
        }),
    ))
}
