mod common;

use common::{assert_close, calc, number, rejects};
use serde_json::json;

#[test]
fn dds_example() {
    let r = calc(
        "diabetes_distress_scale",
        json!({
            "overwhelming_demands": 3,
            "feeling_discouraged": 2,
            "failure_regimen": 2,
            "clear_concrete_goals": 2,
            "not_motivated": 3,
            "angry_frustrated": 3,
            "unsatisfied_care": 1,
            "physician_communication": 1,
            "physician_doesnt_give_direction": 1,
            "physician_doesnt_take_seriously": 1,
            "regimen_overwhelming": 2,
            "constant_thoughts": 4,
            "blood_sugar_checking": 2,
            "regimen_burden": 3,
            "friends_family_nagging": 2,
            "friends_family_interference": 1,
            "friends_family_dont_understand": 3,
        }),
    );
    assert_close(number(&r), 2.12, 1e-6);
    assert_eq!(r.stage, "Moderate Distress");
}

#[test]
fn dds_little_distress() {
    let r = calc(
        "diabetes_distress_scale",
        json!({
            "overwhelming_demands": 1,
            "feeling_discouraged": 1,
            "failure_regimen": 1,
            "clear_concrete_goals": 1,
            "not_motivated": 1,
            "angry_frustrated": 1,
            "unsatisfied_care": 1,
            "physician_communication": 1,
            "physician_doesnt_give_direction": 1,
            "physician_doesnt_take_seriously": 1,
            "regimen_overwhelming": 1,
            "constant_thoughts": 1,
            "blood_sugar_checking": 1,
            "regimen_burden": 1,
            "friends_family_nagging": 1,
            "friends_family_interference": 1,
            "friends_family_dont_understand": 2,
        }),
    );
    assert_close(number(&r), 1.06, 1e-6);
    assert_eq!(r.stage, "Little or No Distress");
}

#[test]
fn dds_high_distress() {
    let r = calc(
        "diabetes_distress_scale",
        json!({
            "overwhelming_demands": 5,
            "feeling_discouraged": 5,
            "failure_regimen": 4,
            "clear_concrete_goals": 4,
            "not_motivated": 5,
            "angry_frustrated": 5,
            "unsatisfied_care": 1,
            "physician_communication": 1,
            "physician_doesnt_give_direction": 1,
            "physician_doesnt_take_seriously": 1,
            "regimen_overwhelming": 5,
            "constant_thoughts": 6,
            "blood_sugar_checking": 2,
            "regimen_burden": 5,
            "friends_family_nagging": 2,
            "friends_family_interference": 1,
            "friends_family_dont_understand": 3,
        }),
    );
    assert_close(number(&r), 3.29, 1e-6);
    assert_eq!(r.stage, "High Distress");
}

#[test]
fn dds_rejects_zero_item() {
    rejects(
        "diabetes_distress_scale",
        json!({
            "overwhelming_demands": 3,
            "feeling_discouraged": 2,
            "failure_regimen": 2,
            "clear_concrete_goals": 2,
            "not_motivated": 0,
            "angry_frustrated": 3,
            "unsatisfied_care": 1,
            "physician_communication": 1,
            "physician_doesnt_give_direction": 1,
            "physician_doesnt_take_seriously": 1,
            "regimen_overwhelming": 2,
            "constant_thoughts": 4,
            "blood_sugar_checking": 2,
            "regimen_burden": 3,
            "friends_family_nagging": 2,
            "friends_family_interference": 1,
            "friends_family_dont_understand": 3,
        }),
    );
}

#[test]
fn dka_mpm_example() {
    let r = calc(
        "dka_mpm_score",
        json!({
            "severe_comorbidities": "no",
            "ph_less_than_7": "no",
            "insulin_over_50_units": "no",
            "glucose_over_300_at_12h": "no",
            "depressed_mental_state_24h": "no",
            "fever_24h": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn dka_mpm_high_risk() {
    let r = calc(
        "dka_mpm_score",
        json!({
            "severe_comorbidities": "yes",
            "ph_less_than_7": "yes",
            "insulin_over_50_units": "no",
            "glucose_over_300_at_12h": "no",
            "depressed_mental_state_24h": "yes",
            "fever_24h": "yes",
        }),
    );
    assert_close(number(&r), 17.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn dka_mpm_intermediate() {
    let r = calc(
        "dka_mpm_score",
        json!({
            "severe_comorbidities": "no",
            "ph_less_than_7": "yes",
            "insulin_over_50_units": "yes",
            "glucose_over_300_at_12h": "no",
            "depressed_mental_state_24h": "no",
            "fever_24h": "no",
        }),
    );
    assert_close(number(&r), 8.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn dka_mpm_rejects_token() {
    rejects(
        "dka_mpm_score",
        json!({
            "severe_comorbidities": "no",
            "ph_less_than_7": "no",
            "insulin_over_50_units": "no",
            "glucose_over_300_at_12h": "no",
            "depressed_mental_state_24h": "no",
            "fever_24h": "maybe",
        }),
    );
}

#[test]
fn idf_dar_example() {
    let r = calc(
        "idf_dar_fasting_risk_assessment",
        json!({
            "diabetes_type": "type_2",
            "years_since_diagnosis": "less_than_10",
            "hypoglycemia_frequency": "none",
            "hba1c_level": "less_than_7_5",
            "treatment_type": "other_therapy",
            "self_monitoring_frequency": "regular",
            "acute_complications": "no",
            "macrovascular_disease": "no",
            "renal_complications": "no",
            "pregnancy_status": "not_applicable",
            "frailty_cognitive_function": "normal",
            "physical_labor": "light",
            "previous_ramadan_experience": "successful",
            "fasting_hours": "less_than_15",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn idf_dar_high_risk() {
    let r = calc(
        "idf_dar_fasting_risk_assessment",
        json!({
            "diabetes_type": "type_1",
            "years_since_diagnosis": "less_than_10",
            "hypoglycemia_frequency": "recent_severe",
            "hba1c_level": "greater_than_9",
            "treatment_type": "intensive_insulin",
            "self_monitoring_frequency": "regular",
            "acute_complications": "yes",
            "macrovascular_disease": "no",
            "renal_complications": "yes",
            "pregnancy_status": "not_applicable",
            "frailty_cognitive_function": "normal",
            "physical_labor": "light",
            "previous_ramadan_experience": "successful",
            "fasting_hours": "less_than_15",
        }),
    );
    assert_close(number(&r), 13.5, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn idf_dar_moderate_risk() {
    let r = calc(
        "idf_dar_fasting_risk_assessment",
        json!({
            "diabetes_type": "type_2",
            "years_since_diagnosis": "10_or_more",
            "hypoglycemia_frequency": "none",
            "hba1c_level": "7_5_to_9",
            "treatment_type": "basal_insulin",
            "self_monitoring_frequency": "regular",
            "acute_complications": "no",
            "macrovascular_disease": "no",
            "renal_complications": "no",
            "pregnancy_status": "not_applicable",
            "frailty_cognitive_function": "normal",
            "physical_labor": "light",
            "previous_ramadan_experience": "successful",
            "fasting_hours": "15_or_more",
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Moderate Risk");
}

#[test]
fn idf_dar_rejects_pregnancy_token() {
    rejects(
        "idf_dar_fasting_risk_assessment",
        json!({
            "diabetes_type": "type_2",
            "years_since_diagnosis": "less_than_10",
            "hypoglycemia_frequency": "none",
            "hba1c_level": "less_than_7_5",
            "treatment_type": "other_therapy",
            "self_monitoring_frequency": "regular",
            "acute_complications": "no",
            "macrovascular_disease": "no",
            "renal_complications": "no",
            "pregnancy_status": "pregnant",
            "frailty_cognitive_function": "normal",
            "physical_labor": "light",
            "previous_ramadan_experience": "successful",
            "fasting_hours": "less_than_15",
        }),
    );
}

#[test]
fn myxedema_example() {
    let r = calc(
        "myxedema_coma_diagnostic_score",
        json!({
            "body_temperature": "moderate_hypothermia_32_35",
            "central_nervous_system": "moderate_somnolence",
            "cardiovascular_dysfunction": "moderate_bradycardia_hypotension",
            "gastrointestinal_dysfunction": "mild_constipation",
            "metabolic_dysfunction": "moderate_hyponatremia",
            "precipitating_event": "moderate_stress",
        }),
    );
    assert_close(number(&r), 70.0, 1e-6);
    assert_eq!(r.stage, "Diagnostic");
}

#[test]
fn myxedema_unlikely() {
    let r = calc(
        "myxedema_coma_diagnostic_score",
        json!({
            "body_temperature": "normal_37",
            "central_nervous_system": "normal",
            "cardiovascular_dysfunction": "normal",
            "gastrointestinal_dysfunction": "normal",
            "metabolic_dysfunction": "normal",
            "precipitating_event": "none",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Unlikely");
}

#[test]
fn myxedema_rejects_token() {
    rejects(
        "myxedema_coma_diagnostic_score",
        json!({
            "body_temperature": "cold",
            "central_nervous_system": "moderate_somnolence",
            "cardiovascular_dysfunction": "moderate_bradycardia_hypotension",
            "gastrointestinal_dysfunction": "mild_constipation",
            "metabolic_dysfunction": "moderate_hyponatremia",
            "precipitating_event": "moderate_stress",
        }),
    );
}

