mod common;

use common::{assert_close, calc, number, rejects};
use serde_json::json;

#[test]
fn charlson_example() {
    let r = calc(
        "charlson_comorbidity_index",
        json!({
            "age": 65,
            "myocardial_infarction": "no",
            "congestive_heart_failure": "yes",
            "peripheral_vascular_disease": "no",
            "cerebrovascular_disease": "no",
            "dementia": "no",
            "chronic_pulmonary_disease": "yes",
            "connective_tissue_disease": "no",
            "peptic_ulcer_disease": "no",
            "liver_disease": "none",
            "diabetes": "uncomplicated",
            "hemiplegia": "no",
            "moderate_severe_ckd": "no",
            "localized_solid_tumor": "no",
            "leukemia": "no",
            "lymphoma": "no",
            "metastatic_solid_tumor": "no",
            "aids": "no",
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "Minimal Comorbidity");
}

#[test]
fn charlson_metastatic_disease() {
    let r = calc(
        "charlson_comorbidity_index",
        json!({
            "age": 82,
            "myocardial_infarction": "no",
            "congestive_heart_failure": "yes",
            "peripheral_vascular_disease": "no",
            "cerebrovascular_disease": "no",
            "dementia": "no",
            "chronic_pulmonary_disease": "yes",
            "connective_tissue_disease": "no",
            "peptic_ulcer_disease": "no",
            "liver_disease": "moderate_severe",
            "diabetes": "with_end_organ_damage",
            "hemiplegia": "no",
            "moderate_severe_ckd": "no",
            "localized_solid_tumor": "no",
            "leukemia": "no",
            "lymphoma": "no",
            "metastatic_solid_tumor": "yes",
            "aids": "no",
        }),
    );
    assert_close(number(&r), 17.0, 1e-6);
    assert_eq!(r.stage, "Moderate Comorbidity");
}

#[test]
fn charlson_young_healthy() {
    let r = calc(
        "charlson_comorbidity_index",
        json!({
            "age": 40,
            "myocardial_infarction": "no",
            "congestive_heart_failure": "no",
            "peripheral_vascular_disease": "no",
            "cerebrovascular_disease": "no",
            "dementia": "no",
            "chronic_pulmonary_disease": "no",
            "connective_tissue_disease": "no",
            "peptic_ulcer_disease": "no",
            "liver_disease": "none",
            "diabetes": "none",
            "hemiplegia": "no",
            "moderate_severe_ckd": "no",
            "localized_solid_tumor": "no",
            "leukemia": "no",
            "lymphoma": "no",
            "metastatic_solid_tumor": "no",
            "aids": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Minimal Comorbidity");
}

#[test]
fn charlson_rejects_age() {
    rejects(
        "charlson_comorbidity_index",
        json!({
            "age": -1,
            "myocardial_infarction": "no",
            "congestive_heart_failure": "yes",
            "peripheral_vascular_disease": "no",
            "cerebrovascular_disease": "no",
            "dementia": "no",
            "chronic_pulmonary_disease": "yes",
            "connective_tissue_disease": "no",
            "peptic_ulcer_disease": "no",
            "liver_disease": "none",
            "diabetes": "uncomplicated",
            "hemiplegia": "no",
            "moderate_severe_ckd": "no",
            "localized_solid_tumor": "no",
            "leukemia": "no",
            "lymphoma": "no",
            "metastatic_solid_tumor": "no",
            "aids": "no",
        }),
    );
}

#[test]
fn cirs_g_example() {
    let r = calc(
        "cirs_g",
        json!({
            "heart": 1,
            "vascular": 2,
            "hematopoietic": 0,
            "respiratory": 1,
            "eent": 1,
            "upper_gi": 0,
            "lower_gi": 0,
            "liver_pancreas_biliary": 0,
            "renal": 1,
            "genitourinary": 1,
            "musculoskeletal_skin": 2,
            "neurologic": 0,
            "endocrine_breast": 2,
        }),
    );
    assert_close(number(&r), 11.0, 1e-6);
    assert_eq!(r.stage, "Mild Burden");
}

#[test]
fn cirs_g_severe_burden() {
    let r = calc(
        "cirs_g",
        json!({
            "heart": 4,
            "vascular": 3,
            "hematopoietic": 0,
            "respiratory": 3,
            "eent": 1,
            "upper_gi": 0,
            "lower_gi": 0,
            "liver_pancreas_biliary": 0,
            "renal": 4,
            "genitourinary": 1,
            "musculoskeletal_skin": 2,
            "neurologic": 3,
            "endocrine_breast": 2,
        }),
    );
    assert_close(number(&r), 23.0, 1e-6);
    assert_eq!(r.stage, "High Burden");
}

#[test]
fn cirs_g_rejects_rating() {
    rejects(
        "cirs_g",
        json!({
            "heart": 5,
            "vascular": 2,
            "hematopoietic": 0,
            "respiratory": 1,
            "eent": 1,
            "upper_gi": 0,
            "lower_gi": 0,
            "liver_pancreas_biliary": 0,
            "renal": 1,
            "genitourinary": 1,
            "musculoskeletal_skin": 2,
            "neurologic": 0,
            "endocrine_breast": 2,
        }),
    );
}

#[test]
fn cfs_example() {
    let r = calc(
        "clinical_frailty_scale",
        json!({"frailty_level": 4, "age": 78, "dementia_present": "no"}),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Living with Very Mild Frailty");
}

#[test]
fn cfs_severely_frail() {
    let r = calc(
        "clinical_frailty_scale",
        json!({"frailty_level": 7, "age": 78, "dementia_present": "yes"}),
    );
    assert_close(number(&r), 7.0, 1e-6);
    assert_eq!(r.stage, "Living with Severe Frailty");
}

#[test]
fn cfs_very_fit() {
    let r = calc(
        "clinical_frailty_scale",
        json!({"frailty_level": 1, "age": 78, "dementia_present": "no"}),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "Very Fit");
}

#[test]
fn cfs_rejects_level() {
    rejects(
        "clinical_frailty_scale",
        json!({"frailty_level": 10, "age": 78, "dementia_present": "no"}),
    );
}


#[test]
fn charlson_survival_extras() {
    let r = calc(
        "charlson_comorbidity_index",
        json!({
            "age": 65,
            "myocardial_infarction": "no",
            "congestive_heart_failure": "yes",
            "peripheral_vascular_disease": "no",
            "cerebrovascular_disease": "no",
            "dementia": "no",
            "chronic_pulmonary_disease": "yes",
            "connective_tissue_disease": "no",
            "peptic_ulcer_disease": "no",
            "liver_disease": "none",
            "diabetes": "uncomplicated",
            "hemiplegia": "no",
            "moderate_severe_ckd": "no",
            "localized_solid_tumor": "no",
            "leukemia": "no",
            "lymphoma": "no",
            "metastatic_solid_tumor": "no",
            "aids": "no",
        }),
    );
    assert_eq!(r.extra("age_points").unwrap(), 2);
    assert_eq!(r.extra("comorbidity_points").unwrap(), 3);
    assert_eq!(r.extra("ten_year_survival_probability").unwrap(), 92.57);
}
