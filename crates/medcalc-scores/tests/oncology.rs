mod common;

use common::{assert_close, calc, label, number, rejects};
use serde_json::{json, Value};

#[test]
fn crash_low_risk() {
    let r = calc(
        "crash_score",
        json!({
            "diastolic_bp": "lte_72",
            "iadl_score": "26_to_29",
            "ldh": "0_to_459",
            "chemo_risk_hematologic": "0_to_0.44",
            "ecog_ps": "0",
            "mmse": "30",
            "mna": "28_to_30",
            "chemo_risk_nonhematologic": "0",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low");
}

#[test]
fn crash_high_risk() {
    let r = calc(
        "crash_score",
        json!({
            "diastolic_bp": "gt_72",
            "iadl_score": "10_to_25",
            "ldh": "gt_459",
            "chemo_risk_hematologic": "gt_0.57",
            "ecog_ps": "3_to_4",
            "mmse": "lt_30",
            "mna": "lt_28",
            "chemo_risk_nonhematologic": "2",
        }),
    );
    assert_close(number(&r), 12.0, 1e-6);
    assert_eq!(r.stage, "High");
}

#[test]
fn crash_rejects_token() {
    rejects(
        "crash_score",
        json!({
            "diastolic_bp": "72",
            "iadl_score": "26_to_29",
            "ldh": "0_to_459",
            "chemo_risk_hematologic": "0_to_0.44",
            "ecog_ps": "0",
            "mmse": "30",
            "mna": "28_to_30",
            "chemo_risk_nonhematologic": "0",
        }),
    );
}

#[test]
fn crs_example() {
    let r = calc(
        "crs_grading",
        json!({
            "fever_present": "yes",
            "hypotension_status": "none",
            "oxygen_requirement": "none",
            "organ_toxicity_grade": 0,
            "patient_age": 45,
            "comorbidities_present": "no",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "Grade 1 - Mild");
}

#[test]
fn crs_grade_3_high_flow() {
    let r = calc(
        "crs_grading",
        json!({
            "fever_present": "yes",
            "hypotension_status": "low_dose_single_pressor",
            "oxygen_requirement": "high_flow_oxygen_40_plus",
            "organ_toxicity_grade": 0,
            "patient_age": 45,
            "comorbidities_present": "no",
        }),
    );
    assert_close(number(&r), 3.0, 1e-6);
    assert_eq!(r.stage, "Grade 3 - Severe");
}

#[test]
fn crs_no_fever() {
    let r = calc(
        "crs_grading",
        json!({
            "fever_present": "no",
            "hypotension_status": "none",
            "oxygen_requirement": "none",
            "organ_toxicity_grade": 0,
            "patient_age": 45,
            "comorbidities_present": "no",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "Grade 1 - Mild");
}

#[test]
fn crs_rejects_organ_grade() {
    rejects(
        "crs_grading",
        json!({
            "fever_present": "yes",
            "hypotension_status": "none",
            "oxygen_requirement": "none",
            "organ_toxicity_grade": 5,
            "patient_age": 45,
            "comorbidities_present": "no",
        }),
    );
}

#[test]
fn ctcae_anemia_example() {
    let r = calc(
        "ctcae",
        json!({
            "adverse_event_type": "anemia",
            "patient_sex": "female",
            "hemoglobin": 9.5,
            "neutrophil_count": null,
            "platelet_count": null,
            "wbc_count": null,
            "lymphocyte_count": null,
            "temperature": null,
            "transfusion_indicated": "no",
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
    assert_eq!(r.stage, "Grade 2");
}

#[test]
fn ctcae_severe_thrombocytopenia() {
    let r = calc(
        "ctcae",
        json!({
            "adverse_event_type": "thrombocytopenia",
            "patient_sex": "male",
            "platelet_count": 20000,
            "transfusion_indicated": "no",
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Grade 4");
}

#[test]
fn ctcae_febrile_neutropenia() {
    let r = calc(
        "ctcae",
        json!({
            "adverse_event_type": "febrile_neutropenia",
            "patient_sex": "male",
            "neutrophil_count": 800,
            "temperature": 38.6,
        }),
    );
    assert_close(number(&r), 3.0, 1e-6);
    assert_eq!(r.stage, "Grade 3");
}

#[test]
fn ctcae_requires_hemoglobin() {
    rejects("ctcae", json!({"adverse_event_type": "anemia", "patient_sex": "male"}));
}

#[test]
fn damico_example() {
    let r = calc(
        "damico_risk_classification",
        json!({
            "psa_level": 8.5,
            "gleason_score": 6,
            "clinical_stage": "T1c",
            "patient_age": 65,
            "treatment_planned": "radical_prostatectomy",
        }),
    );
    assert_eq!(label(&r), "low");
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn damico_high_risk_by_psa() {
    let r = calc(
        "damico_risk_classification",
        json!({
            "psa_level": 25.0,
            "gleason_score": 6,
            "clinical_stage": "T1c",
            "patient_age": 65,
            "treatment_planned": "radical_prostatectomy",
        }),
    );
    assert_eq!(label(&r), "high");
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn damico_intermediate_by_stage() {
    let r = calc(
        "damico_risk_classification",
        json!({
            "psa_level": 5.0,
            "gleason_score": 6,
            "clinical_stage": "T2b",
            "patient_age": 65,
            "treatment_planned": "radical_prostatectomy",
        }),
    );
    assert_eq!(label(&r), "intermediate");
    assert_eq!(r.stage, "Intermediate Risk");
}

#[test]
fn damico_rejects_gleason() {
    rejects(
        "damico_risk_classification",
        json!({
            "psa_level": 8.5,
            "gleason_score": 11,
            "clinical_stage": "T1c",
            "patient_age": 65,
            "treatment_planned": "radical_prostatectomy",
        }),
    );
}

#[test]
fn gail_example() {
    let r = calc(
        "gail_model_breast_cancer_risk",
        json!({
            "age": 45,
            "age_at_menarche": "12_to_13",
            "age_at_first_birth": "25_to_29",
            "relatives_with_breast_cancer": "0",
            "previous_biopsies": "0",
            "atypical_hyperplasia": "no",
            "race_ethnicity": "white",
            "asian_subrace": null,
        }),
    );
    assert_close(number(&r), 1.59, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn gail_high_risk() {
    let r = calc(
        "gail_model_breast_cancer_risk",
        json!({
            "age": 60,
            "age_at_menarche": "7_to_11",
            "age_at_first_birth": "30_or_over",
            "relatives_with_breast_cancer": "more_than_1",
            "previous_biopsies": "1",
            "atypical_hyperplasia": "yes",
            "race_ethnicity": "white",
            "asian_subrace": null,
        }),
    );
    assert_close(number(&r), 50.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn gail_rejects_young_age() {
    rejects(
        "gail_model_breast_cancer_risk",
        json!({
            "age": 30,
            "age_at_menarche": "12_to_13",
            "age_at_first_birth": "25_to_29",
            "relatives_with_breast_cancer": "0",
            "previous_biopsies": "0",
            "atypical_hyperplasia": "no",
            "race_ethnicity": "white",
            "asian_subrace": null,
        }),
    );
}

#[test]
fn gi_gpa_example() {
    let r = calc(
        "gi_gpa",
        json!({
            "age_category": "under_60",
            "kps": "90_to_100",
            "extracranial_metastases": "absent",
            "number_brain_metastases": "1",
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Good Prognosis");
}

#[test]
fn gi_gpa_poor_prognosis() {
    let r = calc(
        "gi_gpa",
        json!({
            "age_category": "60_or_over",
            "kps": "under_80",
            "extracranial_metastases": "present",
            "number_brain_metastases": "more_than_3",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Poor Prognosis");
}

#[test]
fn gi_gpa_rejects_kps() {
    rejects(
        "gi_gpa",
        json!({
            "age_category": "under_60",
            "kps": "70",
            "extracranial_metastases": "absent",
            "number_brain_metastases": "1",
        }),
    );
}

#[test]
fn gleason_4_plus_3() {
    let r = calc("gleason_score_prostate", json!({"primary_grade": 4, "secondary_grade": 3}));
    assert_close(number(&r), 7.0, 1e-6);
    assert_eq!(r.stage, "Intermediate-Grade Cancer (Grade Group 2-3)");
}

#[test]
fn gleason_3_plus_3() {
    let r = calc("gleason_score_prostate", json!({"primary_grade": 3, "secondary_grade": 3}));
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "Low-Grade Cancer (Grade Group 1)");
}

#[test]
fn gleason_5_plus_5() {
    let r = calc("gleason_score_prostate", json!({"primary_grade": 5, "secondary_grade": 5}));
    assert_close(number(&r), 10.0, 1e-6);
    assert_eq!(r.stage, "Very High-Grade Cancer (Grade Group 5)");
}

#[test]
fn gleason_rejects_grade_two() {
    rejects("gleason_score_prostate", json!({"primary_grade": 2, "secondary_grade": 3}));
}

#[test]
fn lent_example() {
    let r = calc(
        "lent_prognostic_score",
        json!({
            "pleural_fluid_ldh": 2200.0,
            "ecog_performance_status": 1,
            "neutrophil_lymphocyte_ratio": 5.2,
            "tumor_type": "breast_gynecologic_renal",
        }),
    );
    assert_close(number(&r), 3.0, 1e-6);
    assert_eq!(r.stage, "Moderate Risk");
}

#[test]
fn lent_high_risk() {
    let r = calc(
        "lent_prognostic_score",
        json!({
            "pleural_fluid_ldh": 2200.0,
            "ecog_performance_status": 3,
            "neutrophil_lymphocyte_ratio": 5.2,
            "tumor_type": "lung_other",
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn lent_rejects_ecog() {
    rejects(
        "lent_prognostic_score",
        json!({
            "pleural_fluid_ldh": 2200.0,
            "ecog_performance_status": 5,
            "neutrophil_lymphocyte_ratio": 5.2,
            "tumor_type": "breast_gynecologic_renal",
        }),
    );
}

#[test]
fn manchester_good_prognosis() {
    let r = calc(
        "manchester_score_prognosis_sclc",
        json!({
            "serum_ldh": "normal",
            "serum_sodium": 138.0,
            "serum_alkaline_phosphatase": "normal",
            "serum_bicarbonate": 26.0,
            "disease_stage": "limited",
            "karnofsky_performance_status": 90,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Good Prognosis");
}

#[test]
fn manchester_poor_prognosis() {
    let r = calc(
        "manchester_score_prognosis_sclc",
        json!({
            "serum_ldh": "elevated",
            "serum_sodium": 128.0,
            "serum_alkaline_phosphatase": "greater_than_1.5_times_normal",
            "serum_bicarbonate": 20.0,
            "disease_stage": "extensive",
            "karnofsky_performance_status": 50,
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "Poor Prognosis");
}

#[test]
fn manchester_rejects_sodium() {
    rejects(
        "manchester_score_prognosis_sclc",
        json!({
            "serum_ldh": "normal",
            "serum_sodium": 170.0,
            "serum_alkaline_phosphatase": "normal",
            "serum_bicarbonate": 26.0,
            "disease_stage": "limited",
            "karnofsky_performance_status": 90,
        }),
    );
}

#[test]
fn leibovich_css_drives_category() {
    let r = calc(
        "leibovich_2018_rcc",
        json!({
            "age": 68,
            "ecog_status": "≥1",
            "constitutional_symptoms": true,
            "adrenalectomy": false,
            "surgical_margins": "negative",
            "tumor_grade": "3",
            "coagulative_necrosis": true,
            "sarcomatoid_differentiation": false,
            "tumor_size": 8.0,
            "perinephric_invasion": true,
            "tumor_thrombus": "level_0",
            "extension_beyond_kidney": false,
        }),
    );
    assert_close(number(&r), 16.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn leibovich_low_risk() {
    let r = calc(
        "leibovich_2018_rcc",
        json!({
            "age": 50,
            "ecog_status": "0",
            "constitutional_symptoms": false,
            "adrenalectomy": false,
            "surgical_margins": "negative",
            "tumor_grade": "1",
            "coagulative_necrosis": false,
            "sarcomatoid_differentiation": false,
            "tumor_size": 3.0,
            "perinephric_invasion": false,
            "tumor_thrombus": "none",
            "extension_beyond_kidney": false,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}


#[test]
fn ctcae_anemia_bands_are_contiguous() {
    let params = |hb: f64, transfusion: &str| {
        json!({
            "adverse_event_type": "anemia",
            "patient_sex": "male",
            "hemoglobin": hb,
            "transfusion_indicated": transfusion,
        })
    };
    assert_eq!(calc("ctcae", params(7.95, "no")).result.as_i64(), Some(2));
    assert_eq!(calc("ctcae", params(7.95, "yes")).result.as_i64(), Some(3));
    assert_eq!(calc("ctcae", params(6.4, "no")).result.as_i64(), Some(4));
    assert_eq!(calc("ctcae", params(13.5, "no")).result.as_i64(), Some(1));
    assert_eq!(calc("ctcae", params(14.0, "no")).result.as_i64(), Some(0));
}

#[test]
fn ctcae_neutropenia_between_cutoffs() {
    let r = calc(
        "ctcae",
        json!({"adverse_event_type": "neutropenia", "patient_sex": "female", "neutrophil_count": 999.5}),
    );
    assert_eq!(r.result.as_i64(), Some(2));
}

#[test]
fn gail_text_reports_rounded_risk() {
    let r = calc(
        "gail_model_breast_cancer_risk",
        json!({
            "age": 45,
            "age_at_menarche": "12_to_13",
            "age_at_first_birth": "25_to_29",
            "relatives_with_breast_cancer": "0",
            "previous_biopsies": "0",
            "atypical_hyperplasia": "no",
            "race_ethnicity": "white",
        }),
    );
    assert!(r.interpretation.starts_with("5-year breast cancer risk of 1.59% is below"));
}

fn psa_series() -> Value {
    json!({
        "psa_1": 0.5, "days_1": 0,
        "psa_2": 1.2, "days_2": 180,
        "psa_3": 2.8, "days_3": 360,
        "psa_4": 5.1, "days_4": 540,
        "psa_5": 10.3, "days_5": 720,
    })
}

#[test]
fn psa_doubling_time_regression_over_five_points() {
    let r = calc("psa_doubling_time_calculator", psa_series());
    assert_close(number(&r), 5.5, 1e-9);
    assert_eq!(r.unit, "months");
    assert_eq!(r.stage, "High Risk");
    assert_eq!(r.extra("measurements_used").unwrap(), 5);
}

#[test]
fn psa_doubling_time_two_points() {
    // 10 months apart at 30.44 days per month.
    let r = calc(
        "psa_doubling_time_calculator",
        json!({"psa_1": 1.0, "days_1": 0, "psa_2": 2.0, "days_2": 304}),
    );
    assert_close(number(&r), 10.0, 0.05);
    assert_eq!(r.stage, "Intermediate Risk");
}

#[test]
fn psa_doubling_time_falling_psa_uses_sentinel() {
    let r = calc(
        "psa_doubling_time_calculator",
        json!({"psa_1": 4.0, "days_1": 0, "psa_2": 3.0, "days_2": 180}),
    );
    assert_close(number(&r), 999.0, 1e-9);
    assert_eq!(r.stage, "Very Low Risk");
}

#[test]
fn psa_doubling_time_rejects_unpaired_and_duplicate_points() {
    let mut params = psa_series();
    params["days_3"] = Value::Null;
    rejects("psa_doubling_time_calculator", params);

    let mut params = psa_series();
    params["days_2"] = json!(0);
    rejects("psa_doubling_time_calculator", params);

    let mut params = psa_series();
    params["psa_1"] = json!(0.0);
    rejects("psa_doubling_time_calculator", params);
}
