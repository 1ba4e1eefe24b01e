mod common;

use common::{assert_close, calc, label, number, rejects};
use serde_json::json;

#[test]
fn acc_aha_stage_a_risk_factors_only() {
    let r = calc(
        "acc_aha_hf_staging",
        json!({
            "risk_factors": "yes",
            "structural_disease": "no",
            "current_symptoms": "no",
            "advanced_symptoms": "no",
            "hospitalization_frequency": "none",
        }),
    );
    assert_eq!(label(&r), "A");
    assert_eq!(r.stage, "Stage A");
}

#[test]
fn acc_aha_stage_c_with_reduced_ef() {
    let r = calc(
        "acc_aha_hf_staging",
        json!({
            "risk_factors": "yes",
            "structural_disease": "yes",
            "current_symptoms": "yes",
            "advanced_symptoms": "no",
            "hospitalization_frequency": "rare",
            "ejection_fraction": 35,
        }),
    );
    assert_eq!(label(&r), "C");
    assert_eq!(r.stage, "Stage C");
}

#[test]
fn acc_aha_stage_d_advanced() {
    let r = calc(
        "acc_aha_hf_staging",
        json!({
            "risk_factors": "yes",
            "structural_disease": "yes",
            "current_symptoms": "yes",
            "advanced_symptoms": "yes",
            "hospitalization_frequency": "frequent",
            "ejection_fraction": 20,
        }),
    );
    assert_eq!(label(&r), "D");
    assert_eq!(r.stage, "Stage D");
}

#[test]
fn acc_aha_rejects_ef_above_100() {
    rejects(
        "acc_aha_hf_staging",
        json!({
            "risk_factors": "yes",
            "structural_disease": "no",
            "current_symptoms": "no",
            "advanced_symptoms": "no",
            "hospitalization_frequency": "none",
            "ejection_fraction": 101,
        }),
    );
}

#[test]
fn cha2ds2_va_example() {
    let r = calc(
        "cha2ds2_va_score",
        json!({
            "age": 68,
            "congestive_heart_failure": "no",
            "hypertension": "yes",
            "diabetes_mellitus": "no",
            "stroke_tia_thromboembolism": "no",
            "vascular_disease": "no",
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn cha2ds2_va_elderly_with_stroke() {
    let r = calc(
        "cha2ds2_va_score",
        json!({
            "age": 80,
            "congestive_heart_failure": "no",
            "hypertension": "yes",
            "diabetes_mellitus": "yes",
            "stroke_tia_thromboembolism": "yes",
            "vascular_disease": "no",
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn chads2_example() {
    let r = calc(
        "chads2_score",
        json!({
            "congestive_heart_failure": "no",
            "hypertension": "yes",
            "age_75_or_older": "no",
            "diabetes_mellitus": "yes",
            "stroke_tia_thromboembolism": "no",
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
}

#[test]
fn chads2_zero() {
    let r = calc(
        "chads2_score",
        json!({
            "congestive_heart_failure": "no",
            "hypertension": "no",
            "age_75_or_older": "no",
            "diabetes_mellitus": "no",
            "stroke_tia_thromboembolism": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn chads2_max() {
    let r = calc(
        "chads2_score",
        json!({
            "congestive_heart_failure": "yes",
            "hypertension": "yes",
            "age_75_or_older": "yes",
            "diabetes_mellitus": "yes",
            "stroke_tia_thromboembolism": "yes",
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn chads_65_risk_factor_recommends_oac() {
    let r = calc(
        "chads_65",
        json!({
            "age_65_or_older": "no",
            "congestive_heart_failure": "no",
            "hypertension": "yes",
            "diabetes_mellitus": "no",
            "stroke_tia_history": "no",
            "coronary_artery_disease": "no",
            "peripheral_artery_disease": "no",
        }),
    );
    assert_eq!(label(&r), "Oral Anticoagulation");
    assert_eq!(r.stage, "Oral Anticoagulation");
}

#[test]
fn chads_65_vascular_disease_only() {
    let r = calc(
        "chads_65",
        json!({
            "age_65_or_older": "no",
            "congestive_heart_failure": "no",
            "hypertension": "no",
            "diabetes_mellitus": "no",
            "stroke_tia_history": "no",
            "coronary_artery_disease": "yes",
            "peripheral_artery_disease": "no",
        }),
    );
    assert_eq!(label(&r), "Antiplatelet Therapy");
    assert_eq!(r.stage, "Antiplatelet Therapy");
}

#[test]
fn chads_65_no_factors() {
    let r = calc(
        "chads_65",
        json!({
            "age_65_or_older": "no",
            "congestive_heart_failure": "no",
            "hypertension": "no",
            "diabetes_mellitus": "no",
            "stroke_tia_history": "no",
            "coronary_artery_disease": "no",
            "peripheral_artery_disease": "no",
        }),
    );
    assert_eq!(label(&r), "No Antithrombotic Therapy");
    assert_eq!(r.stage, "No Antithrombotic Therapy");
}

#[test]
fn crusade_example() {
    let r = calc(
        "crusade_bleeding_risk",
        json!({
            "baseline_hematocrit": 35.2,
            "creatinine_clearance": 65.8,
            "heart_rate": 88,
            "patient_sex": "female",
            "signs_chf": "no",
            "diabetes_mellitus": "yes",
            "prior_vascular_disease": "no",
            "systolic_blood_pressure": 142,
        }),
    );
    assert_close(number(&r), 38.0, 1e-6);
    assert_eq!(r.stage, "Moderate Risk");
}

#[test]
fn crusade_very_high() {
    let r = calc(
        "crusade_bleeding_risk",
        json!({
            "baseline_hematocrit": 28,
            "creatinine_clearance": 12,
            "heart_rate": 125,
            "patient_sex": "female",
            "signs_chf": "yes",
            "diabetes_mellitus": "yes",
            "prior_vascular_disease": "yes",
            "systolic_blood_pressure": 85,
        }),
    );
    assert_close(number(&r), 96.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn ehmrg_low_risk() {
    let r = calc(
        "emergency_heart_failure_mortality_risk_grade_ehmrg",
        json!({
            "age": 60,
            "ems_transport": "no",
            "systolic_bp": 150,
            "heart_rate": 80,
            "oxygen_saturation": 96,
            "creatinine": 1.0,
            "potassium": 4.2,
            "troponin_elevated": "no",
            "active_cancer": "no",
            "metolazone_use": "no",
        }),
    );
    assert_close(number(&r), -102.0, 1e-6);
    assert_eq!(r.stage, "Risk Group 1 (Very Low)");
}

#[test]
fn ehmrg_very_high_risk() {
    let r = calc(
        "emergency_heart_failure_mortality_risk_grade_ehmrg",
        json!({
            "age": 85,
            "ems_transport": "yes",
            "systolic_bp": 95,
            "heart_rate": 115,
            "oxygen_saturation": 88,
            "creatinine": 2.5,
            "potassium": 5.2,
            "troponin_elevated": "yes",
            "active_cancer": "yes",
            "metolazone_use": "yes",
        }),
    );
    assert_close(number(&r), 331.0, 1e-6);
    assert_eq!(r.stage, "Risk Group 5b (Highest)");
}

#[test]
fn ehmrg_rejects_saturation_above_100() {
    rejects(
        "emergency_heart_failure_mortality_risk_grade_ehmrg",
        json!({
            "age": 60,
            "ems_transport": "no",
            "systolic_bp": 150,
            "heart_rate": 80,
            "oxygen_saturation": 101,
            "creatinine": 1.0,
            "potassium": 4.2,
            "troponin_elevated": "no",
            "active_cancer": "no",
            "metolazone_use": "no",
        }),
    );
}

#[test]
fn euroscore_ii_example() {
    let r = calc(
        "euroscore_ii",
        json!({
            "age_years": 65,
            "sex": "male",
            "insulin_dependent_diabetes": "no",
            "chronic_pulmonary_dysfunction": "no",
            "mobility_dysfunction": "no",
            "creatinine_clearance": "greater_than_85",
            "critical_preoperative_state": "no",
            "nyha_class": "class_2",
            "ccs_class_4": "no",
            "extracardiac_arteriopathy": "no",
            "previous_cardiac_surgery": "no",
            "active_endocarditis": "no",
            "left_ventricular_function": "good_51_or_more",
            "recent_mi": "no",
            "pulmonary_hypertension": "no",
            "urgency": "elective",
            "weight_of_intervention": "single_non_cabg",
            "surgery_on_thoracic_aorta": "no",
        }),
    );
    assert_close(number(&r), 0.62, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn euroscore_ii_emergency_redo() {
    let r = calc(
        "euroscore_ii",
        json!({
            "age_years": 78,
            "sex": "male",
            "insulin_dependent_diabetes": "no",
            "chronic_pulmonary_dysfunction": "no",
            "mobility_dysfunction": "no",
            "creatinine_clearance": "greater_than_85",
            "critical_preoperative_state": "yes",
            "nyha_class": "class_4",
            "ccs_class_4": "no",
            "extracardiac_arteriopathy": "no",
            "previous_cardiac_surgery": "yes",
            "active_endocarditis": "no",
            "left_ventricular_function": "poor_21_to_30",
            "recent_mi": "no",
            "pulmonary_hypertension": "no",
            "urgency": "emergency",
            "weight_of_intervention": "single_non_cabg",
            "surgery_on_thoracic_aorta": "no",
        }),
    );
    assert_close(number(&r), 36.96, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn framingham_example() {
    let r = calc(
        "framingham_risk_score",
        json!({
            "age": 55,
            "sex": "male",
            "total_cholesterol": 220.0,
            "hdl_cholesterol": 45.0,
            "systolic_bp": 140,
            "bp_treatment": "yes",
            "smoking": "no",
        }),
    );
    assert_close(number(&r), 30.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn framingham_low_risk_woman() {
    let r = calc(
        "framingham_risk_score",
        json!({
            "age": 45,
            "sex": "female",
            "total_cholesterol": 180,
            "hdl_cholesterol": 65,
            "systolic_bp": 115,
            "bp_treatment": "no",
            "smoking": "no",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn garfield_af_example() {
    let r = calc(
        "garfield_af",
        json!({
            "age": 72,
            "weight": 80.5,
            "race": "other",
            "sex": "male",
            "pulse": 78,
            "diastolic_bp": 85,
            "history_of_bleeding": "no",
            "heart_failure": "yes",
            "history_of_stroke": "no",
            "chronic_kidney_disease": "yes",
            "vascular_disease": "yes",
            "diabetes_mellitus": "yes",
            "current_smoking": "no",
            "dementia": "no",
            "antiplatelet_use": "yes",
            "carotid_disease": "no",
        }),
    );
    assert_close(number(&r), 26.91, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn grace_example() {
    let r = calc(
        "grace_acs_risk",
        json!({
            "age": 65,
            "heart_rate": 85,
            "systolic_bp": 130,
            "creatinine": 1.2,
            "killip_class": "class_1",
            "cardiac_arrest": "no",
            "st_deviation": "yes",
            "elevated_biomarkers": "yes",
        }),
    );
    assert_close(number(&r), 157.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn grace_low_risk() {
    let r = calc(
        "grace_acs_risk",
        json!({
            "age": 45,
            "heart_rate": 70,
            "systolic_bp": 150,
            "creatinine": 0.9,
            "killip_class": "class_1",
            "cardiac_arrest": "no",
            "st_deviation": "no",
            "elevated_biomarkers": "no",
        }),
    );
    assert_close(number(&r), 52.0, 1e-6);
    assert_eq!(r.stage, "Very Low Risk");
}

#[test]
fn gwtg_example() {
    let r = calc(
        "gwtg_heart_failure_risk_score",
        json!({
            "age": 72,
            "systolic_bp": 110,
            "bun": 35,
            "heart_rate": 95,
            "sodium": 138,
            "copd": "no",
            "black_race": "no",
        }),
    );
    assert_close(number(&r), 3.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn gwtg_high_risk() {
    let r = calc(
        "gwtg_heart_failure_risk_score",
        json!({
            "age": 88,
            "systolic_bp": 85,
            "bun": 80,
            "heart_rate": 120,
            "sodium": 128,
            "copd": "yes",
            "black_race": "no",
        }),
    );
    assert_close(number(&r), 55.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn ie_mortality_low() {
    let r = calc(
        "ie_mortality_risk_score",
        json!({
            "age_category": "45_or_under",
            "history_of_dialysis": "no",
            "nosocomial_ie": "no",
            "prosthetic_ie": "no",
            "symptoms_over_1_month": "no",
            "staphylococcus_aureus": "no",
            "viridans_group_streptococci": "yes",
            "aortic_vegetation": "no",
            "mitral_vegetation": "yes",
            "nyha_class_3_or_4_hf": "no",
            "stroke": "no",
            "paravalvular_complication": "no",
            "persistent_bacteremia": "no",
            "surgical_treatment": "yes",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn ie_mortality_high() {
    let r = calc(
        "ie_mortality_risk_score",
        json!({
            "age_category": "over_70",
            "history_of_dialysis": "yes",
            "nosocomial_ie": "yes",
            "prosthetic_ie": "yes",
            "symptoms_over_1_month": "no",
            "staphylococcus_aureus": "yes",
            "viridans_group_streptococci": "no",
            "aortic_vegetation": "yes",
            "mitral_vegetation": "no",
            "nyha_class_3_or_4_hf": "yes",
            "stroke": "yes",
            "paravalvular_complication": "yes",
            "persistent_bacteremia": "yes",
            "surgical_treatment": "no",
        }),
    );
    assert_close(number(&r), 100.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn ldl_example() {
    let r = calc(
        "ldl_calculated",
        json!({
            "total_cholesterol": 220.0,
            "hdl_cholesterol": 45.0,
            "triglycerides": 180.0,
        }),
    );
    assert_close(number(&r), 139.0, 1e-6);
    assert_eq!(r.stage, "Borderline High");
}

#[test]
fn ldl_optimal() {
    let r = calc(
        "ldl_calculated",
        json!({
            "total_cholesterol": 160,
            "hdl_cholesterol": 60,
            "triglycerides": 100,
        }),
    );
    assert_close(number(&r), 80.0, 1e-6);
    assert_eq!(r.stage, "Optimal");
}

#[test]
fn ldl_high_triglycerides_still_computes() {
    let r = calc(
        "ldl_calculated",
        json!({
            "total_cholesterol": 220,
            "hdl_cholesterol": 45,
            "triglycerides": 450,
        }),
    );
    assert_close(number(&r), 85.0, 1e-6);
    assert_eq!(r.stage, "Optimal");
}

#[test]
fn maggic_moderate() {
    let r = calc(
        "maggic_risk_calculator",
        json!({
            "age": 68,
            "gender": "male",
            "ejection_fraction": 30,
            "nyha_class": "III",
            "creatinine": 1.4,
            "systolic_bp": 115,
            "bmi": 26.5,
            "diabetes": "yes",
            "copd": "no",
            "current_smoker": "no",
            "hf_duration_over_18_months": "yes",
            "beta_blocker": "yes",
            "ace_arb": "yes",
        }),
    );
    assert_close(number(&r), 21.0, 1e-6);
    assert_eq!(r.stage, "Intermediate Risk");
}

#[test]
fn maggic_young_well_treated() {
    let r = calc(
        "maggic_risk_calculator",
        json!({
            "age": 45,
            "gender": "female",
            "ejection_fraction": 45,
            "nyha_class": "I",
            "creatinine": 0.9,
            "systolic_bp": 130,
            "bmi": 28,
            "diabetes": "no",
            "copd": "no",
            "current_smoker": "no",
            "hf_duration_over_18_months": "no",
            "beta_blocker": "yes",
            "ace_arb": "yes",
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn score2_moderate_region() {
    let r = calc(
        "score2",
        json!({
            "sex": "male",
            "age": 55,
            "smoking": "current",
            "systolic_bp": 145,
            "total_cholesterol": 6.2,
            "hdl_cholesterol": 1.1,
            "risk_region": "moderate",
        }),
    );
    assert_close(number(&r), 13.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn score2_low_risk_woman() {
    let r = calc(
        "score2",
        json!({
            "sex": "female",
            "age": 45,
            "smoking": "other",
            "systolic_bp": 120,
            "total_cholesterol": 5.0,
            "hdl_cholesterol": 1.6,
            "risk_region": "low",
        }),
    );
    assert_close(number(&r), 0.4, 1e-6);
    assert_eq!(r.stage, "Low to Moderate Risk");
}

#[test]
fn score2_rejects_age_outside_40_69() {
    rejects(
        "score2",
        json!({
            "sex": "female",
            "age": 72,
            "smoking": "other",
            "systolic_bp": 120,
            "total_cholesterol": 5.0,
            "hdl_cholesterol": 1.6,
            "risk_region": "low",
        }),
    );
}

#[test]
fn adhere_low_bun_normal_pressure() {
    let r = calc(
        "adhere_algorithm",
        json!({"bun": 30, "systolic_bp": 130, "creatinine": 1.5}),
    );
    assert_close(number(&r), 2.1, 1e-9);
    assert_eq!(r.stage, "Low Risk");
    assert_eq!(r.unit, "%");
}

#[test]
fn adhere_creatinine_only_splits_the_high_bun_low_pressure_branch() {
    let r = calc(
        "adhere_algorithm",
        json!({"bun": 50, "systolic_bp": 100, "creatinine": 2.75}),
    );
    assert_close(number(&r), 21.9, 1e-9);
    assert_eq!(r.stage, "Very High Risk");

    let r = calc(
        "adhere_algorithm",
        json!({"bun": 50, "systolic_bp": 100, "creatinine": 2.7}),
    );
    assert_close(number(&r), 12.4, 1e-9);
    assert_eq!(r.stage, "High Risk");

    let r = calc(
        "adhere_algorithm",
        json!({"bun": 50, "systolic_bp": 130, "creatinine": 4.0}),
    );
    assert_close(number(&r), 6.4, 1e-9);
    assert_eq!(r.extra("risk_path").unwrap(), "BUN ≥43 mg/dL and SBP ≥115 mmHg");
}

#[test]
fn adhere_boundaries() {
    let r = calc(
        "adhere_algorithm",
        json!({"bun": 42.9, "systolic_bp": 114.9, "creatinine": 1.0}),
    );
    assert_close(number(&r), 5.5, 1e-9);
    assert_eq!(r.stage, "Intermediate Risk");
}

#[test]
fn adhere_rejects_missing_creatinine() {
    rejects("adhere_algorithm", json!({"bun": 30, "systolic_bp": 130}));
}
