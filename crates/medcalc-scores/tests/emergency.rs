mod common;

use common::{assert_close, calc, label, number, rejects};
use serde_json::{json, Value};

#[test]
fn apache_ii_moderate_illness() {
    let r = calc(
        "apache_ii_score",
        json!({
            "age": 67,
            "temperature": 38.9,
            "mean_arterial_pressure": 65,
            "ph": 7.3,
            "heart_rate": 125,
            "respiratory_rate": 28,
            "sodium": 132,
            "potassium": 3.2,
            "creatinine": 2.1,
            "acute_renal_failure": "yes",
            "hematocrit": 28,
            "white_blood_cell_count": 18.5,
            "glasgow_coma_scale": 12,
            "fio2": 0.4,
            "pao2": 75,
            "chronic_health_status": "present",
            "admission_type": "nonoperative",
        }),
    );
    assert_close(number(&r), 31.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn apache_ii_healthy_young() {
    let r = calc(
        "apache_ii_score",
        json!({
            "age": 30,
            "temperature": 37.0,
            "mean_arterial_pressure": 90,
            "ph": 7.4,
            "heart_rate": 80,
            "respiratory_rate": 14,
            "sodium": 140,
            "potassium": 4.0,
            "creatinine": 1.0,
            "acute_renal_failure": "no",
            "hematocrit": 42,
            "white_blood_cell_count": 8,
            "glasgow_coma_scale": 15,
            "fio2": 0.21,
            "pao2": 95,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn apache_ii_high_fio2_uses_gradient() {
    let r = calc(
        "apache_ii_score",
        json!({
            "age": 50,
            "temperature": 37.0,
            "mean_arterial_pressure": 90,
            "ph": 7.4,
            "heart_rate": 80,
            "respiratory_rate": 14,
            "sodium": 140,
            "potassium": 4.0,
            "creatinine": 1.0,
            "acute_renal_failure": "no",
            "hematocrit": 42,
            "white_blood_cell_count": 8,
            "glasgow_coma_scale": 15,
            "fio2": 0.6,
            "aado2": 400,
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn apache_ii_rejects_gcs_below_three() {
    rejects(
        "apache_ii_score",
        json!({
            "age": 30,
            "temperature": 37.0,
            "mean_arterial_pressure": 90,
            "ph": 7.4,
            "heart_rate": 80,
            "respiratory_rate": 14,
            "sodium": 140,
            "potassium": 4.0,
            "creatinine": 1.0,
            "acute_renal_failure": "no",
            "hematocrit": 42,
            "white_blood_cell_count": 8,
            "glasgow_coma_scale": 2,
            "fio2": 0.21,
            "pao2": 95,
        }),
    );
}

#[test]
fn basic_statistics_diagnostic_rates() {
    let r = calc(
        "basic_statistics_calc",
        json!({
            "calculation_type": "diagnostic_test",
            "input_method": "rates",
            "prevalence": 10.0,
            "sensitivity": 90.0,
            "specificity": 95.0,
            "true_positive": 45,
            "false_positive": 5,
            "false_negative": 5,
            "true_negative": 95,
            "experimental_with_outcome": 20,
            "experimental_without_outcome": 80,
            "control_with_outcome": 40,
            "control_without_outcome": 60,
        }),
    );
    assert_close(number(&r), 66.67, 1e-6);
}

#[test]
fn basic_statistics_treatment_counts() {
    let r = calc(
        "basic_statistics_calc",
        json!({
            "calculation_type": "treatment",
            "input_method": "counts",
            "prevalence": 10.0,
            "sensitivity": 90.0,
            "specificity": 95.0,
            "true_positive": 45,
            "false_positive": 5,
            "false_negative": 5,
            "true_negative": 95,
            "experimental_with_outcome": 20,
            "experimental_without_outcome": 80,
            "control_with_outcome": 40,
            "control_without_outcome": 60,
        }),
    );
    assert_close(number(&r), 0.5, 1e-6);
}

#[test]
fn burch_wartofsky_example() {
    let r = calc(
        "burch_wartofsky_point_scale",
        json!({
            "temperature": "101_102",
            "cns_effects": "mild_agitation",
            "gi_hepatic_dysfunction": "moderate_diarrhea_nausea_vomiting_abdominal_pain",
            "cardiovascular_dysfunction": "absent",
            "tachycardia": "120_129",
            "atrial_fibrillation": "absent",
            "precipitant_history": "present",
        }),
    );
    assert_close(number(&r), 60.0, 1e-6);
    assert_eq!(r.stage, "Highly_Suggestive_TS");
}

#[test]
fn burch_wartofsky_unlikely() {
    let r = calc(
        "burch_wartofsky_point_scale",
        json!({
            "temperature": "99_100",
            "cns_effects": "absent",
            "gi_hepatic_dysfunction": "absent",
            "cardiovascular_dysfunction": "absent",
            "tachycardia": "90_109",
            "atrial_fibrillation": "absent",
            "precipitant_history": "absent",
        }),
    );
    assert_close(number(&r), 10.0, 1e-6);
    assert_eq!(r.stage, "Unlikely_TS");
}

#[test]
fn cam_icu_negative_without_inattention() {
    let r = calc(
        "cam_icu",
        json!({
            "rass_score": 0,
            "acute_onset_fluctuating": "yes",
            "attention_errors": 1,
            "thinking_errors": 0,
        }),
    );
    assert_eq!(r.stage, "CAM-ICU Negative");
}

#[test]
fn cam_icu_positive() {
    let r = calc(
        "cam_icu",
        json!({
            "rass_score": -1,
            "acute_onset_fluctuating": "yes",
            "attention_errors": 4,
            "thinking_errors": 0,
        }),
    );
    assert_eq!(r.stage, "CAM-ICU Positive");
}

#[test]
fn cam_icu_deep_sedation_is_negative() {
    let r = calc(
        "cam_icu",
        json!({
            "rass_score": -4,
            "acute_onset_fluctuating": "yes",
            "attention_errors": 1,
            "thinking_errors": 0,
        }),
    );
    assert_eq!(r.stage, "CAM-ICU Negative");
}

#[test]
fn caprini_example() {
    let r = calc(
        "caprini_score_2005",
        json!({
            "age_category": "41_to_60",
            "minor_surgery": "no",
            "major_surgery": "yes",
            "hip_knee_arthroplasty": "no",
            "hip_pelvis_leg_fracture": "no",
            "acute_spinal_cord_injury": "no",
            "varicose_veins": "no",
            "current_swollen_legs": "no",
            "central_venous_access": "no",
            "inflammatory_bowel_disease": "no",
            "bmi_over_25": "yes",
            "acute_myocardial_infarction": "no",
            "congestive_heart_failure": "no",
            "sepsis": "no",
            "serious_lung_disease": "no",
            "abnormal_pulmonary_function": "no",
            "medical_patient_bed_rest": "no",
            "cast_or_brace": "no",
            "history_of_vte": "no",
            "family_history_thrombosis": "no",
            "factor_v_leiden": "no",
            "prothrombin_20210a": "no",
            "lupus_anticoagulant": "no",
            "anticardiolipin_antibodies": "no",
            "heparin_induced_thrombocytopenia": "no",
            "other_congenital_thrombophilia": "no",
            "malignancy": "no",
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Moderate Risk");
}

#[test]
fn caprini_highest_risk() {
    let r = calc(
        "caprini_score_2005",
        json!({
            "age_category": "75_or_older",
            "minor_surgery": "no",
            "major_surgery": "yes",
            "hip_knee_arthroplasty": "yes",
            "hip_pelvis_leg_fracture": "no",
            "acute_spinal_cord_injury": "no",
            "varicose_veins": "no",
            "current_swollen_legs": "no",
            "central_venous_access": "no",
            "inflammatory_bowel_disease": "no",
            "bmi_over_25": "yes",
            "acute_myocardial_infarction": "no",
            "congestive_heart_failure": "no",
            "sepsis": "no",
            "serious_lung_disease": "no",
            "abnormal_pulmonary_function": "no",
            "medical_patient_bed_rest": "no",
            "cast_or_brace": "no",
            "history_of_vte": "yes",
            "family_history_thrombosis": "no",
            "factor_v_leiden": "no",
            "prothrombin_20210a": "no",
            "lupus_anticoagulant": "no",
            "anticardiolipin_antibodies": "no",
            "heparin_induced_thrombocytopenia": "no",
            "other_congenital_thrombophilia": "no",
            "malignancy": "no",
        }),
    );
    assert_close(number(&r), 14.0, 1e-6);
    assert_eq!(r.stage, "Highest Risk");
}

#[test]
fn cedocs_busy_department() {
    let r = calc(
        "cedocs_score",
        json!({
            "critical_care_patients": 4,
            "longest_wait_time_minutes": 180,
            "waiting_room_patients": 20,
            "total_ed_patients": 60,
            "ed_beds": 40,
            "annual_ed_visits": 60000,
        }),
    );
    assert_close(number(&r), 318.1, 1e-6);
    assert_eq!(r.stage, "Level 6+");
}

#[test]
fn cedocs_quiet_department() {
    let r = calc(
        "cedocs_score",
        json!({
            "critical_care_patients": 0,
            "longest_wait_time_minutes": 10,
            "waiting_room_patients": 1,
            "total_ed_patients": 15,
            "ed_beds": 40,
            "annual_ed_visits": 60000,
        }),
    );
    assert_close(number(&r), 26.6, 1e-6);
    assert_eq!(r.stage, "Level 2");
}

#[test]
fn chip_example() {
    let r = calc(
        "chip_prediction_rule",
        json!({
            "pedestrian_cyclist_vehicle": "no",
            "ejected_from_vehicle": "no",
            "vomiting": "no",
            "amnesia_4_hours_or_more": "no",
            "clinical_skull_fracture": "no",
            "gcs_less_than_15": "no",
            "gcs_deterioration_2_points": "no",
            "anticoagulant_use": "no",
            "post_traumatic_seizure": "no",
            "age_60_or_older": "no",
            "fall_from_elevation": "yes",
            "anterograde_amnesia": "no",
            "amnesia_2_to_4_hours": "no",
            "skull_contusion": "yes",
            "neurologic_deficit": "no",
            "loss_of_consciousness": "no",
            "gcs_deterioration_1_point": "no",
            "age_40_to_60": "no",
        }),
    );
    assert_eq!(label(&r), "CT Recommended");
    assert_eq!(r.stage, "CT Recommended");
}

#[test]
fn chip_major_criterion() {
    let r = calc(
        "chip_prediction_rule",
        json!({
            "pedestrian_cyclist_vehicle": "no",
            "ejected_from_vehicle": "no",
            "vomiting": "no",
            "amnesia_4_hours_or_more": "no",
            "clinical_skull_fracture": "no",
            "gcs_less_than_15": "no",
            "gcs_deterioration_2_points": "no",
            "anticoagulant_use": "yes",
            "post_traumatic_seizure": "no",
            "age_60_or_older": "no",
            "fall_from_elevation": "no",
            "anterograde_amnesia": "no",
            "amnesia_2_to_4_hours": "no",
            "skull_contusion": "no",
            "neurologic_deficit": "no",
            "loss_of_consciousness": "no",
            "gcs_deterioration_1_point": "no",
            "age_40_to_60": "no",
        }),
    );
    assert_eq!(label(&r), "CT Recommended");
    assert_eq!(r.stage, "CT Recommended");
}

#[test]
fn chip_no_criteria() {
    let r = calc(
        "chip_prediction_rule",
        json!({
            "pedestrian_cyclist_vehicle": "no",
            "ejected_from_vehicle": "no",
            "vomiting": "no",
            "amnesia_4_hours_or_more": "no",
            "clinical_skull_fracture": "no",
            "gcs_less_than_15": "no",
            "gcs_deterioration_2_points": "no",
            "anticoagulant_use": "no",
            "post_traumatic_seizure": "no",
            "age_60_or_older": "no",
            "fall_from_elevation": "no",
            "anterograde_amnesia": "no",
            "amnesia_2_to_4_hours": "no",
            "skull_contusion": "no",
            "neurologic_deficit": "no",
            "loss_of_consciousness": "no",
            "gcs_deterioration_1_point": "no",
            "age_40_to_60": "no",
        }),
    );
    assert_eq!(label(&r), "CT Not Indicated");
    assert_eq!(r.stage, "CT Not Indicated");
}

#[test]
fn chosen_example() {
    let r = calc(
        "chosen_covid_discharge",
        json!({
            "age": 45,
            "oxygen_saturation": 98,
            "albumin_level": 3.8,
            "respiratory_rate": 18,
        }),
    );
    assert_close(number(&r), 48.0, 1e-6);
    assert_eq!(r.stage, "Likely Suitable for Discharge");
}

#[test]
fn chosen_unsuitable() {
    let r = calc(
        "chosen_covid_discharge",
        json!({
            "age": 80,
            "oxygen_saturation": 88,
            "albumin_level": 2.5,
            "respiratory_rate": 30,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Unlikely Suitable for Discharge");
}

#[test]
fn cpss_example() {
    let r = calc(
        "cincinnati_prehospital_stroke_severity_scale",
        json!({
            "conjugate_gaze_deviation": "no",
            "level_of_consciousness_questions": "both_correct",
            "following_commands": "both_commands",
            "arm_holding_ability": "can_hold",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn cpss_severe() {
    let r = calc(
        "cincinnati_prehospital_stroke_severity_scale",
        json!({
            "conjugate_gaze_deviation": "yes",
            "level_of_consciousness_questions": "neither_correct",
            "following_commands": "neither_command",
            "arm_holding_ability": "cannot_hold",
        }),
    );
    assert_close(number(&r), 7.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn covid_inpatient_example() {
    let r = calc(
        "covid_inpatient_risk_calculator",
        json!({
            "age": 65,
            "sex": "male",
            "race": "white",
            "nursing_home_admission": "no",
            "bmi": 28.5,
            "charlson_score": 3,
            "respiratory_symptoms": "yes",
            "gastrointestinal_symptoms": "no",
            "constitutional_symptoms": "yes",
            "loss_taste_smell": "no",
            "fever": "yes",
            "respiratory_rate": 22,
            "pulse": 95,
            "hemoglobin": 12.8,
            "white_blood_cell_count": 8.5,
            "absolute_lymphocyte_count": 0.8,
            "albumin": 3.2,
            "creatinine": 1.1,
            "alt": 45,
            "d_dimer": 2.5,
            "c_reactive_protein": 125,
            "ferritin": 850,
            "troponin_elevated": "no",
        }),
    );
    assert_close(number(&r), 95.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn cpot_example() {
    let r = calc(
        "cpot_pain_observation",
        json!({
            "facial_expression": "tense",
            "body_movements": "protection",
            "muscle_tension": "tense_rigid",
            "patient_status": "intubated",
            "ventilator_compliance": "coughing_tolerating",
            "vocalization": null,
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Unacceptable Pain");
}

#[test]
fn cpot_relaxed() {
    let r = calc(
        "cpot_pain_observation",
        json!({
            "facial_expression": "relaxed_neutral",
            "body_movements": "absence_of_movements",
            "muscle_tension": "relaxed",
            "patient_status": "intubated",
            "ventilator_compliance": "tolerating",
            "vocalization": null,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Minimal to No Pain");
}

#[test]
fn danger_assessment_example() {
    let r = calc(
        "danger_assessment_tool",
        json!({
            "physical_violence_increased": "no",
            "owns_gun": "no",
            "threatened_weapon": "no",
            "threatened_kill_you": "no",
            "avoided_killing": "no",
            "beaten_pregnant": "not_applicable",
            "jealous_controlling": "no",
            "controls_activities": "no",
            "controls_daily_activities": "no",
            "violent_others": "not_applicable",
            "violent_toward_others": "no",
            "threatened_suicide": "no",
            "threatened_kill_children": "not_applicable",
            "child_not_his": "no",
            "employment_problems": "no",
            "follows_spies": "no",
            "forced_sex": "no",
            "tried_to_strangle": "no",
            "drugs_alcohol_problems": "no",
            "stepchild_present": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Variable Danger");
}

#[test]
fn danger_assessment_extreme() {
    let r = calc(
        "danger_assessment_tool",
        json!({
            "physical_violence_increased": "yes",
            "owns_gun": "yes",
            "threatened_weapon": "yes",
            "threatened_kill_you": "yes",
            "avoided_killing": "yes",
            "beaten_pregnant": "not_applicable",
            "jealous_controlling": "yes",
            "controls_activities": "no",
            "controls_daily_activities": "no",
            "violent_others": "not_applicable",
            "violent_toward_others": "no",
            "threatened_suicide": "no",
            "threatened_kill_children": "not_applicable",
            "child_not_his": "no",
            "employment_problems": "no",
            "follows_spies": "no",
            "forced_sex": "yes",
            "tried_to_strangle": "yes",
            "drugs_alcohol_problems": "no",
            "stepchild_present": "no",
        }),
    );
    assert_close(number(&r), 12.5, 1e-6);
    assert_eq!(r.stage, "Increased Danger");
}

#[test]
fn go_far_example() {
    let r = calc(
        "go_far_score",
        json!({
            "age_category": "70_to_74",
            "neurologically_intact": "yes",
            "major_trauma": "no",
            "acute_stroke": "no",
            "metastatic_hematologic_cancer": "no",
            "septicemia": "no",
            "medical_noncardiac_diagnosis": "yes",
            "hepatic_insufficiency": "no",
            "skilled_nursing_facility": "no",
            "hypotension_hypoperfusion": "no",
            "renal_insufficiency": "no",
            "respiratory_insufficiency": "no",
            "pneumonia": "no",
        }),
    );
    assert_close(number(&r), -6.0, 1e-6);
    assert_eq!(r.stage, "Above Average Survival");
}

#[test]
fn go_far_very_low_survival() {
    let r = calc(
        "go_far_score",
        json!({
            "age_category": "85_or_over",
            "neurologically_intact": "no",
            "major_trauma": "no",
            "acute_stroke": "no",
            "metastatic_hematologic_cancer": "yes",
            "septicemia": "yes",
            "medical_noncardiac_diagnosis": "yes",
            "hepatic_insufficiency": "no",
            "skilled_nursing_facility": "no",
            "hypotension_hypoperfusion": "yes",
            "renal_insufficiency": "yes",
            "respiratory_insufficiency": "no",
            "pneumonia": "no",
        }),
    );
    assert_close(number(&r), 41.0, 1e-6);
    assert_eq!(r.stage, "Very Low Survival");
}

#[test]
fn gupta_mica_example() {
    let r = calc(
        "gupta_mica",
        json!({
            "age": 65,
            "functional_status": "independent",
            "asa_class": "2",
            "creatinine_status": "normal",
            "surgery_type": "hernia",
        }),
    );
    assert_close(number(&r), 0.07, 1e-6);
    assert_eq!(r.stage, "Very Low Risk");
}

#[test]
fn gupta_mica_dependent_high_asa() {
    let r = calc(
        "gupta_mica",
        json!({
            "age": 82,
            "functional_status": "totally_dependent",
            "asa_class": "4",
            "creatinine_status": "elevated",
            "surgery_type": "aortic",
        }),
    );
    assert_close(number(&r), 21.08, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn gupta_pneumonia_example() {
    let r = calc(
        "gupta_postoperative_pneumonia_risk",
        json!({
            "age": 68,
            "copd": "no",
            "functional_status": "independent",
            "asa_class": "2",
            "sepsis_status": "none",
            "smoking": "no",
            "procedure_type": "hernia",
        }),
    );
    assert_close(number(&r), 0.49, 1e-6);
    assert_eq!(r.stage, "Very Low Risk");
}

#[test]
fn gupta_respiratory_failure_example() {
    let r = calc(
        "gupta_postoperative_respiratory_failure_risk",
        json!({
            "functional_status": "independent",
            "asa_class": "2",
            "sepsis_status": "none",
            "emergency_case": "no",
            "procedure_type": "hernia",
        }),
    );
    assert_close(number(&r), 0.61, 1e-6);
    assert_eq!(r.stage, "Very Low Risk");
}

#[test]
fn gupta_respiratory_failure_emergency_septic_shock() {
    let r = calc(
        "gupta_postoperative_respiratory_failure_risk",
        json!({
            "functional_status": "totally_dependent",
            "asa_class": "4",
            "sepsis_status": "septic_shock",
            "emergency_case": "yes",
            "procedure_type": "hernia",
        }),
    );
    assert_close(number(&r), 69.26, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn kings_college_example() {
    let r = calc(
        "kings_college_criteria_acetaminophen",
        json!({
            "arterial_ph": 7.25,
            "inr": 4.2,
            "creatinine": 2.8,
            "hepatic_encephalopathy_grade": "grade_ii",
            "lactate": 4.2,
            "phosphate": 4.8,
        }),
    );
    assert_eq!(r.stage, "Meets Criteria");
}

#[test]
fn kings_college_not_met() {
    let r = calc(
        "kings_college_criteria_acetaminophen",
        json!({
            "arterial_ph": 7.35,
            "inr": 2.0,
            "creatinine": 2.8,
            "hepatic_encephalopathy_grade": "grade_ii",
            "lactate": 2.0,
            "phosphate": 4.8,
        }),
    );
    assert_eq!(r.stage, "Does Not Meet Criteria");
}

#[test]
fn lips_example() {
    let r = calc(
        "lung_injury_prediction_score",
        json!({
            "shock": "no",
            "aspiration": "no",
            "sepsis": "yes",
            "pneumonia": "yes",
            "pancreatitis": "no",
            "high_risk_surgery": "none",
            "high_risk_trauma": "none",
            "alcohol_abuse": "no",
            "obesity": "no",
            "hypoalbuminemia": "yes",
            "chemotherapy": "no",
            "fio2_over_35": "no",
            "tachypnea": "yes",
            "spo2_under_95": "yes",
            "acidosis": "no",
            "diabetes_with_sepsis": "no",
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn lips_low_risk() {
    let r = calc(
        "lung_injury_prediction_score",
        json!({
            "shock": "no",
            "aspiration": "no",
            "sepsis": "no",
            "pneumonia": "no",
            "pancreatitis": "no",
            "high_risk_surgery": "none",
            "high_risk_trauma": "none",
            "alcohol_abuse": "no",
            "obesity": "no",
            "hypoalbuminemia": "no",
            "chemotherapy": "no",
            "fio2_over_35": "no",
            "tachypnea": "no",
            "spo2_under_95": "no",
            "acidosis": "no",
            "diabetes_with_sepsis": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn mess_example() {
    let r = calc(
        "mangled_extremity_severity_score",
        json!({
            "limb_ischemia": "reduced_pulse_normal_perfusion",
            "ischemia_duration_hours": 4.0,
            "patient_age": 35,
            "shock_status": "no_shock_sbp_greater_than_90",
            "injury_mechanism": "medium_energy",
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Limb Salvage Likely");
}

#[test]
fn mess_amputation_range() {
    let r = calc(
        "mangled_extremity_severity_score",
        json!({
            "limb_ischemia": "cool_paralyzed_numb_insensate",
            "ischemia_duration_hours": 8,
            "patient_age": 60,
            "shock_status": "persistent_hypotension",
            "injury_mechanism": "very_high_energy",
        }),
    );
    assert_close(number(&r), 14.0, 1e-6);
    assert_eq!(r.stage, "Amputation Likely");
}

#[test]
fn mrc_icu_example() {
    let r = calc(
        "mrc_icu_score",
        json!({
            "aminoglycosides": 1,
            "amphotericin_b": "no",
            "antiarrhythmics": 1,
            "anticoagulants": 1,
            "anticonvulsants": 0,
            "argatroban": "no",
            "azole_antifungals": 0,
            "blood_products": 2,
            "chemotherapy": 0,
            "clozapine": "no",
            "digoxin": "no",
            "vancomycin": "yes",
            "continuous_infusion_crystalloids": "yes",
            "vasopressors_inotropes": 1,
            "continuous_opioid_infusions": 1,
            "continuous_sedative_infusions": 1,
            "parenteral_nutrition": "no",
            "insulin_infusion": "yes",
            "prn_opioids": "yes",
            "other_high_complexity_meds": 3,
        }),
    );
    assert_close(number(&r), 26.0, 1e-6);
    assert_eq!(r.stage, "High Complexity");
}

#[test]
fn psi_port_example() {
    let r = calc(
        "psi_port_score",
        json!({
            "age": 65,
            "sex": "female",
            "nursing_home_resident": "no",
            "neoplastic_disease": "no",
            "liver_disease": "no",
            "congestive_heart_failure": "no",
            "cerebrovascular_disease": "no",
            "renal_disease": "no",
            "altered_mental_status": "no",
            "respiratory_rate": 22,
            "systolic_blood_pressure": 120,
            "temperature": 38.5,
            "pulse": 88,
            "ph": 7.42,
            "bun": 15.0,
            "sodium": 140.0,
            "glucose": 95.0,
            "hematocrit": 42.0,
            "pao2": 85.0,
            "pleural_effusion": "no",
        }),
    );
    assert_close(number(&r), 55.0, 1e-6);
    assert_eq!(r.stage, "Class II (Low Risk)");
}

#[test]
fn psi_port_class_v() {
    let r = calc(
        "psi_port_score",
        json!({
            "age": 85,
            "sex": "male",
            "nursing_home_resident": "yes",
            "neoplastic_disease": "yes",
            "liver_disease": "no",
            "congestive_heart_failure": "no",
            "cerebrovascular_disease": "no",
            "renal_disease": "no",
            "altered_mental_status": "yes",
            "respiratory_rate": 32,
            "systolic_blood_pressure": 85,
            "temperature": 38.5,
            "pulse": 88,
            "ph": 7.3,
            "bun": 40,
            "sodium": 140.0,
            "glucose": 95.0,
            "hematocrit": 42.0,
            "pao2": 85.0,
            "pleural_effusion": "no",
        }),
    );
    assert_close(number(&r), 235.0, 1e-6);
    assert_eq!(r.stage, "Class V (High Risk)");
}

#[test]
fn psi_port_young_without_risk_is_class_i() {
    let r = calc(
        "psi_port_score",
        json!({
            "age": 35,
            "sex": "female",
            "nursing_home_resident": "no",
            "neoplastic_disease": "no",
            "liver_disease": "no",
            "congestive_heart_failure": "no",
            "cerebrovascular_disease": "no",
            "renal_disease": "no",
            "altered_mental_status": "no",
            "respiratory_rate": 16,
            "systolic_blood_pressure": 120,
            "temperature": 37.0,
            "pulse": 88,
            "ph": 7.42,
            "bun": 15.0,
            "sodium": 140.0,
            "glucose": 95.0,
            "hematocrit": 42.0,
            "pao2": 85.0,
            "pleural_effusion": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Class I (Low Risk)");
}

#[test]
fn rems_example() {
    let r = calc(
        "rems_score",
        json!({
            "age": 67,
            "body_temperature": 37.2,
            "mean_arterial_pressure": 85,
            "heart_rate": 95,
            "respiratory_rate": 18,
            "oxygen_saturation": 96,
            "glasgow_coma_scale": 14,
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn rems_high_risk() {
    let r = calc(
        "rems_score",
        json!({
            "age": 78,
            "body_temperature": 37.2,
            "mean_arterial_pressure": 45,
            "heart_rate": 150,
            "respiratory_rate": 38,
            "oxygen_saturation": 80,
            "glasgow_coma_scale": 6,
        }),
    );
    assert_close(number(&r), 20.0, 1e-6);
    assert_eq!(r.stage, "Very High Risk");
}

#[test]
fn rule_of_nines_example() {
    let r = calc(
        "rule_of_nines",
        json!({
            "patient_age_group": "adult",
            "head_neck_percentage": 0.0,
            "anterior_torso_percentage": 50.0,
            "posterior_torso_percentage": 25.0,
            "right_arm_percentage": 0.0,
            "left_arm_percentage": 0.0,
            "right_leg_percentage": 0.0,
            "left_leg_percentage": 0.0,
            "genitalia_percentage": 0.0,
        }),
    );
    assert_close(number(&r), 13.5, 1e-6);
    assert_eq!(r.stage, "Moderate Burn");
}

#[test]
fn rule_of_nines_child_head() {
    let r = calc(
        "rule_of_nines",
        json!({
            "patient_age_group": "child",
            "head_neck_percentage": 100.0,
            "anterior_torso_percentage": 0.0,
            "posterior_torso_percentage": 0.0,
            "right_arm_percentage": 0.0,
            "left_arm_percentage": 0.0,
            "right_leg_percentage": 0.0,
            "left_leg_percentage": 0.0,
            "genitalia_percentage": 0.0,
        }),
    );
    assert_close(number(&r), 18.0, 1e-6);
    assert_eq!(r.stage, "Moderate Burn");
}

#[test]
fn rule_of_nines_rejects_percentage_over_100() {
    rejects(
        "rule_of_nines",
        json!({
            "patient_age_group": "adult",
            "head_neck_percentage": 0.0,
            "anterior_torso_percentage": 120.0,
            "posterior_torso_percentage": 25.0,
            "right_arm_percentage": 0.0,
            "left_arm_percentage": 0.0,
            "right_leg_percentage": 0.0,
            "left_leg_percentage": 0.0,
            "genitalia_percentage": 0.0,
        }),
    );
}

#[test]
fn utah_covid_example() {
    let r = calc(
        "utah_covid19_risk_score",
        json!({
            "age": 45,
            "diabetes_mellitus": "no",
            "obesity": "yes",
            "active_cancer": "no",
            "immunosuppressive_therapies": "no",
            "hypertension": "yes",
            "coronary_artery_disease": "no",
            "cardiac_arrhythmia": "no",
            "congestive_heart_failure": "no",
            "chronic_kidney_disease": "no",
            "chronic_pulmonary_disease": "no",
            "chronic_liver_disease": "no",
            "cerebrovascular_disease": "no",
            "chronic_neurologic_disease": "no",
            "shortness_of_breath": "no",
            "vaccination_status": "vaccinated",
        }),
    );
    assert_close(number(&r), 5.5, 1e-6);
    assert_eq!(r.stage, "Treatment Not Eligible");
}

#[test]
fn utah_covid_eligible_unvaccinated() {
    let r = calc(
        "utah_covid19_risk_score",
        json!({
            "age": 70,
            "diabetes_mellitus": "yes",
            "obesity": "yes",
            "active_cancer": "no",
            "immunosuppressive_therapies": "no",
            "hypertension": "yes",
            "coronary_artery_disease": "no",
            "cardiac_arrhythmia": "no",
            "congestive_heart_failure": "no",
            "chronic_kidney_disease": "no",
            "chronic_pulmonary_disease": "no",
            "chronic_liver_disease": "no",
            "cerebrovascular_disease": "no",
            "chronic_neurologic_disease": "no",
            "shortness_of_breath": "yes",
            "vaccination_status": "unvaccinated_not_pregnant",
        }),
    );
    assert_close(number(&r), 9.5, 1e-6);
    assert_eq!(r.stage, "Treatment Eligible");
}

#[test]
fn wast_example() {
    let r = calc(
        "woman_abuse_screening_tool",
        json!({
            "tension_arguments_relationship": "some_tension",
            "partner_jealousy_possessiveness": "no_difficulty",
            "arguments_resolution": "never",
            "arguments_feeling_bad": "never",
            "physical_violence_frequency": "never",
            "feel_frightened": "no",
            "physical_abuse_history": "no",
            "emotional_abuse_history": "no",
        }),
    );
    assert_close(number(&r), 20.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn wast_high_risk() {
    let r = calc(
        "woman_abuse_screening_tool",
        json!({
            "tension_arguments_relationship": "lots_of_tension",
            "partner_jealousy_possessiveness": "great_difficulty",
            "arguments_resolution": "often",
            "arguments_feeling_bad": "often",
            "physical_violence_frequency": "often",
            "feel_frightened": "yes",
            "physical_abuse_history": "yes",
            "emotional_abuse_history": "yes",
        }),
    );
    assert_close(number(&r), 8.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn ethanol_beer_in_adult() {
    let r = calc(
        "estimated_ethanol_concentration",
        json!({
            "alcohol_type": "ethanol",
            "amount_ingested_ml": 1000,
            "weight_kg": 70,
            "alcohol_percentage": 5,
        }),
    );
    assert_eq!(r.stage, "Moderate Intoxication");
}

#[test]
fn ethanol_methanol_default_strength() {
    let r = calc(
        "estimated_ethanol_concentration",
        json!({
            "alcohol_type": "methanol",
            "amount_ingested_ml": 60,
            "weight_kg": 70,
        }),
    );
    assert_eq!(r.stage, "Treatment Required");
}

#[test]
fn lrinec_low() {
    let r = calc(
        "lrinec_score",
        json!({
            "crp": 50,
            "wbc": 10,
            "hemoglobin": 14,
            "sodium": 138,
            "creatinine": 1.0,
            "glucose": 100,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn lrinec_high() {
    let r = calc(
        "lrinec_score",
        json!({
            "crp": 200,
            "wbc": 28,
            "hemoglobin": 10,
            "sodium": 130,
            "creatinine": 2.0,
            "glucose": 200,
        }),
    );
    assert_close(number(&r), 11.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn news_2_low() {
    let r = calc(
        "news_2",
        json!({
            "respiratory_rate": "12_to_20",
            "hypercapnic_respiratory_failure": "no",
            "oxygen_saturation": "96_or_more",
            "supplemental_oxygen": "no",
            "temperature": "36_1_to_38",
            "systolic_bp": "111_to_219",
            "heart_rate": "51_to_90",
            "consciousness": "alert",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn news_2_single_red_parameter() {
    let r = calc(
        "news_2",
        json!({
            "respiratory_rate": "25_or_more",
            "hypercapnic_respiratory_failure": "no",
            "oxygen_saturation": "96_or_more",
            "supplemental_oxygen": "no",
            "temperature": "36_1_to_38",
            "systolic_bp": "111_to_219",
            "heart_rate": "51_to_90",
            "consciousness": "alert",
        }),
    );
    assert_close(number(&r), 3.0, 1e-6);
    assert_eq!(r.stage, "Low-Medium Risk");
}

#[test]
fn news_2_high() {
    let r = calc(
        "news_2",
        json!({
            "respiratory_rate": "21_to_24",
            "hypercapnic_respiratory_failure": "no",
            "oxygen_saturation": "91_or_less",
            "supplemental_oxygen": "yes",
            "temperature": "39_1_or_more",
            "systolic_bp": "91_to_100",
            "heart_rate": "111_to_130",
            "consciousness": "altered",
        }),
    );
    assert_close(number(&r), 16.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn news_2_hypercapnic_scale() {
    let r = calc(
        "news_2",
        json!({
            "respiratory_rate": "12_to_20",
            "hypercapnic_respiratory_failure": "yes",
            "oxygen_saturation": "88_to_92",
            "supplemental_oxygen": "no",
            "temperature": "36_1_to_38",
            "systolic_bp": "111_to_219",
            "heart_rate": "51_to_90",
            "consciousness": "alert",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn wisconsin_ct_recommended() {
    let r = calc(
        "wisconsin_criteria_maxillofacial_trauma",
        json!({
            "high_energy_mechanism": "yes",
            "facial_deformity": "no",
            "malocclusion": "yes",
            "facial_numbness": "no",
            "periorbital_swelling": "yes",
            "diplopia": "no",
            "palpable_step_off": "no",
            "epistaxis": "no",
        }),
    );
    assert_eq!(label(&r), "CT indicated");
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn wisconsin_no_findings() {
    let r = calc(
        "wisconsin_criteria_maxillofacial_trauma",
        json!({
            "high_energy_mechanism": "no",
            "facial_deformity": "no",
            "malocclusion": "no",
            "facial_numbness": "no",
            "periorbital_swelling": "no",
            "diplopia": "no",
            "palpable_step_off": "no",
            "epistaxis": "no",
        }),
    );
    assert_eq!(label(&r), "CT not indicated");
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn abc_two_criteria_predict_massive_transfusion() {
    let r = calc(
        "abc_score",
        json!({
            "penetrating_mechanism": "yes",
            "systolic_bp_90_or_less": "no",
            "heart_rate_120_or_more": "no",
            "positive_fast": "yes",
        }),
    );
    assert_eq!(r.result.as_i64(), Some(2));
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn abc_single_criterion_is_low_risk() {
    let r = calc(
        "abc_score",
        json!({
            "penetrating_mechanism": "no",
            "systolic_bp_90_or_less": "yes",
            "heart_rate_120_or_more": "no",
            "positive_fast": "no",
        }),
    );
    assert_eq!(r.result.as_i64(), Some(1));
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn abc_rejects_boolean_answers() {
    rejects(
        "abc_score",
        json!({
            "penetrating_mechanism": true,
            "systolic_bp_90_or_less": "no",
            "heart_rate_120_or_more": "no",
            "positive_fast": "no",
        }),
    );
}

fn ct_head_negative() -> Value {
    json!({
        "gcs_below_15_at_2h": "no",
        "suspected_skull_fracture": "no",
        "basal_skull_fracture_signs": "no",
        "vomiting_two_or_more": "no",
        "age_65_or_older": "no",
        "amnesia_30_min_or_more": "no",
        "dangerous_mechanism": "no",
    })
}

#[test]
fn canadian_ct_head_no_criteria() {
    let r = calc("canadian_ct_head_rule", ct_head_negative());
    assert_eq!(label(&r), "CT Not Required");
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn canadian_ct_head_high_risk_takes_precedence() {
    let mut params = ct_head_negative();
    params["age_65_or_older"] = json!("yes");
    params["dangerous_mechanism"] = json!("yes");
    let r = calc("canadian_ct_head_rule", params);
    assert_eq!(label(&r), "CT Required");
    assert_eq!(r.stage, "High Risk");
    assert_eq!(r.extra("high_risk_criteria").unwrap(), &json!(["Age ≥65 years"]));
    assert_eq!(
        r.extra("medium_risk_criteria").unwrap(),
        &json!(["Dangerous mechanism of injury"])
    );
}

#[test]
fn canadian_ct_head_medium_risk() {
    let mut params = ct_head_negative();
    params["amnesia_30_min_or_more"] = json!("yes");
    let r = calc("canadian_ct_head_rule", params);
    assert_eq!(label(&r), "CT Required");
    assert_eq!(r.stage, "Medium Risk");
}

#[test]
fn ethanol_result_is_concentration_in_mg_dl() {
    let r = calc(
        "estimated_ethanol_concentration",
        json!({
            "alcohol_type": "ethanol",
            "amount_ingested_ml": 1000,
            "weight_kg": 70,
            "alcohol_percentage": 5,
        }),
    );
    assert_close(number(&r), 93.9, 1e-9);
    assert_eq!(r.unit, "mg/dL");
    assert_eq!(r.extra("concentration_mmol_l").unwrap(), 20.4);
    assert_eq!(r.extra("amount_pure_alcohol_ml").unwrap(), 50.0);
}

#[test]
fn ethanol_methanol_above_treatment_threshold() {
    let r = calc(
        "estimated_ethanol_concentration",
        json!({"alcohol_type": "methanol", "amount_ingested_ml": 60, "weight_kg": 70}),
    );
    assert_close(number(&r), 113.1, 1e-9);
    assert!(r.interpretation.contains("fomepizole"));
}

#[test]
fn ethanol_rejects_zero_weight() {
    rejects(
        "estimated_ethanol_concentration",
        json!({"alcohol_type": "ethanol", "amount_ingested_ml": 100, "weight_kg": 0}),
    );
}
