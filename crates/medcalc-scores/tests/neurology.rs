mod common;

use common::{assert_close, calc, label, number, rejects};
use serde_json::json;

#[test]
fn cpp_example() {
    let r = calc(
        "cerebral_perfusion_pressure",
        json!({
            "mean_arterial_pressure": 85.0,
            "intracranial_pressure": 15.0,
        }),
    );
    assert_close(number(&r), 70.0, 1e-6);
    assert_eq!(r.stage, "Optimal");
}

#[test]
fn cpp_low_perfusion() {
    let r = calc(
        "cerebral_perfusion_pressure",
        json!({
            "mean_arterial_pressure": 70.0,
            "intracranial_pressure": 25.0,
        }),
    );
    assert_close(number(&r), 45.0, 1e-6);
    assert_eq!(r.stage, "Severely Low");
}

#[test]
fn cpp_rejects_icp_above_map() {
    rejects(
        "cerebral_perfusion_pressure",
        json!({
            "mean_arterial_pressure": 40.0,
            "intracranial_pressure": 45.0,
        }),
    );
}

#[test]
fn edss_mild_disability() {
    let r = calc(
        "edss",
        json!({
            "pyramidal": 2,
            "cerebellar": 1,
            "brainstem": 0,
            "sensory": 1,
            "bowel_bladder": 0,
            "visual": 1,
            "cerebral": 0,
            "ambulation": 0,
        }),
    );
    assert_close(number(&r), 2.5, 1e-6);
    assert_eq!(r.stage, "Mild Disability");
}

#[test]
fn edss_ambulation_dominates() {
    let r = calc(
        "edss",
        json!({
            "pyramidal": 3,
            "cerebellar": 2,
            "brainstem": 1,
            "sensory": 2,
            "bowel_bladder": 2,
            "visual": 1,
            "cerebral": 1,
            "ambulation": 6,
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "Assistance Required");
}

#[test]
fn edss_normal_exam() {
    let r = calc(
        "edss",
        json!({
            "pyramidal": 0,
            "cerebellar": 0,
            "brainstem": 0,
            "sensory": 0,
            "bowel_bladder": 0,
            "visual": 0,
            "cerebral": 0,
            "ambulation": 0,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Normal");
}

#[test]
fn edss_rejects_pyramidal_above_six() {
    rejects(
        "edss",
        json!({
            "pyramidal": 7,
            "cerebellar": 0,
            "brainstem": 0,
            "sensory": 0,
            "bowel_bladder": 0,
            "visual": 0,
            "cerebral": 0,
            "ambulation": 0,
        }),
    );
}

#[test]
fn esus_example() {
    let r = calc(
        "embolic_stroke_undetermined_source_esus_criteria",
        json!({
            "stroke_type_non_lacunar": "Yes",
            "no_significant_atherosclerosis": "Yes",
            "no_major_cardioembolic_source": "Yes",
            "no_other_specific_cause": "Yes",
            "adequate_cardiac_monitoring": "Yes",
            "adequate_vascular_imaging": "Yes",
            "adequate_cardiac_imaging": "Yes",
        }),
    );
    assert_eq!(label(&r), "ESUS Diagnosis Confirmed");
    assert_eq!(r.stage, "ESUS Diagnosis Confirmed");
}

#[test]
fn esus_incomplete_workup() {
    let r = calc(
        "embolic_stroke_undetermined_source_esus_criteria",
        json!({
            "stroke_type_non_lacunar": "Yes",
            "no_significant_atherosclerosis": "Yes",
            "no_major_cardioembolic_source": "Yes",
            "no_other_specific_cause": "Yes",
            "adequate_cardiac_monitoring": "No",
            "adequate_vascular_imaging": "Yes",
            "adequate_cardiac_imaging": "Yes",
        }),
    );
    assert_eq!(label(&r), "Inadequate Evaluation");
    assert_eq!(r.stage, "Inadequate Evaluation");
}

#[test]
fn esus_not_met() {
    let r = calc(
        "embolic_stroke_undetermined_source_esus_criteria",
        json!({
            "stroke_type_non_lacunar": "Yes",
            "no_significant_atherosclerosis": "Yes",
            "no_major_cardioembolic_source": "No",
            "no_other_specific_cause": "Yes",
            "adequate_cardiac_monitoring": "Yes",
            "adequate_vascular_imaging": "Yes",
            "adequate_cardiac_imaging": "Yes",
        }),
    );
    assert_eq!(label(&r), "ESUS Diagnosis Not Met");
    assert_eq!(r.stage, "ESUS Diagnosis Not Met");
}

#[test]
fn esus_rejects_lowercase_token() {
    rejects(
        "embolic_stroke_undetermined_source_esus_criteria",
        json!({
            "stroke_type_non_lacunar": "yes",
            "no_significant_atherosclerosis": "Yes",
            "no_major_cardioembolic_source": "Yes",
            "no_other_specific_cause": "Yes",
            "adequate_cardiac_monitoring": "Yes",
            "adequate_vascular_imaging": "Yes",
            "adequate_cardiac_imaging": "Yes",
        }),
    );
}

#[test]
fn impact_extended_example() {
    let r = calc(
        "impact_score",
        json!({
            "age": 45,
            "motor_score": "localizes_pain",
            "pupillary_reactivity": "both_reactive",
            "model_type": "extended",
            "hypoxia": "no",
            "hypotension": "no",
            "marshall_ct_classification": "diffuse_injury_ii",
            "traumatic_sah": "no",
            "epidural_hematoma": "no",
        }),
    );
    assert_close(number(&r), 6.4, 1e-6);
    assert_eq!(r.stage, "Very Low Risk");
}

#[test]
fn impact_core_model_poor_prognosis() {
    let r = calc(
        "impact_score",
        json!({
            "age": 70,
            "motor_score": "no_motor_response",
            "pupillary_reactivity": "both_nonreactive",
            "model_type": "core",
            "hypoxia": "no",
            "hypotension": "no",
            "marshall_ct_classification": "diffuse_injury_ii",
            "traumatic_sah": "no",
            "epidural_hematoma": "no",
        }),
    );
    assert_close(number(&r), 71.1, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn impact_rejects_minor() {
    rejects(
        "impact_score",
        json!({
            "age": 12,
            "motor_score": "localizes_pain",
            "pupillary_reactivity": "both_reactive",
            "model_type": "extended",
            "hypoxia": "no",
            "hypotension": "no",
            "marshall_ct_classification": "diffuse_injury_ii",
            "traumatic_sah": "no",
            "epidural_hematoma": "no",
        }),
    );
}

#[test]
fn iwg2_typical_ad() {
    let r = calc(
        "iwg2_alzheimer_criteria",
        json!({
            "clinical_phenotype": "typical_ad",
            "memory_impairment": "present",
            "cognitive_domains_affected": "single_domain",
            "csf_amyloid_beta": "decreased",
            "csf_tau": "elevated",
            "csf_ptau": "elevated",
            "amyloid_pet": "not_available",
            "functional_decline": "mild",
        }),
    );
    assert_eq!(label(&r), "typical_ad");
    assert_eq!(r.stage, "Typical AD");
}

#[test]
fn iwg2_asymptomatic_at_risk() {
    let r = calc(
        "iwg2_alzheimer_criteria",
        json!({
            "clinical_phenotype": "asymptomatic",
            "memory_impairment": "absent",
            "cognitive_domains_affected": "single_domain",
            "csf_amyloid_beta": "not_available",
            "csf_tau": "not_available",
            "csf_ptau": "not_available",
            "amyloid_pet": "positive",
            "functional_decline": "absent",
        }),
    );
    assert_eq!(label(&r), "asymptomatic_at_risk");
    assert_eq!(r.stage, "Asymptomatic at Risk");
}

#[test]
fn iwg2_without_biomarkers() {
    let r = calc(
        "iwg2_alzheimer_criteria",
        json!({
            "clinical_phenotype": "typical_ad",
            "memory_impairment": "present",
            "cognitive_domains_affected": "multiple_domains",
            "csf_amyloid_beta": "normal",
            "csf_tau": "normal",
            "csf_ptau": "not_available",
            "amyloid_pet": "negative",
            "functional_decline": "present",
        }),
    );
    assert_eq!(label(&r), "insufficient_criteria");
    assert_eq!(r.stage, "Insufficient Criteria");
}

#[test]
fn mcdonald_example() {
    let r = calc(
        "mcdonald_criteria_multiple_sclerosis_2017_revision",
        json!({
            "clinical_attacks": "1",
            "objective_clinical_evidence": "2_or_more",
            "dissemination_in_space": "demonstrated",
            "dissemination_in_time": "not_demonstrated",
            "csf_oligoclonal_bands": "present",
            "alternative_diagnosis": "excluded",
        }),
    );
    assert_eq!(label(&r), "MS Diagnosed");
    assert_eq!(r.stage, "MS Diagnosed");
}

#[test]
fn mcdonald_two_attacks_two_lesions() {
    let r = calc(
        "mcdonald_criteria_multiple_sclerosis_2017_revision",
        json!({
            "clinical_attacks": "2_or_more",
            "objective_clinical_evidence": "2_or_more",
            "dissemination_in_space": "demonstrated",
            "dissemination_in_time": "not_demonstrated",
            "csf_oligoclonal_bands": "absent",
            "alternative_diagnosis": "excluded",
        }),
    );
    assert_eq!(label(&r), "MS Diagnosed");
    assert_eq!(r.stage, "MS Diagnosed");
}

#[test]
fn mcdonald_alternative_still_possible() {
    let r = calc(
        "mcdonald_criteria_multiple_sclerosis_2017_revision",
        json!({
            "clinical_attacks": "1",
            "objective_clinical_evidence": "2_or_more",
            "dissemination_in_space": "demonstrated",
            "dissemination_in_time": "not_demonstrated",
            "csf_oligoclonal_bands": "present",
            "alternative_diagnosis": "possible",
        }),
    );
    assert_eq!(label(&r), "MS Not Diagnosed");
    assert_eq!(r.stage, "MS Not Diagnosed");
}

#[test]
fn moca_normal_with_education_point() {
    let r = calc(
        "moca",
        json!({
            "visuospatial_executive": 5,
            "naming": 3,
            "memory_registration": 5,
            "attention": 5,
            "language": 2,
            "abstraction": 2,
            "delayed_recall": 3,
            "orientation": 5,
            "education_level": "less_than_12_years",
        }),
    );
    assert_close(number(&r), 26.0, 1e-6);
    assert_eq!(r.stage, "Normal Cognition");
}

#[test]
fn moca_moderate_impairment() {
    let r = calc(
        "moca",
        json!({
            "visuospatial_executive": 2,
            "naming": 2,
            "memory_registration": 3,
            "attention": 3,
            "language": 1,
            "abstraction": 1,
            "delayed_recall": 1,
            "orientation": 4,
            "education_level": "12_or_more_years",
        }),
    );
    assert_close(number(&r), 14.0, 1e-6);
    assert_eq!(r.stage, "Moderate Cognitive Impairment");
}

#[test]
fn moca_rejects_orientation() {
    rejects(
        "moca",
        json!({
            "visuospatial_executive": 2,
            "naming": 2,
            "memory_registration": 3,
            "attention": 3,
            "language": 1,
            "abstraction": 1,
            "delayed_recall": 1,
            "orientation": 7,
            "education_level": "12_or_more_years",
        }),
    );
}

#[test]
fn mbig_category_1() {
    let r = calc(
        "modified_brain_injury_guideline",
        json!({
            "anticoagulation_antiplatelet": "no",
            "epidural_hematoma": "no",
            "intraventricular_hemorrhage": "no",
            "displaced_skull_fracture": "no",
            "subdural_hematoma_size": "4mm_or_less",
            "intraparenchymal_hemorrhage_size": "none",
            "subarachnoid_hemorrhage_extent": "none",
            "blood_alcohol_level": "unknown_or_under_80",
            "nondisplaced_skull_fracture": "no",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "mBIG 1");
}

#[test]
fn mbig_category_2() {
    let r = calc(
        "modified_brain_injury_guideline",
        json!({
            "anticoagulation_antiplatelet": "no",
            "epidural_hematoma": "no",
            "intraventricular_hemorrhage": "no",
            "displaced_skull_fracture": "no",
            "subdural_hematoma_size": "4_to_8mm",
            "intraparenchymal_hemorrhage_size": "none",
            "subarachnoid_hemorrhage_extent": "limited_1_3mm",
            "blood_alcohol_level": "over_80_mg_dl",
            "nondisplaced_skull_fracture": "yes",
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
    assert_eq!(r.stage, "mBIG 2");
}

#[test]
fn mbig_category_3_on_anticoagulation() {
    let r = calc(
        "modified_brain_injury_guideline",
        json!({
            "anticoagulation_antiplatelet": "yes",
            "epidural_hematoma": "no",
            "intraventricular_hemorrhage": "no",
            "displaced_skull_fracture": "no",
            "subdural_hematoma_size": "4mm_or_less",
            "intraparenchymal_hemorrhage_size": "none",
            "subarachnoid_hemorrhage_extent": "none",
            "blood_alcohol_level": "unknown_or_under_80",
            "nondisplaced_skull_fracture": "no",
        }),
    );
    assert_close(number(&r), 3.0, 1e-6);
    assert_eq!(r.stage, "mBIG 3");
}

#[test]
fn mnihss_example() {
    let r = calc(
        "modified_nih_stroke_scale",
        json!({
            "orientation_questions": "both_correct",
            "commands": "both_correct",
            "horizontal_eye_movements": "normal",
            "visual_fields": "no_visual_loss",
            "left_arm_motor": "no_drift",
            "right_arm_motor": "no_drift",
            "left_leg_motor": "no_drift",
            "right_leg_motor": "no_drift",
            "sensation": "normal_no_sensory_loss",
            "language_aphasia": "normal_no_aphasia",
            "extinction_neglect": "normal",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Minor Stroke");
}

#[test]
fn mnihss_severe_deficit() {
    let r = calc(
        "modified_nih_stroke_scale",
        json!({
            "orientation_questions": "zero_correct",
            "commands": "zero_correct",
            "horizontal_eye_movements": "total_gaze_palsy",
            "visual_fields": "complete_hemianopia",
            "left_arm_motor": "no_movement",
            "right_arm_motor": "no_drift",
            "left_leg_motor": "no_movement",
            "right_leg_motor": "no_drift",
            "sensation": "abnormal_sensory_loss",
            "language_aphasia": "mute_global_aphasia",
            "extinction_neglect": "severe",
        }),
    );
    assert_close(number(&r), 22.0, 1e-6);
    assert_eq!(r.stage, "Severe Stroke");
}

#[test]
fn mnihss_rejects_token() {
    rejects(
        "modified_nih_stroke_scale",
        json!({
            "orientation_questions": "both_correct",
            "commands": "both_correct",
            "horizontal_eye_movements": "normal",
            "visual_fields": "no_visual_loss",
            "left_arm_motor": "no_drift",
            "right_arm_motor": "no_drift",
            "left_leg_motor": "no_drift",
            "right_leg_motor": "no_drift",
            "sensation": "numb",
            "language_aphasia": "normal_no_aphasia",
            "extinction_neglect": "normal",
        }),
    );
}

#[test]
fn mrs_9q_example() {
    let r = calc(
        "modified_rankin_score_9q",
        json!({
            "symptoms_bothering": "yes",
            "same_work": "no",
            "keep_hobbies": "no",
            "maintain_social_ties": "yes",
            "need_help_basic_tasks": "no",
            "need_help_shopping_travel": "no",
            "need_help_walking": "no",
            "need_help_personal_care": "no",
            "bedridden_nursing_care": "no",
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
    assert_eq!(r.stage, "Slight Disability");
}

#[test]
fn mrs_9q_bedridden() {
    let r = calc(
        "modified_rankin_score_9q",
        json!({
            "symptoms_bothering": "yes",
            "same_work": "no",
            "keep_hobbies": "no",
            "maintain_social_ties": "yes",
            "need_help_basic_tasks": "no",
            "need_help_shopping_travel": "no",
            "need_help_walking": "yes",
            "need_help_personal_care": "no",
            "bedridden_nursing_care": "yes",
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "Severe Disability");
}

#[test]
fn mrs_9q_no_symptoms() {
    let r = calc(
        "modified_rankin_score_9q",
        json!({
            "symptoms_bothering": "no",
            "same_work": "yes",
            "keep_hobbies": "yes",
            "maintain_social_ties": "yes",
            "need_help_basic_tasks": "no",
            "need_help_shopping_travel": "no",
            "need_help_walking": "no",
            "need_help_personal_care": "no",
            "bedridden_nursing_care": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "No Symptoms");
}

#[test]
fn tis_example() {
    let r = calc(
        "trunk_impairment_scale",
        json!({
            "static_item_1": "yes",
            "static_item_2": "maintains_position",
            "static_item_3": "crosses_without_displacement",
            "dynamic_item_1": "moves_actively_and_touches",
            "dynamic_item_2": "appropriate_shortening",
            "dynamic_item_3": "moves_without_compensation",
            "dynamic_item_4": "moves_actively_and_touches",
            "dynamic_item_5": "appropriate_shortening",
            "dynamic_item_6": "moves_without_compensation",
            "dynamic_item_7": "appropriate_shortening",
            "dynamic_item_8": "moves_without_compensation",
            "dynamic_item_9": "appropriate_shortening",
            "dynamic_item_10": "moves_without_compensation",
            "coordination_item_1": "symmetrical_rotation",
            "coordination_item_2": "symmetrical_rotation",
            "coordination_item_3": "symmetrical_rotation",
            "coordination_item_4": "symmetrical_rotation",
        }),
    );
    assert_close(number(&r), 23.0, 1e-6);
    assert_eq!(r.stage, "Normal/Near Normal");
}

#[test]
fn tis_static_failure_stops_test() {
    let r = calc(
        "trunk_impairment_scale",
        json!({
            "static_item_1": "no",
            "static_item_2": "maintains_position",
            "static_item_3": "crosses_without_displacement",
            "dynamic_item_1": "moves_actively_and_touches",
            "dynamic_item_2": "appropriate_shortening",
            "dynamic_item_3": "moves_without_compensation",
            "dynamic_item_4": "moves_actively_and_touches",
            "dynamic_item_5": "appropriate_shortening",
            "dynamic_item_6": "moves_without_compensation",
            "dynamic_item_7": "appropriate_shortening",
            "dynamic_item_8": "moves_without_compensation",
            "dynamic_item_9": "appropriate_shortening",
            "dynamic_item_10": "moves_without_compensation",
            "coordination_item_1": "symmetrical_rotation",
            "coordination_item_2": "symmetrical_rotation",
            "coordination_item_3": "symmetrical_rotation",
            "coordination_item_4": "symmetrical_rotation",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Severe Impairment");
}

#[test]
fn tis_rejects_token() {
    rejects(
        "trunk_impairment_scale",
        json!({
            "static_item_1": "yes",
            "static_item_2": "maintains_position",
            "static_item_3": "crosses_without_displacement",
            "dynamic_item_1": "moves_actively_and_touches",
            "dynamic_item_2": "appropriate_shortening",
            "dynamic_item_3": "moves_without_compensation",
            "dynamic_item_4": "moves_actively_and_touches",
            "dynamic_item_5": "appropriate_shortening",
            "dynamic_item_6": "moves_without_compensation",
            "dynamic_item_7": "appropriate_shortening",
            "dynamic_item_8": "moves_without_compensation",
            "dynamic_item_9": "appropriate_shortening",
            "dynamic_item_10": "moves_without_compensation",
            "coordination_item_1": "rotates",
            "coordination_item_2": "symmetrical_rotation",
            "coordination_item_3": "symmetrical_rotation",
            "coordination_item_4": "symmetrical_rotation",
        }),
    );
}


#[test]
fn abcd2_high_risk() {
    let r = calc(
        "abcd2_score",
        json!({
            "age": 72,
            "blood_pressure": "elevated",
            "clinical_features": "unilateral_weakness",
            "duration": "60min_or_more",
            "diabetes": "yes",
        }),
    );
    assert_eq!(r.result.as_i64(), Some(7));
    assert_eq!(r.stage, "High Risk");
    assert_eq!(r.extra("two_day_stroke_risk").unwrap(), 8.1);
    assert_eq!(r.extra("component_scores").unwrap()["clinical_features"], 2);
}

#[test]
fn abcd2_band_edges() {
    let params = |age: i64, features: &str| {
        json!({
            "age": age,
            "blood_pressure": "normal",
            "clinical_features": features,
            "duration": "10_59min",
            "diabetes": "no",
        })
    };
    let r = calc("abcd2_score", params(65, "speech_disturbance"));
    assert_eq!(r.result.as_i64(), Some(3));
    assert_eq!(r.stage, "Low Risk");

    let r = calc("abcd2_score", params(65, "unilateral_weakness"));
    assert_eq!(r.result.as_i64(), Some(4));
    assert_eq!(r.stage, "Moderate Risk");
}

#[test]
fn abcd2_rejects_unknown_duration() {
    rejects(
        "abcd2_score",
        json!({
            "age": 50,
            "blood_pressure": "normal",
            "clinical_features": "other",
            "duration": "2_hours",
            "diabetes": "no",
        }),
    );
}

#[test]
fn fisher_grades_follow_ct_pattern() {
    let r = calc("fisher_grade", json!({"ct_findings": "localized_clot_or_thick_layer"}));
    assert_eq!(r.result.as_i64(), Some(3));
    assert_eq!(r.unit, "grade");
    assert_eq!(r.stage, "Grade 3");

    let r = calc("fisher_grade", json!({"ct_findings": "no_hemorrhage"}));
    assert_eq!(r.result.as_i64(), Some(1));
    assert_eq!(r.stage_description, "No blood detected");
}

#[test]
fn fisher_requires_ct_findings() {
    rejects("fisher_grade", json!({}));
}
