mod common;

use common::{assert_close, calc, number, rejects};
use serde_json::json;

#[test]
fn brue_lower_risk() {
    let r = calc(
        "brue",
        json!({
            "age_under_1_year": "yes",
            "asymptomatic_on_presentation": "yes",
            "no_explanation_after_exam": "yes",
            "sudden_brief_resolved_episode": "yes",
            "cyanosis_or_pallor": "yes",
            "breathing_changes": "no",
            "tone_changes": "no",
            "altered_responsiveness": "no",
            "episode_duration_under_1_min": "yes",
            "age_over_2_months": "yes",
            "no_history_prematurity": "yes",
            "no_prior_brue": "yes",
            "no_cpr_by_provider": "yes",
        }),
    );
    assert_close(number(&r), 2.0, 1e-6);
    assert_eq!(r.stage, "BRUE - Lower Risk");
}

#[test]
fn brue_higher_risk_when_young() {
    let r = calc(
        "brue",
        json!({
            "age_under_1_year": "yes",
            "asymptomatic_on_presentation": "yes",
            "no_explanation_after_exam": "yes",
            "sudden_brief_resolved_episode": "yes",
            "cyanosis_or_pallor": "yes",
            "breathing_changes": "no",
            "tone_changes": "no",
            "altered_responsiveness": "no",
            "episode_duration_under_1_min": "yes",
            "age_over_2_months": "no",
            "no_history_prematurity": "yes",
            "no_prior_brue": "yes",
            "no_cpr_by_provider": "yes",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "BRUE - Higher Risk");
}

#[test]
fn brue_not_met_without_characteristic() {
    let r = calc(
        "brue",
        json!({
            "age_under_1_year": "yes",
            "asymptomatic_on_presentation": "yes",
            "no_explanation_after_exam": "yes",
            "sudden_brief_resolved_episode": "yes",
            "cyanosis_or_pallor": "no",
            "breathing_changes": "no",
            "tone_changes": "no",
            "altered_responsiveness": "no",
            "episode_duration_under_1_min": "yes",
            "age_over_2_months": "yes",
            "no_history_prematurity": "yes",
            "no_prior_brue": "yes",
            "no_cpr_by_provider": "yes",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Not BRUE");
}

#[test]
fn brue_2_0_cyanosis_alone_reaches_high_recurrence() {
    let r = calc(
        "brue_2_0",
        json!({
            "age_under_1_year": "yes",
            "asymptomatic_on_presentation": "yes",
            "no_explanation_after_exam": "yes",
            "sudden_brief_resolved_episode": "yes",
            "cyanosis_or_pallor": "yes",
            "breathing_changes": "no",
            "tone_changes": "no",
            "altered_responsiveness": "no",
            "age_in_days": 120,
            "history_similar_event": "no",
            "abnormal_medical_history": "no",
            "multiple_event_clusters": "no",
            "prematurity": "no",
        }),
    );
    assert_close(number(&r), 31.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn brue_2_0_altered_responsiveness_only_is_moderate() {
    let r = calc(
        "brue_2_0",
        json!({
            "age_under_1_year": "yes",
            "asymptomatic_on_presentation": "yes",
            "no_explanation_after_exam": "yes",
            "sudden_brief_resolved_episode": "yes",
            "cyanosis_or_pallor": "no",
            "breathing_changes": "no",
            "tone_changes": "no",
            "altered_responsiveness": "yes",
            "age_in_days": 60,
            "history_similar_event": "no",
            "abnormal_medical_history": "no",
            "multiple_event_clusters": "no",
            "prematurity": "no",
        }),
    );
    assert_close(number(&r), 16.0, 1e-6);
    assert_eq!(r.stage, "Moderate Risk");
}

#[test]
fn brue_2_0_rejects_age_over_one_year() {
    rejects(
        "brue_2_0",
        json!({
            "age_under_1_year": "yes",
            "asymptomatic_on_presentation": "yes",
            "no_explanation_after_exam": "yes",
            "sudden_brief_resolved_episode": "yes",
            "cyanosis_or_pallor": "yes",
            "breathing_changes": "no",
            "tone_changes": "no",
            "altered_responsiveness": "no",
            "age_in_days": 400,
            "history_similar_event": "no",
            "abnormal_medical_history": "no",
            "multiple_event_clusters": "no",
            "prematurity": "no",
        }),
    );
}

#[test]
fn capd_example_positive() {
    let r = calc(
        "capd",
        json!({
            "eye_contact": 1,
            "purposeful_actions": 0,
            "aware_surroundings": 2,
            "communicates_needs": 1,
            "restless": 3,
            "inconsolable": 2,
            "underactive": 0,
            "slow_response": 1,
            "patient_age": 5,
        }),
    );
    assert_close(number(&r), 10.0, 1e-6);
    assert_eq!(r.stage, "CAPD Positive");
}

#[test]
fn capd_below_threshold() {
    let r = calc(
        "capd",
        json!({
            "eye_contact": 1,
            "purposeful_actions": 0,
            "aware_surroundings": 2,
            "communicates_needs": 1,
            "restless": 0,
            "inconsolable": 0,
            "underactive": 0,
            "slow_response": 1,
            "patient_age": 5,
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "CAPD Negative");
}

#[test]
fn capd_rejects_item_above_four() {
    rejects(
        "capd",
        json!({
            "eye_contact": 1,
            "purposeful_actions": 0,
            "aware_surroundings": 2,
            "communicates_needs": 1,
            "restless": 5,
            "inconsolable": 2,
            "underactive": 0,
            "slow_response": 1,
            "patient_age": 5,
        }),
    );
}

#[test]
fn cheops_example() {
    let r = calc(
        "cheops_pain_scale",
        json!({
            "cry": "moaning_crying",
            "facial": "composed",
            "verbal": "not_talking_other",
            "torso": "shifting_tense",
            "touch": "not_touching",
            "legs": "neutral",
        }),
    );
    assert_close(number(&r), 8.0, 1e-6);
    assert_eq!(r.stage, "Severe Pain");
}

#[test]
fn cheops_minimum_score() {
    let r = calc(
        "cheops_pain_scale",
        json!({
            "cry": "no_crying",
            "facial": "smiling",
            "verbal": "positive",
            "torso": "neutral",
            "touch": "not_touching",
            "legs": "neutral",
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "No Pain");
}

#[test]
fn cheops_rejects_unknown_cry() {
    rejects(
        "cheops_pain_scale",
        json!({
            "cry": "whimpering",
            "facial": "composed",
            "verbal": "not_talking_other",
            "torso": "shifting_tense",
            "touch": "not_touching",
            "legs": "neutral",
        }),
    );
}

#[test]
fn dhaka_example() {
    let r = calc(
        "dhaka_score",
        json!({
            "general_appearance": "restless_irritable",
            "respirations": "normal",
            "skin_pinch": "slow",
            "tears": "decreased",
            "child_age_months": 18,
            "diarrhea_duration": 3,
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "Severe Dehydration");
}

#[test]
fn dhaka_no_dehydration() {
    let r = calc(
        "dhaka_score",
        json!({
            "general_appearance": "normal",
            "respirations": "normal",
            "skin_pinch": "normal",
            "tears": "normal",
            "child_age_months": 18,
            "diarrhea_duration": 3,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "No Dehydration");
}

#[test]
fn dhaka_rejects_child_over_five() {
    rejects(
        "dhaka_score",
        json!({
            "general_appearance": "restless_irritable",
            "respirations": "normal",
            "skin_pinch": "slow",
            "tears": "decreased",
            "child_age_months": 61,
            "diarrhea_duration": 3,
        }),
    );
}

#[test]
fn gir_standard_neonatal_infusion() {
    let r = calc(
        "glucose_infusion_rate",
        json!({
            "infusion_rate": 10,
            "dextrose_concentration": 10,
            "weight": 3.5,
        }),
    );
    assert_close(number(&r), 4.76, 1e-6);
    assert_eq!(r.stage, "Normal/Physiologic Range");
}

#[test]
fn gir_high_rate() {
    let r = calc(
        "glucose_infusion_rate",
        json!({
            "infusion_rate": 30,
            "dextrose_concentration": 12.5,
            "weight": 3.0,
        }),
    );
    assert_close(number(&r), 20.83, 1e-6);
    assert_eq!(r.stage, "Excessive Range");
}

#[test]
fn gir_rejects_zero_weight() {
    rejects(
        "glucose_infusion_rate",
        json!({
            "infusion_rate": 10,
            "dextrose_concentration": 10,
            "weight": 0,
        }),
    );
}

#[test]
fn phoenix_example() {
    let r = calc(
        "phoenix_sepsis_score",
        json!({
            "age": 5,
            "suspected_infection": "yes",
            "respiratory_support": "supplemental_oxygen",
            "pao2_fio2_ratio": 250.0,
            "spo2_fio2_ratio": null,
            "vasoactive_medications": 0,
            "lactate": 3.2,
            "mean_arterial_pressure": 75,
            "platelets": 250,
            "inr": 1.1,
            "d_dimer": 1.5,
            "fibrinogen": 2.8,
            "glasgow_coma_scale": 15,
            "pupil_reactivity": "both_reactive",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "No Sepsis");
}

#[test]
fn phoenix_septic_shock() {
    let r = calc(
        "phoenix_sepsis_score",
        json!({
            "age": 5,
            "suspected_infection": "yes",
            "respiratory_support": "invasive_mechanical_ventilation",
            "pao2_fio2_ratio": 90,
            "spo2_fio2_ratio": null,
            "vasoactive_medications": 2,
            "lactate": 11.5,
            "mean_arterial_pressure": 40,
            "platelets": 250,
            "inr": 1.1,
            "d_dimer": 1.5,
            "fibrinogen": 2.8,
            "glasgow_coma_scale": 15,
            "pupil_reactivity": "both_reactive",
        }),
    );
    assert_close(number(&r), 7.0, 1e-6);
    assert_eq!(r.stage, "Septic Shock");
}

#[test]
fn wat_1_example() {
    let r = calc(
        "wat_1_pediatric_withdrawal",
        json!({
            "post_menstrual_age_weeks": 40,
            "state_sleep_wake_cycle": 1,
            "tremor": 0,
            "increased_muscle_tone": 1,
            "excoriation": 0,
            "myoclonus_seizures": 0,
            "tachypnea": 1,
            "sweating": 0,
            "fever": 0,
            "frequent_yawning_sneezing": 0,
            "nasal_stuffiness": 0,
            "poor_feeding_vomiting": 1,
        }),
    );
    assert_close(number(&r), 4.0, 1e-6);
    assert_eq!(r.stage, "Mild to Moderate");
}

#[test]
fn wat_1_significant_withdrawal() {
    let r = calc(
        "wat_1_pediatric_withdrawal",
        json!({
            "post_menstrual_age_weeks": 40,
            "state_sleep_wake_cycle": 2,
            "tremor": 1,
            "increased_muscle_tone": 1,
            "excoriation": 1,
            "myoclonus_seizures": 0,
            "tachypnea": 1,
            "sweating": 1,
            "fever": 1,
            "frequent_yawning_sneezing": 1,
            "nasal_stuffiness": 1,
            "poor_feeding_vomiting": 1,
        }),
    );
    assert_close(number(&r), 11.0, 1e-6);
    assert_eq!(r.stage, "Moderate to Severe");
}

