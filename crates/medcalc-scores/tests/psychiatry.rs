mod common;

use common::{assert_close, calc, label, number, rejects};
use serde_json::json;

#[test]
fn bfcrs_screen_positive() {
    let r = calc(
        "bush_francis_catatonia_rating_scale",
        json!({
            "excitement": 0,
            "immobility_stupor": 2,
            "mutism": 1,
            "staring": 0,
            "posturing_catalepsy": 0,
            "grimacing": 0,
            "echopraxia_echolalia": 0,
            "stereotypy": 0,
            "mannerisms": 0,
            "verbigeration": 0,
            "rigidity": 0,
            "negativism": 0,
            "waxy_flexibility": 0,
            "withdrawal": 3,
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "Positive Screen");
}

#[test]
fn bfcrs_screen_negative() {
    let r = calc(
        "bush_francis_catatonia_rating_scale",
        json!({
            "excitement": 0,
            "immobility_stupor": 0,
            "mutism": 1,
            "staring": 0,
            "posturing_catalepsy": 0,
            "grimacing": 0,
            "echopraxia_echolalia": 0,
            "stereotypy": 0,
            "mannerisms": 0,
            "verbigeration": 0,
            "rigidity": 0,
            "negativism": 0,
            "waxy_flexibility": 0,
            "withdrawal": 0,
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "Negative Screen");
}

#[test]
fn bfcrs_binary_item_rejects_two() {
    rejects(
        "bush_francis_catatonia_rating_scale",
        json!({
            "excitement": 0,
            "immobility_stupor": 0,
            "mutism": 1,
            "staring": 0,
            "posturing_catalepsy": 0,
            "grimacing": 0,
            "echopraxia_echolalia": 0,
            "stereotypy": 0,
            "mannerisms": 0,
            "verbigeration": 0,
            "rigidity": 0,
            "negativism": 0,
            "waxy_flexibility": 0,
            "withdrawal": 2,
        }),
    );
}

#[test]
fn cas_positive_at_nine() {
    let r = calc(
        "cas",
        json!({
            "dizzy_news": 2,
            "sleep_problems": 2,
            "paralyzed_frozen": 2,
            "appetite_loss": 2,
            "nausea_stomach": 1,
        }),
    );
    assert_close(number(&r), 9.0, 1e-6);
    assert_eq!(r.stage, "Dysfunctional Anxiety");
}

#[test]
fn cas_below_threshold() {
    let r = calc(
        "cas",
        json!({
            "dizzy_news": 2,
            "sleep_problems": 2,
            "paralyzed_frozen": 2,
            "appetite_loss": 2,
            "nausea_stomach": 0,
        }),
    );
    assert_close(number(&r), 8.0, 1e-6);
    assert_eq!(r.stage, "No Dysfunctional Anxiety");
}

#[test]
fn ciwa_moderate() {
    let r = calc(
        "ciwa_ar_alcohol_withdrawal",
        json!({
            "nausea_vomiting": 2,
            "tremor": 3,
            "paroxysmal_sweats": 2,
            "anxiety": 3,
            "agitation": 2,
            "tactile_disturbances": 0,
            "auditory_disturbances": 0,
            "visual_disturbances": 0,
            "headache": 1,
            "orientation": 0,
        }),
    );
    assert_close(number(&r), 13.0, 1e-6);
    assert_eq!(r.stage, "Mild to Moderate");
}

#[test]
fn ciwa_severe() {
    let r = calc(
        "ciwa_ar_alcohol_withdrawal",
        json!({
            "nausea_vomiting": 4,
            "tremor": 4,
            "paroxysmal_sweats": 4,
            "anxiety": 4,
            "agitation": 4,
            "tactile_disturbances": 0,
            "auditory_disturbances": 0,
            "visual_disturbances": 0,
            "headache": 1,
            "orientation": 0,
        }),
    );
    assert_close(number(&r), 21.0, 1e-6);
    assert_eq!(r.stage, "Severe");
}

#[test]
fn ciwa_rejects_orientation_five() {
    rejects(
        "ciwa_ar_alcohol_withdrawal",
        json!({
            "nausea_vomiting": 0,
            "tremor": 0,
            "paroxysmal_sweats": 0,
            "anxiety": 0,
            "agitation": 0,
            "tactile_disturbances": 0,
            "auditory_disturbances": 0,
            "visual_disturbances": 0,
            "headache": 0,
            "orientation": 5,
        }),
    );
}

#[test]
fn cows_moderate() {
    let r = calc(
        "cows_opiate_withdrawal",
        json!({
            "resting_pulse_rate": "101-120",
            "sweating": "flushed_moist_face",
            "restlessness": "frequent_shifting",
            "pupil_size": "moderately_dilated",
            "bone_joint_aches": "severe_diffuse",
            "runny_nose_tearing": "runny_nose_tearing",
            "gi_upset": "nausea_loose_stool",
            "tremor": "barely_perceptible",
            "anxiety_irritability": "moderately_anxious",
            "gooseflesh_skin": "prominent_arms",
            "yawning": "yawning_three_times",
        }),
    );
    assert_close(number(&r), 22.0, 1e-6);
    assert_eq!(r.stage, "Moderate");
}

#[test]
fn cows_minimal() {
    let r = calc(
        "cows_opiate_withdrawal",
        json!({
            "resting_pulse_rate": "<=80",
            "sweating": "no_chills_flushing",
            "restlessness": "sits_still",
            "pupil_size": "normal_pinned",
            "bone_joint_aches": "mild_diffuse",
            "runny_nose_tearing": "not_present",
            "gi_upset": "no_symptoms",
            "tremor": "no_tremor",
            "anxiety_irritability": "none",
            "gooseflesh_skin": "no_piloerection",
            "yawning": "no_yawning",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "None to Minimal");
}

#[test]
fn gds_depression_suggested() {
    let r = calc(
        "gds_15",
        json!({
            "q1_satisfied_with_life": "no",
            "q2_dropped_activities": "yes",
            "q3_life_empty": "yes",
            "q4_often_bored": "yes",
            "q5_good_spirits": "no",
            "q6_afraid_bad_happen": "no",
            "q7_happy_most_time": "yes",
            "q8_feel_helpless": "no",
            "q9_prefer_stay_home": "yes",
            "q10_memory_problems": "no",
            "q11_wonderful_to_be_alive": "yes",
            "q12_feel_worthless": "no",
            "q13_full_of_energy": "yes",
            "q14_situation_hopeless": "no",
            "q15_others_better_off": "no",
        }),
    );
    assert_close(number(&r), 6.0, 1e-6);
    assert_eq!(r.stage, "Mild Depression");
}

#[test]
fn gds_normal() {
    let r = calc(
        "gds_15",
        json!({
            "q1_satisfied_with_life": "yes",
            "q2_dropped_activities": "no",
            "q3_life_empty": "no",
            "q4_often_bored": "no",
            "q5_good_spirits": "yes",
            "q6_afraid_bad_happen": "no",
            "q7_happy_most_time": "yes",
            "q8_feel_helpless": "no",
            "q9_prefer_stay_home": "yes",
            "q10_memory_problems": "no",
            "q11_wonderful_to_be_alive": "yes",
            "q12_feel_worthless": "no",
            "q13_full_of_energy": "yes",
            "q14_situation_hopeless": "no",
            "q15_others_better_off": "no",
        }),
    );
    assert_close(number(&r), 1.0, 1e-6);
    assert_eq!(r.stage, "Normal");
}

#[test]
fn qids_moderate() {
    let r = calc(
        "qids_sr16",
        json!({
            "sleep_onset": 2,
            "sleep_maintenance": 1,
            "early_awakening": 3,
            "hypersomnia": 0,
            "sad_mood": 2,
            "appetite_decrease": 1,
            "appetite_increase": 0,
            "weight_decrease": 2,
            "weight_increase": 0,
            "concentration": 2,
            "self_view": 1,
            "suicidal_ideation": 1,
            "general_interest": 2,
            "energy_level": 2,
            "psychomotor_slowing": 1,
            "psychomotor_agitation": 2,
        }),
    );
    assert_close(number(&r), 17.0, 1e-6);
    assert_eq!(r.stage, "Severe Depression");
}

#[test]
fn qids_none() {
    let r = calc(
        "qids_sr16",
        json!({
            "sleep_onset": 1,
            "sleep_maintenance": 0,
            "early_awakening": 0,
            "hypersomnia": 0,
            "sad_mood": 1,
            "appetite_decrease": 0,
            "appetite_increase": 0,
            "weight_decrease": 0,
            "weight_increase": 0,
            "concentration": 1,
            "self_view": 0,
            "suicidal_ideation": 0,
            "general_interest": 1,
            "energy_level": 1,
            "psychomotor_slowing": 0,
            "psychomotor_agitation": 0,
        }),
    );
    assert_close(number(&r), 5.0, 1e-6);
    assert_eq!(r.stage, "No Depression");
}

#[test]
fn comm_positive_at_nine() {
    let r = calc(
        "comm",
        json!({
            "thinking_clearly": 1,
            "not_completing_tasks": 1,
            "relief_other_sources": 1,
            "taking_differently": 1,
            "thinking_hurting_self": 0,
            "time_thinking_medications": 1,
            "being_in_arguments": 1,
            "trouble_controlling_anger": 1,
            "need_medications_from_others": 0,
            "worried_handling_medications": 1,
            "others_worried_handling": 1,
            "emergency_clinic_visits": 0,
            "getting_angry_with_people": 0,
            "taking_more_than_prescribed": 0,
            "borrowing_pain_medication": 0,
            "using_for_non_pain_symptoms": 0,
            "visiting_emergency_room": 0,
        }),
    );
    assert_close(number(&r), 9.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn comm_negative() {
    let r = calc(
        "comm",
        json!({
            "thinking_clearly": 1,
            "not_completing_tasks": 1,
            "relief_other_sources": 1,
            "taking_differently": 1,
            "thinking_hurting_self": 0,
            "time_thinking_medications": 1,
            "being_in_arguments": 1,
            "trouble_controlling_anger": 1,
            "need_medications_from_others": 0,
            "worried_handling_medications": 1,
            "others_worried_handling": 0,
            "emergency_clinic_visits": 0,
            "getting_angry_with_people": 0,
            "taking_more_than_prescribed": 0,
            "borrowing_pain_medication": 0,
            "using_for_non_pain_symptoms": 0,
            "visiting_emergency_room": 0,
        }),
    );
    assert_close(number(&r), 8.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn embed_moderate_disorder_ready_for_induction() {
    let r = calc(
        "embed",
        json!({
            "opioid_larger_amounts": "yes",
            "unsuccessful_cut_down": "yes",
            "time_obtaining_using": "yes",
            "craving_desire": "yes",
            "failure_obligations": "no",
            "continued_despite_problems": "no",
            "activities_given_up": "no",
            "hazardous_situations": "no",
            "physical_psychological_problems": "no",
            "tolerance": "yes",
            "withdrawal": "yes",
            "cows_score": 10,
            "treatment_readiness": "ready",
            "pregnancy_status": "no",
            "buprenorphine_waiver": "yes",
        }),
    );
    assert_eq!(label(&r), "candidate_home_induction");
    assert_eq!(r.stage, "Candidate - Home Induction");
}

#[test]
fn embed_no_disorder() {
    let r = calc(
        "embed",
        json!({
            "opioid_larger_amounts": "yes",
            "unsuccessful_cut_down": "no",
            "time_obtaining_using": "no",
            "craving_desire": "no",
            "failure_obligations": "no",
            "continued_despite_problems": "no",
            "activities_given_up": "no",
            "hazardous_situations": "no",
            "physical_psychological_problems": "no",
            "tolerance": "no",
            "withdrawal": "no",
            "cows_score": 2,
            "treatment_readiness": "not_ready",
            "pregnancy_status": "no",
            "buprenorphine_waiver": "no",
        }),
    );
    assert_eq!(label(&r), "not_candidate");
    assert_eq!(r.stage, "Not Candidate");
}

#[test]
fn epds_reverse_scored_items_flip_answer_position() {
    let r = calc(
        "edinburgh_postnatal_depression_scale",
        json!({
            "able_to_laugh": 0,
            "looked_forward": 0,
            "blamed_myself": 2,
            "anxious_worried": 0,
            "scared_panicky": 1,
            "things_on_top": 1,
            "unhappy_sleeping": 1,
            "sad_miserable": 1,
            "unhappy_crying": 0,
            "self_harm_thoughts": 1,
        }),
    );
    assert_eq!(r.result.as_i64(), Some(16));
    assert_eq!(r.stage, "High Risk");
    assert!(r.interpretation.contains("IMPORTANT: Patient endorsed thoughts of self-harm (low frequency)."));
    assert!(r.interpretation.ends_with("ongoing monitoring is appropriate."));
}

#[test]
fn epds_best_answers_score_zero() {
    let r = calc(
        "edinburgh_postnatal_depression_scale",
        json!({
            "able_to_laugh": 3,
            "looked_forward": 3,
            "blamed_myself": 0,
            "anxious_worried": 3,
            "scared_panicky": 0,
            "things_on_top": 0,
            "unhappy_sleeping": 0,
            "sad_miserable": 0,
            "unhappy_crying": 0,
            "self_harm_thoughts": 0,
        }),
    );
    assert_eq!(r.result.as_i64(), Some(0));
    assert_eq!(r.stage, "Low Risk");
    assert!(!r.interpretation.contains("self-harm"));
}

#[test]
fn epds_rejects_answer_out_of_range() {
    rejects(
        "edinburgh_postnatal_depression_scale",
        json!({
            "able_to_laugh": 4,
            "looked_forward": 0,
            "blamed_myself": 0,
            "anxious_worried": 0,
            "scared_panicky": 0,
            "things_on_top": 0,
            "unhappy_sleeping": 0,
            "sad_miserable": 0,
            "unhappy_crying": 0,
            "self_harm_thoughts": 0,
        }),
    );
}

#[test]
fn mdi_warns_on_life_not_worth_living_even_with_low_total() {
    let r = calc(
        "major_depression_index",
        json!({
            "depressed_mood": "most_of_time",
            "lack_of_interest": "some_of_time",
            "lack_of_energy": "most_of_time",
            "low_self_confidence": "some_of_time",
            "bad_conscience": "not_at_all",
            "life_not_worth_living": "most_of_time",
            "concentration_problems": "some_of_time",
            "agitation_restlessness": "not_at_all",
            "psychomotor_retardation": "not_at_all",
            "sleep_problems": "all_the_time",
        }),
    );
    assert_eq!(r.result.as_i64(), Some(12));
    assert_eq!(r.stage, "No Depression");
    assert_eq!(r.extra("diagnostic_criteria_met").unwrap(), true);
    assert_eq!(r.extra("suicide_risk_flag").unwrap(), true);
    assert!(r.interpretation.contains("(1 core symptoms, 5 additional symptoms)"));
    assert!(r.interpretation.contains("WARNING: Patient endorsed feeling that life is not worth living."));
}

#[test]
fn mdi_moderate_depression_without_suicide_flag() {
    let r = calc(
        "major_depression_index",
        json!({
            "depressed_mood": "all_the_time",
            "lack_of_interest": "all_the_time",
            "lack_of_energy": "all_the_time",
            "low_self_confidence": "most_of_time",
            "bad_conscience": "most_of_time",
            "life_not_worth_living": "some_of_time",
            "concentration_problems": "all_the_time",
            "agitation_restlessness": "some_of_time",
            "psychomotor_retardation": "most_of_time",
            "sleep_problems": "all_the_time",
        }),
    );
    assert_eq!(r.result.as_i64(), Some(23));
    assert_eq!(r.stage, "Moderate Depression");
    assert_eq!(r.extra("suicide_risk_flag").unwrap(), false);
}

#[test]
fn mdi_rejects_unknown_frequency() {
    rejects(
        "major_depression_index",
        json!({
            "depressed_mood": "often",
            "lack_of_interest": "all_the_time",
            "lack_of_energy": "all_the_time",
            "low_self_confidence": "most_of_time",
            "bad_conscience": "most_of_time",
            "life_not_worth_living": "some_of_time",
            "concentration_problems": "all_the_time",
            "agitation_restlessness": "some_of_time",
            "psychomotor_retardation": "most_of_time",
            "sleep_problems": "all_the_time",
        }),
    );
}
