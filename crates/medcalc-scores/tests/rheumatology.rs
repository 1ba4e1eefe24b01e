mod common;

use common::{assert_close, calc, label, number, rejects};
use serde_json::{json, Value};

fn gout_base() -> Value {
    json!({
        "entry_criterion": "yes",
        "msu_crystals_present": "not_tested",
        "joint_pattern": "first_mtp",
        "episode_characteristics": "two",
        "typical_episodes": "one",
        "tophus_evidence": "absent",
        "serum_urate": "6_to_8",
        "synovial_fluid_analysis": "not_done",
        "imaging_urate_deposition": "absent",
        "imaging_joint_damage": "absent",
    })
}

#[test]
fn gout_six_points_falls_short() {
    let mut params = gout_base();
    params["typical_episodes"] = json!("none");
    let r = calc("acr_eular_gout", params);
    assert_eq!(r.result.as_i64(), Some(6));
    assert_eq!(r.stage, "Does not meet criteria");
    assert!(r.interpretation.contains("(requires ≥7 points)"));
}

#[test]
fn gout_seven_points_meets_criteria() {
    let r = calc("acr_eular_gout", gout_base());
    assert_eq!(r.result.as_i64(), Some(7));
    assert_eq!(r.stage, "Meets criteria for gout");
    assert_eq!(r.extra("classification").unwrap(), "Score 7/23 points");
}

#[test]
fn gout_recurrent_typical_episodes_reach_threshold_with_normal_urate() {
    let mut params = gout_base();
    params["episode_characteristics"] = json!("three");
    params["typical_episodes"] = json!("recurrent");
    params["serum_urate"] = json!("4_to_6");
    let r = calc("acr_eular_gout", params);
    assert_eq!(r.result.as_i64(), Some(7));
    assert_eq!(r.stage, "Meets criteria for gout");
}

#[test]
fn gout_negative_findings_subtract() {
    let mut params = gout_base();
    params["serum_urate"] = json!("under_4");
    params["synovial_fluid_analysis"] = json!("negative_msu");
    let r = calc("acr_eular_gout", params);
    assert_eq!(r.result.as_i64(), Some(-1));
}

#[test]
fn gout_short_circuits() {
    let mut params = gout_base();
    params["entry_criterion"] = json!("no");
    assert_eq!(label(&calc("acr_eular_gout", params)), "Entry criterion not met");

    let mut params = gout_base();
    params["msu_crystals_present"] = json!("yes");
    let r = calc("acr_eular_gout", params);
    assert_eq!(r.stage, "Definite gout");
    assert_eq!(r.unit, "classification");
}

#[test]
fn gout_rejects_unknown_token() {
    let mut params = gout_base();
    params["joint_pattern"] = json!("knee");
    rejects("acr_eular_gout", params);
}

#[test]
fn cdai_moderate_activity() {
    let r = calc(
        "cdai_rheumatoid_arthritis",
        json!({
            "tender_joint_count": 5,
            "swollen_joint_count": 3,
            "patient_global_activity": 4.5,
            "provider_global_activity": 3.0,
        }),
    );
    assert_close(number(&r), 15.5, 1e-9);
    assert_eq!(r.stage, "Moderate Disease Activity");
    assert_eq!(
        r.interpretation,
        "CDAI Score 15.5: Moderate disease activity. Suboptimal control with significant inflammatory activity. Consider intensifying therapy to achieve low disease activity or remission."
    );
}

#[test]
fn cdai_remission_boundary_is_inclusive() {
    let r = calc(
        "cdai_rheumatoid_arthritis",
        json!({
            "tender_joint_count": 1,
            "swollen_joint_count": 1,
            "patient_global_activity": 0.4,
            "provider_global_activity": 0.4,
        }),
    );
    assert_close(number(&r), 2.8, 1e-9);
    assert_eq!(r.stage, "Remission");
}

#[test]
fn cdai_high_activity_and_breakdown() {
    let r = calc(
        "cdai_rheumatoid_arthritis",
        json!({
            "tender_joint_count": 10,
            "swollen_joint_count": 8,
            "patient_global_activity": 5,
            "provider_global_activity": 5,
        }),
    );
    assert_close(number(&r), 28.0, 1e-9);
    assert_eq!(r.stage, "High Disease Activity");
    let breakdown = r.extra("scoring_breakdown").unwrap();
    assert_eq!(breakdown["score_components"]["tender_joint_count"]["percentage"], "35.7%");
}

#[test]
fn cdai_rejects_joint_count_above_28() {
    rejects(
        "cdai_rheumatoid_arthritis",
        json!({
            "tender_joint_count": 29,
            "swollen_joint_count": 0,
            "patient_global_activity": 0,
            "provider_global_activity": 0,
        }),
    );
}

#[test]
fn leiden_high_risk() {
    let r = calc(
        "leiden_clinical_prediction_rule",
        json!({
            "age_years": 55,
            "sex": "female",
            "joint_distribution": "small_hands_feet",
            "symmetric_distribution": "yes",
            "morning_stiffness_duration": "60_min_or_more",
            "tender_joints_count": 12,
            "swollen_joints_count": 5,
            "c_reactive_protein": 20,
            "rheumatoid_factor": "positive",
            "anti_ccp_antibodies": "positive",
        }),
    );
    assert_close(number(&r), 9.1, 1e-9);
    assert_eq!(r.stage, "High Risk");
    assert!(r.interpretation.contains("Key contributing factors include: older age, female sex"));
}

#[test]
fn leiden_low_risk_has_no_factor_summary() {
    let r = calc(
        "leiden_clinical_prediction_rule",
        json!({
            "age_years": 30,
            "sex": "male",
            "joint_distribution": "other",
            "symmetric_distribution": "no",
            "morning_stiffness_duration": "less_than_30_min",
            "tender_joints_count": 2,
            "swollen_joints_count": 2,
            "c_reactive_protein": 3,
            "rheumatoid_factor": "negative",
            "anti_ccp_antibodies": "negative",
        }),
    );
    assert_close(number(&r), 0.6, 1e-9);
    assert_eq!(r.stage, "Low Risk");
    assert!(!r.interpretation.contains("Key contributing factors"));
}

#[test]
fn leiden_rejects_minor_and_negative_crp() {
    let params = json!({
        "age_years": 17,
        "sex": "male",
        "joint_distribution": "other",
        "symmetric_distribution": "no",
        "morning_stiffness_duration": "less_than_30_min",
        "tender_joints_count": 2,
        "swollen_joints_count": 2,
        "c_reactive_protein": 3,
        "rheumatoid_factor": "negative",
        "anti_ccp_antibodies": "negative",
    });
    rejects("leiden_clinical_prediction_rule", params.clone());

    let mut params = params;
    params["age_years"] = json!(40);
    params["c_reactive_protein"] = json!(-1);
    rejects("leiden_clinical_prediction_rule", params);
}
