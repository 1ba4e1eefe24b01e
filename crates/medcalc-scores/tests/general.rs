mod common;

use common::{assert_close, calc, label, number, rejects};
use serde_json::json;

#[test]
fn mme_single_oxycodone() {
    let r = calc(
        "mme_calculator",
        json!({
            "opioid_medications": "[{\"medication\": \"oxycodone\", \"dose\": 10, \"frequency_per_day\": 4}]",
        }),
    );
    assert_close(number(&r), 60.0, 1e-6);
    assert_eq!(r.stage, "Moderate Risk");
}

#[test]
fn mme_brand_names_and_patch() {
    let r = calc(
        "mme_calculator",
        json!({
            "opioid_medications": "[{\"medication\": \"Duragesic\", \"dose\": 25, \"frequency_per_day\": 1}, {\"medication\": \"Norco\", \"dose\": 10, \"frequency_per_day\": 3}]",
        }),
    );
    assert_close(number(&r), 90.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn mme_iv_hydromorphone() {
    let r = calc(
        "mme_calculator",
        json!({
            "opioid_medications": "[{\"medication\": \"hydromorphone_oral\", \"dose\": 1, \"frequency_per_day\": 6, \"route\": \"iv\"}]",
        }),
    );
    assert_close(number(&r), 120.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn mme_methadone_tiered_factor() {
    let r = calc(
        "mme_calculator",
        json!({
            "opioid_medications": "[{\"medication\": \"methadone\", \"dose\": 10, \"frequency_per_day\": 3}]",
        }),
    );
    assert_close(number(&r), 240.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn mme_rejects_empty_list() {
    rejects("mme_calculator", json!({"opioid_medications": "[]"}));
}

#[test]
fn mme_rejects_missing_dose() {
    rejects(
        "mme_calculator",
        json!({
            "opioid_medications": "[{\"medication\": \"oxycodone\", \"frequency_per_day\": 4}]",
        }),
    );
}

#[test]
fn snellen_example() {
    let r = calc(
        "visual_acuity_testing_snellen_chart",
        json!({
            "eye_tested": "right_eye",
            "lowest_line_read": "line_10_20_25",
            "testing_distance": "20_feet",
            "corrective_lenses": "yes",
        }),
    );
    assert_eq!(label(&r), "20/25");
    assert_eq!(r.stage, "Mild Impairment");
}

#[test]
fn snellen_counting_fingers() {
    let r = calc(
        "visual_acuity_testing_snellen_chart",
        json!({
            "eye_tested": "right_eye",
            "lowest_line_read": "counting_fingers",
            "testing_distance": "20_feet",
            "corrective_lenses": "no",
        }),
    );
    assert_eq!(label(&r), "CF");
    assert_eq!(r.stage, "Profound Impairment");
}

#[test]
fn snellen_normal_metric() {
    let r = calc(
        "visual_acuity_testing_snellen_chart",
        json!({
            "eye_tested": "right_eye",
            "lowest_line_read": "line_11_20_20",
            "testing_distance": "6_meters",
            "corrective_lenses": "yes",
        }),
    );
    assert_eq!(label(&r), "20/20");
    assert_eq!(r.stage, "Normal");
}

#[test]
fn snellen_rejects_distance() {
    rejects(
        "visual_acuity_testing_snellen_chart",
        json!({
            "eye_tested": "right_eye",
            "lowest_line_read": "line_10_20_25",
            "testing_distance": "10_feet",
            "corrective_lenses": "yes",
        }),
    );
}

#[test]
fn wound_example() {
    let r = calc(
        "wound_closure_classification",
        json!({
            "contamination_level": "clean",
            "tissue_loss": "minimal",
            "time_since_injury": 4.5,
            "vascularization": "well_vascularized",
            "wound_location": "face_scalp",
        }),
    );
    assert_eq!(label(&r), "primary_closure");
    assert_eq!(r.stage, "Primary Closure");
}

#[test]
fn wound_delayed_closure() {
    let r = calc(
        "wound_closure_classification",
        json!({
            "contamination_level": "grossly_contaminated",
            "tissue_loss": "minimal",
            "time_since_injury": 30.0,
            "vascularization": "poorly_vascularized",
            "wound_location": "extremities",
        }),
    );
    assert_eq!(label(&r), "tertiary_closure");
    assert_eq!(r.stage, "Tertiary (Delayed Primary) Closure");
}

#[test]
fn wound_rejects_negative_time() {
    rejects(
        "wound_closure_classification",
        json!({
            "contamination_level": "clean",
            "tissue_loss": "minimal",
            "time_since_injury": -1.0,
            "vascularization": "well_vascularized",
            "wound_location": "face_scalp",
        }),
    );
}


#[test]
fn mme_accepts_array_and_reports_details() {
    let r = calc(
        "mme_calculator",
        json!({
            "opioid_medications": [
                {"medication": "Percocet", "dose": 5, "frequency_per_day": 4},
                {"medication": "tramadol", "dose": 50, "frequency_per_day": 2},
            ],
        }),
    );
    assert_close(number(&r), 40.0, 1e-9);
    assert_eq!(r.stage, "Low Risk");
    assert!(r.interpretation.starts_with("Total MME: 40.0 mg/day."));
    let details = r.extra("medication_details").unwrap();
    assert_eq!(details[0]["medication"], "oxycodone");
    assert_eq!(details[0]["route"], "oral");
    assert_eq!(details[1]["mme_contribution"], 10.0);
}

#[test]
fn mme_rejects_non_list_and_malformed_text() {
    rejects("mme_calculator", json!({"opioid_medications": 30}));
    rejects("mme_calculator", json!({"opioid_medications": "not json"}));
    rejects(
        "mme_calculator",
        json!({"opioid_medications": [{"medication": "oxycodone", "dose": -5, "frequency_per_day": 2}]}),
    );
}
