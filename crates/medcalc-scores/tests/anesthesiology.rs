mod common;

use common::{assert_close, calc, number, rejects};
use serde_json::json;

#[test]
fn macocha_low_risk() {
    let r = calc(
        "macocha_score",
        json!({
            "mallampati_3_or_4": "no",
            "obstructive_sleep_apnea": "no",
            "reduced_cervical_mobility": "no",
            "limited_mouth_opening": "no",
            "coma": "no",
            "severe_hypoxemia": "no",
            "non_anesthesiologist": "no",
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Low Risk");
}

#[test]
fn macocha_high_risk() {
    let r = calc(
        "macocha_score",
        json!({
            "mallampati_3_or_4": "yes",
            "obstructive_sleep_apnea": "yes",
            "reduced_cervical_mobility": "no",
            "limited_mouth_opening": "no",
            "coma": "yes",
            "severe_hypoxemia": "no",
            "non_anesthesiologist": "yes",
        }),
    );
    assert_close(number(&r), 9.0, 1e-6);
    assert_eq!(r.stage, "High Risk");
}

#[test]
fn macocha_rejects_missing_item() {
    rejects(
        "macocha_score",
        json!({
            "mallampati_3_or_4": "no",
            "obstructive_sleep_apnea": "no",
            "reduced_cervical_mobility": "no",
            "limited_mouth_opening": "no",
            "coma": "no",
            "severe_hypoxemia": "no",
        }),
    );
}

