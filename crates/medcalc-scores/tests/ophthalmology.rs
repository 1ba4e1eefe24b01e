mod common;

use common::{calc, label, rejects};
use serde_json::json;

#[test]
fn color_vision_example() {
    let r = calc(
        "color_vision_screening",
        json!({
            "correct_plates_right_eye": 13,
            "correct_plates_left_eye": 12,
            "visual_acuity_adequate": "yes",
            "patient_age": 25,
        }),
    );
    assert_eq!(r.stage, "Normal");
}

#[test]
fn color_vision_deficiency() {
    let r = calc(
        "color_vision_screening",
        json!({
            "correct_plates_right_eye": 5,
            "correct_plates_left_eye": 6,
            "visual_acuity_adequate": "yes",
            "patient_age": 25,
        }),
    );
    assert_eq!(r.stage, "Color Vision Deficiency");
}

#[test]
fn color_vision_inadequate_acuity() {
    let r = calc(
        "color_vision_screening",
        json!({
            "correct_plates_right_eye": 13,
            "correct_plates_left_eye": 12,
            "visual_acuity_adequate": "no",
            "patient_age": 25,
        }),
    );
    assert_eq!(r.stage, "Normal");
}

#[test]
fn color_vision_rejects_plate_count() {
    rejects(
        "color_vision_screening",
        json!({
            "correct_plates_right_eye": 15,
            "correct_plates_left_eye": 12,
            "visual_acuity_adequate": "yes",
            "patient_age": 25,
        }),
    );
}


#[test]
fn color_vision_result_is_overall_status() {
    let r = calc(
        "color_vision_screening",
        json!({
            "correct_plates_right_eye": 13,
            "correct_plates_left_eye": 12,
            "visual_acuity_adequate": "yes",
            "patient_age": 25,
        }),
    );
    assert_eq!(label(&r), "Normal");
    assert_eq!(r.unit, "assessment");
    assert_eq!(r.extra("right_eye").unwrap()["accuracy_percentage"], 92.9);
    assert_eq!(r.extra("right_eye").unwrap()["incorrect_plates"], 1);
}
