mod common;

use common::{assert_close, calc, number, rejects};
use serde_json::json;

#[test]
fn easi_adult_example() {
    let r = calc(
        "eczema_area_severity_index",
        json!({
            "age_category": "adult_8_plus",
            "head_neck_area": 2,
            "head_neck_erythema": 2,
            "head_neck_edema": 1,
            "head_neck_excoriation": 1,
            "head_neck_lichenification": 0,
            "upper_extremities_area": 3,
            "upper_extremities_erythema": 2,
            "upper_extremities_edema": 2,
            "upper_extremities_excoriation": 2,
            "upper_extremities_lichenification": 1,
            "trunk_area": 2,
            "trunk_erythema": 1,
            "trunk_edema": 1,
            "trunk_excoriation": 0,
            "trunk_lichenification": 0,
            "lower_extremities_area": 4,
            "lower_extremities_erythema": 3,
            "lower_extremities_edema": 2,
            "lower_extremities_excoriation": 3,
            "lower_extremities_lichenification": 2,
        }),
    );
    assert_close(number(&r), 22.2, 1e-6);
    assert_eq!(r.stage, "Severe");
}

#[test]
fn easi_child_multipliers() {
    let r = calc(
        "eczema_area_severity_index",
        json!({
            "age_category": "child_0_7",
            "head_neck_area": 2,
            "head_neck_erythema": 2,
            "head_neck_edema": 1,
            "head_neck_excoriation": 1,
            "head_neck_lichenification": 0,
            "upper_extremities_area": 3,
            "upper_extremities_erythema": 2,
            "upper_extremities_edema": 2,
            "upper_extremities_excoriation": 2,
            "upper_extremities_lichenification": 1,
            "trunk_area": 2,
            "trunk_erythema": 1,
            "trunk_edema": 1,
            "trunk_excoriation": 0,
            "trunk_lichenification": 0,
            "lower_extremities_area": 4,
            "lower_extremities_erythema": 3,
            "lower_extremities_edema": 2,
            "lower_extremities_excoriation": 3,
            "lower_extremities_lichenification": 2,
        }),
    );
    assert_close(number(&r), 23.0, 1e-6);
    assert_eq!(r.stage, "Severe");
}

#[test]
fn easi_clear_skin() {
    let r = calc(
        "eczema_area_severity_index",
        json!({
            "age_category": "adult_8_plus",
            "head_neck_area": 0,
            "head_neck_erythema": 2,
            "head_neck_edema": 1,
            "head_neck_excoriation": 1,
            "head_neck_lichenification": 0,
            "upper_extremities_area": 0,
            "upper_extremities_erythema": 2,
            "upper_extremities_edema": 2,
            "upper_extremities_excoriation": 2,
            "upper_extremities_lichenification": 1,
            "trunk_area": 0,
            "trunk_erythema": 1,
            "trunk_edema": 1,
            "trunk_excoriation": 0,
            "trunk_lichenification": 0,
            "lower_extremities_area": 0,
            "lower_extremities_erythema": 3,
            "lower_extremities_edema": 2,
            "lower_extremities_excoriation": 3,
            "lower_extremities_lichenification": 2,
        }),
    );
    assert_close(number(&r), 0.0, 1e-6);
    assert_eq!(r.stage, "Clear");
}

#[test]
fn easi_rejects_area_score() {
    rejects(
        "eczema_area_severity_index",
        json!({
            "age_category": "adult_8_plus",
            "head_neck_area": 2,
            "head_neck_erythema": 2,
            "head_neck_edema": 1,
            "head_neck_excoriation": 1,
            "head_neck_lichenification": 0,
            "upper_extremities_area": 3,
            "upper_extremities_erythema": 2,
            "upper_extremities_edema": 2,
            "upper_extremities_excoriation": 2,
            "upper_extremities_lichenification": 1,
            "trunk_area": 7,
            "trunk_erythema": 1,
            "trunk_edema": 1,
            "trunk_excoriation": 0,
            "trunk_lichenification": 0,
            "lower_extremities_area": 4,
            "lower_extremities_erythema": 3,
            "lower_extremities_edema": 2,
            "lower_extremities_excoriation": 3,
            "lower_extremities_lichenification": 2,
        }),
    );
}

