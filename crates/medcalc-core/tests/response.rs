use medcalc_core::{CalculatorResponse, Interpretation, ScoreValue};
use serde_json::json;

#[test]
fn serializes_to_flat_contract_with_extras() {
    let response = CalculatorResponse::new(
        3,
        "points",
        Interpretation::new("High Risk", "Three criteria met", "Consider admission."),
    )
    .with("positive_criteria_count", 3)
    .with("survival_90_days", 71.5);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "result": 3,
            "unit": "points",
            "interpretation": "Consider admission.",
            "stage": "High Risk",
            "stage_description": "Three criteria met",
            "positive_criteria_count": 3,
            "survival_90_days": 71.5,
        })
    );
}

#[test]
fn score_value_variants_serialize_untagged() {
    assert_eq!(serde_json::to_value(ScoreValue::from(2.5)).unwrap(), json!(2.5));
    assert_eq!(
        serde_json::to_value(ScoreValue::from("Grade III")).unwrap(),
        json!("Grade III")
    );
    assert_eq!(ScoreValue::from(7).as_f64(), Some(7.0));
    assert_eq!(ScoreValue::from("x").as_i64(), None);
}

#[test]
fn unknown_and_internal_errors_are_not_invalid_arguments() {
    use medcalc_core::CalcError;
    assert!(!CalcError::UnknownScore("x".into()).is_invalid_argument());
    assert!(!CalcError::Internal("x".into()).is_invalid_argument());
    assert!(CalcError::MissingField("x".into()).is_invalid_argument());
}
