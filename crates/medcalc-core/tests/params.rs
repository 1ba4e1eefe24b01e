use medcalc_core::params::{FromParams, Params};
use medcalc_core::{calculator_input, choice, CalcError, YesNo};
use serde_json::{json, Map, Value};

choice! {
    pub enum Duration {
        Short => "less_10min",
        Medium => "10_59min",
        Long => "60min_or_more",
    }
}

calculator_input! {
    pub struct SampleInput {
        pub age: i64 => 18..=120,
        pub weight: f64,
        pub smoker: YesNo,
        pub duration: Duration,
        pub note: Option<f64> => 0.0..=10.0,
        pub tags: Vec<Duration>,
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn sample() -> Map<String, Value> {
    object(json!({
        "age": 65,
        "weight": 70.5,
        "smoker": "no",
        "duration": "10_59min",
        "tags": ["less_10min", "60min_or_more"],
    }))
}

#[test]
fn builds_typed_input_from_flat_object() {
    let map = sample();
    let input = SampleInput::from_params(&Params::new(&map)).unwrap();
    assert_eq!(input.age, 65);
    assert_eq!(input.weight, 70.5);
    assert_eq!(input.smoker, YesNo::No);
    assert_eq!(input.duration, Duration::Medium);
    assert_eq!(input.note, None);
    assert_eq!(input.tags, vec![Duration::Short, Duration::Long]);
}

#[test]
fn missing_field_is_named() {
    let mut map = sample();
    map.remove("weight");
    let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
    assert_eq!(err, CalcError::MissingField("weight".to_string()));
    assert!(err.is_invalid_argument());
}

#[test]
fn null_counts_as_missing() {
    let mut map = sample();
    map.insert("age".to_string(), Value::Null);
    let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
    assert_eq!(err, CalcError::MissingField("age".to_string()));
}

#[test]
fn enum_violation_names_field_value_and_allowed_set() {
    let mut map = sample();
    map.insert("smoker".to_string(), json!("maybe"));
    let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "smoker must be one of [yes, no], got 'maybe'"
    );
}

#[test]
fn integer_field_rejects_fractional_number() {
    let mut map = sample();
    map.insert("age".to_string(), json!(65.5));
    let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
    assert_eq!(err.to_string(), "age must be an integer");

    map.insert("age".to_string(), json!(65.0));
    let input = SampleInput::from_params(&Params::new(&map)).unwrap();
    assert_eq!(input.age, 65);
}

#[test]
fn numeric_field_rejects_string() {
    let mut map = sample();
    map.insert("weight".to_string(), json!("heavy"));
    let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
    assert_eq!(err.to_string(), "weight must be a number");
}

#[test]
fn first_invalid_field_in_declaration_order_wins() {
    let mut map = sample();
    map.insert("age".to_string(), json!("old"));
    map.insert("smoker".to_string(), json!("maybe"));
    let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
    assert_eq!(err.to_string(), "age must be an integer");
}

#[test]
fn list_members_are_checked_against_vocabulary() {
    let mut map = sample();
    map.insert("tags".to_string(), json!(["less_10min", "forever"]));
    let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
    assert!(matches!(err, CalcError::InvalidChoice { ref value, .. } if value == "forever"));
}

#[test]
fn optional_field_is_parsed_when_present() {
    let mut map = sample();
    map.insert("note".to_string(), json!(1.5));
    let input = SampleInput::from_params(&Params::new(&map)).unwrap();
    assert_eq!(input.note, Some(1.5));
}

#[test]
fn choice_tokens_round_trip_through_serde() {
    assert_eq!(serde_json::to_value(Duration::Long).unwrap(), json!("60min_or_more"));
    let parsed: Duration = serde_json::from_value(json!("less_10min")).unwrap();
    assert_eq!(parsed, Duration::Short);
    assert_eq!(Duration::Medium.to_string(), "10_59min");
}

#[test]
fn declared_bounds_are_inclusive() {
    for age in [18, 120] {
        let mut map = sample();
        map.insert("age".to_string(), json!(age));
        let input = SampleInput::from_params(&Params::new(&map)).unwrap();
        assert_eq!(input.age, age);
    }
    for age in [17, 121] {
        let mut map = sample();
        map.insert("age".to_string(), json!(age));
        let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
        assert!(matches!(err, CalcError::OutOfRange { ref field, .. } if field == "age"));
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn out_of_range_field_is_reported_before_later_type_error() {
    let mut map = sample();
    map.insert("age".to_string(), json!(5));
    map.insert("weight".to_string(), json!("heavy"));
    let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
    assert_eq!(err.to_string(), "age must be between 18 and 120, got 5");
}

#[test]
fn optional_bounds_apply_only_when_present() {
    let mut map = sample();
    map.insert("note".to_string(), json!(10.0));
    let input = SampleInput::from_params(&Params::new(&map)).unwrap();
    assert_eq!(input.note, Some(10.0));

    map.insert("note".to_string(), json!(10.5));
    let err = SampleInput::from_params(&Params::new(&map)).unwrap_err();
    assert_eq!(err.to_string(), "note must be between 0 and 10, got 10.5");
}
