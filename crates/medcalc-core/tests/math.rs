use medcalc_core::math::{
    ensure, ensure_one_of, ensure_positive, ensure_range, fixed, logistic, round_to,
};
use medcalc_core::CalcError;

#[test]
fn round_to_requested_places() {
    assert_eq!(round_to(4.2164, 2), 4.22);
    assert_eq!(round_to(78.734, 1), 78.7);
    assert_eq!(round_to(-1.25, 1), -1.3);
    assert_eq!(round_to(12.0, 0), 12.0);
}

#[test]
fn logistic_saturates_instead_of_overflowing() {
    assert_eq!(logistic(0.0), 0.5);
    assert_eq!(logistic(1000.0), 1.0);
    assert_eq!(logistic(-1000.0), 0.0);
    assert!((logistic(1.308968) - 0.787340).abs() < 1e-5);
}

#[test]
fn range_bounds_are_inclusive() {
    assert!(ensure_range("age", 18, 18, 120).is_ok());
    assert!(ensure_range("age", 120, 18, 120).is_ok());
    let err = ensure_range("age", 17, 18, 120).unwrap_err();
    assert_eq!(err.to_string(), "age must be between 18 and 120, got 17");
    assert!(ensure_range("inr", 10.01, 0.5, 10.0).is_err());
}

#[test]
fn positive_guard_rejects_zero_negative_and_nan() {
    assert!(ensure_positive("platelet_count", 0.0).is_err());
    assert!(ensure_positive("platelet_count", -3.0).is_err());
    assert!(ensure_positive("platelet_count", f64::NAN).is_err());
    assert_eq!(ensure_positive("platelet_count", 150.0).unwrap(), 150.0);
}

#[test]
fn integer_vocabulary_guard() {
    assert_eq!(ensure_one_of("grade", 2, &[0, 2]).unwrap(), 2);
    let err = ensure_one_of("grade", 1, &[0, 2]).unwrap_err();
    assert_eq!(err.to_string(), "grade must be one of [0, 2], got '1'");
}

#[test]
fn cross_field_rule_carries_message() {
    let err = ensure(false, "systolic_bp must not be less than diastolic_bp").unwrap_err();
    assert_eq!(
        err,
        CalcError::Constraint("systolic_bp must not be less than diastolic_bp".to_string())
    );
    assert!(err.is_invalid_argument());
}

#[test]
fn fixed_decimals() {
    assert_eq!(fixed(4.2, 2), "4.20");
    assert_eq!(fixed(2.0 / 3.0, 1), "0.7");
}

#[test]
fn banded_points_uses_inclusive_upper_bounds() {
    use medcalc_core::math::banded_points;
    let bands = [(31.0, 9), (34.0, 7), (f64::INFINITY, 0)];
    assert_eq!(banded_points(31.0, &bands), 9);
    assert_eq!(banded_points(31.1, &bands), 7);
    assert_eq!(banded_points(50.0, &bands), 0);
    assert_eq!(banded_points(1.0, &[]), 0);
}

#[test]
fn points_from_lower_walks_descending_bands() {
    use medcalc_core::math::points_from_lower;
    let bands = [(41.0, 4), (39.0, 3), (38.5, 1), (36.0, 0), (34.0, 1)];
    assert_eq!(points_from_lower(41.0, &bands, 4), 4);
    assert_eq!(points_from_lower(40.95, &bands, 4), 3);
    assert_eq!(points_from_lower(38.45, &bands, 4), 0);
    assert_eq!(points_from_lower(35.95, &bands, 4), 1);
    assert_eq!(points_from_lower(20.0, &bands, 4), 4);
}
