//! Numeric helpers shared by the formula-based calculators.

use std::fmt::Display;

use crate::error::CalcError;

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `e^x / (1 + e^x)`, saturating to 0.0 / 1.0 instead of overflowing.
pub fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Inclusive range guard.
pub fn ensure_range<T>(field: &str, value: T, min: T, max: T) -> Result<T, CalcError>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err(CalcError::out_of_range(field, value, min, max));
    }
    Ok(value)
}

/// Range guard for optional fields; `None` always passes.
pub fn ensure_range_opt<T>(
    field: &str,
    value: Option<T>,
    min: T,
    max: T,
) -> Result<Option<T>, CalcError>
where
    T: PartialOrd + Display + Copy,
{
    value.map(|v| ensure_range(field, v, min, max)).transpose()
}

/// Denominators and logarithm arguments must be strictly positive.
pub fn ensure_positive(field: &str, value: f64) -> Result<f64, CalcError> {
    if !(value > 0.0) {
        return Err(CalcError::constraint(format!(
            "{field} must be greater than 0, got {value}"
        )));
    }
    Ok(value)
}

/// Integer field restricted to a fixed set of values.
pub fn ensure_one_of(field: &str, value: i64, allowed: &[i64]) -> Result<i64, CalcError> {
    if allowed.contains(&value) {
        return Ok(value);
    }
    let allowed = allowed
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(CalcError::InvalidChoice {
        field: field.to_string(),
        value: value.to_string(),
        allowed,
    })
}

/// Cross-field rule: fail with `message` unless `condition` holds.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), CalcError> {
    if condition {
        Ok(())
    } else {
        Err(CalcError::constraint(message))
    }
}

/// Format with a fixed number of decimals, for interpretation text.
pub fn fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}

/// Points of the first band whose inclusive upper bound is at or above
/// `value`; 0 when no band matches. Bands must be in ascending order.
pub fn banded_points(value: f64, bands: &[(f64, i64)]) -> i64 {
    bands
        .iter()
        .find(|(upper, _)| value <= *upper)
        .map_or(0, |(_, points)| *points)
}

/// Points of the first band whose inclusive lower bound is at or below
/// `value`, falling back to `floor` below every band. Bands must be in
/// descending order.
pub fn points_from_lower(value: f64, bands: &[(f64, i64)], floor: i64) -> i64 {
    bands
        .iter()
        .find(|(lower, _)| value >= *lower)
        .map_or(floor, |(_, points)| *points)
}
