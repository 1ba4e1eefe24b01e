#![allow(dead_code)]

use medcalc_core::{CalcError, CalculatorResponse};
use medcalc_scores::registry;
use serde_json::Value;

pub fn run(id: &str, params: Value) -> Result<CalculatorResponse, CalcError> {
    let Value::Object(map) = params else {
        panic!("parameters must be a JSON object");
    };
    registry::calculate(id, &map)
}

pub fn calc(id: &str, params: Value) -> CalculatorResponse {
    run(id, params).unwrap_or_else(|e| panic!("{id} failed: {e}"))
}

/// Asserts the call fails with an invalid-argument error.
pub fn rejects(id: &str, params: Value) -> CalcError {
    match run(id, params) {
        Ok(r) => panic!("{id} accepted invalid input: {r:?}"),
        Err(e) => {
            assert!(e.is_invalid_argument(), "{id}: expected invalid argument, got {e}");
            e
        }
    }
}

pub fn number(response: &CalculatorResponse) -> f64 {
    response
        .result
        .as_f64()
        .unwrap_or_else(|| panic!("expected numeric result, got {:?}", response.result))
}

pub fn label(response: &CalculatorResponse) -> &str {
    response
        .result
        .as_label()
        .unwrap_or_else(|| panic!("expected label result, got {:?}", response.result))
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
