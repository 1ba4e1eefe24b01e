use std::collections::HashMap;

use medcalc_api::config::{ApiConfig, ConfigError};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ApiConfig::default());
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn reads_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("MEDCALC_HOST", "127.0.0.1"),
        ("MEDCALC_PORT", "9090"),
        ("MEDCALC_LOG_LEVEL", "debug"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    assert_eq!(config.log_level, "debug");
}

#[test]
fn blank_values_fall_back() {
    let config = ApiConfig::from_lookup(lookup(&[("MEDCALC_PORT", "  ")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn rejects_bad_port() {
    let err = ApiConfig::from_lookup(lookup(&[("MEDCALC_PORT", "80a")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("80a".to_string()));
    assert!(ApiConfig::from_lookup(lookup(&[("MEDCALC_PORT", "70000")])).is_err());
}
