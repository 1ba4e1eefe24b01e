mod common;

use std::collections::HashSet;

use common::{calc, run};
use medcalc_core::CalcError;
use medcalc_scores::registry;
use medcalc_scores::Specialty;
use serde_json::json;

#[test]
fn catalog_has_unique_ids() {
    let all = registry::all();
    assert_eq!(all.len(), 166);
    let ids: HashSet<_> = all.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn find_returns_metadata() {
    let info = registry::find("meld_combined").unwrap();
    assert_eq!(info.specialty, Specialty::Gastroenterology);
    assert_eq!(info.title, "MELD Score (MELD, MELD-Na, MELD 3.0)");
    assert!(registry::find("not_a_score").is_none());
}

#[test]
fn unknown_score_is_not_an_argument_error() {
    let err = run("not_a_score", json!({})).unwrap_err();
    assert!(matches!(err, CalcError::UnknownScore(ref id) if id == "not_a_score"));
    assert!(!err.is_invalid_argument());
}

#[test]
fn missing_parameter_is_an_argument_error() {
    let err = run("fisher_grade", json!({})).unwrap_err();
    assert!(matches!(err, CalcError::MissingField(_)), "got {err:?}");
    assert!(err.is_invalid_argument());
}

#[test]
fn search_is_case_insensitive_over_id_and_title() {
    let hits: Vec<_> = registry::search("CHADS").into_iter().map(|s| s.id).collect();
    assert_eq!(hits, vec!["chads2_score", "chads_65"]);

    let by_title = registry::search("  frailty ");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "clinical_frailty_scale");

    assert!(registry::search("zzz").is_empty());
}

#[test]
fn specialties_are_sorted_and_complete() {
    let specialties = registry::specialties();
    assert_eq!(specialties.len(), 19);
    assert_eq!(specialties, Specialty::ALL.to_vec());
    assert!(specialties.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn by_specialty_partitions_the_catalog() {
    let total: usize = Specialty::ALL
        .iter()
        .map(|s| registry::by_specialty(*s).len())
        .sum();
    assert_eq!(total, 166);
    assert_eq!(registry::by_specialty(Specialty::Emergency).len(), 31);
    assert_eq!(registry::by_specialty(Specialty::Cardiology).len(), 16);
    assert_eq!(registry::by_specialty(Specialty::Anesthesiology).len(), 1);
    assert!(registry::by_specialty(Specialty::Psychiatry)
        .iter()
        .all(|s| s.specialty == Specialty::Psychiatry));
}

#[test]
fn specialty_tokens_round_trip() {
    for specialty in Specialty::ALL {
        assert_eq!(Specialty::parse(specialty.as_str()), Some(specialty));
    }
    assert_eq!(Specialty::parse(" Infectious_Disease "), Some(Specialty::InfectiousDisease));
    assert_eq!(Specialty::parse("surgery"), None);
    assert_eq!(
        serde_json::to_value(Specialty::InfectiousDisease).unwrap(),
        json!("infectious_disease")
    );
}

#[test]
fn null_parameters_count_as_absent() {
    let r = calc(
        "winters_formula_metabolic_acidosis",
        json!({"bicarbonate": 12, "measured_pco2": null}),
    );
    assert_eq!(r.stage, "Expected Compensation");
}

#[test]
fn response_serializes_with_flat_extras() {
    let r = calc("fisher_grade", json!({"ct_findings": "diffuse_thin"}));
    let body = serde_json::to_value(&r).unwrap();
    assert_eq!(body["result"], 2);
    assert_eq!(body["unit"], "grade");
    assert_eq!(body["stage"], "Grade 2");
}
