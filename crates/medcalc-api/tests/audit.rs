use axum::http::StatusCode;

use medcalc_api::middleware::audit::{outcome, score_id};

#[test]
fn score_id_is_read_from_calculator_paths() {
    assert_eq!(score_id("/api/fib_4/calculate"), Some("fib_4"));
    assert_eq!(score_id("/api/scores/apri"), Some("apri"));
    assert_eq!(score_id("/api/scores/apri/validate"), Some("apri"));
}

#[test]
fn catalog_paths_carry_no_score_id() {
    assert_eq!(score_id("/api/scores"), None);
    assert_eq!(score_id("/api/categories"), None);
    assert_eq!(score_id("/health"), None);
}

#[test]
fn outcome_follows_status_class() {
    assert_eq!(outcome(StatusCode::OK), "calculated");
    assert_eq!(outcome(StatusCode::BAD_REQUEST), "rejected");
    assert_eq!(outcome(StatusCode::UNPROCESSABLE_ENTITY), "rejected");
    assert_eq!(outcome(StatusCode::NOT_FOUND), "unknown_score");
    assert_eq!(outcome(StatusCode::INTERNAL_SERVER_ERROR), "failed");
}
