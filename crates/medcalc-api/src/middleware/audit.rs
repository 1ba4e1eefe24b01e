use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

/// Which calculator a request path addresses, if any.
///
/// Matches `/api/{id}/calculate`, `/api/scores/{id}` and
/// `/api/scores/{id}/validate`.
pub fn score_id(path: &str) -> Option<&str> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match segments.as_slice() {
        ["api", id, "calculate"] => Some(*id),
        ["api", "scores", id] | ["api", "scores", id, "validate"] => Some(*id),
        _ => None,
    }
}

/// Outcome label recorded for a calculation request.
pub fn outcome(status: StatusCode) -> &'static str {
    if status.is_success() {
        "calculated"
    } else if status == StatusCode::NOT_FOUND {
        "unknown_score"
    } else if status.is_client_error() {
        "rejected"
    } else {
        "failed"
    }
}

/// Logs every request as a structured event.
///
/// Calculations are logged as `score_calculation` with the score id and
/// outcome; everything else is a plain `api_request`. Request bodies carry
/// patient parameters and never reach the log.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let is_calculation = path.ends_with("/calculate");
    match score_id(&path) {
        Some(id) if is_calculation => tracing::info!(
            score_id = %id,
            status = status.as_u16(),
            outcome = outcome(status),
            elapsed_ms,
            "score_calculation"
        ),
        Some(id) => tracing::info!(
            method = %method,
            score_id = %id,
            status = status.as_u16(),
            "api_request"
        ),
        None => tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "api_request"
        ),
    }

    response
}
