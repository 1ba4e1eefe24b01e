use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use medcalc_api::router;

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn lists_every_score() {
    let (status, body) = get("/api/scores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 166);
    assert_eq!(body["scores"].as_array().unwrap().len(), 166);
}

#[tokio::test]
async fn filters_by_category() {
    let (_, body) = get("/api/scores?category=cardiology").await;
    assert_eq!(body["total"], 16);
    assert!(body["scores"]
        .as_array()
        .unwrap()
        .iter()
        .all(|s| s["specialty"] == "cardiology"));

    let (status, body) = get("/api/scores?category=surgery").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn search_takes_precedence_over_category() {
    let (_, body) = get("/api/scores?search=chads&category=neurology").await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["scores"][0]["id"], "chads2_score");
}

#[tokio::test]
async fn score_detail_and_missing_score() {
    let (status, body) = get("/api/scores/fisher_grade").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "fisher_grade");
    assert_eq!(body["specialty"], "neurology");

    let (status, body) = get("/api/scores/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "score not found: nope");
}

#[tokio::test]
async fn categories_are_sorted() {
    let (status, body) = get("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 19);
    assert_eq!(body["categories"][0], "anesthesiology");
    assert_eq!(body["categories"][18], "rheumatology");
}

#[tokio::test]
async fn validate_known_and_unknown() {
    let (status, body) = get("/api/scores/curb_65/validate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "score_id": "curb_65",
            "score_exists": true,
            "calculator_available": true,
            "status": "ready",
        })
    );

    let (status, _) = get("/api/scores/nope/validate").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn calculate_returns_flat_response() {
    let (status, body) = post_json(
        "/api/fisher_grade/calculate",
        json!({"ct_findings": "diffuse_thin"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 2);
    assert_eq!(body["unit"], "grade");
    assert_eq!(body["stage"], "Grade 2");
    assert!(body["interpretation"].is_string());
}

#[tokio::test]
async fn calculate_rejects_bad_parameters() {
    let (status, body) = post_json(
        "/api/fisher_grade/calculate",
        json!({"ct_findings": "everywhere"}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("ct_findings"));

    let (status, _) = post_json("/api/fisher_grade/calculate", json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn calculate_unknown_score_is_not_found() {
    let (status, body) = post_json("/api/not_a_score/calculate", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "score not found: not_a_score");
}
