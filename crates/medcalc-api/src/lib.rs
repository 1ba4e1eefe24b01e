//! medcalc-api
//!
//! HTTP surface over the calculator registry: catalog browsing and a generic
//! `POST /api/{id}/calculate` endpoint.

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
mod routes;

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/scores", get(routes::scores::list_scores))
        .route("/api/scores/{id}", get(routes::scores::get_score))
        .route("/api/scores/{id}/validate", get(routes::scores::validate_score))
        .route("/api/categories", get(routes::scores::list_categories))
        .route("/api/{id}/calculate", post(routes::calculate::calculate))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
}
