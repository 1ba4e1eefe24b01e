use axum::extract::{Path, Query};
use axum::Json;
use serde::{Deserialize, Serialize};

use medcalc_scores::{registry, ScoreInfo, Specialty};

use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    category: Option<String>,
    search: Option<String>,
}

#[derive(Serialize)]
pub struct ScoreList {
    scores: Vec<ScoreInfo>,
    total: usize,
}

#[derive(Serialize)]
pub struct CategoryList {
    categories: Vec<Specialty>,
    total: usize,
}

#[derive(Serialize)]
pub struct Validation {
    score_id: String,
    score_exists: bool,
    calculator_available: bool,
    status: &'static str,
}

/// `search` wins over `category`; an unrecognised category lists nothing.
pub async fn list_scores(Query(params): Query<ListParams>) -> Json<ScoreList> {
    let search = params.search.filter(|s| !s.trim().is_empty());
    let category = params.category.filter(|c| !c.trim().is_empty());

    let scores = match (search, category) {
        (Some(term), _) => registry::search(&term),
        (None, Some(category)) => Specialty::parse(&category)
            .map(registry::by_specialty)
            .unwrap_or_default(),
        (None, None) => registry::all(),
    };

    Json(ScoreList { total: scores.len(), scores })
}

pub async fn get_score(Path(id): Path<String>) -> Result<Json<ScoreInfo>, ApiError> {
    registry::find(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("score not found: {id}")))
}

pub async fn list_categories() -> Json<CategoryList> {
    let categories = registry::specialties();
    Json(CategoryList { total: categories.len(), categories })
}

/// Every registered score carries its calculator, so a known id is always ready.
pub async fn validate_score(Path(id): Path<String>) -> Result<Json<Validation>, ApiError> {
    if registry::find(&id).is_none() {
        return Err(ApiError::NotFound(format!("score not found: {id}")));
    }
    Ok(Json(Validation {
        score_id: id,
        score_exists: true,
        calculator_available: true,
        status: "ready",
    }))
}
