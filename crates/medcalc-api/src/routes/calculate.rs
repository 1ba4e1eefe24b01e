use axum::extract::Path;
use axum::Json;
use serde_json::{Map, Value};

use medcalc_core::CalculatorResponse;
use medcalc_scores::registry;

use crate::error::ApiError;

pub async fn calculate(
    Path(id): Path<String>,
    Json(params): Json<Map<String, Value>>,
) -> Result<Json<CalculatorResponse>, ApiError> {
    let response = registry::calculate(&id, &params)?;
    Ok(Json(response))
}
