use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{BatchConvertRequest, BatchConvertResponse, ConvertQuery, ConvertResponse};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::services::ConvertService;
use crate::state::AppState;

pub async fn convert_point(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ConvertQuery>,
) -> Result<Json<ConvertResponse>, ApiError> {
    tracing::debug!(lng = query.lng, lat = query.lat, "Converting point");

    let response = ConvertService::convert_point(&state, &query)?;

    Ok(Json(response))
}

pub async fn convert_batch(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<BatchConvertRequest>,
) -> Result<Json<BatchConvertResponse>, ApiError> {
    tracing::info!(count = request.points.len(), "Processing batch conversion");

    let response = ConvertService::convert_batch(&state, &request)?;

    Ok(Json(response))
}
