use std::sync::Arc;

use axum::{extract::State, Json};
use geojson::GeoJson;

use crate::dto::FrameQuery;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::services::ConvertService;
use crate::state::AppState;

pub async fn convert_geojson(
    State(state): State<Arc<AppState>>,
    ApiQuery(frames): ApiQuery<FrameQuery>,
    ApiJson(geojson): ApiJson<GeoJson>,
) -> Result<Json<GeoJson>, ApiError> {
    let converted = ConvertService::convert_geojson(
        &state,
        frames.from.as_deref(),
        frames.to.as_deref(),
        geojson,
    )?;

    Ok(Json(converted))
}
