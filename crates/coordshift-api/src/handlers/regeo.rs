use std::sync::Arc;

use axum::{extract::State, Json};
use coordshift_core::models::{GeoPoint, ReverseGeocode};
use coordshift_geo::validation::validate_point;

use crate::dto::PointQuery;
use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

/// Reverse geocode a WGS-84 coordinate
pub async fn reverse_geocode(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<PointQuery>,
) -> Result<Json<ReverseGeocode>, ApiError> {
    let geocoder = state.geocoder.as_ref().ok_or_else(|| {
        ApiError::service_unavailable("Reverse geocoding is not configured")
            .with_details("Set AMAP_KEY or COORDSHIFT_AMAP_KEY and restart the server")
    })?;

    let point = GeoPoint::new(query.lng, query.lat);
    validate_point(&point).into_result()?;

    tracing::info!(provider = geocoder.provider_name(), point = %point, "Reverse geocoding");

    let result = geocoder.reverse_geocode(point).await.map_err(|e| {
        tracing::error!(error = %e, "Reverse geocoding failed");
        ApiError::from(e)
    })?;

    Ok(Json(result))
}
