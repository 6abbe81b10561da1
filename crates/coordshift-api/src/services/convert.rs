use coordshift_core::models::{CoordFrame, GeoPoint};
use coordshift_core::transform::convert;
use coordshift_geo::spatial::offset_distance;
use coordshift_geo::transform::{transform_geojson, transform_points};
use coordshift_geo::validation::{validate_geojson, validate_point, validate_points};
use geojson::GeoJson;

use crate::dto::{BatchConvertRequest, BatchConvertResponse, ConvertQuery, ConvertResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Service for converting coordinates between frames
pub struct ConvertService;

impl ConvertService {
    /// Resolve requested frames, falling back to the configured defaults
    pub fn resolve_frames(
        state: &AppState,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<(CoordFrame, CoordFrame), ApiError> {
        let from = match from {
            Some(s) => s.parse::<CoordFrame>()?,
            None => state.default_from,
        };
        let to = match to {
            Some(s) => s.parse::<CoordFrame>()?,
            None => state.default_to,
        };
        Ok((from, to))
    }

    /// Convert a single point
    pub fn convert_point(state: &AppState, query: &ConvertQuery) -> Result<ConvertResponse, ApiError> {
        let (from, to) =
            Self::resolve_frames(state, query.from.as_deref(), query.to.as_deref())?;

        let input = GeoPoint::new(query.lng, query.lat);
        validate_point(&input).into_result()?;

        let output = convert(input, from, to);

        Ok(ConvertResponse {
            from,
            to,
            input,
            output,
            shifted: output != input,
            offset_meters: offset_distance(input, output),
        })
    }

    /// Convert a list of points
    pub fn convert_batch(
        state: &AppState,
        request: &BatchConvertRequest,
    ) -> Result<BatchConvertResponse, ApiError> {
        let (from, to) =
            Self::resolve_frames(state, request.from.as_deref(), request.to.as_deref())?;

        validate_points(&request.points).into_result()?;

        let points = transform_points(&request.points, from, to);

        Ok(BatchConvertResponse { from, to, count: points.len(), points })
    }

    /// Convert a GeoJSON document
    pub fn convert_geojson(
        state: &AppState,
        from: Option<&str>,
        to: Option<&str>,
        geojson: GeoJson,
    ) -> Result<GeoJson, ApiError> {
        let (from, to) = Self::resolve_frames(state, from, to)?;

        validate_geojson(&geojson).into_result()?;

        let (converted, summary) = transform_geojson(geojson, from, to);

        tracing::info!(
            from = %from,
            to = %to,
            coordinates = summary.coordinates,
            shifted = summary.shifted,
            passed_through = summary.passed_through,
            "Converted GeoJSON document"
        );

        Ok(converted)
    }
}
