//! Frame conversion for geometries and GeoJSON documents

use crate::models::{from_geo_coord, to_geo_coord, CoordFrame, GeoPoint};
use coordshift_core::error::{CoordshiftError, Result};
use coordshift_core::transform::convert;
use geo::MapCoords;
use geojson::{Feature, GeoJson, Geometry, Value};
use serde::Serialize;

/// Counts collected while converting a GeoJSON document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransformSummary {
    /// Positions visited
    pub coordinates: usize,
    /// Positions whose value changed
    pub shifted: usize,
    /// Positions left as they were (outside the China box, same frame, or malformed)
    pub passed_through: usize,
}

/// Convert every point of a slice
pub fn transform_points(points: &[GeoPoint], from: CoordFrame, to: CoordFrame) -> Vec<GeoPoint> {
    points.iter().map(|p| convert(*p, from, to)).collect()
}

/// Convert every coordinate of a `geo` geometry
pub fn transform_geometry(
    geometry: &geo::Geometry<f64>,
    from: CoordFrame,
    to: CoordFrame,
) -> geo::Geometry<f64> {
    geometry.map_coords(move |coord| to_geo_coord(convert(from_geo_coord(coord), from, to)))
}

/// Parse a GeoJSON document
pub fn parse_geojson(input: &str) -> Result<GeoJson> {
    input
        .parse::<GeoJson>()
        .map_err(|e| CoordshiftError::Serialization(format!("Invalid GeoJSON: {}", e)))
}

/// Convert every position of a GeoJSON document.
///
/// Only the first two ordinates of a position are touched; altitude and any
/// further ordinates are kept. All `bbox` members are dropped since they no
/// longer bound the shifted geometry.
pub fn transform_geojson(
    mut geojson: GeoJson,
    from: CoordFrame,
    to: CoordFrame,
) -> (GeoJson, TransformSummary) {
    let mut summary = TransformSummary::default();

    match &mut geojson {
        GeoJson::Geometry(geometry) => transform_geojson_geometry(geometry, from, to, &mut summary),
        GeoJson::Feature(feature) => transform_feature(feature, from, to, &mut summary),
        GeoJson::FeatureCollection(collection) => {
            collection.bbox = None;
            for feature in collection.features.iter_mut() {
                transform_feature(feature, from, to, &mut summary);
            }
        }
    }

    tracing::debug!(
        from = %from,
        to = %to,
        coordinates = summary.coordinates,
        shifted = summary.shifted,
        "Transformed GeoJSON document"
    );

    (geojson, summary)
}

fn transform_feature(
    feature: &mut Feature,
    from: CoordFrame,
    to: CoordFrame,
    summary: &mut TransformSummary,
) {
    feature.bbox = None;
    if let Some(geometry) = feature.geometry.as_mut() {
        transform_geojson_geometry(geometry, from, to, summary);
    }
}

fn transform_geojson_geometry(
    geometry: &mut Geometry,
    from: CoordFrame,
    to: CoordFrame,
    summary: &mut TransformSummary,
) {
    geometry.bbox = None;
    match &mut geometry.value {
        Value::Point(position) => transform_position(position, from, to, summary),
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            for position in positions.iter_mut() {
                transform_position(position, from, to, summary);
            }
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            for position in lines.iter_mut().flatten() {
                transform_position(position, from, to, summary);
            }
        }
        Value::MultiPolygon(polygons) => {
            for position in polygons.iter_mut().flatten().flatten() {
                transform_position(position, from, to, summary);
            }
        }
        Value::GeometryCollection(geometries) => {
            for inner in geometries.iter_mut() {
                transform_geojson_geometry(inner, from, to, summary);
            }
        }
    }
}

fn transform_position(
    position: &mut [f64],
    from: CoordFrame,
    to: CoordFrame,
    summary: &mut TransformSummary,
) {
    summary.coordinates += 1;

    if position.len() < 2 {
        summary.passed_through += 1;
        return;
    }

    let input = GeoPoint::new(position[0], position[1]);
    let output = convert(input, from, to);

    if output == input {
        summary.passed_through += 1;
    } else {
        summary.shifted += 1;
        position[0] = output.lng;
        position[1] = output.lat;
    }
}
