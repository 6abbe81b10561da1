//! Input validation for coordinates arriving from outside
//!
//! The transform accepts any `f64`; these checks belong at the API and CLI
//! boundaries, where a swapped or garbled coordinate should be reported
//! rather than silently passed through.

use crate::models::GeoPoint;
use coordshift_core::error::{CoordshiftError, Result};
use geojson::{GeoJson, Geometry, Value};

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        for error in other.errors {
            self.add_error(error.location, error.reason);
        }
    }

    /// Convert into a `Result`, reporting the first error
    pub fn into_result(self) -> Result<()> {
        match self.errors.into_iter().next() {
            None => Ok(()),
            Some(error) => {
                Err(CoordshiftError::InvalidCoordinate { input: error.location, reason: error.reason })
            }
        }
    }
}

/// Validate a single point
pub fn validate_point(point: &GeoPoint) -> ValidationResult {
    validate_lng_lat(point.lng, point.lat, format!("Point({}, {})", point.lng, point.lat))
}

/// Validate a list of points, labelling errors by index
pub fn validate_points(points: &[GeoPoint]) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for (i, point) in points.iter().enumerate() {
        result.merge(validate_lng_lat(point.lng, point.lat, format!("points[{}]", i)));
    }
    result
}

/// Validate every position of a GeoJSON document
pub fn validate_geojson(geojson: &GeoJson) -> ValidationResult {
    let mut result = ValidationResult::valid();

    match geojson {
        GeoJson::Geometry(geometry) => validate_geometry(geometry, "geometry", &mut result),
        GeoJson::Feature(feature) => {
            if let Some(geometry) = &feature.geometry {
                validate_geometry(geometry, "feature.geometry", &mut result);
            }
        }
        GeoJson::FeatureCollection(collection) => {
            for (i, feature) in collection.features.iter().enumerate() {
                if let Some(geometry) = &feature.geometry {
                    validate_geometry(geometry, &format!("features[{}].geometry", i), &mut result);
                }
            }
        }
    }

    result
}

fn validate_geometry(geometry: &Geometry, location: &str, result: &mut ValidationResult) {
    match &geometry.value {
        Value::Point(position) => validate_position(position, location, result),
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            for (i, position) in positions.iter().enumerate() {
                validate_position(position, &format!("{}[{}]", location, i), result);
            }
        }
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            for (i, line) in lines.iter().enumerate() {
                for (j, position) in line.iter().enumerate() {
                    validate_position(position, &format!("{}[{}][{}]", location, i, j), result);
                }
            }
        }
        Value::MultiPolygon(polygons) => {
            for (i, polygon) in polygons.iter().enumerate() {
                for (j, ring) in polygon.iter().enumerate() {
                    for (k, position) in ring.iter().enumerate() {
                        validate_position(
                            position,
                            &format!("{}[{}][{}][{}]", location, i, j, k),
                            result,
                        );
                    }
                }
            }
        }
        Value::GeometryCollection(geometries) => {
            for (i, inner) in geometries.iter().enumerate() {
                validate_geometry(inner, &format!("{}.geometries[{}]", location, i), result);
            }
        }
    }
}

fn validate_position(position: &[f64], location: &str, result: &mut ValidationResult) {
    if position.len() < 2 {
        result.add_error(
            location.to_string(),
            format!("Position must have at least 2 values, found {}", position.len()),
        );
        return;
    }
    result.merge(validate_lng_lat(position[0], position[1], location.to_string()));
}

fn validate_lng_lat(lng: f64, lat: f64, location: String) -> ValidationResult {
    let mut result = ValidationResult::valid();

    // Check for NaN or infinite coordinates
    if !lng.is_finite() || !lat.is_finite() {
        result.add_error(location, "Coordinates must be finite".to_string());
        return result;
    }

    if !(-180.0..=180.0).contains(&lng) {
        result.add_error(
            location.clone(),
            format!("Longitude {} is outside [-180, 180]", lng),
        );
    }

    if !(-90.0..=90.0).contains(&lat) {
        result.add_error(location, format!("Latitude {} is outside [-90, 90]", lat));
    }

    result
}
