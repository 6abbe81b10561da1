use coordshift_core::models::GeoPoint;
use serde::Deserialize;

/// Query string for single-point conversion
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    pub lng: f64,
    pub lat: f64,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Batch conversion request body
#[derive(Debug, Deserialize)]
pub struct BatchConvertRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub points: Vec<GeoPoint>,
}

/// Query string carrying only a coordinate
#[derive(Debug, Deserialize)]
pub struct PointQuery {
    pub lng: f64,
    pub lat: f64,
}

/// Query string carrying only the frame pair
#[derive(Debug, Default, Deserialize)]
pub struct FrameQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}
