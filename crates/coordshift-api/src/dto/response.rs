use coordshift_core::models::{CoordFrame, GeoPoint};
use serde::Serialize;

/// Single-point conversion response
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub from: CoordFrame,
    pub to: CoordFrame,
    pub input: GeoPoint,
    pub output: GeoPoint,
    pub shifted: bool,
    pub offset_meters: f64,
}

/// Batch conversion response
#[derive(Debug, Serialize)]
pub struct BatchConvertResponse {
    pub from: CoordFrame,
    pub to: CoordFrame,
    pub count: usize,
    pub points: Vec<GeoPoint>,
}

/// China bounding-box check response
#[derive(Debug, Serialize)]
pub struct BoundsCheckResponse {
    pub lng: f64,
    pub lat: f64,
    pub out_of_china: bool,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "coordshift-api" }
    }
}
