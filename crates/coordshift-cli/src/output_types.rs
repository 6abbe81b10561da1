use coordshift_core::models::{CoordFrame, GeoPoint};
use coordshift_geo::transform::TransformSummary;
use serde::Serialize;
use tabled::Tabled;

/// Output for convert command
#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    pub from: CoordFrame,
    pub to: CoordFrame,
    pub input: GeoPoint,
    pub output: GeoPoint,
    pub shifted: bool,
    pub offset_meters: f64,
}

/// Output for check command
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub lng: f64,
    pub lat: f64,
    pub out_of_china: bool,
}

/// Output for roundtrip command
#[derive(Debug, Serialize)]
pub struct RoundtripOutput {
    pub input: GeoPoint,
    pub gcj02: GeoPoint,
    pub recovered: GeoPoint,
    pub error_lng: f64,
    pub error_lat: f64,
    pub error_meters: f64,
}

/// Output for batch command
#[derive(Debug, Serialize)]
pub struct BatchOutput {
    pub from: CoordFrame,
    pub to: CoordFrame,
    pub count: usize,
    pub points: Vec<BatchItem>,
}

#[derive(Debug, Serialize)]
pub struct BatchItem {
    pub line: usize,
    pub input: GeoPoint,
    pub output: GeoPoint,
}

/// Output for geojson command when the document is written to a file
#[derive(Debug, Serialize)]
pub struct GeojsonOutput {
    pub input: String,
    pub output: String,
    pub from: CoordFrame,
    pub to: CoordFrame,
    pub summary: TransformSummary,
}

/// Row of the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
