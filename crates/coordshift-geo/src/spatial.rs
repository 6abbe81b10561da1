use crate::models::{to_geo_point, CoordFrame, GeoPoint};
use coordshift_core::transform::{
    convert, gcj02_to_wgs84, wgs84_to_gcj02, CHINA_MAX_LAT, CHINA_MAX_LNG, CHINA_MIN_LAT,
    CHINA_MIN_LNG,
};
use geo::{coord, Distance, Haversine, Rect};

/// The bounding box in which GCJ-02 differs from WGS-84
pub fn china_bounds() -> Rect<f64> {
    Rect::new(
        coord! { x: CHINA_MIN_LNG, y: CHINA_MIN_LAT },
        coord! { x: CHINA_MAX_LNG, y: CHINA_MAX_LAT },
    )
}

/// Great-circle distance between two points in meters
///
/// Both points must be in the same frame for the result to mean anything.
pub fn offset_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    Haversine.distance(to_geo_point(a), to_geo_point(b))
}

/// Distance in meters a point moves when converted between frames
pub fn shift_distance(point: GeoPoint, from: CoordFrame, to: CoordFrame) -> f64 {
    offset_distance(point, convert(point, from, to))
}

/// Error in meters left by a WGS-84 -> GCJ-02 -> WGS-84 round trip
pub fn round_trip_error(point: GeoPoint) -> f64 {
    let gcj = wgs84_to_gcj02(point.lng, point.lat);
    let back = gcj02_to_wgs84(gcj.lng, gcj.lat);
    offset_distance(point, back)
}
