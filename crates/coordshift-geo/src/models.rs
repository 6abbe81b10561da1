//! Point models for coordshift-geo.
//!
//! This module re-exports canonical types from `coordshift-core` and provides
//! conversions to/from the `geo` crate.

// Re-export canonical types from coordshift-core
pub use coordshift_core::models::{CoordFrame, GeoPoint};

/// Convert a GeoPoint to a geo::Point (x = longitude, y = latitude)
pub fn to_geo_point(point: GeoPoint) -> geo::Point<f64> {
    geo::Point::new(point.lng, point.lat)
}

/// Convert a geo::Coord to a GeoPoint
pub fn from_geo_coord(coord: geo::Coord<f64>) -> GeoPoint {
    GeoPoint::new(coord.x, coord.y)
}

/// Convert a GeoPoint to a geo::Coord
pub fn to_geo_coord(point: GeoPoint) -> geo::Coord<f64> {
    geo::Coord { x: point.lng, y: point.lat }
}
