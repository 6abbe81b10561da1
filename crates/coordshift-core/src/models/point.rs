//! The longitude/latitude pair passed through every transform.

use crate::error::{CoordshiftError, Result};
use crate::transform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A geographic coordinate in decimal degrees, longitude first.
///
/// The frame the coordinate belongs to is not recorded on the value; callers
/// track it alongside (see [`CoordFrame`](crate::models::CoordFrame)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Treat this point as WGS-84 and shift it into GCJ-02
    pub fn to_gcj02(self) -> Self {
        transform::wgs84_to_gcj02(self.lng, self.lat)
    }

    /// Treat this point as GCJ-02 and approximate its WGS-84 position
    pub fn to_wgs84(self) -> Self {
        transform::gcj02_to_wgs84(self.lng, self.lat)
    }

    /// Whether the point lies outside the region where GCJ-02 applies
    pub fn is_out_of_china(self) -> bool {
        transform::is_out_of_china(self.lng, self.lat)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self::new(lng, lat)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lng, point.lat)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*},{:.*}", p, self.lng, p, self.lat),
            None => write!(f, "{},{}", self.lng, self.lat),
        }
    }
}

/// Parses `"lng,lat"`; surrounding whitespace is ignored.
impl FromStr for GeoPoint {
    type Err = CoordshiftError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| CoordshiftError::InvalidCoordinate {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (lng, lat) = s.split_once(',').ok_or_else(|| invalid("expected 'lng,lat'"))?;
        if lat.contains(',') {
            return Err(invalid("expected exactly two values"));
        }

        let lng: f64 = lng.trim().parse().map_err(|_| invalid("longitude is not a number"))?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid("latitude is not a number"))?;

        Ok(Self::new(lng, lat))
    }
}
