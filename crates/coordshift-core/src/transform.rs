//! WGS-84 <-> GCJ-02 coordinate transform
//!
//! GCJ-02 displaces a true position by a deterministic, non-linear offset of
//! tens to hundreds of meters. The offset formulas are empirical and have no
//! closed-form inverse, so [`gcj02_to_wgs84`] is an approximation that leaves
//! a residual error of a few meters.
//!
//! Outside the coarse bounding box returned by [`is_out_of_china`] both frames
//! are treated as identical and every function here is the identity.
//!
//! The correction polynomials must keep their exact operation order:
//! floating-point arithmetic is not associative and published GCJ-02
//! fixtures are compared at full double precision.

use crate::models::{CoordFrame, GeoPoint};

/// The π literal the offset formulas were fitted against.
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI: f64 = 3.1415926535897932384626;

/// Semi-major axis of the Krasovsky 1940 ellipsoid, in meters.
pub const A: f64 = 6378245.0;

/// Eccentricity squared of the Krasovsky 1940 ellipsoid.
#[allow(clippy::excessive_precision)]
pub const EE: f64 = 0.00669342162296594323;

/// Western edge of the GCJ-02 bounding box (degrees longitude).
pub const CHINA_MIN_LNG: f64 = 72.004;
/// Eastern edge of the GCJ-02 bounding box (degrees longitude).
pub const CHINA_MAX_LNG: f64 = 137.8347;
/// Southern edge of the GCJ-02 bounding box (degrees latitude).
pub const CHINA_MIN_LAT: f64 = 0.8293;
/// Northern edge of the GCJ-02 bounding box (degrees latitude).
pub const CHINA_MAX_LAT: f64 = 55.8271;

/// Whether `(lng, lat)` falls outside the box where GCJ-02 applies.
///
/// The edges themselves count as inside.
pub fn is_out_of_china(lng: f64, lat: f64) -> bool {
    (lng < CHINA_MIN_LNG || lng > CHINA_MAX_LNG) || (lat < CHINA_MIN_LAT || lat > CHINA_MAX_LAT)
}

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret =
        -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lon(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// GCJ-02 offset at `(lng, lat)` in degrees, as `(d_lng, d_lat)`.
pub(crate) fn offset(lng: f64, lat: f64) -> (f64, f64) {
    let mut d_lat = transform_lat(lng - 105.0, lat - 35.0);
    let mut d_lon = transform_lon(lng - 105.0, lat - 35.0);

    let rad_lat = lat / 180.0 * PI;
    let mut magic = rad_lat.sin();
    magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    d_lon = (d_lon * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);

    (d_lon, d_lat)
}

/// Shift a WGS-84 coordinate into GCJ-02.
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> GeoPoint {
    if is_out_of_china(lng, lat) {
        return GeoPoint::new(lng, lat);
    }

    let (d_lon, d_lat) = offset(lng, lat);
    GeoPoint::new(lng + d_lon, lat + d_lat)
}

/// Approximate the WGS-84 coordinate behind a GCJ-02 coordinate.
///
/// The offset is evaluated at the GCJ-02 input rather than at the unknown
/// true position and then reflected back, so a round trip through
/// [`wgs84_to_gcj02`] is off by a few meters.
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> GeoPoint {
    if is_out_of_china(lng, lat) {
        return GeoPoint::new(lng, lat);
    }

    let (d_lon, d_lat) = offset(lng, lat);
    let mg_lng = lng + d_lon;
    let mg_lat = lat + d_lat;
    GeoPoint::new(lng * 2.0 - mg_lng, lat * 2.0 - mg_lat)
}

/// Convert `point` from one frame to another.
pub fn convert(point: GeoPoint, from: CoordFrame, to: CoordFrame) -> GeoPoint {
    match (from, to) {
        (CoordFrame::Wgs84, CoordFrame::Gcj02) => wgs84_to_gcj02(point.lng, point.lat),
        (CoordFrame::Gcj02, CoordFrame::Wgs84) => gcj02_to_wgs84(point.lng, point.lat),
        (CoordFrame::Wgs84, CoordFrame::Wgs84) | (CoordFrame::Gcj02, CoordFrame::Gcj02) => point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIANANMEN: (f64, f64) = (116.3975, 39.9087);
    const TIANANMEN_GCJ: (f64, f64) = (116.40374357265176, 39.91010349934476);

    #[test]
    fn test_pi_literal_matches_std() {
        assert_eq!(PI, std::f64::consts::PI);
    }

    #[test]
    fn test_out_of_china_fixtures() {
        assert!(is_out_of_china(0.0, 0.0));
        assert!(!is_out_of_china(116.4, 39.9));
        assert!(is_out_of_china(-122.4194, 37.7749));
        assert!(is_out_of_china(139.6917, 35.6895));
    }

    #[test]
    fn test_box_edges_are_inside() {
        assert!(!is_out_of_china(72.004, 30.0));
        assert!(is_out_of_china(72.003999, 30.0));
        assert!(!is_out_of_china(137.8347, 30.0));
        assert!(is_out_of_china(137.834701, 30.0));
        assert!(!is_out_of_china(100.0, 0.8293));
        assert!(is_out_of_china(100.0, 0.8292));
        assert!(!is_out_of_china(100.0, 55.8271));
        assert!(is_out_of_china(100.0, 55.8272));
    }

    #[test]
    fn test_forward_golden_value() {
        let gcj = wgs84_to_gcj02(TIANANMEN.0, TIANANMEN.1);
        assert!((gcj.lng - TIANANMEN_GCJ.0).abs() < 1e-9);
        assert!((gcj.lat - TIANANMEN_GCJ.1).abs() < 1e-9);

        let shanghai = wgs84_to_gcj02(121.4737, 31.2304);
        assert!((shanghai.lng - 121.47822305927693).abs() < 1e-9);
        assert!((shanghai.lat - 31.22845773757727).abs() < 1e-9);
    }

    #[test]
    fn test_forward_offset_magnitude() {
        let gcj = wgs84_to_gcj02(TIANANMEN.0, TIANANMEN.1);
        let d_lng = (gcj.lng - TIANANMEN.0).abs();
        let d_lat = (gcj.lat - TIANANMEN.1).abs();

        assert!(d_lng > 0.0015 && d_lng < 0.0065, "d_lng = {}", d_lng);
        assert!(d_lat > 0.0010 && d_lat < 0.0065, "d_lat = {}", d_lat);
    }

    #[test]
    fn test_inverse_golden_value() {
        let wgs = gcj02_to_wgs84(TIANANMEN_GCJ.0, TIANANMEN_GCJ.1);
        assert!((wgs.lng - 116.3974996586592).abs() < 1e-9);
        assert!((wgs.lat - 39.90869941235242).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_is_close_but_not_exact() {
        let gcj = wgs84_to_gcj02(TIANANMEN.0, TIANANMEN.1);
        let back = gcj02_to_wgs84(gcj.lng, gcj.lat);

        assert!((back.lng - TIANANMEN.0).abs() < 1e-4);
        assert!((back.lat - TIANANMEN.1).abs() < 1e-4);
        assert_ne!(back, GeoPoint::new(TIANANMEN.0, TIANANMEN.1));
    }

    #[test]
    fn test_identity_outside_china() {
        for (lng, lat) in [(0.0, 0.0), (-0.1278, 51.5074), (151.2093, -33.8688), (72.0, 30.0)] {
            assert_eq!(wgs84_to_gcj02(lng, lat), GeoPoint::new(lng, lat));
            assert_eq!(gcj02_to_wgs84(lng, lat), GeoPoint::new(lng, lat));
        }
    }

    #[test]
    fn test_convert_dispatch() {
        let point = GeoPoint::new(TIANANMEN.0, TIANANMEN.1);

        assert_eq!(convert(point, CoordFrame::Wgs84, CoordFrame::Wgs84), point);
        assert_eq!(convert(point, CoordFrame::Gcj02, CoordFrame::Gcj02), point);
        assert_eq!(
            convert(point, CoordFrame::Wgs84, CoordFrame::Gcj02),
            wgs84_to_gcj02(point.lng, point.lat)
        );
        assert_eq!(
            convert(point, CoordFrame::Gcj02, CoordFrame::Wgs84),
            gcj02_to_wgs84(point.lng, point.lat)
        );
        assert_eq!(point.to_gcj02(), wgs84_to_gcj02(point.lng, point.lat));
        assert_eq!(point.to_wgs84(), gcj02_to_wgs84(point.lng, point.lat));
    }

    #[test]
    fn test_non_finite_input_propagates() {
        let nan = wgs84_to_gcj02(f64::NAN, 39.9);
        assert!(nan.lng.is_nan());

        let inf = wgs84_to_gcj02(f64::INFINITY, 39.9);
        assert_eq!(inf, GeoPoint::new(f64::INFINITY, 39.9));
    }
}
