//! Property tests for the WGS-84 / GCJ-02 transform
//!
//! Inside the China box the forward transform moves every point and the
//! approximate inverse brings it back to within a few meters. Outside the box
//! both directions pass coordinates through untouched.

use coordshift_core::transform::{
    gcj02_to_wgs84, is_out_of_china, wgs84_to_gcj02, CHINA_MAX_LAT, CHINA_MAX_LNG,
    CHINA_MIN_LAT, CHINA_MIN_LNG,
};
use coordshift_core::{convert, CoordFrame, GeoPoint};
use proptest::prelude::*;

/// Points far enough from the box edges that the shifted point stays inside
fn interior_point() -> impl Strategy<Value = (f64, f64)> {
    (73.0f64..137.0, 1.5f64..55.0)
}

/// Points west, east, south or north of the box
fn exterior_point() -> impl Strategy<Value = (f64, f64)> {
    prop_oneof![
        (-180.0f64..CHINA_MIN_LNG, -90.0f64..90.0),
        (137.835f64..180.0, -90.0f64..90.0),
        (-180.0f64..180.0, -90.0f64..0.8292),
        (-180.0f64..180.0, 55.8272f64..90.0),
    ]
}

proptest! {
    #[test]
    fn prop_identity_outside_china((lng, lat) in exterior_point()) {
        prop_assert!(is_out_of_china(lng, lat));
        prop_assert_eq!(wgs84_to_gcj02(lng, lat), GeoPoint::new(lng, lat));
        prop_assert_eq!(gcj02_to_wgs84(lng, lat), GeoPoint::new(lng, lat));
    }

    #[test]
    fn prop_forward_moves_interior_points((lng, lat) in interior_point()) {
        let gcj = wgs84_to_gcj02(lng, lat);
        prop_assert_ne!(gcj, GeoPoint::new(lng, lat));
        // Offsets never exceed a couple of hundredths of a degree
        prop_assert!((gcj.lng - lng).abs() < 0.02);
        prop_assert!((gcj.lat - lat).abs() < 0.02);
    }

    #[test]
    fn prop_round_trip_is_bounded((lng, lat) in interior_point()) {
        let gcj = wgs84_to_gcj02(lng, lat);
        let back = gcj02_to_wgs84(gcj.lng, gcj.lat);

        prop_assert!((back.lng - lng).abs() <= 1e-4, "lng error {}", (back.lng - lng).abs());
        prop_assert!((back.lat - lat).abs() <= 1e-4, "lat error {}", (back.lat - lat).abs());
    }

    #[test]
    fn prop_deterministic((lng, lat) in interior_point()) {
        let first = wgs84_to_gcj02(lng, lat);
        let second = wgs84_to_gcj02(lng, lat);
        prop_assert_eq!(first.lng.to_bits(), second.lng.to_bits());
        prop_assert_eq!(first.lat.to_bits(), second.lat.to_bits());

        let inverse_first = gcj02_to_wgs84(lng, lat);
        let inverse_second = gcj02_to_wgs84(lng, lat);
        prop_assert_eq!(inverse_first.lng.to_bits(), inverse_second.lng.to_bits());
        prop_assert_eq!(inverse_first.lat.to_bits(), inverse_second.lat.to_bits());
    }

    #[test]
    fn prop_convert_same_frame_is_identity(lng in -180.0f64..180.0, lat in -90.0f64..90.0) {
        let point = GeoPoint::new(lng, lat);
        prop_assert_eq!(convert(point, CoordFrame::Wgs84, CoordFrame::Wgs84), point);
        prop_assert_eq!(convert(point, CoordFrame::Gcj02, CoordFrame::Gcj02), point);
    }
}

#[test]
fn test_box_constants() {
    assert!(!is_out_of_china(CHINA_MIN_LNG, CHINA_MIN_LAT));
    assert!(!is_out_of_china(CHINA_MAX_LNG, CHINA_MAX_LAT));
    assert!(is_out_of_china(72.003999, 30.0));
}

#[test]
fn test_reference_cities() {
    // (wgs84, gcj02) pairs produced by the reference formula
    let cases = [
        ((113.2644, 23.1291), (113.26972959210308, 23.126423339922844)),
        ((104.0665, 30.5723), (104.06900490567072, 30.569845540719605)),
        ((87.6168, 43.8256), (87.61964994946926, 43.82680539311119)),
        ((126.6424, 45.7567), (126.64836981630474, 45.75865110185797)),
    ];

    for ((lng, lat), (gcj_lng, gcj_lat)) in cases {
        let gcj = wgs84_to_gcj02(lng, lat);
        assert!((gcj.lng - gcj_lng).abs() < 1e-9, "{} vs {}", gcj.lng, gcj_lng);
        assert!((gcj.lat - gcj_lat).abs() < 1e-9, "{} vs {}", gcj.lat, gcj_lat);
    }
}

#[test]
fn test_degenerate_inputs_do_not_panic() {
    for (lng, lat) in [(0.0, 0.0), (-0.0, -0.0), (1e300, -1e300), (400.0, 100.0)] {
        assert_eq!(wgs84_to_gcj02(lng, lat), GeoPoint::new(lng, lat));
    }

    let nan = gcj02_to_wgs84(116.4, f64::NAN);
    assert!(nan.lat.is_nan());
}
