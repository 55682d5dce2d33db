//! Tests for the ellipsoid and arc series

extern crate std;

use std::f64::consts::FRAC_PI_2;
use crate::coordinate::Ellipsoid;
use crate::errors::UtmError;

#[test]
fn test_wgs84_axes() {
    let wgs84 = Ellipsoid::default();
    std::assert_eq!(wgs84.semi_major_axis(), 6378137.0);
    std::assert_eq!(wgs84.semi_minor_axis(), 6356752.314);
}

#[test]
fn test_meridian_arc_at_equator_is_zero() {
    std::assert_eq!(Ellipsoid::WGS84.meridian_arc_length(0.0), 0.0);
}

#[test]
fn test_quarter_meridian_length() {
    // Equator to pole on WGS84 is about 10,001,965.7 m
    let quarter = Ellipsoid::WGS84.meridian_arc_length(FRAC_PI_2);
    std::assert!((quarter - 10_001_965.7).abs() < 1.0, "quarter meridian {}", quarter);
}

#[test]
fn test_footpoint_inverts_arc_length() {
    let ellipsoid = Ellipsoid::WGS84;
    for degrees in [-75.0_f64, -30.0, 0.0, 12.5, 41.3851, 80.0] {
        let phi = degrees.to_radians();
        let y = ellipsoid.meridian_arc_length(phi);
        let back = ellipsoid.footpoint_latitude(y);
        std::assert!((back - phi).abs() < 1e-9, "{} -> {} -> {}", phi, y, back);
    }
}

#[test]
fn test_series_coefficients_differ_between_directions() {
    let forward = Ellipsoid::WGS84.arc_series();
    let inverse = Ellipsoid::WGS84.footpoint_series();
    std::assert_eq!(forward.alpha, inverse.alpha);
    std::assert!(forward.beta < 0.0 && inverse.beta > 0.0);
    std::assert!(forward.gamma != inverse.gamma);
}

#[test]
fn test_zero_axis_is_rejected() {
    let err = Ellipsoid::new(6378137.0, 0.0).unwrap_err();
    std::assert!(matches!(err, UtmError::DivisionByZero(_)));
}

#[test]
fn test_inverted_axes_are_rejected() {
    let err = Ellipsoid::new(6356752.314, 6378137.0).unwrap_err();
    std::assert!(matches!(err, UtmError::ConfigError(_)));
}
