//! Tests for the stateful coordinate

extern crate std;

use crate::coordinate::Coordinate;
use crate::errors::UtmError;

#[test]
fn test_defaults() {
    let coordinate = Coordinate::new();
    std::assert_eq!(coordinate.latitude(), 0.0);
    std::assert_eq!(coordinate.longitude(), 0.0);
    std::assert_eq!(coordinate.easting(), 0.0);
    std::assert_eq!(coordinate.northing(), 0.0);
    std::assert_eq!(coordinate.zone(), 31);
    std::assert!(coordinate.is_northern_hemisphere());
}

#[test]
fn test_invalid_latitude_keeps_previous_value() {
    let mut coordinate = Coordinate::new();
    coordinate.set_latitude(41.3851).unwrap();

    for bad in [180.0, -180.0, 90.5, 1e9, f64::NAN] {
        let err = coordinate.set_latitude(bad).unwrap_err();
        std::assert!(matches!(err, UtmError::InvalidRange { field: "latitude", .. }));
        std::assert_eq!(coordinate.latitude(), 41.3851);
    }
}

#[test]
fn test_invalid_longitude_keeps_previous_value() {
    let mut coordinate = Coordinate::from_geodetic(10.0, 20.0).unwrap();
    let err = coordinate.set_longitude(-180.5).unwrap_err();
    std::assert!(matches!(err, UtmError::InvalidRange { field: "longitude", min, max, .. } if min == -180.0 && max == 180.0));
    std::assert_eq!(coordinate.longitude(), 20.0);

    // Longitudes beyond 90 are valid
    coordinate.set_longitude(151.2).unwrap();
    std::assert_eq!(coordinate.longitude(), 151.2);
}

#[test]
fn test_invalid_zone_keeps_previous_value() {
    let mut coordinate = Coordinate::new();
    std::assert!(matches!(coordinate.set_zone(0), Err(UtmError::InvalidZone(0))));
    std::assert!(matches!(coordinate.set_zone(61), Err(UtmError::InvalidZone(61))));
    std::assert_eq!(coordinate.zone(), 31);
    coordinate.set_zone(18).unwrap();
    std::assert_eq!(coordinate.zone(), 18);
}

#[test]
fn test_to_utm_recomputes_zone() {
    let mut coordinate = Coordinate::from_geodetic(40.7128, -74.006).unwrap();
    coordinate.set_zone(31).unwrap();

    let utm = coordinate.to_utm().unwrap();
    std::assert_eq!(utm.zone(), 18);
    std::assert_eq!(coordinate.zone(), 18);
    std::assert_eq!(coordinate.easting(), utm.easting());
    std::assert_eq!(coordinate.northing(), utm.northing());
}

#[test]
fn test_state_round_trip() {
    let mut coordinate = Coordinate::from_utm(334368.634, 6250948.346, 56, false).unwrap();
    let geodetic = coordinate.to_geodetic().unwrap();
    std::assert_eq!(geodetic.zone(), 56);
    std::assert!((geodetic.latitude() + 33.8688).abs() < 1e-6);
    std::assert!((geodetic.longitude() - 151.2093).abs() < 1e-6);
    std::assert_eq!(coordinate.latitude(), geodetic.latitude());

    let utm = coordinate.to_utm().unwrap();
    std::assert!((utm.easting() - 334368.634).abs() < 1e-3);
    std::assert!((utm.northing() - 6250948.346).abs() < 1e-3);
    std::assert!(!coordinate.is_northern_hemisphere());
}

#[test]
fn test_hemisphere_flag_drives_inverse() {
    let mut coordinate = Coordinate::from_utm(500_000.0, 5_000_000.0, 31, true).unwrap();
    let north = coordinate.to_geodetic().unwrap();

    coordinate.set_northern_hemisphere(false);
    let south = coordinate.to_geodetic().unwrap();

    std::assert!(north.latitude() > 0.0);
    std::assert!(south.latitude() < 0.0);
}

#[test]
fn test_failed_conversion_leaves_state_untouched() {
    let mut coordinate = Coordinate::from_geodetic(90.0, 3.0).unwrap();
    coordinate.set_easting(123_456.0).unwrap();
    std::assert!(coordinate.to_utm().is_err());
    std::assert_eq!(coordinate.easting(), 123_456.0);
}

#[test]
fn test_utm_setters_validate() {
    let mut coordinate = Coordinate::new();
    std::assert!(coordinate.set_easting(-1.0).is_err());
    std::assert!(coordinate.set_northing(f64::INFINITY).is_err());
    coordinate.set_northing(4_581_837.85).unwrap();
    std::assert_eq!(coordinate.northing(), 4_581_837.85);
}
