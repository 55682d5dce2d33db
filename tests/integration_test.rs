//! Integration tests for the public conversion API and the CLI commands

extern crate std;

use std::f64::consts::PI;

use log::LevelFilter;

use utmkit::commands::{build_cli, Command, CommandFactory, ToGeodeticCommand, ToUtmCommand, UtmkitCommandFactory};
use utmkit::utils::coordinate_utils::{parse_coordinate_pair, resolve_utm_zone};
use utmkit::utils::logger::Logger;
use utmkit::{degrees_to_radians, radians_to_degrees, to_geodetic, to_utm};
use utmkit::{Coordinate, ConverterConfig, GeodeticPoint, UtmError, UtmTransformer};

/// Route library log output through the test harness
fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Debug)
        .try_init();
}

#[test]
fn test_complete_conversion_workflow() {
    init_logging();
    let point = GeodeticPoint::new(41.3851, 2.1734).unwrap();
    let utm = to_utm(&point).unwrap();
    std::assert_eq!(utm.zone(), 31);
    std::assert!(utm.easting() > 430_000.0 && utm.easting() < 432_000.0);
    std::assert!(utm.northing() > 4_581_000.0 && utm.northing() < 4_583_000.0);
    std::assert_eq!(utm.to_string(), "31N 430887.564 4581837.853");

    let back = to_geodetic(&utm).unwrap();
    std::assert_eq!(back.zone(), 31);
    std::assert!((back.latitude() - 41.3851).abs() < 1e-6);
    std::assert!((back.longitude() - 2.1734).abs() < 1e-6);
}

#[test]
fn test_stateful_coordinate_workflow() {
    init_logging();
    let mut coordinate = Coordinate::new();
    coordinate.set_latitude(-23.5505).unwrap();
    coordinate.set_longitude(-46.6333).unwrap();
    std::assert!(coordinate.set_latitude(180.0).is_err());

    let utm = coordinate.to_utm().unwrap();
    std::assert_eq!(utm.zone(), 23);
    std::assert!(!utm.is_northern_hemisphere());

    let geodetic = coordinate.to_geodetic().unwrap();
    std::assert!((geodetic.latitude() + 23.5505).abs() < 1e-6);
}

#[test]
fn test_angle_helpers() {
    std::assert_eq!(degrees_to_radians(180.0), PI);
    std::assert_eq!(radians_to_degrees(PI), 180.0);
    std::assert!((radians_to_degrees(degrees_to_radians(41.3851)) - 41.3851).abs() < 1e-12);
}

#[test]
fn test_embedded_defaults_match_builtin() {
    std::assert_eq!(ConverterConfig::default(), ConverterConfig::builtin());
    std::assert_eq!(ConverterConfig::default_config().default_zone, 31);
}

#[test]
fn test_config_overrides() {
    let config = ConverterConfig::from_str(
        "[projection]\nfalse_easting = 0\n\n[defaults]\nzone = 18\nnorthern_hemisphere = false\n",
    ).unwrap();
    std::assert_eq!(config.false_easting, 0.0);
    std::assert_eq!(config.scale_factor, 0.9996);
    std::assert_eq!(config.default_zone, 18);
    std::assert!(!config.default_northern_hemisphere);

    let coordinate = Coordinate::with_config(config).unwrap();
    std::assert_eq!(coordinate.zone(), 18);
    std::assert!(!coordinate.is_northern_hemisphere());
}

#[test]
fn test_config_rejects_bad_values() {
    let zero_axis = ConverterConfig::from_str("[ellipsoid]\nsemi_minor_axis = 0.0\n");
    std::assert!(matches!(zero_axis, Err(UtmError::DivisionByZero(_))));

    let bad_zone = ConverterConfig::from_str("[defaults]\nzone = 61\n");
    std::assert!(matches!(bad_zone, Err(UtmError::InvalidZone(61))));

    let bad_type = ConverterConfig::from_str("[projection]\nscale_factor = \"high\"\n");
    std::assert!(matches!(bad_type, Err(UtmError::ConfigError(_))));

    let not_toml = ConverterConfig::from_str("[projection");
    std::assert!(matches!(not_toml, Err(UtmError::ConfigError(_))));
}

#[test]
fn test_config_from_file() {
    let path = std::env::temp_dir().join("utmkit_integration_config.toml");
    std::fs::write(&path, "[projection]\nscale_factor = 1.0\n").unwrap();

    let config = ConverterConfig::from_file(path.to_str().unwrap()).unwrap();
    std::assert_eq!(config.scale_factor, 1.0);
    let transformer = UtmTransformer::new(config).unwrap();
    let utm = transformer.to_utm(&GeodeticPoint::new(0.0, 4.0).unwrap()).unwrap();
    std::assert!(utm.easting() > 500_000.0);

    std::fs::remove_file(&path).unwrap();

    let missing = ConverterConfig::from_file("/nonexistent/utmkit.toml");
    std::assert!(matches!(missing, Err(UtmError::IoError(_))));
}

#[test]
fn test_error_display() {
    let err = GeodeticPoint::new(180.0, 0.0).unwrap_err();
    std::assert_eq!(err.to_string(), "Invalid latitude: 180 is outside the range [-90, 90]");
    std::assert!(UtmError::InvalidZone(0).to_string().contains("1-60"));
}

#[test]
fn test_parse_coordinate_pair() {
    std::assert_eq!(parse_coordinate_pair(" -33.8688, 151.2093 ", "lat", "lng").unwrap(), (-33.8688, 151.2093));
    std::assert!(parse_coordinate_pair("1,2,3", "lat", "lng").is_err());
    std::assert!(parse_coordinate_pair("north,2", "lat", "lng").is_err());
}

#[test]
fn test_resolve_utm_zone() {
    std::assert_eq!(resolve_utm_zone(Some("EPSG:32756"), None, false).unwrap(), (56, false));
    std::assert_eq!(resolve_utm_zone(None, Some(31), false).unwrap(), (31, true));
    std::assert_eq!(resolve_utm_zone(None, Some(31), true).unwrap(), (31, false));
    std::assert!(resolve_utm_zone(Some("4326"), None, false).is_err());
    std::assert!(resolve_utm_zone(None, None, false).is_err());
}

#[test]
fn test_to_utm_command() {
    init_logging();
    let logger = Logger::console_only();
    let args = build_cli()
        .try_get_matches_from(["utmkit", "--to-utm", "--coordinate", "-33.8688,151.2093"])
        .unwrap();

    let command = ToUtmCommand::new(&args, &logger).unwrap();
    let utm = command.convert().unwrap();
    std::assert_eq!(utm.zone(), 56);

    let output = command.execute().unwrap();
    std::assert_eq!(output, "zone=56 hemisphere=S easting=334368.634 northing=6250948.346 epsg=32756");
}

#[test]
fn test_to_geodetic_command_with_epsg() {
    let logger = Logger::console_only();
    let args = build_cli()
        .try_get_matches_from(["utmkit", "-g", "--coordinate", "583959.372,4507350.998", "--epsg", "EPSG:32618"])
        .unwrap();

    let command = ToGeodeticCommand::new(&args, &logger).unwrap();
    let geodetic = command.convert().unwrap();
    std::assert_eq!(geodetic.zone(), 18);
    std::assert!((geodetic.latitude() - 40.7128).abs() < 1e-6);
    std::assert!((geodetic.longitude() + 74.006).abs() < 1e-6);
}

#[test]
fn test_command_factory() {
    let logger = Logger::console_only();
    let factory = UtmkitCommandFactory::new();

    let args = build_cli()
        .try_get_matches_from(["utmkit", "-g", "--coordinate", "500000,0", "--zone", "31"])
        .unwrap();
    let output = factory.create_command(&args, &logger).unwrap().execute().unwrap();
    std::assert_eq!(output, "latitude=0.0000000 longitude=3.0000000 zone=31");

    let no_direction = build_cli()
        .try_get_matches_from(["utmkit", "--coordinate", "1,2"])
        .unwrap();
    std::assert!(factory.create_command(&no_direction, &logger).is_err());

    let bad_zone = build_cli()
        .try_get_matches_from(["utmkit", "-u", "--coordinate", "1,2", "--zone", "0"])
        .unwrap();
    std::assert!(factory.create_command(&bad_zone, &logger).is_err());
}
