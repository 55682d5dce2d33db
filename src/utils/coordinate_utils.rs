//! Coordinate utility functions
//!
//! Parsing of textual coordinate pairs as given on the command line, and
//! resolution of the zone/hemisphere of a UTM input from either explicit
//! values or an EPSG code.

use log::debug;
use crate::coordinate::CoordinateSystem;
use crate::errors::{UtmError, UtmResult};

/// Parse a pair of numbers written as "a,b"
///
/// # Arguments
/// * `coord_str` - Coordinate string, e.g. "41.3851,2.1734" or "430887.56,4581837.85"
/// * `first_name` - Name of the first value, used in error messages
/// * `second_name` - Name of the second value, used in error messages
///
/// # Returns
/// The two parsed values or an error
pub fn parse_coordinate_pair(coord_str: &str, first_name: &str, second_name: &str) -> UtmResult<(f64, f64)> {
    let parts: Vec<&str> = coord_str.split(',').collect();
    if parts.len() != 2 {
        return Err(UtmError::GenericError(format!(
            "Coordinate must be in format '{},{}', got '{}'", first_name, second_name, coord_str
        )));
    }

    let first = parts[0].trim().parse::<f64>()
        .map_err(|_| UtmError::GenericError(format!("Invalid {}: '{}'", first_name, parts[0].trim())))?;
    let second = parts[1].trim().parse::<f64>()
        .map_err(|_| UtmError::GenericError(format!("Invalid {}: '{}'", second_name, parts[1].trim())))?;

    debug!("Parsed coordinates: {}={}, {}={}", first_name, first, second_name, second);
    Ok((first, second))
}

/// Determine zone and hemisphere of a UTM input
///
/// An EPSG code takes precedence; otherwise the explicit zone is used
/// together with the `south` flag.
pub fn resolve_utm_zone(epsg: Option<&str>, zone: Option<i64>, south: bool) -> UtmResult<(i64, bool)> {
    if let Some(code) = epsg {
        return match CoordinateSystem::from_string(code)? {
            CoordinateSystem::UTM(zone, northern) => Ok((zone as i64, northern)),
            other => Err(UtmError::GenericError(format!(
                "{} is not a UTM coordinate system", other.description()
            ))),
        };
    }

    match zone {
        Some(zone) => Ok((zone, !south)),
        None => Err(UtmError::GenericError("Missing UTM zone. Use --zone or --epsg".to_string())),
    }
}
