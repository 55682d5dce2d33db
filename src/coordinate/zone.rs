//! UTM zone arithmetic

use crate::errors::{check_range, UtmError, UtmResult};

/// Lowest UTM zone number
pub const MIN_ZONE: u8 = 1;
/// Highest UTM zone number
pub const MAX_ZONE: u8 = 60;
/// Width of a zone in degrees of longitude
pub const ZONE_WIDTH: f64 = 6.0;

/// Check a zone number and narrow it to `u8`
pub fn validate_zone(zone: i64) -> UtmResult<u8> {
    if zone >= MIN_ZONE as i64 && zone <= MAX_ZONE as i64 {
        Ok(zone as u8)
    } else {
        Err(UtmError::InvalidZone(zone.clamp(i32::MIN as i64, i32::MAX as i64) as i32))
    }
}

/// Zone containing a longitude: `floor((lng + 180) / 6) + 1`
///
/// Longitude 180 belongs to zone 60.
pub fn zone_for_longitude(longitude: f64) -> UtmResult<u8> {
    let longitude = check_range("longitude", longitude, -180.0, 180.0)?;
    let zone = ((longitude + 180.0) / ZONE_WIDTH).floor() as u8 + 1;
    Ok(zone.min(MAX_ZONE))
}

/// Central meridian of a zone in degrees: `zone * 6 - 183`
pub fn central_meridian(zone: u8) -> f64 {
    zone as f64 * ZONE_WIDTH - 183.0
}

/// Signed offset of `longitude` from the zone's central meridian, in (-180, 180]
pub fn longitude_offset(longitude: f64, zone: u8) -> f64 {
    normalize_longitude(longitude - central_meridian(zone))
}

/// Wrap a longitude into (-180, 180]
pub fn normalize_longitude(longitude: f64) -> f64 {
    let mut lng = longitude % 360.0;
    if lng > 180.0 {
        lng -= 360.0;
    } else if lng <= -180.0 {
        lng += 360.0;
    }
    lng
}
