//! Projected UTM point

use std::fmt;
use crate::errors::{check_range, UtmResult};
use super::crs::CoordinateSystem;
use super::zone::validate_zone;

/// Accepted easting input range in meters
pub const EASTING_RANGE: (f64, f64) = (0.0, 1_000_000.0);
/// Accepted northing input range in meters
pub const NORTHING_RANGE: (f64, f64) = (0.0, 10_000_000.0);

/// Easting/northing within a UTM zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmPoint {
    pub(crate) easting: f64,
    pub(crate) northing: f64,
    pub(crate) zone: u8,
    pub(crate) northern: bool,
}

impl UtmPoint {
    /// Create a projected point
    ///
    /// # Arguments
    /// * `easting` - Easting in meters, including the false easting
    /// * `northing` - Northing in meters, including the false northing when southern
    /// * `zone` - Zone number, 1 to 60
    /// * `northern` - Whether the northing is measured in the northern hemisphere
    pub fn new(easting: f64, northing: f64, zone: i64, northern: bool) -> UtmResult<Self> {
        let easting = check_range("easting", easting, EASTING_RANGE.0, EASTING_RANGE.1)?;
        let northing = check_range("northing", northing, NORTHING_RANGE.0, NORTHING_RANGE.1)?;
        let zone = validate_zone(zone)?;
        Ok(UtmPoint { easting, northing, zone, northern })
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn is_northern_hemisphere(&self) -> bool {
        self.northern
    }

    /// The coordinate system this point is expressed in
    pub fn coordinate_system(&self) -> CoordinateSystem {
        CoordinateSystem::UTM(self.zone, self.northern)
    }

    /// EPSG code of the zone (326xx north, 327xx south)
    pub fn epsg_code(&self) -> u32 {
        self.coordinate_system().epsg_code()
    }
}

impl Default for UtmPoint {
    fn default() -> Self {
        UtmPoint { easting: 0.0, northing: 0.0, zone: 31, northern: true }
    }
}

impl fmt::Display for UtmPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {:.3} {:.3}",
            self.zone,
            if self.northern { 'N' } else { 'S' },
            self.easting,
            self.northing
        )
    }
}
