//! Geodetic point on the reference ellipsoid

use std::fmt;
use crate::errors::{check_range, UtmResult};

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeodeticPoint {
    latitude: f64,
    longitude: f64,
}

impl GeodeticPoint {
    /// Create a point, rejecting out-of-range latitude or longitude
    pub fn new(latitude: f64, longitude: f64) -> UtmResult<Self> {
        let latitude = check_range("latitude", latitude, LATITUDE_RANGE.0, LATITUDE_RANGE.1)?;
        let longitude = check_range("longitude", longitude, LONGITUDE_RANGE.0, LONGITUDE_RANGE.1)?;
        Ok(GeodeticPoint { latitude, longitude })
    }

    /// Latitude in degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Copy of this point with a different latitude
    pub fn with_latitude(&self, latitude: f64) -> UtmResult<Self> {
        GeodeticPoint::new(latitude, self.longitude)
    }

    /// Copy of this point with a different longitude
    pub fn with_longitude(&self, longitude: f64) -> UtmResult<Self> {
        GeodeticPoint::new(self.latitude, longitude)
    }
}

impl fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7}, {:.7}", self.latitude, self.longitude)
    }
}

/// Outcome of an inverse projection: the point and the zone it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticResult {
    pub point: GeodeticPoint,
    pub zone: u8,
}

impl GeodeticResult {
    pub fn latitude(&self) -> f64 {
        self.point.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.point.longitude()
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }
}

impl fmt::Display for GeodeticResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (zone {})", self.point, self.zone)
    }
}
