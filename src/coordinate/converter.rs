//! Stateful coordinate holding both geodetic and UTM representations

use log::debug;
use crate::config::ConverterConfig;
use crate::errors::UtmResult;
use super::point::{GeodeticPoint, GeodeticResult};
use super::transform::UtmTransformer;
use super::utm::UtmPoint;

/// A point held as latitude/longitude and as UTM easting/northing
///
/// Setters validate their input and leave the coordinate unchanged when
/// they return an error. The two representations are only brought in sync
/// by [`Coordinate::to_utm`] and [`Coordinate::to_geodetic`].
#[derive(Debug, Clone)]
pub struct Coordinate {
    geodetic: GeodeticPoint,
    utm: UtmPoint,
    transformer: UtmTransformer,
}

impl Coordinate {
    /// Coordinate at (0, 0) with the configured default zone and hemisphere
    pub fn new() -> Self {
        Self::with_transformer(UtmTransformer::default())
    }

    /// Coordinate at (0, 0) converting with the given transformer
    pub fn with_transformer(transformer: UtmTransformer) -> Self {
        let config = transformer.config();
        let utm = UtmPoint {
            zone: config.default_zone,
            northern: config.default_northern_hemisphere,
            ..UtmPoint::default()
        };
        Coordinate {
            geodetic: GeodeticPoint::default(),
            utm,
            transformer,
        }
    }

    /// Coordinate converting with the given configuration
    pub fn with_config(config: ConverterConfig) -> UtmResult<Self> {
        Ok(Self::with_transformer(UtmTransformer::new(config)?))
    }

    /// Coordinate from latitude/longitude in degrees
    pub fn from_geodetic(latitude: f64, longitude: f64) -> UtmResult<Self> {
        let mut coordinate = Self::new();
        coordinate.geodetic = GeodeticPoint::new(latitude, longitude)?;
        Ok(coordinate)
    }

    /// Coordinate from easting/northing in meters, zone and hemisphere
    pub fn from_utm(easting: f64, northing: f64, zone: i64, northern: bool) -> UtmResult<Self> {
        let mut coordinate = Self::new();
        coordinate.utm = UtmPoint::new(easting, northing, zone, northern)?;
        Ok(coordinate)
    }

    pub fn latitude(&self) -> f64 {
        self.geodetic.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.geodetic.longitude()
    }

    pub fn easting(&self) -> f64 {
        self.utm.easting()
    }

    pub fn northing(&self) -> f64 {
        self.utm.northing()
    }

    pub fn zone(&self) -> u8 {
        self.utm.zone()
    }

    pub fn is_northern_hemisphere(&self) -> bool {
        self.utm.is_northern_hemisphere()
    }

    /// Geodetic representation as a value
    pub fn geodetic(&self) -> GeodeticPoint {
        self.geodetic
    }

    /// UTM representation as a value
    pub fn utm(&self) -> UtmPoint {
        self.utm
    }

    pub fn set_latitude(&mut self, latitude: f64) -> UtmResult<()> {
        self.geodetic = self.geodetic.with_latitude(latitude)?;
        Ok(())
    }

    pub fn set_longitude(&mut self, longitude: f64) -> UtmResult<()> {
        self.geodetic = self.geodetic.with_longitude(longitude)?;
        Ok(())
    }

    pub fn set_easting(&mut self, easting: f64) -> UtmResult<()> {
        let utm = self.utm;
        self.utm = UtmPoint::new(easting, utm.northing, utm.zone as i64, utm.northern)?;
        Ok(())
    }

    pub fn set_northing(&mut self, northing: f64) -> UtmResult<()> {
        let utm = self.utm;
        self.utm = UtmPoint::new(utm.easting, northing, utm.zone as i64, utm.northern)?;
        Ok(())
    }

    pub fn set_zone(&mut self, zone: i64) -> UtmResult<()> {
        let utm = self.utm;
        self.utm = UtmPoint::new(utm.easting, utm.northing, zone, utm.northern)?;
        Ok(())
    }

    pub fn set_northern_hemisphere(&mut self, northern: bool) {
        self.utm.northern = northern;
    }

    /// Derive easting, northing, zone and hemisphere from the latitude/longitude
    ///
    /// The zone is always recomputed from the current longitude.
    pub fn to_utm(&mut self) -> UtmResult<UtmPoint> {
        let utm = self.transformer.to_utm(&self.geodetic)?;
        debug!("Coordinate updated to UTM {}", utm);
        self.utm = utm;
        Ok(utm)
    }

    /// Derive latitude/longitude from easting, northing, zone and hemisphere
    pub fn to_geodetic(&mut self) -> UtmResult<GeodeticResult> {
        let result = self.transformer.to_geodetic(&self.utm)?;
        debug!("Coordinate updated to geodetic {}", result);
        self.geodetic = result.point;
        Ok(result)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::new()
    }
}
