//! Transverse Mercator forward and inverse series
//!
//! The forward map expands easting to the 7th and northing to the 8th power
//! of the longitude difference from the central meridian. The inverse first
//! finds the footpoint latitude by inverting the meridian arc series, then
//! expands latitude and longitude in powers of the unscaled easting.
//!
//! Accuracy is sub-meter within 80 degrees of the equator and 3 degrees of
//! the central meridian, and falls off outside that envelope.

use lazy_static::lazy_static;
use log::{debug, warn};
use crate::config::ConverterConfig;
use crate::errors::{check_finite, UtmError, UtmResult};
use crate::utils::{degrees_to_radians, radians_to_degrees};
use super::ellipsoid::{ArcSeries, FootpointSeries};
use super::point::{GeodeticPoint, GeodeticResult, LATITUDE_RANGE};
use super::utm::UtmPoint;
use super::zone::{self, central_meridian, zone_for_longitude};

/// Below this |cos(phi)| the series terms divided by cos(phi) blow up
const MIN_COS_LATITUDE: f64 = 1e-12;

/// Longitude offset from the central meridian beyond which accuracy degrades
const MAX_ACCURATE_OFFSET: f64 = 3.0;

lazy_static! {
    static ref DEFAULT_TRANSFORMER: UtmTransformer = UtmTransformer::default();
}

/// Convert a geodetic point to UTM, choosing the zone from its longitude
pub fn to_utm(point: &GeodeticPoint) -> UtmResult<UtmPoint> {
    DEFAULT_TRANSFORMER.to_utm(point)
}

/// Convert a geodetic point to UTM in an explicit zone
pub fn to_utm_in_zone(point: &GeodeticPoint, zone: u8) -> UtmResult<UtmPoint> {
    DEFAULT_TRANSFORMER.to_utm_in_zone(point, zone)
}

/// Convert a UTM point back to geodetic latitude/longitude and its zone
pub fn to_geodetic(point: &UtmPoint) -> UtmResult<GeodeticResult> {
    DEFAULT_TRANSFORMER.to_geodetic(point)
}

/// Converter between geodetic and UTM coordinates for one configuration
#[derive(Debug, Clone)]
pub struct UtmTransformer {
    config: ConverterConfig,
    arc: ArcSeries,
    footpoint: FootpointSeries,
    ep2: f64,
}

impl UtmTransformer {
    /// Create a transformer from a configuration
    pub fn new(config: ConverterConfig) -> UtmResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ConverterConfig) -> Self {
        let ellipsoid = config.ellipsoid;
        UtmTransformer {
            arc: ellipsoid.arc_series(),
            footpoint: ellipsoid.footpoint_series(),
            ep2: ellipsoid.second_eccentricity_squared(),
            config,
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert to UTM in the zone containing the point's longitude
    pub fn to_utm(&self, point: &GeodeticPoint) -> UtmResult<UtmPoint> {
        let zone = zone_for_longitude(point.longitude())?;
        self.to_utm_in_zone(point, zone)
    }

    /// Convert to UTM in the given zone
    pub fn to_utm_in_zone(&self, point: &GeodeticPoint, zone: u8) -> UtmResult<UtmPoint> {
        let zone = zone::validate_zone(zone as i64)?;

        let offset = zone::longitude_offset(point.longitude(), zone);
        if offset.abs() > MAX_ACCURATE_OFFSET {
            warn!("Longitude {} is {:.3} degrees from the central meridian of zone {}; accuracy degrades",
                  point.longitude(), offset, zone);
        }

        let phi = degrees_to_radians(point.latitude());
        let l = degrees_to_radians(offset);
        let (x, y) = self.map_latlng_to_xy(phi, l)?;

        let k0 = self.config.scale_factor;
        let easting = x * k0 + self.config.false_easting;
        let mut northing = y * k0;
        let northern = northing >= 0.0;
        if !northern {
            northing += self.config.false_northing;
        }

        let easting = check_finite("easting", easting)?;
        let northing = check_finite("northing", northing)?;

        debug!("Projected ({}) to zone {} easting={} northing={}", point, zone, easting, northing);

        Ok(UtmPoint { easting, northing, zone, northern })
    }

    /// Convert a UTM point back to latitude/longitude
    ///
    /// The result carries the zone of the input point.
    pub fn to_geodetic(&self, point: &UtmPoint) -> UtmResult<GeodeticResult> {
        let k0 = self.config.scale_factor;

        let x = (point.easting - self.config.false_easting) / k0;

        let mut y = point.northing;
        if !point.northern {
            y -= self.config.false_northing;
        }
        let y = y / k0;

        let lambda0 = degrees_to_radians(central_meridian(point.zone));
        let (phi, lambda) = self.map_xy_to_latlng(x, y, lambda0)?;

        let latitude = check_finite("latitude", radians_to_degrees(phi))?;
        let longitude = zone::normalize_longitude(check_finite("longitude", radians_to_degrees(lambda))?);

        // Northings past a pole, or eastings far outside the zone, leave the latitude domain
        if latitude.abs() > LATITUDE_RANGE.1 {
            return Err(UtmError::OutsideProjection(format!(
                "UTM point {} unprojects to latitude {:.6}", point, latitude
            )));
        }

        debug!("Unprojected {} to latitude={} longitude={}", point, latitude, longitude);

        Ok(GeodeticResult {
            point: GeodeticPoint::new(latitude, longitude)?,
            zone: point.zone,
        })
    }

    /// Forward series: unscaled (x, y) in meters at latitude `phi` and
    /// longitude difference `l` from the central meridian, both in radians
    fn map_latlng_to_xy(&self, phi: f64, l: f64) -> UtmResult<(f64, f64)> {
        let cos_phi = phi.cos();
        if cos_phi.abs() < MIN_COS_LATITUDE {
            return Err(UtmError::DivisionByZero(format!(
                "cos(latitude) vanishes at latitude {}", radians_to_degrees(phi)
            )));
        }

        let nu2 = self.ep2 * cos_phi.powi(2);
        let n = self.config.ellipsoid.prime_vertical_radius(nu2);

        let t = phi.tan();
        let t2 = t * t;

        // Coefficients for l^n; l^1 and l^2 have coefficient 1
        let l3coef = 1.0 - t2 + nu2;
        let l4coef = 5.0 - t2 + 9.0 * nu2 + 4.0 * (nu2 * nu2);
        let l5coef = 5.0 - 18.0 * t2 + (t2 * t2) + 14.0 * nu2 - 58.0 * t2 * nu2;
        let l6coef = 61.0 - 58.0 * t2 + (t2 * t2) + 270.0 * nu2 - 330.0 * t2 * nu2;
        let l7coef = 61.0 - 479.0 * t2 + 179.0 * (t2 * t2) - (t2 * t2 * t2);
        let l8coef = 1385.0 - 3111.0 * t2 + 543.0 * (t2 * t2) - (t2 * t2 * t2);

        let x = n * cos_phi * l
            + (n / 6.0 * cos_phi.powi(3) * l3coef * l.powi(3))
            + (n / 120.0 * cos_phi.powi(5) * l5coef * l.powi(5))
            + (n / 5040.0 * cos_phi.powi(7) * l7coef * l.powi(7));

        let y = self.arc.evaluate(phi)
            + (t / 2.0 * n * cos_phi.powi(2) * l.powi(2))
            + (t / 24.0 * n * cos_phi.powi(4) * l4coef * l.powi(4))
            + (t / 720.0 * n * cos_phi.powi(6) * l6coef * l.powi(6))
            + (t / 40320.0 * n * cos_phi.powi(8) * l8coef * l.powi(8));

        Ok((x, y))
    }

    /// Inverse series: latitude and longitude in radians from unscaled
    /// (x, y) in meters relative to the central meridian `lambda0`
    fn map_xy_to_latlng(&self, x: f64, y: f64, lambda0: f64) -> UtmResult<(f64, f64)> {
        let phif = self.footpoint.evaluate(y);

        let cf = phif.cos();
        if cf.abs() < MIN_COS_LATITUDE {
            return Err(UtmError::DivisionByZero(format!(
                "footpoint latitude {} is at a pole", radians_to_degrees(phif)
            )));
        }

        let nuf2 = self.ep2 * cf * cf;
        let nf = self.config.ellipsoid.prime_vertical_radius(nuf2);

        let tf = phif.tan();
        let tf2 = tf * tf;
        let tf4 = tf2 * tf2;

        // Fractional coefficients for x^n
        let mut nfpow = nf;
        let x1frac = 1.0 / (nfpow * cf);
        nfpow *= nf;
        let x2frac = tf / (2.0 * nfpow);
        nfpow *= nf;
        let x3frac = 1.0 / (6.0 * nfpow * cf);
        nfpow *= nf;
        let x4frac = tf / (24.0 * nfpow);
        nfpow *= nf;
        let x5frac = 1.0 / (120.0 * nfpow * cf);
        nfpow *= nf;
        let x6frac = tf / (720.0 * nfpow);
        nfpow *= nf;
        let x7frac = 1.0 / (5040.0 * nfpow * cf);
        nfpow *= nf;
        let x8frac = tf / (40320.0 * nfpow);

        // Polynomial coefficients for x^n; x^1 has none
        let x2poly = -1.0 - nuf2;
        let x3poly = -1.0 - 2.0 * tf2 - nuf2;
        let x4poly = 5.0 + 3.0 * tf2 + 6.0 * nuf2 - 6.0 * tf2 * nuf2
            - 3.0 * (nuf2 * nuf2) - 9.0 * tf2 * (nuf2 * nuf2);
        let x5poly = 5.0 + 28.0 * tf2 + 24.0 * tf4 + 6.0 * nuf2 + 8.0 * tf2 * nuf2;
        let x6poly = -61.0 - 90.0 * tf2 - 45.0 * tf4 - 107.0 * nuf2 + 162.0 * tf2 * nuf2;
        let x7poly = -61.0 - 662.0 * tf2 - 1320.0 * tf4 - 720.0 * (tf4 * tf2);
        let x8poly = 1385.0 + 3633.0 * tf2 + 4095.0 * tf4 + 1575.0 * (tf4 * tf2);

        let phi = phif
            + x2frac * x2poly * x.powi(2)
            + x4frac * x4poly * x.powi(4)
            + x6frac * x6poly * x.powi(6)
            + x8frac * x8poly * x.powi(8);

        let lambda = lambda0
            + x1frac * x
            + x3frac * x3poly * x.powi(3)
            + x5frac * x5poly * x.powi(5)
            + x7frac * x7poly * x.powi(7);

        Ok((phi, lambda))
    }
}

impl Default for UtmTransformer {
    fn default() -> Self {
        Self::build(ConverterConfig::default_config().clone())
    }
}
