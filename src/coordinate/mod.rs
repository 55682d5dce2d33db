//! Geodetic and UTM coordinate handling
//!
//! This module provides the coordinate value types, the WGS84 ellipsoid,
//! zone arithmetic and the transverse Mercator series that convert between
//! latitude/longitude and UTM easting/northing.

mod converter;
mod crs;
pub mod ellipsoid;
mod point;
mod transform;
mod utm;
pub mod zone;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::converter::Coordinate;
pub use self::crs::CoordinateSystem;
pub use self::ellipsoid::Ellipsoid;
pub use self::point::{GeodeticPoint, GeodeticResult, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use self::transform::{to_geodetic, to_utm, to_utm_in_zone, UtmTransformer};
pub use self::utm::UtmPoint;
