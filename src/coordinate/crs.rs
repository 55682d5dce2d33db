//! Coordinate Reference System identifiers

use crate::errors::{UtmError, UtmResult};
use super::zone::{MAX_ZONE, MIN_ZONE};

/// Identifier for the coordinate systems the converter works between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// WGS 84 geodetic (EPSG:4326)
    WGS84,
    /// UTM Zone (EPSG:326xx for northern hemisphere, 327xx for southern)
    UTM(u8, bool),
}

impl CoordinateSystem {
    /// Get the EPSG code for this coordinate system
    pub fn epsg_code(&self) -> u32 {
        match self {
            CoordinateSystem::WGS84 => 4326,
            CoordinateSystem::UTM(zone, is_northern) => {
                if *is_northern {
                    32600 + *zone as u32
                } else {
                    32700 + *zone as u32
                }
            },
        }
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::WGS84 => "WGS 84 (EPSG:4326)".to_string(),
            CoordinateSystem::UTM(zone, is_northern) => {
                if *is_northern {
                    format!("UTM Zone {}N (EPSG:{})", zone, self.epsg_code())
                } else {
                    format!("UTM Zone {}S (EPSG:{})", zone, self.epsg_code())
                }
            },
        }
    }

    /// Create a coordinate system from an EPSG code
    pub fn from_epsg(epsg: u32) -> UtmResult<CoordinateSystem> {
        let (first, last) = (MIN_ZONE as u32, MAX_ZONE as u32);
        match epsg {
            4326 => Ok(CoordinateSystem::WGS84),
            code if (32600 + first..=32600 + last).contains(&code) => {
                Ok(CoordinateSystem::UTM((code - 32600) as u8, true))
            },
            code if (32700 + first..=32700 + last).contains(&code) => {
                Ok(CoordinateSystem::UTM((code - 32700) as u8, false))
            },
            _ => Err(UtmError::GenericError(format!("Unsupported EPSG code: {}", epsg))),
        }
    }

    /// Parse a coordinate system from a string (e.g. "EPSG:32631" or "32631")
    pub fn from_string(crs_str: &str) -> UtmResult<CoordinateSystem> {
        let crs_str = crs_str.trim().to_uppercase();
        let code_str = crs_str.strip_prefix("EPSG:").unwrap_or(crs_str.as_str());

        match code_str.parse::<u32>() {
            Ok(epsg) => Self::from_epsg(epsg),
            Err(_) => Err(UtmError::GenericError(format!("Unsupported CRS format: {}", crs_str))),
        }
    }
}
