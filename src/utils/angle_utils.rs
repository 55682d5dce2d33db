//! Angle unit conversion

use std::f64::consts::PI;

/// Convert degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees / 180.0) * PI
}

/// Convert radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    (radians / PI) * 180.0
}
