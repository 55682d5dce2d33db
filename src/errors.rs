//! Custom error types for coordinate conversion

use std::fmt;
use std::io;

/// Conversion error types
#[derive(Debug)]
pub enum UtmError {
    /// I/O error
    IoError(io::Error),
    /// A value lies outside its permitted range
    InvalidRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },
    /// UTM zone outside 1-60
    InvalidZone(i32),
    /// A denominator in the series vanished
    DivisionByZero(String),
    /// A conversion produced NaN or infinity
    NotFinite(String),
    /// A UTM input has no geodetic counterpart (it unprojects past a pole)
    OutsideProjection(String),
    /// Invalid converter configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for UtmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtmError::IoError(e) => write!(f, "I/O error: {}", e),
            UtmError::InvalidRange { field, value, min, max } => write!(
                f,
                "Invalid {}: {} is outside the range [{}, {}]",
                field, value, min, max
            ),
            UtmError::InvalidZone(zone) => write!(f, "Invalid UTM zone: {} (expected 1-60)", zone),
            UtmError::DivisionByZero(msg) => write!(f, "Division by zero: {}", msg),
            UtmError::NotFinite(msg) => write!(f, "Non-finite result: {}", msg),
            UtmError::OutsideProjection(msg) => write!(f, "Outside the projection: {}", msg),
            UtmError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            UtmError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for UtmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UtmError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for UtmError {
    fn from(error: io::Error) -> Self {
        UtmError::IoError(error)
    }
}

impl From<String> for UtmError {
    fn from(msg: String) -> Self {
        UtmError::GenericError(msg)
    }
}

/// Result type for conversion operations
pub type UtmResult<T> = Result<T, UtmError>;

/// Check that `value` lies within `[min, max]` and is finite
pub(crate) fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> UtmResult<f64> {
    if value.is_finite() && value >= min && value <= max {
        Ok(value)
    } else {
        Err(UtmError::InvalidRange { field, value, min, max })
    }
}

/// Reject NaN and infinite intermediate results
pub(crate) fn check_finite(what: &str, value: f64) -> UtmResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(UtmError::NotFinite(format!("{} evaluated to {}", what, value)))
    }
}
