//! Converter configuration
//!
//! The ellipsoid, scale factor, false origin and defaults used by the
//! converter. Built-in values come from `utm_defaults.toml`, which is
//! embedded in the binary and parsed once on first use. A different file
//! may be loaded with [`ConverterConfig::from_file`].

use std::fs;
use lazy_static::lazy_static;
use log::{debug, warn};
use crate::coordinate::{Ellipsoid, zone};
use crate::errors::{UtmError, UtmResult};

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: ConverterConfig = {
        let content = include_str!("../utm_defaults.toml");
        ConverterConfig::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse embedded converter defaults: {}", e);
            ConverterConfig::builtin()
        })
    };
}

/// Parameters of a geodetic <-> UTM conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Display name of the ellipsoid
    pub ellipsoid_name: String,
    /// Reference ellipsoid
    pub ellipsoid: Ellipsoid,
    /// Scale factor on the central meridian (k0)
    pub scale_factor: f64,
    /// Offset added to every easting, in meters
    pub false_easting: f64,
    /// Offset added to southern hemisphere northings, in meters
    pub false_northing: f64,
    /// Zone given to a fresh coordinate
    pub default_zone: u8,
    /// Hemisphere given to a fresh coordinate
    pub default_northern_hemisphere: bool,
}

impl ConverterConfig {
    /// Hard-coded WGS84/UTM parameters
    pub fn builtin() -> Self {
        ConverterConfig {
            ellipsoid_name: "WGS84".to_string(),
            ellipsoid: Ellipsoid::WGS84,
            scale_factor: 0.9996,
            false_easting: 500_000.0,
            false_northing: 10_000_000.0,
            default_zone: 31,
            default_northern_hemisphere: true,
        }
    }

    /// The shared default configuration
    pub fn default_config() -> &'static ConverterConfig {
        &DEFAULT_CONFIG
    }

    /// Parse a configuration from a TOML string
    ///
    /// Keys missing from the document keep their built-in values.
    pub fn from_str(content: &str) -> UtmResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(UtmError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = ConverterConfig::builtin();

        if let Some(table) = toml_value.get("ellipsoid").and_then(|v| v.as_table()) {
            if let Some(name) = table.get("name").and_then(|v| v.as_str()) {
                config.ellipsoid_name = name.to_string();
            }
            let a = Self::get_number(table, "semi_major_axis")?
                .unwrap_or(config.ellipsoid.semi_major_axis());
            let b = Self::get_number(table, "semi_minor_axis")?
                .unwrap_or(config.ellipsoid.semi_minor_axis());
            config.ellipsoid = Ellipsoid::new(a, b)?;
        }

        if let Some(table) = toml_value.get("projection").and_then(|v| v.as_table()) {
            if let Some(k0) = Self::get_number(table, "scale_factor")? {
                config.scale_factor = k0;
            }
            if let Some(fe) = Self::get_number(table, "false_easting")? {
                config.false_easting = fe;
            }
            if let Some(fn_) = Self::get_number(table, "false_northing")? {
                config.false_northing = fn_;
            }
        }

        if let Some(table) = toml_value.get("defaults").and_then(|v| v.as_table()) {
            if let Some(value) = table.get("zone") {
                let zone = value.as_integer()
                    .ok_or_else(|| UtmError::ConfigError("defaults.zone must be an integer".to_string()))?;
                config.default_zone = zone::validate_zone(zone)?;
            }
            if let Some(value) = table.get("northern_hemisphere") {
                config.default_northern_hemisphere = value.as_bool()
                    .ok_or_else(|| UtmError::ConfigError("defaults.northern_hemisphere must be a boolean".to_string()))?;
            }
        }

        config.validate()?;
        debug!("Loaded converter configuration: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> UtmResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Check the projection parameters for consistency
    pub fn validate(&self) -> UtmResult<()> {
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(UtmError::ConfigError(format!(
                "scale factor must be positive, got {}", self.scale_factor
            )));
        }
        if !(self.false_easting.is_finite() && self.false_easting >= 0.0) {
            return Err(UtmError::ConfigError(format!(
                "false easting must be non-negative, got {}", self.false_easting
            )));
        }
        if !(self.false_northing.is_finite() && self.false_northing >= 0.0) {
            return Err(UtmError::ConfigError(format!(
                "false northing must be non-negative, got {}", self.false_northing
            )));
        }
        zone::validate_zone(self.default_zone as i64)?;
        Ok(())
    }

    // TOML writes whole numbers as integers, so accept both
    fn get_number(table: &toml::value::Table, key: &str) -> UtmResult<Option<f64>> {
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::Float(f)) => Ok(Some(*f)),
            Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
            Some(other) => Err(UtmError::ConfigError(format!(
                "{} must be a number, got {}", key, other.type_str()
            ))),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}
