//! UTM to geodetic conversion command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::load_transformer;
use crate::coordinate::{GeodeticResult, UtmPoint, UtmTransformer};
use crate::errors::{UtmError, UtmResult};
use crate::utils::coordinate_utils::{parse_coordinate_pair, resolve_utm_zone};
use crate::utils::logger::Logger;

/// Command converting a UTM easting/northing to latitude/longitude
pub struct ToGeodeticCommand<'a> {
    /// Point to convert
    point: UtmPoint,
    /// Converter to use
    transformer: UtmTransformer,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ToGeodeticCommand<'a> {
    /// Create a new to-geodetic command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> UtmResult<Self> {
        let coordinate = args.get_one::<String>("coordinate")
            .ok_or_else(|| UtmError::GenericError("Missing --coordinate 'easting,northing'".to_string()))?;
        let (easting, northing) = parse_coordinate_pair(coordinate, "easting", "northing")?;

        let (zone, northern) = resolve_utm_zone(
            args.get_one::<String>("epsg").map(|s| s.as_str()),
            args.get_one::<i64>("zone").copied(),
            args.get_flag("south"),
        )?;

        Ok(ToGeodeticCommand {
            point: UtmPoint::new(easting, northing, zone, northern)?,
            transformer: load_transformer(args)?,
            logger,
        })
    }

    /// Run the conversion
    pub fn convert(&self) -> UtmResult<GeodeticResult> {
        self.transformer.to_geodetic(&self.point)
    }
}

impl<'a> Command for ToGeodeticCommand<'a> {
    fn execute(&self) -> UtmResult<String> {
        info!("Converting UTM {} to geodetic", self.point);

        let geodetic = self.convert()?;
        self.logger.log_conversion(&self.point.to_string(), &geodetic.to_string())?;

        Ok(format!(
            "latitude={:.7} longitude={:.7} zone={}",
            geodetic.latitude(),
            geodetic.longitude(),
            geodetic.zone()
        ))
    }
}
