//! Geodetic to UTM conversion command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::load_transformer;
use crate::coordinate::{GeodeticPoint, UtmPoint, UtmTransformer, zone};
use crate::errors::{UtmError, UtmResult};
use crate::utils::coordinate_utils::parse_coordinate_pair;
use crate::utils::logger::Logger;

/// Command converting a latitude/longitude pair to UTM
pub struct ToUtmCommand<'a> {
    /// Point to convert
    point: GeodeticPoint,
    /// Explicit zone, if given
    zone: Option<u8>,
    /// Converter to use
    transformer: UtmTransformer,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ToUtmCommand<'a> {
    /// Create a new to-UTM command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> UtmResult<Self> {
        let coordinate = args.get_one::<String>("coordinate")
            .ok_or_else(|| UtmError::GenericError("Missing --coordinate 'lat,lng'".to_string()))?;
        let (latitude, longitude) = parse_coordinate_pair(coordinate, "lat", "lng")?;
        let point = GeodeticPoint::new(latitude, longitude)?;

        let zone = match args.get_one::<i64>("zone") {
            Some(z) => Some(zone::validate_zone(*z)?),
            None => None,
        };

        Ok(ToUtmCommand {
            point,
            zone,
            transformer: load_transformer(args)?,
            logger,
        })
    }

    /// Run the conversion
    pub fn convert(&self) -> UtmResult<UtmPoint> {
        match self.zone {
            Some(zone) => self.transformer.to_utm_in_zone(&self.point, zone),
            None => self.transformer.to_utm(&self.point),
        }
    }
}

impl<'a> Command for ToUtmCommand<'a> {
    fn execute(&self) -> UtmResult<String> {
        info!("Converting ({}) to UTM", self.point);

        let utm = self.convert()?;
        self.logger.log_conversion(&self.point.to_string(), &utm.to_string())?;

        Ok(format!(
            "zone={} hemisphere={} easting={:.3} northing={:.3} epsg={}",
            utm.zone(),
            if utm.is_northern_hemisphere() { "N" } else { "S" },
            utm.easting(),
            utm.northing(),
            utm.epsg_code()
        ))
    }
}
