//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod to_utm_command;
pub mod to_geodetic_command;

pub use command_traits::{Command, CommandFactory};
pub use to_utm_command::ToUtmCommand;
pub use to_geodetic_command::ToGeodeticCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::info;
use crate::config::ConverterConfig;
use crate::coordinate::UtmTransformer;
use crate::errors::{UtmError, UtmResult};
use crate::utils::logger::Logger;

/// Build the command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("utmkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert coordinates between WGS84 latitude/longitude and UTM")
        .arg(
            Arg::new("to-utm")
                .short('u')
                .long("to-utm")
                .help("Convert 'lat,lng' to UTM")
                .action(ArgAction::SetTrue)
                .conflicts_with("to-geodetic"),
        )
        .arg(
            Arg::new("to-geodetic")
                .short('g')
                .long("to-geodetic")
                .help("Convert 'easting,northing' to latitude/longitude")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("coordinate")
                .long("coordinate")
                .help("Input coordinate as 'lat,lng' or 'easting,northing'")
                .value_name("COORDINATE")
                .allow_hyphen_values(true)
                .required(true),
        )
        .arg(
            Arg::new("zone")
                .short('z')
                .long("zone")
                .help("UTM zone (1-60); computed from longitude when converting to UTM")
                .value_name("ZONE")
                .value_parser(clap::value_parser!(i64))
                .required(false),
        )
        .arg(
            Arg::new("south")
                .short('s')
                .long("south")
                .help("The UTM input is in the southern hemisphere")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("epsg")
                .long("epsg")
                .help("UTM EPSG code of the input (326xx north, 327xx south)")
                .value_name("CODE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the converter parameters")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File receiving the conversion log")
                .value_name("FILE")
                .default_value("utmkit.log"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Build the transformer from `--config`, or the defaults when absent
pub(crate) fn load_transformer(args: &ArgMatches) -> UtmResult<UtmTransformer> {
    match args.get_one::<String>("config") {
        Some(path) => {
            info!("Loading converter configuration from {}", path);
            UtmTransformer::new(ConverterConfig::from_file(path)?)
        },
        None => Ok(UtmTransformer::default()),
    }
}

/// Factory for creating command instances based on CLI arguments
pub struct UtmkitCommandFactory;

impl UtmkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        UtmkitCommandFactory
    }
}

impl Default for UtmkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for UtmkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> UtmResult<Box<dyn Command + 'a>> {
        if args.get_flag("to-utm") {
            Ok(Box::new(ToUtmCommand::new(args, logger)?))
        } else if args.get_flag("to-geodetic") {
            Ok(Box::new(ToGeodeticCommand::new(args, logger)?))
        } else {
            Err(UtmError::GenericError("Choose a direction with --to-utm or --to-geodetic".to_string()))
        }
    }
}
