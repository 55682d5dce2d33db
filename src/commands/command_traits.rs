//! Traits shared by the conversion commands

use crate::utils::logger::Logger;
use crate::errors::UtmResult;

/// One conversion requested on the command line
///
/// Commands are built from parsed arguments, so all input validation happens
/// before `execute` runs.
pub trait Command {
    /// Run the conversion and render it as the line printed on stdout
    fn execute(&self) -> UtmResult<String>;
}

/// Chooses a conversion direction from the parsed arguments
pub trait CommandFactory<'a> {
    /// Build the `to-utm` or `to-geodetic` command, validating its inputs
    ///
    /// Each conversion is recorded through `logger`.
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> UtmResult<Box<dyn Command + 'a>>;
}
