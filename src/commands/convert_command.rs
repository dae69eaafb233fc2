//! Sexagesimal conversion command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::output_format::OutputFormat;
use crate::coordinate::try_convert_from_sexagesimal;
use crate::errors::{GeoError, GeoResult};

/// Command for converting degrees, minutes and seconds to decimal degrees
pub struct ConvertCommand {
    degrees: f64,
    minutes: f64,
    seconds: f64,
    direction: Option<String>,
    format: OutputFormat,
}

impl ConvertCommand {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - Matches of the `convert` subcommand
    /// * `format` - Output rendering
    pub fn new(args: &ArgMatches, format: OutputFormat) -> GeoResult<Self> {
        let degrees = *args.get_one::<f64>("degrees")
            .ok_or_else(|| GeoError::GenericError("Missing degrees".to_string()))?;
        let minutes = args.get_one::<f64>("minutes").copied().unwrap_or(0.0);
        let seconds = args.get_one::<f64>("seconds").copied().unwrap_or(0.0);
        let direction = args.get_one::<String>("direction").cloned();

        Ok(ConvertCommand { degrees, minutes, seconds, direction, format })
    }
}

impl Command for ConvertCommand {
    fn output(&self) -> GeoResult<String> {
        info!("Converting {}° {}' {}\" {:?}", self.degrees, self.minutes, self.seconds, self.direction);
        let value = try_convert_from_sexagesimal(
            self.degrees,
            self.minutes,
            self.seconds,
            self.direction.as_deref(),
        )?;
        Ok(self.format.value(value))
    }
}
