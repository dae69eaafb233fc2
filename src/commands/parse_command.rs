//! Coordinate text parsing command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::output_format::OutputFormat;
use crate::coordinate::Precision;
use crate::errors::{GeoError, GeoResult};
use crate::parser::CoordinateParser;

/// Command for parsing free-form coordinate text
pub struct ParseCommand {
    /// Text to parse
    text: String,
    /// Precision of the result
    precision: Precision,
    /// Output rendering
    format: OutputFormat,
}

impl ParseCommand {
    /// Create a new parse command
    ///
    /// # Arguments
    /// * `args` - Matches of the `parse` subcommand
    /// * `precision` - Precision to use when `--precision` is absent
    /// * `format` - Output rendering
    pub fn new(args: &ArgMatches, precision: Precision, format: OutputFormat) -> GeoResult<Self> {
        let text = args.get_one::<String>("text")
            .ok_or_else(|| GeoError::GenericError("Missing coordinate text".to_string()))?
            .clone();

        let precision = match args.get_one::<i64>("precision") {
            Some(digits) => Precision::new(*digits)?,
            None => precision,
        };

        Ok(ParseCommand { text, precision, format })
    }
}

impl Command for ParseCommand {
    fn output(&self) -> GeoResult<String> {
        info!("Parsing '{}' at precision {}", self.text, self.precision);
        let coord = CoordinateParser::with_precision(self.precision).parse(&self.text)?;
        Ok(self.format.coordinate(&coord))
    }
}
