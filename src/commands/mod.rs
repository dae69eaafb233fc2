//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod output_format;
pub mod parse_command;
pub mod pair_command;
pub mod convert_command;
pub mod precision_command;

pub use command_traits::{Command, CommandFactory};
pub use output_format::OutputFormat;
pub use parse_command::ParseCommand;
pub use pair_command::{PairCommand, PairOperation};
pub use convert_command::ConvertCommand;
pub use precision_command::PrecisionCommand;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::config::GeokitConfig;
use crate::errors::{GeoError, GeoResult};

fn precision_arg() -> Arg {
    Arg::new("precision")
        .short('p')
        .long("precision")
        .help("Decimal digits to keep (0-8)")
        .value_name("DIGITS")
        .value_parser(value_parser!(i64))
        .allow_negative_numbers(true)
}

fn pair_args(cmd: ClapCommand) -> ClapCommand {
    cmd.arg(
        Arg::new("longitude")
            .help("Longitude in decimal degrees")
            .required(true)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .index(1),
    )
    .arg(
        Arg::new("latitude")
            .help("Latitude in decimal degrees")
            .required(true)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .index(2),
    )
    .arg(precision_arg())
}

/// Build the command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geokit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, normalize and truncate geographic coordinates")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (text, json)")
                .value_name("FORMAT")
                .default_value("text")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("parse")
                .about("Parse free-form coordinate text")
                .arg(
                    Arg::new("text")
                        .help("Coordinate text, e.g. \"48°51'24\\\"N 2°21'07\\\"E\"")
                        .required(true)
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(precision_arg()),
        )
        .subcommand(pair_args(ClapCommand::new("normalize")
            .about("Wrap a longitude/latitude pair into valid ranges")))
        .subcommand(pair_args(ClapCommand::new("truncate")
            .about("Round a longitude/latitude pair")))
        .subcommand(
            ClapCommand::new("convert")
                .about("Convert degrees, minutes, seconds to decimal degrees")
                .arg(Arg::new("degrees").required(true).allow_negative_numbers(true)
                    .value_parser(value_parser!(f64)).index(1))
                .arg(Arg::new("minutes").allow_negative_numbers(true)
                    .value_parser(value_parser!(f64)).index(2))
                .arg(Arg::new("seconds").allow_negative_numbers(true)
                    .value_parser(value_parser!(f64)).index(3))
                .arg(
                    Arg::new("direction")
                        .short('d')
                        .long("direction")
                        .help("Hemisphere letter (N, S, E, W)")
                        .value_name("DIR"),
                ),
        )
        .subcommand(ClapCommand::new("precision").about("List supported precisions"))
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GeokitCommandFactory;

impl GeokitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeokitCommandFactory
    }
}

impl Default for GeokitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for GeokitCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &GeokitConfig) -> GeoResult<Box<dyn Command>> {
        let format = args.get_one::<String>("format")
            .map(|f| f.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or(OutputFormat::Text);
        let precision = config.precision;

        match args.subcommand() {
            Some(("parse", sub)) => Ok(Box::new(ParseCommand::new(sub, precision, format)?)),
            Some(("normalize", sub)) => Ok(Box::new(PairCommand::new(PairOperation::Normalize, sub, precision, format)?)),
            Some(("truncate", sub)) => Ok(Box::new(PairCommand::new(PairOperation::Truncate, sub, precision, format)?)),
            Some(("convert", sub)) => Ok(Box::new(ConvertCommand::new(sub, format)?)),
            Some(("precision", _)) => Ok(Box::new(PrecisionCommand::new(precision, format))),
            Some((name, _)) => Err(GeoError::GenericError(format!("Unknown command: {}", name))),
            None => Err(GeoError::GenericError("No command given".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> GeoResult<String> {
        let matches = build_cli().try_get_matches_from(args)
            .map_err(|e| GeoError::GenericError(e.to_string()))?;
        let command = GeokitCommandFactory::new().create_command(&matches, &GeokitConfig::default())?;
        command.output()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(run(&["geokit", "parse", "48.8566 N, 2.3522 E"]).unwrap(), "2.3522,48.8566");
        assert_eq!(run(&["geokit", "parse", "48.8566, 2.3522", "-p", "1"]).unwrap(), "2.4,48.9");
        assert!(run(&["geokit", "parse", "nowhere"]).is_err());
    }

    #[test]
    fn test_pair_commands() {
        assert_eq!(run(&["geokit", "normalize", "10", "95", "--precision", "2"]).unwrap(), "-170,85");
        assert_eq!(run(&["geokit", "normalize", "-185", "48.8567"]).unwrap(), "175,48.8567");
        assert_eq!(run(&["geokit", "truncate", "2.355", "48.865", "-p", "2"]).unwrap(), "2.36,48.87");
        assert!(run(&["geokit", "truncate", "2.35", "48.86", "-p", "9"]).is_err());
    }

    #[test]
    fn test_convert_command() {
        assert_eq!(run(&["geokit", "convert", "10", "30", "-d", "W"]).unwrap(), "-10.5");
        assert_eq!(run(&["geokit", "--format", "json", "convert", "10", "30"]).unwrap(), "{\"value\":10.5}");
        assert!(run(&["geokit", "convert", "10", "-d", "Q"]).is_err());
    }

    #[test]
    fn test_json_output() {
        assert_eq!(
            run(&["geokit", "--format", "json", "normalize", "540", "0"]).unwrap(),
            "{\"longitude\":180,\"latitude\":0}"
        );
        assert!(run(&["geokit", "--format", "xml", "precision"]).is_err());
    }

    #[test]
    fn test_precision_command() {
        let output = run(&["geokit", "precision"]).unwrap();
        assert_eq!(output.lines().count(), 9);
        assert!(output.lines().nth(7).unwrap().starts_with("* 7"));
    }
}
