//! Normalize and truncate commands
//!
//! Both take a longitude/latitude pair and an optional precision.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::output_format::OutputFormat;
use crate::coordinate::{try_normalize_coordinates, try_truncate_coordinates, Precision};
use crate::errors::{GeoError, GeoResult};

/// Operation applied to the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOperation {
    Normalize,
    Truncate,
}

/// Command operating on a longitude/latitude pair
pub struct PairCommand {
    operation: PairOperation,
    longitude: f64,
    latitude: f64,
    /// Requested digits, validated when the command runs
    precision: i64,
    format: OutputFormat,
}

impl PairCommand {
    /// Create a new pair command
    ///
    /// # Arguments
    /// * `operation` - Normalize or truncate
    /// * `args` - Matches of the subcommand
    /// * `precision` - Precision to use when `--precision` is absent
    /// * `format` - Output rendering
    pub fn new(operation: PairOperation, args: &ArgMatches, precision: Precision, format: OutputFormat) -> GeoResult<Self> {
        let longitude = *args.get_one::<f64>("longitude")
            .ok_or_else(|| GeoError::GenericError("Missing longitude".to_string()))?;
        let latitude = *args.get_one::<f64>("latitude")
            .ok_or_else(|| GeoError::GenericError("Missing latitude".to_string()))?;
        let precision = args.get_one::<i64>("precision")
            .copied()
            .unwrap_or(precision.digits() as i64);

        Ok(PairCommand { operation, longitude, latitude, precision, format })
    }
}

impl Command for PairCommand {
    fn output(&self) -> GeoResult<String> {
        info!("{:?} ({}, {}) at precision {}", self.operation, self.longitude, self.latitude, self.precision);
        let coord = match self.operation {
            PairOperation::Normalize => try_normalize_coordinates(self.longitude, self.latitude, self.precision)?,
            PairOperation::Truncate => try_truncate_coordinates(self.longitude, self.latitude, self.precision)?,
        };
        Ok(self.format.coordinate(&coord))
    }
}
