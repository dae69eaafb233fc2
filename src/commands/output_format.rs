//! Rendering of command results

use std::str::FromStr;
use crate::coordinate::Coordinate;
use crate::errors::GeoError;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `longitude,latitude`
    Text,
    /// `{"longitude":..,"latitude":..}`
    Json,
}

impl OutputFormat {
    /// Render a coordinate
    pub fn coordinate(&self, coord: &Coordinate) -> String {
        match self {
            OutputFormat::Text => coord.to_string(),
            OutputFormat::Json => coord.to_json(),
        }
    }

    /// Render a single decimal degree value
    pub fn value(&self, value: f64) -> String {
        match self {
            OutputFormat::Text => value.to_string(),
            OutputFormat::Json => format!("{{\"value\":{}}}", value),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(GeoError::GenericError(format!("Unknown output format: {}", other))),
        }
    }
}
