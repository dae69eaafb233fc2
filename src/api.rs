use lazy_static::lazy_static;
use log::{debug, error};

use crate::config::GeokitConfig;
use crate::coordinate::{
    try_convert_from_sexagesimal, try_normalize_coordinates, try_truncate_coordinates,
    Coordinate, Precision, DEFAULT_PRECISION,
};
use crate::errors::{GeoError, GeoResult};
use crate::parser::CoordinateParser;

lazy_static! {
    // Shared by every `parse_coordinates` call
    static ref DEFAULT_PARSER: CoordinateParser = CoordinateParser::new();
}

/// Convert degrees, minutes and seconds to signed decimal degrees
///
/// # Arguments
/// * `degrees` - Degrees; the sign is ignored
/// * `minutes` - Optional minutes, 0 when absent
/// * `seconds` - Optional seconds, 0 when absent
/// * `direction` - Optional hemisphere letter (N, S, E, W, any case)
///
/// # Returns
/// The decimal degree value, or `None` when an argument is invalid
pub fn convert_from_sexagesimal(
    degrees: f64,
    minutes: Option<f64>,
    seconds: Option<f64>,
    direction: Option<&str>,
) -> Option<f64> {
    report(try_convert_from_sexagesimal(
        degrees,
        minutes.unwrap_or(0.0),
        seconds.unwrap_or(0.0),
        direction,
    ))
}

/// Normalize a coordinate pair into geodetic ranges and round it
///
/// `precision` defaults to 7 digits. Returns `None` for non-finite values
/// or a precision outside `[0, 8]`.
pub fn normalize_coordinates(longitude: f64, latitude: f64, precision: Option<i64>) -> Option<Coordinate> {
    report(try_normalize_coordinates(
        longitude,
        latitude,
        precision.unwrap_or(DEFAULT_PRECISION as i64),
    ))
}

/// Round a coordinate pair to a number of decimal digits
///
/// `precision` defaults to 7 digits. Returns `None` for non-finite values
/// or a precision outside `[0, 8]`.
pub fn truncate_coordinates(longitude: f64, latitude: f64, precision: Option<i64>) -> Option<Coordinate> {
    report(try_truncate_coordinates(
        longitude,
        latitude,
        precision.unwrap_or(DEFAULT_PRECISION as i64),
    ))
}

/// Parse free-form coordinate text
///
/// Returns `None` when the text matches no known notation or its values
/// cannot be normalized.
pub fn parse_coordinates(text: &str) -> Option<Coordinate> {
    report(DEFAULT_PARSER.parse(text))
}

// Failures are diagnostics only; callers just see the absence of a value.
fn report<T>(result: GeoResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e @ GeoError::UnrecognizedFormat(_)) => {
            debug!("{}", e);
            None
        },
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

/// Main interface to the geokit library
///
/// Carries a default precision taken from the configuration and shares one
/// parser across calls.
pub struct Geokit {
    precision: Precision,
    parser: CoordinateParser,
}

impl Geokit {
    /// Create a Geokit instance using the default precision
    pub fn new() -> Self {
        Self::with_precision(Precision::default())
    }

    /// Create a Geokit instance with an explicit default precision
    pub fn with_precision(precision: Precision) -> Self {
        Geokit {
            precision,
            parser: CoordinateParser::with_precision(precision),
        }
    }

    /// Create a Geokit instance from a loaded configuration
    pub fn from_config(config: &GeokitConfig) -> Self {
        Self::with_precision(config.precision)
    }

    /// Default precision used when none is given
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Parse coordinate text
    pub fn parse(&self, text: &str) -> GeoResult<Coordinate> {
        self.parser.parse(text)
    }

    /// Normalize a coordinate pair, falling back to the default precision
    pub fn normalize(&self, longitude: f64, latitude: f64, precision: Option<i64>) -> GeoResult<Coordinate> {
        let digits = precision.unwrap_or(self.precision.digits() as i64);
        try_normalize_coordinates(longitude, latitude, digits)
    }

    /// Truncate a coordinate pair, falling back to the default precision
    pub fn truncate(&self, longitude: f64, latitude: f64, precision: Option<i64>) -> GeoResult<Coordinate> {
        let digits = precision.unwrap_or(self.precision.digits() as i64);
        try_truncate_coordinates(longitude, latitude, digits)
    }

    /// Convert degrees, minutes and seconds to decimal degrees
    pub fn convert(&self, degrees: f64, minutes: f64, seconds: f64, direction: Option<&str>) -> GeoResult<f64> {
        try_convert_from_sexagesimal(degrees, minutes, seconds, direction)
    }
}

impl Default for Geokit {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_default_parser_precision() {
        assert_eq!(DEFAULT_PARSER.precision(), Precision::default());
        assert_eq!(
            parse_coordinates("48.85666669432, 2.35222229876"),
            Some(Coordinate::new(2.3522223, 48.8566667))
        );
    }

    #[test]
    fn test_parse_coordinates_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                thread::spawn(move || {
                    let text = format!("{}.5 N, 2.25 E", 40 + i);
                    parse_coordinates(&text)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let coord = handle.join().unwrap();
            assert_eq!(coord, Some(Coordinate::new(2.25, 40.5 + i as f64)));
        }
    }
}
