//! Sexagesimal (degrees, minutes, seconds) to decimal degree conversion

use log::debug;
use crate::errors::{GeoError, GeoResult};
use super::hemisphere::Hemisphere;

/// Convert degrees, minutes and seconds to decimal degrees
///
/// The result is `|degrees| + minutes / 60 + seconds / 3600`, negated when
/// `direction` is `S` or `W` (case-insensitive). `N`, `E`, an empty string or
/// no direction at all leave it positive.
///
/// # Arguments
/// * `degrees` - Whole or fractional degrees; its sign is discarded
/// * `minutes` - Minutes of arc
/// * `seconds` - Seconds of arc
/// * `direction` - Optional hemisphere letter
///
/// # Returns
/// The signed decimal degree value, or an error naming the bad argument
pub fn try_convert_from_sexagesimal(
    degrees: f64,
    minutes: f64,
    seconds: f64,
    direction: Option<&str>,
) -> GeoResult<f64> {
    check_finite("deg", degrees)?;
    check_finite("min", minutes)?;
    check_finite("sec", seconds)?;

    let value = degrees.abs() + minutes / 60.0 + seconds / 3600.0;

    let result = match direction {
        Some(dir) if !dir.is_empty() => dir.parse::<Hemisphere>()?.apply(value),
        _ => value,
    };

    debug!("Converted {}° {}' {}\" {:?} to {}", degrees, minutes, seconds, direction, result);
    Ok(result)
}

fn check_finite(name: &'static str, value: f64) -> GeoResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeoError::not_a_number(name))
    }
}
