//! Coordinate truncation to a fixed number of decimal digits

use log::debug;
use crate::errors::{GeoError, GeoResult};
use super::point::Coordinate;
use super::precision::Precision;

/// Round a coordinate pair to `precision` decimal digits
///
/// Each value is scaled by `10^precision`, rounded half away from zero and
/// scaled back. Truncating an already truncated pair at the same or a higher
/// precision returns it unchanged.
///
/// # Arguments
/// * `longitude` - Longitude in decimal degrees
/// * `latitude` - Latitude in decimal degrees
/// * `precision` - Number of decimal digits, between 0 and 8
///
/// # Returns
/// The rounded coordinate, or an error if a value is not finite or the
/// precision is out of range
pub fn try_truncate_coordinates(longitude: f64, latitude: f64, precision: i64) -> GeoResult<Coordinate> {
    let coord = finite_coordinate(longitude, latitude)?;
    let precision = Precision::new(precision)?;
    Ok(truncate(coord, precision))
}

/// Round an already validated coordinate to the given precision
pub fn truncate(coord: Coordinate, precision: Precision) -> Coordinate {
    let factor = precision.factor();
    // f64::round sends ties away from zero
    let truncated = Coordinate::new(
        (coord.longitude * factor).round() / factor,
        (coord.latitude * factor).round() / factor,
    );
    debug!("Truncated {} to {} at precision {}", coord, truncated, precision);
    truncated
}

/// Build a coordinate, rejecting non-finite values
pub(crate) fn finite_coordinate(longitude: f64, latitude: f64) -> GeoResult<Coordinate> {
    if !longitude.is_finite() {
        return Err(GeoError::InvalidArgument {
            name: "longitude",
            reason: format!("must be a finite number, got {}", longitude),
        });
    }
    if !latitude.is_finite() {
        return Err(GeoError::InvalidArgument {
            name: "latitude",
            reason: format!("must be a finite number, got {}", latitude),
        });
    }
    Ok(Coordinate::new(longitude, latitude))
}

