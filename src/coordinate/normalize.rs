//! Coordinate normalization into geodetic ranges
//!
//! Latitude is settled first: every crossing of a pole reflects the latitude
//! back into `[-90, 90]` and moves the longitude to the opposite meridian.
//! Longitude is then wrapped around the antimeridian into `[-180, 180]`.

use log::debug;
use crate::errors::GeoResult;
use super::point::Coordinate;
use super::precision::Precision;
use super::truncate::{finite_coordinate, truncate};

/// Normalize a coordinate pair and round it to `precision` decimal digits
///
/// # Arguments
/// * `longitude` - Any finite longitude in decimal degrees
/// * `latitude` - Any finite latitude in decimal degrees
/// * `precision` - Number of decimal digits, between 0 and 8
///
/// # Returns
/// A coordinate with `-180 <= longitude <= 180` and `-90 <= latitude <= 90`,
/// or an error if a value is not finite or the precision is out of range
pub fn try_normalize_coordinates(longitude: f64, latitude: f64, precision: i64) -> GeoResult<Coordinate> {
    let coord = finite_coordinate(longitude, latitude)?;
    let precision = Precision::new(precision)?;
    Ok(normalize(coord, precision))
}

/// Normalize an already validated coordinate
pub fn normalize(coord: Coordinate, precision: Precision) -> Coordinate {
    let mut longitude = coord.longitude;
    let mut latitude = coord.latitude;

    // A whole turn of latitude is two pole crossings. Apply both flips once
    // and drop the turns; this bounds the reflection loop to two passes and
    // still sends a longitude of -180 to 180.
    if latitude.abs() > 360.0 {
        latitude = positive_zero(latitude % 360.0);
        longitude = wrap_longitude(wrap_longitude(longitude + 180.0) + 180.0);
    }

    while !(-90.0..=90.0).contains(&latitude) {
        if latitude > 90.0 {
            latitude = 180.0 - latitude;
        } else {
            latitude = -180.0 - latitude;
        }
        longitude = wrap_longitude(longitude + 180.0);
    }

    longitude = positive_zero(wrap_longitude(longitude));

    let mut normalized = truncate(Coordinate::new(longitude, latitude), precision);
    // Rounding a tiny negative longitude can produce -0 again
    normalized.longitude = positive_zero(normalized.longitude);

    debug!("Normalized {} to {} at precision {}", coord, normalized, precision);
    normalized
}

/// Wrap a longitude into `[-180, 180]`
///
/// Values already in range, including both 180 and -180, are returned as is.
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        return longitude;
    }
    // Remainder keeps the sign of the dividend, so it lies in (-360, 360)
    let mut wrapped = longitude % 360.0;
    if wrapped > 180.0 {
        wrapped -= 360.0;
    } else if wrapped < -180.0 {
        wrapped += 360.0;
    }
    wrapped
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
