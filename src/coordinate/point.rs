//! Coordinate structure for representing geographic positions

use std::fmt;

/// A geographic position in decimal degrees
///
/// Produced fresh by every operation in this crate; once normalized,
/// `-180 <= longitude <= 180` and `-90 <= latitude <= 90`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Longitude in decimal degrees (east positive)
    pub longitude: f64,
    /// Latitude in decimal degrees (north positive)
    pub latitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Coordinate { longitude, latitude }
    }

    /// Check whether both values are finite numbers
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Check whether the coordinate lies within the geodetic ranges
    pub fn is_in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude) && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Position in GeoJSON axis order: `[longitude, latitude]`
    pub fn to_geojson_position(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// JSON object representation
    pub fn to_json(&self) -> String {
        format!("{{\"longitude\":{},\"latitude\":{}}}", self.longitude, self.latitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.longitude, coord.latitude)
    }
}
