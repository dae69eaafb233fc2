//! Decimal precision for coordinate rounding
//!
//! A precision is the number of decimal digits kept after the point,
//! between 0 and 8 inclusive.

use std::fmt;
use crate::errors::{GeoError, GeoResult};

/// Largest supported number of decimal digits
pub const MAX_PRECISION: u8 = 8;

/// Precision used when none is given
pub const DEFAULT_PRECISION: u8 = 7;

// Powers of ten for every supported precision
const FACTORS: [f64; 9] = [
    1.0,
    10.0,
    100.0,
    1_000.0,
    10_000.0,
    100_000.0,
    1_000_000.0,
    10_000_000.0,
    100_000_000.0,
];

// Approximate ground distance and typical usage per precision
const DESCRIPTIONS: [(&str, &str); 9] = [
    ("~111 km", "Country/region"),
    ("~11 km", "Large city"),
    ("~1.1 km", "Neighborhood"),
    ("~110 m", "Village"),
    ("~11 m", "Parcel/field"),
    ("~1.1 m", "Street/building"),
    ("~0.11 m (11 cm)", "GPS precision"),
    ("~1.1 cm", "Geodesy (default)"),
    ("~1.1 mm", "Topography"),
];

/// Validated number of decimal digits in `[0, 8]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u8);

impl Precision {
    /// Create a precision, rejecting anything outside `[0, 8]`
    pub fn new(digits: i64) -> GeoResult<Self> {
        if (0..=MAX_PRECISION as i64).contains(&digits) {
            Ok(Precision(digits as u8))
        } else {
            Err(GeoError::InvalidPrecision(digits))
        }
    }

    /// Number of decimal digits
    pub fn digits(&self) -> u8 {
        self.0
    }

    /// Multiplier used for rounding, `10^digits`
    pub fn factor(&self) -> f64 {
        FACTORS[self.0 as usize]
    }

    /// Approximate ground distance represented by the last kept digit
    pub fn approximate_distance(&self) -> &'static str {
        DESCRIPTIONS[self.0 as usize].0
    }

    /// What this precision is typically used for
    pub fn typical_usage(&self) -> &'static str {
        DESCRIPTIONS[self.0 as usize].1
    }

    /// Every supported precision, from coarsest to finest
    pub fn all() -> impl Iterator<Item = Precision> {
        (0..=MAX_PRECISION).map(Precision)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(DEFAULT_PRECISION)
    }
}

impl TryFrom<i64> for Precision {
    type Error = GeoError;

    fn try_from(digits: i64) -> GeoResult<Self> {
        Precision::new(digits)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
