//! Coordinate handling for geographic positions
//!
//! This module provides the coordinate value type together with the numeric
//! operations on it: sexagesimal conversion, truncation and normalization.

mod point;
mod precision;
mod hemisphere;
mod sexagesimal;
mod truncate;
mod normalize;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::point::Coordinate;
pub use self::precision::{Precision, DEFAULT_PRECISION, MAX_PRECISION};
pub use self::hemisphere::{Axis, Hemisphere};
pub use self::sexagesimal::try_convert_from_sexagesimal;
pub use self::truncate::{truncate, try_truncate_coordinates};
pub use self::normalize::{normalize, try_normalize_coordinates, wrap_longitude};
