//! Geographic coordinate toolkit
//!
//! Converts human-written coordinate text into bounded, precision-limited
//! decimal degrees, and keeps any longitude/latitude pair within geodetic
//! ranges across pole crossings and the antimeridian.

pub mod errors;
pub mod coordinate;
pub mod parser;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{
    convert_from_sexagesimal, normalize_coordinates, parse_coordinates, truncate_coordinates, Geokit,
};
pub use crate::config::GeokitConfig;
pub use crate::coordinate::{Axis, Coordinate, Hemisphere, Precision};
pub use crate::errors::{GeoError, GeoResult};
pub use crate::parser::CoordinateParser;
