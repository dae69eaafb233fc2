//! Grammar for two bare signed numbers
//!
//! Without hemisphere letters the axis of each value has to be guessed from
//! its magnitude. The guess prefers `latitude, longitude` order, so a pair
//! such as `10, 20` is read as latitude 10, longitude 20 even though the
//! reverse is equally valid. Callers holding GeoJSON-ordered text
//! (`longitude, latitude`) should not rely on this grammar.

use lazy_static::lazy_static;
use regex::Regex;
use log::debug;

use crate::coordinate::Coordinate;
use crate::errors::{GeoError, GeoResult};
use super::grammar::CoordinateGrammar;

lazy_static! {
    // 48.8566, 2.3522 / 48.8566;2.3522 / 48.8566 2.3522
    static ref BARE_PAIR: Regex = Regex::new(
        r"^([+-]?[0-9]+(?:\.[0-9]+)?)(?:\s*[,;]\s*|\s+)([+-]?[0-9]+(?:\.[0-9]+)?)$"
    ).unwrap();
}

/// Two signed decimals separated by a comma, semicolon or whitespace
pub struct BarePairGrammar;

impl CoordinateGrammar for BarePairGrammar {
    fn name(&self) -> &'static str {
        "bare pair"
    }

    fn try_match(&self, text: &str) -> Option<GeoResult<Coordinate>> {
        let caps = BARE_PAIR.captures(text)?;
        let parse = |index: usize| -> GeoResult<f64> {
            let raw = &caps[index];
            raw.parse::<f64>()
                .map_err(|_| GeoError::GenericError(format!("Invalid number in coordinate: '{}'", raw)))
        };
        Some(parse(1).and_then(|first| parse(2).and_then(|second| self.resolve_axes(first, second))))
    }
}

impl BarePairGrammar {
    /// Decide which value is the latitude
    pub fn resolve_axes(&self, first: f64, second: f64) -> GeoResult<Coordinate> {
        let candidate = if first.abs() <= 90.0 && second.abs() <= 180.0 {
            Coordinate::new(second, first)
        } else if second.abs() <= 90.0 && first.abs() <= 180.0 {
            Coordinate::new(first, second)
        } else {
            return Err(GeoError::RejectedCandidate {
                grammar: self.name(),
                reason: format!("neither ordering of {} and {} is a valid latitude/longitude", first, second),
            });
        };
        debug!("Bare pair ({}, {}) read as {}", first, second, candidate);
        Ok(candidate)
    }
}
