//! Grammars whose values carry a hemisphere letter
//!
//! Both groups of these notations end with one of N, S, E, W. The letter,
//! not the position of the group, decides which axis a value belongs to.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use log::debug;

use crate::coordinate::{Axis, Coordinate, Hemisphere};
use crate::errors::{GeoError, GeoResult};
use super::grammar::CoordinateGrammar;

lazy_static! {
    // 48°51'24"N 2°21'07"E
    static ref DMS: Regex = Regex::new(concat!(
        r#"^([0-9]+)°\s*([0-9]+)['′]\s*([0-9]+(?:\.[0-9]+)?)(?:"|″|'')\s*([NSEWnsew])"#,
        r#"(?:\s*,\s*|\s+)"#,
        r#"([0-9]+)°\s*([0-9]+)['′]\s*([0-9]+(?:\.[0-9]+)?)(?:"|″|'')\s*([NSEWnsew])$"#,
    )).unwrap();

    // 48°51.4'N 2°21.12'E
    static ref DDM: Regex = Regex::new(concat!(
        r"^([0-9]+)°\s*([0-9]+(?:\.[0-9]+)?)['′]\s*([NSEWnsew])",
        r"(?:\s*,\s*|\s+)",
        r"([0-9]+)°\s*([0-9]+(?:\.[0-9]+)?)['′]\s*([NSEWnsew])$",
    )).unwrap();

    // 48.8566° N, 2.3522° E
    static ref DD_SYMBOL: Regex = Regex::new(concat!(
        r"^([+-]?[0-9]+(?:\.[0-9]+)?)°\s*([NSEWnsew])",
        r"\s*,?\s*",
        r"([+-]?[0-9]+(?:\.[0-9]+)?)°\s*([NSEWnsew])$",
    )).unwrap();

    // 48.8566 N, 2.3522 E
    static ref DD_PLAIN: Regex = Regex::new(concat!(
        r"^([+-]?[0-9]+(?:\.[0-9]+)?)\s*([NSEWnsew])",
        r"\s*,?\s*",
        r"([+-]?[0-9]+(?:\.[0-9]+)?)\s*([NSEWnsew])$",
    )).unwrap();
}

/// Degrees, minutes and seconds: `48°51'24"N 2°21'07"E`
pub struct DmsGrammar;

/// Degrees and decimal minutes: `48°51.4'N 2°21.12'E`
pub struct DegreesDecimalMinutesGrammar;

/// Decimal degrees with a degree sign: `48.8566° N, 2.3522° E`
pub struct DecimalWithSymbolGrammar;

/// Decimal degrees without a degree sign: `48.8566 N, 2.3522 E`
pub struct DecimalGrammar;

impl CoordinateGrammar for DmsGrammar {
    fn name(&self) -> &'static str {
        "DMS"
    }

    fn try_match(&self, text: &str) -> Option<GeoResult<Coordinate>> {
        let caps = DMS.captures(text)?;
        Some(assign_axes(self.name(), || {
            let first = number(&caps, 1)? + number(&caps, 2)? / 60.0 + number(&caps, 3)? / 3600.0;
            let second = number(&caps, 5)? + number(&caps, 6)? / 60.0 + number(&caps, 7)? / 3600.0;
            Ok([(first, letter(&caps, 4)?), (second, letter(&caps, 8)?)])
        }))
    }
}

impl CoordinateGrammar for DegreesDecimalMinutesGrammar {
    fn name(&self) -> &'static str {
        "DDM"
    }

    fn try_match(&self, text: &str) -> Option<GeoResult<Coordinate>> {
        let caps = DDM.captures(text)?;
        Some(assign_axes(self.name(), || {
            let first = number(&caps, 1)? + number(&caps, 2)? / 60.0;
            let second = number(&caps, 4)? + number(&caps, 5)? / 60.0;
            Ok([(first, letter(&caps, 3)?), (second, letter(&caps, 6)?)])
        }))
    }
}

impl CoordinateGrammar for DecimalWithSymbolGrammar {
    fn name(&self) -> &'static str {
        "decimal degrees with symbol"
    }

    fn try_match(&self, text: &str) -> Option<GeoResult<Coordinate>> {
        let caps = DD_SYMBOL.captures(text)?;
        Some(assign_axes(self.name(), || decimal_groups(&caps)))
    }
}

impl CoordinateGrammar for DecimalGrammar {
    fn name(&self) -> &'static str {
        "decimal degrees"
    }

    fn try_match(&self, text: &str) -> Option<GeoResult<Coordinate>> {
        let caps = DD_PLAIN.captures(text)?;
        Some(assign_axes(self.name(), || decimal_groups(&caps)))
    }
}

// A literal minus sign is kept; S/W then negate again.
fn decimal_groups(caps: &Captures) -> GeoResult<[(f64, Hemisphere); 2]> {
    Ok([
        (number(caps, 1)?, letter(caps, 2)?),
        (number(caps, 3)?, letter(caps, 4)?),
    ])
}

/// Route each signed value to the axis named by its hemisphere letter
fn assign_axes<F>(grammar: &'static str, groups: F) -> GeoResult<Coordinate>
where
    F: FnOnce() -> GeoResult<[(f64, Hemisphere); 2]>,
{
    let [(first, first_hemi), (second, second_hemi)] = groups()?;

    if first_hemi.axis() == second_hemi.axis() {
        return Err(GeoError::RejectedCandidate {
            grammar,
            reason: format!("both values are marked {} and {}", first_hemi, second_hemi),
        });
    }

    let first = first_hemi.apply(first);
    let second = second_hemi.apply(second);

    let candidate = match first_hemi.axis() {
        Axis::Latitude => Coordinate::new(second, first),
        Axis::Longitude => Coordinate::new(first, second),
    };
    debug!("{} grammar produced candidate {}", grammar, candidate);
    Ok(candidate)
}

fn number(caps: &Captures, index: usize) -> GeoResult<f64> {
    let raw = caps.get(index).map(|m| m.as_str()).unwrap_or("");
    raw.parse::<f64>()
        .map_err(|_| GeoError::GenericError(format!("Invalid number in coordinate: '{}'", raw)))
}

fn letter(caps: &Captures, index: usize) -> GeoResult<Hemisphere> {
    let raw = caps.get(index).map(|m| m.as_str()).unwrap_or("");
    raw.parse::<Hemisphere>()
}
