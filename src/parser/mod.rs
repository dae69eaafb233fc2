//! Free-form coordinate text parsing
//!
//! This module detects which notation a coordinate string is written in,
//! reads the longitude and latitude from it and normalizes the result.

mod grammar;
mod hemispheric;
mod bare_pair;
#[cfg(test)]
mod tests;

pub use self::grammar::{CoordinateGrammar, GrammarFactory};
pub use self::hemispheric::{DecimalGrammar, DecimalWithSymbolGrammar, DegreesDecimalMinutesGrammar, DmsGrammar};
pub use self::bare_pair::BarePairGrammar;

use log::debug;

use crate::coordinate::{normalize, Coordinate, Precision};
use crate::errors::{GeoError, GeoResult};

/// Parser trying each known notation in order of precedence
pub struct CoordinateParser {
    /// Grammars, highest precedence first
    grammars: Vec<Box<dyn CoordinateGrammar>>,
    /// Precision applied to parsed coordinates
    precision: Precision,
}

impl CoordinateParser {
    /// Create a parser with the default precision
    pub fn new() -> Self {
        Self::with_precision(Precision::default())
    }

    /// Create a parser rounding its results to `precision` digits
    pub fn with_precision(precision: Precision) -> Self {
        CoordinateParser {
            grammars: GrammarFactory::ordered(),
            precision,
        }
    }

    /// Precision applied to parsed coordinates
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Parse a coordinate string
    ///
    /// Surrounding whitespace and one pair of enclosing parentheses or square
    /// brackets are removed first. The first grammar matching the whole
    /// remaining text decides the outcome: if its values cannot be turned
    /// into a coordinate the parse fails without trying later grammars.
    ///
    /// # Arguments
    /// * `text` - Coordinate text such as `48°51'24"N 2°21'07"E`
    ///
    /// # Returns
    /// The normalized coordinate or an error describing why none was produced
    pub fn parse(&self, text: &str) -> GeoResult<Coordinate> {
        let cleaned = strip_enclosing(text);

        for grammar in &self.grammars {
            if let Some(candidate) = grammar.try_match(cleaned) {
                debug!("'{}' matched {} format", cleaned, grammar.name());
                let candidate = candidate?;
                if !candidate.is_finite() {
                    return Err(GeoError::RejectedCandidate {
                        grammar: grammar.name(),
                        reason: format!("values {} are not finite", candidate),
                    });
                }
                return Ok(normalize(candidate, self.precision));
            }
        }

        Err(GeoError::UnrecognizedFormat(text.to_string()))
    }
}

impl Default for CoordinateParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim whitespace and a single layer of `(...)` or `[...]`
fn strip_enclosing(text: &str) -> &str {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .or_else(|| trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')))
        .unwrap_or(trimmed);
    inner.trim()
}
