//! Coordinate grammar strategy definitions
//!
//! Each grammar recognizes one textual notation for a coordinate pair. The
//! parser tries them in a fixed order and the first full match wins.

use crate::coordinate::Coordinate;
use crate::errors::GeoResult;

use super::bare_pair::BarePairGrammar;
use super::hemispheric::{DecimalGrammar, DecimalWithSymbolGrammar, DegreesDecimalMinutesGrammar, DmsGrammar};

/// Strategy for recognizing one coordinate notation
pub trait CoordinateGrammar: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Try to read a coordinate candidate from the whole of `text`
    ///
    /// # Returns
    /// * `None` - the text is not in this notation
    /// * `Some(Err(_))` - the notation matched but the values do not form a
    ///   coordinate; no later grammar is tried
    /// * `Some(Ok(_))` - an unnormalized candidate
    fn try_match(&self, text: &str) -> Option<GeoResult<Coordinate>>;
}

/// Factory for the ordered grammar list
pub struct GrammarFactory;

impl GrammarFactory {
    /// All grammars, highest precedence first
    pub fn ordered() -> Vec<Box<dyn CoordinateGrammar>> {
        vec![
            Box::new(DmsGrammar),
            Box::new(DegreesDecimalMinutesGrammar),
            Box::new(DecimalWithSymbolGrammar),
            Box::new(DecimalGrammar),
            Box::new(BarePairGrammar),
        ]
    }
}
