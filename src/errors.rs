//! Custom error types for coordinate processing

use std::fmt;
use std::io;

/// Coordinate-specific error types
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// A numeric argument is not a finite number
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },
    /// Precision outside of the supported digit range
    InvalidPrecision(i64),
    /// Direction letter is not one of N, S, E, W
    InvalidDirection(String),
    /// Text matches none of the known coordinate grammars
    UnrecognizedFormat(String),
    /// A grammar matched but its values could not form a coordinate
    RejectedCandidate {
        /// Name of the grammar that matched
        grammar: &'static str,
        /// Why the candidate was rejected
        reason: String,
    },
    /// Invalid configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl GeoError {
    /// Shorthand for a non-numeric argument error
    pub fn not_a_number(name: &'static str) -> Self {
        GeoError::InvalidArgument {
            name,
            reason: "must be a number".to_string(),
        }
    }
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::InvalidArgument { name, reason } => {
                write!(f, "Invalid argument: '{}', {}", name, reason)
            },
            GeoError::InvalidPrecision(p) => {
                write!(f, "Invalid argument: 'precision' must be an integer between 0 and 8, got {}", p)
            },
            GeoError::InvalidDirection(_) => {
                write!(f, "Invalid argument: 'dir' must be one of 'N', 'S', 'E', 'W'")
            },
            GeoError::UnrecognizedFormat(text) => write!(f, "Unrecognized coordinate format: '{}'", text),
            GeoError::RejectedCandidate { grammar, reason } => {
                write!(f, "Coordinates matched {} format but were rejected: {}", grammar, reason)
            },
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "Geokit error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

/// Result type for coordinate operations
pub type GeoResult<T> = Result<T, GeoError>;
