//! Hemisphere letters and the axis they bind to

use std::fmt;
use std::str::FromStr;
use crate::errors::GeoError;

/// Geographic axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/south axis
    Latitude,
    /// East/west axis
    Longitude,
}

/// Hemisphere indicated by one of the letters N, S, E, W
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parse a single letter, ignoring case
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Axis this letter assigns its value to
    pub fn axis(&self) -> Axis {
        match self {
            Hemisphere::North | Hemisphere::South => Axis::Latitude,
            Hemisphere::East | Hemisphere::West => Axis::Longitude,
        }
    }

    /// Whether values in this hemisphere are negative
    pub fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }

    /// Apply the hemisphere sign to a value
    ///
    /// S and W negate whatever they are given, so an already negative
    /// value comes out positive.
    pub fn apply(&self, value: f64) -> f64 {
        if self.is_negative() { -value } else { value }
    }

    /// Upper-case letter for this hemisphere
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }
}

impl FromStr for Hemisphere {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Hemisphere::from_letter(c)
                .ok_or_else(|| GeoError::InvalidDirection(s.to_string())),
            _ => Err(GeoError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
