//! The closed set of simulated vision models.

use std::fmt;
use std::str::FromStr;

/// A color-vision model to simulate.
///
/// The declaration order is also the numeric index order accepted by
/// `TryFrom<usize>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BlindnessType {
    /// Typical trichromatic vision; simulation is the identity.
    #[default]
    Normal,
    /// Missing M cones (green-blind).
    Deuteranopia,
    /// Missing L cones (red-blind).
    Protanopia,
    /// Missing S cones (blue-blind).
    Tritanopia,
    /// Anomalous M cones (green-weak).
    Deuteranomaly,
    /// Anomalous L cones (red-weak).
    Protanomaly,
    /// Anomalous S cones (blue-weak).
    Tritanomaly,
}

impl BlindnessType {
    /// Every vision model, in index order.
    pub const ALL: [BlindnessType; 7] = [
        BlindnessType::Normal,
        BlindnessType::Deuteranopia,
        BlindnessType::Protanopia,
        BlindnessType::Tritanopia,
        BlindnessType::Deuteranomaly,
        BlindnessType::Protanomaly,
        BlindnessType::Tritanomaly,
    ];

    /// Human-readable name, also used as the name of simulated palettes.
    pub fn name(self) -> &'static str {
        match self {
            BlindnessType::Normal => "Normal",
            BlindnessType::Deuteranopia => "Deuteranopia",
            BlindnessType::Protanopia => "Protanopia",
            BlindnessType::Tritanopia => "Tritanopia",
            BlindnessType::Deuteranomaly => "Deuteranomaly",
            BlindnessType::Protanomaly => "Protanomaly",
            BlindnessType::Tritanomaly => "Tritanomaly",
        }
    }
}

impl fmt::Display for BlindnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a vision model cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBlindnessError {
    /// No model has this name
    UnknownName(String),
    /// No model has this index
    UnknownIndex(usize),
}

impl fmt::Display for ParseBlindnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBlindnessError::UnknownName(name) => {
                write!(f, "unknown blindness type: {:?}", name)
            }
            ParseBlindnessError::UnknownIndex(index) => {
                write!(
                    f,
                    "unknown blindness type index {} (expected 0..{})",
                    index,
                    BlindnessType::ALL.len()
                )
            }
        }
    }
}

impl std::error::Error for ParseBlindnessError {}

impl FromStr for BlindnessType {
    type Err = ParseBlindnessError;

    /// Parse a model by name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BlindnessType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseBlindnessError::UnknownName(s.to_string()))
    }
}

impl TryFrom<usize> for BlindnessType {
    type Error = ParseBlindnessError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        BlindnessType::ALL
            .get(index)
            .copied()
            .ok_or(ParseBlindnessError::UnknownIndex(index))
    }
}
