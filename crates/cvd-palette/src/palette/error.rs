//! Error types for palette operations
//!
//! This module provides error types for color parsing, palette construction
//! and registry lookups.

use std::fmt;
use std::num::ParseIntError;

use super::registry::PaletteId;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// A hex color string could not be parsed
    ParseColor {
        /// Position of the offending entry
        index: usize,
        /// Underlying parse failure
        source: ParseColorError,
    },
    /// A color order does not describe a permutation of the palette
    InvalidOrder {
        /// Length of the palette
        expected: usize,
        /// Length of the supplied order
        actual: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::ParseColor { index, source } => {
                write!(f, "invalid color at index {}: {}", index, source)
            }
            PaletteError::InvalidOrder { expected, actual } => {
                write!(
                    f,
                    "invalid color order: expected a permutation of {} indices, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error type for registry lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No palette was registered under this id
    UnknownPalette(PaletteId),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownPalette(id) => write!(f, "no palette registered as {}", id),
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_error_display() {
        assert_eq!(
            ParseColorError::InvalidLength.to_string(),
            "invalid hex color length (expected 3 or 6 characters)"
        );
    }

    #[test]
    fn test_palette_error_source_chain() {
        use std::error::Error;

        let err = PaletteError::ParseColor {
            index: 2,
            source: ParseColorError::InvalidLength,
        };
        assert_eq!(
            err.to_string(),
            "invalid color at index 2: invalid hex color length (expected 3 or 6 characters)"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::UnknownPalette(PaletteId::new(7));
        assert_eq!(err.to_string(), "no palette registered as #7");
    }
}
