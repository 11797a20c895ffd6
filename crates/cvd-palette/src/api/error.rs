//! Unified error type for the cvd-palette public API.
//!
//! [`CvdError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::convert::ParseBlindnessError;
use crate::optimize::OptimizeError;
use crate::palette::{PaletteError, ParseColorError, RegistryError};
use std::fmt;

/// Unified error type for the cvd-palette public API.
///
/// # Example
///
/// ```
/// use cvd_palette::{BlindnessType, CvdError, Palette};
///
/// fn load() -> Result<(Palette, BlindnessType), CvdError> {
///     let palette = Palette::from_hex("brand", &["#0072b2", "#e69f00"])?;
///     let kind: BlindnessType = "protanopia".parse()?;
///     Ok((palette, kind))
/// }
/// # assert!(load().is_ok());
/// ```
#[derive(Debug)]
pub enum CvdError {
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Palette construction or reordering error
    Palette(PaletteError),
    /// Unknown vision deficiency name or index
    ParseBlindness(ParseBlindnessError),
    /// Registry lookup error
    Registry(RegistryError),
    /// Optimizer configuration or operator error
    Optimize(OptimizeError),
}

impl fmt::Display for CvdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CvdError::ParseColor(err) => write!(f, "color parse error: {}", err),
            CvdError::Palette(err) => write!(f, "palette error: {}", err),
            CvdError::ParseBlindness(err) => write!(f, "vision model error: {}", err),
            CvdError::Registry(err) => write!(f, "registry error: {}", err),
            CvdError::Optimize(err) => write!(f, "optimizer error: {}", err),
        }
    }
}

impl std::error::Error for CvdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CvdError::ParseColor(err) => Some(err),
            CvdError::Palette(err) => Some(err),
            CvdError::ParseBlindness(err) => Some(err),
            CvdError::Registry(err) => Some(err),
            CvdError::Optimize(err) => Some(err),
        }
    }
}

impl From<ParseColorError> for CvdError {
    fn from(err: ParseColorError) -> Self {
        CvdError::ParseColor(err)
    }
}

impl From<PaletteError> for CvdError {
    fn from(err: PaletteError) -> Self {
        CvdError::Palette(err)
    }
}

impl From<ParseBlindnessError> for CvdError {
    fn from(err: ParseBlindnessError) -> Self {
        CvdError::ParseBlindness(err)
    }
}

impl From<RegistryError> for CvdError {
    fn from(err: RegistryError) -> Self {
        CvdError::Registry(err)
    }
}

impl From<OptimizeError> for CvdError {
    fn from(err: OptimizeError) -> Self {
        CvdError::Optimize(err)
    }
}
