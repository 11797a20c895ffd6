//! Linear RGB color type
//!
//! Linear RGB is the space where deficiency matrices are physically
//! meaningful. Every simulation round-trips through it.

use super::lut::{linear_to_standard, standard_to_linear};
use super::rgb::Color;

/// A color in linear RGB space.
///
/// Values are typically in the range 0.0..=1.0 but may leave it after a
/// matrix is applied; conversion back to [`Color`] clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for LinearRgb {
    /// Decode via the compile-time lookup table.
    fn from(color: Color) -> Self {
        Self {
            r: standard_to_linear(color.r),
            g: standard_to_linear(color.g),
            b: standard_to_linear(color.b),
        }
    }
}

impl From<LinearRgb> for Color {
    /// Encode, round and clamp each channel into 0..=255.
    fn from(linear: LinearRgb) -> Self {
        Color::new(
            linear_to_standard(linear.r),
            linear_to_standard(linear.g),
            linear_to_standard(linear.b),
        )
    }
}
