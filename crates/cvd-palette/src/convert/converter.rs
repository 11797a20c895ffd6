//! Standard/linear conversions and deficiency simulation.

use super::blindness::BlindnessType;
use super::matrix::{apply_matrix, simulation_matrix};
use crate::color::{Color, LinearRgb};

/// Decode a color into linear RGB.
///
/// Each channel is normalized, raised to the 2.2 display gamma and then run
/// through the sRGB linearization curve.
#[inline]
pub fn standard_to_linear(color: Color) -> LinearRgb {
    LinearRgb::from(color)
}

/// Encode linear RGB back into a color, clamping every channel.
#[inline]
pub fn linear_to_standard(linear: LinearRgb) -> Color {
    Color::from(linear)
}

/// Simulate how `color` appears under `kind`.
///
/// `Normal` returns the input untouched. Every other model is applied in
/// linear RGB and the result is clamped into 0..=255.
pub fn convert(color: Color, kind: BlindnessType) -> Color {
    let Some(matrix) = simulation_matrix(kind) else {
        debug_assert_eq!(kind, BlindnessType::Normal);
        return color;
    };

    let linear = standard_to_linear(color);
    let (r, g, b) = apply_matrix(matrix, linear.r, linear.g, linear.b);
    linear_to_standard(LinearRgb::new(r, g, b))
}
