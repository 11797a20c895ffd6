//! Standard-to-linear lookup table
//!
//! The 256-entry decode table is generated at compile time by build.rs.
//! Encoding takes arbitrary floating point input and is computed directly.

include!(concat!(env!("OUT_DIR"), "/standard_lut.rs"));

/// Display gamma applied on top of the sRGB transfer curve.
pub const DISPLAY_GAMMA: f64 = 2.2;

/// Decode an 8-bit channel to linear intensity.
#[inline]
pub fn standard_to_linear(channel: u8) -> f64 {
    STANDARD_TO_LINEAR[channel as usize]
}

/// Encode a linear intensity back to an 8-bit channel.
///
/// Applies the inverse sRGB piecewise rule followed by the inverse display
/// gamma, so that `linear_to_standard(standard_to_linear(c)) == c`. Values
/// outside 0.0..=1.0 are clamped after rounding.
#[inline]
pub fn linear_to_standard(linear: f64) -> u8 {
    let encoded = if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    let normalized = encoded.max(0.0).powf(1.0 / DISPLAY_GAMMA);
    (normalized * 255.0).round().clamp(0.0, 255.0) as u8
}
