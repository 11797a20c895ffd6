//! Spectral and tristimulus color construction.

use super::matrix::{apply_matrix, TRISTIMULUS_MATRIX};
use crate::color::Color;

/// Shortest wavelength mapped to a visible color, in nanometers.
pub const VISIBLE_MIN_NM: f64 = 380.0;

/// Longest wavelength mapped to a visible color, in nanometers.
pub const VISIBLE_MAX_NM: f64 = 750.0;

// Band edges of the piecewise construction
const VIOLET_END: f64 = 440.0;
const BLUE_END: f64 = 490.0;
const CYAN_END: f64 = 510.0;
const GREEN_END: f64 = 580.0;
const ORANGE_END: f64 = 645.0;
const SHORT_ROLLOFF_END: f64 = 420.0;

/// Approximate the color of monochromatic light at `wavelength` nm.
///
/// Channels are built piecewise-linearly per visible band. Intensity rolls
/// off towards both ends of the spectrum, reaching 30% at 380 nm and 750 nm.
/// Wavelengths outside 380..=750 (and NaN) map to black.
///
/// # Example
/// ```
/// use cvd_palette::{wavelength_to_color, Color};
///
/// assert_eq!(wavelength_to_color(530.0).g, 255);
/// assert_eq!(wavelength_to_color(10.0), Color::BLACK);
/// ```
pub fn wavelength_to_color(wavelength: f64) -> Color {
    if !(VISIBLE_MIN_NM..=VISIBLE_MAX_NM).contains(&wavelength) {
        return Color::BLACK;
    }

    let w = wavelength;
    let (r, g, b) = if w < VIOLET_END {
        ((VIOLET_END - w) / (VIOLET_END - VISIBLE_MIN_NM), 0.0, 1.0)
    } else if w < BLUE_END {
        (0.0, (w - VIOLET_END) / (BLUE_END - VIOLET_END), 1.0)
    } else if w < CYAN_END {
        (0.0, 1.0, (CYAN_END - w) / (CYAN_END - BLUE_END))
    } else if w < GREEN_END {
        ((w - CYAN_END) / (GREEN_END - CYAN_END), 1.0, 0.0)
    } else if w < ORANGE_END {
        (1.0, (ORANGE_END - w) / (ORANGE_END - GREEN_END), 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };

    let factor = if w < SHORT_ROLLOFF_END {
        0.3 + 0.7 * (w - VISIBLE_MIN_NM) / (SHORT_ROLLOFF_END - VISIBLE_MIN_NM)
    } else if w > ORANGE_END {
        0.3 + 0.7 * (VISIBLE_MAX_NM - w) / (VISIBLE_MAX_NM - ORANGE_END)
    } else {
        1.0
    };

    Color::from_unit(r * factor, g * factor, b * factor)
}

/// Convert CIE XYZ tristimulus values to a color.
///
/// The linear result of the tristimulus matrix is scaled by 255, rounded
/// and clamped; no transfer curve is applied.
pub fn xyz_to_color(x: f64, y: f64, z: f64) -> Color {
    let (r, g, b) = apply_matrix(&TRISTIMULUS_MATRIX, x, y, z);
    Color::from_unit(r, g, b)
}
