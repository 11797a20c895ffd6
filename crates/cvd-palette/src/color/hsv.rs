//! HSV representation, used to order palettes for presentation.

use super::rgb::Color;

/// A color in hue/saturation/value form.
///
/// Hue is in degrees, 0.0..360.0. Achromatic colors have hue 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue angle in degrees
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Value (0.0..=1.0)
    pub v: f64,
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        let r = color.r as f64 / 255.0;
        let g = color.g as f64 / 255.0;
        let b = color.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Self { h, s, v: max }
    }
}
