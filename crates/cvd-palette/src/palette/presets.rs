//! Preset palettes usable as an alternative to random initial populations.

use super::palette::Palette;
use crate::color::Color;
use crate::convert::{wavelength_to_color, VISIBLE_MAX_NM, VISIBLE_MIN_NM};

/// `count` black entries.
pub fn all_black(count: usize) -> Palette {
    Palette::new("All Black", vec![Color::BLACK; count])
}

/// `count` spectral colors at evenly spaced wavelengths from 380 nm to
/// 750 nm inclusive.
///
/// # Example
/// ```
/// use cvd_palette::palette::presets;
///
/// let spectrum = presets::visible_spectrum(16);
/// assert_eq!(spectrum.len(), 16);
/// assert_eq!(spectrum.name(), "Visible Spectrum");
/// ```
pub fn visible_spectrum(count: usize) -> Palette {
    let span = VISIBLE_MAX_NM - VISIBLE_MIN_NM;
    let colors = (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.0
            };
            wavelength_to_color(VISIBLE_MIN_NM + span * t)
        })
        .collect();
    Palette::new("Visible Spectrum", colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_black() {
        let palette = all_black(256);
        assert_eq!(palette.len(), 256);
        assert!(palette.colors().iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn test_visible_spectrum_endpoints() {
        let palette = visible_spectrum(8);
        assert_eq!(palette.colors()[0], wavelength_to_color(VISIBLE_MIN_NM));
        assert_eq!(palette.colors()[7], wavelength_to_color(VISIBLE_MAX_NM));
        assert!(palette.colors().iter().all(|&c| c != Color::BLACK));
    }

    #[test]
    fn test_visible_spectrum_small_counts() {
        assert!(visible_spectrum(0).is_empty());
        assert_eq!(
            visible_spectrum(1).colors(),
            &[wavelength_to_color(VISIBLE_MIN_NM)]
        );
    }
}
