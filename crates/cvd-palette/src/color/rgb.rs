//! 8-bit color type
//!
//! `Color` is the value type palettes are made of: three gamma-encoded
//! channels, each in 0..=255 by construction.

use std::fmt;
use std::str::FromStr;

use super::hsv::Hsv;
use crate::palette::ParseColorError;

/// Largest Euclidean distance two colors can have in channel space,
/// `sqrt(255^2 * 3)`.
pub const MAX_CHANNEL_DISTANCE: f64 = 441.672_955_930_063_7;

/// A color with three 8-bit gamma-encoded channels.
///
/// # Example
/// ```
/// use cvd_palette::Color;
///
/// let orange: Color = "#FFA500".parse().unwrap();
/// assert_eq!(orange, Color::new(255, 165, 0));
/// assert_eq!(orange.to_hex(), "#ffa500");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    /// Pure black, also the result for out-of-domain wavelengths.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Pure white.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create a color from signed channel values, clamping each into 0..=255.
    ///
    /// # Example
    /// ```
    /// use cvd_palette::Color;
    /// assert_eq!(Color::from_clamped(-12, 300, 40), Color::new(0, 255, 40));
    /// ```
    #[inline]
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        Self::new(
            r.clamp(0, 255) as u8,
            g.clamp(0, 255) as u8,
            b.clamp(0, 255) as u8,
        )
    }

    /// Create a color from unit-range channels: scaled by 255, rounded and
    /// clamped.
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let scale = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(r), scale(g), scale(b))
    }

    /// Euclidean distance to `other` in channel space.
    ///
    /// Differences are taken on signed integers before squaring.
    #[inline]
    pub fn distance(self, other: Color) -> f64 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        ((dr * dr + dg * dg + db * db) as f64).sqrt()
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Hue/saturation/value representation.
    #[inline]
    pub fn to_hsv(self) -> Hsv {
        Hsv::from(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
