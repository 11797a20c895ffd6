//! Color-vision deficiency simulation and spectral color construction.
//!
//! All simulation happens in linear RGB: a color is decoded, multiplied by
//! the deficiency's 3x3 matrix, encoded again and clamped.
//!
//! # Example
//!
//! ```
//! use cvd_palette::{convert, BlindnessType, Color};
//!
//! let red = Color::new(255, 0, 0);
//! assert_eq!(convert(red, BlindnessType::Normal), red);
//!
//! let seen = convert(red, BlindnessType::Deuteranopia);
//! assert!(seen.g > 0, "red picks up green under deuteranopia");
//! ```

mod blindness;
mod converter;
mod matrix;
mod spectrum;

pub use blindness::{BlindnessType, ParseBlindnessError};
pub use converter::{convert, linear_to_standard, standard_to_linear};
pub use matrix::{apply_matrix, simulation_matrix, Matrix3, TRISTIMULUS_MATRIX};
pub use spectrum::{wavelength_to_color, xyz_to_color, VISIBLE_MAX_NM, VISIBLE_MIN_NM};
