//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with a compile-time
//! distinction between 8-bit standard colors and linear light values.
//!
//! # Color Spaces
//!
//! - **Color**: 8-bit gamma-encoded channels. Use for palettes and I/O.
//! - **LinearRgb**: Linear light intensity. Use for deficiency simulation.
//! - **Hsv**: Hue/saturation/value. Use for presentation ordering.
//!
//! # Example
//!
//! ```
//! use cvd_palette::{Color, LinearRgb};
//!
//! let color = Color::new(128, 64, 32);
//! let linear = LinearRgb::from(color);
//! let back = Color::from(linear);
//! assert_eq!(back, color);
//! ```

mod hsv;
mod linear_rgb;
mod lut;
mod rgb;

pub use hsv::Hsv;
pub use linear_rgb::LinearRgb;
pub use rgb::{Color, MAX_CHANNEL_DISTANCE};
