//! Palette types and utilities
//!
//! This module provides the named color sequence at the heart of the crate,
//! preset palettes, an id-keyed registry of simulated views, and the error
//! types for parsing and lookup.

mod error;
mod palette;
pub mod presets;
mod registry;

pub use error::{PaletteError, ParseColorError, RegistryError};
pub use palette::Palette;
pub use registry::{PaletteId, PaletteRegistry};
