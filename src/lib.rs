//! Hueforge
//!
//! Evolves color palettes that stay distinguishable under simulated
//! color-vision deficiencies, and reports how existing palettes fare.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod report;
pub mod services;
