#![allow(clippy::excessive_precision, clippy::module_inception)]

//! cvd-palette: Palette search under simulated color-vision deficiencies
//!
//! This library simulates how colors appear to people with a color-vision
//! deficiency, scores palettes by how distinguishable their colors remain,
//! and evolves palettes that stay distinguishable.
//!
//! # Quick Start
//!
//! The [`PaletteSearch`] builder is the primary entry point:
//!
//! ```
//! use cvd_palette::{BlindnessType, PaletteSearch};
//!
//! let result = PaletteSearch::new()
//!     .population_size(8)
//!     .palette_length(4)
//!     .generations(10)
//!     .blindness(BlindnessType::Protanopia)
//!     .seed(1)
//!     .run()
//!     .unwrap();
//!
//! for color in result.best.genotype().colors() {
//!     println!("{}", color.to_hex());
//! }
//! ```
//!
//! # Simulating a Palette
//!
//! ```
//! use cvd_palette::{BlindnessType, Palette, PaletteEvaluator};
//!
//! let palette = Palette::from_hex("traffic", &["#ff0000", "#00ff00", "#ffff00"]).unwrap();
//! let evaluator = PaletteEvaluator::new();
//!
//! let normal = evaluator.evaluate(palette.colors());
//! let seen = evaluator.evaluate(palette.simulate(BlindnessType::Deuteranopia).colors());
//! assert!(seen.min_distance < normal.min_distance);
//! ```
//!
//! # Vision Models
//!
//! [`BlindnessType`] names seven models: Normal (identity), the three
//! dichromacies (Deuteranopia, Protanopia, Tritanopia) and their anomalous
//! trichromacy counterparts (Deuteranomaly, Protanomaly, Tritanomaly).
//!
//! # Color Science
//!
//! ## Two Color Representations
//!
//! | Representation | Key Property | Used For |
//! |----------------|--------------|----------|
//! | **Color** | 8-bit gamma-encoded channels | Palettes, distance scoring, hex I/O |
//! | **LinearRgb** | Proportional to light intensity | Deficiency simulation |
//!
//! Deficiency matrices describe how cone responses mix, which is a linear
//! operation on light. Applying them to gamma-encoded bytes would weight
//! dark tones far too heavily, so every conversion decodes first:
//!
//! ```text
//! Color (u8 channels)
//!     |
//!     v
//! LinearRgb           (decode via LUT: display gamma 2.2, then sRGB curve)
//!     |
//!     v
//! [3x3 matrix]        (per-deficiency lookup table; Normal skips this)
//!     |
//!     v
//! Color               (inverse sRGB curve, inverse gamma, round, clamp)
//! ```
//!
//! The decode table is generated at build time; the encode direction is its
//! exact inverse so that `linear_to_standard(standard_to_linear(c)) == c`.
//!
//! ## Distance Metric
//!
//! Scoring deliberately uses plain Euclidean distance on 8-bit channels,
//! normalized by the largest possible distance (black to white,
//! `sqrt(3 * 255^2)`). A palette's score is a weighted sum of its minimum,
//! maximum and average pairwise distance, measured on the *simulated*
//! palette. The minimum term dominates in practice: one confusable pair is
//! what makes a palette fail for a reader.
//!
//! ## Why the Hue Sort
//!
//! The optimizer returns its best palette ordered by the simulated colors'
//! HSV hue. Genotype and phenotype are permuted together, so index `i` of
//! the evolved palette is always the color whose simulation sits at index
//! `i` of the phenotype.

pub mod api;
pub mod color;
pub mod convert;
pub mod evaluate;
pub mod optimize;
pub mod palette;


pub use api::{CvdError, PaletteSearch, SearchResult};
pub use color::{Color, Hsv, LinearRgb, MAX_CHANNEL_DISTANCE};
pub use convert::{
    convert, linear_to_standard, standard_to_linear, wavelength_to_color, BlindnessType,
    ParseBlindnessError,
};
pub use evaluate::{Evaluation, EvaluationWeights, PaletteEvaluator};
pub use optimize::{
    crossover, mutate, GenerationStats, GeneticOptimizer, Individual, OptimizeError,
    OptimizerOptions,
};
pub use palette::{
    presets, Palette, PaletteError, PaletteId, PaletteRegistry, ParseColorError, RegistryError,
};
