//! Optimizer configuration.

use super::error::OptimizeError;
use crate::convert::BlindnessType;
use crate::palette::Palette;

/// Configuration for a [`GeneticOptimizer`](super::GeneticOptimizer).
///
/// # Defaults
///
/// - Population: 30 individuals
/// - Palette length: 16 colors
/// - Vision model: Deuteranopia
/// - Initial genotypes: uniformly random colors
///
/// # Example
///
/// ```
/// use cvd_palette::{BlindnessType, OptimizerOptions};
///
/// let options = OptimizerOptions::new()
///     .population_size(12)
///     .palette_length(6)
///     .blindness(BlindnessType::Tritanopia);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct OptimizerOptions {
    /// Number of individuals per generation. At least 2, so that selection
    /// yields at least one parent.
    pub population_size: usize,

    /// Number of colors per palette. Fixed for the whole run.
    pub palette_length: usize,

    /// Vision model phenotypes are simulated under.
    pub blindness: BlindnessType,

    /// Optional palette every initial genotype is copied from instead of
    /// drawing random colors. Its length must equal `palette_length`.
    pub seed_palette: Option<Palette>,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            population_size: 30,
            palette_length: 16,
            blindness: BlindnessType::Deuteranopia,
            seed_palette: None,
        }
    }
}

impl OptimizerOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size.
    #[inline]
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the palette length.
    #[inline]
    pub fn palette_length(mut self, length: usize) -> Self {
        self.palette_length = length;
        self
    }

    /// Set the simulated vision model.
    #[inline]
    pub fn blindness(mut self, kind: BlindnessType) -> Self {
        self.blindness = kind;
        self
    }

    /// Seed the initial population from a preset palette.
    #[inline]
    pub fn seed_palette(mut self, palette: Palette) -> Self {
        self.seed_palette = Some(palette);
        self
    }

    /// Check that the options describe a runnable search.
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if self.population_size < 2 {
            return Err(OptimizeError::InvalidConfig(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.palette_length == 0 {
            return Err(OptimizeError::InvalidConfig(
                "palette_length must be at least 1".to_string(),
            ));
        }
        if let Some(seed) = &self.seed_palette {
            if seed.len() != self.palette_length {
                return Err(OptimizeError::InvalidConfig(format!(
                    "seed palette has {} colors, palette_length is {}",
                    seed.len(),
                    self.palette_length
                )));
            }
        }
        Ok(())
    }
}
