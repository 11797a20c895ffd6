//! PaletteSearch builder -- the primary ergonomic entry point for the crate.
//!
//! [`PaletteSearch`] wraps optimizer configuration, run parameters and
//! random seeding behind a fluent builder.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::error::CvdError;
use crate::convert::BlindnessType;
use crate::evaluate::{Evaluation, EvaluationWeights, PaletteEvaluator};
use crate::optimize::{GenerationStats, GeneticOptimizer, Individual, OptimizerOptions};
use crate::palette::Palette;

/// High-level palette search.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`run()`](Self::run) takes `&self` so the builder is **reusable**
/// - Runs use [`StdRng`]; with a fixed [`seed()`](Self::seed) a run is
///   bit-reproducible. Without one a seed is drawn from the thread rng and
///   reported in the [`SearchResult`].
///
/// # Example
///
/// ```
/// use cvd_palette::{BlindnessType, PaletteSearch};
///
/// let result = PaletteSearch::new()
///     .population_size(10)
///     .palette_length(5)
///     .generations(20)
///     .blindness(BlindnessType::Deuteranopia)
///     .seed(7)
///     .run()
///     .unwrap();
///
/// assert_eq!(result.best.genotype().len(), 5);
/// assert_eq!(result.seed, 7);
/// assert_eq!(result.history.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct PaletteSearch {
    options: OptimizerOptions,
    weights: EvaluationWeights,
    generations: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    seed: Option<u64>,
}

/// Outcome of a [`PaletteSearch`] run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Leader of the final population, colors ordered by phenotype hue.
    pub best: Individual,
    /// Highest-scoring individual seen in any generation.
    pub best_observed: Option<Individual>,
    /// Per-generation scores.
    pub history: Vec<GenerationStats>,
    /// Seed the run's random source was built from.
    pub seed: u64,
}

impl SearchResult {
    /// Evaluation of the best phenotype.
    pub fn evaluation(&self) -> Evaluation {
        self.best.phenotype().evaluation().unwrap_or_default()
    }
}

impl Default for PaletteSearch {
    fn default() -> Self {
        Self {
            options: OptimizerOptions::default(),
            weights: EvaluationWeights::default(),
            generations: 1000,
            mutation_rate: 0.8,
            crossover_rate: 0.3,
            seed: None,
        }
    }
}

impl PaletteSearch {
    /// Create a search with default settings: 30 individuals of 16 colors
    /// under deuteranopia, 1000 generations, mutation rate 0.8, crossover
    /// rate 0.3.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from explicit optimizer options.
    pub fn with_options(options: OptimizerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Set the population size.
    #[inline]
    pub fn population_size(mut self, size: usize) -> Self {
        self.options = self.options.population_size(size);
        self
    }

    /// Set the palette length.
    #[inline]
    pub fn palette_length(mut self, length: usize) -> Self {
        self.options = self.options.palette_length(length);
        self
    }

    /// Set the simulated vision model.
    #[inline]
    pub fn blindness(mut self, kind: BlindnessType) -> Self {
        self.options = self.options.blindness(kind);
        self
    }

    /// Start every individual from a copy of `palette`.
    #[inline]
    pub fn seed_palette(mut self, palette: Palette) -> Self {
        self.options = self.options.seed_palette(palette);
        self
    }

    /// Set the score weights.
    #[inline]
    pub fn weights(mut self, weights: EvaluationWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the number of generations.
    #[inline]
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Set the mutation rate.
    #[inline]
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the crossover rate.
    #[inline]
    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Fix the random seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Optimizer options this search will run with.
    pub fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    /// Run the search.
    pub fn run(&self) -> Result<SearchResult, CvdError> {
        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        if self.seed.is_none() {
            info!(seed, "no seed configured, drew one from entropy");
        }

        let evaluator = PaletteEvaluator::new().with_weights(self.weights);
        let mut optimizer =
            GeneticOptimizer::new(self.options.clone(), StdRng::seed_from_u64(seed))?
                .with_evaluator(evaluator);
        let best = optimizer.run(self.generations, self.mutation_rate, self.crossover_rate)?;

        Ok(SearchResult {
            best,
            best_observed: optimizer.best_observed().cloned(),
            history: optimizer.history().to_vec(),
            seed,
        })
    }
}
