//! The generation loop.

use rand::Rng;
use tracing::{debug, info};

use super::error::{check_rate, OptimizeError};
use super::individual::Individual;
use super::operators::{crossover, mutate, random_palette};
use super::options::OptimizerOptions;
use crate::convert::BlindnessType;
use crate::evaluate::PaletteEvaluator;
use crate::palette::Palette;

/// Consecutive rejected parent draws before breeding falls back to cloning
/// the first drawn parent.
pub const MAX_CROSSOVER_ATTEMPTS: usize = 1000;

/// Scores recorded after each generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    /// Best phenotype score among the population that was selected from.
    pub best_score: f64,
    /// Best score observed in any generation so far. Never decreases.
    pub best_so_far: f64,
}

/// Genetic palette optimizer.
///
/// The random source is injected and owned, so a seeded generator such as
/// `StdRng::seed_from_u64` makes a run bit-reproducible.
///
/// # Example
///
/// ```
/// use cvd_palette::{BlindnessType, GeneticOptimizer, OptimizerOptions};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let options = OptimizerOptions::new()
///     .population_size(8)
///     .palette_length(4)
///     .blindness(BlindnessType::Protanopia);
/// let mut optimizer = GeneticOptimizer::new(options, StdRng::seed_from_u64(42)).unwrap();
/// let best = optimizer.run(5, 0.8, 0.3).unwrap();
///
/// assert_eq!(best.genotype().len(), 4);
/// assert!(best.fitness().is_some());
/// assert_eq!(optimizer.history().len(), 5);
/// ```
#[derive(Debug)]
pub struct GeneticOptimizer<R: Rng> {
    options: OptimizerOptions,
    evaluator: PaletteEvaluator,
    rng: R,
    population: Vec<Individual>,
    generation: usize,
    history: Vec<GenerationStats>,
    best: Option<Individual>,
}

impl<R: Rng> GeneticOptimizer<R> {
    /// Validate `options` and build the initial population.
    pub fn new(options: OptimizerOptions, rng: R) -> Result<Self, OptimizeError> {
        options.validate()?;
        let mut optimizer = Self {
            options,
            evaluator: PaletteEvaluator::new(),
            rng,
            population: Vec::new(),
            generation: 0,
            history: Vec::new(),
            best: None,
        };
        optimizer.initialize();
        Ok(optimizer)
    }

    /// Replace the default evaluator.
    pub fn with_evaluator(mut self, evaluator: PaletteEvaluator) -> Self {
        self.evaluator = evaluator;
        for individual in &mut self.population {
            // Drop scores computed under the old weights
            *individual = Individual::new(individual.genotype().clone(), self.options.blindness);
        }
        self.best = None;
        self
    }

    /// Fill the population with fresh genotypes and reset history.
    ///
    /// Genotypes are uniformly random unless a seed palette is configured,
    /// in which case every individual starts as a copy of it.
    pub fn initialize(&mut self) {
        let kind = self.options.blindness;
        let length = self.options.palette_length;

        self.population = (0..self.options.population_size)
            .map(|i| {
                let name = format!("init-{i}");
                let genotype = match &self.options.seed_palette {
                    Some(seed) => seed.clone().with_name(name),
                    None => random_palette(&mut self.rng, &name, length),
                };
                Individual::new(genotype, kind)
            })
            .collect();
        self.generation = 0;
        self.history.clear();
        self.best = None;

        debug!(
            population = self.population.len(),
            palette_length = length,
            blindness = %kind,
            "population initialized"
        );
    }

    /// Score every phenotype.
    pub fn evaluate_population(&mut self) {
        for individual in &mut self.population {
            individual.evaluate(&self.evaluator);
        }
    }

    /// Rank the population and return the top half of genotypes plus the
    /// best score.
    ///
    /// The sort is stable and descending by phenotype score, so equal scores
    /// keep their population order. Unevaluated individuals rank last. The
    /// leader is recorded if it beats every individual seen so far.
    pub fn select_parents(&mut self) -> (Vec<Palette>, f64) {
        let score = |ind: &Individual| ind.fitness().unwrap_or(f64::NEG_INFINITY);
        self.population.sort_by(|a, b| score(b).total_cmp(&score(a)));

        let best_score = self
            .population
            .first()
            .and_then(Individual::fitness)
            .unwrap_or(0.0);

        if let Some(leader) = self.population.first() {
            let improved = match self.best.as_ref().and_then(Individual::fitness) {
                Some(previous) => best_score > previous,
                None => leader.fitness().is_some(),
            };
            if improved {
                self.best = Some(leader.clone());
            }
        }

        let parents = self
            .population
            .iter()
            .take(self.population.len() / 2)
            .map(|ind| ind.genotype().clone())
            .collect();
        (parents, best_score)
    }

    /// Single-point crossover using the optimizer's random source.
    pub fn crossover(&mut self, a: &Palette, b: &Palette) -> Result<Palette, OptimizeError> {
        crossover(&mut self.rng, a, b)
    }

    /// Mutation using the optimizer's random source.
    pub fn mutate(&mut self, palette: &Palette, rate: f64) -> Palette {
        mutate(&mut self.rng, palette, rate)
    }

    /// Advance one generation and return the best score of the population
    /// that was selected from.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::InvalidRate`] if either rate is outside
    /// `0.0..=1.0`.
    pub fn run_generation(
        &mut self,
        mutation_rate: f64,
        crossover_rate: f64,
    ) -> Result<f64, OptimizeError> {
        check_rate("mutation_rate", mutation_rate)?;
        check_rate("crossover_rate", crossover_rate)?;

        self.evaluate_population();
        let (parents, best_score) = self.select_parents();
        let generation = self.generation + 1;
        let kind = self.options.blindness;

        let mut children = Vec::with_capacity(self.options.population_size);
        for i in 0..self.options.population_size {
            let mut child = self.breed(&parents, crossover_rate)?;
            if self.rng.gen::<f64>() < mutation_rate {
                child = self.mutate(&child, mutation_rate);
            }
            children.push(Individual::new(
                child.with_name(format!("gen{generation}-{i}")),
                kind,
            ));
        }
        self.population = children;
        self.generation = generation;

        let best_so_far = self
            .best
            .as_ref()
            .and_then(Individual::fitness)
            .map_or(best_score, |hof| hof.max(best_score));
        self.history.push(GenerationStats {
            generation,
            best_score,
            best_so_far,
        });

        debug!(generation, best_score, best_so_far, "generation complete");
        Ok(best_score)
    }

    /// Run `generations` generations, then rank the final population and
    /// return its leader with colors ordered by phenotype hue.
    pub fn run(
        &mut self,
        generations: usize,
        mutation_rate: f64,
        crossover_rate: f64,
    ) -> Result<Individual, OptimizeError> {
        check_rate("mutation_rate", mutation_rate)?;
        check_rate("crossover_rate", crossover_rate)?;

        for _ in 0..generations {
            self.run_generation(mutation_rate, crossover_rate)?;
        }

        self.evaluate_population();
        let (_, best_score) = self.select_parents();
        let leader = self.population.first().ok_or_else(|| {
            OptimizeError::InvalidConfig("population is empty".to_string())
        })?;

        info!(
            generations = self.generation,
            best_score,
            blindness = %self.options.blindness,
            "optimization finished"
        );
        Ok(leader.sorted_by_hue())
    }

    /// Current population. Ranked best-first after any selection.
    #[inline]
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Per-generation scores.
    #[inline]
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Highest-scoring individual seen at any selection, colors in their
    /// evolved order.
    #[inline]
    pub fn best_observed(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Number of completed generations.
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Vision model phenotypes are simulated under.
    #[inline]
    pub fn blindness(&self) -> BlindnessType {
        self.options.blindness
    }

    /// Configured options.
    #[inline]
    pub fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    /// Produce one child. Parents are drawn uniformly with replacement and
    /// crossed with probability `crossover_rate`; rejected draws are retried
    /// up to [`MAX_CROSSOVER_ATTEMPTS`] times.
    fn breed(
        &mut self,
        parents: &[Palette],
        crossover_rate: f64,
    ) -> Result<Palette, OptimizeError> {
        let first = self.rng.gen_range(0..parents.len());
        if crossover_rate <= 0.0 {
            return Ok(parents[first].clone());
        }

        let mut a = first;
        for _ in 0..MAX_CROSSOVER_ATTEMPTS {
            let b = self.rng.gen_range(0..parents.len());
            if self.rng.gen::<f64>() < crossover_rate {
                return crossover(&mut self.rng, &parents[a], &parents[b]);
            }
            a = self.rng.gen_range(0..parents.len());
        }
        Ok(parents[first].clone())
    }
}
