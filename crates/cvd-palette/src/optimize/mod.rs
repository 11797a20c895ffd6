//! Genetic search for palettes that stay distinguishable under a simulated
//! vision deficiency.
//!
//! Each individual pairs a genotype (the palette being evolved) with its
//! phenotype (the genotype as seen under the active [`BlindnessType`]).
//! Fitness is always measured on the phenotype.
//!
//! A generation is: evaluate phenotypes, keep the top half of genotypes as
//! parents, breed a full new population by single-point crossover, perturb
//! children by mutation, rebuild phenotypes.
//!
//! [`BlindnessType`]: crate::BlindnessType

mod error;
mod individual;
mod operators;
mod optimizer;
mod options;

pub use error::OptimizeError;
pub use individual::Individual;
pub use operators::{crossover, mutate, random_palette, MUTATION_OFFSET};
pub use optimizer::{GenerationStats, GeneticOptimizer, MAX_CROSSOVER_ATTEMPTS};
pub use options::OptimizerOptions;
