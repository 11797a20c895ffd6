//! Palette quality scoring from pairwise color distances.

mod evaluator;

pub use evaluator::{Evaluation, EvaluationWeights, PaletteEvaluator};
