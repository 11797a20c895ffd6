//! Pairwise-distance evaluator.
//!
//! A palette is scored by how far apart its colors are: the closest pair
//! (how confusable the worst case is), the farthest pair, and the mean over
//! all pairs. Each is normalized by the largest possible channel-space
//! distance so that scores are comparable across palette sizes.

use crate::color::{Color, MAX_CHANNEL_DISTANCE};

/// Normalized distance statistics of a palette.
///
/// All distances are in 0.0..=1.0. For palettes with fewer than two colors
/// every field is 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Evaluation {
    /// Smallest pairwise distance
    pub min_distance: f64,
    /// Largest pairwise distance
    pub max_distance: f64,
    /// Mean over all unordered pairs
    pub average_distance: f64,
    /// Weighted sum of the three distances
    pub total_score: f64,
}

/// Weights applied to each normalized distance when computing
/// [`Evaluation::total_score`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationWeights {
    /// Weight of the minimum distance
    pub min: f64,
    /// Weight of the maximum distance
    pub max: f64,
    /// Weight of the average distance
    pub average: f64,
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 1.0,
            average: 1.0,
        }
    }
}

/// Scores color sequences.
///
/// # Example
///
/// ```
/// use cvd_palette::{Color, PaletteEvaluator};
///
/// let evaluator = PaletteEvaluator::new();
/// let eval = evaluator.evaluate(&[Color::BLACK, Color::WHITE]);
/// assert!((eval.min_distance - 1.0).abs() < 1e-9);
/// assert!((eval.total_score - 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteEvaluator {
    weights: EvaluationWeights,
}

impl PaletteEvaluator {
    /// Create an evaluator with equal weights.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the total-score weights.
    #[inline]
    pub fn with_weights(mut self, weights: EvaluationWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The weights in use.
    #[inline]
    pub fn weights(&self) -> EvaluationWeights {
        self.weights
    }

    /// Evaluate a color sequence. O(n²) in the number of colors.
    pub fn evaluate(&self, colors: &[Color]) -> Evaluation {
        if colors.len() < 2 {
            return Evaluation::default();
        }

        let mut sum = 0.0;
        let mut min = f64::MAX;
        let mut max = 0.0f64;
        for (i, &a) in colors.iter().enumerate() {
            for &b in &colors[i + 1..] {
                let d = a.distance(b);
                sum += d;
                min = min.min(d);
                max = max.max(d);
            }
        }

        let n = colors.len();
        let pairs = (n * (n - 1) / 2) as f64;

        let min_distance = min / MAX_CHANNEL_DISTANCE;
        let max_distance = max / MAX_CHANNEL_DISTANCE;
        let average_distance = sum / pairs / MAX_CHANNEL_DISTANCE;
        let total_score = self.weights.min * min_distance
            + self.weights.max * max_distance
            + self.weights.average * average_distance;

        Evaluation {
            min_distance,
            max_distance,
            average_distance,
            total_score,
        }
    }
}
