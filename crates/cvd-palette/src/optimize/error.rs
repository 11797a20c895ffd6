//! Error type for optimizer configuration and operators.

use std::fmt;

/// Error type for the genetic optimizer.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// Crossover parents must have the same length
    ParentLengthMismatch {
        /// Length of the first parent
        left: usize,
        /// Length of the second parent
        right: usize,
    },
    /// A probability outside 0.0..=1.0
    InvalidRate {
        /// Which rate was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },
    /// Optimizer options that cannot produce a valid run
    InvalidConfig(String),
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimizeError::ParentLengthMismatch { left, right } => {
                write!(
                    f,
                    "crossover parents differ in length: {} vs {} colors",
                    left, right
                )
            }
            OptimizeError::InvalidRate { name, value } => {
                write!(f, "{} must be within 0.0..=1.0, got {}", name, value)
            }
            OptimizeError::InvalidConfig(msg) => write!(f, "invalid optimizer config: {}", msg),
        }
    }
}

impl std::error::Error for OptimizeError {}

/// Check that `value` is a probability.
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<(), OptimizeError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(OptimizeError::InvalidRate { name, value })
    }
}
