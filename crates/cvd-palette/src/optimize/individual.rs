//! Genotype/phenotype pair.

use crate::convert::BlindnessType;
use crate::evaluate::PaletteEvaluator;
use crate::palette::Palette;

/// One member of the population.
///
/// The phenotype is always `genotype.simulate(kind)` for the optimizer's
/// vision model; both palettes share the same color order.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genotype: Palette,
    phenotype: Palette,
}

impl Individual {
    /// Build an individual, deriving its phenotype under `kind`.
    pub fn new(genotype: Palette, kind: BlindnessType) -> Self {
        let phenotype = genotype.simulate(kind).with_name(genotype.name());
        Self {
            genotype,
            phenotype,
        }
    }

    /// The evolved palette.
    #[inline]
    pub fn genotype(&self) -> &Palette {
        &self.genotype
    }

    /// The genotype as seen under the optimizer's vision model.
    #[inline]
    pub fn phenotype(&self) -> &Palette {
        &self.phenotype
    }

    /// Evaluate the phenotype.
    pub fn evaluate(&mut self, evaluator: &PaletteEvaluator) -> f64 {
        self.phenotype.evaluate(evaluator).total_score
    }

    /// Phenotype total score, or `None` before evaluation.
    #[inline]
    pub fn fitness(&self) -> Option<f64> {
        self.phenotype.evaluation().map(|e| e.total_score)
    }

    /// A copy with phenotype colors sorted by ascending hue and the genotype
    /// rearranged identically, so index `i` of both still correspond.
    pub fn sorted_by_hue(&self) -> Individual {
        let order = self.phenotype.hue_order();
        // Genotype and phenotype always have the same length
        let apply = |palette: &Palette| {
            palette
                .reordered(&order)
                .unwrap_or_else(|_| palette.clone())
        };
        Individual {
            genotype: apply(&self.genotype),
            phenotype: apply(&self.phenotype),
        }
    }

    /// Split into `(genotype, phenotype)`.
    pub fn into_parts(self) -> (Palette, Palette) {
        (self.genotype, self.phenotype)
    }
}
