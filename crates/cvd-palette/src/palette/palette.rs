//! Named, ordered color sequence with a cached evaluation.
//!
//! The order of colors is meaningful: genotype and phenotype palettes are
//! compared index by index, and presentation sorts by hue.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Color;
use crate::convert::{convert, BlindnessType};
use crate::evaluate::{Evaluation, PaletteEvaluator};

/// A named sequence of colors.
///
/// The cached [`Evaluation`] is only present after [`Palette::evaluate`] has
/// been called. Any mutable access to the colors drops it.
///
/// # Example
///
/// ```
/// use cvd_palette::{BlindnessType, Palette, PaletteEvaluator};
///
/// let mut palette = Palette::from_hex("traffic", &["#FF0000", "#FFFF00", "#00FF00"]).unwrap();
/// assert!(palette.evaluation().is_none());
///
/// let eval = palette.evaluate(&PaletteEvaluator::new());
/// assert_eq!(palette.evaluation(), Some(eval));
///
/// let seen = palette.simulate(BlindnessType::Deuteranopia);
/// assert_eq!(seen.name(), "Deuteranopia");
/// assert_eq!(seen.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    colors: Vec<Color>,
    evaluation: Option<Evaluation>,
}

impl Palette {
    /// Create an unevaluated palette.
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
            evaluation: None,
        }
    }

    /// Create a palette from hex color strings such as `"#FF0000"` or `"#F00"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] naming the first entry that fails
    /// to parse.
    pub fn from_hex(name: impl Into<String>, hex: &[&str]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Color::from_str(s).map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, colors))
    }

    /// The palette's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename, keeping colors and evaluation.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The colors in order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Mutable access to the colors. Drops the cached evaluation.
    pub fn colors_mut(&mut self) -> &mut Vec<Color> {
        self.evaluation = None;
        &mut self.colors
    }

    /// Append a color. Drops the cached evaluation.
    pub fn push(&mut self, color: Color) {
        self.colors_mut().push(color);
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The evaluation from the last [`evaluate`](Self::evaluate) call, if the
    /// colors have not been touched since.
    #[inline]
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation
    }

    /// Score the palette and cache the result.
    pub fn evaluate(&mut self, evaluator: &PaletteEvaluator) -> Evaluation {
        let evaluation = evaluator.evaluate(&self.colors);
        self.evaluation = Some(evaluation);
        evaluation
    }

    /// The palette as seen under `kind`, named after the vision model.
    ///
    /// The result is unevaluated.
    pub fn simulate(&self, kind: BlindnessType) -> Palette {
        let colors = self.colors.iter().map(|&c| convert(c, kind)).collect();
        Palette::new(kind.name(), colors)
    }

    /// Indices of the colors sorted by ascending HSV hue.
    ///
    /// Equal hues keep their original relative order.
    pub fn hue_order(&self) -> Vec<usize> {
        let hues: Vec<f64> = self.colors.iter().map(|c| c.to_hsv().h).collect();
        let mut order: Vec<usize> = (0..self.colors.len()).collect();
        order.sort_by(|&a, &b| hues[a].total_cmp(&hues[b]));
        order
    }

    /// A copy with colors rearranged so that entry `i` is `self[order[i]]`.
    ///
    /// Pairwise distances do not depend on order, so a cached evaluation is
    /// carried over.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidOrder`] unless `order` is a permutation
    /// of `0..len`.
    pub fn reordered(&self, order: &[usize]) -> Result<Palette, PaletteError> {
        let invalid = PaletteError::InvalidOrder {
            expected: self.colors.len(),
            actual: order.len(),
        };
        if order.len() != self.colors.len() {
            return Err(invalid);
        }
        let mut seen = vec![false; order.len()];
        for &i in order {
            match seen.get_mut(i) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(invalid),
            }
        }

        Ok(Palette {
            name: self.name.clone(),
            colors: order.iter().map(|&i| self.colors[i]).collect(),
            evaluation: self.evaluation,
        })
    }

    /// A copy sorted by ascending hue.
    pub fn sorted_by_hue(&self) -> Palette {
        // hue_order always yields a permutation of 0..len
        self.reordered(&self.hue_order())
            .unwrap_or_else(|_| self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    fn rgb_palette() -> Palette {
        Palette::new(
            "rgb",
            vec![
                Color::new(0, 0, 255),
                Color::new(255, 0, 0),
                Color::new(0, 255, 0),
            ],
        )
    }

    #[test]
    fn test_from_hex() {
        let palette = Palette::from_hex("bw", &["#000", "#FFFFFF"]).unwrap();
        assert_eq!(palette.name(), "bw");
        assert_eq!(palette.colors(), &[Color::BLACK, Color::WHITE]);
    }

    #[test]
    fn test_from_hex_reports_index() {
        let err = Palette::from_hex("bad", &["#000", "#12"]).unwrap_err();
        assert_eq!(
            err,
            PaletteError::ParseColor {
                index: 1,
                source: ParseColorError::InvalidLength
            }
        );
    }

    #[test]
    fn test_evaluation_cache_lifecycle() {
        let mut palette = rgb_palette();
        assert!(palette.evaluation().is_none());

        let eval = palette.evaluate(&PaletteEvaluator::new());
        assert_eq!(palette.evaluation(), Some(eval));

        palette.push(Color::WHITE);
        assert!(palette.evaluation().is_none(), "push must drop the cache");

        palette.evaluate(&PaletteEvaluator::new());
        palette.colors_mut()[0] = Color::BLACK;
        assert!(palette.evaluation().is_none(), "colors_mut must drop the cache");
    }

    #[test]
    fn test_simulate_normal_keeps_colors() {
        let palette = rgb_palette();
        let seen = palette.simulate(BlindnessType::Normal);
        assert_eq!(seen.colors(), palette.colors());
        assert_eq!(seen.name(), "Normal");
        assert!(seen.evaluation().is_none());
    }

    #[test]
    fn test_simulate_is_elementwise() {
        let palette = rgb_palette();
        let seen = palette.simulate(BlindnessType::Protanopia);
        for (orig, sim) in palette.colors().iter().zip(seen.colors()) {
            assert_eq!(*sim, convert(*orig, BlindnessType::Protanopia));
        }
    }

    #[test]
    fn test_hue_sorting() {
        let sorted = rgb_palette().sorted_by_hue();
        assert_eq!(
            sorted.colors(),
            &[
                Color::new(255, 0, 0),
                Color::new(0, 255, 0),
                Color::new(0, 0, 255)
            ]
        );
        assert_eq!(rgb_palette().hue_order(), vec![1, 2, 0]);
    }

    #[test]
    fn test_hue_ties_keep_insertion_order() {
        // Greys all have hue 0, as does pure red
        let palette = Palette::new(
            "ties",
            vec![
                Color::new(0, 255, 0),
                Color::new(50, 50, 50),
                Color::new(255, 0, 0),
                Color::new(200, 200, 200),
            ],
        );
        assert_eq!(palette.hue_order(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_reordered_keeps_evaluation() {
        let mut palette = rgb_palette();
        let eval = palette.evaluate(&PaletteEvaluator::new());
        let moved = palette.reordered(&[2, 0, 1]).unwrap();
        assert_eq!(moved.colors()[0], palette.colors()[2]);
        assert_eq!(moved.evaluation(), Some(eval));
    }

    #[test]
    fn test_sorted_by_hue_matches_reordered_hue_order() {
        let mut palette = Palette::new(
            "mixed",
            vec![
                Color::new(0, 0, 255),
                Color::new(128, 128, 128),
                Color::new(255, 200, 0),
                Color::new(0, 255, 0),
            ],
        );
        let eval = palette.evaluate(&PaletteEvaluator::new());
        let sorted = palette.sorted_by_hue();
        assert_eq!(sorted, palette.reordered(&palette.hue_order()).unwrap());
        assert_eq!(sorted.evaluation(), Some(eval));
        assert_eq!(sorted.name(), "mixed");
    }

    #[test]
    fn test_reordered_rejects_non_permutations() {
        let palette = rgb_palette();
        assert!(matches!(
            palette.reordered(&[0, 1]),
            Err(PaletteError::InvalidOrder { expected: 3, actual: 2 })
        ));
        assert!(palette.reordered(&[0, 0, 1]).is_err());
        assert!(palette.reordered(&[0, 1, 3]).is_err());
    }
}
