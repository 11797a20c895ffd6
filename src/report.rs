//! Serializable command results, printed as text or JSON.

use cvd_palette::{BlindnessType, Evaluation, Palette, SearchResult};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct EvaluationReport {
    pub min_distance: f64,
    pub max_distance: f64,
    pub average_distance: f64,
    pub total_score: f64,
}

impl From<Evaluation> for EvaluationReport {
    fn from(e: Evaluation) -> Self {
        Self {
            min_distance: e.min_distance,
            max_distance: e.max_distance,
            average_distance: e.average_distance,
            total_score: e.total_score,
        }
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score {:.4} (min {:.4}, max {:.4}, avg {:.4})",
            self.total_score, self.min_distance, self.max_distance, self.average_distance
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaletteReport {
    pub name: String,
    /// `#rrggbb` strings in palette order
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationReport>,
}

impl From<&Palette> for PaletteReport {
    fn from(palette: &Palette) -> Self {
        Self {
            name: palette.name().to_string(),
            colors: palette.colors().iter().map(|c| c.to_hex()).collect(),
            evaluation: palette.evaluation().map(Into::into),
        }
    }
}

impl fmt::Display for PaletteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(evaluation) = &self.evaluation {
            write!(f, ": {evaluation}")?;
        }
        writeln!(f)?;
        for chunk in self.colors.chunks(8) {
            writeln!(f, "  {}", chunk.join(" "))?;
        }
        Ok(())
    }
}

/// Result of `hueforge evolve`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EvolveReport {
    pub seed: u64,
    pub generations: usize,
    pub blindness: String,
    /// Best score recorded in any generation
    pub best_so_far: f64,
    /// Evolved colors, ordered by simulated hue
    pub palette: PaletteReport,
    /// `palette` as seen under `blindness`
    pub simulated: PaletteReport,
}

impl EvolveReport {
    pub fn new(result: &SearchResult, blindness: BlindnessType) -> Self {
        let best_so_far = result
            .history
            .last()
            .map(|stats| stats.best_so_far)
            .into_iter()
            .chain(result.best_observed.as_ref().and_then(|b| b.fitness()))
            .fold(result.evaluation().total_score, f64::max);

        Self {
            seed: result.seed,
            generations: result.history.len(),
            blindness: blindness.name().to_string(),
            best_so_far,
            palette: PaletteReport::from(result.best.genotype()),
            simulated: PaletteReport::from(result.best.phenotype()),
        }
    }
}

impl fmt::Display for EvolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Evolved {} colors for {} over {} generations (seed {})",
            self.palette.colors.len(),
            self.blindness,
            self.generations,
            self.seed
        )?;
        writeln!(f, "Best score seen: {:.4}\n", self.best_so_far)?;
        write!(f, "Palette: {}", self.palette)?;
        write!(f, "Seen as {}", self.simulated)
    }
}

/// One vision model's view of a registered palette
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewReport {
    pub blindness: String,
    pub palette: PaletteReport,
}

/// Every view of a registered palette, as produced by `simulate` and
/// `spectrum`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewsReport {
    pub id: u64,
    pub name: String,
    pub views: Vec<ViewReport>,
}

impl ViewsReport {
    /// View for `kind`, if present
    pub fn view(&self, kind: BlindnessType) -> Option<&ViewReport> {
        self.views.iter().find(|v| v.blindness == kind.name())
    }
}

impl fmt::Display for ViewsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Palette {} \"{}\"", self.id, self.name)?;
        for view in &self.views {
            let score = view
                .palette
                .evaluation
                .map(|e| e.to_string())
                .unwrap_or_else(|| "not evaluated".to_string());
            writeln!(f, "  {:<14} {score}", view.blindness)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_palette::PaletteEvaluator;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_report_from_palette() {
        let mut palette = Palette::from_hex("duo", &["#000000", "#ffffff"]).unwrap();
        let report = PaletteReport::from(&palette);
        assert_eq!(report.colors, vec!["#000000", "#ffffff"]);
        assert_eq!(report.evaluation, None);

        palette.evaluate(&PaletteEvaluator::new());
        let report = PaletteReport::from(&palette);
        let eval = report.evaluation.unwrap();
        assert!((eval.total_score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_unevaluated_palette_omits_evaluation_in_json() {
        let palette = Palette::from_hex("one", &["#123456"]).unwrap();
        let json = serde_json::to_value(PaletteReport::from(&palette)).unwrap();
        assert_eq!(json["name"], "one");
        assert_eq!(json["colors"][0], "#123456");
        assert!(json.get("evaluation").is_none());
    }

    #[test]
    fn test_palette_report_text_wraps_colors() {
        let palette = Palette::new("grey", vec![cvd_palette::Color::new(1, 1, 1); 10]);
        let text = PaletteReport::from(&palette).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "grey");
        assert_eq!(lines[2], "  #010101 #010101");
    }
}
