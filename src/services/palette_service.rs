use cvd_palette::{
    presets, BlindnessType, Color, CvdError, Palette, PaletteEvaluator, PaletteId,
    PaletteRegistry, SearchResult,
};
use std::path::Path;

use crate::error::{CommandError, ConfigError};
use crate::models::AppConfig;
use crate::rendering::{render_swatch_rows_png, SwatchLayout};
use crate::report::{EvolveReport, PaletteReport, ViewReport, ViewsReport};

/// Result of an evolve run
#[derive(Debug, Clone)]
pub struct EvolveOutcome {
    pub result: SearchResult,
    pub report: EvolveReport,
}

/// Runs palette commands against a loaded configuration.
///
/// Palettes passed to [`simulate`](Self::simulate) and
/// [`spectrum`](Self::spectrum) are kept in a registry, so their views stay
/// available for rendering after the report is built.
pub struct PaletteService {
    config: AppConfig,
    evaluator: PaletteEvaluator,
    registry: PaletteRegistry,
}

impl PaletteService {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let evaluator = PaletteEvaluator::new().with_weights(config.weights.into());
        Ok(Self {
            config,
            evaluator,
            registry: PaletteRegistry::new(),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn registry(&self) -> &PaletteRegistry {
        &self.registry
    }

    pub fn layout(&self) -> SwatchLayout {
        self.config.render.into()
    }

    /// Run the genetic search described by the configuration
    pub fn evolve(&self) -> Result<EvolveOutcome, CommandError> {
        let blindness = self.config.blindness_type()?;
        let search = self.config.search()?;

        tracing::info!(
            population_size = self.config.population_size,
            palette_length = self.config.palette_length,
            generations = self.config.generations,
            blindness = %blindness,
            "Starting palette search"
        );
        let result = search.run()?;
        let report = EvolveReport::new(&result, blindness);
        Ok(EvolveOutcome { result, report })
    }

    /// Register a palette given as hex strings and evaluate every view of it
    pub fn simulate<S: AsRef<str>>(
        &mut self,
        name: &str,
        hex: &[S],
    ) -> Result<(PaletteId, ViewsReport), CommandError> {
        if hex.is_empty() {
            return Err(CommandError::EmptyInput("no colors given"));
        }
        let hex: Vec<&str> = hex.iter().map(AsRef::as_ref).collect();
        let palette = Palette::from_hex(name, &hex).map_err(CvdError::from)?;
        self.register(palette)
    }

    /// Register the visible-spectrum preset and evaluate every view of it
    pub fn spectrum(&mut self, count: usize) -> Result<(PaletteId, ViewsReport), CommandError> {
        if count == 0 {
            return Err(CommandError::EmptyInput("spectrum count must be at least 1"));
        }
        self.register(presets::visible_spectrum(count))
    }

    /// Colors of a registered palette's view
    pub fn view_colors(&self, id: PaletteId, kind: BlindnessType) -> Option<&[Color]> {
        self.registry.get(id, kind).map(Palette::colors)
    }

    fn register(&mut self, palette: Palette) -> Result<(PaletteId, ViewsReport), CommandError> {
        let name = palette.name().to_string();
        let id = self.registry.add(palette);
        self.registry
            .generate_deficiency_views(id)
            .map_err(CvdError::from)?;
        self.registry
            .evaluate(id, &self.evaluator)
            .map_err(CvdError::from)?;

        let views = self
            .registry
            .views(id)
            .map_err(CvdError::from)?
            .map(|(kind, palette)| ViewReport {
                blindness: kind.name().to_string(),
                palette: PaletteReport::from(palette),
            })
            .collect();
        tracing::debug!(%id, name = %name, "Registered palette");

        Ok((
            id,
            ViewsReport {
                id: id.get(),
                name,
                views,
            },
        ))
    }
}

/// Render `palettes` into a PNG file, one palette per grid row group
pub fn write_swatch(
    path: &Path,
    palettes: &[&[Color]],
    layout: &SwatchLayout,
) -> Result<(), CommandError> {
    let png = render_swatch_rows_png(palettes, layout)?;
    std::fs::write(path, &png).map_err(crate::error::RenderError::from)?;
    tracing::info!(path = %path.display(), bytes = png.len(), "Wrote swatch");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> AppConfig {
        AppConfig {
            population_size: 6,
            palette_length: 4,
            generations: 5,
            seed: Some(17),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = AppConfig {
            crossover_rate: -1.0,
            ..Default::default()
        };
        assert!(PaletteService::new(config).is_err());
    }

    #[test]
    fn test_evolve_report_matches_result() {
        let service = PaletteService::new(small_config()).unwrap();
        let outcome = service.evolve().unwrap();

        assert_eq!(outcome.report.seed, 17);
        assert_eq!(outcome.report.generations, 5);
        assert_eq!(outcome.report.blindness, "Deuteranopia");
        assert_eq!(outcome.report.palette.colors.len(), 4);
        assert_eq!(
            outcome.report.simulated.evaluation.map(|e| e.total_score),
            outcome.result.best.fitness()
        );
    }

    #[test]
    fn test_simulate_registers_all_views() {
        let mut service = PaletteService::new(AppConfig::default()).unwrap();
        let (id, report) = service
            .simulate("brand", &["#0072b2", "#e69f00", "#009e73"])
            .unwrap();

        assert_eq!(report.views.len(), BlindnessType::ALL.len());
        assert!(report.views.iter().all(|v| v.palette.evaluation.is_some()));
        assert_eq!(
            service.view_colors(id, BlindnessType::Normal).map(<[Color]>::len),
            Some(3)
        );
        let normal = report.view(BlindnessType::Normal).unwrap();
        assert_eq!(normal.palette.name, "brand");
    }

    #[test]
    fn test_simulate_rejects_bad_input() {
        let mut service = PaletteService::new(AppConfig::default()).unwrap();
        let empty: [&str; 0] = [];
        assert!(matches!(
            service.simulate("none", &empty),
            Err(CommandError::EmptyInput(_))
        ));
        assert!(matches!(
            service.simulate("bad", &["#12345g"]),
            Err(CommandError::Palette(_))
        ));
    }

    #[test]
    fn test_spectrum_ids_increase() {
        let mut service = PaletteService::new(AppConfig::default()).unwrap();
        let (first, _) = service.spectrum(8).unwrap();
        let (second, report) = service.spectrum(4).unwrap();
        assert!(second > first);
        assert_eq!(report.name, "Visible Spectrum");
        assert_eq!(service.registry().len(), 2);
        assert!(service.spectrum(0).is_err());
    }
}
