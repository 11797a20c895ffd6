use cvd_palette::{presets, BlindnessType, EvaluationWeights, Palette, PaletteSearch};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::rendering::MAX_IMAGE_SIDE;

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV_VAR: &str = "HUEFORGE_CONFIG";

/// Config file picked up from the working directory when nothing else is set
pub const DEFAULT_CONFIG_FILE: &str = "hueforge.yaml";

/// Application configuration loaded from hueforge.yaml
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Individuals per generation
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Colors per palette
    #[serde(default = "default_palette_length")]
    pub palette_length: usize,

    /// Generations to run
    #[serde(default = "default_generations")]
    pub generations: usize,

    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,

    /// Vision model name, e.g. "deuteranopia" (case-insensitive)
    #[serde(default = "default_blindness")]
    pub blindness: String,

    /// Fixed random seed; a fresh one is drawn and logged when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// How the initial population is built
    #[serde(default)]
    pub seed_palette: SeedPalette,

    #[serde(default)]
    pub weights: WeightsConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

fn default_population_size() -> usize {
    30
}

fn default_palette_length() -> usize {
    16
}

fn default_generations() -> usize {
    1000
}

fn default_mutation_rate() -> f64 {
    0.8
}

fn default_crossover_rate() -> f64 {
    0.3
}

fn default_blindness() -> String {
    BlindnessType::Deuteranopia.name().to_lowercase()
}

/// Initial population source
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SeedPalette {
    /// Uniformly random colors
    #[default]
    Random,
    /// Evenly spaced spectral colors
    VisibleSpectrum,
    /// Every color black
    AllBlack,
}

impl SeedPalette {
    /// Preset palette of `length` colors, or `None` for random starts
    pub fn build(self, length: usize) -> Option<Palette> {
        match self {
            SeedPalette::Random => None,
            SeedPalette::VisibleSpectrum => Some(presets::visible_spectrum(length)),
            SeedPalette::AllBlack => Some(presets::all_black(length)),
        }
    }
}

/// Weights of the three distance terms in a palette's score
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct WeightsConfig {
    #[serde(default = "default_weight")]
    pub min: f64,
    #[serde(default = "default_weight")]
    pub max: f64,
    #[serde(default = "default_weight")]
    pub average: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 1.0,
            average: 1.0,
        }
    }
}

impl From<WeightsConfig> for EvaluationWeights {
    fn from(w: WeightsConfig) -> Self {
        EvaluationWeights {
            min: w.min,
            max: w.max,
            average: w.average,
        }
    }
}

/// Swatch image layout, in pixels
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Cells per row
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Cell edge length
    #[serde(default = "default_cell")]
    pub cell: u32,

    /// Space between cells
    #[serde(default = "default_gap")]
    pub gap: u32,

    /// Border around the grid
    #[serde(default = "default_margin")]
    pub margin: u32,
}

fn default_columns() -> u32 {
    16
}

fn default_cell() -> u32 {
    32
}

fn default_gap() -> u32 {
    2
}

fn default_margin() -> u32 {
    32
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            cell: default_cell(),
            gap: default_gap(),
            margin: default_margin(),
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvolveOverrides {
    pub seed: Option<u64>,
    pub generations: Option<usize>,
    pub population_size: Option<usize>,
    pub palette_length: Option<usize>,
    pub blindness: Option<String>,
    pub mutation_rate: Option<f64>,
    pub crossover_rate: Option<f64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            palette_length: default_palette_length(),
            generations: default_generations(),
            mutation_rate: default_mutation_rate(),
            crossover_rate: default_crossover_rate(),
            blindness: default_blindness(),
            seed: None,
            seed_palette: SeedPalette::default(),
            weights: WeightsConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl AppConfig {
    /// Pick the config file: explicit path, then `HUEFORGE_CONFIG`, then
    /// `hueforge.yaml` if it exists in the working directory
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Load configuration, falling back to defaults when no file applies
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::resolve_path(explicit) {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a YAML file. A missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            population_size = config.population_size,
            palette_length = config.palette_length,
            generations = config.generations,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply command-line overrides
    pub fn apply(&mut self, overrides: &EvolveOverrides) {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(generations) = overrides.generations {
            self.generations = generations;
        }
        if let Some(size) = overrides.population_size {
            self.population_size = size;
        }
        if let Some(length) = overrides.palette_length {
            self.palette_length = length;
        }
        if let Some(ref blindness) = overrides.blindness {
            self.blindness = blindness.clone();
        }
        if let Some(rate) = overrides.mutation_rate {
            self.mutation_rate = rate;
        }
        if let Some(rate) = overrides.crossover_rate {
            self.crossover_rate = rate;
        }
    }

    /// Parsed vision model
    pub fn blindness_type(&self) -> Result<BlindnessType, ConfigError> {
        Ok(self.blindness.parse()?)
    }

    /// Check that every value is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(invalid(
                "population_size",
                format!("must be at least 2, got {}", self.population_size),
            ));
        }
        if self.palette_length == 0 {
            return Err(invalid("palette_length", "must be at least 1".to_string()));
        }
        for (field, rate) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(invalid(field, format!("must be within 0.0..=1.0, got {rate}")));
            }
        }
        for (field, weight) in [
            ("weights.min", self.weights.min),
            ("weights.max", self.weights.max),
            ("weights.average", self.weights.average),
        ] {
            if !weight.is_finite() {
                return Err(invalid(field, format!("must be finite, got {weight}")));
            }
        }
        if self.render.columns == 0 {
            return Err(invalid("render.columns", "must be at least 1".to_string()));
        }
        if self.render.cell == 0 {
            return Err(invalid("render.cell", "must be at least 1".to_string()));
        }
        for (field, value) in [
            ("render.cell", self.render.cell),
            ("render.gap", self.render.gap),
            ("render.margin", self.render.margin),
        ] {
            if value > MAX_IMAGE_SIDE {
                return Err(invalid(
                    field,
                    format!("must be at most {MAX_IMAGE_SIDE}, got {value}"),
                ));
            }
        }
        self.blindness_type()?;
        Ok(())
    }

    /// Build the palette search this configuration describes
    pub fn search(&self) -> Result<PaletteSearch, ConfigError> {
        self.validate()?;

        let mut search = PaletteSearch::new()
            .population_size(self.population_size)
            .palette_length(self.palette_length)
            .generations(self.generations)
            .mutation_rate(self.mutation_rate)
            .crossover_rate(self.crossover_rate)
            .blindness(self.blindness_type()?)
            .weights(self.weights.into());
        if let Some(seed) = self.seed {
            search = search.seed(seed);
        }
        if let Some(palette) = self.seed_palette.build(self.palette_length) {
            search = search.seed_palette(palette);
        }
        Ok(search)
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
