pub mod config;

pub use config::{
    AppConfig, EvolveOverrides, RenderConfig, SeedPalette, WeightsConfig, CONFIG_ENV_VAR,
    DEFAULT_CONFIG_FILE,
};
