//! Test fixtures and constants.

use hueforge::models::AppConfig;
use std::path::PathBuf;
use tempfile::TempDir;

/// Hex palettes used across tests
pub mod palettes {
    /// Okabe-Ito palette, designed to stay distinguishable for dichromats
    pub const OKABE_ITO: [&str; 8] = [
        "#000000", "#e69f00", "#56b4e9", "#009e73", "#f0e442", "#0072b2", "#d55e00", "#cc79a7",
    ];

    /// Red, green and yellow: hard to tell apart with deuteranopia
    pub const TRAFFIC_LIGHT: [&str; 3] = ["#ff0000", "#00ff00", "#ffff00"];
}

/// Config YAML for a fast, seeded search
pub const SMALL_RUN_YAML: &str = r#"
population_size: 8
palette_length: 5
generations: 12
mutation_rate: 0.8
crossover_rate: 0.3
blindness: protanopia
seed: 4242
render:
  columns: 5
  cell: 8
  gap: 1
  margin: 4
"#;

/// Small config without going through YAML
pub fn small_config() -> AppConfig {
    AppConfig::from_yaml_str(SMALL_RUN_YAML).expect("fixture YAML parses")
}

/// Write `content` to `hueforge.yaml` inside a fresh temp dir
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("hueforge.yaml");
    std::fs::write(&path, content).expect("write config");
    (dir, path)
}
