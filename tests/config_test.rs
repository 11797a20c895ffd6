//! Configuration loading tests.

mod common;

use common::*;
use cvd_palette::BlindnessType;
use hueforge::error::ConfigError;
use hueforge::models::{AppConfig, EvolveOverrides, SeedPalette};
use pretty_assertions::assert_eq;

#[test]
fn test_load_from_file() {
    let (_dir, path) = write_config(SMALL_RUN_YAML);
    let config = AppConfig::load(Some(&path)).unwrap();

    assert_eq!(config, small_config());
    assert_eq!(config.population_size, 8);
    assert_eq!(config.seed, Some(4242));
    assert_eq!(config.blindness_type().unwrap(), BlindnessType::Protanopia);
    assert_eq!(config.render.cell, 8);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.yaml");
    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let (_dir, path) = write_config("population_size: [1, 2\n");
    let err = AppConfig::load(Some(&path)).unwrap_err();
    match err {
        ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("mutation_rate: often\n");
    assert!(matches!(
        AppConfig::load(Some(&path)),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_seed_palette_names() {
    for (yaml, expected) in [
        ("seed_palette: random", SeedPalette::Random),
        ("seed_palette: visible-spectrum", SeedPalette::VisibleSpectrum),
        ("seed_palette: all-black", SeedPalette::AllBlack),
    ] {
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.seed_palette, expected, "{yaml}");
    }
}

#[test]
fn test_cli_overrides_beat_file_values() {
    let (_dir, path) = write_config(SMALL_RUN_YAML);
    let mut config = AppConfig::load(Some(&path)).unwrap();
    config.apply(&EvolveOverrides {
        population_size: Some(20),
        blindness: Some("Tritanomaly".to_string()),
        ..Default::default()
    });

    assert_eq!(config.population_size, 20);
    assert_eq!(config.palette_length, 5);
    assert_eq!(config.blindness_type().unwrap(), BlindnessType::Tritanomaly);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_values_fail_validation() {
    let (_dir, path) = write_config("palette_length: 0\n");
    let config = AppConfig::load(Some(&path)).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid {
            field: "palette_length",
            ..
        })
    ));
}
