use cvd_palette::{CvdError, ParseBlindnessError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Palette error: {0}")]
    Palette(#[from] CvdError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Nothing to do: {0}")]
    EmptyInput(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Unknown vision model: {0}")]
    Blindness(#[from] ParseBlindnessError),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot render an empty palette")]
    EmptyPalette,

    #[error("Invalid swatch layout: {0}")]
    InvalidLayout(String),

    #[error("Image too large: {width}x{height} (max {max} per side)")]
    ImageTooLarge { width: u32, height: u32, max: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_invalid() {
        let error = ConfigError::Invalid {
            field: "mutation_rate",
            reason: "must be within 0.0..=1.0, got 1.5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for mutation_rate: must be within 0.0..=1.0, got 1.5"
        );
    }

    #[test]
    fn test_config_error_from_blindness() {
        let parse_error = "sepia".parse::<cvd_palette::BlindnessType>().unwrap_err();
        let error: ConfigError = parse_error.into();
        assert!(matches!(error, ConfigError::Blindness(_)));
        assert!(error.to_string().starts_with("Unknown vision model: "));
    }

    #[test]
    fn test_config_error_io_includes_path() {
        let error = ConfigError::Io {
            path: PathBuf::from("/tmp/hueforge.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(error.to_string(), "Failed to read /tmp/hueforge.yaml: denied");
    }

    #[test]
    fn test_render_error_image_too_large() {
        let error = RenderError::ImageTooLarge {
            width: 20000,
            height: 64,
            max: 16384,
        };
        assert_eq!(
            error.to_string(),
            "Image too large: 20000x64 (max 16384 per side)"
        );
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_command_error_from_render_error() {
        let command_error: CommandError = RenderError::EmptyPalette.into();
        match command_error {
            CommandError::Render(_) => {}
            _ => panic!("Expected Render variant"),
        }
    }

    #[test]
    fn test_command_error_from_cvd_error() {
        let err = cvd_palette::Palette::from_hex("bad", &["#12"]).unwrap_err();
        let command_error: CommandError = CvdError::from(err).into();
        assert!(command_error.to_string().starts_with("Palette error: "));
    }
}
