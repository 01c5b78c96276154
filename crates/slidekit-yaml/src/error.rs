//! Error types for YAML slider manifests.

use slidekit_core::ConfigError;
use thiserror::Error;

/// Error type for manifest parsing and engine construction.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing or serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// A slider's configuration is invalid
    #[error("invalid slider '{slider}': {source}")]
    Config {
        /// Slider name
        slider: String,
        /// What is wrong with it
        #[source]
        source: ConfigError,
    },
    /// No slider with that name
    #[error("unknown slider: {0}")]
    UnknownSlider(String),
}

impl ParseError {
    pub(crate) fn config(slider: &str, source: ConfigError) -> Self {
        Self::Config {
            slider: slider.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnknownSlider("volume".to_string());
        assert_eq!(err.to_string(), "unknown slider: volume");

        let err = ParseError::config("volume", ConfigError::InvalidStep(0.0));
        assert!(err.to_string().starts_with("invalid slider 'volume': "));
    }

    #[test]
    fn test_parse_error_source() {
        let err = ParseError::config("volume", ConfigError::InvalidStep(-1.0));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source, Some(ConfigError::InvalidStep(-1.0).to_string()));

        let err = ParseError::UnknownSlider("x".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_yaml_error_converts() {
        let yaml_err = serde_yaml_ng::from_str::<u32>("[unclosed").expect_err("invalid yaml");
        let err: ParseError = yaml_err.into();
        assert!(err.to_string().starts_with("YAML error"));
    }
}
