//! Named slider configurations loaded from YAML.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use slidekit_core::{Slider, SliderConfig};
use std::collections::BTreeMap;

/// A set of named slider configurations.
///
/// ```yaml
/// sliders:
///   volume:
///     max: 11
///     value: 7
///   price:
///     range: true
///     step: null
///     marks: {0: "$0", 50: "$50", 100: "$100"}
///     value: [0, 50]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Sliders by name
    #[serde(default)]
    pub sliders: BTreeMap<String, SliderConfig>,
}

impl Manifest {
    /// Parse a manifest from YAML string.
    ///
    /// Only the syntax is checked here; see [`Manifest::validate`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        tracing::debug!(sliders = manifest.sliders.len(), "slider manifest loaded");
        Ok(manifest)
    }

    /// Serialize manifest to YAML string.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Add or replace a slider.
    #[must_use]
    pub fn with_slider(mut self, name: impl Into<String>, config: SliderConfig) -> Self {
        self.sliders.insert(name.into(), config);
        self
    }

    /// Configuration of the slider called `name`.
    pub fn config(&self, name: &str) -> Result<&SliderConfig, ParseError> {
        self.sliders
            .get(name)
            .ok_or_else(|| ParseError::UnknownSlider(name.to_string()))
    }

    /// Build the engine for the slider called `name`.
    pub fn build(&self, name: &str) -> Result<Slider, ParseError> {
        let config = self.config(name)?;
        Slider::new(config).map_err(|source| ParseError::config(name, source))
    }

    /// Check every slider, failing on the first invalid one in name order.
    pub fn validate(&self) -> Result<(), ParseError> {
        for (name, config) in &self.sliders {
            config
                .validate()
                .map_err(|source| ParseError::config(name, source))?;
        }
        Ok(())
    }
}
