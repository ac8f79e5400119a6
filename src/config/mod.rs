// Configuration module for tab sliders
// Immutable value objects supplied by the caller, loadable from JSON

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub mod colors;
pub mod settings;

pub use colors::*;
pub use settings::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything a tab slider needs besides its value range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabSliderConfig {
    pub colors: TabSliderColors,
    /// Palette used while disabled; derived from `colors` when absent
    pub disabled_colors: Option<TabSliderColors>,
    pub slider: SliderSettings,
    pub tab: TabSettings,
    pub enabled: bool,
}

impl Default for TabSliderConfig {
    fn default() -> Self {
        Self {
            colors: TabSliderColors::default(),
            disabled_colors: None,
            slider: SliderSettings::default(),
            tab: TabSettings::default(),
            enabled: true,
        }
    }
}

impl TabSliderConfig {
    pub fn with_colors(mut self, colors: TabSliderColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_disabled_colors(mut self, colors: TabSliderColors) -> Self {
        self.disabled_colors = Some(colors);
        self
    }

    pub fn with_slider(mut self, slider: SliderSettings) -> Self {
        self.slider = slider;
        self
    }

    pub fn with_tab(mut self, tab: TabSettings) -> Self {
        self.tab = tab;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Palette for the current enabled flag
    pub fn active_colors(&self) -> TabSliderColors {
        if self.enabled {
            self.colors
        } else {
            self.disabled_colors.unwrap_or_else(|| self.colors.muted())
        }
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        self.slider.validate()?;
        self.tab.validate()
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&content)?;
        log::debug!("Loaded tab slider config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load with fallback to defaults if the file is missing or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to load tab slider config from {}, using defaults: {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
