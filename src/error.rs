// Tab slider error types
//
// Gesture handling never fails: pointer input is clamped into range.
// Errors only surface when a slider is built or reconfigured with
// values that make the geometry meaningless.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors produced while constructing or reconfiguring a [`crate::TabSlider`]
#[derive(Error, Debug)]
pub enum TabSliderError {
    /// The caller's value range is empty, reversed or not finite
    #[error("Invalid value range: {start}..={end}")]
    InvalidValueRange { start: f32, end: f32 },

    /// A numeric setting is outside its allowed domain
    #[error("Invalid setting '{field}': {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TabSliderError {
    pub fn invalid_setting(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TabSliderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TabSliderError::InvalidValueRange { start: 5.0, end: 5.0 };
        assert_eq!(err.to_string(), "Invalid value range: 5..=5");

        let err = TabSliderError::invalid_setting("thickness", "must be positive");
        assert_eq!(err.to_string(), "Invalid setting 'thickness': must be positive");
    }
}
