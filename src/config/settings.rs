// Geometry and behaviour settings of the track and of the tab

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabSliderError};
use crate::slider::Easing;

pub const DEFAULT_THICKNESS: f32 = 40.0;
pub const DEFAULT_EXPANDED_SIZE_MULTIPLIER: f32 = 1.65;
pub const DEFAULT_EXPANSION_SPEED_MS: u32 = 300;
pub const DEFAULT_SLIDER_CORNER_RADIUS: f32 = 2.0;
pub const DEFAULT_TAB_CORNER_RADIUS: f32 = 2.0;
pub const DEFAULT_TEXT_SIZE: f32 = 12.0;

/// Inset of a boundary label that is too wide to be centred in the end square
pub const FALLBACK_TEXT_OFFSET: f32 = 8.0;

/// Preset track thicknesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabSize {
    Small,
    Medium,
    Large,
}

impl TabSize {
    pub fn thickness(self) -> f32 {
        match self {
            TabSize::Small => 30.0,
            TabSize::Medium => 40.0,
            TabSize::Large => 50.0,
        }
    }
}

/// Track settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    /// Cross-axis size of the track, also the side of the collapsed tab
    pub thickness: f32,
    pub corner_radius: f32,
    /// Text at the start of the track, defaults to the range start
    pub start_label: Option<String>,
    /// Text at the end of the track, defaults to the range end
    pub end_label: Option<String>,
    pub text_size: f32,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            corner_radius: DEFAULT_SLIDER_CORNER_RADIUS,
            start_label: None,
            end_label: None,
            text_size: DEFAULT_TEXT_SIZE,
        }
    }
}

impl SliderSettings {
    pub fn with_size(mut self, size: TabSize) -> Self {
        self.thickness = size.thickness();
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_labels(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_label = Some(start.into());
        self.end_label = Some(end.into());
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        positive("slider.thickness", self.thickness)?;
        positive("slider.text_size", self.text_size)?;
        non_negative("slider.corner_radius", self.corner_radius)
    }
}

/// Tab settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabSettings {
    /// Fixed tab text; `None` shows the current value
    pub label: Option<String>,
    /// Cross-axis size of the expanded tab relative to the collapsed one
    pub expanded_size_multiplier: f32,
    /// Duration of the expand/collapse transition in milliseconds
    pub expansion_speed_ms: u32,
    pub corner_radius: f32,
    pub easing: Easing,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            label: None,
            expanded_size_multiplier: DEFAULT_EXPANDED_SIZE_MULTIPLIER,
            expansion_speed_ms: DEFAULT_EXPANSION_SPEED_MS,
            corner_radius: DEFAULT_TAB_CORNER_RADIUS,
            easing: Easing::default(),
        }
    }
}

impl TabSettings {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_expanded_size_multiplier(mut self, multiplier: f32) -> Self {
        self.expanded_size_multiplier = multiplier;
        self
    }

    pub fn with_expansion_speed_ms(mut self, millis: u32) -> Self {
        self.expansion_speed_ms = millis;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.expanded_size_multiplier.is_finite() || self.expanded_size_multiplier < 1.0 {
            return Err(TabSliderError::invalid_setting(
                "tab.expanded_size_multiplier",
                format!("must be >= 1, got {}", self.expanded_size_multiplier),
            ));
        }
        non_negative("tab.corner_radius", self.corner_radius)
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TabSliderError::invalid_setting(field, format!("must be positive, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TabSliderError::invalid_setting(field, format!("must not be negative, got {}", value)))
    }
}
