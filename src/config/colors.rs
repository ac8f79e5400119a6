// Color set used to draw a tab slider

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Alpha multiplier applied to every color of a disabled slider
const DISABLED_ALPHA: f32 = 0.38;

/// Tab slider colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabSliderColors {
    /// Track fill
    pub slider: Color32,
    /// Start/end boundary labels
    pub slider_text: Color32,
    /// Tab fill while collapsed
    pub collapsed_tab: Color32,
    /// Tab fill while expanded
    pub expanded_tab: Color32,
    /// Tab label
    pub tab_text: Color32,
    /// Area the slider and the expanded tab can cover
    pub background: Color32,
}

impl Default for TabSliderColors {
    fn default() -> Self {
        Self {
            slider: Color32::from_rgb(0x04, 0x43, 0x72),
            slider_text: Color32::WHITE,
            collapsed_tab: Color32::from_rgb(0x03, 0x24, 0x3D),
            expanded_tab: Color32::from_rgba_unmultiplied(0x03, 0x24, 0x3D, 0xCC),
            tab_text: Color32::WHITE,
            background: Color32::LIGHT_GRAY,
        }
    }
}

impl TabSliderColors {
    /// Muted copy of this palette, used when the slider is disabled
    pub fn muted(&self) -> Self {
        Self {
            slider: self.slider.gamma_multiply(DISABLED_ALPHA),
            slider_text: self.slider_text.gamma_multiply(DISABLED_ALPHA),
            collapsed_tab: self.collapsed_tab.gamma_multiply(DISABLED_ALPHA),
            expanded_tab: self.expanded_tab.gamma_multiply(DISABLED_ALPHA),
            tab_text: self.tab_text.gamma_multiply(DISABLED_ALPHA),
            background: self.background,
        }
    }

    pub fn with_slider(mut self, color: Color32) -> Self {
        self.slider = color;
        self
    }

    pub fn with_slider_text(mut self, color: Color32) -> Self {
        self.slider_text = color;
        self
    }

    pub fn with_tab(mut self, collapsed: Color32, expanded: Color32) -> Self {
        self.collapsed_tab = collapsed;
        self.expanded_tab = expanded;
        self
    }

    pub fn with_tab_text(mut self, color: Color32) -> Self {
        self.tab_text = color;
        self
    }

    pub fn with_background(mut self, color: Color32) -> Self {
        self.background = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let colors = TabSliderColors::default();
        assert_eq!(colors.slider, Color32::from_rgb(4, 67, 114));
        assert_eq!(colors.expanded_tab.a(), 0xCC);
        assert_eq!(colors.collapsed_tab.a(), 0xFF);
    }

    #[test]
    fn test_muted_keeps_background() {
        let colors = TabSliderColors::default();
        let muted = colors.muted();
        assert_eq!(muted.background, colors.background);
        assert!(muted.slider.a() < colors.slider.a());
        assert!(muted.tab_text.a() < colors.tab_text.a());
    }
}
