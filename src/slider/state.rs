use serde::{Deserialize, Serialize};

/// Visual state of the tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TabState {
    /// Resting square sitting inside the track
    #[default]
    Collapsed,
    /// Stretched across the cross axis while a pointer holds it
    Expanded,
}

impl TabState {
    pub fn is_expanded(self) -> bool {
        self == TabState::Expanded
    }

    /// Transition target on the 0 (collapsed) .. 1 (expanded) scale
    pub fn target(self) -> f32 {
        match self {
            TabState::Collapsed => 0.0,
            TabState::Expanded => 1.0,
        }
    }
}
