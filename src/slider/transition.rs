/// Collapsed/Expanded transition
///
/// The controller never reads a clock: the host calls [`TabTransition::tick`]
/// with the frame delta and reads the interpolated snapshot on every redraw.

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::state::TabState;
use crate::config::TabSliderColors;

/// Easing curve applied to the linear time fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// cubic-bezier(0.4, 0.0, 0.2, 1.0)
    #[default]
    FastOutSlowIn,
}

impl Easing {
    pub fn apply(self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic bezier timing curve at time `x`
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    fn component(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    // x(t) is monotonic for x1, x2 in [0, 1]
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut t = x;
    for _ in 0..24 {
        let guess = component(x1, x2, t);
        if (guess - x).abs() < 1e-5 {
            break;
        }
        if guess < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    component(y1, y2, t)
}

/// `start + (end - start) * fraction`
pub fn interpolate(start: f32, end: f32, fraction: f32) -> f32 {
    egui::lerp(start..=end, fraction)
}

pub fn interpolate_color(start: Color32, end: Color32, fraction: f32) -> Color32 {
    let channel = |a: u8, b: u8| interpolate(a as f32, b as f32, fraction).round() as u8;
    Color32::from_rgba_premultiplied(
        channel(start.r(), end.r()),
        channel(start.g(), end.g()),
        channel(start.b(), end.b()),
        channel(start.a(), end.a()),
    )
}

/// Tab appearance along the cross axis.
///
/// `cross_offset` is measured from the track's cross origin; the tab's far
/// edge stays on the track's far edge, so `cross_offset == thickness - cross_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSnapshot {
    /// 0 collapsed .. 1 expanded
    pub expansion: f32,
    pub cross_size: f32,
    pub cross_offset: f32,
    pub color: Color32,
}

impl TransitionSnapshot {
    /// Endpoint values for a state
    pub fn target(state: TabState, closed: f32, multiplier: f32, colors: &TabSliderColors) -> Self {
        match state {
            TabState::Collapsed => Self {
                expansion: 0.0,
                cross_size: closed,
                cross_offset: 0.0,
                color: colors.collapsed_tab,
            },
            TabState::Expanded => Self {
                expansion: 1.0,
                cross_size: closed * multiplier,
                cross_offset: -(closed * multiplier - closed),
                color: colors.expanded_tab,
            },
        }
    }

    /// Interpolate every field between the two endpoints
    pub fn between(collapsed: &Self, expanded: &Self, expansion: f32) -> Self {
        Self {
            expansion,
            cross_size: interpolate(collapsed.cross_size, expanded.cross_size, expansion),
            cross_offset: interpolate(collapsed.cross_offset, expanded.cross_offset, expansion),
            color: interpolate_color(collapsed.color, expanded.color, expansion),
        }
    }
}

/// Drives the expansion value toward the current state's target
#[derive(Debug, Clone)]
pub struct TabTransition {
    state: TabState,
    from: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl TabTransition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            state: TabState::Collapsed,
            from: TabState::Collapsed.target(),
            elapsed: duration,
            duration,
            easing,
        }
    }

    pub fn state(&self) -> TabState {
        self.state
    }

    /// Retarget; an in-flight transition restarts from its current value
    pub fn set_state(&mut self, state: TabState) {
        if state == self.state {
            return;
        }
        self.from = self.value();
        self.state = state;
        self.elapsed = Duration::ZERO;
    }

    /// Advance by one frame. Returns true while still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.elapsed < self.duration
    }

    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
        }
    }

    /// Current expansion, 0 collapsed .. 1 expanded
    pub fn value(&self) -> f32 {
        interpolate(self.from, self.state.target(), self.easing.apply(self.fraction()))
    }

    pub fn snapshot(&self, closed: f32, multiplier: f32, colors: &TabSliderColors) -> TransitionSnapshot {
        let collapsed = TransitionSnapshot::target(TabState::Collapsed, closed, multiplier, colors);
        let expanded = TransitionSnapshot::target(TabState::Expanded, closed, multiplier, colors);
        TransitionSnapshot::between(&collapsed, &expanded, self.value())
    }
}
