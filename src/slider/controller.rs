/// Tab slider controller
///
/// Owns the geometry, the gesture session, the transition and the position,
/// and fires the caller's callbacks after every accepted mutation.

use egui::{Pos2, Rect, Vec2};
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

use super::axis::Orientation;
use super::geometry::SliderGeometry;
use super::gesture::{GestureInterpreter, GestureUpdate, PointerChange};
use super::render::{self, SliderCanvas, SliderScene};
use super::state::TabState;
use super::transition::{TabTransition, TransitionSnapshot};
use crate::config::TabSliderConfig;
use crate::error::{Result, TabSliderError};

pub type ValueCallback = Box<dyn FnMut(f32)>;
pub type EventCallback = Box<dyn FnMut()>;

#[derive(Default)]
struct SliderCallbacks {
    on_value_change: Option<ValueCallback>,
    on_value_change_finished: Option<EventCallback>,
    on_touch_started: Option<EventCallback>,
    on_position_changed: Option<ValueCallback>,
    on_touch_released: Option<EventCallback>,
}

pub struct TabSlider {
    orientation: Orientation,
    value_range: RangeInclusive<f32>,
    config: TabSliderConfig,
    geometry: SliderGeometry,
    gestures: GestureInterpreter,
    transition: TabTransition,
    /// Normalized, always within [0, 1]
    position: f32,
    callbacks: SliderCallbacks,
}

impl TabSlider {
    /// Create a slider showing `value` (in `value_range` units)
    pub fn new(
        orientation: Orientation,
        value: f32,
        value_range: RangeInclusive<f32>,
        config: TabSliderConfig,
    ) -> Result<Self> {
        let (start, end) = (*value_range.start(), *value_range.end());
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(TabSliderError::InvalidValueRange { start, end });
        }
        config.validate()?;

        let transition = TabTransition::new(
            Duration::from_millis(config.tab.expansion_speed_ms as u64),
            config.tab.easing,
        );

        let mut slider = Self {
            orientation,
            value_range,
            config,
            geometry: SliderGeometry::new(orientation),
            gestures: GestureInterpreter::new(),
            transition,
            position: 0.0,
            callbacks: SliderCallbacks::default(),
        };
        slider.position = slider.normalize(value);
        Ok(slider)
    }

    pub fn horizontal(value: f32, value_range: RangeInclusive<f32>, config: TabSliderConfig) -> Result<Self> {
        Self::new(Orientation::Horizontal, value, value_range, config)
    }

    pub fn vertical(value: f32, value_range: RangeInclusive<f32>, config: TabSliderConfig) -> Result<Self> {
        Self::new(Orientation::Vertical, value, value_range, config)
    }

    /// Build a slider from a JSON configuration file
    pub fn from_config_file<P: AsRef<Path>>(
        orientation: Orientation,
        value: f32,
        value_range: RangeInclusive<f32>,
        path: P,
    ) -> Result<Self> {
        let config = TabSliderConfig::load(path)?;
        Self::new(orientation, value, value_range, config)
    }

    /// Fired on every accepted position update with the value in range units
    pub fn on_value_change(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.callbacks.on_value_change = Some(Box::new(callback));
        self
    }

    /// Fired once per completed drag
    pub fn on_value_change_finished(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_value_change_finished = Some(Box::new(callback));
        self
    }

    pub fn on_touch_started(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_touch_started = Some(Box::new(callback));
        self
    }

    /// Fired on every drag move with the normalized position
    pub fn on_position_changed(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.callbacks.on_position_changed = Some(Box::new(callback));
        self
    }

    pub fn on_touch_released(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callbacks.on_touch_released = Some(Box::new(callback));
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn value_range(&self) -> &RangeInclusive<f32> {
        &self.value_range
    }

    pub fn config(&self) -> &TabSliderConfig {
        &self.config
    }

    pub fn geometry(&self) -> &SliderGeometry {
        &self.geometry
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Current value in range units
    pub fn value(&self) -> f32 {
        let (start, end) = (*self.value_range.start(), *self.value_range.end());
        start + (end - start) * self.position
    }

    /// Caller-driven value change; clamped into the range
    pub fn set_value(&mut self, value: f32) {
        self.position = self.normalize(value);
    }

    pub fn state(&self) -> TabState {
        self.transition.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Disabling drops an active drag without firing the finished callback
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.config.enabled == enabled {
            return;
        }
        self.config.enabled = enabled;
        if !enabled && self.gestures.cancel() {
            log::debug!("{:?} slider disabled mid-drag, session cancelled", self.orientation);
            self.transition.set_state(TabState::Collapsed);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// Size the widget occupies along the cross axis, including expansion room
    pub fn cross_extent(&self) -> f32 {
        self.config.slider.thickness * self.config.tab.expanded_size_multiplier
    }

    /// Layout callback with the measured track size
    pub fn on_resize(&mut self, size: Vec2) -> (Rect, Rect) {
        self.geometry.on_resize(size)
    }

    /// Feed one pointer change in track-local coordinates
    pub fn handle_pointer(&mut self, change: PointerChange) -> Option<GestureUpdate> {
        if !self.config.enabled {
            log::trace!("Ignoring pointer input on disabled slider");
            return None;
        }
        let update = self.gestures.handle(&change, &self.geometry)?;
        self.apply(update);
        Some(update)
    }

    /// Apply a batch of changes in arrival order; the last one wins
    pub fn handle_pointers<'a>(&mut self, changes: impl IntoIterator<Item = &'a PointerChange>) -> usize {
        changes
            .into_iter()
            .filter_map(|change| self.handle_pointer(*change))
            .count()
    }

    fn apply(&mut self, update: GestureUpdate) {
        if let Some(position) = update.position() {
            self.position = position.clamp(0.0, 1.0);
        }
        self.transition.set_state(update.state());

        let value = self.value();
        let callbacks = &mut self.callbacks;
        match update {
            GestureUpdate::Started { .. } => {
                if let Some(callback) = callbacks.on_touch_started.as_mut() {
                    callback();
                }
                if let Some(callback) = callbacks.on_value_change.as_mut() {
                    callback(value);
                }
            }
            GestureUpdate::Moved { position } => {
                if let Some(callback) = callbacks.on_position_changed.as_mut() {
                    callback(position);
                }
                if let Some(callback) = callbacks.on_value_change.as_mut() {
                    callback(value);
                }
            }
            GestureUpdate::Released => {
                if let Some(callback) = callbacks.on_touch_released.as_mut() {
                    callback();
                }
                if let Some(callback) = callbacks.on_value_change_finished.as_mut() {
                    callback();
                }
            }
        }
    }

    /// Advance the transition by one frame. Returns true while it still runs.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.transition.tick(dt)
    }

    pub fn snapshot(&self) -> TransitionSnapshot {
        self.transition.snapshot(
            self.geometry.thickness(),
            self.config.tab.expanded_size_multiplier,
            &self.config.active_colors(),
        )
    }

    pub fn start_label(&self) -> String {
        self.config
            .slider
            .start_label
            .clone()
            .unwrap_or_else(|| self.value_range.start().to_string())
    }

    pub fn end_label(&self) -> String {
        self.config
            .slider
            .end_label
            .clone()
            .unwrap_or_else(|| self.value_range.end().to_string())
    }

    /// Replace the tab text; `None` shows the current value
    pub fn set_tab_label(&mut self, label: Option<String>) {
        self.config.tab.label = label;
    }

    /// Configured tab label, or the current value truncated to an integer
    pub fn tab_label(&self) -> String {
        match &self.config.tab.label {
            Some(label) => label.clone(),
            None => (self.value().trunc() as i64).to_string(),
        }
    }

    /// Draw the slider; `origin` is the screen position of the track's top-left corner
    pub fn paint(&mut self, canvas: &mut impl SliderCanvas, origin: Pos2) {
        if !self.geometry.is_measured() {
            return;
        }
        let start_label = self.start_label();
        let end_label = self.end_label();
        let tab_label = self.tab_label();
        let scene = SliderScene {
            position: self.position,
            snapshot: self.snapshot(),
            colors: self.config.active_colors(),
            expanded_size_multiplier: self.config.tab.expanded_size_multiplier,
            slider_corner_radius: self.config.slider.corner_radius,
            tab_corner_radius: self.config.tab.corner_radius,
            text_size: self.config.slider.text_size,
            start_label: &start_label,
            end_label: &end_label,
            tab_label: &tab_label,
        };
        render::paint(canvas, origin, &mut self.geometry, &scene);
    }

    fn normalize(&self, value: f32) -> f32 {
        if value.is_nan() {
            log::warn!("NaN slider value, using range start");
            return 0.0;
        }
        let (start, end) = (*self.value_range.start(), *self.value_range.end());
        ((value - start) / (end - start)).clamp(0.0, 1.0)
    }
}

impl std::fmt::Debug for TabSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabSlider")
            .field("orientation", &self.orientation)
            .field("value_range", &self.value_range)
            .field("position", &self.position)
            .field("state", &self.state())
            .field("gesture", &self.gestures.phase())
            .field("geometry", &self.geometry)
            .finish()
    }
}
