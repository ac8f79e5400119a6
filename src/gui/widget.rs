/// egui integration of the tab slider
///
/// Translates egui pointer input into `PointerChange`s, keeps the track
/// geometry in sync with the allocated size and paints every frame.

use egui::{Pos2, Rect, Sense};
use std::time::Duration;

use super::painter::EguiCanvas;
use crate::slider::{PointerChange, PointerId, TabSlider};

/// egui reports a single (mouse or primary touch) pointer
const PRIMARY_POINTER: PointerId = PointerId(0);

/// Shortest track, in multiples of the thickness, so the tab can always travel
const MIN_TRACK_LENGTH: f32 = 2.0;

pub struct TabSliderWidget {
    slider: TabSlider,
    /// Main-axis length; `None` fills the available space
    length: Option<f32>,
    last_pointer: Option<Pos2>,
}

impl TabSliderWidget {
    pub fn new(slider: TabSlider) -> Self {
        Self {
            slider,
            length: None,
            last_pointer: None,
        }
    }

    pub fn with_length(mut self, length: f32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn slider(&self) -> &TabSlider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut TabSlider {
        &mut self.slider
    }

    /// Allocate, react to input, advance the transition and paint
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let orientation = self.slider.orientation();
        let thickness = self.slider.config().slider.thickness;
        let cross = self.slider.cross_extent();

        let length = self
            .length
            .unwrap_or_else(|| orientation.main(ui.available_size()))
            .max(thickness * MIN_TRACK_LENGTH);
        let (rect, mut response) = ui.allocate_exact_size(orientation.vec(length, cross), Sense::click_and_drag());

        // Track sits on the far cross edge; the tab grows back toward the near edge
        let track = Rect::from_min_size(rect.min + orientation.vec(0.0, cross - thickness), orientation.vec(length, thickness));
        if self.slider.geometry().track().size() != track.size() {
            self.slider.on_resize(track.size());
        }

        if self.handle_input(ui, &response, track.min) {
            response.mark_changed();
        }

        let dt = ui.input(|i| i.stable_dt).max(0.0);
        if self.slider.tick(Duration::from_secs_f32(dt)) {
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            self.slider.paint(&mut EguiCanvas::new(&painter), track.min);
        }

        let cursor = if self.slider.is_dragging() {
            egui::CursorIcon::Grabbing
        } else {
            egui::CursorIcon::Grab
        };
        if self.slider.is_enabled() {
            response = response.on_hover_cursor(cursor);
        }
        response
    }

    /// Returns true if the position changed
    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response, track_origin: Pos2) -> bool {
        let (primary_down, primary_pressed, pointer) = ui.input(|i| {
            (
                i.pointer.primary_down(),
                i.pointer.primary_pressed(),
                i.pointer.interact_pos(),
            )
        });
        let local = pointer.map(|p| p - track_origin.to_vec2());
        let before = self.slider.position();

        if self.slider.is_dragging() {
            if primary_down && local == self.last_pointer {
                return false;
            }
            let position = local.or(self.last_pointer).unwrap_or(Pos2::ZERO);
            self.slider.handle_pointer(PointerChange {
                id: PRIMARY_POINTER,
                position,
                pressed: primary_down,
            });
        } else if primary_pressed && response.is_pointer_button_down_on() {
            if let Some(position) = local {
                self.slider.handle_pointer(PointerChange::down(PRIMARY_POINTER, position));
            }
        }

        self.last_pointer = if self.slider.is_dragging() { local } else { None };
        self.slider.position() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabSliderConfig;
    use crate::slider::TabState;

    fn run_frame(ctx: &egui::Context, widget: &mut TabSliderWidget, events: Vec<egui::Event>) -> Rect {
        let mut rect = Rect::NOTHING;
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(400.0, 300.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = widget.show(ui).rect;
            });
        });
        rect
    }

    #[test]
    fn test_allocates_expansion_room() {
        let ctx = egui::Context::default();
        let slider = TabSlider::horizontal(0.4, 0.0..=1.0, TabSliderConfig::default()).unwrap();
        let mut widget = TabSliderWidget::new(slider).with_length(200.0);

        let rect = run_frame(&ctx, &mut widget, Vec::new());
        assert_eq!(rect.width(), 200.0);
        assert!((rect.height() - 66.0).abs() < 1e-3);
        assert_eq!(widget.slider().geometry().track().size(), egui::vec2(200.0, 40.0));
    }

    fn press(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_drag_through_egui_events() {
        let ctx = egui::Context::default();
        let values = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = values.clone();
        let slider = TabSlider::horizontal(0.0, 0.0..=1.0, TabSliderConfig::default())
            .unwrap()
            .on_value_change(move |v| sink.borrow_mut().push(v));
        let mut widget = TabSliderWidget::new(slider).with_length(200.0);

        // first frame lays out the widget so later presses can hit it
        let rect = run_frame(&ctx, &mut widget, Vec::new());
        let track_min = rect.min + egui::vec2(0.0, 26.0);

        // press outside the widget is not ours
        let outside = Pos2::new(390.0, 290.0);
        run_frame(&ctx, &mut widget, vec![egui::Event::PointerMoved(outside), press(outside, true)]);
        assert!(!widget.slider().is_dragging());
        run_frame(&ctx, &mut widget, vec![press(outside, false)]);

        let middle = track_min + egui::vec2(100.0, 20.0);
        run_frame(&ctx, &mut widget, vec![egui::Event::PointerMoved(middle), press(middle, true)]);
        assert!(widget.slider().is_dragging());
        assert_eq!(widget.slider().position(), 0.5);
        assert_eq!(widget.slider().state(), TabState::Expanded);

        let past_end = track_min + egui::vec2(250.0, 20.0);
        run_frame(&ctx, &mut widget, vec![egui::Event::PointerMoved(past_end)]);
        assert_eq!(widget.slider().position(), 1.0);

        // a held, unmoved pointer sends nothing
        run_frame(&ctx, &mut widget, Vec::new());
        assert_eq!(*values.borrow(), vec![0.5, 1.0]);

        run_frame(&ctx, &mut widget, vec![press(past_end, false)]);
        assert!(!widget.slider().is_dragging());
        assert_eq!(widget.slider().state(), TabState::Collapsed);
        assert_eq!(widget.slider().position(), 1.0);
    }

    #[test]
    fn test_vertical_allocation() {
        let ctx = egui::Context::default();
        let slider = TabSlider::vertical(0.0, 0.0..=300.0, TabSliderConfig::default()).unwrap();
        let mut widget = TabSliderWidget::new(slider).with_length(10.0);

        let rect = run_frame(&ctx, &mut widget, Vec::new());
        // clamped to the minimum track length
        assert_eq!(rect.height(), 80.0);
        assert_eq!(widget.slider().geometry().track().size(), egui::vec2(40.0, 80.0));
        assert_eq!(widget.slider().state(), TabState::Collapsed);
    }
}
