/// egui painter backend for the slider canvas contract

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

use crate::slider::SliderCanvas;

pub struct EguiCanvas<'a> {
    painter: &'a Painter,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl SliderCanvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, corner_radius: f32, color: Color32) {
        self.painter.rect_filled(rect, corner_radius, color);
    }

    fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        self.painter
            .layout_no_wrap(text.to_owned(), FontId::proportional(font_size), Color32::WHITE)
            .size()
    }

    fn draw_text(&mut self, pos: Pos2, anchor: Align2, text: &str, font_size: f32, color: Color32) {
        self.painter
            .text(pos, anchor, text, FontId::proportional(font_size), color);
    }
}
