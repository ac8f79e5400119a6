/// Render adapter
///
/// Draw order per frame: background, track, boundary labels, tab, tab label.
/// The tab hit rect is moved to the drawn location as a side effect.

use egui::{Align2, Color32, Pos2, Rect, Vec2};

use super::axis::Orientation;
use super::geometry::SliderGeometry;
use super::transition::TransitionSnapshot;
use crate::config::{TabSliderColors, FALLBACK_TEXT_OFFSET};

/// Drawing surface supplied by the host
pub trait SliderCanvas {
    fn fill_rect(&mut self, rect: Rect, corner_radius: f32, color: Color32);

    fn measure_text(&self, text: &str, font_size: f32) -> Vec2;

    fn draw_text(&mut self, pos: Pos2, anchor: Align2, text: &str, font_size: f32, color: Color32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Start,
    End,
}

/// Everything one frame needs besides the geometry
#[derive(Debug, Clone)]
pub struct SliderScene<'a> {
    pub position: f32,
    pub snapshot: TransitionSnapshot,
    pub colors: TabSliderColors,
    pub expanded_size_multiplier: f32,
    pub slider_corner_radius: f32,
    pub tab_corner_radius: f32,
    pub text_size: f32,
    pub start_label: &'a str,
    pub end_label: &'a str,
    pub tab_label: &'a str,
}

/// Track-local rect of a boundary label.
///
/// The label is centred in the end square (side = thickness); a label wider
/// than the thickness is inset by a fixed offset instead so it cannot spill
/// past the track edge.
pub fn boundary_label_rect(orientation: Orientation, track: Rect, side: LabelSide, text: Vec2) -> Rect {
    let thickness = orientation.cross_extent(track);
    let text_main = orientation.main(text);
    let text_cross = orientation.cross(text);

    let inset = if text.x > thickness {
        FALLBACK_TEXT_OFFSET
    } else {
        (thickness - text_main) / 2.0
    };

    let main_min = match side {
        LabelSide::Start => inset,
        LabelSide::End => orientation.main_extent(track) - inset - text_main,
    };
    let cross_min = (thickness - text_cross) / 2.0;

    orientation
        .rect(main_min, cross_min, text_main, text_cross)
        .translate(track.min.to_vec2())
}

/// Cross-axis centre of the tab label for the current tab size.
///
/// Collapsed: centre of the square. Expanded: centre of the part that
/// sticks out of the track. Linear in between.
pub fn tab_label_cross_center(closed: f32, multiplier: f32, cross_size: f32) -> f32 {
    let expanded_delta = closed * multiplier - closed;
    if expanded_delta <= f32::EPSILON {
        return closed / 2.0;
    }
    let progress = (cross_size - closed) / expanded_delta;
    let correction = (expanded_delta / 2.0 + (closed / 2.0 - expanded_delta)) * progress;
    closed / 2.0 - (cross_size - closed) - correction
}

/// Widget area: the track plus the room the expanded tab grows into
pub fn widget_rect(orientation: Orientation, track: Rect, multiplier: f32) -> Rect {
    let thickness = orientation.cross_extent(track);
    let padding = thickness * multiplier - thickness;
    orientation
        .rect(0.0, -padding, orientation.main_extent(track), thickness + padding)
        .translate(track.min.to_vec2())
}

/// Paint one frame. `origin` is the screen position of the track's local origin.
pub fn paint(canvas: &mut impl SliderCanvas, origin: Pos2, geometry: &mut SliderGeometry, scene: &SliderScene<'_>) {
    let orientation = geometry.orientation();
    let to_screen = origin.to_vec2();
    let track = geometry.track();

    canvas.fill_rect(
        widget_rect(orientation, track, scene.expanded_size_multiplier).translate(to_screen),
        0.0,
        scene.colors.background,
    );
    canvas.fill_rect(track.translate(to_screen), scene.slider_corner_radius, scene.colors.slider);

    for (side, text) in [(LabelSide::Start, scene.start_label), (LabelSide::End, scene.end_label)] {
        if text.is_empty() {
            continue;
        }
        let size = canvas.measure_text(text, scene.text_size);
        let rect = boundary_label_rect(orientation, track, side, size);
        canvas.draw_text(
            rect.min + to_screen,
            Align2::LEFT_TOP,
            text,
            scene.text_size,
            scene.colors.slider_text,
        );
    }

    let closed = geometry.tab_extent();
    let main_offset = geometry.position_to_offset(scene.position);
    let tab = orientation.rect(
        main_offset,
        scene.snapshot.cross_offset,
        closed,
        scene.snapshot.cross_size,
    );
    canvas.fill_rect(tab.translate(to_screen), scene.tab_corner_radius, scene.snapshot.color);

    geometry.place_tab(main_offset, scene.snapshot.cross_offset);

    if !scene.tab_label.is_empty() {
        let center = orientation.pos(
            main_offset + closed / 2.0,
            tab_label_cross_center(closed, scene.expanded_size_multiplier, scene.snapshot.cross_size),
        );
        canvas.draw_text(
            center + to_screen,
            Align2::CENTER_CENTER,
            scene.tab_label,
            scene.text_size,
            scene.colors.tab_text,
        );
    }
}
