/// Slider orientation and main/cross axis projection
///
/// Geometry and gesture code work in (main, cross) coordinates only;
/// the orientation decides which physical axis is "main".

use egui::{vec2, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Tab travels along x, expands along y
    #[default]
    Horizontal,
    /// Tab travels along y, expands along x
    Vertical,
}

impl Orientation {
    pub fn main(self, v: Vec2) -> f32 {
        match self {
            Orientation::Horizontal => v.x,
            Orientation::Vertical => v.y,
        }
    }

    pub fn cross(self, v: Vec2) -> f32 {
        match self {
            Orientation::Horizontal => v.y,
            Orientation::Vertical => v.x,
        }
    }

    pub fn main_of(self, p: Pos2) -> f32 {
        self.main(p.to_vec2())
    }

    pub fn cross_of(self, p: Pos2) -> f32 {
        self.cross(p.to_vec2())
    }

    /// Build a physical vector from axis components
    pub fn vec(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Orientation::Horizontal => vec2(main, cross),
            Orientation::Vertical => vec2(cross, main),
        }
    }

    pub fn pos(self, main: f32, cross: f32) -> Pos2 {
        self.vec(main, cross).to_pos2()
    }

    /// Rect spanning `[main_min, main_min + main_len] x [cross_min, cross_min + cross_len]`
    pub fn rect(self, main_min: f32, cross_min: f32, main_len: f32, cross_len: f32) -> Rect {
        Rect::from_min_size(self.pos(main_min, cross_min), self.vec(main_len, cross_len))
    }

    pub fn main_extent(self, rect: Rect) -> f32 {
        self.main(rect.size())
    }

    pub fn cross_extent(self, rect: Rect) -> f32 {
        self.cross(rect.size())
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }
}
