/// Geometry mapper: pointer coordinates <-> normalized tab position
///
/// All rects are in track-local coordinates (track origin at 0,0).
/// Formulas are shared by both orientations through [`Orientation`].

use egui::{Pos2, Rect, Vec2};

use super::axis::Orientation;

#[derive(Debug, Clone, PartialEq)]
pub struct SliderGeometry {
    orientation: Orientation,
    track: Rect,
    tab: Rect,
}

impl SliderGeometry {
    /// Empty geometry, populated by the first [`SliderGeometry::on_resize`]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            track: Rect::NOTHING,
            tab: Rect::NOTHING,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    pub fn tab(&self) -> Rect {
        self.tab
    }

    /// True once a layout with a usable travel distance has been measured
    pub fn is_measured(&self) -> bool {
        self.track.is_positive() && self.travel() > 0.0
    }

    /// Track takes the full measured bounds; the closed tab is a square
    /// whose side is the track thickness
    pub fn on_resize(&mut self, size: Vec2) -> (Rect, Rect) {
        let thickness = self.orientation.cross(size);
        self.track = Rect::from_min_size(Pos2::ZERO, size);
        self.tab = Rect::from_min_size(Pos2::ZERO, Vec2::splat(thickness));
        log::debug!(
            "{:?} slider resized: track {:?}, tab side {}",
            self.orientation,
            size,
            thickness
        );
        (self.track, self.tab)
    }

    pub fn track_extent(&self) -> f32 {
        self.orientation.main_extent(self.track)
    }

    pub fn tab_extent(&self) -> f32 {
        self.orientation.main_extent(self.tab)
    }

    pub fn thickness(&self) -> f32 {
        self.orientation.cross_extent(self.track)
    }

    /// Distance the tab origin can travel along the main axis
    pub fn travel(&self) -> f32 {
        self.track_extent() - self.tab_extent()
    }

    /// `(pointer - tab/2) / (track - tab)` clamped to [0, 1].
    ///
    /// Precondition: the track is longer than the tab along the main axis.
    pub fn pointer_to_position(&self, pointer_main: f32) -> f32 {
        let travel = self.travel();
        debug_assert!(travel > 0.0, "degenerate track: travel distance {}", travel);
        ((pointer_main - self.tab_extent() / 2.0) / travel).clamp(0.0, 1.0)
    }

    pub fn position_from_pointer(&self, pointer: Pos2) -> f32 {
        self.pointer_to_position(self.orientation.main_of(pointer))
    }

    /// Main-axis draw origin of the tab for a position
    pub fn position_to_offset(&self, position: f32) -> f32 {
        position * self.travel()
    }

    /// Move the tab hit rect to the drawn location
    pub fn place_tab(&mut self, main_offset: f32, cross_offset: f32) {
        let size = self.tab.size();
        self.tab = Rect::from_min_size(self.orientation.pos(main_offset, cross_offset), size);
    }

    pub fn contains(&self, point: Pos2) -> bool {
        self.track.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn horizontal(width: f32, height: f32) -> SliderGeometry {
        let mut geometry = SliderGeometry::new(Orientation::Horizontal);
        geometry.on_resize(vec2(width, height));
        geometry
    }

    #[test]
    fn test_unmeasured_geometry() {
        let geometry = SliderGeometry::new(Orientation::Vertical);
        assert!(!geometry.is_measured());
    }

    #[test]
    fn test_resize_sets_square_tab() {
        let geometry = horizontal(200.0, 40.0);
        assert_eq!(geometry.track().size(), vec2(200.0, 40.0));
        assert_eq!(geometry.tab().size(), vec2(40.0, 40.0));
        assert_eq!(geometry.travel(), 160.0);

        let mut vertical = SliderGeometry::new(Orientation::Vertical);
        vertical.on_resize(vec2(30.0, 300.0));
        assert_eq!(vertical.tab().size(), vec2(30.0, 30.0));
        assert_eq!(vertical.travel(), 270.0);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut geometry = horizontal(200.0, 40.0);
        let first = geometry.on_resize(vec2(321.0, 37.0));
        let second = geometry.on_resize(vec2(321.0, 37.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_pointer_mapping() {
        let geometry = horizontal(200.0, 40.0);
        assert_eq!(geometry.pointer_to_position(100.0), 0.5);
        assert_eq!(geometry.pointer_to_position(20.0), 0.0);
        assert_eq!(geometry.pointer_to_position(180.0), 1.0);
    }

    #[test]
    fn test_pointer_mapping_is_clamped() {
        let geometry = horizontal(200.0, 40.0);
        for p in [-1000.0, -1.0, 0.0, 5.0, 199.0, 250.0, 1e6] {
            let position = geometry.pointer_to_position(p);
            assert!((0.0..=1.0).contains(&position), "{} -> {}", p, position);
        }
        assert_eq!(geometry.pointer_to_position(-50.0), 0.0);
        assert_eq!(geometry.pointer_to_position(500.0), 1.0);
    }

    #[test]
    fn test_round_trip_inside_drag_range() {
        let geometry = horizontal(200.0, 40.0);
        for p in [21.0, 50.0, 100.0, 133.3, 179.0] {
            let offset = geometry.position_to_offset(geometry.pointer_to_position(p));
            assert!((offset - (p - 20.0)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_orientation_symmetry_at_tab_center() {
        let h = horizontal(200.0, 40.0);
        let mut v = SliderGeometry::new(Orientation::Vertical);
        v.on_resize(vec2(40.0, 200.0));

        assert_eq!(h.position_from_pointer(Pos2::new(20.0, 20.0)), v.position_from_pointer(Pos2::new(20.0, 20.0)));
        assert_eq!(h.position_from_pointer(Pos2::new(100.0, 5.0)), v.position_from_pointer(Pos2::new(5.0, 100.0)));
    }

    #[test]
    fn test_place_tab_keeps_size() {
        let mut geometry = horizontal(200.0, 40.0);
        geometry.place_tab(80.0, -26.0);
        assert_eq!(geometry.tab().min, Pos2::new(80.0, -26.0));
        assert_eq!(geometry.tab().size(), vec2(40.0, 40.0));
        assert_eq!(geometry.tab_extent(), 40.0);
    }
}
