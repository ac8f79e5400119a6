/// Gesture interpreter
///
/// Explicit Idle/Dragging state machine fed one pointer change at a time.
/// Only the pointer that started a session can move or release it.

use egui::Pos2;

use super::geometry::SliderGeometry;
use super::state::TabState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

/// One pointer sample as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerChange {
    pub id: PointerId,
    /// Track-local coordinates
    pub position: Pos2,
    pub pressed: bool,
}

impl PointerChange {
    pub fn down(id: PointerId, position: Pos2) -> Self {
        Self { id, position, pressed: true }
    }

    pub fn moved(id: PointerId, position: Pos2) -> Self {
        Self { id, position, pressed: true }
    }

    pub fn up(id: PointerId, position: Pos2) -> Self {
        Self { id, position, pressed: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging { pointer: PointerId },
}

/// Output of an accepted pointer change
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    Started { position: f32 },
    Moved { position: f32 },
    /// Position is left untouched on release
    Released,
}

impl GestureUpdate {
    pub fn state(&self) -> TabState {
        match self {
            GestureUpdate::Started { .. } | GestureUpdate::Moved { .. } => TabState::Expanded,
            GestureUpdate::Released => TabState::Collapsed,
        }
    }

    pub fn position(&self) -> Option<f32> {
        match *self {
            GestureUpdate::Started { position } | GestureUpdate::Moved { position } => Some(position),
            GestureUpdate::Released => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    phase: GesturePhase,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    pub fn handle(&mut self, change: &PointerChange, geometry: &SliderGeometry) -> Option<GestureUpdate> {
        match self.phase {
            GesturePhase::Idle => {
                if !change.pressed {
                    return None;
                }
                if !geometry.is_measured() {
                    log::trace!("Ignoring press before layout");
                    return None;
                }
                if !geometry.contains(change.position) {
                    log::trace!("Ignoring press outside track at {:?}", change.position);
                    return None;
                }
                self.phase = GesturePhase::Dragging { pointer: change.id };
                let position = geometry.position_from_pointer(change.position);
                log::debug!("Drag started by {:?} at position {:.3}", change.id, position);
                Some(GestureUpdate::Started { position })
            }
            GesturePhase::Dragging { pointer } => {
                if change.id != pointer {
                    log::trace!("Ignoring secondary pointer {:?}", change.id);
                    return None;
                }
                if change.pressed {
                    let position = geometry.position_from_pointer(change.position);
                    log::trace!("Drag moved to position {:.3}", position);
                    Some(GestureUpdate::Moved { position })
                } else {
                    self.phase = GesturePhase::Idle;
                    log::debug!("Drag released by {:?}", pointer);
                    Some(GestureUpdate::Released)
                }
            }
        }
    }

    /// Drop the current session without a release. Returns true if one was active.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = GesturePhase::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::Orientation;
    use egui::{pos2, vec2};

    const FINGER: PointerId = PointerId(1);
    const OTHER: PointerId = PointerId(2);

    fn geometry() -> SliderGeometry {
        let mut geometry = SliderGeometry::new(Orientation::Horizontal);
        geometry.on_resize(vec2(200.0, 40.0));
        geometry
    }

    #[test]
    fn test_press_drag_release() {
        let geometry = geometry();
        let mut gestures = GestureInterpreter::new();

        let started = gestures.handle(&PointerChange::down(FINGER, pos2(20.0, 20.0)), &geometry);
        assert_eq!(started, Some(GestureUpdate::Started { position: 0.0 }));
        assert!(gestures.is_dragging());

        let moved = gestures.handle(&PointerChange::moved(FINGER, pos2(100.0, 20.0)), &geometry);
        assert_eq!(moved, Some(GestureUpdate::Moved { position: 0.5 }));
        assert_eq!(moved.unwrap().state(), TabState::Expanded);

        let released = gestures.handle(&PointerChange::up(FINGER, pos2(180.0, 20.0)), &geometry);
        assert_eq!(released, Some(GestureUpdate::Released));
        assert_eq!(released.unwrap().position(), None);
        assert_eq!(gestures.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let geometry = geometry();
        let mut gestures = GestureInterpreter::new();
        assert_eq!(gestures.handle(&PointerChange::up(FINGER, pos2(50.0, 20.0)), &geometry), None);
        assert!(!gestures.is_dragging());
    }

    #[test]
    fn test_press_outside_track_is_ignored() {
        let geometry = geometry();
        let mut gestures = GestureInterpreter::new();
        assert_eq!(gestures.handle(&PointerChange::down(FINGER, pos2(50.0, -10.0)), &geometry), None);
        assert_eq!(gestures.handle(&PointerChange::down(FINGER, pos2(250.0, 10.0)), &geometry), None);
    }

    #[test]
    fn test_press_before_layout_is_ignored() {
        let geometry = SliderGeometry::new(Orientation::Vertical);
        let mut gestures = GestureInterpreter::new();
        assert_eq!(gestures.handle(&PointerChange::down(FINGER, pos2(0.0, 0.0)), &geometry), None);
    }

    #[test]
    fn test_secondary_pointer_is_ignored() {
        let geometry = geometry();
        let mut gestures = GestureInterpreter::new();
        gestures.handle(&PointerChange::down(FINGER, pos2(60.0, 20.0)), &geometry);

        assert_eq!(gestures.handle(&PointerChange::down(OTHER, pos2(150.0, 20.0)), &geometry), None);
        assert_eq!(gestures.handle(&PointerChange::up(OTHER, pos2(150.0, 20.0)), &geometry), None);
        assert_eq!(gestures.phase(), GesturePhase::Dragging { pointer: FINGER });
    }

    #[test]
    fn test_rearms_after_release() {
        let geometry = geometry();
        let mut gestures = GestureInterpreter::new();
        gestures.handle(&PointerChange::down(FINGER, pos2(60.0, 20.0)), &geometry);
        gestures.handle(&PointerChange::up(FINGER, pos2(60.0, 20.0)), &geometry);

        let again = gestures.handle(&PointerChange::down(OTHER, pos2(180.0, 20.0)), &geometry);
        assert_eq!(again, Some(GestureUpdate::Started { position: 1.0 }));
    }

    #[test]
    fn test_cancel() {
        let geometry = geometry();
        let mut gestures = GestureInterpreter::new();
        assert!(!gestures.cancel());
        gestures.handle(&PointerChange::down(FINGER, pos2(60.0, 20.0)), &geometry);
        assert!(gestures.cancel());
        assert!(!gestures.is_dragging());
    }
}
