/// Tab slider core
///
/// Orientation-independent logic of the widget:
/// - axis: main/cross projection for horizontal and vertical sliders
/// - geometry: pointer coordinates <-> normalized position
/// - gesture: press/drag/release state machine
/// - transition: collapsed/expanded interpolation
/// - render: drawing contract and frame layout
/// - controller: the `TabSlider` tying it all together

pub mod axis;
pub mod controller;
pub mod geometry;
pub mod gesture;
pub mod render;
pub mod state;
pub mod transition;

pub use axis::Orientation;
pub use controller::{EventCallback, TabSlider, ValueCallback};
pub use geometry::SliderGeometry;
pub use gesture::{GestureInterpreter, GesturePhase, GestureUpdate, PointerChange, PointerId};
pub use render::{LabelSide, SliderCanvas, SliderScene};
pub use state::TabState;
pub use transition::{interpolate, interpolate_color, Easing, TabTransition, TransitionSnapshot};
