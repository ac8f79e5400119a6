/// egui integration of the tab slider
pub mod painter;
pub mod widget;

pub use painter::EguiCanvas;
pub use widget::TabSliderWidget;
