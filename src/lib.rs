// Tab slider widget library
//
// A draggable tab riding on a track: it expands while held, collapses on
// release and reports a normalized position mapped into the caller's range.

pub mod config;
pub mod error;
pub mod gui;
pub mod slider;

// Re-export the main types
pub use config::{SliderSettings, TabSettings, TabSize, TabSliderColors, TabSliderConfig};
pub use error::{Result, TabSliderError};
pub use gui::TabSliderWidget;
pub use slider::{Easing, Orientation, PointerChange, PointerId, SliderCanvas, TabSlider, TabState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialise `env_logger` for hosts that do not set up logging themselves.
///
/// Defaults to `warn`, overridable with `RUST_LOG`. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}
