/// GradBar GUI — egui host for the progress bar layout engine.
///
/// Geometry and brush logic live in `gradbar-core`; this crate only maps
/// them onto egui painters and provides a small demo application.
pub mod app;
pub mod canvas;
pub mod icon;
pub mod state;
pub mod widget;

pub use app::GradBarApp;
pub use canvas::EguiCanvas;
pub use state::DemoState;
pub use widget::GradientProgressBar;
