/// GradBar Core — layout engine for a segmented gradient progress bar.
///
/// This crate contains all geometry and brush logic with zero UI dependencies.
/// A host toolkit drives it through the abstract [`surface`] types and the
/// [`surface::Element`] measure/render hooks.
///
/// # Modules
///
/// - [`surface`] — Colour, geometry, brush and canvas abstractions the host implements.
/// - [`segment`] — One weighted colour span and its per-pass geometry.
/// - [`layout`] — The progress bar layout: range, borders, cutoff and paint order.
/// - [`config`] — Serde description of a bar, parsed from JSON.
/// - [`error`] — Validation errors.
pub mod config;
pub mod error;
pub mod layout;
pub mod segment;
pub mod surface;

pub use config::BarConfig;
pub use error::{LayoutError, Result};
pub use layout::{ProgressBarLayout, Thickness};
pub use segment::Segment;
pub use surface::{Brush, Canvas, Color, Element, LinearGradient, Point, Rect, RecordingCanvas, Size};
