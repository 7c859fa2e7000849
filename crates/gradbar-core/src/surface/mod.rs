/// Host drawing surface.
///
/// The layout engine never talks to a concrete GUI toolkit. It produces
/// [`Brush`]es and [`Rect`]s and hands them to a [`Canvas`]; the host
/// drives it through the [`Element`] hooks.
pub mod brush;
pub mod canvas;
pub mod color;
pub mod geom;

pub use brush::{Brush, LinearGradient};
pub use canvas::{Canvas, Element, FillOp, RecordingCanvas};
pub use color::Color;
pub use geom::{Point, Rect, Size};
