/// Canvas and element hooks implemented by (or for) the host toolkit.
use super::brush::Brush;
use super::geom::{Rect, Size};

/// A drawing surface that can fill rectangles. No strokes.
pub trait Canvas {
    /// Fill `rect` with `brush`. Rectangles with a non-positive width or
    /// height may be forwarded; the canvas decides how to treat them.
    fn fill_rect(&mut self, rect: Rect, brush: &Brush);
}

/// The measure/render hooks a host framework calls on a control.
pub trait Element {
    /// Measure pass: receives the available size and reports the desired
    /// size, recomputing any size-dependent layout on the way.
    fn measure(&self, available: Size) -> Size;

    /// Paint the control onto `canvas` in element-local coordinates.
    fn render(&self, canvas: &mut dyn Canvas);
}

/// One recorded fill call.
#[derive(Debug, Clone, PartialEq)]
pub struct FillOp {
    pub rect: Rect,
    pub brush: Brush,
}

/// A canvas that records the ordered paint list instead of drawing.
///
/// Used by tests and by hosts that rasterise the list themselves.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    pub ops: Vec<FillOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded fills.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Just the rectangles, in paint order.
    pub fn rects(&self) -> Vec<Rect> {
        self.ops.iter().map(|op| op.rect).collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        self.ops.push(FillOp {
            rect,
            brush: brush.clone(),
        });
    }
}
