/// A single weighted colour span of the progress bar.
///
/// The colours and weight are fixed at construction. Everything else
/// (scale, pixel span, brush) is written by the owning
/// [`ProgressBarLayout`](crate::layout::ProgressBarLayout) on each layout
/// pass and is only meaningful after one.
use crate::error::{LayoutError, Result};
use crate::surface::{Brush, Canvas, Color, LinearGradient, Point, Rect};
use tracing::{trace, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    start_color: Color,
    end_color: Color,
    weight: f64,
    scale: f64,

    brush: Brush,
    start_x: i32,
    end_x: i32,
    start_y: i32,
    end_y: i32,
    width: i32,
    height: i32,
}

impl Segment {
    /// A segment that ramps from `start_color` to `end_color`.
    ///
    /// `weight` must be finite and greater than zero, otherwise
    /// [`LayoutError::OutOfRange`] is returned.
    pub fn new(weight: f64, start_color: Color, end_color: Color) -> Result<Self> {
        if !weight.is_finite() || weight <= 0.0 {
            warn!(weight, "rejected segment weight");
            return Err(LayoutError::OutOfRange(weight));
        }
        Ok(Self::with_valid_weight(weight, start_color, end_color))
    }

    /// Construct from a weight already known to be finite and positive.
    pub(crate) fn with_valid_weight(weight: f64, start_color: Color, end_color: Color) -> Self {
        debug_assert!(weight.is_finite() && weight > 0.0);
        Self {
            start_color,
            end_color,
            weight,
            scale: 1.0,
            brush: Brush::Solid(start_color),
            start_x: 0,
            end_x: 0,
            start_y: 0,
            end_y: 0,
            width: 0,
            height: 0,
        }
    }

    /// A flat-coloured segment.
    pub fn solid(weight: f64, color: Color) -> Result<Self> {
        Self::new(weight, color, color)
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn start_color(&self) -> Color {
        self.start_color
    }

    pub fn end_color(&self) -> Color {
        self.end_color
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    /// Last pixel column covered (inclusive). Never less than `start_x`,
    /// even for a zero-width segment.
    pub fn end_x(&self) -> i32 {
        self.end_x
    }

    pub fn start_y(&self) -> i32 {
        self.start_y
    }

    pub fn end_y(&self) -> i32 {
        self.end_y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The rectangle this segment paints.
    pub fn rect(&self) -> Rect {
        Rect::new(self.start_x, self.start_y, self.width, self.height)
    }

    pub(crate) fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Compute this segment's span and brush for one layout pass.
    ///
    /// `max_width` is the whole fill width; `available_width` is what is left
    /// of it after the preceding segments, and caps this one so rounding
    /// can never overflow the bar.
    pub(crate) fn layout(
        &mut self,
        start_x: i32,
        max_width: i32,
        available_width: i32,
        start_y: i32,
        max_height: i32,
    ) {
        let share = (f64::from(max_width) * (self.weight * self.scale)).round_ties_even();
        let width = (share as i32).min(available_width);
        let end_x = start_x.saturating_add(width - 1).max(start_x);

        self.brush = if self.start_color == self.end_color {
            Brush::Solid(self.start_color)
        } else {
            Brush::LinearGradient(LinearGradient {
                start_color: self.start_color,
                end_color: self.end_color,
                start: Point::new(start_x, start_y),
                end: Point::new(end_x, start_y),
            })
        };

        self.start_x = start_x;
        self.end_x = end_x;
        self.start_y = start_y;
        self.end_y = start_y.saturating_add(max_height);
        self.width = width.max(0);
        self.height = max_height.max(0);

        trace!(
            start_x,
            end_x,
            width = self.width,
            height = self.height,
            "segment laid out"
        );
    }

    pub(crate) fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect(), &self.brush);
    }
}
