/// Fill brushes handed to the host canvas.
use super::color::Color;
use super::geom::Point;

/// How a rectangle is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    /// One flat colour.
    Solid(Color),
    /// A linear ramp between two colours.
    LinearGradient(LinearGradient),
}

impl Brush {
    /// The colour this brush paints at horizontal pixel position `x`.
    pub fn color_at(&self, x: f32) -> Color {
        match self {
            Self::Solid(c) => *c,
            Self::LinearGradient(g) => g.color_at(x),
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid(_))
    }
}

/// Linear gradient in absolute pixel coordinates.
///
/// The endpoints are canvas positions, not fractions of the filled
/// rectangle. Segments only ever produce horizontal gradients
/// (`start.y == end.y`).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start_color: Color,
    pub end_color: Color,
    pub start: Point,
    pub end: Point,
}

impl LinearGradient {
    /// Sample the ramp along the x axis, clamping outside the endpoints.
    pub fn color_at(&self, x: f32) -> Color {
        let span = (self.end.x - self.start.x) as f32;
        if span == 0.0 {
            return self.start_color;
        }
        let t = (x - self.start.x as f32) / span;
        self.start_color.lerp(self.end_color, t)
    }
}
