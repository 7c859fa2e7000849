/// `Canvas` implementation on top of an egui `Painter`.
///
/// Solid brushes map to `rect_filled`. Linear gradients become a
/// four-vertex mesh whose left and right edge colours are sampled from the
/// gradient in absolute pixel space, so a gradient keeps its endpoints even
/// when the rectangle it fills is narrower or wider than the ramp.
use egui::{Color32, Mesh, Painter, Pos2, Shape, Vec2};
use gradbar_core::{Brush, Canvas, Color, LinearGradient, Rect};

/// Paints layout output at `origin` (the widget's top-left corner).
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        // egui would draw nothing anyway; skip the shape allocation.
        if rect.is_empty() {
            return;
        }
        let target = to_egui_rect(self.origin, rect);
        match brush {
            Brush::Solid(color) => {
                self.painter.rect_filled(target, 0.0, to_color32(*color));
            }
            Brush::LinearGradient(gradient) => {
                self.painter
                    .add(Shape::mesh(gradient_mesh(target, rect, gradient)));
            }
        }
    }
}

/// Convert a core colour (straight alpha) into an egui colour.
pub fn to_color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Place a layout rectangle relative to `origin`.
pub fn to_egui_rect(origin: Pos2, rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + Vec2::new(rect.x as f32, rect.y as f32),
        Vec2::new(rect.width as f32, rect.height as f32),
    )
}

/// Horizontal gradient quad: left edge at the rectangle's first pixel
/// column, right edge at its last.
fn gradient_mesh(target: egui::Rect, rect: Rect, gradient: &LinearGradient) -> Mesh {
    let left = to_color32(gradient.color_at(rect.x as f32));
    let right = to_color32(gradient.color_at((rect.right() - 1) as f32));

    let mut mesh = Mesh::default();
    mesh.colored_vertex(target.left_top(), left);
    mesh.colored_vertex(target.right_top(), right);
    mesh.colored_vertex(target.right_bottom(), right);
    mesh.colored_vertex(target.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}
