//! GradBar application icon generator.
//!
//! Renders the default progress bar (bordered, 80% full) through the
//! layout engine into an RGBA buffer, using a small software canvas.

use gradbar_core::{Brush, Canvas, Element, ProgressBarLayout, Rect, Size};

/// Generate a GradBar icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
///
/// The bar occupies the middle half of the square; the rest stays
/// transparent.
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as i32;
    let bar = ProgressBarLayout::default();
    if let Err(e) = bar.set_uniform_border_thickness((s / 16).max(1)) {
        tracing::warn!("icon border rejected: {e}");
    }
    bar.set_value(80);
    bar.measure(Size::new(s, s / 2));

    let mut canvas = PixelCanvas::new(size, size, s / 4);
    bar.render(&mut canvas);
    canvas.pixels
}

/// Software rasteriser: clips each rectangle and samples the brush per
/// column.
struct PixelCanvas {
    width: i32,
    height: i32,
    offset_y: i32,
    pixels: Vec<u8>,
}

impl PixelCanvas {
    fn new(width: u32, height: u32, offset_y: i32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            offset_y,
            pixels: vec![0u8; (width * height * 4) as usize],
        }
    }
}

impl Canvas for PixelCanvas {
    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        let x0 = rect.x.max(0);
        let x1 = rect.right().min(self.width);
        let y0 = (rect.y + self.offset_y).max(0);
        let y1 = (rect.bottom() + self.offset_y).min(self.height);

        for x in x0..x1 {
            let c = brush.color_at(x as f32);
            for y in y0..y1 {
                let idx = ((y * self.width + x) * 4) as usize;
                self.pixels[idx] = c.r;
                self.pixels[idx + 1] = c.g;
                self.pixels[idx + 2] = c.b;
                self.pixels[idx + 3] = c.a;
            }
        }
    }
}
