/// egui widget wrapping a `ProgressBarLayout`.
///
/// Each frame: allocate the space, run the measure pass with the allocated
/// size (rounded to whole pixels), then render through an [`EguiCanvas`].
use crate::canvas::EguiCanvas;
use egui::{Response, Sense, Ui, Vec2, Widget};
use gradbar_core::{Element, ProgressBarLayout, Size};

/// Height used when the caller does not request a size.
pub const DEFAULT_BAR_HEIGHT: f32 = 24.0;

/// A segmented gradient progress bar.
///
/// ```ignore
/// let bar = Arc::new(ProgressBarLayout::default());
/// ui.add(GradientProgressBar::new(&bar).desired_size(egui::vec2(300.0, 20.0)));
/// ```
pub struct GradientProgressBar<'a> {
    layout: &'a ProgressBarLayout,
    desired_size: Option<Vec2>,
}

impl<'a> GradientProgressBar<'a> {
    pub fn new(layout: &'a ProgressBarLayout) -> Self {
        Self {
            layout,
            desired_size: None,
        }
    }

    /// Fixed size in points. Defaults to the full available width at
    /// [`DEFAULT_BAR_HEIGHT`].
    pub fn desired_size(mut self, size: Vec2) -> Self {
        self.desired_size = Some(size);
        self
    }
}

/// Round an egui size to the integer size handed to the measure pass.
pub fn pixel_size(size: Vec2) -> Size {
    Size::new(size.x.round() as i32, size.y.round() as i32)
}

impl Widget for GradientProgressBar<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = self
            .desired_size
            .unwrap_or_else(|| Vec2::new(ui.available_width(), DEFAULT_BAR_HEIGHT));
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        self.layout.measure(pixel_size(rect.size()));

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            let mut canvas = EguiCanvas::new(&painter, rect.min);
            self.layout.render(&mut canvas);
        }

        let (min, value, max) = (
            self.layout.min_value(),
            self.layout.value(),
            self.layout.max_value(),
        );
        response.on_hover_text(format!("{value} ({min} – {max})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size_rounds() {
        assert_eq!(pixel_size(Vec2::new(99.6, 23.2)), Size::new(100, 23));
        assert_eq!(pixel_size(Vec2::ZERO), Size::new(0, 0));
    }
}
