/// Progress bar layout — the ordered segments, the value range, the border
/// and the fill cutoff.
///
/// Every mutator recomputes the derived fields it affects before returning,
/// so [`ProgressBarLayout::render`] always paints the latest committed state:
///
/// | mutator                          | recomputes                          |
/// |----------------------------------|-------------------------------------|
/// | `set_segments`                   | scale, segment geometry, cutoff     |
/// | `set_border_thickness`           | fill size, segment geometry, cutoff |
/// | `on_resize` / `measure`          | fill size, segment geometry, cutoff |
/// | `set_min/max_value`, `set_value` | clamped range, cutoff               |
/// | `set_border/background_color`    | the matching solid brush            |
///
/// All state sits behind one `parking_lot::Mutex`, so a layout pass and a
/// paint pass may run on different threads against a shared
/// `Arc<ProgressBarLayout>`.
use crate::error::{LayoutError, Result};
use crate::segment::Segment;
use crate::surface::{Brush, Canvas, Color, Element, Rect, Size};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default range and value of a new bar.
pub const DEFAULT_MIN_VALUE: i32 = 0;
pub const DEFAULT_MAX_VALUE: i32 = 100;
pub const DEFAULT_VALUE: i32 = 50;

/// Border thickness per side, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Thickness {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Thickness {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same thickness on all four sides.
    pub const fn uniform(length: i32) -> Self {
        Self::new(length, length, length, length)
    }

    fn validate(self) -> Result<Self> {
        if self.left < 0 || self.top < 0 || self.right < 0 || self.bottom < 0 {
            return Err(LayoutError::InvalidArgument {
                left: self.left,
                top: self.top,
                right: self.right,
                bottom: self.bottom,
            });
        }
        Ok(self)
    }
}

/// Everything the lock guards.
#[derive(Debug)]
struct BarState {
    segments: Vec<Segment>,

    min_value: i32,
    max_value: i32,
    value: i32,

    border: Thickness,
    border_color: Color,
    border_brush: Brush,
    background_color: Color,
    background_brush: Brush,

    /// Size of the element as of the last measure pass.
    actual: Size,
    fill_width: i32,
    fill_height: i32,
    cutoff: i32,
}

impl BarState {
    /// Recompute fill size and segment geometry, then the cutoff.
    fn create_fills(&mut self) {
        self.fill_width = self
            .actual
            .width
            .saturating_sub(self.border.left)
            .saturating_sub(self.border.right)
            .max(0);
        self.fill_height = self
            .actual
            .height
            .saturating_sub(self.border.top)
            .saturating_sub(self.border.bottom)
            .max(0);

        let mut start_x = self.border.left;
        let mut available = self.fill_width;
        for segment in &mut self.segments {
            segment.layout(
                start_x,
                self.fill_width,
                available,
                self.border.top,
                self.fill_height,
            );
            available -= segment.width();
            start_x += segment.width();
        }

        debug!(
            fill_width = self.fill_width,
            fill_height = self.fill_height,
            segments = self.segments.len(),
            "fills recomputed"
        );

        self.update_cutoff();
    }

    fn update_cutoff(&mut self) {
        let value = f64::from(self.value) - f64::from(self.min_value);
        let range = f64::from(self.max_value) - f64::from(self.min_value);
        let filled = if value != 0.0 && range != 0.0 {
            (value / range * f64::from(self.fill_width)).round_ties_even() as i32
        } else {
            0
        };
        self.cutoff = filled.saturating_add(self.border.right);
    }
}

/// The segmented gradient progress bar control.
#[derive(Debug)]
pub struct ProgressBarLayout {
    state: Mutex<BarState>,
}

impl Default for ProgressBarLayout {
    /// Yellow background with a dark-green → green → red traffic-light fill
    /// weighted 3:10:2.
    fn default() -> Self {
        Self::new(Color::YELLOW, default_segments())
    }
}

/// The three segments of the default bar.
pub fn default_segments() -> Vec<Segment> {
    vec![
        Segment::with_valid_weight(3.0 / 15.0, Color::DARK_GREEN, Color::LIME),
        Segment::with_valid_weight(10.0 / 15.0, Color::LIME, Color::LIME),
        Segment::with_valid_weight(2.0 / 15.0, Color::LIME, Color::RED),
    ]
}

impl ProgressBarLayout {
    /// A bar painting `segments` left to right over `background`.
    pub fn new(background: Color, segments: Vec<Segment>) -> Self {
        let layout = Self {
            state: Mutex::new(BarState {
                segments: Vec::new(),
                min_value: DEFAULT_MIN_VALUE,
                max_value: DEFAULT_MAX_VALUE,
                value: DEFAULT_VALUE,
                border: Thickness::default(),
                border_color: Color::BLACK,
                border_brush: Brush::Solid(Color::BLACK),
                background_color: background,
                background_brush: Brush::Solid(background),
                actual: Size::default(),
                fill_width: 0,
                fill_height: 0,
                cutoff: 0,
            }),
        };
        layout.set_segments(segments);
        layout
    }

    /// Replace the whole segment list.
    ///
    /// Each segment's scale becomes `1 / sum(weights)` so widths add up to
    /// the fill width whatever the absolute weights are. An empty list
    /// leaves only the background.
    pub fn set_segments(&self, mut segments: Vec<Segment>) {
        // Sum relative to the heaviest weight so huge weights cannot
        // overflow the total to infinity.
        let max_weight = segments.iter().map(Segment::weight).fold(0.0, f64::max);
        if max_weight > 0.0 {
            let relative_total: f64 = segments.iter().map(|s| s.weight() / max_weight).sum();
            let scale = (1.0 / relative_total) / max_weight;
            for segment in &mut segments {
                segment.set_scale(scale);
            }
        }
        debug!(count = segments.len(), max_weight, "segments replaced");

        let mut state = self.state.lock();
        state.segments = segments;
        state.create_fills();
    }

    /// Snapshot of the segments with their current geometry.
    pub fn segments(&self) -> Vec<Segment> {
        self.state.lock().segments.clone()
    }

    pub fn min_value(&self) -> i32 {
        self.state.lock().min_value
    }

    /// Set the lower bound. Raises `max_value` and `value` if they fall below it.
    pub fn set_min_value(&self, min_value: i32) {
        let mut state = self.state.lock();
        if state.min_value == min_value {
            return;
        }
        state.min_value = min_value;
        if state.min_value > state.max_value {
            state.max_value = state.min_value;
        }
        if state.value < state.min_value {
            state.value = state.min_value;
        }
        state.update_cutoff();
    }

    pub fn max_value(&self) -> i32 {
        self.state.lock().max_value
    }

    /// Set the upper bound. Lowers `min_value` and `value` if they exceed it.
    pub fn set_max_value(&self, max_value: i32) {
        let mut state = self.state.lock();
        if state.max_value == max_value {
            return;
        }
        state.max_value = max_value;
        if state.min_value > state.max_value {
            state.min_value = state.max_value;
        }
        if state.value > state.max_value {
            state.value = state.max_value;
        }
        state.update_cutoff();
    }

    pub fn value(&self) -> i32 {
        self.state.lock().value
    }

    /// Set the current value, clamped into `[min_value, max_value]`.
    pub fn set_value(&self, value: i32) {
        let mut state = self.state.lock();
        if state.value == value {
            return;
        }
        state.value = value.clamp(state.min_value, state.max_value);
        state.update_cutoff();
    }

    pub fn border_color(&self) -> Color {
        self.state.lock().border_color
    }

    pub fn set_border_color(&self, color: Color) {
        let mut state = self.state.lock();
        state.border_color = color;
        state.border_brush = Brush::Solid(color);
    }

    pub fn background_color(&self) -> Color {
        self.state.lock().background_color
    }

    pub fn set_background_color(&self, color: Color) {
        let mut state = self.state.lock();
        state.background_color = color;
        state.background_brush = Brush::Solid(color);
    }

    pub fn border_thickness(&self) -> Thickness {
        self.state.lock().border
    }

    /// Set all four border sides.
    ///
    /// Fails with [`LayoutError::InvalidArgument`] if any side is negative,
    /// leaving the previous thickness in place.
    pub fn set_border_thickness(&self, left: i32, top: i32, right: i32, bottom: i32) -> Result<()> {
        let border = Thickness::new(left, top, right, bottom)
            .validate()
            .inspect_err(|_| warn!(left, top, right, bottom, "rejected border thickness"))?;

        let mut state = self.state.lock();
        state.border = border;
        state.create_fills();
        Ok(())
    }

    /// Set the same thickness on every side.
    pub fn set_uniform_border_thickness(&self, length: i32) -> Result<()> {
        self.set_border_thickness(length, length, length, length)
    }

    /// Resize pass: recompute fill size, segment spans and the cutoff for
    /// an element of `width` × `height` pixels.
    pub fn on_resize(&self, width: i32, height: i32) {
        let mut state = self.state.lock();
        state.actual = Size::new(width, height);
        state.create_fills();
    }

    /// Pixel x-coordinate (offset by the right border) up to which the bar
    /// is filled.
    pub fn cutoff(&self) -> i32 {
        self.state.lock().cutoff
    }

    /// Fill area size: element size minus borders, floored at zero.
    pub fn fill_size(&self) -> Size {
        let state = self.state.lock();
        Size::new(state.fill_width, state.fill_height)
    }

    /// Element size recorded by the last measure/resize pass.
    pub fn actual_size(&self) -> Size {
        self.state.lock().actual
    }

    /// Paint the bar: borders (left, right, top, bottom), then the
    /// segments up to the cutoff, then the unfilled remainder.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let (size, border, border_brush) = {
            let state = self.state.lock();
            (state.actual, state.border, state.border_brush.clone())
        };

        // Later sides overdraw earlier ones at the corners.
        if border.left > 0 {
            canvas.fill_rect(Rect::new(0, 0, border.left, size.height), &border_brush);
        }
        if border.right > 0 {
            canvas.fill_rect(
                Rect::new(size.width - border.right, 0, border.right, size.height),
                &border_brush,
            );
        }
        if border.top > 0 {
            canvas.fill_rect(Rect::new(0, 0, size.width, border.top), &border_brush);
        }
        if border.bottom > 0 {
            canvas.fill_rect(
                Rect::new(0, size.height - border.bottom, size.width, border.bottom),
                &border_brush,
            );
        }

        let state = self.state.lock();
        if state.cutoff < 1 || state.segments.is_empty() {
            canvas.fill_rect(
                Rect::new(
                    state.border.left,
                    state.border.top,
                    state.fill_width,
                    state.fill_height,
                ),
                &state.background_brush,
            );
            return;
        }

        for segment in &state.segments {
            segment.paint(canvas);
            if state.cutoff <= segment.end_x() {
                break;
            }
        }

        if state.cutoff == state.fill_width + state.border.right {
            return;
        }
        canvas.fill_rect(
            Rect::new(
                state.cutoff,
                state.border.top,
                state.actual.width - state.cutoff - state.border.right,
                state.fill_height,
            ),
            &state.background_brush,
        );
    }
}

impl Element for ProgressBarLayout {
    /// The bar takes whatever it is offered, floored at zero.
    fn measure(&self, available: Size) -> Size {
        let desired = available.non_negative();
        self.on_resize(desired.width, desired.height);
        desired
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        ProgressBarLayout::render(self, canvas);
    }
}
