/// Serde description of a progress bar.
///
/// A `BarConfig` is a construction-time recipe: colours, border, range and
/// the ordered segment list. [`BarConfig::build`] validates it and produces
/// a live [`ProgressBarLayout`]. Colours are `#RRGGBB` / `#AARRGGBB` strings.
///
/// ```json
/// {
///   "background": "#FFFF00",
///   "border": { "left": 1, "top": 1, "right": 1, "bottom": 1 },
///   "segments": [
///     { "weight": 3, "start": "#006400", "end": "#00FF00" },
///     { "weight": 10, "start": "#00FF00" }
///   ]
/// }
/// ```
use crate::error::{LayoutError, Result};
use crate::layout::{
    ProgressBarLayout, Thickness, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_VALUE,
};
use crate::segment::Segment;
use crate::surface::Color;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One segment entry. `end` defaults to `start` (a flat fill).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentConfig {
    pub weight: f64,
    pub start: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Color>,
}

impl SegmentConfig {
    fn build(&self) -> Result<Segment> {
        Segment::new(self.weight, self.start, self.end.unwrap_or(self.start))
    }
}

/// Full bar description. Missing fields take the default bar's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub background: Color,
    pub border_color: Color,
    pub border: Thickness,
    pub min_value: i32,
    pub max_value: i32,
    pub value: i32,
    pub segments: Vec<SegmentConfig>,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            background: Color::YELLOW,
            border_color: Color::BLACK,
            border: Thickness::default(),
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            value: DEFAULT_VALUE,
            segments: vec![
                SegmentConfig {
                    weight: 3.0,
                    start: Color::DARK_GREEN,
                    end: Some(Color::LIME),
                },
                SegmentConfig {
                    weight: 10.0,
                    start: Color::LIME,
                    end: None,
                },
                SegmentConfig {
                    weight: 2.0,
                    start: Color::LIME,
                    end: Some(Color::RED),
                },
            ],
        }
    }
}

impl BarConfig {
    /// Parse a JSON description.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| LayoutError::Config(e.to_string()))
    }

    /// Pretty-printed JSON for display or export.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LayoutError::Config(e.to_string()))
    }

    /// Validate and build a layout.
    ///
    /// The range is applied max first, then min, then value, so a
    /// well-formed range is never clamped by the defaults on the way in.
    pub fn build(&self) -> Result<ProgressBarLayout> {
        let segments = self
            .segments
            .iter()
            .map(SegmentConfig::build)
            .collect::<Result<Vec<_>>>()?;

        let layout = ProgressBarLayout::new(self.background, segments);
        layout.set_border_color(self.border_color);
        let b = self.border;
        layout.set_border_thickness(b.left, b.top, b.right, b.bottom)?;
        layout.set_max_value(self.max_value);
        layout.set_min_value(self.min_value);
        layout.set_value(self.value);

        debug!(
            segments = self.segments.len(),
            min = layout.min_value(),
            max = layout.max_value(),
            value = layout.value(),
            "bar built from config"
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_default_bar() {
        let built = BarConfig::default().build().unwrap();
        let reference = ProgressBarLayout::default();
        built.on_resize(150, 10);
        reference.on_resize(150, 10);

        let a: Vec<_> = built.segments().iter().map(|s| s.rect()).collect();
        let b: Vec<_> = reference.segments().iter().map(|s| s.rect()).collect();
        assert_eq!(a, b);
        assert_eq!(built.cutoff(), reference.cutoff());
        assert_eq!(built.background_color(), reference.background_color());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg = BarConfig::from_json(r#"{ "value": 80 }"#).unwrap();
        assert_eq!(cfg.value, 80);
        assert_eq!(cfg.max_value, 100);
        assert_eq!(cfg.segments.len(), 3);
    }

    #[test]
    fn test_missing_end_means_solid() {
        let cfg = BarConfig::from_json(
            r##"{ "segments": [ { "weight": 1, "start": "#0000FF" } ] }"##,
        )
        .unwrap();
        let bar = cfg.build().unwrap();
        bar.on_resize(10, 4);
        assert!(bar.segments()[0].brush().is_solid());
    }

    #[test]
    fn test_bad_colour_is_config_error() {
        let err = BarConfig::from_json(r#"{ "background": "yellow" }"#).unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)), "{err:?}");
    }

    #[test]
    fn test_bad_weight_is_out_of_range() {
        let cfg = BarConfig::from_json(
            r##"{ "segments": [ { "weight": 0, "start": "#0000FF" } ] }"##,
        )
        .unwrap();
        assert_eq!(cfg.build().unwrap_err(), LayoutError::OutOfRange(0.0));
    }

    #[test]
    fn test_negative_border_is_invalid_argument() {
        let cfg = BarConfig {
            border: Thickness::new(0, -2, 0, 0),
            ..BarConfig::default()
        };
        assert!(matches!(
            cfg.build(),
            Err(LayoutError::InvalidArgument { top: -2, .. })
        ));
    }

    #[test]
    fn test_range_outside_defaults_is_kept() {
        let cfg = BarConfig {
            min_value: 200,
            max_value: 300,
            value: 250,
            ..BarConfig::default()
        };
        let bar = cfg.build().unwrap();
        assert_eq!((bar.min_value(), bar.max_value(), bar.value()), (200, 300, 250));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = BarConfig::default();
        let text = cfg.to_json().unwrap();
        assert!(text.contains("\"#006400\""));
        assert_eq!(BarConfig::from_json(&text).unwrap(), cfg);
    }
}
