/// Demo application state.
///
/// Holds the shared bar, the preset list and the JSON editor buffer. All
/// transitions live here rather than in `app.rs` so they can be exercised
/// without opening a window.
use anyhow::Context;
use gradbar_core::config::SegmentConfig;
use gradbar_core::{BarConfig, Color, ProgressBarLayout, Thickness};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Environment variable naming an extra JSON bar description to load.
pub const CONFIG_ENV_VAR: &str = "GRADBAR_CONFIG";

/// A named bar description selectable from the toolbar.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: String,
    pub config: BarConfig,
}

impl Preset {
    pub fn new(name: impl Into<String>, config: BarConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

fn segment(weight: f64, start: Color, end: Option<Color>) -> SegmentConfig {
    SegmentConfig { weight, start, end }
}

/// The presets shipped with the demo.
pub fn builtin_presets() -> Vec<Preset> {
    let blue = Color::from_rgb(0x89, 0xb4, 0xfa);
    let green = Color::from_rgb(0xa6, 0xe3, 0xa1);
    let yellow = Color::from_rgb(0xf9, 0xe2, 0xaf);
    let peach = Color::from_rgb(0xfa, 0xb3, 0x87);
    let pink = Color::from_rgb(0xf3, 0x8b, 0xa8);
    let mauve = Color::from_rgb(0xcb, 0xa6, 0xf7);
    let surface = Color::from_rgb(0x2a, 0x2a, 0x3c);

    vec![
        Preset::new("Traffic light", BarConfig::default()),
        Preset::new(
            "Bordered",
            BarConfig {
                border: Thickness::uniform(2),
                border_color: Color::from_rgb(0x30, 0x30, 0x30),
                ..BarConfig::default()
            },
        ),
        Preset::new(
            "Pastel",
            BarConfig {
                background: surface,
                value: 70,
                segments: vec![
                    segment(1.0, blue, Some(green)),
                    segment(1.0, green, Some(yellow)),
                    segment(1.0, yellow, Some(peach)),
                    segment(1.0, peach, Some(pink)),
                    segment(1.0, pink, Some(mauve)),
                ],
                ..BarConfig::default()
            },
        ),
        Preset::new(
            "Single colour",
            BarConfig {
                background: surface,
                min_value: -50,
                max_value: 50,
                value: 0,
                segments: vec![segment(1.0, blue, None)],
                ..BarConfig::default()
            },
        ),
    ]
}

/// Read and parse a JSON bar description from disk.
pub fn load_config_file(path: &Path) -> anyhow::Result<BarConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = BarConfig::from_json(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

/// Load the file at `path` as a preset named "Custom". The description
/// must also build, so a file with a bad border or weight is rejected here
/// rather than becoming the active preset.
pub fn load_custom_preset(path: &Path) -> anyhow::Result<Preset> {
    let config = load_config_file(path)?;
    config
        .build()
        .with_context(|| format!("invalid bar description in {}", path.display()))?;
    Ok(Preset::new("Custom", config))
}

/// All demo state.
pub struct DemoState {
    pub presets: Vec<Preset>,
    pub active_preset: usize,
    /// The live bar, shared with the widget.
    pub bar: Arc<ProgressBarLayout>,
    /// Uniform border slider position.
    pub border: i32,
    /// Text of the JSON editor panel.
    pub json_buffer: String,
    /// Last rejected edit, shown under the editor.
    pub last_error: Option<String>,
    pub dark_mode: bool,
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoState {
    /// State with the built-in presets, the first one active.
    pub fn new() -> Self {
        Self::with_presets(builtin_presets())
    }

    /// State over an explicit preset list, starting on the first preset
    /// that builds. If none does (or the list is empty) the default bar is
    /// appended and selected.
    pub fn with_presets(presets: Vec<Preset>) -> Self {
        let mut state = Self {
            presets,
            active_preset: 0,
            bar: Arc::new(ProgressBarLayout::default()),
            border: 0,
            json_buffer: String::new(),
            last_error: None,
            dark_mode: true,
        };
        if !(0..state.presets.len()).any(|index| state.select_preset(index)) {
            state
                .presets
                .push(Preset::new("Default", BarConfig::default()));
            let fallback = state.presets.len() - 1;
            state.select_preset(fallback);
        }
        state
    }

    /// Built-in presets plus the file named by [`CONFIG_ENV_VAR`], if any.
    /// Call this before `eframe::run_native`.
    pub fn build() -> Self {
        let mut presets = builtin_presets();
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            match load_custom_preset(Path::new(&path)) {
                Ok(preset) => {
                    info!("Loaded bar description from {}", path);
                    presets.insert(0, preset);
                }
                Err(e) => warn!("Ignoring {}: {:#}", CONFIG_ENV_VAR, e),
            }
        }
        Self::with_presets(presets)
    }

    pub fn active(&self) -> &Preset {
        &self.presets[self.active_preset]
    }

    /// Switch to preset `index`. Returns `false` (and records the error) if
    /// the index is out of range or the preset does not build.
    pub fn select_preset(&mut self, index: usize) -> bool {
        let Some(preset) = self.presets.get(index) else {
            self.last_error = Some(format!("no preset #{index}"));
            return false;
        };
        match preset.config.build() {
            Ok(bar) => {
                info!("Preset '{}' selected", preset.name);
                self.border = preset.config.border.left;
                self.json_buffer = preset.config.to_json().unwrap_or_default();
                self.bar = Arc::new(bar);
                self.active_preset = index;
                self.last_error = None;
                true
            }
            Err(e) => {
                warn!("Preset '{}' rejected: {}", preset.name, e);
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// Parse the editor buffer and, if it builds, make it the active
    /// preset's description. The bar is left untouched on failure.
    pub fn apply_json(&mut self) -> bool {
        let result = BarConfig::from_json(&self.json_buffer)
            .and_then(|config| config.build().map(|bar| (config, bar)));
        match result {
            Ok((config, bar)) => {
                self.border = config.border.left;
                self.bar = Arc::new(bar);
                self.presets[self.active_preset].config = config;
                self.last_error = None;
                true
            }
            Err(e) => {
                warn!("Rejected bar description: {}", e);
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// Apply the border slider to every side.
    pub fn set_border(&mut self, length: i32) {
        match self.bar.set_uniform_border_thickness(length) {
            Ok(()) => {
                self.border = length;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    /// Move the value by `delta`; the bar clamps it into range.
    pub fn step_value(&mut self, delta: i32) {
        let next = self.bar.value().saturating_add(delta);
        self.bar.set_value(next);
    }
}
