/// End-to-end tests for `DemoState` — the demo application state machine.
///
/// These exercise preset switching, JSON editing, border and value
/// controls against the real layout engine without opening an egui window.
use gradbar_core::{BarConfig, Color, RecordingCanvas, Thickness};
use gradbar_gui::state::{builtin_presets, load_config_file, load_custom_preset, Preset};
use gradbar_gui::DemoState;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Write `json` to `bar.json` inside `tmp` and return its path.
fn write_config(tmp: &TempDir, json: &str) -> PathBuf {
    let path = tmp.path().join("bar.json");
    fs::write(&path, json).unwrap();
    path
}

// ── Presets ──────────────────────────────────────────────────────────────────

#[test]
fn starts_on_first_preset() {
    let state = DemoState::new();
    assert_eq!(state.active_preset, 0);
    assert_eq!(state.presets.len(), builtin_presets().len());
    assert_eq!(state.bar.value(), 50);
    assert!(state.last_error.is_none());
    assert!(state.json_buffer.contains("segments"));
}

#[test]
fn selecting_preset_rebuilds_bar() {
    let mut state = DemoState::new();
    let index = state
        .presets
        .iter()
        .position(|p| p.name == "Single colour")
        .unwrap();

    assert!(state.select_preset(index));
    assert_eq!(state.active_preset, index);
    assert_eq!(state.bar.min_value(), -50);
    assert_eq!(state.bar.max_value(), 50);
    assert_eq!(state.bar.segments().len(), 1);
}

#[test]
fn bordered_preset_sets_border_slider() {
    let mut state = DemoState::new();
    let index = state
        .presets
        .iter()
        .position(|p| p.name == "Bordered")
        .unwrap();
    state.select_preset(index);
    assert_eq!(state.border, 2);
    assert_eq!(state.bar.border_thickness(), Thickness::uniform(2));
}

#[test]
fn out_of_range_preset_is_rejected() {
    let mut state = DemoState::new();
    assert!(!state.select_preset(99));
    assert_eq!(state.active_preset, 0);
    assert!(state.last_error.is_some());
}

#[test]
fn broken_preset_keeps_previous_bar() {
    let broken = Preset::new(
        "Broken",
        BarConfig {
            border: Thickness::new(-1, 0, 0, 0),
            ..BarConfig::default()
        },
    );
    let mut state = DemoState::with_presets(vec![Preset::new("Ok", BarConfig::default()), broken]);
    let before = state.bar.clone();

    assert!(!state.select_preset(1));
    assert_eq!(state.active_preset, 0);
    assert!(std::sync::Arc::ptr_eq(&before, &state.bar));
    assert!(state.last_error.as_deref().unwrap_or("").contains("-1,0,0,0"));
}

/// A preset list whose first entry does not build starts on the next one
/// with the editor filled in, not on the broken entry over a default bar.
#[test]
fn unbuildable_first_preset_is_skipped() {
    let custom = Preset::new(
        "Custom",
        BarConfig {
            border: Thickness::new(-1, 0, 0, 0),
            ..BarConfig::default()
        },
    );
    let mut presets = vec![custom];
    presets.extend(builtin_presets());
    let state = DemoState::with_presets(presets);

    assert_eq!(state.active_preset, 1);
    assert_eq!(state.active().name, "Traffic light");
    assert!(state.json_buffer.contains("segments"));
    assert!(state.last_error.is_none());
}

// ── JSON editor ──────────────────────────────────────────────────────────────

#[test]
fn applying_json_replaces_bar_and_preset() {
    let mut state = DemoState::new();
    state.json_buffer = r##"{
        "background": "#000000",
        "value": 10,
        "segments": [ { "weight": 1, "start": "#FF0000" } ]
    }"##
    .to_string();

    assert!(state.apply_json());
    assert_eq!(state.bar.value(), 10);
    assert_eq!(state.bar.background_color(), Color::BLACK);
    assert_eq!(state.active().config.segments.len(), 1);
}

#[test]
fn invalid_json_is_reported_and_ignored() {
    let mut state = DemoState::new();
    state.bar.set_value(77);
    state.json_buffer = "{ not json".to_string();

    assert!(!state.apply_json());
    assert_eq!(state.bar.value(), 77);
    assert!(state.last_error.is_some());
}

#[test]
fn zero_weight_in_json_is_reported() {
    let mut state = DemoState::new();
    state.json_buffer = r##"{ "segments": [ { "weight": 0, "start": "#FF0000" } ] }"##.to_string();
    assert!(!state.apply_json());
    assert!(state.last_error.as_deref().unwrap_or("").contains("out of range"));
}

// ── Controls ─────────────────────────────────────────────────────────────────

#[test]
fn border_slider_applies_uniform_border() {
    let mut state = DemoState::new();
    state.bar.on_resize(100, 20);
    state.set_border(3);
    assert_eq!(state.border, 3);
    assert_eq!(state.bar.fill_size().width, 94);
}

#[test]
fn negative_border_keeps_slider_value() {
    let mut state = DemoState::new();
    state.set_border(2);
    state.set_border(-4);
    assert_eq!(state.border, 2);
    assert_eq!(state.bar.border_thickness(), Thickness::uniform(2));
    assert!(state.last_error.is_some());
}

#[test]
fn step_value_clamps_to_range() {
    let mut state = DemoState::new();
    for _ in 0..20 {
        state.step_value(10);
    }
    assert_eq!(state.bar.value(), 100);
    state.step_value(i32::MIN);
    assert_eq!(state.bar.value(), 0);
}

#[test]
fn shared_bar_renders_after_state_changes() {
    let mut state = DemoState::new();
    state.bar.on_resize(150, 10);
    state.step_value(50);

    let mut canvas = RecordingCanvas::new();
    state.bar.render(&mut canvas);
    // Full bar: three segments and no trailing background.
    assert_eq!(canvas.len(), 3);
}

// ── Config file loading ──────────────────────────────────────────────────────

#[test]
fn config_file_loads() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        &tmp,
        r##"{ "value": 5, "border": { "left": 1, "top": 1, "right": 1, "bottom": 1 } }"##,
    );

    let cfg = load_config_file(&path).unwrap();
    assert_eq!(cfg.value, 5);
    assert_eq!(cfg.border, Thickness::uniform(1));

    let preset = load_custom_preset(&path).unwrap();
    assert_eq!(preset.name, "Custom");
    assert_eq!(preset.config.value, 5);
}

/// A file that parses but does not build is rejected before it can become
/// a preset.
#[test]
fn invalid_config_file_is_rejected() {
    let tmp = TempDir::new().unwrap();

    let path = write_config(&tmp, r##"{ "border": { "left": -1, "top": 0, "right": 0, "bottom": 0 } }"##);
    let err = load_custom_preset(&path).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("bar.json"), "{message}");
    assert!(message.contains("-1,0,0,0"), "{message}");

    let path = write_config(&tmp, r##"{ "segments": [ { "weight": 0, "start": "#FF0000" } ] }"##);
    assert!(load_custom_preset(&path).is_err());
}

#[test]
fn missing_config_file_names_path() {
    let err = load_config_file(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:#}").contains("here.json"));
}
