//! GradBar — segmented gradient progress bar demo.
//!
//! Thin binary entry point. All logic lives in the `gradbar-core`
//! and `gradbar-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("GradBar starting");

    let icon = gradbar_gui::icon::generate_icon(64);

    // Build state (presets, optional config file) before the window opens.
    let state = gradbar_gui::DemoState::build();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("GradBar -- Segmented Gradient Progress Bar")
            .with_inner_size([720.0, 480.0])
            .with_min_inner_size([420.0, 300.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "GradBar",
        options,
        Box::new(|cc| Ok(Box::new(gradbar_gui::GradBarApp::with_state(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
