/// Main `eframe::App` implementation for the GradBar demo.
///
/// Top toolbar (preset picker, theme toggle), central panel with the bar
/// and its range/value/border controls, a collapsible JSON editor, and a
/// bottom status bar with the derived layout numbers.
use crate::state::DemoState;
use crate::widget::GradientProgressBar;

/// The GradBar demo application.
pub struct GradBarApp {
    state: DemoState,
}

impl GradBarApp {
    /// Create the application from pre-built state.
    ///
    /// Build the state with [`DemoState::build()`] *before*
    /// `eframe::run_native` so a broken config file is reported before the
    /// window opens.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: DemoState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state }
    }
}

impl eframe::App for GradBarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Central panel ─────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            let bar = self.state.bar.clone();
            ui.add(GradientProgressBar::new(&bar).desired_size(egui::vec2(ui.available_width(), 40.0)));
            ui.add_space(12.0);

            controls(ui, &mut self.state);

            ui.add_space(12.0);
            ui.separator();
            json_editor(ui, &mut self.state);
        });
    }
}

fn toolbar(ui: &mut egui::Ui, state: &mut DemoState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("GradBar").size(16.0).strong());
        ui.separator();

        let mut selected = state.active_preset;
        egui::ComboBox::from_label("Preset")
            .selected_text(state.active().name.clone())
            .show_ui(ui, |ui| {
                for (i, preset) in state.presets.iter().enumerate() {
                    ui.selectable_value(&mut selected, i, preset.name.as_str());
                }
            });
        if selected != state.active_preset {
            state.select_preset(selected);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if state.dark_mode { "☀ Light" } else { "🌙 Dark" };
            if ui.button(label).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}

fn controls(ui: &mut egui::Ui, state: &mut DemoState) {
    let bar = state.bar.clone();

    egui::Grid::new("bar_controls")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Minimum");
            let mut min = bar.min_value();
            if ui.add(egui::Slider::new(&mut min, -200..=200)).changed() {
                bar.set_min_value(min);
            }
            ui.end_row();

            ui.label("Maximum");
            let mut max = bar.max_value();
            if ui.add(egui::Slider::new(&mut max, -200..=200)).changed() {
                bar.set_max_value(max);
            }
            ui.end_row();

            ui.label("Value");
            ui.horizontal(|ui| {
                let mut value = bar.value();
                let range = bar.min_value()..=bar.max_value();
                if ui.add(egui::Slider::new(&mut value, range)).changed() {
                    bar.set_value(value);
                }
                if ui.small_button("−10").clicked() {
                    state.step_value(-10);
                }
                if ui.small_button("+10").clicked() {
                    state.step_value(10);
                }
            });
            ui.end_row();

            ui.label("Border");
            let mut border = state.border;
            if ui.add(egui::Slider::new(&mut border, 0..=12)).changed() {
                state.set_border(border);
            }
            ui.end_row();
        });
}

fn json_editor(ui: &mut egui::Ui, state: &mut DemoState) {
    egui::CollapsingHeader::new("Bar description (JSON)")
        .default_open(false)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut state.json_buffer)
                    .code_editor()
                    .desired_rows(14)
                    .desired_width(f32::INFINITY),
            );
            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    state.apply_json();
                }
                if ui.button("Reset").clicked() {
                    state.select_preset(state.active_preset);
                }
            });
            if let Some(err) = &state.last_error {
                ui.colored_label(egui::Color32::from_rgb(0xf3, 0x8b, 0xa8), err);
            }
        });
}

fn status_bar(ui: &mut egui::Ui, state: &DemoState) {
    let bar = &state.bar;
    let fill = bar.fill_size();
    let weak = ui.visuals().weak_text_color();
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "value {} in [{}, {}]",
                bar.value(),
                bar.min_value(),
                bar.max_value()
            ))
            .size(12.0),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("cutoff {} px", bar.cutoff()))
                .size(12.0)
                .color(weak),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("fill {} × {}", fill.width, fill.height))
                .size(12.0)
                .color(weak),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("{} segments", bar.segments().len()))
                .size(12.0)
                .color(weak),
        );
    });
}
