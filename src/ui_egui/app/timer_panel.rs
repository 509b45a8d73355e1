use egui::{Color32, RichText};

use super::{FrameTime, TimeToolsApp};
use crate::services::timer::{custom_seconds, TimerStatus, COMPLETION_MESSAGE, PRESETS};

impl TimeToolsApp {
    pub(super) fn render_timer_section(&mut self, ui: &mut egui::Ui, time: FrameTime) {
        let running = self.timer.is_running();
        let display_color = if running {
            self.active_theme.active
        } else {
            self.active_theme.text_primary
        };
        ui.label(
            RichText::new(self.timer.display())
                .monospace()
                .size(44.0)
                .color(display_color),
        );

        ui.horizontal_wrapped(|ui| {
            for preset in PRESETS {
                if ui
                    .add_enabled(!running, egui::Button::new(preset.label()))
                    .clicked()
                {
                    self.timer.set_remaining(preset.seconds());
                }
            }
        });

        ui.horizontal(|ui| {
            let minutes = ui.add_enabled(
                !running,
                egui::TextEdit::singleline(&mut self.timer_ui.custom_minutes)
                    .hint_text("min")
                    .desired_width(50.0),
            );
            ui.label(":");
            let seconds = ui.add_enabled(
                !running,
                egui::TextEdit::singleline(&mut self.timer_ui.custom_seconds)
                    .hint_text("sec")
                    .desired_width(50.0),
            );
            if minutes.changed() || seconds.changed() {
                let total = custom_seconds(
                    &self.timer_ui.custom_minutes,
                    &self.timer_ui.custom_seconds,
                );
                self.timer.set_remaining(total);
            }
        });

        ui.horizontal(|ui| {
            let can_start = !running && self.timer.remaining_ms() > 0;
            if ui.add_enabled(can_start, egui::Button::new("Start")).clicked() {
                self.timer.start(time.now);
            }
            if ui.add_enabled(running, egui::Button::new("Pause")).clicked() {
                self.timer.pause();
            }
            if ui.button("Reset").clicked() {
                self.timer.reset();
            }

            if self.timer.status() == TimerStatus::Paused {
                ui.label(RichText::new("Paused").color(self.active_theme.text_secondary));
            }
        });
    }

    pub(super) fn render_completion_alert(&mut self, ctx: &egui::Context) {
        if !self.timer_ui.show_completion_alert {
            return;
        }

        egui::Window::new("Timer")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(240.0);
                ui.label(
                    RichText::new(format!("🔔 {}", COMPLETION_MESSAGE))
                        .size(18.0)
                        .color(Color32::from_rgb(255, 170, 0)),
                );
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.timer_ui.show_completion_alert = false;
                }
            });
    }
}
