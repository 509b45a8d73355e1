use egui::RichText;

use super::{FrameTime, TimeToolsApp};
use crate::services::stopwatch::StopwatchStatus;

impl TimeToolsApp {
    pub(super) fn render_stopwatch_section(&mut self, ui: &mut egui::Ui, time: FrameTime) {
        ui.label(RichText::new(self.stopwatch.display()).monospace().size(44.0));

        let running = self.stopwatch.is_running();
        ui.horizontal(|ui| {
            let toggle_label = if running { "Pause" } else { "Start" };
            if ui.button(toggle_label).clicked() {
                if running {
                    self.stopwatch.pause(time.now);
                } else {
                    self.stopwatch.start(time.now);
                }
            }
            if ui.add_enabled(running, egui::Button::new("Lap")).clicked() {
                self.stopwatch.lap();
            }
            let can_reset = self.stopwatch.status() != StopwatchStatus::Idle;
            if ui.add_enabled(can_reset, egui::Button::new("Reset")).clicked() {
                self.stopwatch.reset();
            }
        });

        if self.stopwatch.lap_count() == 0 {
            return;
        }

        ui.add_space(6.0);
        egui::ScrollArea::vertical()
            .id_source("lap_times")
            .max_height(160.0)
            .show(ui, |ui| {
                for lap in self.stopwatch.laps() {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Lap {}", lap.number))
                                .color(self.active_theme.text_secondary),
                        );
                        ui.label(RichText::new(lap.display()).monospace());
                    });
                }
            });
    }
}
