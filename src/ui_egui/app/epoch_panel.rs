use chrono::Local;
use egui::RichText;

use super::{FrameTime, TimeToolsApp};
use crate::services::epoch::{
    convert_epoch, current_epoch_seconds, should_auto_convert, INVALID_TIMESTAMP,
};

impl TimeToolsApp {
    pub(super) fn render_epoch_section(&mut self, ui: &mut egui::Ui, time: FrameTime) {
        ui.horizontal(|ui| {
            ui.label("Current epoch:");
            ui.label(
                RichText::new(current_epoch_seconds(time.now_utc).to_string()).monospace(),
            );
        });

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.epoch_ui.input)
                    .hint_text("Unix timestamp (s or ms)")
                    .desired_width(220.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button("Convert").clicked() || submitted {
                self.convert_epoch_input();
            } else if response.changed() && should_auto_convert(&self.epoch_ui.input) {
                self.convert_epoch_input();
            }
        });

        if let Some(output) = &self.epoch_ui.output {
            ui.label(RichText::new(output).monospace());
        }
    }

    fn convert_epoch_input(&mut self) {
        let converted = match self.epoch_ui.zone {
            Some(zone) => convert_epoch(&self.epoch_ui.input, &zone),
            // Without a named zone the offset is shown instead of an abbreviation
            None => convert_epoch(&self.epoch_ui.input, &Local),
        };
        let output = match converted {
            Ok(text) => text,
            Err(err) => {
                log::debug!("Epoch conversion failed: {}", err);
                INVALID_TIMESTAMP.to_string()
            }
        };
        self.epoch_ui.output = Some(output);
    }
}
