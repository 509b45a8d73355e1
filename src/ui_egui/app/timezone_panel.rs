use egui::RichText;

use super::{FrameTime, TimeToolsApp};
use crate::models::timezone::{zone_catalog, CardId};

impl TimeToolsApp {
    pub(super) fn render_timezone_section(&mut self, ui: &mut egui::Ui, time: FrameTime) {
        let selected_text = self
            .timezone_ui
            .selected_zone
            .and_then(|zone_id| zone_catalog().iter().find(|o| o.zone_id == zone_id))
            .map(|option| option.label)
            .unwrap_or("Add a timezone…");

        egui::ComboBox::from_id_source("timezone_picker")
            .selected_text(selected_text)
            .width(260.0)
            .show_ui(ui, |ui| {
                for option in zone_catalog() {
                    ui.selectable_value(
                        &mut self.timezone_ui.selected_zone,
                        Some(option.zone_id),
                        option.label,
                    );
                }
            });

        // Picking a zone adds it straight away and clears the picker
        if let Some(zone_id) = self.timezone_ui.selected_zone.take() {
            if let Some(option) = zone_catalog().iter().find(|o| o.zone_id == zone_id) {
                self.board
                    .add_card(option.zone_id, option.label, time.now_utc, &self.formatter);
            }
        }

        ui.add_space(6.0);

        let mut removed: Vec<CardId> = Vec::new();
        ui.horizontal_wrapped(|ui| {
            for card in self.board.cards() {
                egui::Frame::group(ui.style())
                    .fill(self.active_theme.card_background)
                    .show(ui, |ui| {
                        ui.set_min_width(150.0);
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&card.label).strong());
                                if ui
                                    .small_button("×")
                                    .on_hover_text("Remove this clock")
                                    .clicked()
                                {
                                    removed.push(card.id);
                                }
                            });
                            ui.label(RichText::new(&card.time_text).monospace().size(26.0));
                            ui.label(
                                RichText::new(&card.date_text)
                                    .color(self.active_theme.text_secondary),
                            );
                            if let Some(error) = &card.last_error {
                                ui.label(
                                    RichText::new("Unavailable")
                                        .small()
                                        .color(self.active_theme.danger),
                                )
                                .on_hover_text(error.as_str());
                            }
                        });
                    });
            }
        });

        for id in removed {
            self.board.remove_card(id);
        }
    }
}
