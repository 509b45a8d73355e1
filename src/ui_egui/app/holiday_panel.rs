use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use chrono::{Datelike, Local};
use egui::RichText;

use super::{FrameTime, TimeToolsApp};
use crate::services::holiday::{fallback_lookup, COUNTRIES};

impl TimeToolsApp {
    pub(super) fn render_holiday_section(&mut self, ui: &mut egui::Ui, time: FrameTime) {
        let previous = self.holiday_ui.selected_country.clone();
        let selected_text = COUNTRIES
            .iter()
            .find(|(code, _)| *code == previous)
            .map(|(_, name)| *name)
            .unwrap_or(previous.as_str())
            .to_string();

        egui::ComboBox::from_id_source("holiday_country")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for (code, name) in COUNTRIES {
                    ui.selectable_value(
                        &mut self.holiday_ui.selected_country,
                        code.to_string(),
                        *name,
                    );
                }
            });

        if self.holiday_ui.selected_country != previous {
            let year = time.now_utc.with_timezone(&Local).year();
            let country = self.holiday_ui.selected_country.clone();
            self.start_holiday_load(&country, year);
        }

        ui.add_space(6.0);

        if self.holiday_ui.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading holidays...");
            });
            return;
        }

        let Some(lookup) = &self.holiday_ui.current else {
            return;
        };

        if let Some(headline) = lookup.headline() {
            ui.label(RichText::new(headline).color(self.active_theme.text_secondary));
        }

        egui::Grid::new("holiday_list")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for entry in &lookup.entries {
                    ui.label(entry.name.as_str());
                    ui.label(RichText::new(entry.display_date()).monospace());
                    ui.end_row();
                }
            });
    }

    /// Fetches holidays on a worker thread so the window keeps painting.
    /// A newer request replaces the pending one; its result is dropped.
    pub(super) fn start_holiday_load(&mut self, country: &str, year: i32) {
        let (tx, rx) = mpsc::channel();
        let country = country.to_string();
        let service = self.holiday_ui.service.clone();

        thread::spawn(move || {
            let lookup = match service {
                Some(service) => service.lookup(&country, year),
                None => fallback_lookup(&country, "holiday lookup client unavailable"),
            };
            // The receiver is gone when a newer selection replaced this one
            let _ = tx.send(lookup);
        });

        self.holiday_ui.pending = Some(rx);
    }

    pub(super) fn poll_holiday_result(&mut self) {
        let Some(rx) = &self.holiday_ui.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(lookup) => {
                self.holiday_ui.current = Some(lookup);
                self.holiday_ui.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::warn!("Holiday lookup worker exited without a result");
                let country = self.holiday_ui.selected_country.clone();
                self.holiday_ui.current = Some(fallback_lookup(&country, "lookup worker failed"));
                self.holiday_ui.pending = None;
            }
        }
    }
}
