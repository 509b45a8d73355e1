mod epoch_panel;
mod holiday_panel;
mod lifecycle;
mod state;
mod stopwatch_panel;
mod timer_panel;
mod timezone_panel;

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use self::state::{EpochPanelState, HolidayPanelState, TimerPanelState, TimezonePanelState};
use crate::models::settings::{Settings, Theme};
use crate::services::clock::Clock;
use crate::services::notification::NotificationService;
use crate::services::settings::SettingsService;
use crate::services::stopwatch::Stopwatch;
use crate::services::timer::CountdownTimer;
use crate::services::timezone::{ChronoTzFormatter, TimezoneBoard};
use crate::ui_egui::theme::AppTheme;

const MIN_ROOT_WIDTH: f32 = 420.0;
const MIN_ROOT_HEIGHT: f32 = 320.0;
/// Slowest repaint cadence; keeps the current-epoch label and board fresh
const IDLE_REPAINT: Duration = Duration::from_secs(1);

/// Instants read once per frame and shared by every widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameTime {
    pub now: Instant,
    pub now_utc: DateTime<Utc>,
}

pub struct TimeToolsApp {
    clock: Arc<dyn Clock>,
    settings: Settings,
    /// None when no writable config location exists
    settings_service: Option<SettingsService>,
    active_theme: AppTheme,
    notification_service: NotificationService,
    formatter: ChronoTzFormatter,
    /// Widgets, each owning its own schedule
    timer: CountdownTimer,
    stopwatch: Stopwatch,
    board: TimezoneBoard,
    /// Per-widget control state
    timer_ui: TimerPanelState,
    epoch_ui: EpochPanelState,
    timezone_ui: TimezonePanelState,
    holiday_ui: HolidayPanelState,
}

impl eframe::App for TimeToolsApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl TimeToolsApp {
    pub fn min_root_size() -> [f32; 2] {
        [MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]
    }

    fn frame_time(&self) -> FrameTime {
        FrameTime {
            now: self.clock.now(),
            now_utc: self.clock.utc_now(),
        }
    }

    /// Advances every widget's schedule to the current frame.
    fn drive_widgets(&mut self, ctx: &egui::Context, time: FrameTime) {
        let completions = self
            .timer
            .poll_and_notify(time.now, &self.notification_service);
        if !completions.is_empty() {
            self.timer_ui.show_completion_alert = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::RequestUserAttention(
                egui::UserAttentionType::Critical,
            ));
        }

        self.stopwatch.poll(time.now);

        if let Some(report) = self.board.poll(time.now, time.now_utc, &self.formatter) {
            if !report.failed.is_empty() {
                log::debug!(
                    "Timezone refresh: updated={}, failed={}",
                    report.updated.len(),
                    report.failed.len()
                );
            }
        }

        self.poll_holiday_result();
    }

    /// Schedules the next frame for whichever widget is due first.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let wait = [
            self.timer.time_until_tick(now),
            self.stopwatch.time_until_tick(now),
            self.board.time_until_refresh(now),
        ]
        .into_iter()
        .flatten()
        .fold(IDLE_REPAINT, Duration::min);

        let wait = if self.holiday_ui.is_loading() {
            wait.min(Duration::from_millis(100))
        } else {
            wait
        };
        ctx.request_repaint_after(wait);
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("⏱ TimeTools");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let showing = if self.active_theme.is_dark {
                        Theme::Dark
                    } else {
                        Theme::Light
                    };
                    let icon = showing.toggle_icon();
                    if ui
                        .button(icon)
                        .on_hover_text("Toggle light/dark theme")
                        .clicked()
                    {
                        self.toggle_theme(ui.ctx());
                    }

                    let mut follow = self.settings.use_system_theme;
                    if ui
                        .checkbox(&mut follow, "Follow system")
                        .on_hover_text("Use the operating system's light/dark preference")
                        .changed()
                    {
                        self.set_follow_system_theme(ui.ctx(), follow);
                    }
                });
            });
        });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context, time: FrameTime) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_section(ui, "Timer", |app, ui| app.render_timer_section(ui, time));
                self.render_section(ui, "Stopwatch", |app, ui| {
                    app.render_stopwatch_section(ui, time)
                });
                self.render_section(ui, "Epoch Converter", |app, ui| {
                    app.render_epoch_section(ui, time)
                });
                self.render_section(ui, "World Clock", |app, ui| {
                    app.render_timezone_section(ui, time)
                });
                self.render_section(ui, "Public Holidays", |app, ui| {
                    app.render_holiday_section(ui, time)
                });
            });
        });
    }

    fn render_section(
        &mut self,
        ui: &mut egui::Ui,
        title: &str,
        body: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        egui::Frame::group(ui.style())
            .fill(self.active_theme.panel_background)
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.heading(title);
                ui.add_space(6.0);
                body(self, ui);
            });
        ui.add_space(10.0);
    }
}
