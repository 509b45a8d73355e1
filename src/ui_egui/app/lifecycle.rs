use std::sync::Arc;

use chrono::{Datelike, Local};

use super::state::{
    EpochPanelState, HolidayPanelState, SharedHolidayService, TimerPanelState,
    TimezonePanelState,
};
use super::TimeToolsApp;
use crate::models::settings::Settings;
use crate::services::clock::{Clock, SystemClock};
use crate::services::epoch::local_zone;
use crate::services::holiday::{HolidayService, NagerHolidayClient, DEFAULT_COUNTRY};
use crate::services::notification::NotificationService;
use crate::services::settings::{resolve_theme, SettingsService};
use crate::services::stopwatch::Stopwatch;
use crate::services::timer::CountdownTimer;
use crate::services::timezone::{ChronoTzFormatter, TimezoneBoard};
use crate::ui_egui::theme::AppTheme;

impl TimeToolsApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::with_clock(Arc::new(SystemClock::new()));
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Builds the app around `clock`; every widget reads time through it.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let settings_service = SettingsService::default_path().map(SettingsService::new);
        let settings = load_settings_or_default(settings_service.as_ref());
        log::info!("Loaded settings: theme={:?}", settings.theme);

        let formatter = ChronoTzFormatter::new();
        let board = TimezoneBoard::with_defaults(clock.now(), clock.utc_now(), &formatter);

        let mut app = Self {
            active_theme: AppTheme::for_theme(resolve_theme(&settings)),
            settings,
            settings_service,
            notification_service: NotificationService::new(),
            formatter,
            timer: CountdownTimer::new(),
            stopwatch: Stopwatch::new(),
            board,
            timer_ui: TimerPanelState::default(),
            epoch_ui: EpochPanelState {
                zone: local_zone(),
                ..EpochPanelState::default()
            },
            timezone_ui: TimezonePanelState::default(),
            holiday_ui: HolidayPanelState::new(build_holiday_service()),
            clock,
        };

        let year = app.clock.utc_now().with_timezone(&Local).year();
        app.start_holiday_load(DEFAULT_COUNTRY, year);
        app
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        let showing = resolve_theme(&self.settings);
        self.settings.choose_opposite_of(showing);
        self.apply_and_save_theme(ctx);
    }

    pub(super) fn set_follow_system_theme(&mut self, ctx: &egui::Context, follow: bool) {
        let showing = resolve_theme(&self.settings);
        self.settings.set_follow_system(follow, showing);
        self.apply_and_save_theme(ctx);
    }

    fn apply_and_save_theme(&mut self, ctx: &egui::Context) {
        self.active_theme = AppTheme::for_theme(resolve_theme(&self.settings));
        self.active_theme.apply_to_context(ctx);

        if let Some(service) = &self.settings_service {
            if let Err(e) = service.save(&self.settings) {
                log::error!("Failed to save theme preference: {:#}", e);
            }
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let time = self.frame_time();

        self.drive_widgets(ctx, time);

        self.render_top_bar(ctx);
        self.render_main_panel(ctx, time);
        self.render_completion_alert(ctx);

        self.schedule_repaint(ctx, time.now);
    }
}

fn load_settings_or_default(settings_service: Option<&SettingsService>) -> Settings {
    let Some(settings_service) = settings_service else {
        log::warn!("No configuration directory available, theme will not persist");
        return Settings::default();
    };

    match settings_service.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            Settings::default()
        }
    }
}

fn build_holiday_service() -> Option<SharedHolidayService> {
    match NagerHolidayClient::new() {
        Ok(client) => Some(Arc::new(HolidayService::new(client))),
        Err(e) => {
            log::error!("Holiday lookups will use built-in tables: {:#}", e);
            None
        }
    }
}
