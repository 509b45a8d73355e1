mod service;

pub use service::{resolve_theme, SettingsService};
