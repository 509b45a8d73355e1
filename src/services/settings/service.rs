use crate::models::settings::{Settings, Theme};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and stores [`Settings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.toml` in the platform configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "TimeTools", "TimeTools")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Get the stored settings, or defaults when nothing was saved yet
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.save(&Settings::default())
    }
}

/// The theme to paint with: the system preference when requested and
/// known, otherwise the stored flag.
pub fn resolve_theme(settings: &Settings) -> Theme {
    if !settings.use_system_theme {
        return settings.theme;
    }

    match dark_light::detect() {
        dark_light::Mode::Dark => Theme::Dark,
        dark_light::Mode::Light => Theme::Light,
        dark_light::Mode::Default => settings.theme,
    }
}
