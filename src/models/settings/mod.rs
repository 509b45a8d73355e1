// Settings module
// The theme flag is the only state that survives a restart

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Icon for the toggle button: the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Follow the operating system's light/dark preference instead of
    /// `theme`, which stays as the fallback when the OS reports none
    pub use_system_theme: bool,
}

impl Settings {
    /// Switches to the opposite of the theme on screen. An explicit choice
    /// stops following the system.
    pub fn choose_opposite_of(&mut self, showing: Theme) {
        self.theme = showing.toggled();
        self.use_system_theme = false;
    }

    /// Leaving system mode pins whatever is on screen, so the window does
    /// not flip.
    pub fn set_follow_system(&mut self, follow: bool, showing: Theme) {
        self.use_system_theme = follow;
        if !follow {
            self.theme = showing;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            use_system_theme: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings: Settings = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(!settings.use_system_theme);
    }

    #[test]
    fn choosing_a_theme_leaves_system_mode() {
        let mut settings = Settings {
            theme: Theme::Light,
            use_system_theme: true,
        };
        settings.choose_opposite_of(Theme::Dark);
        assert_eq!(settings.theme, Theme::Light);
        assert!(!settings.use_system_theme);
    }

    #[test]
    fn leaving_system_mode_pins_the_theme_on_screen() {
        let mut settings = Settings::default();
        settings.set_follow_system(true, Theme::Light);
        assert!(settings.use_system_theme);
        assert_eq!(settings.theme, Theme::Light);

        settings.set_follow_system(false, Theme::Dark);
        assert!(!settings.use_system_theme);
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn follow_system_flag_round_trips_through_toml() {
        let settings = Settings {
            theme: Theme::Dark,
            use_system_theme: true,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        assert!(text.contains("use_system_theme = true"));
        assert_eq!(toml::from_str::<Settings>(&text).unwrap(), settings);
    }
}
