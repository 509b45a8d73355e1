//! Light and dark palettes for the egui front end.

use egui::Color32;

use crate::models::settings::Theme;

/// Colors used by the widget panels
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,
    pub app_background: Color32,
    /// Background of each widget's section frame
    pub panel_background: Color32,
    pub card_background: Color32,
    pub accent: Color32,
    /// Display color while the countdown is running
    pub active: Color32,
    pub danger: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
}

impl AppTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            panel_background: Color32::from_rgb(255, 255, 255),
            card_background: Color32::from_rgb(240, 244, 250),
            accent: Color32::from_rgb(100, 150, 255),
            active: Color32::from_rgb(30, 120, 50),
            danger: Color32::from_rgb(220, 38, 38),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            panel_background: Color32::from_rgb(40, 40, 40),
            card_background: Color32::from_rgb(50, 55, 65),
            accent: Color32::from_rgb(100, 150, 255),
            active: Color32::from_rgb(100, 220, 120),
            danger: Color32::from_rgb(255, 120, 120),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.panel_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.hovered.bg_stroke.color = self.accent;
        visuals.selection.bg_fill = self.accent;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flag_selects_palette() {
        assert!(AppTheme::for_theme(Theme::Dark).is_dark);
        assert_eq!(AppTheme::for_theme(Theme::Light), AppTheme::light());
    }
}
