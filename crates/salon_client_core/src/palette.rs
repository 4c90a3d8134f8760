//! Chart colors per theme.

use crate::theme::Theme;
use serde::Serialize;

/// Eight named chart colors. Only `text` and `grid` differ between themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        primary: "#e91e63",
        secondary: "#9c27b0",
        accent: "#ffd700",
        success: "#4caf50",
        warning: "#ff9800",
        info: "#00bcd4",
        text: "#212529",
        grid: "#e9ecef",
    };

    pub const DARK: Palette = Palette {
        primary: "#e91e63",
        secondary: "#9c27b0",
        accent: "#ffd700",
        success: "#4caf50",
        warning: "#ff9800",
        info: "#00bcd4",
        text: "#ffffff",
        grid: "#404040",
    };

    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &Self::LIGHT,
            Theme::Dark => &Self::DARK,
        }
    }

    /// `color` with a `20` alpha suffix (~12% opacity), used for area fills.
    pub fn translucent(color: &str) -> String {
        format!("{}20", color)
    }

    /// Slice colors of the services doughnut, in label order.
    pub fn services_slices(&self) -> Vec<String> {
        [self.primary, self.secondary, self.accent, self.info, self.warning]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }
}

/// Palette of the given theme; the chart bindings' color resolver.
pub fn chart_colors(theme: Theme) -> &'static Palette {
    Palette::for_theme(theme)
}
