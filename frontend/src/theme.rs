//! Page colors and spacing, emitted as CSS custom properties under
//! `body.theme-light` / `body.theme-dark`. Chart colors live in the core palette.

use salon_client_core::{Palette, Theme};

/// Surface colors per theme. Brand colors come from the chart palette so the page
/// and the charts stay consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceColors {
    pub background: &'static str,
    pub surface: &'static str,
    pub on_surface: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub sidebar: &'static str,
}

impl SurfaceColors {
    pub const LIGHT: SurfaceColors = SurfaceColors {
        background: "#f8f9fa",
        surface: "#ffffff",
        on_surface: "#212529",
        muted: "#6c757d",
        border: "#e9ecef",
        sidebar: "#ffffff",
    };

    pub const DARK: SurfaceColors = SurfaceColors {
        background: "#121212",
        surface: "#1e1e1e",
        on_surface: "#ffffff",
        muted: "#adb5bd",
        border: "#404040",
        sidebar: "#1a1a1a",
    };

    pub fn for_theme(theme: Theme) -> SurfaceColors {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const CARD_PADDING: &str = "20px";
    pub const SIDEBAR_WIDTH: &str = "260px";
}

/// `body.theme-<name> { --... }` block for one theme.
pub fn theme_variables(theme: Theme) -> String {
    let s = SurfaceColors::for_theme(theme);
    let p = Palette::for_theme(theme);
    format!(
        "body.{class} {{ --bg: {bg}; --surface: {surface}; --text: {text}; --muted: {muted}; \
         --border: {border}; --sidebar-bg: {sidebar}; --primary: {primary}; --secondary: {secondary}; \
         --accent: {accent}; --success: {success}; --warning: {warning}; --info: {info}; --danger: #f44336; }}\n",
        class = theme.body_class(),
        bg = s.background,
        surface = s.surface,
        text = s.on_surface,
        muted = s.muted,
        border = s.border,
        sidebar = s.sidebar,
        primary = p.primary,
        secondary = p.secondary,
        accent = p.accent,
        success = p.success,
        warning = p.warning,
        info = p.info,
    )
}

const LAYOUT_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text); font-family: "Vazirmatn", system-ui, sans-serif; transition: background 0.2s, color 0.2s; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: var(--sidebar-width); background: var(--sidebar-bg); border-inline-start: 1px solid var(--border); padding: var(--space-lg) var(--space-md); flex-shrink: 0; }
.sidebar .brand { font-size: 1.25rem; font-weight: 700; color: var(--primary); margin-bottom: var(--space-lg); }
.nav-link { display: flex; align-items: center; gap: var(--space-sm); padding: 10px 14px; border-radius: 10px; color: var(--text); text-decoration: none; margin-bottom: var(--space-xs); }
.nav-link:hover { background: color-mix(in srgb, var(--primary) 10%, transparent); }
.nav-link.active { background: var(--primary); color: #ffffff; }
.sidebar-backdrop { display: none; }
.main { flex: 1; min-width: 0; }
.top-bar { display: flex; align-items: center; gap: var(--space-md); padding: var(--space-md) var(--space-lg); border-bottom: 1px solid var(--border); background: var(--surface); }
.top-bar h1 { font-size: 1.1rem; margin: 0; flex: 1; }
.btn-menu, .btn-theme { background: none; border: 1px solid var(--border); color: var(--text); border-radius: 8px; padding: 6px 10px; cursor: pointer; }
.btn-menu { display: none; }
.content { padding: var(--space-lg); }
.stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: var(--space-md); margin-bottom: var(--space-md); }
.grid-2 { display: grid; grid-template-columns: 2fr 1fr; gap: var(--space-md); margin-bottom: var(--space-md); }
.card { background: var(--surface); border: 1px solid var(--border); border-radius: 14px; padding: var(--card-padding); }
.card.mt { margin-top: var(--space-md); }
.card-title { display: flex; align-items: center; gap: var(--space-sm); font-weight: 600; margin: 0 0 var(--space-md); }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-label { color: var(--muted); font-size: 0.875rem; }
.chart-card .chart-body { position: relative; height: 300px; }
.chart-card.loading .chart-body { opacity: 0.4; }
.appointments { width: 100%; border-collapse: collapse; }
.appointments td, .appointments th { padding: 10px; border-bottom: 1px solid var(--border); text-align: start; }
.avatar { display: inline-flex; align-items: center; justify-content: center; width: 28px; height: 28px; border-radius: 50%; background: var(--secondary); color: #ffffff; margin-inline-end: var(--space-xs); }
.status { border-radius: 999px; padding: 2px 10px; font-size: 0.75rem; }
.status-confirmed { background: color-mix(in srgb, var(--success) 20%, transparent); color: var(--success); }
.status-pending { background: color-mix(in srgb, var(--warning) 20%, transparent); color: var(--warning); }
.reminder { display: flex; gap: var(--space-sm); align-items: center; padding: var(--space-sm) 0; }
.reminder i { font-size: 1.25rem; }
.reminder-warning i { color: var(--warning); }
.reminder-danger i { color: var(--danger); }
.reminder-info i { color: var(--info); }
.quick-actions { display: grid; grid-template-columns: repeat(2, 1fr); gap: var(--space-sm); }
.quick-action-btn { display: flex; flex-direction: column; align-items: center; gap: var(--space-xs); padding: var(--space-md); border-radius: 12px; border: 1px solid var(--border); background: var(--bg); color: var(--text); cursor: pointer; transition: transform 0.15s; }
.notifications { position: fixed; top: var(--space-md); inset-inline-start: var(--space-md); display: flex; flex-direction: column; gap: var(--space-sm); z-index: 1000; }
.notification { display: flex; align-items: center; justify-content: space-between; gap: var(--space-md); min-width: 280px; padding: 12px 16px; border-radius: 10px; background: var(--surface); border-inline-start: 4px solid var(--info); box-shadow: 0 6px 20px rgba(0, 0, 0, 0.15); }
.notification-content { display: flex; gap: var(--space-sm); align-items: center; }
.notification-success { border-color: var(--success); }
.notification-warning { border-color: var(--warning); }
.notification-error { border-color: var(--danger); }
.notification-close { background: none; border: none; color: var(--muted); cursor: pointer; }
@media (max-width: 768px) {
  .sidebar { position: fixed; inset-block: 0; inset-inline-start: 0; z-index: 900; transform: translateX(100%); transition: transform 0.25s; }
  .sidebar.show { transform: translateX(0); }
  .sidebar-backdrop { display: block; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); z-index: 800; }
  .btn-menu { display: inline-block; }
  .grid-2 { grid-template-columns: 1fr; }
}
"#;

/// Whole stylesheet: spacing tokens, both theme blocks, layout rules.
pub fn global_css() -> String {
    let mut css = format!(
        ":root {{ --space-xs: {}; --space-sm: {}; --space-md: {}; --space-lg: {}; --card-padding: {}; --sidebar-width: {}; }}\n",
        spacing::XS,
        spacing::SM,
        spacing::MD,
        spacing::LG,
        spacing::CARD_PADDING,
        spacing::SIDEBAR_WIDTH,
    );
    css.push_str(&theme_variables(Theme::Light));
    css.push_str(&theme_variables(Theme::Dark));
    css.push_str(LAYOUT_CSS);
    css
}
