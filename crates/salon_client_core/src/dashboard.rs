//! Page state owned by the root component: theme, sidebar, charts, notifications.

use crate::chart::{ChartBackend, ChartKind, ChartRegistry};
use crate::config::DashboardConfig;
use crate::error::StorageError;
use crate::navigation::{self, LinkClick, Sidebar};
use crate::notification::{NotificationCenter, NotificationKind};
use crate::palette::Palette;
use crate::storage::KeyValueStore;
use crate::theme::{Theme, ThemeStore};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct Dashboard<S> {
    config: DashboardConfig,
    theme: ThemeStore<S>,
    body_class: String,
    sidebar: Sidebar,
    charts: ChartRegistry,
    notifications: NotificationCenter,
    viewport_width: u32,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Loads the persisted theme; the body class is not applied until [`Dashboard::apply_persisted_theme`].
    pub fn new(config: DashboardConfig, storage: S) -> Self {
        let theme = ThemeStore::load(storage, config.storage_key.clone());
        let charts = ChartRegistry::new(config.chart_font_family.clone());
        let notifications = NotificationCenter::new(config.notification_ttl_ms);
        Self {
            viewport_width: config.mobile_breakpoint_px.saturating_add(1),
            config,
            theme,
            body_class: String::new(),
            sidebar: Sidebar::default(),
            charts,
            notifications,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn theme_store(&self) -> &ThemeStore<S> {
        &self.theme
    }

    pub fn body_class(&self) -> &str {
        &self.body_class
    }

    pub fn palette(&self) -> &'static Palette {
        Palette::for_theme(self.theme())
    }

    /// Page-load step: writes the loaded theme back so body class and storage agree.
    pub fn apply_persisted_theme<B: ChartBackend + ?Sized>(&mut self, backend: &mut B) -> Result<(), StorageError> {
        let theme = self.theme();
        self.set_theme(theme, backend)
    }

    /// Sets the theme, rewrites the body class, persists it, and recolors any live charts.
    /// Storage failures are returned after the page state is already updated.
    pub fn set_theme<B: ChartBackend + ?Sized>(&mut self, theme: Theme, backend: &mut B) -> Result<(), StorageError> {
        let persisted = self.theme.set(theme);
        self.body_class = theme.body_class();
        if !self.charts.is_empty() {
            self.charts.recolor(Palette::for_theme(theme), backend);
        }
        info!(theme = %theme, "theme: applied");
        if let Err(ref e) = persisted {
            warn!("theme: could not persist {}: {}", theme, e);
        }
        persisted
    }

    pub fn toggle_theme<B: ChartBackend + ?Sized>(&mut self, backend: &mut B) -> Result<Theme, StorageError> {
        let next = self.theme().toggled();
        self.set_theme(next, backend)?;
        Ok(next)
    }

    pub fn charts(&self) -> &ChartRegistry {
        &self.charts
    }

    pub fn initialize_chart<B: ChartBackend + ?Sized>(&mut self, kind: ChartKind, target_present: bool, backend: &mut B) -> bool {
        let palette = Palette::for_theme(self.theme());
        self.charts.initialize(kind, target_present, palette, backend)
    }

    /// Reports how an asynchronous chart create ended.
    pub fn chart_created<B: ChartBackend + ?Sized>(&mut self, kind: ChartKind, created: bool, backend: &mut B) {
        self.charts.confirm(kind, created, backend);
    }

    /// Re-applies the current palette to live charts.
    pub fn update_chart_colors<B: ChartBackend + ?Sized>(&mut self, backend: &mut B) {
        let palette = Palette::for_theme(self.theme());
        self.charts.recolor(palette, backend);
    }

    pub fn sidebar(&self) -> Sidebar {
        self.sidebar
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar.close();
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn is_narrow(&self) -> bool {
        navigation::is_narrow(self.viewport_width, self.config.mobile_breakpoint_px)
    }

    /// Window resize: wide viewports hide the mobile sidebar, charts refit.
    pub fn handle_resize<B: ChartBackend + ?Sized>(&mut self, width: u32, backend: &mut B) {
        self.viewport_width = width;
        self.sidebar.handle_resize(width, self.config.mobile_breakpoint_px);
        self.charts.resize_all(backend);
    }

    /// Click on a nav link. Returns whether the browser should follow the link.
    pub fn handle_link_click(&mut self, href: Option<&str>) -> LinkClick {
        let action = navigation::link_click(href, self.viewport_width, self.config.mobile_breakpoint_px);
        if let LinkClick::Handled { close_sidebar: true } = action {
            self.sidebar.close();
        }
        action
    }

    pub fn handle_outside_click(&mut self, inside_sidebar: bool, on_menu_button: bool) -> bool {
        self.sidebar.handle_outside_click(
            self.viewport_width,
            self.config.mobile_breakpoint_px,
            inside_sidebar,
            on_menu_button,
        )
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn show_notification(&mut self, message: impl Into<String>, kind: NotificationKind, now: DateTime<Utc>) -> Uuid {
        let id = self.notifications.show(message, kind, now);
        debug!(%id, "notifications: shown");
        id
    }

    pub fn dismiss_notification(&mut self, id: Uuid) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn expire_notifications(&mut self, now: DateTime<Utc>) -> usize {
        self.notifications.expire(now)
    }
}
