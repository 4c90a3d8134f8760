//! Salon dashboard client core: theme, chart palettes and configs, navigation,
//! notifications and fa-IR formatting. No DOM access; the frontend drives it.

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod navigation;
pub mod notification;
pub mod palette;
pub mod quick_action;
pub mod sample_data;
pub mod storage;
pub mod theme;

pub use chart::{ChartBackend, ChartConfig, ChartKind, ChartRegistry};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::{ConfigError, FormatError, StorageError, ThemeParseError};
pub use navigation::{LinkClick, NavLink, Sidebar};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use palette::Palette;
pub use quick_action::QuickAction;
pub use storage::{KeyValueStore, MemoryStorage};
pub use theme::{Theme, ThemeStore};

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
