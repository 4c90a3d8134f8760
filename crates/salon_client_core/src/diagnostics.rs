//! Page-level diagnostics: dev-host detection, visibility and uncaught-error logging.

use crate::config::DashboardConfig;
use crate::sample_data::sample_data;
use tracing::{debug, error, info, warn, Level};

pub fn is_dev_host(hostname: &str, config: &DashboardConfig) -> bool {
    config.dev_hosts.iter().any(|h| h == hostname)
}

/// Verbose logging on loopback hosts only.
pub fn log_level_for_host(hostname: &str, config: &DashboardConfig) -> Level {
    if is_dev_host(hostname, config) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Startup banner plus the sample data, dev hosts only.
pub fn dev_banner(hostname: &str, config: &DashboardConfig) {
    if !is_dev_host(hostname, config) {
        return;
    }
    info!("🎨 قالب سالن زیبایی - حالت توسعه");
    match serde_json::to_string(sample_data()) {
        Ok(json) => debug!("📊 داده‌های نمونه: {}", json),
        Err(e) => warn!("diagnostics: could not serialize sample data: {}", e),
    }
}

pub fn visibility_changed(hidden: bool) {
    if !hidden {
        info!("صفحه فعال شد - به‌روزرسانی داده‌ها");
    }
}

/// Uncaught script error. Logged only; nothing is retried or shown to the user.
pub fn script_error(message: &str) {
    error!("خطا در اجرای JavaScript: {}", message);
}
