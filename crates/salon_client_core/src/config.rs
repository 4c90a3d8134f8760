use crate::error::ConfigError;
use crate::navigation::MOBILE_BREAKPOINT_PX;
use crate::notification::AUTO_DISMISS_MS;
use crate::quick_action::PRESS_FEEDBACK_MS;
use serde::Deserialize;

/// Page-level settings. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// `localStorage` key holding the theme.
    pub storage_key: String,
    pub mobile_breakpoint_px: u32,
    pub notification_ttl_ms: u64,
    pub press_feedback_ms: u64,
    pub chart_font_family: String,
    /// Hostnames that get debug logging and the startup banner.
    pub dev_hosts: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            notification_ttl_ms: AUTO_DISMISS_MS,
            press_feedback_ms: PRESS_FEEDBACK_MS,
            chart_font_family: "Vazirmatn".to_string(),
            dev_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.mobile_breakpoint_px == 0 {
            return Err(ConfigError::ZeroBreakpoint);
        }
        Ok(config)
    }
}
