//! Browser/desktop glue: persisted storage, page info, timers, window events.
//! Web uses `localStorage`; desktop keeps a JSON file in the user data dir.

use anyhow::{anyhow, Context};
use dioxus::prelude::*;
use salon_client_core::DashboardConfig;
use serde::Deserialize;
use tracing::warn;

const CONFIG_JSON: &str = include_str!("../assets/dashboard.json");

/// Embedded `assets/dashboard.json`; defaults if it does not parse.
pub fn load_config() -> DashboardConfig {
    DashboardConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        warn!("config: {}, using defaults", e);
        DashboardConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
pub use web::{platform_storage, startup_hostname, PlatformStorage};

#[cfg(not(target_arch = "wasm32"))]
pub use native::{platform_storage, startup_hostname, PlatformStorage};

#[cfg(target_arch = "wasm32")]
mod web {
    use salon_client_core::{KeyValueStore, StorageError};

    /// The page origin's `localStorage`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct PlatformStorage;

    pub fn platform_storage() -> PlatformStorage {
        PlatformStorage
    }

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }

    impl KeyValueStore for PlatformStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
        }
    }

    pub fn startup_hostname() -> String {
        web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use salon_client_core::FileStorage;
    use std::path::PathBuf;

    pub type PlatformStorage = FileStorage;

    pub fn platform_storage() -> PlatformStorage {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("salon-dashboard");
        FileStorage::in_dir(dir)
    }

    /// Desktop has no real host; debug builds count as local development.
    pub fn startup_hostname() -> String {
        if cfg!(debug_assertions) {
            "localhost".to_string()
        } else {
            String::new()
        }
    }
}

/// What the page knows about its URL and window at load.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PageInfo {
    pub pathname: String,
    pub hostname: String,
    pub width: u32,
    pub hidden: bool,
}

const PAGE_INFO_JS: &str = r#"
return {
    pathname: window.location.pathname,
    hostname: window.location.hostname,
    width: Math.round(window.innerWidth),
    hidden: document.hidden,
};
"#;

pub async fn read_page_info() -> anyhow::Result<PageInfo> {
    let value = document::eval(PAGE_INFO_JS)
        .await
        .map_err(|e| anyhow!("page info eval failed: {:?}", e))?;
    serde_json::from_value(value).context("page info has unexpected shape")
}

/// Fire-and-forget timer delay.
pub async fn sleep_ms(ms: u64) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;

    // setTimeout fires at once for delays past i32::MAX, so long waits are chunked.
    #[cfg(target_arch = "wasm32")]
    {
        let mut remaining = ms;
        while remaining > 0 {
            let chunk = remaining.min(i32::MAX as u64);
            let script = format!("await new Promise(r => setTimeout(r, {})); return true;", chunk);
            if let Err(e) = document::eval(&script).await {
                warn!("timer: eval failed: {:?}", e);
                return;
            }
            remaining -= chunk;
        }
    }
}

/// Sets `<body class>` and the page direction.
pub fn apply_body_class(class: &str) {
    let class = serde_json::Value::String(class.to_string());
    let script = format!(
        "document.documentElement.setAttribute('dir', 'rtl'); document.documentElement.setAttribute('lang', 'fa'); document.body.className = {};",
        class
    );
    spawn(async move {
        if let Err(e) = document::eval(&script).await {
            warn!("theme: could not set body class: {:?}", e);
        }
    });
}

/// Checks whether an element with `id` is in the document.
pub async fn element_exists(id: &str) -> bool {
    let script = format!(
        "return document.getElementById({}) !== null;",
        serde_json::Value::String(id.to_string())
    );
    match document::eval(&script).await {
        Ok(v) => v.as_bool().unwrap_or(false),
        Err(e) => {
            warn!("dom: lookup of #{} failed: {:?}", id, e);
            false
        }
    }
}

/// Window-level signals the dashboard reacts to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WindowEvent {
    Resize { width: u32 },
    Visibility { hidden: bool },
    Error { message: String },
}

/// Installs resize/visibility/error listeners that forward to Rust. The returned
/// teardown script removes them again.
pub const WINDOW_EVENTS_JS: &str = r#"
const onResize = () => dioxus.send({ kind: "resize", width: Math.round(window.innerWidth) });
const onVisibility = () => dioxus.send({ kind: "visibility", hidden: document.hidden });
const onError = (e) => dioxus.send({ kind: "error", message: String((e && (e.error || e.message)) || "unknown error") });
window.addEventListener("resize", onResize);
document.addEventListener("visibilitychange", onVisibility);
window.addEventListener("error", onError);
window.__salonTeardown = () => {
    window.removeEventListener("resize", onResize);
    document.removeEventListener("visibilitychange", onVisibility);
    window.removeEventListener("error", onError);
    delete window.__salonTeardown;
};
await new Promise(() => {});
"#;

pub const WINDOW_EVENTS_TEARDOWN_JS: &str = "if (window.__salonTeardown) window.__salonTeardown();";
