//! Salon dashboard frontend: Dioxus UI over `salon_client_core`.

pub mod app;
pub mod chart_js;
pub mod platform;
pub mod screens;
pub mod theme;
pub mod widgets;

use salon_client_core::diagnostics::log_level_for_host;

/// Initializes logging for the current host and mounts the app.
pub fn launch_app() {
    let config = platform::load_config();
    let hostname = platform::startup_hostname();
    if let Err(e) = dioxus::logger::init(log_level_for_host(&hostname, &config)) {
        eprintln!("salon dashboard: logger already initialized: {e}");
    }
    dioxus::launch(app::App);
}
