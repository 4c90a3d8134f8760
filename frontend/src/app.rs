use crate::chart_js::{ChartJs, CHART_JS_CDN};
use crate::platform::{self, PlatformStorage, WindowEvent};
use crate::screens::DashboardScreen;
use crate::theme;
use crate::widgets::{NotificationStack, Sidebar, TopBar};
use chrono::Utc;
use dioxus::prelude::*;
use salon_client_core::{diagnostics, navigation, Dashboard, NotificationKind};
use tracing::{debug, warn};

pub type AppDashboard = Dashboard<PlatformStorage>;

const BOOTSTRAP_ICONS_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
const VAZIRMATN_CSS: &str = "https://cdn.jsdelivr.net/gh/rastikerdar/vazirmatn@v33.003/Vazirmatn-font-face.css";

/// Page state shared with every widget through context.
pub fn use_dashboard() -> Signal<AppDashboard> {
    use_context::<Signal<AppDashboard>>()
}

/// Shows a banner and schedules its removal after the configured TTL.
pub fn notify(mut dashboard: Signal<AppDashboard>, message: impl Into<String>, kind: NotificationKind) {
    let ttl = dashboard.peek().notifications().ttl_ms();
    let id = dashboard.write().show_notification(message, kind, Utc::now());
    spawn(async move {
        platform::sleep_ms(ttl).await;
        dashboard.write().dismiss_notification(id);
    });
}

#[component]
pub fn App() -> Element {
    let mut dashboard = use_context_provider(|| {
        Signal::new(Dashboard::new(platform::load_config(), platform::platform_storage()))
    });
    let mut current_page = use_signal(String::new);

    // Page load: theme, URL-derived navigation state, viewport width, dev banner.
    use_hook(move || {
        let mut charts = ChartJs::new(dashboard);
        if let Err(e) = dashboard.write().apply_persisted_theme(&mut charts) {
            warn!("theme: {}", e);
        }
        spawn(async move {
            match platform::read_page_info().await {
                Ok(info) => {
                    current_page.set(navigation::current_page(&info.pathname).to_string());
                    dashboard.write().handle_resize(info.width, &mut charts);
                    diagnostics::dev_banner(&info.hostname, dashboard.peek().config());
                }
                Err(e) => warn!("page: {:#}", e),
            }
        });
    });

    // Body class follows the theme.
    use_effect(move || {
        let class = dashboard.read().body_class().to_string();
        if !class.is_empty() {
            platform::apply_body_class(&class);
        }
    });

    // Window listeners live as long as the app; torn down on drop.
    use_future(move || async move {
        let mut charts = ChartJs::new(dashboard);
        let mut events = document::eval(platform::WINDOW_EVENTS_JS);
        loop {
            match events.recv::<WindowEvent>().await {
                Ok(WindowEvent::Resize { width }) => {
                    dashboard.write().handle_resize(width, &mut charts);
                }
                Ok(WindowEvent::Visibility { hidden }) => diagnostics::visibility_changed(hidden),
                Ok(WindowEvent::Error { message }) => diagnostics::script_error(&message),
                Err(e) => {
                    warn!("window events: channel closed: {:?}", e);
                    break;
                }
            }
        }
    });
    use_drop(|| {
        debug!("window events: teardown");
        let _ = document::eval(platform::WINDOW_EVENTS_TEARDOWN_JS);
    });

    let css = theme::global_css();

    rsx! {
        document::Link { rel: "stylesheet", href: BOOTSTRAP_ICONS_CSS }
        document::Link { rel: "stylesheet", href: VAZIRMATN_CSS }
        document::Script { src: CHART_JS_CDN }
        style { "{css}" }
        div { class: "layout",
            Sidebar { current_page: current_page() }
            div { class: "main",
                TopBar {}
                DashboardScreen {}
            }
        }
        NotificationStack {}
    }
}
