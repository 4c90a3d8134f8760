use crate::app::use_dashboard;
use crate::chart_js::ChartJs;
use dioxus::prelude::*;
use tracing::warn;

#[component]
pub fn TopBar() -> Element {
    let mut dashboard = use_dashboard();
    let is_dark = dashboard.read().theme().is_dark();
    let (theme_icon, theme_title) = if is_dark {
        ("bi-sun", "حالت روشن")
    } else {
        ("bi-moon-stars", "حالت تاریک")
    };

    rsx! {
        header { class: "top-bar",
            button {
                class: "btn-menu",
                onclick: move |_| dashboard.write().toggle_sidebar(),
                i { class: "bi bi-list" }
            }
            h1 { "داشبورد" }
            button {
                class: "btn-theme",
                title: theme_title,
                onclick: move |_| {
                    let mut charts = ChartJs::new(dashboard);
                    if let Err(e) = dashboard.write().toggle_theme(&mut charts) {
                        warn!("theme: {}", e);
                    }
                },
                i { class: "bi {theme_icon}" }
            }
        }
    }
}
