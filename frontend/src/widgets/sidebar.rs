use crate::app::use_dashboard;
use dioxus::prelude::*;
use salon_client_core::navigation::{active_flags, default_links};
use salon_client_core::LinkClick;

#[component]
pub fn Sidebar(current_page: String) -> Element {
    let mut dashboard = use_dashboard();
    let links = default_links();
    let active = active_flags(&links, &current_page);
    let sidebar = dashboard.read().sidebar();
    let show_backdrop = sidebar.is_shown() && dashboard.read().is_narrow();

    rsx! {
        if show_backdrop {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| {
                    dashboard.write().handle_outside_click(false, false);
                },
            }
        }
        aside { id: "sidebar", class: sidebar.class(),
            div { class: "brand",
                i { class: "bi bi-flower1" }
                " سالن زیبایی"
            }
            nav {
                for (link, is_active) in links.into_iter().zip(active) {
                    a {
                        key: "{link.label}",
                        class: if is_active { "nav-link active" } else { "nav-link" },
                        href: link.href.unwrap_or("#"),
                        onclick: move |evt: MouseEvent| {
                            if let LinkClick::Handled { .. } = dashboard.write().handle_link_click(link.href) {
                                evt.prevent_default();
                            }
                        },
                        i { class: "bi {link.icon}" }
                        span { "{link.label}" }
                    }
                }
            }
        }
    }
}
