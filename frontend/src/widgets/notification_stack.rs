use crate::app::use_dashboard;
use dioxus::prelude::*;

#[component]
pub fn NotificationStack() -> Element {
    let mut dashboard = use_dashboard();
    let items = dashboard.read().notifications().active().to_vec();

    rsx! {
        div { class: "notifications",
            for n in items {
                div { key: "{n.id}", class: n.class(),
                    div { class: "notification-content",
                        i { class: "bi bi-info-circle" }
                        span { "{n.message}" }
                    }
                    button {
                        class: "notification-close",
                        onclick: move |_| {
                            dashboard.write().dismiss_notification(n.id);
                        },
                        i { class: "bi bi-x" }
                    }
                }
            }
        }
    }
}
