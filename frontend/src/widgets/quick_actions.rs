use crate::app::{notify, use_dashboard};
use crate::platform;
use dioxus::prelude::*;
use salon_client_core::quick_action::PRESSED_TRANSFORM;
use salon_client_core::{NotificationKind, QuickAction};

#[component]
pub fn QuickActions() -> Element {
    let dashboard = use_dashboard();
    let mut pressed = use_signal(|| Option::<QuickAction>::None);
    let feedback_ms = dashboard.read().config().press_feedback_ms;

    rsx! {
        div { class: "quick-actions",
            for action in QuickAction::ALL {
                button {
                    key: "{action.label()}",
                    class: "quick-action-btn",
                    style: if pressed() == Some(action) { "transform: {PRESSED_TRANSFORM};" } else { "" },
                    onclick: move |_| {
                        pressed.set(Some(action));
                        spawn(async move {
                            platform::sleep_ms(feedback_ms).await;
                            if pressed() == Some(action) {
                                pressed.set(None);
                            }
                        });
                        action.run();
                        notify(dashboard, format!("{} به زودی فعال می‌شود", action.label()), NotificationKind::Info);
                    },
                    i { class: "bi {action.icon()}" }
                    span { "{action.label()}" }
                }
            }
        }
    }
}
