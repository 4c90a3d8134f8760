use dioxus::prelude::*;

#[component]
pub fn Card(title: String, icon: String, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "card {class}",
            h3 { class: "card-title",
                i { class: "bi {icon}" }
                "{title}"
            }
            {children}
        }
    }
}
