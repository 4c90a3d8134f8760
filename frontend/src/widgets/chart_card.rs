use crate::app::use_dashboard;
use crate::chart_js::ChartJs;
use crate::platform;
use dioxus::prelude::*;
use salon_client_core::ChartKind;

/// Card with the chart's canvas. Keeps the `loading` class until the chart exists.
#[component]
pub fn ChartCard(kind: ChartKind, title: String, icon: String) -> Element {
    let mut dashboard = use_dashboard();
    let canvas_id = kind.canvas_id();
    let loading = !dashboard.read().charts().is_live(kind);
    let class = if loading { "card chart-card loading" } else { "card chart-card" };

    rsx! {
        div { class,
            h3 { class: "card-title",
                i { class: "bi {icon}" }
                "{title}"
            }
            div { class: "chart-body",
                canvas {
                    id: canvas_id,
                    onmounted: move |_| async move {
                        let present = platform::element_exists(canvas_id).await;
                        let mut charts = ChartJs::new(dashboard);
                        dashboard.write().initialize_chart(kind, present, &mut charts);
                    },
                }
            }
        }
    }
}
