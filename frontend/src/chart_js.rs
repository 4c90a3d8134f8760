//! Chart.js behind the core's `ChartBackend`. Live instances are kept on
//! `window.__salonCharts`, keyed by canvas id.

use crate::app::AppDashboard;
use dioxus::prelude::*;
use salon_client_core::chart::{ChartBackend, ChartConfig, ChartKind};
use tracing::warn;

pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Dataset keys that carry theme colors; everything else (data, widths) is left alone on update.
const STYLE_KEYS: &str = r#"["borderColor", "backgroundColor", "pointBackgroundColor"]"#;

fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn config_json(config: &ChartConfig) -> Option<String> {
    serde_json::to_string(config)
        .map_err(|e| warn!("charts: could not serialize config: {}", e))
        .ok()
}

pub fn create_script(canvas_id: &str, config: &ChartConfig) -> Option<String> {
    let cfg = config_json(config)?;
    Some(format!(
        r#"
const id = {id};
const cfg = {cfg};
for (let tries = 0; typeof Chart === "undefined" && tries < 100; tries++) {{
    await new Promise(r => setTimeout(r, 50));
}}
const el = document.getElementById(id);
if (!el || typeof Chart === "undefined") return false;
const fa = new Intl.NumberFormat("fa-IR");
for (const axis of Object.values((cfg.options && cfg.options.scales) || {{}})) {{
    if (axis.ticks && axis.ticks.persianDigits) {{
        delete axis.ticks.persianDigits;
        axis.ticks.callback = (value) => fa.format(value);
    }}
}}
window.__salonCharts = window.__salonCharts || {{}};
if (window.__salonCharts[id]) window.__salonCharts[id].destroy();
window.__salonCharts[id] = new Chart(el, cfg);
return true;
"#,
        id = js_string(canvas_id),
        cfg = cfg,
    ))
}

pub fn update_script(canvas_id: &str, config: &ChartConfig) -> Option<String> {
    let cfg = config_json(config)?;
    Some(format!(
        r#"
const chart = (window.__salonCharts || {{}})[{id}];
if (!chart) return false;
const cfg = {cfg};
const styleKeys = {keys};
cfg.data.datasets.forEach((src, i) => {{
    const dst = chart.data.datasets[i];
    if (!dst) return;
    for (const k of styleKeys) if (k in src) dst[k] = src[k];
}});
chart.options.plugins.legend.labels.color = cfg.options.plugins.legend.labels.color;
for (const [name, axis] of Object.entries(cfg.options.scales || {{}})) {{
    const dst = chart.options.scales[name];
    if (!dst) continue;
    dst.ticks.color = axis.ticks.color;
    dst.grid.color = axis.grid.color;
}}
if (cfg.options.elements) {{
    chart.options.elements.point.hoverBackgroundColor = cfg.options.elements.point.hoverBackgroundColor;
}}
chart.update();
return true;
"#,
        id = js_string(canvas_id),
        cfg = cfg,
        keys = STYLE_KEYS,
    ))
}

pub fn resize_script(canvas_id: &str) -> String {
    format!(
        "const chart = (window.__salonCharts || {{}})[{}]; if (chart) chart.resize(); return !!chart;",
        js_string(canvas_id)
    )
}

fn run(what: &'static str, canvas_id: &str, script: Option<String>) {
    let Some(script) = script else { return };
    let canvas_id = canvas_id.to_string();
    spawn(async move {
        match document::eval(&script).await {
            Ok(serde_json::Value::Bool(false)) => {
                warn!("charts: {} on #{} found no target", what, canvas_id);
            }
            Ok(_) => {}
            Err(e) => warn!("charts: {} on #{} failed: {:?}", what, canvas_id, e),
        }
    });
}

/// Drives Chart.js through `document::eval`. Must be used inside the Dioxus runtime.
///
/// Creates finish asynchronously (the script may still be loading); the outcome is
/// reported back to the dashboard, which then pushes any colors that changed meanwhile.
#[derive(Clone, Copy)]
pub struct ChartJs {
    dashboard: Signal<AppDashboard>,
}

impl ChartJs {
    pub fn new(dashboard: Signal<AppDashboard>) -> Self {
        Self { dashboard }
    }
}

impl ChartBackend for ChartJs {
    fn create(&mut self, canvas_id: &str, config: &ChartConfig) -> bool {
        let (Some(kind), Some(script)) = (ChartKind::from_canvas_id(canvas_id), create_script(canvas_id, config)) else {
            return false;
        };
        let mut dashboard = self.dashboard;
        spawn(async move {
            let created = match document::eval(&script).await {
                Ok(serde_json::Value::Bool(true)) => true,
                Ok(_) => {
                    warn!("charts: create on #{} found no target", kind.canvas_id());
                    false
                }
                Err(e) => {
                    warn!("charts: create on #{} failed: {:?}", kind.canvas_id(), e);
                    false
                }
            };
            let mut charts = ChartJs::new(dashboard);
            dashboard.write().chart_created(kind, created, &mut charts);
        });
        false
    }

    fn update(&mut self, canvas_id: &str, config: &ChartConfig) {
        run("update", canvas_id, update_script(canvas_id, config));
    }

    fn resize(&mut self, canvas_id: &str) {
        run("resize", canvas_id, Some(resize_script(canvas_id)));
    }
}
