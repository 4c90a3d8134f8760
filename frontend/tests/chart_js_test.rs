//! Chart.js script builders: ids are quoted, configs embedded, style-only updates.

use salon_client_core::chart::{revenue_config, services_config};
use salon_client_core::Palette;
use salon_dashboard_frontend::chart_js::{create_script, resize_script, update_script};

#[test]
fn create_script_embeds_config_and_guards_missing_canvas() {
    let config = revenue_config(&Palette::LIGHT, "Vazirmatn");
    let script = create_script("revenueChart", &config).unwrap();

    assert!(script.contains(r#"const id = "revenueChart";"#));
    assert!(script.contains(&serde_json::to_string(&config).unwrap()));
    assert!(script.contains("if (!el || typeof Chart === \"undefined\") return false;"));
    assert!(script.contains("new Intl.NumberFormat(\"fa-IR\")"));
    assert!(script.contains(".destroy()"));
}

#[test]
fn update_script_only_copies_style_fields() {
    let config = services_config(&Palette::DARK, "Vazirmatn");
    let script = update_script("servicesChart", &config).unwrap();

    assert!(script.contains(r#"["borderColor", "backgroundColor", "pointBackgroundColor"]"#));
    assert!(script.contains("chart.update();"));
    assert!(!script.contains("new Chart("));
    assert!(!script.contains("chart.data.datasets[i].data ="));
}

#[test]
fn canvas_ids_are_json_quoted() {
    let script = resize_script("odd\"id");
    assert!(script.contains(r#"["odd\"id"]"#));
    assert!(script.contains("chart.resize()"));
}
