//! Palettes, chart configs, in-place recoloring and the chart registry.

mod common;

use common::{Call, RecordingBackend};
use pretty_assertions::assert_eq;
use salon_client_core::chart::{apply_palette, revenue_config, services_config, ColorSpec};
use salon_client_core::palette::chart_colors;
use salon_client_core::{ChartKind, ChartRegistry, Palette, Theme};

#[test]
fn palettes_share_brand_colors_and_differ_in_text_and_grid() {
    let light = chart_colors(Theme::Light);
    let dark = chart_colors(Theme::Dark);

    assert_eq!(
        (light.primary, light.secondary, light.accent, light.success, light.warning, light.info),
        (dark.primary, dark.secondary, dark.accent, dark.success, dark.warning, dark.info)
    );
    assert_ne!(light.text, dark.text);
    assert_ne!(light.grid, dark.grid);
    assert_eq!(dark.text, "#ffffff");
    assert_eq!(light.grid, "#e9ecef");
}

#[test]
fn palette_lookup_is_pure() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(chart_colors(theme), chart_colors(theme));
    }
}

#[test]
fn revenue_config_serializes_to_chartjs_shape() {
    let config = revenue_config(&Palette::LIGHT, "Vazirmatn");
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["type"], "line");
    assert_eq!(json["data"]["labels"].as_array().unwrap().len(), 7);
    let ds = &json["data"]["datasets"][0];
    assert_eq!(ds["borderColor"], "#e91e63");
    assert_eq!(ds["backgroundColor"], "#e91e6320");
    assert_eq!(ds["pointBorderColor"], "#ffffff");
    assert_eq!(ds["data"][2], 3_000_000);
    assert_eq!(json["options"]["maintainAspectRatio"], false);
    assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
    assert_eq!(json["options"]["scales"]["y"]["ticks"]["persianDigits"], true);
    assert!(json["options"]["scales"]["x"]["ticks"].get("persianDigits").is_none());
    assert_eq!(json["options"]["scales"]["x"]["grid"]["color"], "#e9ecef");
    assert_eq!(json["options"]["plugins"]["legend"]["labels"]["font"]["size"], 12);
}

#[test]
fn services_config_serializes_slice_colors() {
    let config = services_config(&Palette::DARK, "Vazirmatn");
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["type"], "doughnut");
    assert_eq!(
        json["data"]["datasets"][0]["backgroundColor"],
        serde_json::json!(["#e91e63", "#9c27b0", "#ffd700", "#00bcd4", "#ff9800"])
    );
    assert_eq!(json["options"]["plugins"]["legend"]["position"], "bottom");
    assert_eq!(json["options"]["plugins"]["legend"]["labels"]["color"], "#ffffff");
    assert!(json["options"].get("scales").is_none());
}

#[test]
fn apply_palette_matches_a_fresh_build_and_keeps_data() {
    for kind in ChartKind::ALL {
        let mut config = kind.build_config(&Palette::LIGHT, "Vazirmatn");
        let data_before = config.data.datasets[0].data.clone();

        apply_palette(kind, &mut config, &Palette::DARK);

        assert_eq!(config, kind.build_config(&Palette::DARK, "Vazirmatn"));
        assert_eq!(config.data.datasets[0].data, data_before);
    }
}

#[test]
fn initialize_skips_missing_canvas() {
    let mut registry = ChartRegistry::new("Vazirmatn");
    let mut backend = RecordingBackend::default();

    assert!(!registry.initialize_revenue_chart(false, &Palette::LIGHT, &mut backend));
    assert!(registry.is_empty());
    assert!(backend.calls.is_empty());
}

#[test]
fn initialize_keeps_one_instance_per_canvas() {
    let mut registry = ChartRegistry::new("Vazirmatn");
    let mut backend = RecordingBackend::default();

    assert!(registry.initialize_revenue_chart(true, &Palette::LIGHT, &mut backend));
    assert!(registry.initialize_services_chart(true, &Palette::LIGHT, &mut backend));
    assert!(registry.initialize_revenue_chart(true, &Palette::DARK, &mut backend));

    assert_eq!(registry.len(), 2);
    assert_eq!(backend.creates(), 3);
    let revenue = registry.get(ChartKind::Revenue).unwrap();
    assert_eq!(revenue.options.plugins.legend.labels.color, "#ffffff");
}

#[test]
fn recolor_updates_only_live_charts_and_is_idempotent() {
    let mut registry = ChartRegistry::new("Vazirmatn");
    let mut backend = RecordingBackend::default();
    registry.initialize(ChartKind::Services, true, &Palette::LIGHT, &mut backend);

    registry.recolor(&Palette::DARK, &mut backend);
    let after_first = registry.clone();
    registry.recolor(&Palette::DARK, &mut backend);

    assert_eq!(registry, after_first);
    let updates = backend.updates();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0], updates[1]);
    match updates[0] {
        Call::Update(id, config) => {
            assert_eq!(id, "servicesChart");
            assert_eq!(config.options.plugins.legend.labels.color, "#ffffff");
            assert_eq!(
                config.data.datasets[0].background_color,
                Some(ColorSpec::PerSlice(Palette::DARK.services_slices()))
            );
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn resize_reaches_every_live_chart() {
    let mut registry = ChartRegistry::new("Vazirmatn");
    let mut backend = RecordingBackend::default();
    registry.resize_all(&mut backend);
    assert!(backend.calls.is_empty());

    registry.initialize(ChartKind::Revenue, true, &Palette::LIGHT, &mut backend);
    registry.initialize(ChartKind::Services, true, &Palette::LIGHT, &mut backend);
    backend.calls.clear();
    registry.resize_all(&mut backend);

    assert_eq!(
        backend.calls,
        vec![Call::Resize("revenueChart".to_string()), Call::Resize("servicesChart".to_string())]
    );
}

#[test]
fn pending_charts_are_recolored_once_created() {
    let mut registry = ChartRegistry::new("Vazirmatn");
    let mut backend = RecordingBackend::deferred();
    registry.initialize(ChartKind::Services, true, &Palette::LIGHT, &mut backend);
    assert!(registry.contains(ChartKind::Services));
    assert!(!registry.is_live(ChartKind::Services));

    registry.recolor(&Palette::DARK, &mut backend);
    registry.resize_all(&mut backend);
    assert_eq!(backend.creates(), 1);
    assert_eq!(backend.calls.len(), 1);

    registry.confirm(ChartKind::Services, true, &mut backend);
    assert!(registry.is_live(ChartKind::Services));
    assert_eq!(
        backend.calls.last(),
        Some(&Call::Update(
            "servicesChart".to_string(),
            registry.get(ChartKind::Services).unwrap().clone()
        ))
    );

    // A second confirmation has nothing new to push.
    registry.confirm(ChartKind::Services, true, &mut backend);
    assert_eq!(backend.updates().len(), 1);
}

#[test]
fn pending_chart_without_recolor_needs_no_update() {
    let mut registry = ChartRegistry::new("Vazirmatn");
    let mut backend = RecordingBackend::deferred();
    registry.initialize(ChartKind::Revenue, true, &Palette::LIGHT, &mut backend);

    registry.confirm(ChartKind::Revenue, true, &mut backend);
    assert!(registry.is_live(ChartKind::Revenue));
    assert!(backend.updates().is_empty());
}

#[test]
fn failed_create_is_forgotten() {
    let mut registry = ChartRegistry::new("Vazirmatn");
    let mut backend = RecordingBackend::deferred();
    registry.initialize(ChartKind::Revenue, true, &Palette::LIGHT, &mut backend);

    registry.confirm(ChartKind::Revenue, false, &mut backend);
    assert!(!registry.contains(ChartKind::Revenue));
    assert!(!registry.is_live(ChartKind::Revenue));
    assert!(registry.is_empty());
}

#[test]
fn canvas_ids_map_back_to_kinds() {
    for kind in ChartKind::ALL {
        assert_eq!(ChartKind::from_canvas_id(kind.canvas_id()), Some(kind));
    }
    assert_eq!(ChartKind::from_canvas_id("missing"), None);
}
