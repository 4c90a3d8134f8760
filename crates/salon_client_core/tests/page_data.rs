//! Config parsing, sample data, quick actions and dev-host diagnostics.

use pretty_assertions::assert_eq;
use salon_client_core::diagnostics::{is_dev_host, log_level_for_host};
use salon_client_core::sample_data::{sample_data, AppointmentStatus};
use salon_client_core::{ConfigError, DashboardConfig, QuickAction};
use tracing::Level;

#[test]
fn empty_config_is_all_defaults() {
    let config = DashboardConfig::from_json("{}").unwrap();
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.mobile_breakpoint_px, 768);
    assert_eq!(config.notification_ttl_ms, 5000);
    assert_eq!(config.press_feedback_ms, 150);
}

#[test]
fn config_overrides_single_fields() {
    let config = DashboardConfig::from_json(r#"{ "storage_key": "salon-theme", "dev_hosts": ["dev.local"] }"#).unwrap();
    assert_eq!(config.storage_key, "salon-theme");
    assert_eq!(config.dev_hosts, vec!["dev.local".to_string()]);
    assert_eq!(config.chart_font_family, "Vazirmatn");
}

#[test]
fn config_rejects_bad_input() {
    assert!(matches!(DashboardConfig::from_json("[1, 2]"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        DashboardConfig::from_json(r#"{ "mobile_breakpoint_px": 0 }"#),
        Err(ConfigError::ZeroBreakpoint)
    ));
}

#[test]
fn dev_logging_only_on_loopback() {
    let config = DashboardConfig::default();
    assert!(is_dev_host("localhost", &config));
    assert!(is_dev_host("127.0.0.1", &config));
    assert!(!is_dev_host("salon.example.ir", &config));
    assert_eq!(log_level_for_host("localhost", &config), Level::DEBUG);
    assert_eq!(log_level_for_host("salon.example.ir", &config), Level::INFO);
}

#[test]
fn sample_data_matches_template() {
    let data = sample_data();
    assert_eq!(data.appointments.len(), 3);
    assert_eq!(data.appointments[1].status, AppointmentStatus::Pending);
    assert_eq!(data.stats.today_revenue, 2_450_000);
    assert_eq!(data.reminders.iter().map(|r| r.color).collect::<Vec<_>>(), vec!["warning", "danger", "info"]);

    let json = serde_json::to_value(data).unwrap();
    assert_eq!(json["stats"]["todayAppointments"], 12);
    assert_eq!(json["reminders"][0]["type"], "birthday");
    assert_eq!(json["appointments"][0]["staff"]["avatar"], "م");
}

#[test]
fn quick_actions_resolve_from_labels() {
    for action in QuickAction::ALL {
        assert_eq!(QuickAction::from_label(action.label()), Some(action));
    }
    assert_eq!(QuickAction::from_label(" ثبت پرداخت "), Some(QuickAction::RecordPayment));
    assert_eq!(QuickAction::from_label("گزارش"), None);
}
