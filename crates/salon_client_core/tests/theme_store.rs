//! Theme parsing at the storage boundary, set/toggle/persist round trips.

mod common;

use common::{BrokenStorage, ReadOnlyStorage};
use pretty_assertions::assert_eq;
use salon_client_core::{FileStorage, KeyValueStore, MemoryStorage, Theme, ThemeStore};

#[test]
fn unset_storage_defaults_to_light() {
    let store = ThemeStore::load(MemoryStorage::new(), "theme");
    assert_eq!(store.current(), Theme::Light);
    assert_eq!(store.persisted().unwrap(), None);
}

#[test]
fn persisted_dark_is_loaded() {
    let store = ThemeStore::load(MemoryStorage::with_entry("theme", "dark"), "theme");
    assert_eq!(store.current(), Theme::Dark);
}

#[test]
fn corrupted_value_recovers_to_light() {
    for raw in ["Dark", "blue", "", " light"] {
        let store = ThemeStore::load(MemoryStorage::with_entry("theme", raw), "theme");
        assert_eq!(store.current(), Theme::Light, "raw value {:?}", raw);
    }
}

#[test]
fn unreadable_storage_defaults_to_light() {
    let store = ThemeStore::load(BrokenStorage, "theme");
    assert_eq!(store.current(), Theme::Light);
}

#[test]
fn set_then_read_returns_value_and_persists_it() {
    for theme in [Theme::Light, Theme::Dark] {
        let mut store = ThemeStore::load(MemoryStorage::new(), "theme");
        store.set(theme).unwrap();
        assert_eq!(store.current(), theme);
        assert_eq!(store.persisted().unwrap().as_deref(), Some(theme.as_str()));

        let reloaded = ThemeStore::load(store.storage().clone(), "theme");
        assert_eq!(reloaded.current(), theme);
    }
}

#[test]
fn failed_write_still_applies_theme() {
    let mut store = ThemeStore::load(ReadOnlyStorage, "theme");
    assert!(store.set(Theme::Dark).is_err());
    assert_eq!(store.current(), Theme::Dark);
}

#[test]
fn toggled_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn parse_and_display_agree() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
    }
    let err = "sepia".parse::<Theme>().unwrap_err();
    assert_eq!(err.0, "sepia");
}

#[test]
fn body_class_names() {
    assert_eq!(Theme::Light.body_class(), "theme-light");
    assert_eq!(Theme::Dark.body_class(), "theme-dark");
}

#[test]
fn file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("salon-dashboard");

    let mut storage = FileStorage::in_dir(&nested);
    assert_eq!(storage.get("theme").unwrap(), None);
    storage.set("theme", "dark").unwrap();
    storage.set("other", "x").unwrap();

    let store = ThemeStore::load(FileStorage::in_dir(&nested), "theme");
    assert_eq!(store.current(), Theme::Dark);
    assert_eq!(FileStorage::in_dir(&nested).get("other").unwrap().as_deref(), Some("x"));
}

#[test]
fn corrupt_storage_file_is_an_error_and_loads_as_light() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::in_dir(dir.path());
    std::fs::write(storage.path(), "{not json").unwrap();

    assert!(storage.get("theme").is_err());
    let store = ThemeStore::load(storage, "theme");
    assert_eq!(store.current(), Theme::Light);
}
