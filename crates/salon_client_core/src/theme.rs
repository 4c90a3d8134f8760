//! Light/dark theme and its persisted store.

use crate::error::{StorageError, ThemeParseError};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Class set on `<body>`: `theme-light` / `theme-dark`.
    pub fn body_class(self) -> String {
        format!("theme-{}", self.as_str())
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Boundary parse for persisted values: absent or unrecognized falls back to light.
    pub fn from_persisted(raw: Option<&str>) -> Self {
        match raw {
            None => Theme::default(),
            Some(s) => s.parse().unwrap_or_else(|e: ThemeParseError| {
                warn!("theme: {}, falling back to {}", e, Theme::default());
                Theme::default()
            }),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme plus the storage it is persisted to.
pub struct ThemeStore<S> {
    storage: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Reads the persisted theme under `key`. Read failures are logged and treated as unset.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let raw = storage.get(&key).unwrap_or_else(|e| {
            warn!("theme: could not read {:?}: {}", key, e);
            None
        });
        let current = Theme::from_persisted(raw.as_deref());
        debug!(theme = %current, "theme: loaded");
        Self {
            storage,
            key,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Updates the in-memory theme, then persists it. The theme stays applied
    /// even when the write fails.
    pub fn set(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.current = theme;
        self.storage.set(&self.key, theme.as_str())
    }

    /// Raw persisted value, as another page load would see it.
    pub fn persisted(&self) -> Result<Option<String>, StorageError> {
        self.storage.get(&self.key)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
