//! Shared helpers: a chart backend that records calls instead of drawing, and
//! storages that fail on demand.

#![allow(dead_code)]

use salon_client_core::chart::{ChartBackend, ChartConfig};
use salon_client_core::{KeyValueStore, StorageError};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Create(String, ChartConfig),
    Update(String, ChartConfig),
    Resize(String),
}

#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Vec<Call>,
    /// Creates finish later, like Chart.js waiting for its script.
    pub deferred: bool,
}

impl RecordingBackend {
    pub fn deferred() -> Self {
        Self { calls: Vec::new(), deferred: true }
    }

    pub fn updates(&self) -> Vec<&Call> {
        self.calls.iter().filter(|c| matches!(c, Call::Update(..))).collect()
    }

    pub fn creates(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Create(..))).count()
    }
}

impl ChartBackend for RecordingBackend {
    fn create(&mut self, canvas_id: &str, config: &ChartConfig) -> bool {
        self.calls.push(Call::Create(canvas_id.to_string(), config.clone()));
        !self.deferred
    }

    fn update(&mut self, canvas_id: &str, config: &ChartConfig) {
        self.calls.push(Call::Update(canvas_id.to_string(), config.clone()));
    }

    fn resize(&mut self, canvas_id: &str) {
        self.calls.push(Call::Resize(canvas_id.to_string()));
    }
}

/// Reads fine, refuses every write (e.g. storage disabled by the browser).
#[derive(Default)]
pub struct ReadOnlyStorage;

impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

/// Fails every read.
#[derive(Default)]
pub struct BrokenStorage;

impl KeyValueStore for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("SecurityError".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("SecurityError".to_string()))
    }
}
