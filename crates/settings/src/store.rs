use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing dashboard preferences.
///
/// Fields absent from a stored document fall back to their defaults, so
/// older documents keep loading as the preference set grows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSettings {
    pub is_sidebar_collapsed: bool,
    pub is_dark_mode: bool,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    /// The stored settings document did not deserialize.
    #[error("settings document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The backing store failed (lock poisoning, IO, remote errors).
    #[error("settings backend failure: {0}")]
    Backend(#[source] anyhow::Error),
}

/// Load/save seam for dashboard preferences.
///
/// A missing settings document is not an error: `load` returns the
/// defaults, matching first-run behavior.
pub trait SettingsStore: Send + Sync {
    fn load(&self) -> Result<DashboardSettings, SettingsError>;
    fn save(&self, settings: &DashboardSettings) -> Result<(), SettingsError>;
}

/// In-memory settings store holding one JSON document, as a remote
/// document store would.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    document: Mutex<Option<serde_json::Value>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Result<DashboardSettings, SettingsError> {
        let document = self
            .document
            .lock()
            .map_err(|_| SettingsError::Backend(anyhow::anyhow!("settings store lock poisoned")))?;

        match document.as_ref() {
            None => Ok(DashboardSettings::default()),
            Some(value) => Ok(serde_json::from_value(value.clone())?),
        }
    }

    fn save(&self, settings: &DashboardSettings) -> Result<(), SettingsError> {
        let value = serde_json::to_value(settings)?;
        let mut document = self
            .document
            .lock()
            .map_err(|_| SettingsError::Backend(anyhow::anyhow!("settings store lock poisoned")))?;
        *document = Some(value);
        Ok(())
    }
}
