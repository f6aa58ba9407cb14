//! `hardstock-settings` — persisted UI preferences as an explicit service.
//!
//! Preferences are a plain configuration value loaded and saved through the
//! [`SettingsStore`] seam; no ambient global state. Remote document-store
//! backends implement the trait at the boundary; the in-memory store here
//! covers tests and local use.

pub mod store;

pub use store::{DashboardSettings, InMemorySettingsStore, SettingsError, SettingsStore};
