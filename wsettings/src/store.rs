//! Settings store contract and a basic in-memory implementation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use crate::error::SettingsError;
use crate::types::Settings;

pub type SettingsFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Whole-snapshot persistence: settings are read and written as one value,
/// never field by field. Concurrent writers are last-write-wins.
pub trait SettingsStore: Send + Sync {
    fn load<'a>(&'a self) -> SettingsFuture<'a, Result<Settings, SettingsError>>;

    fn save<'a>(&'a self, settings: Settings) -> SettingsFuture<'a, Result<(), SettingsError>>;
}

#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    snapshot: Mutex<Settings>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            snapshot: Mutex::new(settings),
        }
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load<'a>(&'a self) -> SettingsFuture<'a, Result<Settings, SettingsError>> {
        Box::pin(async move {
            let snapshot = self
                .snapshot
                .lock()
                .map_err(|_| SettingsError::storage("settings store lock poisoned"))?;

            Ok(snapshot.clone())
        })
    }

    fn save<'a>(&'a self, settings: Settings) -> SettingsFuture<'a, Result<(), SettingsError>> {
        Box::pin(async move {
            let mut snapshot = self
                .snapshot
                .lock()
                .map_err(|_| SettingsError::storage("settings store lock poisoned"))?;

            *snapshot = settings;
            Ok(())
        })
    }
}
