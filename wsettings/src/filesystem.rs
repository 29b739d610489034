use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::store::{SettingsFuture, SettingsStore};
use crate::types::{Example, Settings};

/// Settings store backed by a single JSON snapshot file.
///
/// The on-disk document has two top-level keys, `apiKey` and `examples`,
/// written as a whole on every save. Writes go through a temp file and a
/// rename so a crash mid-save never leaves a torn snapshot.
#[derive(Debug)]
pub struct FilesystemSettingsStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilesystemSettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|error| {
                SettingsError::storage(format!("failed to create settings directory: {error}"))
            })?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    fn load_snapshot(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let bytes = fs::read(&self.path).map_err(|error| {
            SettingsError::storage(format!("failed to read settings file: {error}"))
        })?;
        let persisted = serde_json::from_slice::<PersistedSettings>(&bytes).map_err(|error| {
            SettingsError::serialization(format!("failed to deserialize settings: {error}"))
        })?;

        Ok(persisted.into_settings())
    }

    fn save_snapshot(&self, settings: &Settings) -> Result<(), SettingsError> {
        let persisted = PersistedSettings::from_settings(settings);
        let bytes = serde_json::to_vec_pretty(&persisted).map_err(|error| {
            SettingsError::serialization(format!("failed to serialize settings: {error}"))
        })?;

        write_atomic(&self.path, &bytes)
    }
}

impl SettingsStore for FilesystemSettingsStore {
    fn load<'a>(&'a self) -> SettingsFuture<'a, Result<Settings, SettingsError>> {
        Box::pin(async move {
            let _guard = self
                .lock
                .lock()
                .map_err(|_| SettingsError::storage("filesystem store lock poisoned"))?;
            self.load_snapshot()
        })
    }

    fn save<'a>(&'a self, settings: Settings) -> SettingsFuture<'a, Result<(), SettingsError>> {
        Box::pin(async move {
            let _guard = self
                .lock
                .lock()
                .map_err(|_| SettingsError::storage("filesystem store lock poisoned"))?;
            self.save_snapshot(&settings)
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSettings {
    #[serde(rename = "apiKey", default)]
    api_key: String,
    #[serde(default)]
    examples: Vec<PersistedExample>,
}

impl PersistedSettings {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            examples: settings
                .examples
                .iter()
                .map(|example| PersistedExample {
                    post: example.post.clone(),
                    reply: example.reply.clone(),
                })
                .collect(),
        }
    }

    fn into_settings(self) -> Settings {
        Settings {
            api_key: self.api_key,
            examples: self
                .examples
                .into_iter()
                .map(|example| Example {
                    post: example.post,
                    reply: example.reply,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedExample {
    post: String,
    reply: String,
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SettingsError> {
    let Some(parent) = path.parent() else {
        return Err(SettingsError::storage(
            "settings file missing parent directory",
        ));
    };
    fs::create_dir_all(parent).map_err(|error| {
        SettingsError::storage(format!("failed to create parent directory: {error}"))
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).map_err(|error| {
        SettingsError::storage(format!("failed to write temporary settings file: {error}"))
    })?;

    if path.exists() {
        fs::remove_file(path).map_err(|error| {
            SettingsError::storage(format!("failed to replace existing settings file: {error}"))
        })?;
    }
    fs::rename(&tmp, path).map_err(|error| {
        SettingsError::storage(format!("failed to finalize settings file: {error}"))
    })
}
