use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::{DEFAULT_MODEL, SETTINGS_KEY};

/// User-editable runtime settings from the settings dialog.
///
/// The API key is a placeholder: nothing dials out today, but the record
/// survives so a future remote backend picks it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub api_key: String,
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Reads and writes the settings record under the data directory.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(format!("{}.json", SETTINGS_KEY)),
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load settings, falling back to defaults when absent or corrupted.
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            return Settings::default();
        }

        match fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("skipping corrupted settings at {}: {}", self.path.display(), e);
                Settings::default()
            }),
            Err(e) => {
                warn!("could not read settings at {}: {}", self.path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
