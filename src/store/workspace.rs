use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::WORKSPACE_KEY;

/// The four display regions plus a save timestamp, persisted as one record.
///
/// Field names serialize in camelCase so existing saved data keeps loading.
/// Regions hold whatever markup they showed at save time, placeholder or
/// generated; the load path decides what to restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub essay: String,
    pub improved_essay: String,
    pub citations: String,
    pub grammar_results: String,
    pub timestamp: String,
}

impl Workspace {
    /// Bundle the current region markup with an ISO-8601 timestamp.
    pub fn new(
        essay: String,
        improved_essay: String,
        citations: String,
        grammar_results: String,
    ) -> Self {
        Self {
            essay,
            improved_essay,
            citations,
            grammar_results,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Reads and writes the workspace record under the data directory.
pub struct WorkspaceStore {
    path: PathBuf,
}

impl WorkspaceStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join(format!("{}.json", WORKSPACE_KEY)),
        })
    }

    /// Overwrite the stored record wholesale.
    pub fn save(&self, workspace: &Workspace) -> Result<()> {
        let json = serde_json::to_string_pretty(workspace)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Load the stored record. Missing or corrupted data is not an error:
    /// corruption is logged and treated as an empty store.
    pub fn load(&self) -> Result<Option<Workspace>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&json) {
            Ok(workspace) => Ok(Some(workspace)),
            Err(e) => {
                warn!("skipping corrupted workspace at {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn workspace() -> Workspace {
        Workspace::new(
            "<h1>Essay</h1>".to_string(),
            "<div class=\"placeholder\">empty</div>".to_string(),
            "<div class=\"citation-item\">c</div>".to_string(),
            "<h3>Results</h3>".to_string(),
        )
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = WorkspaceStore::new(dir.path()).unwrap();

        store.save(&workspace()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, workspace_with_timestamp(loaded.timestamp.clone()));
    }

    fn workspace_with_timestamp(timestamp: String) -> Workspace {
        Workspace { timestamp, ..workspace() }
    }

    #[test]
    fn test_missing_store_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = WorkspaceStore::new(dir.path()).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupted_store_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = WorkspaceStore::new(dir.path()).unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_name_matches_storage_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = WorkspaceStore::new(dir.path()).unwrap();
        assert!(store.path().ends_with("essayAI_data.json"));
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let json = serde_json::to_string(&workspace()).unwrap();
        assert!(json.contains("\"improvedEssay\""));
        assert!(json.contains("\"grammarResults\""));
        assert!(json.contains("\"timestamp\""));
    }
}
