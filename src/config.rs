//! Bridge Configuration
//!
//! Where the remote collection lives and where local slots are persisted.
//! Loaded from a JSON file when present; defaults point at the public demo
//! API.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_DATA_DIR: &str = "todo-bridge-data";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Base URL of the remote collection
    pub base_url: String,
    /// Directory holding the persisted key-value slots
    pub data_dir: PathBuf,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl BridgeConfig {
    /// Load configuration; an absent or unreadable file yields defaults
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::error!("failed to parse config {:?}, using defaults: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                log::error!("failed to read config {:?}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }

    /// Persist configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> DomainResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::Storage(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                log::error!("failed to create config dir {:?}: {}", parent, e);
                DomainError::Storage("failed to save config".to_string())
            })?;
        }
        std::fs::write(path, json).map_err(|e| {
            log::error!("failed to write config {:?}: {}", path, e);
            DomainError::Storage("failed to save config".to_string())
        })
    }
}
