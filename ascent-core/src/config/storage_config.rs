//! Storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the score database. Default: `ascent.db` in the working
    /// directory.
    pub db_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Returns the effective database path.
    pub fn effective_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("ascent.db"))
    }
}
