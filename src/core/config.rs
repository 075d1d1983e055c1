/// Output configuration for writing scenes to disk.
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Controls how `Scene::write` renders and places the output file.
///
/// Loadable from RON; missing fields take their defaults:
///
/// ```ron
/// (pretty: false, create_parent_dirs: true)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    /// Pretty-print the written JSON.
    pub pretty: bool,
    /// Create missing parent directories of the output path.
    pub create_parent_dirs: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            create_parent_dirs: false,
        }
    }
}

impl WriteConfig {
    pub fn parse_ron(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    pub fn load_from_ron(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }
}
