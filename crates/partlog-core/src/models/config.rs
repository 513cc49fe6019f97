//! Configuration structures for the partlog tools.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for partlog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PartlogConfig {
    /// Record store configuration.
    pub store: StoreConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

impl Default for PartlogConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the JSON record log.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("partlog-records.json"),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory that exported CSV files are written to.
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl PartlogConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = PartlogConfig::default();
        config.store.path = PathBuf::from("/tmp/records.json");
        config.save(&path).unwrap();

        let loaded = PartlogConfig::from_file(&path).unwrap();
        assert_eq!(loaded.store.path, PathBuf::from("/tmp/records.json"));
        assert_eq!(loaded.export.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"store": {"path": "log.json"}}"#).unwrap();

        let loaded = PartlogConfig::from_file(&path).unwrap();
        assert_eq!(loaded.store.path, PathBuf::from("log.json"));
        assert_eq!(loaded.export.output_dir, PathBuf::from("."));
    }
}
