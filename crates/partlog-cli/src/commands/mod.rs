//! CLI command implementations.

pub mod batch;
pub mod config;
pub mod export;
pub mod process;
pub mod records;
pub mod scan;

use std::path::PathBuf;

use partlog_core::{PartlogConfig, RecordStore};

/// Load the config from an explicit path, the default location, or
/// defaults when no file exists.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PartlogConfig> {
    if let Some(path) = config_path {
        return Ok(PartlogConfig::from_file(std::path::Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(PartlogConfig::from_file(&default_path)?)
    } else {
        Ok(PartlogConfig::default())
    }
}

/// Open the record store, preferring an explicit `--store` path over the
/// configured one.
pub fn open_store(
    store_path: Option<&PathBuf>,
    config: &PartlogConfig,
) -> anyhow::Result<RecordStore> {
    let path = store_path.cloned().unwrap_or_else(|| config.store.path.clone());
    Ok(RecordStore::open(path)?)
}
