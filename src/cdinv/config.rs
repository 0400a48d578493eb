use crate::error::{InventoryError, Result};
use crate::store::fs::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "cdinv.json";

/// Configuration for cdinv, read from `cdinv.json` in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Snapshot file; relative paths are taken from the config directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl InventoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(InventoryError::Io)?;
        let config: InventoryConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(InventoryError::Io)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(InventoryError::Io)?;
        Ok(())
    }

    pub fn resolve_data_file<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            config_dir.as_ref().join(&self.data_file)
        }
    }
}
