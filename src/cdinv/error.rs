use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Inventory file not found: {}", .0.display())]
    SnapshotNotFound(PathBuf),

    #[error("Inventory file {path} is corrupt or unreadable: {reason}")]
    CorruptSnapshot { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
