use super::{decode_snapshot, encode_snapshot, SnapshotStore};
use crate::error::{InventoryError, Result};
use crate::model::Inventory;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_FILE_NAME: &str = "CDInventory.dat";

/// Snapshot stored in a single binary file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(InventoryError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Inventory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(InventoryError::SnapshotNotFound(self.path.clone()));
            }
            Err(e) => return Err(InventoryError::Io(e)),
        };
        debug!(path = %self.path.display(), bytes = bytes.len(), "read snapshot");

        let inventory = decode_snapshot(&bytes, &self.location())?;
        info!(path = %self.path.display(), records = inventory.len(), "loaded inventory");
        Ok(inventory)
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        let bytes = encode_snapshot(inventory)?;
        self.ensure_parent_dir()?;

        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes).map_err(InventoryError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(InventoryError::Io(e));
        }

        debug!(path = %self.path.display(), bytes = bytes.len(), "wrote snapshot");
        info!(path = %self.path.display(), records = inventory.len(), "saved inventory");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join(DEFAULT_FILE_NAME));
        (dir, store)
    }

    #[test]
    fn missing_file_is_not_found() {
        let (_dir, store) = setup();
        let err = store.load().unwrap_err();
        assert!(matches!(err, InventoryError::SnapshotNotFound(_)));
    }

    #[test]
    fn save_then_load_round_trip() {
        let (_dir, mut store) = setup();
        let inv: Inventory = vec![
            Record::new(1, "Abbey Road", "The Beatles"),
            Record::new(2, "Blue", "Joni Mitchell"),
        ]
        .into();

        store.save(&inv).unwrap();
        assert_eq!(store.load().unwrap(), inv);
    }

    #[test]
    fn empty_inventory_round_trip() {
        let (_dir, mut store) = setup();
        store.save(&Inventory::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let (_dir, mut store) = setup();
        store
            .save(&vec![Record::new(1, "A", "X"), Record::new(2, "B", "Y")].into())
            .unwrap();
        store.save(&vec![Record::new(3, "C", "Z")].into()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.records(), &[Record::new(3, "C", "Z")]);
    }

    #[test]
    fn save_leaves_no_tmp_files() {
        let (dir, mut store) = setup();
        store.save(&vec![Record::new(1, "A", "X")].into()).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn save_creates_missing_parent_dir() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("inv.dat"));
        store.save(&Inventory::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let (_dir, store) = setup();
        fs::write(store.path(), b"definitely not a snapshot").unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, InventoryError::CorruptSnapshot { .. }));
    }
}
