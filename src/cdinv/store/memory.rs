use super::{decode_snapshot, encode_snapshot, SnapshotStore};
use crate::error::{InventoryError, Result};
use crate::model::Inventory;
use std::io;
use std::path::PathBuf;

const LOCATION: &str = "memory";

/// In-memory snapshot storage for testing and development.
/// Does NOT persist data.
///
/// The snapshot is kept encoded so loads exercise the same codec as
/// [`super::fs::FileStore`].
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<Vec<u8>>,
    fail_writes: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already persisted inventory.
    pub fn with_inventory(inventory: &Inventory) -> Result<Self> {
        Ok(Self {
            snapshot: Some(encode_snapshot(inventory)?),
            ..Self::default()
        })
    }

    /// Start with raw snapshot bytes, valid or not.
    pub fn with_raw_bytes(bytes: Vec<u8>) -> Self {
        Self {
            snapshot: Some(bytes),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with a permission error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Inventory> {
        match &self.snapshot {
            Some(bytes) => decode_snapshot(bytes, LOCATION),
            None => Err(InventoryError::SnapshotNotFound(PathBuf::from(LOCATION))),
        }
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        if self.fail_writes {
            return Err(InventoryError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "write refused",
            )));
        }
        self.snapshot = Some(encode_snapshot(inventory)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use crate::model::{Inventory, Record};

    pub fn beatles() -> Record {
        Record::new(1, "Abbey Road", "The Beatles")
    }

    /// `[{1,"A","X"}, {2,"B","Y"}]`
    pub fn two_records() -> Inventory {
        vec![Record::new(1, "A", "X"), Record::new(2, "B", "Y")].into()
    }

    pub fn numbered(count: i64) -> Inventory {
        (1..=count)
            .map(|i| Record::new(i, format!("Title {}", i), format!("Artist {}", i)))
            .collect()
    }
}
