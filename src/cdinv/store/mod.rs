//! # Storage Layer
//!
//! The inventory is persisted as a single snapshot: every save writes the
//! whole collection, every load reads the whole collection back. There is no
//! incremental update and no merge.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one binary file on disk
//!   (`CDInventory.dat` by default). Writes go through a temporary file that
//!   is renamed over the target.
//! - [`memory::InMemoryStore`]: Holds the encoded snapshot in memory for
//!   tests. Can be seeded with arbitrary bytes or told to fail writes.
//!
//! ## Snapshot Format
//!
//! A bincode-encoded envelope:
//!
//! ```text
//! ver: u16            (currently 1)
//! records: Vec<Record>
//! ```
//!
//! Bytes that do not decode, or decode with an unknown `ver`, are reported
//! as [`InventoryError::CorruptSnapshot`].

use crate::error::{InventoryError, Result};
use crate::model::{Inventory, Record};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const SNAPSHOT_VERSION: u16 = 1;

/// Abstract interface for whole-inventory persistence.
pub trait SnapshotStore {
    /// Read the full inventory. Must not return a partially decoded result.
    fn load(&self) -> Result<Inventory>;

    /// Replace the persisted snapshot with `inventory`.
    fn save(&mut self, inventory: &Inventory) -> Result<()>;

    /// Human-readable location, used in messages and logs.
    fn location(&self) -> String;
}

#[derive(Serialize)]
struct SnapshotOut<'a> {
    ver: u16,
    records: &'a [Record],
}

#[derive(Deserialize)]
struct SnapshotIn {
    ver: u16,
    records: Vec<Record>,
}

pub fn encode_snapshot(inventory: &Inventory) -> Result<Vec<u8>> {
    let envelope = SnapshotOut {
        ver: SNAPSHOT_VERSION,
        records: inventory.records(),
    };
    Ok(bincode::serialize(&envelope)?)
}

pub fn decode_snapshot(bytes: &[u8], location: &str) -> Result<Inventory> {
    let corrupt = |reason: String| InventoryError::CorruptSnapshot {
        path: location.to_string(),
        reason,
    };

    let envelope: SnapshotIn = bincode::deserialize(bytes).map_err(|e| corrupt(e.to_string()))?;
    if envelope.ver != SNAPSHOT_VERSION {
        return Err(corrupt(format!(
            "unsupported snapshot version {}",
            envelope.ver
        )));
    }
    Ok(envelope.records.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_garbage() {
        let err = decode_snapshot(b"x", "mem").unwrap_err();
        assert!(matches!(err, InventoryError::CorruptSnapshot { .. }));
    }

    #[test]
    fn decode_rejects_unknown_version() {
        let bytes = bincode::serialize(&SnapshotOut {
            ver: 7,
            records: &[],
        })
        .unwrap();
        let err = decode_snapshot(&bytes, "mem").unwrap_err();
        assert!(err.to_string().contains("unsupported snapshot version 7"));
    }

    #[test]
    fn decode_keeps_record_order() {
        let inv: Inventory = vec![Record::new(2, "B", "Y"), Record::new(1, "A", "X")].into();
        let bytes = encode_snapshot(&inv).unwrap();
        assert_eq!(decode_snapshot(&bytes, "mem").unwrap(), inv);
    }
}
