use crate::commands::{save, CmdMessage, CmdResult};
use crate::error::{InventoryError, Result};
use crate::model::Inventory;
use crate::store::SnapshotStore;
use tracing::info;

/// Replaces the in-memory inventory with the persisted snapshot.
///
/// The snapshot is decoded in full before anything is swapped in, so on
/// error `inventory` still holds exactly what it held before.
pub fn run<S: SnapshotStore>(store: &S, inventory: &mut Inventory) -> Result<CmdResult> {
    let loaded = store.load()?;
    let previous = inventory.replace(loaded);

    let mut result = CmdResult::default().with_listed_records(inventory.records().to_vec());
    result.add_message(CmdMessage::info(format!(
        "Loaded {} CD(s) from {} ({} discarded from memory)",
        inventory.len(),
        store.location(),
        previous.len()
    )));
    Ok(result)
}

/// Startup load. A missing snapshot is created from the current (empty)
/// inventory instead of failing; every other error is returned.
pub fn bootstrap<S: SnapshotStore>(store: &mut S, inventory: &mut Inventory) -> Result<CmdResult> {
    match run(&*store, inventory) {
        Err(InventoryError::SnapshotNotFound(path)) => {
            info!(path = %path.display(), "no inventory file, creating one");
            save::run(store, inventory)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "Created new inventory file {}",
                store.location()
            )));
            Ok(result)
        }
        other => other,
    }
}
