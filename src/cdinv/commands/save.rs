use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Inventory;
use crate::store::SnapshotStore;

/// Writes the whole inventory, replacing whatever was persisted before.
pub fn run<S: SnapshotStore>(store: &mut S, inventory: &Inventory) -> Result<CmdResult> {
    store.save(inventory)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Data saved to file."));
    Ok(result)
}
