use crate::commands::{CmdMessage, CmdResult};
use crate::model::Inventory;
use tracing::{debug, info};

pub fn run(inventory: &mut Inventory, id: i64) -> CmdResult {
    let mut result = CmdResult::default();

    match inventory.remove_first(id) {
        Some(record) => {
            info!(id, total = inventory.len(), "record removed");
            result.add_message(CmdMessage::success("The CD was removed"));
            result.affected_records.push(record);
        }
        None => {
            debug!(id, "no record to remove");
            result.add_message(CmdMessage::warning("Could not find this CD!"));
        }
    }

    result
}
