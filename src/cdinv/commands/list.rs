use crate::commands::CmdResult;
use crate::model::Inventory;

pub fn run(inventory: &Inventory) -> CmdResult {
    CmdResult::default().with_listed_records(inventory.records().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures;

    #[test]
    fn lists_in_insertion_order() {
        let inv = fixtures::numbered(3);
        let result = run(&inv);
        let ids: Vec<i64> = result.listed_records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_inventory_lists_nothing() {
        assert!(run(&Inventory::new()).listed_records.is_empty());
    }
}
