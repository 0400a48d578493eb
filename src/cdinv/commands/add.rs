use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Inventory, Record};
use tracing::{info, warn};

/// Parses a record ID typed by the user. Only integers above zero qualify.
pub fn parse_id(id_text: &str) -> Option<i64> {
    id_text.parse::<i64>().ok().filter(|id| *id > 0)
}

/// Appends a new record, or reports why `id_text` was rejected.
///
/// A rejected ID is not an error: the result carries an error message and
/// the inventory is left as it was. Title and artist are stored exactly as
/// given, and the ID is not checked against existing records.
pub fn run(inventory: &mut Inventory, id_text: &str, title: &str, artist: &str) -> CmdResult {
    let mut result = CmdResult::default();

    let Some(id) = parse_id(id_text) else {
        warn!(id_text, "rejected record id");
        result.add_message(CmdMessage::error(format!(
            "You entered {}, which is not a valid entry for ID.",
            id_text
        )));
        result.add_message(CmdMessage::error(
            "Please enter a number that is greater than zero.",
        ));
        return result;
    };

    let record = Record::new(id, title, artist);
    inventory.push(record.clone());
    info!(id, total = inventory.len(), "record added");

    result.add_message(CmdMessage::success(format!(
        "Added CD {}: {} (by: {})",
        id, title, artist
    )));
    result.with_affected_records(vec![record])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures;

    #[test]
    fn adds_record_with_parsed_id() {
        let mut inv = Inventory::new();
        let result = run(&mut inv, "1", "Abbey Road", "The Beatles");

        assert_eq!(inv.records(), &[fixtures::beatles()]);
        assert_eq!(result.affected_records, vec![fixtures::beatles()]);
        assert!(result.has_level(MessageLevel::Success));
    }

    #[test]
    fn negative_id_is_rejected_after_valid_add() {
        let mut inv = Inventory::new();
        run(&mut inv, "1", "Abbey Road", "The Beatles");
        let result = run(&mut inv, "-5", "Nope", "Nobody");

        assert_eq!(inv.len(), 1);
        assert!(result.affected_records.is_empty());
        assert!(result.messages[0].content.contains("You entered -5"));
    }

    #[test]
    fn invalid_ids_leave_inventory_unchanged() {
        let mut inv = fixtures::two_records();
        for bad in ["0", "-1", "abc", "", "1.5", "9999999999999999999999", " 3"] {
            let result = run(&mut inv, bad, "T", "A");
            assert!(result.has_level(MessageLevel::Error), "accepted {:?}", bad);
        }
        assert_eq!(inv, fixtures::two_records());
    }

    #[test]
    fn duplicate_ids_are_allowed() {
        let mut inv = fixtures::two_records();
        run(&mut inv, "2", "Again", "Someone");
        assert_eq!(inv.len(), 3);
        assert_eq!(inv.iter().filter(|r| r.id == 2).count(), 2);
    }

    #[test]
    fn fields_are_stored_verbatim() {
        let mut inv = Inventory::new();
        run(&mut inv, "7", "  spaced Title ", "lower case");
        assert_eq!(inv.records()[0].title, "  spaced Title ");
        assert_eq!(inv.records()[0].artist, "lower case");
    }

    #[test]
    fn parse_id_accepts_only_positive() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("+3"), Some(3));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-2"), None);
        assert_eq!(parse_id("x"), None);
    }
}
