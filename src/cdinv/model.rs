use serde::{Deserialize, Serialize};

/// One CD in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub artist: String,
}

impl Record {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// The ordered in-memory collection of records.
///
/// Insertion order is display order. IDs are not required to be unique:
/// removal by ID only ever takes out the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<Record>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the first record whose ID matches, scanning in order.
    pub fn remove_first(&mut self, id: i64) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(pos))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Swaps in a whole new set of records, returning the previous ones.
    pub fn replace(&mut self, other: Inventory) -> Inventory {
        std::mem::replace(self, other)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Inventory {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl From<Inventory> for Vec<Record> {
    fn from(inventory: Inventory) -> Self {
        inventory.records
    }
}

impl FromIterator<Record> for Inventory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inventory {
        vec![
            Record::new(1, "A", "X"),
            Record::new(2, "B", "Y"),
            Record::new(1, "C", "Z"),
        ]
        .into()
    }

    #[test]
    fn remove_first_takes_only_first_duplicate() {
        let mut inv = sample();
        let removed = inv.remove_first(1).unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.records()[1], Record::new(1, "C", "Z"));
    }

    #[test]
    fn remove_first_missing_is_none() {
        let mut inv = sample();
        assert!(inv.remove_first(42).is_none());
        assert_eq!(inv, sample());
    }

    #[test]
    fn replace_returns_previous_contents() {
        let mut inv = sample();
        let old = inv.replace(Inventory::new());
        assert!(inv.is_empty());
        assert_eq!(old.len(), 3);
    }
}
