//! # API Facade
//!
//! [`InventoryApi`] is the single application-state value: it owns the
//! in-memory [`Inventory`] and the [`SnapshotStore`] it persists to, and
//! dispatches every menu operation to the command layer.
//!
//! The API does no console I/O and holds no business logic of its own.
//! It is generic over the store so the CLI loop can be tested against
//! [`crate::store::memory::InMemoryStore`].

use crate::commands;
use crate::error::Result;
use crate::model::Inventory;
use crate::store::SnapshotStore;

pub struct InventoryApi<S: SnapshotStore> {
    store: S,
    inventory: Inventory,
}

impl<S: SnapshotStore> InventoryApi<S> {
    /// Opens the store, loading the persisted inventory. A missing snapshot
    /// is created empty; a corrupt one is an error.
    pub fn open(mut store: S) -> Result<(Self, commands::CmdResult)> {
        let mut inventory = Inventory::new();
        let result = commands::load::bootstrap(&mut store, &mut inventory)?;
        Ok((Self { store, inventory }, result))
    }

    pub fn add_record(&mut self, id_text: &str, title: &str, artist: &str) -> commands::CmdResult {
        commands::add::run(&mut self.inventory, id_text, title, artist)
    }

    pub fn remove_record(&mut self, id: i64) -> commands::CmdResult {
        commands::delete::run(&mut self.inventory, id)
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.inventory)
    }

    /// Discards in-memory changes and reloads from the store.
    pub fn reload(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, &mut self.inventory)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, &self.inventory)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn open_bootstraps_missing_store() {
        let (api, _) = InventoryApi::open(InMemoryStore::new()).unwrap();
        assert!(api.inventory().is_empty());
        assert!(api.store().has_snapshot());
    }

    #[test]
    fn open_loads_existing_store() {
        let store = InMemoryStore::with_inventory(&fixtures::two_records()).unwrap();
        let (api, _) = InventoryApi::open(store).unwrap();
        assert_eq!(api.inventory(), &fixtures::two_records());
    }

    #[test]
    fn open_fails_on_corrupt_store() {
        let store = InMemoryStore::with_raw_bytes(vec![1, 2, 3]);
        assert!(InventoryApi::open(store).is_err());
    }

    #[test]
    fn reload_discards_unsaved_changes() {
        let (mut api, _) = InventoryApi::open(InMemoryStore::new()).unwrap();
        api.add_record("1", "Abbey Road", "The Beatles");
        assert_eq!(api.inventory().len(), 1);

        api.reload().unwrap();
        assert!(api.inventory().is_empty());
    }

    #[test]
    fn save_persists_current_inventory() {
        let (mut api, _) = InventoryApi::open(InMemoryStore::new()).unwrap();
        api.add_record("1", "A", "X");
        api.add_record("2", "B", "Y");
        api.remove_record(1);
        api.save().unwrap();

        let persisted = api.store().load().unwrap();
        assert_eq!(persisted, api.inventory().clone());
        assert_eq!(persisted.records()[0].id, 2);
    }

    #[test]
    fn failed_save_keeps_memory() {
        let (mut api, _) = InventoryApi::open(InMemoryStore::new()).unwrap();
        api.add_record("3", "C", "Z");
        api.store_mut().fail_writes(true);

        assert!(api.save().is_err());
        assert_eq!(api.inventory().len(), 1);
        assert!(api.store().load().unwrap().is_empty());
    }
}
