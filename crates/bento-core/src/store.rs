//! Layout store: persists a grid's order under one namespaced key.
//!
//! The store never fails its caller. Write failures are logged and leave
//! the in-memory order as the only source of truth for the session; a
//! missing, unreadable or malformed payload reads as "no saved layout".

use crate::model::TileGrid;
use crate::record::LayoutRecord;
use crate::storage::LayoutStorage;

pub struct LayoutStore<S> {
    storage: S,
    key: String,
}

impl<S: LayoutStorage> LayoutStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The namespaced storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Persist the grid's current order, overwriting any prior record.
    /// Returns `false` if nothing was written.
    pub fn save(&mut self, grid: &TileGrid) -> bool {
        self.save_record(&LayoutRecord::capture(grid))
    }

    /// Persist a record wholesale.
    pub fn save_record(&mut self, record: &LayoutRecord) -> bool {
        let json = match record.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("layout `{}` not saved: {e}", self.key);
                return false;
            }
        };
        match self.storage.set(&self.key, &json) {
            Ok(()) => {
                log::debug!("saved layout `{}` ({} tiles)", self.key, record.order.len());
                true
            }
            Err(e) => {
                log::warn!("layout `{}` not saved: {e}", self.key);
                false
            }
        }
    }

    /// Read the saved record, if there is a usable one.
    pub fn load(&self) -> Option<LayoutRecord> {
        let json = match self.storage.get(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("layout `{}` not loaded: {e}", self.key);
                return None;
            }
        };
        match LayoutRecord::from_json(&json) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("ignoring saved layout `{}`: {e}", self.key);
                None
            }
        }
    }

    /// Delete the saved record. Restoring the default order is the
    /// caller's job.
    pub fn reset(&mut self) -> bool {
        match self.storage.remove(&self.key) {
            Ok(()) => {
                log::debug!("cleared layout `{}`", self.key);
                true
            }
            Err(e) => {
                log::warn!("layout `{}` not cleared: {e}", self.key);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::TileId;
    use crate::model::TileKey;
    use crate::storage::{MemoryStorage, StorageError};
    use pretty_assertions::assert_eq;

    /// Storage that is present but refuses every operation.
    struct BrokenStorage;

    impl LayoutStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::QuotaExceeded)
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn save_writes_json_under_key() {
        let mut store = LayoutStore::new(MemoryStorage::new(), "bento-tile-order");
        let mut grid = TileGrid::from_ids(["A", "B", "C", "D"]);
        grid.relocate(TileKey(2), TileKey(0));
        assert!(store.save(&grid));
        assert_eq!(
            store.storage().raw("bento-tile-order"),
            Some(r#"["C","A","B","D"]"#)
        );
    }

    #[test]
    fn save_overwrites_wholesale() {
        let mut store = LayoutStore::new(MemoryStorage::new(), "k");
        store.save(&TileGrid::from_ids(["A", "B", "C"]));
        store.save(&TileGrid::from_ids(["X"]));
        assert_eq!(store.storage().raw("k"), Some(r#"["X"]"#));
    }

    #[test]
    fn load_missing_is_none() {
        let store = LayoutStore::new(MemoryStorage::new(), "k");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_malformed_is_none() {
        let mut storage = MemoryStorage::new();
        storage.set("k", "{not json").unwrap();
        let store = LayoutStore::new(storage, "k");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_wrong_type_is_none() {
        let mut storage = MemoryStorage::new();
        storage.set("k", r#"{"order":["a","b"]}"#).unwrap();
        let store = LayoutStore::new(storage, "k");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn load_returns_saved_order() {
        let mut store = LayoutStore::new(MemoryStorage::new(), "k");
        store.save(&TileGrid::from_ids(["B", "A"]));
        let record = store.load().unwrap();
        assert_eq!(
            record.order,
            vec![TileId::intern("B"), TileId::intern("A")]
        );
    }

    #[test]
    fn reset_then_load_is_none() {
        let mut store = LayoutStore::new(MemoryStorage::new(), "k");
        store.save(&TileGrid::from_ids(["A"]));
        assert!(store.reset());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn namespaces_do_not_collide() {
        let mut main = LayoutStore::new(MemoryStorage::new(), "bento-tile-order");
        main.save(&TileGrid::from_ids(["A", "B"]));
        let storage = main.storage().clone();
        let widgets = LayoutStore::new(storage, "bento-layout");
        assert_eq!(widgets.load(), None);
    }

    #[test]
    fn broken_storage_never_fails_the_caller() {
        let mut store = LayoutStore::new(BrokenStorage, "k");
        assert!(!store.save(&TileGrid::from_ids(["A"])));
        assert_eq!(store.load(), None);
        assert!(!store.reset());
    }
}
