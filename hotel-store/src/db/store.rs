//! JSON collection store
//!
//! Every collection lives in `{data_dir}/{collection}.json` as a JSON array.
//! Reads that fail degrade to an empty collection, failed writes are
//! logged and dropped. The `try_*` variants surface the error instead.
//! Writes overwrite the file in place (no atomic rename).

use crate::core::StoreConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{Customer, Hotel, Reservation};
use std::path::PathBuf;
use thiserror::Error;

/// Persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Hotels,
    Customers,
    Reservations,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Hotels,
        Collection::Customers,
        Collection::Reservations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Hotels => "hotels",
            Collection::Customers => "customers",
            Collection::Reservations => "reservations",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Hotels => "hotels.json",
            Collection::Customers => "customers.json",
            Collection::Reservations => "reservations.json",
        }
    }
}

/// A record stored in exactly one collection, keyed by `id`
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;

    fn id(&self) -> &str;
}

impl Record for Hotel {
    const COLLECTION: Collection = Collection::Hotels;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Customer {
    const COLLECTION: Collection = Collection::Customers;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Reservation {
    const COLLECTION: Collection = Collection::Reservations;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Storage error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {1}: {0}")]
    Io(std::io::Error, String),

    #[error("JSON error in {1}: {0}")]
    Json(serde_json::Error, String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// File-backed collection store
#[derive(Debug, Clone)]
pub struct JsonStore {
    config: StoreConfig,
}

impl JsonStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Full path of a collection file
    pub fn path(&self, collection: Collection) -> PathBuf {
        self.config.data_dir.join(collection.file_name())
    }

    /// Create the data directory and seed missing collection files with `[]`.
    ///
    /// Existing files are left untouched.
    pub fn ensure_storage(&self) -> StoreResult<()> {
        let dir = &self.config.data_dir;
        std::fs::create_dir_all(dir).map_err(|e| StoreError::Io(e, dir.display().to_string()))?;

        for collection in Collection::ALL {
            let path = self.path(collection);
            if !path.exists() {
                std::fs::write(&path, "[]")
                    .map_err(|e| StoreError::Io(e, path.display().to_string()))?;
                tracing::debug!(collection = collection.name(), "Initialized empty collection");
            }
        }
        Ok(())
    }

    /// Read and parse a whole collection
    pub fn try_load<T: Record>(&self) -> StoreResult<Vec<T>> {
        let path = self.path(T::COLLECTION);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| StoreError::Io(e, path.display().to_string()))?;
        serde_json::from_str(&content).map_err(|e| StoreError::Json(e, path.display().to_string()))
    }

    /// Serialize and overwrite a whole collection
    pub fn try_save<T: Record>(&self, records: &[T]) -> StoreResult<()> {
        let path = self.path(T::COLLECTION);
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Json(e, path.display().to_string()))?;
        std::fs::write(&path, content).map_err(|e| StoreError::Io(e, path.display().to_string()))
    }

    /// Load a collection, degrading to empty on any read or parse error
    pub fn load<T: Record>(&self) -> Vec<T> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    collection = T::COLLECTION.name(),
                    error = %e,
                    "Failed to read collection"
                );
                Vec::new()
            }
        }
    }

    /// Save a collection; a failed write is logged and otherwise ignored
    pub fn save<T: Record>(&self, records: &[T]) {
        if let Err(e) = self.try_save(records) {
            tracing::error!(
                collection = T::COLLECTION.name(),
                error = %e,
                "Failed to write collection"
            );
        }
    }

    // ========== Record helpers (load → mutate → save) ==========

    pub fn find<T: Record>(&self, id: &str) -> Option<T> {
        self.load::<T>().into_iter().find(|r| r.id() == id)
    }

    pub fn insert<T: Record>(&self, record: &T) {
        let mut records = self.load::<T>();
        records.push(record.clone());
        self.save(&records);
    }

    /// Apply `f` to the stored record with `id` and persist.
    ///
    /// Returns the updated record, or `None` (nothing written) when no
    /// record matched.
    pub fn modify<T: Record>(&self, id: &str, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut records = self.load::<T>();
        let record = records.iter_mut().find(|r| r.id() == id)?;
        f(record);
        let updated = record.clone();
        self.save(&records);
        Some(updated)
    }

    /// Like [`modify`](Self::modify), but `f` may refuse the change.
    ///
    /// The collection is written only when `f` returns `Ok`. Returns
    /// `None` when no record matched.
    pub fn try_modify<T: Record, E>(
        &self,
        id: &str,
        f: impl FnOnce(&mut T) -> Result<(), E>,
    ) -> Option<Result<T, E>> {
        let mut records = self.load::<T>();
        let record = records.iter_mut().find(|r| r.id() == id)?;
        if let Err(e) = f(record) {
            return Some(Err(e));
        }
        let updated = record.clone();
        self.save(&records);
        Some(Ok(updated))
    }

    /// Drop the record with `id`. Returns `false` (nothing written) when absent.
    pub fn remove<T: Record>(&self, id: &str) -> bool {
        let records = self.load::<T>();
        let before = records.len();
        let remaining: Vec<T> = records.into_iter().filter(|r| r.id() != id).collect();
        if remaining.len() == before {
            return false;
        }
        self.save(&remaining);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(StoreConfig::new(dir.path().join("data")));
        store.ensure_storage().unwrap();
        (dir, store)
    }

    fn customer(id: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "555-1234".to_string(),
        }
    }

    #[test]
    fn test_ensure_storage_seeds_empty_collections() {
        let (_dir, store) = store();
        for collection in Collection::ALL {
            let content = std::fs::read_to_string(store.path(collection)).unwrap();
            assert_eq!(content, "[]");
        }
        assert!(store.load::<Hotel>().is_empty());
    }

    #[test]
    fn test_ensure_storage_keeps_existing_data() {
        let (_dir, store) = store();
        store.insert(&customer("c-1"));
        store.ensure_storage().unwrap();
        assert_eq!(store.load::<Customer>().len(), 1);
    }

    #[test]
    fn test_save_then_load_is_equal() {
        let (_dir, store) = store();
        let records = vec![customer("c-1"), customer("c-2")];
        store.try_save(&records).unwrap();
        let loaded: Vec<Customer> = store.try_load().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let (_dir, store) = store();
        std::fs::write(store.path(Collection::Hotels), "{not json").unwrap();
        assert!(matches!(store.try_load::<Hotel>(), Err(StoreError::Json(..))));
        assert!(store.load::<Hotel>().is_empty());
    }

    #[test]
    fn test_missing_directory_degrades() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(StoreConfig::new(dir.path().join("missing")));
        assert!(matches!(store.try_load::<Customer>(), Err(StoreError::Io(..))));
        assert!(store.load::<Customer>().is_empty());
        // write failure is absorbed
        store.save(&[customer("c-1")]);
        assert!(store.try_save(&[customer("c-1")]).is_err());
    }

    #[test]
    fn test_modify_and_remove() {
        let (_dir, store) = store();
        store.insert(&customer("c-1"));

        let updated = store.modify::<Customer>("c-1", |c| c.name = "Bea".to_string());
        assert_eq!(updated.map(|c| c.name), Some("Bea".to_string()));
        assert!(store.modify::<Customer>("nope", |_| {}).is_none());

        let refused: Option<Result<Customer, &str>> =
            store.try_modify("c-1", |c: &mut Customer| {
                c.name = "Cid".to_string();
                Err("refused")
            });
        assert_eq!(refused, Some(Err("refused")));
        assert_eq!(store.find::<Customer>("c-1").map(|c| c.name), Some("Bea".to_string()));

        assert!(!store.remove::<Customer>("nope"));
        assert!(store.remove::<Customer>("c-1"));
        assert!(store.find::<Customer>("c-1").is_none());
    }
}
