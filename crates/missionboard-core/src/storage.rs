//! Durable key-value storage.
//!
//! The mission collection lives under a single key as one JSON string, so
//! the backend only needs whole-value reads and overwrites:
//! - [`RedbStore`]: ACID redb database file in the app data directory
//! - [`MemoryStore`]: in-process map for tests and as a fallback when the
//!   database cannot be opened

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::MissionError;

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// Whole-value string storage keyed by name
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, MissionError>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), MissionError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, MissionError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MissionError> {
        (**self).set(key, value)
    }
}

/// Volatile in-memory store
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, MissionError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MissionError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the database at the given path.
    ///
    /// This will:
    /// - Create the parent directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the key-value table
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MissionError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened key-value database");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<String>, MissionError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MissionError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
