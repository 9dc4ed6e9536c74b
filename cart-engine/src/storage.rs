//! Durable key-value slot for the cart snapshot
//!
//! The cart persists as a single JSON-serialized [`CartSnapshot`]
//! under a fixed key, written after every mutation and read once at
//! startup. Persistence sits behind the [`CartStorage`] trait so the
//! store logic can be tested against an in-memory stand-in.
//!
//! # Durability
//!
//! The redb backend commits with immediate durability: the snapshot is
//! persistent as soon as `save` returns, and the database file stays
//! consistent across power loss (copy-on-write with atomic pointer
//! swap).

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::CartSnapshot;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Table holding the cart slot: key = fixed slot name, value =
/// JSON-serialized CartSnapshot
const CART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cart");

/// Fixed key for the single cart slot
const CART_SLOT_KEY: &str = "current";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored value is unparsable or fails its checksum. Recovered by
    /// the store as an empty cart, never surfaced to the user.
    #[error("Corrupt cart snapshot: {0}")]
    Corrupt(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable slot the cart store reads at startup and writes after every
/// mutation
pub trait CartStorage {
    /// Read the stored snapshot. `Ok(None)` when nothing was stored;
    /// `Err(StorageError::Corrupt)` when the stored bytes are
    /// unparsable or fail checksum verification.
    fn load(&self) -> StorageResult<Option<CartSnapshot>>;

    /// Replace the stored snapshot
    fn save(&self, snapshot: &CartSnapshot) -> StorageResult<()>;
}

/// Decode and verify stored snapshot bytes (shared by both backends)
fn decode_snapshot(bytes: &[u8]) -> StorageResult<CartSnapshot> {
    let snapshot: CartSnapshot = serde_json::from_slice(bytes)
        .map_err(|e| StorageError::Corrupt(format!("unparsable snapshot: {e}")))?;
    if !snapshot.verify_checksum() {
        return Err(StorageError::Corrupt("checksum mismatch".to_string()));
    }
    Ok(snapshot)
}

/// Cart slot backed by redb
#[derive(Clone)]
pub struct RedbCartStorage {
    db: Arc<Database>,
}

impl RedbCartStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so reads before the first save
        // don't hit a missing-table error
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl CartStorage for RedbCartStorage {
    fn load(&self) -> StorageResult<Option<CartSnapshot>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CART_TABLE)?;

        match table.get(CART_SLOT_KEY)? {
            Some(value) => decode_snapshot(value.value()).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &CartSnapshot) -> StorageResult<()> {
        let value = serde_json::to_vec(snapshot)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.insert(CART_SLOT_KEY, value.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(lines = snapshot.lines.len(), "Cart snapshot persisted");
        Ok(())
    }
}

/// In-memory stand-in for tests and previews.
///
/// Also usable to inject arbitrary bytes into the slot to exercise the
/// corrupt-snapshot recovery path.
#[derive(Default)]
pub struct MemoryCartStorage {
    slot: Mutex<Option<Vec<u8>>>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the slot with raw bytes (e.g. garbage, to simulate
    /// a corrupted stored value)
    pub fn with_raw(bytes: Vec<u8>) -> Self {
        Self {
            slot: Mutex::new(Some(bytes)),
        }
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> StorageResult<Option<CartSnapshot>> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_deref() {
            Some(bytes) => decode_snapshot(bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &CartSnapshot) -> StorageResult<()> {
        let value = serde_json::to_vec(snapshot)?;
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(value);
        Ok(())
    }
}
