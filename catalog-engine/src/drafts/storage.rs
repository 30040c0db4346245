//! redb-based storage layer for wizard drafts
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `drafts` | `draft_id` | `Draft` (JSON) | Resumable wizard snapshots |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), so a draft that was reported saved survives a
//! hard page reload or process exit.

use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use shared::models::Draft;
use shared::util::now_millis;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for storing drafts: key = draft id, value = JSON-serialized Draft
const DRAFTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("drafts");

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

    #[error("Draft not found: {0}")]
    DraftNotFound(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Draft storage backed by redb
#[derive(Clone)]
pub struct DraftStorage {
    db: Arc<Database>,
}

impl DraftStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// In-memory database for tests
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DRAFTS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Upsert a draft by id, stamping `updated_at`. Returns the record as
    /// stored. Idempotent per id: saving the same draft twice leaves one
    /// record.
    pub fn save_draft(&self, draft: &Draft) -> StorageResult<Draft> {
        let stored = Draft {
            updated_at: now_millis(),
            ..draft.clone()
        };
        let bytes = serde_json::to_vec(&stored)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DRAFTS_TABLE)?;
            table.insert(stored.id.as_str(), bytes.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(draft_id = %stored.id, step = stored.step, "draft saved");
        Ok(stored)
    }

    /// Fetch a draft by id
    pub fn get_draft(&self, id: &str) -> StorageResult<Option<Draft>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DRAFTS_TABLE)?;
        match table.get(id)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    /// All stored drafts, no ordering guarantee
    pub fn get_all_drafts(&self) -> StorageResult<Vec<Draft>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DRAFTS_TABLE)?;
        let mut drafts = Vec::new();
        for entry in table.iter()? {
            let (_, value) = entry?;
            drafts.push(serde_json::from_slice(value.value())?);
        }
        Ok(drafts)
    }

    /// Most recently updated draft, if any
    pub fn latest_draft(&self) -> StorageResult<Option<Draft>> {
        let mut drafts = self.get_all_drafts()?;
        drafts.sort_by_key(|d| std::cmp::Reverse(d.updated_at));
        Ok(drafts.into_iter().next())
    }

    /// Delete a draft by id. Deleting a missing id is an error so callers
    /// can distinguish "gone" from "never existed".
    pub fn delete_draft(&self, id: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(DRAFTS_TABLE)?;
            table.remove(id)?.is_some()
        };
        write_txn.commit()?;
        if !existed {
            return Err(StorageError::DraftNotFound(id.to_string()));
        }
        tracing::debug!(draft_id = %id, "draft deleted");
        Ok(())
    }

    /// Remove all drafts
    pub fn clear(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DRAFTS_TABLE)?;
            let ids: Vec<String> = table
                .iter()?
                .map(|entry| entry.map(|(key, _)| key.value().to_string()))
                .collect::<Result<_, _>>()?;
            for id in ids {
                table.remove(id.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Number of stored drafts
    pub fn draft_count(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DRAFTS_TABLE)?;
        Ok(table.len()?)
    }
}
