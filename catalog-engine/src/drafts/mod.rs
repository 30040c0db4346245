//! Draft persistence façade
//!
//! [`DraftStorage`] is the raw redb layer; [`DraftStore`] wraps it with a
//! lazy, memoized handle: the first call opens the database, later calls
//! reuse it, and concurrent first calls cannot race to create duplicate
//! databases (the open happens under one lock). A failed open is not cached,
//! so the next call retries.

mod storage;

pub use storage::{DraftStorage, StorageError, StorageResult};

use parking_lot::Mutex;
use shared::models::Draft;
use std::path::PathBuf;
use std::sync::Arc;

enum Backend {
    File(PathBuf),
    Memory,
}

struct Inner {
    backend: Backend,
    handle: Mutex<Option<DraftStorage>>,
}

/// Lazily initialized draft store handle
#[derive(Clone)]
pub struct DraftStore {
    inner: Arc<Inner>,
}

impl DraftStore {
    /// Store backed by a database file at `path`. The file is not touched
    /// until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend: Backend::File(path.into()),
                handle: Mutex::new(None),
            }),
        }
    }

    /// In-memory store (tests, throwaway sessions)
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Inner {
                backend: Backend::Memory,
                handle: Mutex::new(None),
            }),
        }
    }

    /// Single-flight lazy open: holders of the lock either find the
    /// memoized handle or create it exactly once.
    fn storage(&self) -> StorageResult<DraftStorage> {
        let mut guard = self.inner.handle.lock();
        if let Some(storage) = guard.as_ref() {
            return Ok(storage.clone());
        }
        let storage = match &self.inner.backend {
            Backend::File(path) => DraftStorage::open(path)?,
            Backend::Memory => DraftStorage::open_in_memory()?,
        };
        *guard = Some(storage.clone());
        Ok(storage)
    }

    pub fn save_draft(&self, draft: &Draft) -> StorageResult<Draft> {
        self.storage()?.save_draft(draft)
    }

    pub fn get_draft(&self, id: &str) -> StorageResult<Option<Draft>> {
        self.storage()?.get_draft(id)
    }

    pub fn get_all_drafts(&self) -> StorageResult<Vec<Draft>> {
        self.storage()?.get_all_drafts()
    }

    pub fn latest_draft(&self) -> StorageResult<Option<Draft>> {
        self.storage()?.latest_draft()
    }

    pub fn delete_draft(&self, id: &str) -> StorageResult<()> {
        self.storage()?.delete_draft(id)
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.storage()?.clear()
    }

    pub fn draft_count(&self) -> StorageResult<u64> {
        self.storage()?.draft_count()
    }
}
