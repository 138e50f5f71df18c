//! In-memory record store
//!
//! An append-oriented collection of [`Record`]s with store-assigned,
//! monotonically increasing identifiers.
//!
//! # Design
//!
//! - Vec: records kept in insertion order, linear lookups
//! - Counter: `next_id` only ever increases, so deleted ids are never reused
//! - RwLock: one writer at a time, readers see a consistent snapshot
//!
//! A store knows nothing about pools or handles. Callers share it through
//! `Arc<RecordStore>`; every handle bound to the same `Arc` sees the same data.

use parking_lot::RwLock;
use recordpool_core::{Error, Record, RecordId, Result, StoreId};

/// Mutable state guarded by the store lock
#[derive(Debug)]
struct StoreState {
    /// Live records in insertion order
    records: Vec<Record>,
    /// Identifier the next insert will receive
    next_id: RecordId,
}

impl StoreState {
    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

/// In-memory record store
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - insert/update/delete: exclusive write lock
/// - find/list_all: shared read lock, results are owned snapshots
///
/// # Example
///
/// ```ignore
/// use recordpool_storage::RecordStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(RecordStore::new());
/// let id = store.insert("Ala", 20);
/// assert_eq!(store.find(id).unwrap().name, "Ala");
/// ```
pub struct RecordStore {
    id: StoreId,
    state: RwLock<StoreState>,
}

impl RecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a store with room for `capacity` records before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: StoreId::new(),
            state: RwLock::new(StoreState {
                records: Vec::with_capacity(capacity),
                next_id: RecordId::FIRST,
            }),
        }
    }

    /// Identity of this store
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }

    /// Identifier the next insert will receive
    pub fn next_id(&self) -> RecordId {
        self.state.read().next_id
    }

    /// Check if a live record carries `id`
    pub fn contains(&self, id: RecordId) -> bool {
        self.state.read().position(id).is_some()
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Append a new record and return its identifier
    ///
    /// Never fails. The identifier is taken from the counter, which is then
    /// advanced, so later inserts always receive larger ids.
    pub fn insert(&self, name: impl Into<String>, age: u32) -> RecordId {
        let mut state = self.state.write();
        let id = state.next_id;
        state.next_id = id.next();

        let record = Record::new(id, name, age);
        tracing::trace!(target: "recordpool::storage", store = %self.id, %record, "Inserted");
        state.records.push(record);
        id
    }

    /// Look up a record by identifier
    ///
    /// Returns a snapshot of the record, or `None` if no live record matches.
    pub fn find(&self, id: RecordId) -> Option<Record> {
        self.state.read().records.iter().find(|r| r.id == id).cloned()
    }

    /// Replace the name and age of an existing record
    ///
    /// Returns [`Error::NotFound`] and leaves the store untouched when no
    /// record carries `id`.
    pub fn update(&self, id: RecordId, name: impl Into<String>, age: u32) -> Result<()> {
        let mut state = self.state.write();
        match state.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.name = name.into();
                record.age = age;
                tracing::trace!(target: "recordpool::storage", store = %self.id, %record, "Updated");
                Ok(())
            }
            None => {
                tracing::trace!(target: "recordpool::storage", store = %self.id, %id, "Update missed");
                Err(Error::NotFound(id))
            }
        }
    }

    /// Remove a record
    ///
    /// Returns the removed record, or [`Error::NotFound`] if none matched.
    /// Remaining records keep their relative order.
    pub fn delete(&self, id: RecordId) -> Result<Record> {
        let mut state = self.state.write();
        match state.position(id) {
            Some(pos) => {
                let removed = state.records.remove(pos);
                tracing::trace!(target: "recordpool::storage", store = %self.id, %id, "Deleted");
                Ok(removed)
            }
            None => {
                tracing::trace!(target: "recordpool::storage", store = %self.id, %id, "Delete missed");
                Err(Error::NotFound(id))
            }
        }
    }

    /// Snapshot of all records in store order
    ///
    /// An empty store yields an empty `Vec`.
    pub fn list_all(&self) -> Vec<Record> {
        self.state.read().records.clone()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("RecordStore")
            .field("id", &self.id)
            .field("records", &state.records.len())
            .field("next_id", &state.next_id)
            .finish()
    }
}
