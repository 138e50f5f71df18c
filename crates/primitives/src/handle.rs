//! Store handle primitive
//!
//! Stateless facade over a [`RecordStore`].
//!
//! # Design
//!
//! A handle holds only an `Arc<RecordStore>` and the id the pool gave it.
//! The binding is fixed at construction and never reassigned. Handles bound
//! to the same store see the same data, because nothing is copied.
//!
//! # Example
//!
//! ```ignore
//! let store = Arc::new(RecordStore::new());
//! let handle = StoreHandle::new(HandleId::new(1), store.clone());
//!
//! let id = handle.insert("Ala", 20);
//! assert_eq!(store.find(id).unwrap().age, 20);
//! ```

use recordpool_core::{Record, RecordId, Result, StoreId};
use recordpool_storage::RecordStore;
use std::fmt;
use std::sync::Arc;

/// CRUD capability over one record store.
///
/// Contracts match [`RecordStore`]: `find` signals absence with `None`,
/// `update` and `delete` with [`recordpool_core::Error::NotFound`], and
/// `insert` never fails.
pub trait RecordConnection: Send + Sync {
    /// Append a record and return its identifier
    fn insert(&self, name: &str, age: u32) -> RecordId;

    /// Look up a record by identifier
    fn find(&self, id: RecordId) -> Option<Record>;

    /// Replace name and age of an existing record
    fn update(&self, id: RecordId, name: &str, age: u32) -> Result<()>;

    /// Remove a record, returning it
    fn delete(&self, id: RecordId) -> Result<Record>;

    /// Snapshot of all records in store order
    fn list_all(&self) -> Vec<Record>;
}

/// Pool-assigned identity of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandleId(u64);

impl HandleId {
    /// Wrap a raw handle number
    pub const fn new(raw: u64) -> Self {
        HandleId(raw)
    }

    /// Raw numeric value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle bound to exactly one [`RecordStore`]
///
/// # Thread Safety
///
/// StoreHandle is Send + Sync. Serialization of concurrent operations is the
/// store's job; the handle adds no locking of its own.
pub struct StoreHandle {
    id: HandleId,
    /// Bound store (shared)
    store: Arc<RecordStore>,
}

impl StoreHandle {
    /// Bind a new handle to `store`
    pub fn new(id: HandleId, store: Arc<RecordStore>) -> Self {
        Self { id, store }
    }

    /// Identity assigned by the pool
    pub fn handle_id(&self) -> HandleId {
        self.id
    }

    /// Identity of the bound store
    pub fn store_id(&self) -> StoreId {
        self.store.id()
    }

    /// The bound store
    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// Check whether this handle operates on `store`
    pub fn is_bound_to(&self, store: &RecordStore) -> bool {
        std::ptr::eq(Arc::as_ptr(&self.store), store)
    }
}

impl RecordConnection for StoreHandle {
    fn insert(&self, name: &str, age: u32) -> RecordId {
        self.store.insert(name, age)
    }

    fn find(&self, id: RecordId) -> Option<Record> {
        self.store.find(id)
    }

    fn update(&self, id: RecordId, name: &str, age: u32) -> Result<()> {
        self.store.update(id, name, age)
    }

    fn delete(&self, id: RecordId) -> Result<Record> {
        self.store.delete(id)
    }

    fn list_all(&self) -> Vec<Record> {
        self.store.list_all()
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("id", &self.id)
            .field("store", &self.store.id())
            .finish()
    }
}
