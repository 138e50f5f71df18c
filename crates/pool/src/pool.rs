//! Bounded, FIFO-recycling connection pool
//!
//! Hands out [`StoreHandle`]s. Below capacity every `acquire` builds a new
//! handle for the requested store. At capacity the pool stops building and
//! cycles through the handles it already has, oldest first.
//!
//! # Recycling ignores the requested store
//!
//! Once the pool is full, `acquire(store)` returns the handle at the front of
//! the queue whatever store it is bound to. A caller asking for a store that
//! has no handle in the pool receives a handle for a *different* store. This
//! is the pool's documented contract: callers that need a specific store
//! after the pool fills must check [`StoreHandle::is_bound_to`]. A mismatch
//! is logged at `warn`.
//!
//! # Thread Safety
//!
//! The queue sits behind one mutex. Building a handle, or popping the front
//! and pushing it to the back, happens under a single guard.

use parking_lot::Mutex;
use recordpool_core::{PoolConfig, Result};
use recordpool_primitives::{HandleId, StoreHandle};
use recordpool_storage::RecordStore;
use std::collections::VecDeque;
use std::sync::Arc;

/// Point-in-time pool counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    /// Maximum number of live handles
    pub capacity: usize,
    /// Handles built so far (never exceeds capacity)
    pub created: u64,
    /// Acquires served by recycling an existing handle
    pub recycled: u64,
}

impl PoolStats {
    /// Total acquires served
    pub fn acquires(&self) -> u64 {
        self.created + self.recycled
    }
}

#[derive(Debug)]
struct PoolState {
    /// Live handles; front is recycled next
    handles: VecDeque<Arc<StoreHandle>>,
    created: u64,
    recycled: u64,
}

/// Connection pool of store handles
///
/// # Example
///
/// ```ignore
/// use recordpool_pool::ConnectionPool;
///
/// let pool = ConnectionPool::global();
/// let store = Arc::new(RecordStore::new());
/// let handle = pool.acquire(&store);
/// handle.insert("Ala", 20);
/// ```
pub struct ConnectionPool {
    capacity: usize,
    state: Mutex<PoolState>,
}

impl ConnectionPool {
    /// Create a pool from `config`
    ///
    /// Fails only if the config does not validate.
    pub fn new(config: PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    /// Build from a config already known to validate
    pub(crate) fn with_valid_config(config: PoolConfig) -> Self {
        Self {
            capacity: config.capacity,
            state: Mutex::new(PoolState {
                handles: VecDeque::with_capacity(config.capacity),
                created: 0,
                recycled: 0,
            }),
        }
    }

    /// Get a handle for `store`
    ///
    /// Below capacity, binds a new handle to `store` and enqueues it at the
    /// back. At capacity, moves the front handle to the back and returns it,
    /// bound to whatever store it was built for.
    pub fn acquire(&self, store: &Arc<RecordStore>) -> Arc<StoreHandle> {
        let mut state = self.state.lock();

        if state.handles.len() >= self.capacity {
            if let Some(handle) = state.handles.pop_front() {
                state.handles.push_back(Arc::clone(&handle));
                state.recycled += 1;

                tracing::debug!(
                    target: "recordpool::pool",
                    handle = %handle.handle_id(),
                    store = %handle.store_id(),
                    "Reusing existing connection"
                );
                if !handle.is_bound_to(store) {
                    tracing::warn!(
                        target: "recordpool::pool",
                        handle = %handle.handle_id(),
                        requested = %store.id(),
                        bound = %handle.store_id(),
                        "Recycled connection is bound to a different store"
                    );
                }
                return handle;
            }
        }

        state.created += 1;
        let handle = Arc::new(StoreHandle::new(
            HandleId::new(state.created),
            Arc::clone(store),
        ));
        state.handles.push_back(Arc::clone(&handle));
        tracing::debug!(
            target: "recordpool::pool",
            handle = %handle.handle_id(),
            store = %store.id(),
            live = state.handles.len(),
            "New connection created"
        );
        handle
    }

    /// Maximum number of live handles
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.state.lock().handles.len()
    }

    /// Check if no handle has been built yet
    pub fn is_empty(&self) -> bool {
        self.state.lock().handles.is_empty()
    }

    /// Check if the pool has stopped building handles
    pub fn is_full(&self) -> bool {
        self.state.lock().handles.len() >= self.capacity
    }

    /// Current counters
    pub fn stats(&self) -> PoolStats {
        let state = self.state.lock();
        PoolStats {
            capacity: self.capacity,
            created: state.created,
            recycled: state.recycled,
        }
    }
}

impl Default for ConnectionPool {
    fn default() -> Self {
        Self::with_valid_config(PoolConfig::default())
    }
}

impl std::fmt::Debug for ConnectionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("ConnectionPool")
            .field("capacity", &stats.capacity)
            .field("created", &stats.created)
            .field("recycled", &stats.recycled)
            .finish()
    }
}
