//! Public types for the recordpool API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Records and identifiers
// ============================================================================

pub use recordpool_core::{Record, RecordId, StoreId};

// ============================================================================
// Errors and configuration
// ============================================================================

pub use recordpool_core::{Error, Result};
pub use recordpool_core::{PoolConfig, DEFAULT_POOL_CAPACITY};

// ============================================================================
// Stores, handles and the pool
// ============================================================================

pub use recordpool_storage::RecordStore;
pub use recordpool_primitives::{HandleId, RecordConnection, StoreHandle};
pub use recordpool_pool::{ConnectionPool, PoolStats};
