//! Connection pool for recordpool
//!
//! A bounded pool of [`StoreHandle`](recordpool_primitives::StoreHandle)s
//! that recycles handles round-robin once full, plus the process-wide
//! accessor [`ConnectionPool::global`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod global;
pub mod pool;

pub use pool::{ConnectionPool, PoolStats};
