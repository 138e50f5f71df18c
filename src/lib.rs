//! recordpool: a bounded, recycling connection pool over in-memory record
//! stores.
//!
//! ```ignore
//! use recordpool::{ConnectionPool, RecordConnection, RecordStore};
//! use std::sync::Arc;
//!
//! let pool = ConnectionPool::global();
//! let store = Arc::new(RecordStore::new());
//!
//! let conn = pool.acquire(&store);
//! let id = conn.insert("Ala", 20);
//! assert_eq!(conn.find(id).unwrap().age, 20);
//! ```
//!
//! Once the pool holds `capacity` handles it stops building new ones and
//! returns existing handles round-robin, even when the requested store has no
//! handle of its own. See [`ConnectionPool::acquire`].

#![warn(missing_docs)]

pub mod types;

pub use types::*;
