//! Primitives layer for recordpool
//!
//! Store handles: capability objects bound to one record store, through which
//! all CRUD is issued. Handles are stateless facades over the store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod handle;

pub use handle::{HandleId, RecordConnection, StoreHandle};
