//! Storage layer for recordpool
//!
//! Provides [`RecordStore`], the in-memory, append-oriented record collection
//! that store handles operate on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::RecordStore;
