//! Core types for recordpool
//!
//! Shared by every layer of the workspace:
//! - [`Record`] and its identifiers ([`RecordId`], [`StoreId`])
//! - The crate-wide [`Error`] and [`Result`] alias
//! - [`PoolConfig`], the connection pool configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{PoolConfig, DEFAULT_POOL_CAPACITY};
pub use error::{Error, Result};
pub use types::{Record, RecordId, StoreId};
