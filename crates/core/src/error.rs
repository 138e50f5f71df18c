//! Error types for recordpool
//!
//! Absence of a record is an expected outcome, so it is returned as
//! [`Error::NotFound`] rather than raised as a panic. Lookups that only read
//! use `Option` instead.

use crate::types::RecordId;
use thiserror::Error;

/// Errors returned by store, handle and pool operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No live record carries the given identifier
    #[error("record with id {0} not found")]
    NotFound(RecordId),

    /// Pool configuration rejected at construction time
    #[error("invalid pool configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration
        reason: String,
    },
}

impl Error {
    /// Whether this error signals a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;
