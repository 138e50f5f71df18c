//! Connection pool configuration.
//!
//! ```ignore
//! use recordpool_core::PoolConfig;
//!
//! let config = PoolConfig::new().with_capacity(8);
//! config.validate()?;
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of handles the pool creates before it starts recycling.
pub const DEFAULT_POOL_CAPACITY: usize = 3;

/// Options for constructing a connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of live handles
    pub capacity: usize,
}

impl PoolConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of live handles
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check the config is usable.
    ///
    /// A zero capacity is rejected: the pool would have nothing to hand out.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfig {
                reason: "capacity must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_POOL_CAPACITY,
        }
    }
}
