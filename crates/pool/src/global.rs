//! Process-wide pool accessor.
//!
//! The pool lives in a private `OnceCell`; [`ConnectionPool::global`] is the
//! only way to reach it. First access builds it with [`PoolConfig::default`],
//! concurrent first accesses race safely, and it is never torn down.

use once_cell::sync::OnceCell;
use recordpool_core::PoolConfig;

use crate::pool::ConnectionPool;

static GLOBAL_POOL: OnceCell<ConnectionPool> = OnceCell::new();

impl ConnectionPool {
    /// The process-wide pool, created on first call.
    pub fn global() -> &'static ConnectionPool {
        GLOBAL_POOL.get_or_init(|| {
            let config = PoolConfig::default();
            tracing::info!(
                target: "recordpool::pool",
                capacity = config.capacity,
                "Global connection pool created"
            );
            ConnectionPool::with_valid_config(config)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    // The global is shared by every test in this binary, so only identity
    // and configuration are checked here; recycling runs on private pools.
    #[test]
    fn test_global_identity() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| ConnectionPool::global() as *const ConnectionPool as usize))
            .collect();
        let addrs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let first = ConnectionPool::global();
        for addr in addrs {
            assert_eq!(addr, first as *const ConnectionPool as usize);
        }
        assert!(std::ptr::eq(first, ConnectionPool::global()));
        assert_eq!(first.capacity(), PoolConfig::default().capacity);
    }
}
