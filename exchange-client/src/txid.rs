//! Transaction id source for funding calls
//!
//! Funding requests carry a caller-unique transaction id and the gateway
//! rejects a replayed one. Ids come from an atomic counter seeded
//! with the epoch-nanosecond clock, so they never repeat within a process
//! and do not collide across consecutive runs against the same exchange.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Monotonic source of funding transaction ids
#[derive(Debug)]
pub struct TxIdSource {
    next: AtomicU64,
}

impl TxIdSource {
    /// Create a source seeded from the current wall clock
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self {
            next: AtomicU64::new(seed),
        }
    }

    /// Draw the next id, strictly increasing within the process
    pub fn next(&self) -> i64 {
        // Masked into the positive i64 range the wire format expects
        (self.next.fetch_add(1, Ordering::Relaxed) & i64::MAX as u64) as i64
    }
}

impl Default for TxIdSource {
    fn default() -> Self {
        Self::new()
    }
}
