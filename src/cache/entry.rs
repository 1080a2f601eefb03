//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// Represents a single stored payload with its absolute expiration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Encoded value as produced by the adapter's codec
    pub payload: Vec<u8>,
    /// Expiration timestamp (Unix seconds)
    pub expire_at: i64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` after `now`.
    pub fn new(payload: Vec<u8>, now: i64, ttl_seconds: u64) -> Self {
        Self {
            payload,
            expire_at: expiry_from(now, ttl_seconds),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expire_at`, so an
    /// entry set with a TTL of N seconds is gone exactly N seconds later.
    pub fn is_expired(&self, now: i64) -> bool {
        self.expire_at <= now
    }

    // == Refresh ==
    /// Moves the expiration to `ttl_seconds` after `now`, whatever the current state.
    pub fn refresh(&mut self, now: i64, ttl_seconds: u64) {
        self.expire_at = expiry_from(now, ttl_seconds);
    }

    // == Time To Live ==
    /// Returns remaining seconds until expiration.
    ///
    /// Zero or negative when the entry is already logically expired.
    pub fn ttl_remaining(&self, now: i64) -> i64 {
        self.expire_at - now
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in whole seconds, truncated.
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

fn expiry_from(now: i64, ttl_seconds: u64) -> i64 {
    let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
    now.saturating_add(ttl)
}
