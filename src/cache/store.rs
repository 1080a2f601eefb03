//! Cache Store Module
//!
//! Synchronous cache engine: a HashMap of encoded payloads with lazy TTL
//! expiration. Every time-dependent method takes the current timestamp so the
//! adapter decides when "now" is read.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key to entry mapping with lazy expiration on the read path.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a payload expiring `ttl` seconds after `now`.
    ///
    /// Any existing entry under `key` is replaced, including its expiration.
    pub fn set(&mut self, key: String, payload: Vec<u8>, ttl: u64, now: i64) {
        self.entries.insert(key, CacheEntry::new(payload, now, ttl));
    }

    // == Get ==
    /// Looks up a live payload.
    ///
    /// An entry found expired is removed and reported as a miss. A live entry
    /// has its expiration moved to `now + ttl` when `extend` is set.
    pub fn get(&mut self, key: &str, ttl: u64, extend: bool, now: i64) -> Option<&[u8]> {
        let expired = match self.entries.get_mut(key) {
            None => return None,
            Some(entry) if entry.is_expired(now) => true,
            Some(entry) => {
                if extend {
                    entry.refresh(now, ttl);
                }
                false
            }
        };

        if expired {
            self.entries.remove(key);
            debug!(key, "Lazily removed expired entry");
            return None;
        }

        self.entries.get(key).map(|entry| entry.payload.as_slice())
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Check ==
    /// Returns seconds until `key` expires, or `0` when there is no entry.
    ///
    /// Does not sweep: a stale entry that no read has removed yet reports a
    /// zero or negative value.
    pub fn check(&self, key: &str, now: i64) -> i64 {
        self.entries
            .get(key)
            .map_or(0, |entry| entry.ttl_remaining(now))
    }

    // == Touch ==
    /// Resets the expiration of `key` to `now + ttl`, live or not.
    ///
    /// Returns whether an entry was there to touch.
    pub fn touch(&mut self, key: &str, ttl: u64, now: i64) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.refresh(now, ttl);
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Replaces the mapping with an empty one. Returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        std::mem::take(&mut self.entries).len()
    }

    // == Length ==
    /// Returns the number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
