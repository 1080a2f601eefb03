//! In-memory adapter
//!
//! Process-local backend over [`CacheStore`]. Each operation runs its logic to
//! completion on first poll and then yields once to the scheduler before
//! resolving, so callers observe the same asynchronous contract as remote
//! backends without any real I/O.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};

use super::{Backend, CacheAdapter};
use crate::cache::{current_timestamp, CacheStore, Codec, JsonCodec};
use crate::config::AdapterConfig;
use crate::error::Result;
use crate::models::CacheOptions;

// == Memory Adapter ==
/// Cache adapter keeping encoded entries in a HashMap.
#[derive(Debug)]
pub struct MemoryAdapter<C = JsonCodec> {
    /// Entry storage
    store: CacheStore,
    /// Defaults for ttl and extend-on-read
    config: AdapterConfig,
    /// Encode/decode hooks for stored values
    codec: C,
}

impl MemoryAdapter<JsonCodec> {
    /// Creates an empty adapter storing values as JSON.
    pub fn new(config: AdapterConfig) -> Self {
        Self::with_codec(config, JsonCodec)
    }
}

impl<C: Codec> MemoryAdapter<C> {
    /// Creates an empty adapter with a custom codec.
    pub fn with_codec(config: AdapterConfig, codec: C) -> Self {
        Self {
            store: CacheStore::new(),
            config,
            codec,
        }
    }

    /// Defaults this adapter was built with.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Number of stored entries, including stale ones not yet swept.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for MemoryAdapter<JsonCodec> {
    fn default() -> Self {
        Self::new(AdapterConfig::default())
    }
}

/// Resolves with `value` after giving the scheduler one turn.
async fn settle<T>(value: T) -> T {
    tokio::task::yield_now().await;
    value
}

#[async_trait]
impl<C: Codec> CacheAdapter for MemoryAdapter<C> {
    fn backend(&self) -> Backend {
        Backend::Memory
    }

    fn is_sync(&self) -> bool {
        true
    }

    async fn set(&mut self, key: &str, value: Value, options: CacheOptions) -> Result<Value> {
        let ttl = options.resolve_ttl(&self.config);

        let result = match self.codec.encode(&value) {
            Ok(payload) => {
                self.store
                    .set(key.to_string(), payload, ttl, current_timestamp());
                trace!(key, ttl, "Stored entry");
                Ok(value)
            }
            Err(e) => Err(e),
        };

        settle(result).await
    }

    async fn get(&mut self, key: &str, options: CacheOptions) -> Result<Option<Value>> {
        let ttl = options.resolve_ttl(&self.config);
        let extend = options.resolve_extend_ttl(&self.config);

        let result = match self.store.get(key, ttl, extend, current_timestamp()) {
            Some(payload) => self.codec.decode(payload).map(Some),
            None => Ok(None),
        };
        trace!(key, hit = matches!(result, Ok(Some(_))), "Looked up entry");

        settle(result).await
    }

    async fn del(&mut self, key: &str, _options: CacheOptions) -> Result<String> {
        if self.store.delete(key) {
            trace!(key, "Deleted entry");
        }

        settle(Ok(key.to_string())).await
    }

    async fn check(&self, key: &str) -> Result<i64> {
        let remaining = self.store.check(key, current_timestamp());

        settle(Ok(remaining)).await
    }

    async fn touch(&mut self, key: &str, options: CacheOptions) -> Result<u64> {
        let ttl = options.resolve_ttl(&self.config);

        if self.store.touch(key, ttl, current_timestamp()) {
            trace!(key, ttl, "Touched entry");
        } else {
            debug!(key, "Touch on missing key ignored");
        }

        settle(Ok(ttl)).await
    }

    fn clear(&mut self) {
        let dropped = self.store.clear();
        debug!(dropped, "Cleared memory adapter");
    }
}
