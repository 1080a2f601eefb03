//! Adapters Module
//!
//! The common cache interface and the backends implementing it.
//!
//! # Operations
//! - `set` - Store a value, replacing any previous one
//! - `get` - Read a live value, lazily dropping expired entries
//! - `del` - Remove a key
//! - `check` - Peek at the remaining TTL of a key
//! - `touch` - Reset the TTL of a key
//! - `clear` - Drop every entry at once

mod factory;
mod memory;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{CacheError, Result};
use crate::models::CacheOptions;

pub use factory::create_adapter;
pub use memory::MemoryAdapter;

// == Backend ==
/// Storage backends an adapter can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Process-local HashMap, lost on restart
    Memory,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Backend::Memory),
            _ => Err(CacheError::UnknownBackend(s.to_string())),
        }
    }
}

// == Cache Adapter ==
/// Interface shared by every cache backend.
///
/// Results are always asynchronous so callers can swap backends freely, even
/// when a backend settles immediately (see [`CacheAdapter::is_sync`]). A miss
/// is `Ok(None)`, never an error; only codec failures surface as `Err`.
#[async_trait]
pub trait CacheAdapter: Send + Sync {
    /// Which backend this adapter talks to.
    fn backend(&self) -> Backend;

    /// True when results are settled as soon as the call is polled.
    fn is_sync(&self) -> bool {
        false
    }

    /// Stores `value` under `key`, resolving with the value that was passed in.
    async fn set(&mut self, key: &str, value: Value, options: CacheOptions) -> Result<Value>;

    /// Reads a live value, `None` if absent or expired.
    async fn get(&mut self, key: &str, options: CacheOptions) -> Result<Option<Value>>;

    /// Removes `key`, resolving with the key whether or not it existed.
    async fn del(&mut self, key: &str, options: CacheOptions) -> Result<String>;

    /// Remaining TTL in seconds; `0` for a missing key, `<= 0` for a stale one.
    async fn check(&self, key: &str) -> Result<i64>;

    /// Resets the TTL of `key`, resolving with the TTL used even if nothing was touched.
    async fn touch(&mut self, key: &str, options: CacheOptions) -> Result<u64>;

    /// Drops every entry immediately.
    fn clear(&mut self);
}

#[async_trait]
impl<A: CacheAdapter + ?Sized> CacheAdapter for Box<A> {
    fn backend(&self) -> Backend {
        (**self).backend()
    }

    fn is_sync(&self) -> bool {
        (**self).is_sync()
    }

    async fn set(&mut self, key: &str, value: Value, options: CacheOptions) -> Result<Value> {
        (**self).set(key, value, options).await
    }

    async fn get(&mut self, key: &str, options: CacheOptions) -> Result<Option<Value>> {
        (**self).get(key, options).await
    }

    async fn del(&mut self, key: &str, options: CacheOptions) -> Result<String> {
        (**self).del(key, options).await
    }

    async fn check(&self, key: &str) -> Result<i64> {
        (**self).check(key).await
    }

    async fn touch(&mut self, key: &str, options: CacheOptions) -> Result<u64> {
        (**self).touch(key, options).await
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

// == Typed Helpers ==
/// Typed convenience layer over any adapter, converting through JSON values.
#[async_trait]
pub trait CacheAdapterExt: CacheAdapter {
    /// Serializes `value` and stores it under `key`.
    async fn set_as<T>(&mut self, key: &str, value: &T, options: CacheOptions) -> Result<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| CacheError::Encode(e.to_string()))?;
        self.set(key, value, options).await?;
        Ok(())
    }

    /// Reads `key` and deserializes it into `T`.
    async fn get_as<T>(&mut self, key: &str, options: CacheOptions) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self.get(key, options).await? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| CacheError::Decode(e.to_string())),
            None => Ok(None),
        }
    }
}

impl<A: CacheAdapter> CacheAdapterExt for A {}
