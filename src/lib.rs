//! Cacheup - A pluggable key-value cache
//!
//! One async interface (set/get/del/check/touch/clear) over interchangeable
//! backends, with TTL expiration and optional TTL extension on reads.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use adapters::{create_adapter, Backend, CacheAdapter, CacheAdapterExt, MemoryAdapter};
pub use cache::{Codec, JsonCodec};
pub use config::{AdapterConfig, Config};
pub use error::{CacheError, Result};
pub use models::CacheOptions;
