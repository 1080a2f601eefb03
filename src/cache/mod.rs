//! Cache Module
//!
//! Storage engine behind the in-memory adapter: entries with absolute
//! expiration, lazy TTL expiration, and the codec applied to stored values.

mod codec;
mod entry;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use codec::{Codec, JsonCodec};
pub use entry::{current_timestamp, CacheEntry};
pub use store::CacheStore;
