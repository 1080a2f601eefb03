//! Error types for the cache
//!
//! Provides unified error handling using thiserror. A cache miss is never an
//! error; only codec failures and bad configuration surface here.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache adapters.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Value could not be encoded into a stored payload
    #[error("Encode failed: {0}")]
    Encode(String),

    /// Stored payload could not be decoded back into a value
    #[error("Decode failed: {0}")]
    Decode(String),

    /// No adapter is registered under the requested backend name
    #[error("Unknown backend: {0}")]
    UnknownBackend(String),

    /// Configuration rejected during validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
