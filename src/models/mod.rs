//! Caller-facing models
//!
//! Types passed into adapter operations.

pub mod options;

pub use options::CacheOptions;
