//! Per-call options
//!
//! Transient overrides for the adapter defaults. A field that is present wins
//! over the default; an absent one falls back to it.

use serde::Deserialize;

use crate::config::AdapterConfig;

/// Options accepted by every cache operation.
///
/// # Fields
/// - `ttl`: TTL in seconds for this call
/// - `extend_ttl`: whether a read refreshes the TTL of a live entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct CacheOptions {
    #[serde(default)]
    pub ttl: Option<u64>,
    #[serde(default, alias = "extendTtl", alias = "extendttl")]
    pub extend_ttl: Option<bool>,
}

impl CacheOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the TTL override.
    pub fn ttl(mut self, seconds: u64) -> Self {
        self.ttl = Some(seconds);
        self
    }

    /// Sets the extend-on-read override.
    pub fn extend_ttl(mut self, extend: bool) -> Self {
        self.extend_ttl = Some(extend);
        self
    }

    /// TTL for this call, falling back to the adapter default.
    pub fn resolve_ttl(&self, defaults: &AdapterConfig) -> u64 {
        self.ttl.unwrap_or(defaults.default_ttl)
    }

    /// Extend-on-read for this call, falling back to the adapter default.
    pub fn resolve_extend_ttl(&self, defaults: &AdapterConfig) -> bool {
        self.extend_ttl.unwrap_or(defaults.extend_ttl)
    }
}
