//! Configuration Module
//!
//! Handles loading adapter defaults and backend selection from environment variables.

use std::env;

use crate::error::{CacheError, Result};

/// Default TTL in seconds when neither the caller nor the environment sets one.
pub const DEFAULT_TTL: u64 = 300;

/// Backend selected when `CACHE_BACKEND` is unset.
pub const DEFAULT_BACKEND: &str = "memory";

// == Adapter Config ==
/// Defaults shared by every adapter; per-call options override them by presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    /// TTL in seconds applied when a call does not pass one
    pub default_ttl: u64,
    /// Whether reads refresh the TTL of live entries when a call does not say
    pub extend_ttl: bool,
}

impl AdapterConfig {
    pub fn new(default_ttl: u64, extend_ttl: bool) -> Self {
        Self {
            default_ttl,
            extend_ttl,
        }
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL,
            extend_ttl: false,
        }
    }
}

// == Config ==
/// Cache configuration: which backend to build and the defaults it receives.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend name, resolved by [`crate::adapters::create_adapter`]
    pub backend: String,
    /// Defaults handed to the adapter at construction
    pub adapter: AdapterConfig,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_BACKEND` - Backend name (default: memory)
    /// - `CACHE_TTL` - Default TTL in seconds (default: 300)
    /// - `CACHE_EXTEND_TTL` - Refresh TTL on reads, `true`/`false`/`1`/`0` (default: false)
    pub fn from_env() -> Self {
        Self {
            backend: env::var("CACHE_BACKEND")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BACKEND.to_string()),
            adapter: AdapterConfig {
                default_ttl: env::var("CACHE_TTL")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TTL),
                extend_ttl: env::var("CACHE_EXTEND_TTL")
                    .ok()
                    .and_then(|v| parse_flag(&v))
                    .unwrap_or(false),
            },
        }
    }

    /// Rejects settings no adapter can honor.
    pub fn validate(&self) -> Result<()> {
        if self.adapter.default_ttl == 0 {
            return Err(CacheError::InvalidConfig(
                "default ttl must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            adapter: AdapterConfig::default(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
