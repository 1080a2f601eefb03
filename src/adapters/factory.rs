//! Adapter factory
//!
//! Builds the backend named in the configuration and hands it the shared defaults.

use tracing::info;

use super::{Backend, CacheAdapter, MemoryAdapter};
use crate::config::Config;
use crate::error::Result;

/// Validates `config` and builds the adapter for its backend.
///
/// # Errors
/// - `InvalidConfig` when the defaults are unusable
/// - `UnknownBackend` when no adapter exists for `config.backend`
pub fn create_adapter(config: &Config) -> Result<Box<dyn CacheAdapter>> {
    config.validate()?;
    let backend: Backend = config.backend.parse()?;

    let adapter: Box<dyn CacheAdapter> = match backend {
        Backend::Memory => Box::new(MemoryAdapter::new(config.adapter)),
    };

    info!(
        "Cache adapter created: backend={}, default_ttl={}s, extend_ttl={}",
        backend, config.adapter.default_ttl, config.adapter.extend_ttl
    );
    Ok(adapter)
}
