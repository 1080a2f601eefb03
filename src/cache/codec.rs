//! Codec Module
//!
//! Encode/decode hooks applied to values on their way into and out of a store.

use serde_json::Value;

use crate::error::{CacheError, Result};

// == Codec Trait ==
/// Turns cache values into stored payloads and back.
pub trait Codec: Send + Sync {
    /// Encodes a value before it is stored.
    fn encode(&self, value: &Value) -> Result<Vec<u8>>;

    /// Decodes a stored payload into a value.
    fn decode(&self, payload: &[u8]) -> Result<Value>;
}

// == JSON Codec ==
/// Default codec storing values as JSON bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| CacheError::Encode(e.to_string()))
    }

    fn decode(&self, payload: &[u8]) -> Result<Value> {
        serde_json::from_slice(payload).map_err(|e| CacheError::Decode(e.to_string()))
    }
}
