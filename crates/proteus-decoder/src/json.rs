//! JSON body decoder.

use proteus_core::{Decoder, Request};
use serde_json::Value;

/// Decodes `application/json` request bodies.
#[derive(Debug, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Creates the decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for JsonDecoder {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn decode(&self, request: &Request) -> anyhow::Result<Value> {
        Ok(serde_json::from_slice(request.body())?)
    }
}
