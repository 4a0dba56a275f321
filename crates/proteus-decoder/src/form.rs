//! URL-encoded form body decoder.

use proteus_core::{Decoder, Request};
use serde_json::{Map, Value};

/// Decodes `application/x-www-form-urlencoded` request bodies.
///
/// Form pairs become a JSON object. A key that appears once maps to a
/// string; a repeated key maps to an array of strings, in body order.
#[derive(Debug, Default)]
pub struct FormDecoder;

impl FormDecoder {
    /// Creates the decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for FormDecoder {
    fn content_type(&self) -> &'static str {
        "application/x-www-form-urlencoded"
    }

    fn decode(&self, request: &Request) -> anyhow::Result<Value> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(request.body())?;

        let mut document = Map::new();
        for (key, value) in pairs {
            match document.get_mut(&key) {
                None => {
                    document.insert(key, Value::String(value));
                }
                Some(Value::Array(items)) => items.push(Value::String(value)),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, Value::String(value)]);
                }
            }
        }
        Ok(Value::Object(document))
    }
}
