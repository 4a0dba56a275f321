//! The body decoder plugin contract.

use std::collections::HashMap;

use serde_json::Value;

use crate::request::Request;

/// Decodes a request body of one content type into a document.
///
/// The engine selects a decoder by exact match on the request's
/// content type (parameters after `;` stripped). The decoded [`Value`]
/// is then merged into the record, so a decoder never needs to know the
/// target type.
pub trait Decoder: Send + Sync {
    /// The content type this decoder handles, e.g. `application/json`.
    fn content_type(&self) -> &'static str;

    /// Decodes the request body into a document.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not valid for this content type.
    fn decode(&self, request: &Request) -> anyhow::Result<Value>;
}

/// Decoder registry, keyed by content type.
pub type Decoders = HashMap<&'static str, Box<dyn Decoder>>;
