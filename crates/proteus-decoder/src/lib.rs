//! Built-in request body decoders.
//!
//! Each decoder handles one content type and turns the raw body into a
//! JSON document the engine merges into the record:
//!
//! | Decoder | Content type |
//! |---|---|
//! | [`JsonDecoder`] | `application/json` |
//! | [`FormDecoder`] | `application/x-www-form-urlencoded` |
//!
//! Both are registered by the engine's builder by default.

mod form;
mod json;

pub use form::FormDecoder;
pub use json::JsonDecoder;
