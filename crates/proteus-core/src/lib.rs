//! # Proteus Core
//!
//! Shared contracts for the Proteus request binder.
//!
//! This crate defines the pieces every other Proteus crate speaks through:
//!
//! | Type | Role |
//! |------|------|
//! | [`Request`] | Buffered view of one HTTP request (method, URI, headers, body, path params) |
//! | [`Tag`] / [`FieldDescriptor`] | Per-field declarative annotations |
//! | [`Record`] | Capability a bindable destination type implements |
//! | [`ParserCache`] | Per-call scratch space shared by parsers across fields |
//! | [`Parser`] / [`Decoder`] / [`Formatter`] | Plugin contracts for extraction, body decoding and post-processing |
//! | [`Error`] | The binding error taxonomy |
//!
//! Concrete strategies live in `proteus-parser`, `proteus-decoder` and
//! `proteus-formatter`; the orchestration loop lives in the `proteus`
//! facade crate.

#![doc(html_root_url = "https://docs.rs/proteus-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod decoder;
mod error;
mod formatter;
mod params;
mod parser;
mod record;
mod request;
mod tag;

pub use cache::ParserCache;
pub use decoder::{Decoder, Decoders};
pub use error::Error;
pub use formatter::{Formatter, Formatters};
pub use params::Params;
pub use parser::{Parser, Parsers};
pub use record::Record;
pub use request::{Request, RequestBuilder};
pub use tag::{FieldDescriptor, Tag};

// Re-export the coercion layer types plugin authors work with.
pub use proteus_value::{set_value, CoerceError, CoerceFailure, FieldAccess, FieldMut, RawValue};
