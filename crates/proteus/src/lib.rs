//! # Proteus
//!
//! **Pluggable HTTP request-to-struct binding**
//!
//! Proteus fills annotated struct fields from the parts of an HTTP
//! request: query string, headers, cookies, route parameters, and the
//! request body. Everything is a plugin:
//!
//! - **Parsers** pull raw values out of a request source
//! - **Decoders** turn a request body into a document
//! - **Formatters** post-process bound values in place
//!
//! ## Quick Start
//!
//! ```rust
//! use proteus::{Proteus, Record, Request};
//!
//! #[derive(Default, Record)]
//! struct SearchRequest {
//!     #[proteus(query = "q", string = "trim")]
//!     query: String,
//!     #[proteus(header = "x-request-id")]
//!     request_id: String,
//!     #[proteus(query = "page")]
//!     page: u32,
//! }
//!
//! # fn main() -> Result<(), proteus::Error> {
//! let engine = Proteus::builder().build();
//! let request = Request::builder()
//!     .uri("/search?q=%20rust%20&page=2".parse().unwrap())
//!     .header("x-request-id", "abc-123")
//!     .build();
//!
//! let mut search = SearchRequest::default();
//! engine.parse(&request, &mut search)?;
//!
//! assert_eq!(search.query, "rust");
//! assert_eq!(search.request_id, "abc-123");
//! assert_eq!(search.page, 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! A parse call runs a fixed pipeline:
//!
//! ```text
//! Request → Body Decode → Field Walk → Formatters → AfterParse Hook
//! ```
//!
//! The body decode merges a decoded document into the record first; the
//! field walk then visits each tagged field in declaration order,
//! consulting parsers in registration order until one produces a value.
//! Fields that already hold a value are skipped by default
//! (`skip_filled`), which gives request sources a natural precedence:
//! body first, then whichever parser is registered earlier.

#![doc(html_root_url = "https://docs.rs/proteus/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod builder;
mod engine;

// Re-export the engine surface
pub use builder::ProteusBuilder;
pub use engine::Proteus;

// Re-export core contracts and types
pub use proteus_core::{
    CoerceError, CoerceFailure, Decoder, Decoders, Error, FieldAccess, FieldDescriptor, FieldMut,
    Formatter,
    Formatters, Params, Parser, ParserCache, Parsers, RawValue, Record, Request, RequestBuilder,
    Tag, set_value,
};

// Re-export the derive macro
pub use proteus_derive::Record;

// Re-export built-in plugins under their own namespaces
pub use proteus_decoder as decoder;
pub use proteus_formatter as formatter;
pub use proteus_parser as parser;

// Support crates the derive macro's generated code leans on.
#[doc(hidden)]
pub use anyhow;
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;
