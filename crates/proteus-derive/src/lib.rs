//! Derive macro for proteus bindable records.
//!
//! This crate provides `#[derive(Record)]`, which generates the field
//! metadata and accessors the proteus engine needs to bind an HTTP
//! request into a struct.
//!
//! # Overview
//!
//! Fields opt into binding with a `#[proteus(...)]` attribute whose
//! name/value pairs become the field's tag. Untagged fields are left
//! alone by the field walk but still participate in body merging.
//!
//! # Example
//!
//! ```rust,ignore
//! use proteus::Record;
//!
//! #[derive(Default, Record)]
//! struct SearchRequest {
//!     #[proteus(query = "q", string = "trim")]
//!     query: String,
//!     #[proteus(header = "x-request-id")]
//!     request_id: String,
//!     #[proteus(path = "page")]
//!     page: u32,
//! }
//! ```
//!
//! # Macro Expansion
//!
//! The derive generates an implementation of the `Record` trait:
//!
//! 1. A `'static` descriptor table, one entry per field in declaration
//!    order, carrying each field's tag pairs
//! 2. Index-based emptiness checks and mutable field views for every
//!    tagged field
//! 3. A body-application method that merges a decoded JSON document
//!    into the struct, key by key
//! 4. An optional delegation to a post-parse hook
//!
//! # Attributes
//!
//! Container level:
//!
//! - `#[proteus(no_body)]`: the record rejects decoded request bodies
//! - `#[proteus(after_parse = "method")]`: delegate the post-parse
//!   hook to the named inherent method
//!
//! Field level:
//!
//! - `#[proteus(keyword = "value", ...)]`: tag pairs consulted by
//!   parsers and formatters
//! - `#[proteus(skip)]`: exclude the field from binding entirely

mod parse;
mod record;

use proc_macro::TokenStream;

/// Derives the `Record` trait for a named-field struct.
///
/// See the crate documentation for the attribute grammar. The target
/// struct's tagged fields must have types the engine knows how to
/// write: strings, booleans, fixed-width integers, floats, string
/// vectors, JSON values, string maps, and `Option`/`Box` wrappers of
/// those.
///
/// Fields mentioned in a decoded request body are deserialized with
/// `serde`, so body-filled fields need `serde::Deserialize`.
#[proc_macro_derive(Record, attributes(proteus))]
pub fn derive_record(item: TokenStream) -> TokenStream {
    record::expand_record(item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
