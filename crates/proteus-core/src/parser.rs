//! The field parser plugin contract.

use indexmap::IndexMap;
use proteus_value::RawValue;

use crate::cache::ParserCache;
use crate::request::Request;
use crate::tag::Tag;

/// Extracts a raw value for one field from one request source.
///
/// A parser owns a single tag keyword (`query`, `header`, and so on) and
/// is consulted for every field whose tag carries that keyword. The first
/// parser in registration order that returns `Some` wins; later parsers
/// are not consulted for that field.
pub trait Parser: Send + Sync {
    /// The tag keyword this parser answers to.
    fn keyword(&self) -> &'static str;

    /// Looks up the value named by `tag` in `request`.
    ///
    /// Returns `None` when the source has no value for the field, which
    /// leaves the field untouched. Parsers may memoize derived request
    /// state in `cache`; it lives for the duration of one parse call.
    fn parse(&self, request: &Request, tag: &Tag, cache: &mut ParserCache) -> Option<RawValue>;
}

/// Parser registry, keyed by keyword, preserving registration order.
///
/// Registering a second parser for an existing keyword replaces the
/// previous one while keeping its position in the consultation order.
pub type Parsers = IndexMap<&'static str, Box<dyn Parser>>;
