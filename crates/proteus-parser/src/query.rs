//! Query string parser.

use proteus_core::{Parser, ParserCache, Request, Tag};
use proteus_value::RawValue;

/// Decoded query pairs, memoized per parse call.
struct QueryPairs(Vec<(String, String)>);

/// Binds fields tagged `query` from the URL query string.
///
/// A key that appears once yields a string value; a key that appears
/// multiple times yields a string list. Percent-encoding and `+` spaces
/// are decoded. The query string is decoded once per parse call and
/// cached for subsequent fields.
#[derive(Debug, Default)]
pub struct QueryParser;

impl QueryParser {
    /// Creates the parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Parser for QueryParser {
    fn keyword(&self) -> &'static str {
        "query"
    }

    fn parse(&self, request: &Request, tag: &Tag, cache: &mut ParserCache) -> Option<RawValue> {
        let name = tag.get("query")?;
        let query = request.query_string().unwrap_or_default();
        let pairs = cache.get_or_insert_with(|| {
            QueryPairs(serde_urlencoded::from_str::<Vec<(String, String)>>(query).unwrap_or_default())
        });

        let mut values = pairs
            .0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect::<Vec<_>>();

        match values.len() {
            0 => None,
            1 => Some(RawValue::Str(values.remove(0))),
            _ => Some(RawValue::StrList(values)),
        }
    }
}
