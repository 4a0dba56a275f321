//! Cookie parser.

use std::collections::HashMap;

use proteus_core::{Parser, ParserCache, Request, Tag};
use proteus_value::RawValue;

/// Parsed cookie jar, memoized per parse call.
struct CookieJar(HashMap<String, String>);

impl CookieJar {
    fn parse(header: &str) -> Self {
        let mut jar = HashMap::new();
        for pair in header.split(';') {
            let pair = pair.trim();
            if let Some((name, value)) = pair.split_once('=') {
                let value = value.trim_matches('"');
                jar.insert(name.to_owned(), value.to_owned());
            }
        }
        Self(jar)
    }
}

/// Binds fields tagged `cookie` from the request's `Cookie` header.
///
/// The header is parsed once per parse call and cached for subsequent
/// fields. Quoted cookie values are unquoted; malformed pairs without an
/// `=` are skipped.
#[derive(Debug, Default)]
pub struct CookieParser;

impl CookieParser {
    /// Creates the parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Parser for CookieParser {
    fn keyword(&self) -> &'static str {
        "cookie"
    }

    fn parse(&self, request: &Request, tag: &Tag, cache: &mut ParserCache) -> Option<RawValue> {
        let name = tag.get("cookie")?;
        let header = request.header("cookie").unwrap_or_default();
        let jar = cache.get_or_insert_with(|| CookieJar::parse(header));
        jar.0.get(name).cloned().map(RawValue::Str)
    }
}
