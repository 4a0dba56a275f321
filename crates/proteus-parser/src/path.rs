//! Path parameter parser.

use proteus_core::{Parser, ParserCache, Request, Tag};
use proteus_value::RawValue;

/// Binds fields tagged `path` from the request's route parameters.
///
/// Path parameters are captured by the router that matched the request
/// and attached via [`Request::path_params`]. Each parameter is a single
/// string.
#[derive(Debug, Default)]
pub struct PathParser;

impl PathParser {
    /// Creates the parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Parser for PathParser {
    fn keyword(&self) -> &'static str {
        "path"
    }

    fn parse(&self, request: &Request, tag: &Tag, _cache: &mut ParserCache) -> Option<RawValue> {
        let name = tag.get("path")?;
        request
            .path_params()
            .get(name)
            .map(|value| RawValue::Str(value.to_owned()))
    }
}
