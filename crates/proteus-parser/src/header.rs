//! Header parser.

use proteus_core::{Parser, ParserCache, Request, Tag};
use proteus_value::RawValue;

/// Binds fields tagged `header` from the request headers.
///
/// Header names are matched case-insensitively. A header that appears
/// once yields a string value; repeated headers yield a string list.
/// Values that are not valid UTF-8 are skipped.
#[derive(Debug, Default)]
pub struct HeaderParser;

impl HeaderParser {
    /// Creates the parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Parser for HeaderParser {
    fn keyword(&self) -> &'static str {
        "header"
    }

    fn parse(&self, request: &Request, tag: &Tag, _cache: &mut ParserCache) -> Option<RawValue> {
        let name = tag.get("header")?;
        let mut values = request
            .headers()
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_owned)
            .collect::<Vec<_>>();

        match values.len() {
            0 => None,
            1 => Some(RawValue::Str(values.remove(0))),
            _ => Some(RawValue::StrList(values)),
        }
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderMap;

    use super::*;

    fn parse(headers: HeaderMap, name: &'static str) -> Option<RawValue> {
        let request = Request::builder().headers(headers).build();
        let tag: &'static [(&'static str, &'static str)] = match name {
            "x-request-id" => &[("header", "x-request-id")],
            "accept" => &[("header", "accept")],
            _ => &[("header", "missing")],
        };
        HeaderParser::new().parse(&request, &Tag::from_static(tag), &mut ParserCache::new())
    }

    #[test]
    fn test_single_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "abc-123".parse().unwrap());
        assert_eq!(
            parse(headers, "x-request-id"),
            Some(RawValue::Str("abc-123".to_owned()))
        );
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Request-Id", "abc".parse().unwrap());
        assert_eq!(
            parse(headers, "x-request-id"),
            Some(RawValue::Str("abc".to_owned()))
        );
    }

    #[test]
    fn test_repeated_header_yields_list() {
        let mut headers = HeaderMap::new();
        headers.append("accept", "text/html".parse().unwrap());
        headers.append("accept", "application/json".parse().unwrap());
        assert_eq!(
            parse(headers, "accept"),
            Some(RawValue::StrList(vec![
                "text/html".to_owned(),
                "application/json".to_owned(),
            ]))
        );
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(parse(HeaderMap::new(), "missing"), None);
    }
}
