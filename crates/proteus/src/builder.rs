//! Engine configuration.

use proteus_core::{Decoder, Decoders, Formatter, Formatters, Parser, Parsers};
use proteus_decoder::{FormDecoder, JsonDecoder};
use proteus_formatter::StringFormatter;
use proteus_parser::{CookieParser, HeaderParser, PathParser, QueryParser};

use crate::engine::Proteus;

/// Configures and builds a [`Proteus`] engine.
///
/// [`ProteusBuilder::new`] starts with the built-in plugins registered:
/// the query, header, cookie, and path parsers, the JSON and form
/// decoders, and the string formatter. [`ProteusBuilder::empty`] starts
/// with none, for callers that want full control over the registries.
///
/// Registering a plugin for a keyword or content type that already has
/// one replaces it; for parsers and formatters the replacement keeps
/// the original's position in the consultation order.
pub struct ProteusBuilder {
    parsers: Parsers,
    decoders: Decoders,
    formatters: Formatters,
    skip_filled: bool,
    fast_field_access: bool,
}

impl Default for ProteusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProteusBuilder {
    /// Creates a builder with the built-in plugins registered.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_parser(QueryParser::new())
            .with_parser(HeaderParser::new())
            .with_parser(CookieParser::new())
            .with_parser(PathParser::new())
            .with_decoder(JsonDecoder::new())
            .with_decoder(FormDecoder::new())
            .with_formatter(StringFormatter::new())
    }

    /// Creates a builder with no plugins registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            parsers: Parsers::new(),
            decoders: Decoders::new(),
            formatters: Formatters::new(),
            skip_filled: true,
            fast_field_access: false,
        }
    }

    /// Registers a parser under its keyword.
    #[must_use]
    pub fn with_parser(mut self, parser: impl Parser + 'static) -> Self {
        self.parsers.insert(parser.keyword(), Box::new(parser));
        self
    }

    /// Registers a body decoder under its content type.
    #[must_use]
    pub fn with_decoder(mut self, decoder: impl Decoder + 'static) -> Self {
        self.decoders.insert(decoder.content_type(), Box::new(decoder));
        self
    }

    /// Registers a formatter under its keyword.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatters.insert(formatter.keyword(), Box::new(formatter));
        self
    }

    /// Whether fields that already hold a value are skipped by the
    /// field walk. Defaults to `true`.
    #[must_use]
    pub fn skip_filled(mut self, skip_filled: bool) -> Self {
        self.skip_filled = skip_filled;
        self
    }

    /// Whether the field walk precomputes its eligible field set before
    /// binding. Defaults to `false`. Both strategies produce identical
    /// results.
    #[must_use]
    pub fn fast_field_access(mut self, fast_field_access: bool) -> Self {
        self.fast_field_access = fast_field_access;
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> Proteus {
        Proteus::from_parts(
            self.parsers,
            self.decoders,
            self.formatters,
            self.skip_filled,
            self.fast_field_access,
        )
    }
}
