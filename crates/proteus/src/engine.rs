//! The binding engine.

use http::Method;
use proteus_core::{
    set_value, Decoder, Decoders, Error, FieldDescriptor, Formatters, ParserCache, Parsers,
    Record, Request,
};
use serde::de::DeserializeOwned;
use smallvec::SmallVec;
use tracing::{debug, trace};

/// The request binding engine.
///
/// A `Proteus` holds the parser, decoder, and formatter registries and
/// runs the binding pipeline against them. Build one with
/// [`Proteus::builder`] and reuse it across requests; parsing never
/// mutates the engine, so a shared reference is enough.
///
/// The pipeline for one parse call:
///
/// 1. Decode and merge the request body, when a decoder matches
/// 2. Walk the record's tagged fields in declaration order, consulting
///    parsers in registration order until one produces a value
/// 3. Run matching formatters on each tagged field, whether or not a
///    parser produced a value
/// 4. Invoke the record's post-parse hook
pub struct Proteus {
    parsers: Parsers,
    decoders: Decoders,
    formatters: Formatters,
    skip_filled: bool,
    fast_field_access: bool,
}

impl Proteus {
    /// Returns a builder with the built-in plugins registered.
    #[must_use]
    pub fn builder() -> crate::ProteusBuilder {
        crate::ProteusBuilder::new()
    }

    pub(crate) fn from_parts(
        parsers: Parsers,
        decoders: Decoders,
        formatters: Formatters,
        skip_filled: bool,
        fast_field_access: bool,
    ) -> Self {
        Self {
            parsers,
            decoders,
            formatters,
            skip_filled,
            fast_field_access,
        }
    }

    /// The registered parsers, in consultation order.
    #[must_use]
    pub fn parsers(&self) -> &Parsers {
        &self.parsers
    }

    /// The registered body decoders.
    #[must_use]
    pub fn decoders(&self) -> &Decoders {
        &self.decoders
    }

    /// The registered formatters, in application order.
    #[must_use]
    pub fn formatters(&self) -> &Formatters {
        &self.formatters
    }

    /// Binds `request` into `record`.
    ///
    /// Fields the request does not mention keep their current values,
    /// so parsing an already-populated record is safe and, with
    /// `skip_filled` (the default), idempotent.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the body fails to decode, a value
    /// fails to coerce into its field, a formatter fails, or the
    /// record's post-parse hook rejects the result.
    pub fn parse<T: Record>(&self, request: &Request, record: &mut T) -> Result<(), Error> {
        self.run(request, record)
    }

    /// Binds `request` into a type-erased record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NilValue`] when `record` is `None`, otherwise
    /// as [`Proteus::parse`].
    pub fn parse_dyn(
        &self,
        request: &Request,
        record: Option<&mut dyn Record>,
    ) -> Result<(), Error> {
        match record {
            Some(record) => self.run(request, record),
            None => Err(Error::NilValue),
        }
    }

    /// Decodes the request body directly into any deserializable type.
    ///
    /// This is the entry point for non-struct targets such as maps and
    /// vectors. Returns `Ok(None)` when the body is skipped for the
    /// same reasons the binding pipeline skips it: no registered
    /// decoders, an empty body, a GET or HEAD request, or an
    /// unrecognized content type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the body cannot be decoded or the
    /// document does not fit `T`.
    pub fn parse_body<T: DeserializeOwned>(&self, request: &Request) -> Result<Option<T>, Error> {
        let Some((content_type, decoder)) = self.match_decoder(request) else {
            return Ok(None);
        };
        let target = std::any::type_name::<T>();
        let document = decoder.decode(request).map_err(|source| Error::Decode {
            content_type: content_type.to_owned(),
            target,
            source,
        })?;
        let value = serde_json::from_value(document).map_err(|source| Error::Decode {
            content_type: content_type.to_owned(),
            target,
            source: source.into(),
        })?;
        Ok(Some(value))
    }

    fn run(&self, request: &Request, record: &mut dyn Record) -> Result<(), Error> {
        debug!(record = record.type_name(), "parsing request");
        self.decode_body(request, record)?;

        let mut cache = ParserCache::with_capacity(record.descriptors().len());
        if self.fast_field_access {
            self.walk_fast(request, record, &mut cache)?;
        } else {
            self.walk(request, record, &mut cache)?;
        }

        record.after_parse(request).map_err(Error::AfterParse)
    }

    fn decode_body(&self, request: &Request, record: &mut dyn Record) -> Result<(), Error> {
        let Some((content_type, decoder)) = self.match_decoder(request) else {
            return Ok(());
        };
        let target = record.type_name();

        let document = decoder.decode(request).map_err(|source| Error::Decode {
            content_type: content_type.to_owned(),
            target,
            source,
        })?;
        record.apply_body(document).map_err(|source| Error::Decode {
            content_type: content_type.to_owned(),
            target,
            source: source.into(),
        })?;

        debug!(content_type, record = target, "merged request body");
        Ok(())
    }

    fn match_decoder<'a>(&self, request: &'a Request) -> Option<(&'a str, &dyn Decoder)> {
        if self.decoders.is_empty() || request.is_body_empty() {
            return None;
        }
        if matches!(*request.method(), Method::GET | Method::HEAD) {
            trace!(method = %request.method(), "bodiless method, skipping body decode");
            return None;
        }

        let content_type = normalize_content_type(request.content_type().unwrap_or_default());
        match self.decoders.get(content_type) {
            Some(decoder) => Some((content_type, decoder.as_ref())),
            None => {
                debug!(content_type, "no decoder for content type, skipping body");
                None
            }
        }
    }

    fn walk(
        &self,
        request: &Request,
        record: &mut dyn Record,
        cache: &mut ParserCache,
    ) -> Result<(), Error> {
        let target = record.type_name();
        let descriptors = record.descriptors();
        for (index, descriptor) in descriptors.iter().enumerate() {
            if descriptor.tag().is_empty() {
                continue;
            }
            self.bind_field(request, record, cache, descriptor, index, descriptors.len(), target)?;
        }
        Ok(())
    }

    /// Same contract as [`Proteus::walk`], but the eligible field set
    /// is computed up front so the binding loop touches only tagged
    /// fields.
    fn walk_fast(
        &self,
        request: &Request,
        record: &mut dyn Record,
        cache: &mut ParserCache,
    ) -> Result<(), Error> {
        let target = record.type_name();
        let descriptors = record.descriptors();
        let eligible: SmallVec<[usize; 16]> = descriptors
            .iter()
            .enumerate()
            .filter(|(_, descriptor)| !descriptor.tag().is_empty())
            .map(|(index, _)| index)
            .collect();

        for index in eligible {
            self.bind_field(
                request,
                record,
                cache,
                &descriptors[index],
                index,
                descriptors.len(),
                target,
            )?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn bind_field(
        &self,
        request: &Request,
        record: &mut dyn Record,
        cache: &mut ParserCache,
        descriptor: &FieldDescriptor,
        index: usize,
        field_count: usize,
        target: &'static str,
    ) -> Result<(), Error> {
        let tag = descriptor.tag();
        let pre_filled = matches!(record.field_is_empty(index), Some(false));

        if self.skip_filled && pre_filled {
            trace!(field = descriptor.name(), "field already filled, formatting only");
            return self.format_field(record, descriptor, index, target);
        }

        for parser in self.parsers.values() {
            let Some(raw) = parser.parse(request, tag, cache) else {
                continue;
            };
            let field = record.field_mut(index).ok_or(Error::FieldIndexOutOfBounds {
                index,
                fields: field_count,
                target,
            })?;
            set_value(field, raw).map_err(|failure| Error::SetField {
                value: failure.value.to_string(),
                field: descriptor.name(),
                keyword: parser.keyword(),
                target,
                source: failure.source,
            })?;
            trace!(field = descriptor.name(), keyword = parser.keyword(), "bound field");
            break;
        }

        // Formatters run whether or not a parser produced a value, so a
        // formatter can synthesize content for fields the request left out.
        self.format_field(record, descriptor, index, target)
    }

    fn format_field(
        &self,
        record: &mut dyn Record,
        descriptor: &FieldDescriptor,
        index: usize,
        target: &'static str,
    ) -> Result<(), Error> {
        for formatter in self.formatters.values() {
            if !descriptor.tag().contains(formatter.keyword()) {
                continue;
            }
            let Some(field) = record.field_mut(index) else {
                continue;
            };
            formatter
                .format(descriptor.tag(), field)
                .map_err(|source| Error::FormatField {
                    field: descriptor.name(),
                    target,
                    source,
                })?;
        }
        Ok(())
    }
}

fn normalize_content_type(raw: &str) -> &str {
    raw.split(';').next().unwrap_or(raw).trim()
}
