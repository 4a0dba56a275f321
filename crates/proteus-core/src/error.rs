//! Binding errors.

use proteus_value::CoerceError;

/// Errors produced while binding a request into a record.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The destination record was absent.
    #[error("nil destination record")]
    NilValue,

    /// A parsed value could not be stored into its field.
    #[error("set `{value}` into field `{field}` from tag `{keyword}` for `{target}`")]
    SetField {
        /// Display form of the value that failed to coerce.
        value: String,
        /// Name of the destination field.
        field: &'static str,
        /// Tag keyword of the parser that produced the value.
        keyword: &'static str,
        /// Type name of the destination record.
        target: &'static str,
        /// The underlying coercion failure.
        #[source]
        source: CoerceError,
    },

    /// A formatter failed on a bound field.
    #[error("format field `{field}` in `{target}`")]
    FormatField {
        /// Name of the formatted field.
        field: &'static str,
        /// Type name of the destination record.
        target: &'static str,
        /// The underlying formatter failure.
        #[source]
        source: anyhow::Error,
    },

    /// The request body could not be decoded or merged.
    #[error("decode `{content_type}` request body for `{target}`")]
    Decode {
        /// Normalized content type of the request.
        content_type: String,
        /// Type name of the destination record.
        target: &'static str,
        /// The underlying decode failure.
        #[source]
        source: anyhow::Error,
    },

    /// A field descriptor index had no backing field.
    ///
    /// This indicates a broken [`Record`](crate::Record) implementation;
    /// derived records never produce it.
    #[error("field index {index} out of bounds ({fields} fields) for `{target}`")]
    FieldIndexOutOfBounds {
        /// The offending descriptor index.
        index: usize,
        /// Number of descriptors the record declares.
        fields: usize,
        /// Type name of the destination record.
        target: &'static str,
    },

    /// The record's post-parse hook failed.
    #[error(transparent)]
    AfterParse(anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_message() {
        let err = Error::SetField {
            value: "abc".to_owned(),
            field: "age",
            keyword: "query",
            target: "SearchRequest",
            source: CoerceError::invalid("integer", "abc", "invalid digit"),
        };
        assert_eq!(
            err.to_string(),
            "set `abc` into field `age` from tag `query` for `SearchRequest`"
        );
    }

    #[test]
    fn test_decode_message() {
        let err = Error::Decode {
            content_type: "application/json".to_owned(),
            target: "SearchRequest",
            source: anyhow::anyhow!("unexpected end of input"),
        };
        assert_eq!(
            err.to_string(),
            "decode `application/json` request body for `SearchRequest`"
        );
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::FieldIndexOutOfBounds {
            index: 5,
            fields: 3,
            target: "SearchRequest",
        };
        assert_eq!(
            err.to_string(),
            "field index 5 out of bounds (3 fields) for `SearchRequest`"
        );
    }
}
