//! Coercion error types.

use crate::RawValue;
use thiserror::Error;

/// Error produced by the coercion layer.
///
/// Failed coercions never modify the destination field.
///
/// # Example
///
/// ```rust
/// use proteus_value::{set_value, CoerceError, FieldAccess, RawValue};
///
/// let mut count: u8 = 0;
/// let failure = set_value(count.field_mut(), RawValue::Str("many".into())).unwrap_err();
/// assert!(matches!(failure.source, CoerceError::Invalid { .. }));
/// assert_eq!(count, 0);
/// ```
#[derive(Debug, Error)]
pub enum CoerceError {
    /// The (source kind, destination kind) pair has no coercion rule.
    #[error("no coercion from {from} into {dest}")]
    UnsupportedType {
        /// Wire-level kind of the raw value.
        from: &'static str,
        /// Declared kind of the destination field.
        dest: &'static str,
    },

    /// The destination has a rule for the source kind, but the concrete
    /// value does not fit it (e.g. non-numeric text into an integer).
    #[error("invalid {dest} value `{value}`: {reason}")]
    Invalid {
        /// Declared kind of the destination field.
        dest: &'static str,
        /// The offending raw value, rendered as text.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// A failed coercion together with the raw value that was rejected.
///
/// [`set_value`](crate::set_value) hands the value back on failure so
/// callers can render it into their own diagnostics without paying for a
/// rendering on the success path.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct CoerceFailure {
    /// The raw value that could not be coerced.
    pub value: RawValue,
    /// What went wrong.
    pub source: CoerceError,
}

impl CoerceFailure {
    pub(crate) fn new(value: RawValue, source: CoerceError) -> Self {
        Self { value, source }
    }
}

impl CoerceError {
    /// Creates an error for a pair with no coercion rule.
    #[must_use]
    pub fn unsupported(from: &'static str, dest: &'static str) -> Self {
        Self::UnsupportedType { from, dest }
    }

    /// Creates an error for a value that does not fit an existing rule.
    #[must_use]
    pub fn invalid(
        dest: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::Invalid {
            dest,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
