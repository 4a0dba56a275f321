//! # Proteus Value
//!
//! The value coercion layer for the Proteus request binder.
//!
//! Extraction strategies produce a [`RawValue`], one of a small, closed set
//! of wire-level kinds (strings, the integer family, floats, booleans,
//! string lists, generic lists and maps). Destination fields are described
//! by a [`FieldMut`], a tagged mutable view over the field types a record
//! may declare. [`set_value`] connects the two: it applies the coercion
//! matrix that turns a raw value into the destination's exact type, or
//! reports the pair as unsupported.
//!
//! ## Example
//!
//! ```rust
//! use proteus_value::{set_value, FieldAccess, RawValue};
//!
//! let mut limit: u32 = 0;
//! set_value(limit.field_mut(), RawValue::Str("25".into())).unwrap();
//! assert_eq!(limit, 25);
//!
//! let mut tags: Vec<String> = Vec::new();
//! set_value(tags.field_mut(), RawValue::Str("rust".into())).unwrap();
//! assert_eq!(tags, vec!["rust".to_string()]);
//! ```
//!
//! ## Coercion rules
//!
//! | Raw value | String | bool | Integers | Floats | `Vec<String>` | `Vec<Value>` | `Value` |
//! |-----------|--------|------|----------|--------|---------------|--------------|---------|
//! | string | move | parsed | parsed | parsed | wrap | wrap | wrap |
//! | string list | comma join | — | — | — | move | wrap each | shape-preserving¹ |
//! | integer | decimal text | `> 0` | truncate | widen | — | — | number |
//! | float | text | `> 0` | truncate | widen | — | — | number |
//! | bool | text | move | — | — | — | — | bool |
//!
//! ¹ only when the current value is already an all-string array.
//!
//! Unsupported pairs fail with [`CoerceError::UnsupportedType`] and leave
//! the destination untouched. Malformed text for a parsed destination fails
//! with [`CoerceError::Invalid`]. Either way the [`CoerceFailure`] returned
//! by [`set_value`] hands the rejected raw value back to the caller.

#![doc(html_root_url = "https://docs.rs/proteus-value/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod field;
mod raw;
mod scalar;
mod set;
mod slice;

pub use error::{CoerceError, CoerceFailure};
pub use field::{FieldAccess, FieldMut};
pub use raw::RawValue;
pub use set::set_value;
