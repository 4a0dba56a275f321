//! The coercion dispatch table.

use crate::scalar::{set_bool, set_float, set_integer, set_string};
use crate::slice::{set_list, set_map, set_str_slice};
use crate::{CoerceFailure, FieldMut, RawValue};

/// Sets a raw value into a destination field, coercing as needed.
///
/// This is the single entry point of the coercion layer: an explicit
/// dispatch over the closed (source kind, destination kind) space. A pair
/// without a rule fails with
/// [`CoerceError::UnsupportedType`](crate::CoerceError::UnsupportedType)
/// and leaves the destination unmodified. The returned [`CoerceFailure`]
/// hands the raw value back to the caller, so rendering it into a message
/// costs nothing when the coercion succeeds.
///
/// Numeric values stored into a generic-any destination keep their
/// signedness and floatness through `serde_json::Number`; the exact bit
/// width is not observable there.
///
/// # Example
///
/// ```rust
/// use proteus_value::{set_value, FieldAccess, RawValue};
///
/// let mut joined = String::new();
/// set_value(
///     joined.field_mut(),
///     RawValue::StrList(vec!["a".into(), "b".into()]),
/// )
/// .unwrap();
/// assert_eq!(joined, "a,b");
/// ```
pub fn set_value(field: FieldMut<'_>, value: RawValue) -> Result<(), CoerceFailure> {
    match value {
        RawValue::Str(text) => set_string(field, text)
            .map_err(|(text, err)| CoerceFailure::new(RawValue::Str(text), err)),
        RawValue::StrList(values) => set_str_slice(field, values)
            .map_err(|(values, err)| CoerceFailure::new(RawValue::StrList(values), err)),
        RawValue::Bool(flag) => {
            set_bool(field, flag).map_err(|err| CoerceFailure::new(RawValue::Bool(flag), err))
        }
        RawValue::I8(n) => {
            set_integer(field, n).map_err(|err| CoerceFailure::new(RawValue::I8(n), err))
        }
        RawValue::I16(n) => {
            set_integer(field, n).map_err(|err| CoerceFailure::new(RawValue::I16(n), err))
        }
        RawValue::I32(n) => {
            set_integer(field, n).map_err(|err| CoerceFailure::new(RawValue::I32(n), err))
        }
        RawValue::I64(n) => {
            set_integer(field, n).map_err(|err| CoerceFailure::new(RawValue::I64(n), err))
        }
        RawValue::U8(n) => {
            set_integer(field, n).map_err(|err| CoerceFailure::new(RawValue::U8(n), err))
        }
        RawValue::U16(n) => {
            set_integer(field, n).map_err(|err| CoerceFailure::new(RawValue::U16(n), err))
        }
        RawValue::U32(n) => {
            set_integer(field, n).map_err(|err| CoerceFailure::new(RawValue::U32(n), err))
        }
        RawValue::U64(n) => {
            set_integer(field, n).map_err(|err| CoerceFailure::new(RawValue::U64(n), err))
        }
        RawValue::F32(n) => set_float(field, f64::from(n))
            .map_err(|err| CoerceFailure::new(RawValue::F32(n), err)),
        RawValue::F64(n) => {
            set_float(field, n).map_err(|err| CoerceFailure::new(RawValue::F64(n), err))
        }
        RawValue::List(values) => set_list(field, values)
            .map_err(|(values, err)| CoerceFailure::new(RawValue::List(values), err)),
        RawValue::Map(map) => set_map(field, map)
            .map_err(|(map, err)| CoerceFailure::new(RawValue::Map(map), err)),
    }
}
