//! Scalar coercions: strings, booleans and the numeric family.

use crate::{CoerceError, FieldMut};
use serde_json::Value;

/// An integer source value, width- and signedness-exact.
///
/// Every width widens losslessly to `i128` for destination dispatch, while
/// [`IntSource::into_json`] preserves the original flavor for generic-any
/// destinations.
pub(crate) trait IntSource: Copy {
    fn widen(self) -> i128;
    fn into_json(self) -> Value;
}

macro_rules! impl_int_source {
    ($($ty:ty),*) => {
        $(
            impl IntSource for $ty {
                fn widen(self) -> i128 {
                    i128::from(self)
                }

                fn into_json(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_int_source!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Sets an integer into a destination field.
///
/// - string: rendered as decimal text
/// - bool: true iff the value is positive
/// - integers: converted with truncation, no overflow check
/// - floats: widened
/// - generic-any: stored as a JSON number, signedness preserved
pub(crate) fn set_integer<I: IntSource>(
    field: FieldMut<'_>,
    number: I,
) -> Result<(), CoerceError> {
    let wide = number.widen();
    match field {
        FieldMut::Str(slot) => *slot = wide.to_string(),
        FieldMut::Bool(slot) => *slot = wide > 0,
        FieldMut::I8(slot) => *slot = wide as i8,
        FieldMut::I16(slot) => *slot = wide as i16,
        FieldMut::I32(slot) => *slot = wide as i32,
        FieldMut::I64(slot) => *slot = wide as i64,
        FieldMut::U8(slot) => *slot = wide as u8,
        FieldMut::U16(slot) => *slot = wide as u16,
        FieldMut::U32(slot) => *slot = wide as u32,
        FieldMut::U64(slot) => *slot = wide as u64,
        FieldMut::F32(slot) => *slot = wide as f32,
        FieldMut::F64(slot) => *slot = wide as f64,
        FieldMut::Any(slot) => *slot = number.into_json(),
        other => return Err(CoerceError::unsupported("integer", other.kind_name())),
    }
    Ok(())
}

/// Sets a float into a destination field, mirroring the integer rules.
pub(crate) fn set_float(field: FieldMut<'_>, number: f64) -> Result<(), CoerceError> {
    match field {
        FieldMut::Str(slot) => *slot = number.to_string(),
        FieldMut::Bool(slot) => *slot = number > 0.0,
        FieldMut::I8(slot) => *slot = number as i8,
        FieldMut::I16(slot) => *slot = number as i16,
        FieldMut::I32(slot) => *slot = number as i32,
        FieldMut::I64(slot) => *slot = number as i64,
        FieldMut::U8(slot) => *slot = number as u8,
        FieldMut::U16(slot) => *slot = number as u16,
        FieldMut::U32(slot) => *slot = number as u32,
        FieldMut::U64(slot) => *slot = number as u64,
        FieldMut::F32(slot) => *slot = number as f32,
        FieldMut::F64(slot) => *slot = number,
        FieldMut::Any(slot) => *slot = Value::from(number),
        other => return Err(CoerceError::unsupported("float", other.kind_name())),
    }
    Ok(())
}

/// Sets a boolean into a destination field.
pub(crate) fn set_bool(field: FieldMut<'_>, flag: bool) -> Result<(), CoerceError> {
    match field {
        FieldMut::Bool(slot) => *slot = flag,
        FieldMut::Str(slot) => *slot = flag.to_string(),
        FieldMut::Any(slot) => *slot = Value::Bool(flag),
        other => return Err(CoerceError::unsupported("bool", other.kind_name())),
    }
    Ok(())
}

/// Sets a textual value into a destination field, parsing where the
/// destination demands it.
///
/// The text is handed back alongside the error on failure, since the
/// caller gave up ownership.
pub(crate) fn set_string(field: FieldMut<'_>, text: String) -> Result<(), (String, CoerceError)> {
    macro_rules! parse_into {
        ($slot:expr, $ty:literal) => {
            match text.parse() {
                Ok(parsed) => *$slot = parsed,
                Err(err) => {
                    let err = CoerceError::invalid($ty, text.clone(), err);
                    return Err((text, err));
                }
            }
        };
    }

    match field {
        FieldMut::Str(slot) => *slot = text,
        FieldMut::Bool(slot) => match parse_bool(&text) {
            Ok(parsed) => *slot = parsed,
            Err(err) => return Err((text, err)),
        },
        FieldMut::I8(slot) => parse_into!(slot, "i8"),
        FieldMut::I16(slot) => parse_into!(slot, "i16"),
        FieldMut::I32(slot) => parse_into!(slot, "i32"),
        FieldMut::I64(slot) => parse_into!(slot, "i64"),
        FieldMut::U8(slot) => parse_into!(slot, "u8"),
        FieldMut::U16(slot) => parse_into!(slot, "u16"),
        FieldMut::U32(slot) => parse_into!(slot, "u32"),
        FieldMut::U64(slot) => parse_into!(slot, "u64"),
        FieldMut::F32(slot) => parse_into!(slot, "f32"),
        FieldMut::F64(slot) => parse_into!(slot, "f64"),
        FieldMut::StrList(slot) => *slot = vec![text],
        FieldMut::AnyList(slot) => *slot = vec![Value::String(text)],
        FieldMut::Any(slot) => *slot = Value::String(text),
        other => {
            let err = CoerceError::unsupported("string", other.kind_name());
            return Err((text, err));
        }
    }
    Ok(())
}

/// Lenient boolean text forms: `1/0`, `t/f`, and cased `true`/`false`.
fn parse_bool(text: &str) -> Result<bool, CoerceError> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(CoerceError::invalid("bool", other, "not a boolean literal")),
    }
}
