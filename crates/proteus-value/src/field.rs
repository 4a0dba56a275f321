//! Mutable destination field views.

use serde_json::Value;
use std::collections::HashMap;

/// A tagged mutable view over a destination field.
///
/// The coercion layer never sees concrete record types; it sees one of
/// these variants, obtained through [`FieldAccess`]. The set of variants is
/// the closed space of field types a record may declare for binding.
#[derive(Debug)]
pub enum FieldMut<'a> {
    /// String destination.
    Str(&'a mut String),
    /// Boolean destination.
    Bool(&'a mut bool),
    /// Signed 8-bit integer destination.
    I8(&'a mut i8),
    /// Signed 16-bit integer destination.
    I16(&'a mut i16),
    /// Signed 32-bit integer destination.
    I32(&'a mut i32),
    /// Signed 64-bit integer destination.
    I64(&'a mut i64),
    /// Unsigned 8-bit integer destination.
    U8(&'a mut u8),
    /// Unsigned 16-bit integer destination.
    U16(&'a mut u16),
    /// Unsigned 32-bit integer destination.
    U32(&'a mut u32),
    /// Unsigned 64-bit integer destination.
    U64(&'a mut u64),
    /// 32-bit float destination.
    F32(&'a mut f32),
    /// 64-bit float destination.
    F64(&'a mut f64),
    /// String collection destination.
    StrList(&'a mut Vec<String>),
    /// Generic collection destination.
    AnyList(&'a mut Vec<Value>),
    /// Generic-any destination.
    Any(&'a mut Value),
    /// String map destination.
    StrMap(&'a mut HashMap<String, String>),
}

impl FieldMut<'_> {
    /// Returns the destination kind name, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "String",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::StrList(_) => "Vec<String>",
            Self::AnyList(_) => "Vec<Value>",
            Self::Any(_) => "Value",
            Self::StrMap(_) => "HashMap<String, String>",
        }
    }
}

/// Bridge between a concrete field type and its [`FieldMut`] view.
///
/// Implemented for every type a record field may declare. `Option<T>`
/// destinations auto-allocate a default pointee the first time a view is
/// requested, mirroring nested-pointer allocation; `Box<T>` destinations
/// dereference to the pointee.
///
/// # Example
///
/// ```rust
/// use proteus_value::{FieldAccess, FieldMut};
///
/// let mut page: Option<u32> = None;
/// assert!(page.is_empty());
///
/// // Requesting the view allocates the pointee.
/// assert!(matches!(page.field_mut(), FieldMut::U32(_)));
/// assert_eq!(page, Some(0));
/// ```
pub trait FieldAccess {
    /// Returns true when the field holds its zero value.
    ///
    /// Used to implement the skip-filled policy: a non-empty field is not
    /// re-extracted.
    fn is_empty(&self) -> bool;

    /// Returns the mutable view the coercion layer operates on.
    fn field_mut(&mut self) -> FieldMut<'_>;
}

macro_rules! impl_field_access {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldAccess for $ty {
                fn is_empty(&self) -> bool {
                    *self == <$ty>::default()
                }

                fn field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::$variant(self)
                }
            }
        )*
    };
}

impl_field_access! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl FieldAccess for String {
    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Str(self)
    }
}

impl FieldAccess for Vec<String> {
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::StrList(self)
    }
}

impl FieldAccess for Vec<Value> {
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::AnyList(self)
    }
}

impl FieldAccess for Value {
    fn is_empty(&self) -> bool {
        self.is_null()
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Any(self)
    }
}

impl FieldAccess for HashMap<String, String> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::StrMap(self)
    }
}

impl<T: FieldAccess + Default> FieldAccess for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        self.get_or_insert_with(T::default).field_mut()
    }
}

// A box is an always-allocated pointer: it is never "unset", so the
// skip-filled policy treats it as filled.
impl<T: FieldAccess> FieldAccess for Box<T> {
    fn is_empty(&self) -> bool {
        false
    }

    fn field_mut(&mut self) -> FieldMut<'_> {
        (**self).field_mut()
    }
}
