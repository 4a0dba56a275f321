//! The binding target contract.

use proteus_value::FieldMut;
use serde_json::Value;

use crate::request::Request;
use crate::tag::FieldDescriptor;

/// A struct whose fields can be filled from an HTTP request.
///
/// Implementations are almost always generated by `#[derive(Record)]` in
/// the facade crate; the trait is object safe so the engine can bind
/// through `&mut dyn Record` without knowing the concrete type.
///
/// Fields are addressed by index into [`descriptors`](Record::descriptors).
/// The index-based accessors return `None` for an index that has no
/// backing field, which the engine reports as an out-of-bounds error when
/// it happens during a write.
pub trait Record {
    /// Human-readable type name used in error messages.
    fn type_name(&self) -> &'static str;

    /// Static metadata for every bindable field, in declaration order.
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// Whether the field at `index` currently holds its zero value.
    fn field_is_empty(&self, index: usize) -> Option<bool>;

    /// Mutable access to the field at `index`.
    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;

    /// Merges a decoded request-body document into the record.
    ///
    /// Fields not mentioned by the document keep their current values.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be deserialized into the
    /// record's fields.
    fn apply_body(&mut self, document: Value) -> Result<(), serde_json::Error>;

    /// Hook invoked after all fields have been bound.
    ///
    /// The default does nothing. Records override this to normalize or
    /// cross-validate fields; an error aborts the parse.
    ///
    /// # Errors
    ///
    /// Returns any error produced by the record's own validation.
    fn after_parse(&mut self, request: &Request) -> anyhow::Result<()> {
        let _ = request;
        Ok(())
    }
}
