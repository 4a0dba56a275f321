//! The field formatter plugin contract.

use indexmap::IndexMap;
use proteus_value::FieldMut;

use crate::tag::Tag;

/// Post-processes a bound field in place.
///
/// A formatter owns a tag keyword, the same way a [`Parser`] does, and
/// runs after the extraction step, whether or not that step produced a
/// value. That lets a formatter normalize bound text or synthesize
/// content for fields the request left out. Every formatter whose
/// keyword appears in the field's tag runs, in registration order.
///
/// [`Parser`]: crate::Parser
pub trait Formatter: Send + Sync {
    /// The tag keyword this formatter answers to.
    fn keyword(&self) -> &'static str;

    /// Rewrites the field value according to `tag`.
    ///
    /// Formatters should ignore field kinds they do not apply to and
    /// return `Ok(())` for them.
    ///
    /// # Errors
    ///
    /// Returns an error when the tag names an operation the formatter
    /// does not recognize, or the rewrite itself fails.
    fn format(&self, tag: &Tag, field: FieldMut<'_>) -> anyhow::Result<()>;
}

/// Formatter registry, keyed by keyword, preserving registration order.
pub type Formatters = IndexMap<&'static str, Box<dyn Formatter>>;
