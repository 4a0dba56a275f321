//! String field formatter.

use proteus_core::{Formatter, Tag};
use proteus_value::FieldMut;

/// The tag named an operation the formatter does not know.
#[derive(Debug, thiserror::Error)]
#[error("unknown string format operation `{0}`")]
pub struct UnknownOperation(String);

/// Rewrites string fields tagged `string`.
///
/// The tag value is a comma-separated list of operations applied in
/// order:
///
/// | Operation | Effect |
/// |---|---|
/// | `trim` | Strip leading and trailing whitespace |
/// | `lower` | Lowercase |
/// | `upper` | Uppercase |
///
/// An unknown operation is an error. Fields that are not plain strings
/// are left untouched.
#[derive(Debug, Default)]
pub struct StringFormatter;

impl StringFormatter {
    /// Creates the formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for StringFormatter {
    fn keyword(&self) -> &'static str {
        "string"
    }

    fn format(&self, tag: &Tag, field: FieldMut<'_>) -> anyhow::Result<()> {
        let Some(ops) = tag.get("string") else {
            return Ok(());
        };
        let FieldMut::Str(slot) = field else {
            return Ok(());
        };

        for op in ops.split(',').map(str::trim).filter(|op| !op.is_empty()) {
            match op {
                "trim" => *slot = slot.trim().to_owned(),
                "lower" => *slot = slot.to_lowercase(),
                "upper" => *slot = slot.to_uppercase(),
                other => return Err(UnknownOperation(other.to_owned()).into()),
            }
        }
        Ok(())
    }
}
