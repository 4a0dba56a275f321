//! Field annotations.

/// A parsed, immutable per-field annotation: keyword → value pairs.
///
/// Each keyword selects a parser or formatter; the value carries that
/// plugin's parameters (typically an alternate source name). The core only
/// performs keyword lookup; what a value means is defined by the plugin
/// that owns the keyword.
///
/// Tags are `'static` tables, normally produced at compile time by
/// `#[derive(Record)]`:
///
/// ```rust
/// use proteus_core::Tag;
///
/// const TAG: Tag = Tag::from_static(&[("query", "user_id"), ("string", "trim")]);
///
/// assert_eq!(TAG.get("query"), Some("user_id"));
/// assert!(TAG.contains("string"));
/// assert_eq!(TAG.get("header"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pairs: &'static [(&'static str, &'static str)],
}

impl Tag {
    /// The annotation of an unannotated field.
    pub const EMPTY: Self = Self::from_static(&[]);

    /// Creates a tag from a static keyword → value table.
    #[must_use]
    pub const fn from_static(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// Returns the value for a keyword, if present.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, v)| *v)
    }

    /// Returns true when the keyword is present.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    /// Returns true when the tag carries no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over (keyword, value) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.pairs.iter().copied()
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Static description of one record field: its name and annotation.
///
/// Descriptors are ordered by field declaration; their index is the
/// record's field index for [`crate::Record::field_mut`] and
/// [`crate::Record::field_is_empty`].
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    name: &'static str,
    tag: Tag,
}

impl FieldDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub const fn new(name: &'static str, tag: Tag) -> Self {
        Self { name, tag }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's annotation.
    #[must_use]
    pub fn tag(&self) -> &Tag {
        &self.tag
    }
}
