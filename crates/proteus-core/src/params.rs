//! Path parameter storage.

use smallvec::SmallVec;

/// Parameters stored inline before spilling to the heap.
const INLINE_PARAMS: usize = 4;

/// Path parameters extracted by the surrounding routing layer.
///
/// Stored as (name, value) pairs with a small-vector optimization, since
/// routes rarely carry more than a handful of parameters.
///
/// # Example
///
/// ```rust
/// use proteus_core::Params;
///
/// let mut params = Params::new();
/// params.push("user_id", "42");
///
/// assert_eq!(params.get("user_id"), Some("42"));
/// assert_eq!(params.get("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    inner: SmallVec<[(String, String); INLINE_PARAMS]>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the value for a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true when no parameters are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterates over (name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut params = Params::new();
        params.push("id", "7");
        params.push("slug", "intro");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("7"));
        assert_eq!(params.get("slug"), Some("intro"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let mut params = Params::new();
        params.push("id", "1");
        params.push("id", "2");

        assert_eq!(params.get("id"), Some("1"));
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = vec![("a".to_string(), "1".to_string())].into_iter().collect();
        assert_eq!(params.get("a"), Some("1"));
        assert!(!params.is_empty());
    }
}
