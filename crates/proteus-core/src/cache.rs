//! Per-call parser scratch space.

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// A typed scratch map shared by parsers for the duration of one field
/// walk.
///
/// Parsers use the cache to memoize expensive derivations (a parsed
/// query-string map, a cookie jar) so that a record with many fields pays
/// the derivation cost once. Entries are keyed by their Rust type, which
/// namespaces parsers from one another by construction.
///
/// The cache is created fresh for every parse call and dropped when it
/// returns; it is never shared across requests and needs no
/// synchronization.
///
/// # Example
///
/// ```rust
/// use proteus_core::ParserCache;
///
/// struct QueryPairs(Vec<(String, String)>);
///
/// let mut cache = ParserCache::new();
/// let pairs = cache.get_or_insert_with(|| QueryPairs(vec![("a".into(), "1".into())]));
/// assert_eq!(pairs.0.len(), 1);
///
/// // Second lookup hits the memoized entry.
/// let again = cache.get_or_insert_with(|| QueryPairs(Vec::new()));
/// assert_eq!(again.0.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ParserCache {
    entries: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl ParserCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache sized for the expected number of entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the cached entry of type `T`, if present.
    #[must_use]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref())
    }

    /// Stores an entry of type `T`, replacing any previous one.
    pub fn insert<T: Any + Send>(&mut self, entry: T) {
        self.entries.insert(TypeId::of::<T>(), Box::new(entry));
    }

    /// Returns the cached entry of type `T`, computing it on first use.
    pub fn get_or_insert_with<T: Any + Send>(&mut self, init: impl FnOnce() -> T) -> &T {
        self.entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(init()))
            .downcast_ref()
            .expect("cache entry type matches its TypeId key")
    }
}
