//! A case-insensitive multi-valued string map for header-like data.

use std::sync::{Arc, OnceLock};

/// One key with its values, remembering the spelling the key was first
/// inserted with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// First-seen spelling, reported back by `keys`/`iter`.
    key: String,
    /// Lowercased form used for comparison.
    folded: String,
    values: Vec<String>,
}

/// A multi-valued `String -> String` map where key comparison folds case.
///
/// Insertion order of keys is preserved, as is the spelling a key was first
/// inserted with. Values for a key accumulate in insertion order. These
/// maps are expected to stay small (header-like data), so lookups scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseInsensitiveMultiMap {
    entries: Vec<Entry>,
}

impl CaseInsensitiveMultiMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide shared empty immutable map.
    #[must_use]
    pub fn empty() -> ImmutableMultiMapView {
        static EMPTY: OnceLock<ImmutableMultiMapView> = OnceLock::new();
        EMPTY
            .get_or_init(|| ImmutableMultiMapView(Arc::new(Self::new())))
            .clone()
    }

    /// Gets the first value for a key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entry(key)
            .and_then(|e| e.values.first())
            .map(String::as_str)
    }

    /// Gets all values for a key, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.entry(key).map(|e| e.values.clone()).unwrap_or_default()
    }

    /// Checks whether any value is present for a key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Appends a value under a key. The key's first-seen spelling is kept.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let folded = key.to_lowercase();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.folded == folded) {
            entry.values.push(value.into());
        } else {
            self.entries.push(Entry {
                key,
                folded,
                values: vec![value.into()],
            });
        }
    }

    /// Appends every pair from another map.
    pub fn put_all(&mut self, other: &CaseInsensitiveMultiMap) {
        for entry in &other.entries {
            for value in &entry.values {
                self.put(entry.key.clone(), value.clone());
            }
        }
    }

    /// Removes a key and returns its values, if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        let folded = key.to_lowercase();
        let position = self.entries.iter().position(|e| e.folded == folded)?;
        Some(self.entries.remove(position).values)
    }

    /// Returns all keys in insertion order, with their first-seen spelling.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }

    /// Iterates over every (key, value) pair, keys in insertion order and
    /// values in insertion order within each key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|e| {
            e.values
                .iter()
                .map(move |v| (e.key.as_str(), v.as_str()))
        })
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts to an immutable view. An empty map converts to the shared
    /// empty instance.
    #[must_use]
    pub fn to_immutable(&self) -> ImmutableMultiMapView {
        if self.is_empty() {
            Self::empty()
        } else {
            ImmutableMultiMapView(Arc::new(self.clone()))
        }
    }

    fn entry(&self, key: &str) -> Option<&Entry> {
        let folded = key.to_lowercase();
        self.entries.iter().find(|e| e.folded == folded)
    }
}

impl FromIterator<(String, String)> for CaseInsensitiveMultiMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.put(key, value);
        }
        map
    }
}

/// A read-only, cheaply cloneable view over a [`CaseInsensitiveMultiMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImmutableMultiMapView(Arc<CaseInsensitiveMultiMap>);

impl ImmutableMultiMapView {
    /// Gets the first value for a key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)
    }

    /// Gets all values for a key.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.0.get_all(key)
    }

    /// Checks whether any value is present for a key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns all keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.0.keys()
    }

    /// Iterates over every (key, value) pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the view holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a mutable copy of the underlying map.
    #[must_use]
    pub fn to_mutable(&self) -> CaseInsensitiveMultiMap {
        (*self.0).clone()
    }
}
