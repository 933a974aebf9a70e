use crate::error::SegmentError;

/// Type alias for Result with `SegmentError`
pub type Result<T> = std::result::Result<T, SegmentError>;

/// Mapping from section key to section content, in document order.
///
/// Iteration order is insertion order, which the segmenter makes equal to the
/// left-to-right order of header occurrences in the document. Inserting an
/// existing key overwrites its value in place, so the key keeps the position
/// of its first occurrence.
///
/// Values default to plain `String` content; a custom population strategy may
/// store any shape instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMap<V = String> {
    entries: Vec<(String, V)>,
}

impl<V> SectionMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a key/value pair, returning the previous value for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> Default for SectionMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for SectionMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V> FromIterator<(String, V)> for SectionMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_encounter_order() {
        let mut map = SectionMap::new();
        map.insert("1.2.0", "c".to_string());
        map.insert("1.1.0", "b".to_string());
        map.insert("1.0.0", "a".to_string());

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["1.2.0", "1.1.0", "1.0.0"]);
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut map = SectionMap::new();
        map.insert("1.0.0", "first".to_string());
        map.insert("0.9.0", "beta".to_string());
        let old = map.insert("1.0.0", "second".to_string());

        assert_eq!(old.as_deref(), Some("first"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("1.0.0").map(String::as_str), Some("second"));
        // The overwritten key keeps its original position.
        assert_eq!(map.keys().next(), Some("1.0.0"));
    }

    #[test]
    fn empty_map_reports_empty() {
        let map: SectionMap = SectionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(!map.contains_key("1.0.0"));
    }
}
