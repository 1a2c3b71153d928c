//! ResourceStore entity - ordered snapshot of localization entries
//!
//! This is a pure data structure. Loading and saving are handled by a
//! `ResourceRepository`; the synchronizer works on snapshots only.

/// One key/value/comment entry of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    key: String,
    value: String,
    comment: Option<String>,
}

impl ResourceEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// True when the value is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Ordered sequence of entries
///
/// Entries are never reordered or removed. Keys are not required to be
/// unique; lookups return the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceStore {
    entries: Vec<ResourceEntry>,
}

impl ResourceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ResourceEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with this key
    pub fn get(&self, key: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// True if any entry with this key holds a non-blank value
    pub fn has_value(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key && !e.is_blank())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Copy of this store with `entry` added at the tail
    pub fn appended(&self, entry: ResourceEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend(self.entries.iter().cloned());
        entries.push(entry);
        Self { entries }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ResourceStore {
        ResourceStore::from_entries(vec![
            ResourceEntry::new("A", ""),
            ResourceEntry::new("B", "bee").with_comment(Some("note".to_string())),
            ResourceEntry::new("A", "second"),
        ])
    }

    #[test]
    fn get_returns_first_occurrence() {
        let store = store();
        assert_eq!(store.get("A").unwrap().value(), "");
    }

    #[test]
    fn has_value_looks_at_every_occurrence() {
        let store = store();
        assert!(store.has_value("A"));
        assert!(store.has_value("B"));
        assert!(!store.has_value("C"));
    }

    #[test]
    fn whitespace_value_is_blank() {
        assert!(ResourceEntry::new("K", "  \t").is_blank());
        assert!(!ResourceEntry::new("K", " x ").is_blank());
    }

    #[test]
    fn appended_leaves_original_untouched() {
        let original = store();
        let next = original.appended(ResourceEntry::new("C", "sea"));

        assert_eq!(original.len(), 3);
        assert_eq!(next.len(), 4);
        assert_eq!(next.entries()[3].key(), "C");
        assert_eq!(&next.entries()[..3], original.entries());
    }

    #[test]
    fn comment_is_preserved() {
        let store = store();
        assert_eq!(store.get("B").unwrap().comment(), Some("note"));
        assert_eq!(store.get("A").unwrap().comment(), None);
    }
}
