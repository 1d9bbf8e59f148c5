//! Tag set - ordered, duplicate-free hashtags

use super::composer::post_len;

/// Ordered collection of hashtags without the leading `#`.
///
/// Insertion order is preserved and entries are unique under exact,
/// case-sensitive comparison. No normalization is applied: `Rust` and
/// `rust` are different tags, and whitespace inside a tag is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag. Returns false (and changes nothing) if the tag is
    /// empty or already present.
    pub fn add(&mut self, tag: &str) -> bool {
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove every entry equal to `tag`. Returns false if none matched.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Remove by display index, returning the removed tag
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tags.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// Tags joined by single spaces, without `#` (the counted form)
    pub fn joined(&self) -> String {
        self.tags.join(" ")
    }

    /// Tags rendered as `#tag`, joined by single spaces
    pub fn hashtags(&self) -> String {
        self.tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Length of `joined()` in the budget's unit, without allocating
    pub fn counted_len(&self) -> usize {
        let units: usize = self.tags.iter().map(|t| post_len(t)).sum();
        units + self.tags.len().saturating_sub(1)
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.add(tag);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_empty_and_duplicates() {
        let mut tags = TagSet::new();
        assert!(!tags.add(""));
        assert!(tags.add("rust"));
        assert!(!tags.add("rust"));
        assert!(tags.add("Rust"));
        assert_eq!(tags.as_slice(), ["rust", "Rust"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut tags: TagSet = ["a", "b"].into_iter().collect();
        assert!(!tags.remove("c"));
        assert_eq!(tags.len(), 2);
        assert!(tags.remove("a"));
        assert_eq!(tags.as_slice(), ["b"]);
    }

    #[test]
    fn test_readded_tag_goes_to_the_end() {
        let mut tags = TagSet::new();
        assert!(tags.add("a"));
        assert!(tags.add("b"));
        assert!(tags.remove("a"));
        assert!(tags.add("a"));
        assert_eq!(tags.as_slice(), ["b", "a"]);

        assert!(tags.add("c"));
        assert!(tags.remove("b"));
        assert!(!tags.add("a"));
        assert!(tags.add("b"));
        assert_eq!(tags.as_slice(), ["a", "c", "b"]);
    }

    #[test]
    fn test_remove_at() {
        let mut tags: TagSet = ["a", "b", "c"].into_iter().collect();
        assert_eq!(tags.remove_at(1).as_deref(), Some("b"));
        assert_eq!(tags.remove_at(5), None);
        assert_eq!(tags.joined(), "a c");
    }

    #[test]
    fn test_joined_and_hashtags() {
        let tags: TagSet = ["news", "tech"].into_iter().collect();
        assert_eq!(tags.joined(), "news tech");
        assert_eq!(tags.hashtags(), "#news #tech");
        assert_eq!(tags.counted_len(), 9);
    }

    #[test]
    fn test_counted_len_uses_utf16_units() {
        let tags: TagSet = ["🔥", "é"].into_iter().collect();
        // "🔥 é": 2 + 1 + 1
        assert_eq!(tags.counted_len(), 4);
    }

    #[test]
    fn test_counted_len_empty() {
        assert_eq!(TagSet::new().counted_len(), 0);
        assert_eq!(TagSet::new().hashtags(), "");
    }

    #[test]
    fn test_whitespace_is_not_stripped() {
        let mut tags = TagSet::new();
        assert!(tags.add(" spaced "));
        assert!(tags.contains(" spaced "));
        assert!(!tags.contains("spaced"));
    }
}
