//! Canonical entries and the group index.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Separator between story and sub-story in a content key.
///
/// The ASCII unit separator cannot appear in legitimate cell content, so the
/// concatenation is unambiguous.
pub const KEY_SEPARATOR: char = '\u{1F}';

/// Build the content key for a (story, sub-story) pair.
///
/// # Examples
///
/// ```
/// use galley_core::content_key;
///
/// let key = content_key("Teh cat", "ran");
/// assert_ne!(key, content_key("Teh cat", "Ran"));
/// ```
pub fn content_key(story: &str, sub_story: &str) -> String {
    let mut key = String::with_capacity(story.len() + sub_story.len() + 1);
    key.push_str(story);
    key.push(KEY_SEPARATOR);
    key.push_str(sub_story);
    key
}

/// The unique representative of one or more rows sharing identical
/// story/sub-story content.
///
/// Serialized on the wire as `{"id": …, "story": …, "sub-story": …}` — the
/// shape the remote revision contract expects.
///
/// # Examples
///
/// ```
/// use galley_core::CanonicalEntry;
///
/// let entry = CanonicalEntry::new(0, "Teh cat", "ran");
/// let json = serde_json::to_string(&entry).unwrap();
/// assert!(json.contains("\"sub-story\":\"ran\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalEntry {
    /// Dense 0-based id assigned in first-seen order
    #[serde(rename = "id")]
    pub canonical_id: usize,
    /// The story cell content, verbatim
    pub story: String,
    /// The sub-story cell content, verbatim
    #[serde(rename = "sub-story")]
    pub sub_story: String,
}

impl CanonicalEntry {
    /// Create a new canonical entry.
    pub fn new(canonical_id: usize, story: impl Into<String>, sub_story: impl Into<String>) -> Self {
        Self {
            canonical_id,
            story: story.into(),
            sub_story: sub_story.into(),
        }
    }

    /// The content key this entry canonicalizes.
    pub fn key(&self) -> String {
        content_key(&self.story, &self.sub_story)
    }
}

/// Mapping from content key to the ordered row ids sharing that content.
///
/// Built once by the deduplicator and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl GroupIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row id to the bucket for a content key.
    pub fn append(&mut self, key: impl Into<String>, row_id: usize) {
        self.buckets.entry(key.into()).or_default().push(row_id);
    }

    /// The ordered row ids sharing a content key, if any.
    pub fn bucket(&self, key: &str) -> Option<&[usize]> {
        self.buckets.get(key).map(|ids| ids.as_slice())
    }

    /// Number of distinct content keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the index has no buckets.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
