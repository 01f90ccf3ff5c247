//! Content-exact deduplication of (story, sub-story) pairs.

use galley_core::{
    CanonicalEntry, GroupIndex, RowTable, STORY_COLUMN, SUB_STORY_COLUMN, content_key,
};
use std::collections::HashSet;
use tracing::debug;

/// Group rows by exact (story, sub-story) content.
///
/// Produces one [`CanonicalEntry`] per distinct pair, with dense 0-based ids
/// assigned in strict first-seen input order, plus the [`GroupIndex`] mapping
/// each content key back to every original row id sharing it. Missing fields
/// are treated as empty strings.
///
/// Determinism: the output depends only on the input row order, never on map
/// iteration order.
pub fn deduplicate(table: &RowTable) -> (Vec<CanonicalEntry>, GroupIndex) {
    let mut entries = Vec::new();
    let mut index = GroupIndex::new();
    let mut seen: HashSet<String> = HashSet::new();

    for row in &table.rows {
        let story = row.field_or_empty(STORY_COLUMN);
        let sub_story = row.field_or_empty(SUB_STORY_COLUMN);
        let key = content_key(story, sub_story);

        if seen.insert(key.clone()) {
            entries.push(CanonicalEntry::new(entries.len(), story, sub_story));
        }
        index.append(key, row.id);
    }

    debug!(
        rows = table.len(),
        canonical = entries.len(),
        "Deduplicated input rows"
    );
    (entries, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_core::Row;
    use std::collections::HashMap;

    fn table(pairs: &[(&str, &str)]) -> RowTable {
        let rows = pairs
            .iter()
            .enumerate()
            .map(|(id, (story, sub))| {
                let mut fields = HashMap::new();
                fields.insert(STORY_COLUMN.to_string(), story.to_string());
                fields.insert(SUB_STORY_COLUMN.to_string(), sub.to_string());
                Row { id, fields }
            })
            .collect();
        RowTable {
            columns: vec![STORY_COLUMN.to_string(), SUB_STORY_COLUMN.to_string()],
            rows,
        }
    }

    #[test]
    fn test_identical_pairs_share_a_canonical_id() {
        let table = table(&[("Teh cat", "ran"), ("Teh cat", "ran"), ("The dog", "jumped")]);
        let (entries, index) = deduplicate(&table);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].canonical_id, 0);
        assert_eq!(entries[0].story, "Teh cat");
        assert_eq!(entries[1].canonical_id, 1);

        assert_eq!(index.bucket(&entries[0].key()), Some(&[0, 1][..]));
        assert_eq!(index.bucket(&entries[1].key()), Some(&[2][..]));
    }

    #[test]
    fn test_dedup_is_content_exact() {
        // Case and whitespace differences produce distinct canonical ids.
        let table = table(&[
            ("The cat", "ran"),
            ("the cat", "ran"),
            ("The cat", "ran "),
            ("The cat", "ran"),
        ]);
        let (entries, index) = deduplicate(&table);

        assert_eq!(entries.len(), 3);
        assert_eq!(index.bucket(&entries[0].key()), Some(&[0, 3][..]));
    }

    #[test]
    fn test_canonical_order_follows_input_order() {
        let table = table(&[("b", "2"), ("a", "1"), ("c", "3"), ("a", "1")]);
        let (entries, _) = deduplicate(&table);

        let stories: Vec<&str> = entries.iter().map(|e| e.story.as_str()).collect();
        assert_eq!(stories, vec!["b", "a", "c"]);
        let ids: Vec<usize> = entries.iter().map(|e| e.canonical_id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_missing_fields_treated_as_empty() {
        let mut fields = HashMap::new();
        fields.insert(STORY_COLUMN.to_string(), "only story".to_string());
        let rows = vec![Row { id: 0, fields }];
        let table = RowTable {
            columns: vec![STORY_COLUMN.to_string()],
            rows,
        };

        let (entries, index) = deduplicate(&table);
        assert_eq!(entries[0].sub_story, "");
        assert_eq!(index.bucket(&content_key("only story", "")), Some(&[0][..]));
    }
}
