//! Expansion of canonical results back onto original rows.

use galley_core::{CanonicalEntry, ExpandedResult, GroupIndex, ResultEntry};
use std::collections::HashMap;
use tracing::debug;

/// Project each canonical result onto every row id in its group bucket.
///
/// Results are keyed by canonical id, last-write-wins when the remote side
/// returned duplicate ids (in accumulation order). A canonical entry with no
/// matching result contributes nothing here — the export formatter applies
/// the user-visible fallback to original content instead, so the expanded
/// count stays ≤ the original row count and equals it exactly when the
/// response covered every canonical id.
pub fn reconcile(
    entries: &[CanonicalEntry],
    index: &GroupIndex,
    results: &[ResultEntry],
) -> Vec<ExpandedResult> {
    let mut by_id: HashMap<usize, &ResultEntry> = HashMap::with_capacity(results.len());
    for result in results {
        by_id.insert(result.canonical_id, result);
    }

    let mut expanded = Vec::new();
    for entry in entries {
        let Some(result) = by_id.get(&entry.canonical_id) else {
            debug!(canonical_id = entry.canonical_id, "No result for canonical entry");
            continue;
        };
        let Some(bucket) = index.bucket(&entry.key()) else {
            continue;
        };
        for &row_id in bucket {
            expanded.push(ExpandedResult {
                row_id,
                entry: (*result).clone(),
            });
        }
    }

    debug!(
        results = results.len(),
        expanded = expanded.len(),
        "Reconciled results onto rows"
    );
    expanded
}
