//! Remote results and their projection onto rows.

use serde::{Deserialize, Serialize};

/// One remote result, matched back to its canonical entry by id.
///
/// Which fields are populated depends on the processing mode: correction
/// fills the `corrected_*` pair, fact-checking fills the `*_analysis` pair.
/// The remote side may omit entries or return them out of order; consumers
/// match by `canonical_id` rather than position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Canonical id this result answers
    pub canonical_id: usize,
    /// Spelling-corrected story text (correction mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_story: Option<String>,
    /// Spelling-corrected sub-story text (correction mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_sub_story: Option<String>,
    /// Verification analysis for the story (fact-check mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_analysis: Option<String>,
    /// Verification analysis for the sub-story (fact-check mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_story_analysis: Option<String>,
}

/// A web source cited by the fact-check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Display title of the source
    pub title: String,
    /// URI of the source
    pub url: String,
}

/// Everything one remote invocation returns.
///
/// # Examples
///
/// ```
/// use galley_core::RevisionBatch;
///
/// let batch = RevisionBatch::default();
/// assert!(batch.entries.is_empty());
/// assert!(batch.sources.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionBatch {
    /// Per-canonical-entry results, at most one per input entry expected
    pub entries: Vec<ResultEntry>,
    /// Source citations (fact-check mode; empty otherwise)
    #[serde(default)]
    pub sources: Vec<SourceCitation>,
}

/// A [`ResultEntry`] projected onto one original row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedResult {
    /// Original row id the result applies to
    pub row_id: usize,
    /// The shared result content
    pub entry: ResultEntry,
}
