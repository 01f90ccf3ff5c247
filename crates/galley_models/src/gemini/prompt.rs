//! Prompt construction for the revision modes.

use galley_core::CanonicalEntry;
use galley_error::{GalleyResult, JsonError};

/// System instruction for spelling-correction mode.
///
/// The contract the pipeline depends on: identical cardinality and ids,
/// spelling-only edits, bare JSON out.
pub const CORRECTION_SYSTEM_INSTRUCTION: &str = "You are a meticulous copy editor. \
The user message is a JSON array of records, each with the fields \"id\", \"story\", \
and \"sub-story\". Return ONLY a minified JSON array containing the same records in \
the same order with the same ids. In each record, \"story\" and \"sub-story\" must \
be either unchanged or corrected for spelling mistakes only. Never change \
punctuation, grammar, wording, or meaning. Correct a proper-noun misspelling only \
when the intended name is unambiguous. Do not wrap the output in markdown and do \
not add commentary.";

/// System instruction for fact-check mode.
pub const FACT_CHECK_SYSTEM_INSTRUCTION: &str = "You are a careful fact checker with \
access to web search. The user message is a JSON array of records, each with the \
fields \"id\", \"story\", and \"sub-story\". Verify the factual claims in each field \
against web sources. Return ONLY a minified JSON array with one record per input, \
keeping the same ids, where each record has the fields \"id\", \"story_analysis\", \
and \"sub-story_analysis\" summarizing whether the claims are supported, \
contradicted, or unverifiable, citing what you found. Do not wrap the output in \
markdown and do not add commentary.";

/// Serialize one chunk as the minified request payload.
pub fn user_payload(chunk: &[CanonicalEntry]) -> GalleyResult<String> {
    serde_json::to_string(chunk)
        .map_err(|e| JsonError::new(format!("Failed to serialize chunk: {}", e)).into())
}
