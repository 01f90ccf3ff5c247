//! Response payload parsing.

use galley_core::{Mode, ResultEntry};
use galley_error::{GalleyResult, RemoteError, RemoteErrorKind};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").expect("valid code fence pattern")
});

/// Correction-mode wire record: `{id, story, "sub-story"}`.
#[derive(Debug, Deserialize)]
struct CorrectionRecord {
    id: usize,
    #[serde(default)]
    story: Option<String>,
    #[serde(rename = "sub-story", default)]
    sub_story: Option<String>,
}

/// Fact-check-mode wire record: `{id, story_analysis, "sub-story_analysis"}`.
#[derive(Debug, Deserialize)]
struct AnalysisRecord {
    id: usize,
    #[serde(default)]
    story_analysis: Option<String>,
    #[serde(rename = "sub-story_analysis", default)]
    sub_story_analysis: Option<String>,
}

/// Parse a remote text payload into result entries.
///
/// Models often wrap JSON in a markdown code fence despite instructions, so
/// a single enclosing fence is stripped first. The payload must then decode
/// to a JSON array of mode-shaped records; anything else fails the chunk.
/// Fields other than `id` are optional — a sparse record is passed through,
/// the reconciler tolerates it.
///
/// # Errors
///
/// [`RemoteErrorKind::MalformedPayload`] when the payload is not decodable
/// JSON, not an array, or contains an element without a usable `id`.
pub fn parse_entries(payload: &str, mode: Mode) -> GalleyResult<Vec<ResultEntry>> {
    let cleaned = CODE_FENCE
        .captures(payload)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(payload)
        .trim();

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        RemoteError::new(RemoteErrorKind::MalformedPayload(format!(
            "not decodable as JSON: {}",
            e
        )))
    })?;

    let Value::Array(items) = value else {
        return Err(RemoteError::new(RemoteErrorKind::MalformedPayload(
            "payload is not a JSON array".to_string(),
        ))
        .into());
    };

    items
        .into_iter()
        .map(|item| decode_record(item, mode))
        .collect()
}

fn decode_record(item: Value, mode: Mode) -> GalleyResult<ResultEntry> {
    match mode {
        Mode::Correct => {
            let record: CorrectionRecord = serde_json::from_value(item).map_err(|e| {
                RemoteError::new(RemoteErrorKind::MalformedPayload(format!(
                    "bad correction record: {}",
                    e
                )))
            })?;
            Ok(ResultEntry {
                canonical_id: record.id,
                corrected_story: record.story,
                corrected_sub_story: record.sub_story,
                ..Default::default()
            })
        }
        Mode::FactCheck => {
            let record: AnalysisRecord = serde_json::from_value(item).map_err(|e| {
                RemoteError::new(RemoteErrorKind::MalformedPayload(format!(
                    "bad analysis record: {}",
                    e
                )))
            })?;
            Ok(ResultEntry {
                canonical_id: record.id,
                story_analysis: record.story_analysis,
                sub_story_analysis: record.sub_story_analysis,
                ..Default::default()
            })
        }
    }
}
