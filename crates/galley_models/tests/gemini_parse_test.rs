// Tests for Gemini payload parsing and grounding extraction.
//
// These exercise the pure decode path without making API calls.

use galley_core::Mode;
use galley_error::{GalleyError, GalleyErrorKind, RemoteErrorKind};
use galley_models::{GenerateContentResponse, collect_sources, parse_entries};

fn assert_malformed(err: GalleyError) {
    match err.kind() {
        GalleyErrorKind::Remote(remote) => {
            assert!(matches!(remote.kind(), RemoteErrorKind::MalformedPayload(_)));
        }
        other => panic!("Expected remote error, got {:?}", other),
    }
}

#[test]
fn test_parse_minified_correction_array() {
    let payload = r#"[{"id":0,"story":"The cat","sub-story":"ran"},{"id":1,"story":"The dog","sub-story":"jumped"}]"#;

    let entries = parse_entries(payload, Mode::Correct).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].canonical_id, 0);
    assert_eq!(entries[0].corrected_story.as_deref(), Some("The cat"));
    assert_eq!(entries[1].corrected_sub_story.as_deref(), Some("jumped"));
    assert_eq!(entries[0].story_analysis, None);
}

#[test]
fn test_parse_strips_code_fence() {
    let payload = "```json\n[{\"id\":0,\"story\":\"The cat\",\"sub-story\":\"ran\"}]\n```";

    let entries = parse_entries(payload, Mode::Correct).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].corrected_story.as_deref(), Some("The cat"));
}

#[test]
fn test_parse_strips_bare_code_fence() {
    let payload = "```\n[{\"id\":3,\"story\":\"x\",\"sub-story\":\"y\"}]\n```";

    let entries = parse_entries(payload, Mode::Correct).unwrap();
    assert_eq!(entries[0].canonical_id, 3);
}

#[test]
fn test_parse_rejects_non_array() {
    let payload = r#"{"id":0,"story":"The cat","sub-story":"ran"}"#;
    assert_malformed(parse_entries(payload, Mode::Correct).unwrap_err());
}

#[test]
fn test_parse_rejects_undecodable_payload() {
    assert_malformed(parse_entries("Sorry, I cannot help with that.", Mode::Correct).unwrap_err());
}

#[test]
fn test_parse_rejects_record_without_id() {
    let payload = r#"[{"story":"The cat","sub-story":"ran"}]"#;
    assert_malformed(parse_entries(payload, Mode::Correct).unwrap_err());
}

#[test]
fn test_parse_tolerates_sparse_records() {
    // A record missing a correction field is passed through; the reconciler
    // and exporter fall back to original content downstream.
    let payload = r#"[{"id":0,"story":"The cat"}]"#;

    let entries = parse_entries(payload, Mode::Correct).unwrap();
    assert_eq!(entries[0].corrected_story.as_deref(), Some("The cat"));
    assert_eq!(entries[0].corrected_sub_story, None);
}

#[test]
fn test_parse_analysis_records() {
    let payload = r#"[{"id":0,"story_analysis":"Supported by sources.","sub-story_analysis":"Unverifiable."}]"#;

    let entries = parse_entries(payload, Mode::FactCheck).unwrap();
    assert_eq!(
        entries[0].story_analysis.as_deref(),
        Some("Supported by sources.")
    );
    assert_eq!(entries[0].sub_story_analysis.as_deref(), Some("Unverifiable."));
    assert_eq!(entries[0].corrected_story, None);
}

#[test]
fn test_response_text_concatenates_parts() {
    let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "[{\"id\":0"}, {"text": ",\"story\":\"x\"}]"}]}
        }]
    }))
    .unwrap();

    assert_eq!(response.text(), "[{\"id\":0,\"story\":\"x\"}]");
}

#[test]
fn test_response_text_empty_without_candidates() {
    let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(response.text(), "");
}

#[test]
fn test_collect_sources_dedupes_by_url() {
    let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "[]"}]},
            "groundingMetadata": {
                "groundingChunks": [
                    {"web": {"uri": "https://example.com/a", "title": "Example A"}},
                    {"web": {"uri": "https://example.com/a", "title": "Example A again"}},
                    {"web": {"uri": "https://example.com/b"}},
                    {}
                ]
            }
        }]
    }))
    .unwrap();

    let sources = collect_sources(&response);
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].title, "Example A");
    assert_eq!(sources[0].url, "https://example.com/a");
    // Title falls back to the URI when the API omits it.
    assert_eq!(sources[1].title, "https://example.com/b");
}
