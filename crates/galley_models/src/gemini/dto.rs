//! Wire types for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// One `generateContent` request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// System-level instruction, separate from the conversation turns
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Conversation turns
    pub contents: Vec<Content>,
    /// Tool declarations (e.g., web search for grounding)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    /// Sampling configuration
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A content block: an optional role plus text parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"; absent on system instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// The text parts, in order
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Build a single-part text content block.
    pub fn from_text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(String::from),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// One text part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The text payload
    #[serde(default)]
    pub text: String,
}

/// A tool declaration.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// Enables grounding via Google Search when present
    #[serde(rename = "google_search", skip_serializing_if = "Option::is_none")]
    pub google_search: Option<serde_json::Value>,
}

impl Tool {
    /// The web-search grounding tool.
    pub fn google_search() -> Self {
        Self {
            google_search: Some(serde_json::json!({})),
        }
    }
}

/// Sampling configuration.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature; pinned to 0 for deterministic corrections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// One `generateContent` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates; the first is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> String {
        let Some(candidate) = self.candidates.first() else {
            return String::new();
        };
        candidate
            .content
            .as_ref()
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Grounding metadata, present when web search ran
    #[serde(rename = "groundingMetadata", default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Grounding metadata attached to a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingMetadata {
    /// The web chunks the response was grounded on
    #[serde(rename = "groundingChunks", default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One grounding chunk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    /// Web source, when the chunk is a web page
    #[serde(default)]
    pub web: Option<WebSource>,
}

/// A web page the response was grounded on.
#[derive(Debug, Clone, Deserialize)]
pub struct WebSource {
    /// Resolved URI of the page
    pub uri: String,
    /// Display title, when the API provides one
    #[serde(default)]
    pub title: Option<String>,
}
