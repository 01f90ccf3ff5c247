//! Google Gemini revision driver.
//!
//! Talks to the `generateContent` REST endpoint with `reqwest`. Correction
//! mode sends a zero-temperature request and expects a minified JSON array
//! back; fact-check mode additionally attaches the `google_search` tool and
//! reads grounding citations out of the response metadata.

mod dto;
mod parse;
mod prompt;

pub use dto::GenerateContentResponse;
pub use parse::parse_entries;
pub use prompt::{CORRECTION_SYSTEM_INSTRUCTION, FACT_CHECK_SYSTEM_INSTRUCTION, user_payload};

use async_trait::async_trait;
use galley_core::{CanonicalEntry, Mode, RevisionBatch, SourceCitation};
use galley_error::{GalleyResult, RemoteError, RemoteErrorKind};
use galley_interface::RevisionDriver;
use reqwest::Client;
use std::collections::HashSet;
use std::env;
use tracing::{debug, error, instrument};

use dto::{Content, GenerateContentRequest, GenerationConfig, Tool};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Gemini API client implementing [`RevisionDriver`].
#[derive(Debug, Clone)]
pub struct GeminiReviser {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiReviser {
    /// Create a new reviser using the default model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    pub fn new() -> GalleyResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| RemoteError::new(RemoteErrorKind::MissingApiKey))?;
        Ok(Self::with_model(api_key, DEFAULT_MODEL))
    }

    /// Create a new reviser with an explicit API key and model.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key
    /// * `model` - Model identifier (e.g., "gemini-2.0-flash-lite")
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!(model = %model, "Creating new Gemini reviser");
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Sends one request to the Gemini API.
    #[instrument(skip(self, request))]
    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> GalleyResult<GenerateContentResponse> {
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                RemoteError::new(RemoteErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(RemoteError::new(RemoteErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response envelope");
            RemoteError::new(RemoteErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
            .into()
        })
    }

    /// Builds the mode-specific request for one chunk.
    fn build_request(&self, chunk: &[CanonicalEntry], mode: Mode) -> GalleyResult<GenerateContentRequest> {
        let system = match mode {
            Mode::Correct => CORRECTION_SYSTEM_INSTRUCTION,
            Mode::FactCheck => FACT_CHECK_SYSTEM_INSTRUCTION,
        };

        let tools = match mode {
            Mode::Correct => Vec::new(),
            Mode::FactCheck => vec![Tool::google_search()],
        };

        Ok(GenerateContentRequest {
            system_instruction: Some(Content::from_text(None, system)),
            contents: vec![Content::from_text(Some("user"), user_payload(chunk)?)],
            tools,
            generation_config: Some(GenerationConfig { temperature: Some(0.0) }),
        })
    }
}

/// Extract grounding citations from a response, deduplicated by URL in
/// first-seen order.
pub fn collect_sources(response: &GenerateContentResponse) -> Vec<SourceCitation> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut sources = Vec::new();

    for candidate in &response.candidates {
        let Some(metadata) = &candidate.grounding_metadata else {
            continue;
        };
        for chunk in &metadata.grounding_chunks {
            let Some(web) = &chunk.web else { continue };
            if seen.insert(web.uri.as_str()) {
                sources.push(SourceCitation {
                    title: web.title.clone().unwrap_or_else(|| web.uri.clone()),
                    url: web.uri.clone(),
                });
            }
        }
    }

    sources
}

#[async_trait]
impl RevisionDriver for GeminiReviser {
    #[instrument(skip(self, chunk), fields(entries = chunk.len(), mode = %mode))]
    async fn revise(&self, chunk: &[CanonicalEntry], mode: Mode) -> GalleyResult<RevisionBatch> {
        let request = self.build_request(chunk, mode)?;
        let response = self.generate(&request).await?;

        let text = response.text();
        if text.trim().is_empty() {
            error!("Gemini response contained no text");
            return Err(RemoteError::new(RemoteErrorKind::EmptyResponse).into());
        }

        let entries = parse_entries(&text, mode)?;
        let sources = match mode {
            Mode::Correct => Vec::new(),
            Mode::FactCheck => collect_sources(&response),
        };

        debug!(
            entries = entries.len(),
            sources = sources.len(),
            "Parsed revision batch"
        );
        Ok(RevisionBatch { entries, sources })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
