//! Image generation via the Gemini REST API.
//!
//! The `gemini-rust` SDK does not expose image response modalities, so the
//! image path calls the `generateContent` REST endpoint directly and
//! decodes the first inline-data part of the response.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use muse_core::MediaSource;
use muse_error::{GeminiError, GeminiErrorKind, MuseResult};
use muse_interface::ImageGeneration;

use super::GeminiResult;
use super::client::GeminiClient;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    data: String,
}

impl GeminiClient {
    /// Internal image generation that returns Gemini-specific errors.
    async fn generate_image_internal(&self, prompt: &str) -> GeminiResult<MediaSource> {
        let model = self.config.image_model();
        let url = format!("{}/{}:generateContent", BASE_URL, model);
        debug!(url = %url, "Sending Gemini image request");

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            },
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message,
            }));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseDecode(e.to_string())))?;

        let inline = parsed
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .find_map(|part| part.inline_data)
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingImageData))?;

        if inline.data.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingImageData));
        }

        // The caller expects an embeddable reference, so the base64 payload
        // is rendered as a data URI with the reported MIME type up front.
        let mime = inline.mime_type.as_deref().unwrap_or("image/png");
        let data_uri = MediaSource::Base64(inline.data).to_data_uri(mime);
        Ok(MediaSource::Url(data_uri))
    }
}

#[async_trait]
impl ImageGeneration for GeminiClient {
    #[instrument(skip(self, prompt))]
    async fn generate_image(&self, prompt: &str) -> MuseResult<MediaSource> {
        self.generate_image_internal(prompt)
            .await
            .map_err(Into::into)
    }
}
