//! Gemini client for structured text generation.
//!
//! The client maintains a pool of model-specific SDK clients, created
//! lazily on first use. Requests may override the default model via
//! `ModelRequest.model`; each distinct model gets its own pooled client.
//!
//! Calls are single-shot: one request produces at most one outbound API
//! call, and failures propagate to the caller without retry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::instrument;

use gemini_rust::{Gemini, client::Model};

use muse_core::{ModelRequest, ModelResponse, Output};
use muse_error::{GeminiError, GeminiErrorKind, MuseResult};
use muse_interface::ModelDriver;

use super::GeminiResult;
use crate::ModelConfig;

/// Client for the Google Gemini API with per-model client pooling.
///
/// # Example
///
/// ```no_run
/// use muse_models::GeminiClient;
/// use muse_core::ModelRequest;
/// use muse_interface::ModelDriver;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?;
///
/// let request = ModelRequest::builder()
///     .prompt("Write one line about rain.".to_string())
///     .build()?;
/// let response = client.generate(&request).await?;
/// # Ok(())
/// # }
/// ```
pub struct GeminiClient {
    /// Cache of model-specific SDK clients
    clients: Arc<Mutex<HashMap<String, Gemini>>>,
    /// HTTP client for the REST image endpoint
    pub(super) http: reqwest::Client,
    /// API key for creating new clients
    pub(super) api_key: String,
    /// Injected model identifiers
    pub(super) config: ModelConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let client_count = self.clients.lock().map(|c| c.len()).unwrap_or(0);
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .field("cached_clients", &client_count)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client with model identifiers from the
    /// environment.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> MuseResult<Self> {
        Self::with_config(ModelConfig::from_env()).map_err(Into::into)
    }

    /// Create a new Gemini client with an explicit model configuration.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    pub fn with_config(config: ModelConfig) -> GeminiResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            http: reqwest::Client::new(),
            api_key,
            config,
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Uses Model::Custom for unrecognized model names, adding the
    /// "models/" prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Get or lazily create the pooled SDK client for a model.
    fn client_for(&self, model_name: &str) -> GeminiResult<Gemini> {
        let mut clients = self.clients.lock().unwrap();
        if let Some(client) = clients.get(model_name) {
            return Ok(client.clone());
        }

        let model_enum = Self::model_name_to_enum(model_name);
        let client = Gemini::with_model(&self.api_key, model_enum)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;
        clients.insert(model_name.to_string(), client.clone());
        Ok(client)
    }

    /// Append the structured-output instruction block when a schema hint
    /// is present.
    ///
    /// Instructing the model to conform to the hinted shape is the
    /// adapter's job; the flow layer validates the result but never
    /// polices the model's behavior.
    pub(super) fn compose_prompt(req: &ModelRequest) -> String {
        match &req.schema_hint {
            Some(hint) => format!(
                "{}\n\nRespond with ONLY a valid JSON object conforming to this schema:\n{}\nDo not include any text outside the JSON object.",
                req.prompt, hint
            ),
            None => req.prompt.clone(),
        }
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &ModelRequest) -> GeminiResult<ModelResponse> {
        let model_name = req
            .model
            .as_deref()
            .unwrap_or(self.config.text_model().as_str());
        let client = self.client_for(model_name)?;

        let prompt = Self::compose_prompt(req);

        let mut builder = client.generate_content().with_user_message(&prompt);

        if let Some(temp) = req.temperature {
            builder = builder.with_temperature(temp);
        }

        if let Some(max_tok) = req.max_tokens {
            builder = builder.with_max_output_tokens(max_tok as i32);
        }

        let response = builder.execute().await.map_err(Self::parse_gemini_error)?;

        let text = response.text();

        Ok(ModelResponse {
            outputs: vec![Output::Text(text)],
        })
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    ///
    /// Converts generic API error strings into structured GeminiError
    /// with HTTP status codes when available.
    pub(super) fn parse_gemini_error(err: impl std::fmt::Display) -> GeminiError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GeminiError::new(GeminiErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from error message string.
    ///
    /// Parses strings like "bad response from server; code 503;
    /// description: ..." and extracts the numeric status code.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }
}

#[async_trait]
impl ModelDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model = ?req.model))]
    async fn generate(&self, req: &ModelRequest) -> MuseResult<ModelResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.text_model()
    }
}
