//! Request and response types for model generation.

use crate::{MediaSource, Output};
use serde::{Deserialize, Serialize};

/// A single outbound generation request.
///
/// The request carries the fully rendered prompt text plus optional
/// generation parameters. When `schema_hint` is set, the adapter is
/// responsible for instructing the model to conform to the hinted shape;
/// the flow layer only validates the result.
///
/// # Examples
///
/// ```
/// use muse_core::ModelRequest;
///
/// let request = ModelRequest {
///     prompt: "Write a stanza about loss.".to_string(),
///     ..Default::default()
/// };
///
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_builder::Builder)]
#[builder(default)]
pub struct ModelRequest {
    /// The rendered prompt text to send
    pub prompt: String,
    /// Model identifier override; the adapter default applies when `None`
    pub model: Option<String>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// JSON-schema-style description of the expected output shape
    pub schema_hint: Option<serde_json::Value>,
}

impl ModelRequest {
    /// Start building a request.
    pub fn builder() -> ModelRequestBuilder {
        ModelRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use muse_core::{ModelResponse, Output};
///
/// let response = ModelResponse {
///     outputs: vec![Output::Text("In shadowed halls...".to_string())],
/// };
///
/// assert_eq!(response.text().as_deref(), Some("In shadowed halls..."));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl ModelResponse {
    /// First text output, if any.
    pub fn text(&self) -> Option<String> {
        self.outputs.iter().find_map(|output| match output {
            Output::Text(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// First image output, if any, as `(mime, source)`.
    pub fn image(&self) -> Option<(Option<&str>, &MediaSource)> {
        self.outputs.iter().find_map(|output| match output {
            Output::Image { mime, source } => Some((mime.as_deref(), source)),
            _ => None,
        })
    }
}
