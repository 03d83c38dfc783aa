//! Model identifier configuration.

/// Model identifiers injected into the Gemini adapter.
///
/// The identifiers are configuration rather than literals at the call
/// sites, so a stale or provider-specific model name can be swapped
/// without touching the flow layer.
///
/// # Examples
///
/// ```
/// use muse_models::ModelConfig;
///
/// let config = ModelConfig::default();
/// assert!(!config.text_model().is_empty());
/// assert!(!config.image_model().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ModelConfig {
    /// Default model for structured text generation
    text_model: String,
    /// Model used for image generation
    image_model: String,
}

impl ModelConfig {
    /// Create a configuration with explicit model identifiers.
    pub fn new(text_model: impl Into<String>, image_model: impl Into<String>) -> Self {
        Self {
            text_model: text_model.into(),
            image_model: image_model.into(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// `MUSE_TEXT_MODEL` and `MUSE_IMAGE_MODEL` override the defaults when
    /// set; unset variables fall back to the development defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            text_model: std::env::var("MUSE_TEXT_MODEL").unwrap_or(defaults.text_model),
            image_model: std::env::var("MUSE_IMAGE_MODEL").unwrap_or(defaults.image_model),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text_model: "gemini-2.0-flash-lite".to_string(),
            image_model: "gemini-2.0-flash-preview-image-generation".to_string(),
        }
    }
}
