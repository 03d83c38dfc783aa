//! Trait definitions for model backends and their capabilities.

use async_trait::async_trait;
use muse_core::{MediaSource, ModelRequest, ModelResponse};
use muse_error::MuseResult;

/// Core trait that all model backends must implement.
///
/// This provides the minimal interface for single-shot structured text
/// generation. Image generation is exposed through the optional
/// [`ImageGeneration`] capability trait.
///
/// Calls are asynchronous and single-shot: one request maps to at most one
/// outbound network call, and failures propagate to the caller rather than
/// being retried or swallowed.
#[async_trait]
pub trait ModelDriver: Send + Sync {
    /// Generate model output for the given request.
    ///
    /// When the request carries a schema hint, the driver must instruct
    /// the underlying model to conform to that shape; the flow layer
    /// validates the result but does not police the model's behavior.
    async fn generate(&self, req: &ModelRequest) -> MuseResult<ModelResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when `ModelRequest.model` is `None`.
    fn model_name(&self) -> &str;
}

/// Trait for backends that can generate images.
#[async_trait]
pub trait ImageGeneration: ModelDriver {
    /// Generate an image from a textual description.
    ///
    /// The returned media source must resolve to retrievable image data;
    /// drivers treat an empty payload as a failed call.
    async fn generate_image(&self, prompt: &str) -> MuseResult<MediaSource>;
}
