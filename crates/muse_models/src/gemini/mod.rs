//! Google Gemini API implementation.

mod client;
mod image;

pub use client::GeminiClient;

use muse_error::GeminiError;

/// Result type for Gemini operations.
pub(crate) type GeminiResult<T> = std::result::Result<T, GeminiError>;
