//! Model provider adapters for Muse.
//!
//! Currently a single provider is supported: Google Gemini. Text flows use
//! the `gemini-rust` SDK; image generation goes through the REST
//! `generateContent` endpoint directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gemini;

pub use config::ModelConfig;
pub use gemini::GeminiClient;
