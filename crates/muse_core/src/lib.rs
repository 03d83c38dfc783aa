//! Core data types for the Muse creative-writing flow library.
//!
//! This crate provides the foundation data types shared by the flow layer
//! and the model adapters: invocation records, model requests/responses,
//! output payloads, and media sources.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod output;
mod record;
mod request;
mod telemetry;

pub use media::MediaSource;
pub use output::Output;
pub use record::Record;
pub use request::{ModelRequest, ModelRequestBuilder, ModelResponse};
pub use telemetry::init_tracing;
