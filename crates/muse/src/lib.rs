//! Muse — schema-validated prompt flows for creative writing.
//!
//! Muse turns structured input records into prompts for a hosted
//! generative model and parses the responses back into schema-conformant
//! records. Six built-in flows cover the creative-writing assistant's
//! surfaces: poem stanzas, song verses, character profiles, story plots,
//! script inconsistency analysis, and character concept art.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use muse::{FlowInvoker, GeminiClient, Record, creative_flows, names};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = GeminiClient::new()?;
//!     let invoker = FlowInvoker::new(driver, creative_flows()?);
//!
//!     let input = Record::from_value(json!({"theme": "loss"})).unwrap();
//!     let output = invoker.invoke(names::POEM_STANZA, &input).await?;
//!     println!("{}", output.get_str("stanza").unwrap_or_default());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use muse_core::{
    MediaSource, ModelRequest, ModelResponse, Output, Record, init_tracing,
};
pub use muse_error::{
    FieldViolation, FlowError, FlowErrorKind, GeminiError, GeminiErrorKind, MuseError,
    MuseErrorKind, MuseResult, SchemaError, TemplateError, TemplateErrorKind, ViolationKind,
    Violations,
};
pub use muse_flow::{
    FieldSpec, FieldType, FlowAction, FlowDefinition, FlowInvoker, FlowRegistry, PromptTemplate,
    Schema, creative_flows, extract_json, names,
};
pub use muse_interface::{ImageGeneration, ModelDriver};
pub use muse_models::{GeminiClient, ModelConfig};
