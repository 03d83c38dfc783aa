//! Schema-validated prompt flows for creative writing.
//!
//! This crate is the core of Muse: it turns a named flow plus a raw input
//! record into a validated prompt, sends it through a model driver exactly
//! once, and parses the response back into a schema-conformant record.
//!
//! # Example
//!
//! ```rust,ignore
//! use muse_flow::{FlowInvoker, creative_flows, names};
//! use muse_core::Record;
//! use muse_models::GeminiClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = GeminiClient::new()?;
//! let invoker = FlowInvoker::new(driver, creative_flows()?);
//!
//! let input = Record::from_value(json!({"theme": "loss"})).unwrap();
//! let output = invoker.invoke(names::POEM_STANZA, &input).await?;
//! println!("{}", output.get_str("stanza").unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod extraction;
mod flow;
mod invoker;
mod registry;
mod schema;
mod template;

pub use catalog::{creative_flows, names};
pub use extraction::extract_json;
pub use flow::{FlowAction, FlowDefinition, PromptComposer};
pub use invoker::FlowInvoker;
pub use registry::FlowRegistry;
pub use schema::{FieldSpec, FieldType, Schema};
pub use template::{PromptTemplate, Segment};
