//! Error types for the Muse library.
//!
//! This crate provides the foundation error types used throughout the Muse
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use muse_error::{MuseResult, FlowError, FlowErrorKind};
//!
//! fn lookup() -> MuseResult<String> {
//!     Err(FlowError::new(FlowErrorKind::UnknownFlow("haiku".to_string())))?
//! }
//!
//! match lookup() {
//!     Ok(name) => println!("Got: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod flow;
mod gemini;
mod json;
mod schema;
mod template;

pub use error::{MuseError, MuseErrorKind, MuseResult};
pub use flow::{FlowError, FlowErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use schema::{FieldViolation, SchemaError, ViolationKind, Violations};
pub use template::{TemplateError, TemplateErrorKind};
