//! Flow invocation error types.

use crate::Violations;

/// Specific error conditions for flow registration and invocation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FlowErrorKind {
    /// Requested flow name is not registered
    #[display("unknown flow '{}'", _0)]
    UnknownFlow(String),
    /// Input record failed validation against the flow's input schema
    #[display("invalid input: {}", _0)]
    InvalidInput(Violations),
    /// The model call failed, returned an empty payload, or returned
    /// content that does not conform to the output schema
    #[display("generation failed: {}", _0)]
    GenerationFailed(String),
    /// A flow with this name is already registered
    #[display("flow '{}' is already registered", _0)]
    DuplicateFlow(String),
}

/// Error type for flow operations.
///
/// # Examples
///
/// ```
/// use muse_error::{FlowError, FlowErrorKind};
///
/// let err = FlowError::new(FlowErrorKind::UnknownFlow("sonnet".to_string()));
/// assert!(format!("{}", err).contains("sonnet"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Flow Error: {} at line {} in {}", kind, line, file)]
pub struct FlowError {
    /// The specific error condition
    pub kind: FlowErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl FlowError {
    /// Create a new FlowError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FlowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
