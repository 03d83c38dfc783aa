//! Prompt template error types.

/// Specific error conditions for template parsing and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// A `{{#if field}}` block was never closed
    #[display("conditional block on '{}' is never closed", _0)]
    UnclosedConditional(String),
    /// A `{{/if}}` appeared without a matching `{{#if}}`
    #[display("'{{{{/if}}}}' without a matching '{{{{#if}}}}'")]
    UnexpectedClose,
    /// A field reference was left unterminated
    #[display("unterminated field reference starting at offset {}", _0)]
    UnterminatedReference(usize),
    /// A field reference contained no name
    #[display("empty field reference")]
    EmptyReference,
    /// Template references a field the input schema does not declare
    #[display("template references unknown field '{}'", _0)]
    UnknownField(String),
}

/// Error type for template operations.
///
/// # Examples
///
/// ```
/// use muse_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::EmptyReference);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
