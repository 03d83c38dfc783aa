//! Top-level error wrapper types.

use crate::{FlowError, GeminiError, JsonError, SchemaError, TemplateError};

/// This is the foundation error enum for the Muse workspace.
///
/// # Examples
///
/// ```
/// use muse_error::{MuseError, JsonError};
///
/// let json_err = JsonError::new("trailing characters");
/// let err: MuseError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MuseErrorKind {
    /// Schema validation error
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Template parse or render error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Flow registration or invocation error
    #[from(FlowError)]
    Flow(FlowError),
    /// Gemini adapter error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Muse error with kind discrimination.
///
/// # Examples
///
/// ```
/// use muse_error::{MuseResult, FlowError, FlowErrorKind};
///
/// fn might_fail() -> MuseResult<()> {
///     Err(FlowError::new(FlowErrorKind::UnknownFlow("ballad".to_string())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Muse Error: {}", _0)]
pub struct MuseError(Box<MuseErrorKind>);

impl MuseError {
    /// Create a new error from a kind.
    pub fn new(kind: MuseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MuseErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MuseErrorKind
impl<T> From<T> for MuseError
where
    T: Into<MuseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Muse operations.
///
/// # Examples
///
/// ```
/// use muse_error::{MuseResult, JsonError};
///
/// fn parse() -> MuseResult<String> {
///     Err(JsonError::new("no JSON found"))?
/// }
/// ```
pub type MuseResult<T> = std::result::Result<T, MuseError>;
