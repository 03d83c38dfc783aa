//! Schema validation error types.

/// The specific way a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ViolationKind {
    /// Required field is absent from the record
    #[display("required field is missing")]
    Missing,
    /// Value has a different JSON type than the schema declares
    #[display("expected {}, found {}", expected, found)]
    WrongType {
        /// Type name the schema declares
        expected: &'static str,
        /// Type name of the supplied value
        found: &'static str,
    },
    /// String value is shorter than the declared minimum length
    #[display("string of length {} is shorter than the minimum of {}", len, min)]
    TooShort {
        /// Minimum length declared by the schema
        min: usize,
        /// Actual length of the supplied value
        len: usize,
    },
    /// Value is present but empty where content is required
    #[display("value must not be empty")]
    Empty,
}

/// A validation failure attributed to a named field.
///
/// # Examples
///
/// ```
/// use muse_error::{FieldViolation, ViolationKind};
///
/// let violation = FieldViolation {
///     field: "theme".to_string(),
///     kind: ViolationKind::Missing,
/// };
/// assert!(format!("{}", violation).contains("theme"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("'{}': {}", field, kind)]
pub struct FieldViolation {
    /// Name of the field that failed, using dotted paths for nested fields
    pub field: String,
    /// Why the field failed
    pub kind: ViolationKind,
}

impl FieldViolation {
    /// Create a violation for the given field.
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// The complete set of field violations from one validation pass.
///
/// Validation never stops at the first failure; every failing field is
/// reported so the caller can surface them all at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(pub Vec<FieldViolation>);

impl Violations {
    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Append a violation.
    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    /// Iterate over the individual violations.
    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
            first = false;
        }
        Ok(())
    }
}

/// Error type for schema validation failures.
///
/// # Examples
///
/// ```
/// use muse_error::{FieldViolation, SchemaError, ViolationKind, Violations};
///
/// let violations = Violations(vec![FieldViolation::new("premise", ViolationKind::Missing)]);
/// let err = SchemaError::new(violations);
/// assert!(format!("{}", err).contains("premise"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", violations, line, file)]
pub struct SchemaError {
    /// All field violations found during validation
    pub violations: Violations,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new SchemaError with automatic location tracking.
    #[track_caller]
    pub fn new(violations: Violations) -> Self {
        let location = std::panic::Location::caller();
        Self {
            violations,
            line: location.line(),
            file: location.file(),
        }
    }
}
