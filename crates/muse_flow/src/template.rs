//! Compiled prompt templates.
//!
//! Templates mix literal text with field references (`{{name}}` or
//! `{{{name}}}`) and conditional blocks guarded by optional-field presence
//! (`{{#if name}}...{{/if}}`, nestable). The source is parsed into an AST
//! once when a flow is defined, never re-parsed per call, and rendering is
//! fully deterministic.

use muse_core::Record;
use muse_error::{TemplateError, TemplateErrorKind};
use serde_json::Value;

/// One node of a compiled template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text emitted verbatim
    Literal(String),
    /// A field reference substituted from the input record
    Field(String),
    /// A block included only when the guard field is present and non-empty
    Conditional {
        /// Name of the guard field
        field: String,
        /// Nested segments rendered when the guard holds
        body: Vec<Segment>,
    },
}

/// A prompt template compiled to an AST.
///
/// # Examples
///
/// ```
/// use muse_flow::PromptTemplate;
/// use muse_core::Record;
/// use serde_json::json;
///
/// let template = PromptTemplate::parse(
///     "Theme: {{theme}}{{#if existingPoem}} Prior: {{existingPoem}}{{/if}}",
/// ).unwrap();
///
/// let input = Record::from_value(json!({"theme": "loss"})).unwrap();
/// assert_eq!(template.render(&input), "Theme: loss");
///
/// let input = Record::from_value(json!({
///     "theme": "loss",
///     "existingPoem": "old text",
/// })).unwrap();
/// assert_eq!(template.render(&input), "Theme: loss Prior: old text");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parse template source into an AST.
    ///
    /// # Errors
    ///
    /// Returns an error for unclosed conditional blocks, stray `{{/if}}`
    /// tags, unterminated references, and empty field names.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut stack: Vec<(String, Vec<Segment>)> = Vec::new();
        let mut current: Vec<Segment> = Vec::new();
        let mut rest = source;
        let mut offset = 0usize;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                current.push(Segment::Literal(rest[..open].to_string()));
            }
            let tag = &rest[open..];
            let consumed;

            if let Some(after) = tag.strip_prefix("{{#if ") {
                let end = after.find("}}").ok_or_else(|| {
                    TemplateError::new(TemplateErrorKind::UnterminatedReference(offset + open))
                })?;
                let name = after[..end].trim();
                if name.is_empty() {
                    return Err(TemplateError::new(TemplateErrorKind::EmptyReference));
                }
                stack.push((name.to_string(), std::mem::take(&mut current)));
                consumed = "{{#if ".len() + end + 2;
            } else if tag.starts_with("{{/if}}") {
                let (field, parent) = stack
                    .pop()
                    .ok_or_else(|| TemplateError::new(TemplateErrorKind::UnexpectedClose))?;
                let body = std::mem::replace(&mut current, parent);
                current.push(Segment::Conditional { field, body });
                consumed = "{{/if}}".len();
            } else if let Some(after) = tag.strip_prefix("{{{") {
                let end = after.find("}}}").ok_or_else(|| {
                    TemplateError::new(TemplateErrorKind::UnterminatedReference(offset + open))
                })?;
                let name = after[..end].trim();
                if name.is_empty() {
                    return Err(TemplateError::new(TemplateErrorKind::EmptyReference));
                }
                current.push(Segment::Field(name.to_string()));
                consumed = 3 + end + 3;
            } else {
                let after = &tag[2..];
                let end = after.find("}}").ok_or_else(|| {
                    TemplateError::new(TemplateErrorKind::UnterminatedReference(offset + open))
                })?;
                let name = after[..end].trim();
                if name.is_empty() {
                    return Err(TemplateError::new(TemplateErrorKind::EmptyReference));
                }
                current.push(Segment::Field(name.to_string()));
                consumed = 2 + end + 2;
            }

            offset += open + consumed;
            rest = &tag[consumed..];
        }

        if !rest.is_empty() {
            current.push(Segment::Literal(rest.to_string()));
        }

        if let Some((field, _)) = stack.pop() {
            return Err(TemplateError::new(TemplateErrorKind::UnclosedConditional(
                field,
            )));
        }

        Ok(Self { segments: current })
    }

    /// All field names the template references, including conditional
    /// guards, in first-appearance order without duplicates.
    pub fn referenced_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        Self::collect_fields(&self.segments, &mut fields);
        fields
    }

    fn collect_fields<'a>(segments: &'a [Segment], fields: &mut Vec<&'a str>) {
        for segment in segments {
            match segment {
                Segment::Literal(_) => {}
                Segment::Field(name) => {
                    if !fields.contains(&name.as_str()) {
                        fields.push(name);
                    }
                }
                Segment::Conditional { field, body } => {
                    if !fields.contains(&field.as_str()) {
                        fields.push(field);
                    }
                    Self::collect_fields(body, fields);
                }
            }
        }
    }

    /// Render the template against a validated input record.
    ///
    /// Identical (template, record) pairs always produce byte-identical
    /// output. Absent optional fields substitute as the empty string;
    /// conditional blocks guarded by an absent or empty field are omitted
    /// entirely, delimiters included.
    pub fn render(&self, record: &Record) -> String {
        let mut out = String::new();
        Self::render_segments(&self.segments, record, &mut out);
        out
    }

    fn render_segments(segments: &[Segment], record: &Record, out: &mut String) {
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(name) => out.push_str(&Self::value_text(record.get(name))),
                Segment::Conditional { field, body } => {
                    if Self::is_present(record.get(field)) {
                        Self::render_segments(body, record, out);
                    }
                }
            }
        }
    }

    /// Render a field value as plain prompt text.
    ///
    /// Strings and numbers substitute directly; arrays of scalars join
    /// with a comma separator. Absent values render as the empty string.
    fn value_text(value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| Self::value_text(Some(item)))
                .collect::<Vec<_>>()
                .join(", "),
            Some(other) => other.to_string(),
        }
    }

    /// A guard field holds when it is present and, for strings, non-empty.
    fn is_present(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(_) => true,
        }
    }
}
