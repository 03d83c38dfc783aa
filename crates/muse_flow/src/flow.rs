//! Flow definitions.

use crate::{PromptTemplate, Schema};
use muse_core::Record;
use muse_error::{MuseResult, TemplateError, TemplateErrorKind};

/// Deterministic builder for prompts assembled by plain concatenation.
///
/// Image-style flows do not use the conditional-block template engine;
/// they concatenate descriptive fields into a single paragraph with a
/// fixed style suffix.
pub type PromptComposer = fn(&Record) -> String;

/// How a flow turns validated input into a model request.
#[derive(Debug, Clone)]
pub enum FlowAction {
    /// Render a compiled template and request structured JSON output
    Structured(PromptTemplate),
    /// Compose an image prompt and request image generation
    Image {
        /// Builds the image prompt from the validated input
        compose: PromptComposer,
        /// Output field that receives the embeddable image reference
        media_field: String,
    },
}

/// A named, schema-validated operation.
///
/// Definitions are immutable once registered: identity, input and output
/// schemas, and the prompt action are all fixed at construction.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct FlowDefinition {
    /// Unique name the registry resolves
    name: String,
    /// Human-readable description of what the flow does
    description: String,
    /// Schema the raw input must satisfy before any external call
    input: Schema,
    /// Schema the model's response must satisfy to be returned
    output: Schema,
    /// How the prompt is produced
    action: FlowAction,
}

impl FlowDefinition {
    /// Define a structured text flow from a template source.
    ///
    /// The template is compiled once here. Definitions whose templates
    /// reference fields absent from the input schema are rejected, so a
    /// mistyped field name fails at startup rather than rendering as an
    /// empty string in production prompts.
    ///
    /// # Errors
    ///
    /// Returns an error when the template fails to parse or references an
    /// undeclared field.
    pub fn structured(
        name: impl Into<String>,
        description: impl Into<String>,
        input: Schema,
        output: Schema,
        template: &str,
    ) -> MuseResult<Self> {
        let template = PromptTemplate::parse(template)?;
        for field in template.referenced_fields() {
            if !input.has_field(field) {
                return Err(TemplateError::new(TemplateErrorKind::UnknownField(
                    field.to_string(),
                ))
                .into());
            }
        }

        Ok(Self {
            name: name.into(),
            description: description.into(),
            input,
            output,
            action: FlowAction::Structured(template),
        })
    }

    /// Define an image flow from a prompt composer.
    ///
    /// `media_field` names the output-schema field that receives the
    /// embeddable image reference.
    pub fn image(
        name: impl Into<String>,
        description: impl Into<String>,
        input: Schema,
        output: Schema,
        compose: PromptComposer,
        media_field: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input,
            output,
            action: FlowAction::Image {
                compose,
                media_field: media_field.into(),
            },
        }
    }
}
