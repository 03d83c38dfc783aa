//! Flow invocation.
//!
//! The invoker orchestrates one call: resolve the flow, validate the
//! input, render the prompt, call the model driver exactly once, and
//! validate the response against the output schema. It holds no mutable
//! state, so concurrent invocations are fully independent.

use crate::{FlowAction, FlowDefinition, FlowRegistry, PromptComposer, extract_json};
use muse_core::{ModelRequest, Record};
use muse_error::{FlowError, FlowErrorKind, MuseResult};
use muse_interface::{ImageGeneration, ModelDriver};
use serde_json::Value;

/// Invokes registered flows against a model driver.
///
/// # Examples
///
/// ```rust,ignore
/// use muse_flow::{FlowInvoker, creative_flows, names};
/// use muse_core::Record;
/// use serde_json::json;
///
/// # async fn example(driver: impl muse_interface::ImageGeneration) -> muse_error::MuseResult<()> {
/// let invoker = FlowInvoker::new(driver, creative_flows()?);
/// let input = Record::from_value(json!({"premise": "A detective hunts a clockwork killer."})).unwrap();
/// let output = invoker.invoke(names::STORY_PLOT, &input).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FlowInvoker<D> {
    driver: D,
    registry: FlowRegistry,
}

impl<D: ModelDriver + ImageGeneration> FlowInvoker<D> {
    /// Create an invoker over a driver and a populated registry.
    pub fn new(driver: D, registry: FlowRegistry) -> Self {
        Self { driver, registry }
    }

    /// The registry this invoker resolves flows from.
    pub fn registry(&self) -> &FlowRegistry {
        &self.registry
    }

    /// Invoke a flow by name with a raw input record.
    ///
    /// Validation happens before any external call: an unknown flow or an
    /// invalid input never costs a network round trip. The driver is
    /// called exactly once per invocation with no retry and no caching;
    /// any driver failure, empty payload, or output-schema violation is
    /// reported as `GenerationFailed` rather than returning partial data.
    ///
    /// # Errors
    ///
    /// - `UnknownFlow` when the name is not registered
    /// - `InvalidInput` with per-field reasons when validation fails
    /// - `GenerationFailed` when the model call or output parsing fails
    #[tracing::instrument(skip(self, input), fields(flow = %name))]
    pub async fn invoke(&self, name: &str, input: &Record) -> MuseResult<Record> {
        let flow = self
            .registry
            .resolve(name)
            .ok_or_else(|| FlowError::new(FlowErrorKind::UnknownFlow(name.to_string())))?;

        if let Err(violations) = flow.input().validate(input) {
            return Err(FlowError::new(FlowErrorKind::InvalidInput(violations)).into());
        }

        match flow.action() {
            FlowAction::Structured(template) => {
                let prompt = template.render(input);
                self.invoke_structured(flow, prompt).await
            }
            FlowAction::Image {
                compose,
                media_field,
            } => self.invoke_image(flow, *compose, media_field, input).await,
        }
    }

    async fn invoke_structured(&self, flow: &FlowDefinition, prompt: String) -> MuseResult<Record> {
        let request = ModelRequest {
            prompt,
            schema_hint: Some(flow.output().hint()),
            ..Default::default()
        };

        let response = self
            .driver
            .generate(&request)
            .await
            .map_err(|e| generation_failed(e.to_string()))?;

        let text = response.text().unwrap_or_default();
        if text.trim().is_empty() {
            return Err(generation_failed("model returned an empty response").into());
        }

        let json = extract_json(&text).map_err(|e| generation_failed(e.to_string()))?;
        let value: Value = serde_json::from_str(&json)
            .map_err(|e| generation_failed(format!("response is not valid JSON: {}", e)))?;
        let record = Record::from_value(value)
            .ok_or_else(|| generation_failed("response JSON is not an object"))?;

        if let Err(violations) = flow.output().validate(&record) {
            return Err(generation_failed(format!(
                "response does not conform to the output schema: {}",
                violations
            ))
            .into());
        }

        Ok(record)
    }

    async fn invoke_image(
        &self,
        flow: &FlowDefinition,
        compose: PromptComposer,
        media_field: &str,
        input: &Record,
    ) -> MuseResult<Record> {
        let prompt = compose(input);

        let media = self
            .driver
            .generate_image(&prompt)
            .await
            .map_err(|e| generation_failed(e.to_string()))?;

        if media.is_empty() {
            return Err(generation_failed("image generation returned no data").into());
        }

        let mut record = Record::new();
        record.insert(
            media_field,
            Value::String(media.to_data_uri("image/png")),
        );

        if let Err(violations) = flow.output().validate(&record) {
            return Err(generation_failed(format!(
                "image result does not conform to the output schema: {}",
                violations
            ))
            .into());
        }

        Ok(record)
    }
}

#[track_caller]
fn generation_failed(message: impl Into<String>) -> FlowError {
    FlowError::new(FlowErrorKind::GenerationFailed(message.into()))
}
