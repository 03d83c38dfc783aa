//! Process-wide flow registration.

use crate::FlowDefinition;
use muse_error::{FlowError, FlowErrorKind, MuseResult};
use std::collections::HashMap;

/// Registry of named flows.
///
/// The registry is populated once during process initialization and read
/// thereafter; there is no runtime installation or removal. It is an
/// explicit value passed to whatever invokes flows rather than ambient
/// global state.
///
/// # Examples
///
/// ```
/// use muse_flow::{FieldSpec, FlowDefinition, FlowRegistry, Schema};
///
/// # fn main() -> muse_error::MuseResult<()> {
/// let mut registry = FlowRegistry::new();
/// registry.register(FlowDefinition::structured(
///     "poem-stanza",
///     "Generate a poem stanza",
///     Schema::new().field("theme", FieldSpec::string()),
///     Schema::new().field("stanza", FieldSpec::string()),
///     "Theme: {{theme}}",
/// )?)?;
///
/// assert!(registry.resolve("poem-stanza").is_some());
/// assert!(registry.resolve("sonnet").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlowRegistry {
    flows: HashMap<String, FlowDefinition>,
}

impl FlowRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flow definition.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateFlow` when a flow with the same name is already
    /// registered. Registration happens at process start, so a duplicate
    /// is a startup-time fatal error rather than a runtime one.
    pub fn register(&mut self, flow: FlowDefinition) -> MuseResult<()> {
        let name = flow.name().clone();
        if self.flows.contains_key(&name) {
            return Err(FlowError::new(FlowErrorKind::DuplicateFlow(name)).into());
        }
        self.flows.insert(name, flow);
        Ok(())
    }

    /// Resolve a flow by name.
    pub fn resolve(&self, name: &str) -> Option<&FlowDefinition> {
        self.flows.get(name)
    }

    /// Iterate over registered flows in name order.
    pub fn iter(&self) -> impl Iterator<Item = &FlowDefinition> {
        let mut flows: Vec<&FlowDefinition> = self.flows.values().collect();
        flows.sort_by(|a, b| a.name().cmp(b.name()));
        flows.into_iter()
    }

    /// Registered flow names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.flows.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered flows.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// True when no flows are registered.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}
