//! Declarative field schemas for flow inputs and outputs.
//!
//! A [`Schema`] serves two purposes: it rejects malformed input before any
//! external call is made, and it parses the model's raw response into a
//! typed result. Field descriptions are carried as metadata only; they
//! steer the model through the structured-output hint and are never
//! consulted during validation.

use muse_core::Record;
use muse_error::{FieldViolation, ViolationKind, Violations};
use serde_json::{Map, Value, json};

/// The type a field's value must have.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// A JSON string
    String,
    /// A JSON number
    Number,
    /// A JSON boolean
    Boolean,
    /// A JSON array with uniformly typed elements
    Array(Box<FieldType>),
    /// A nested JSON object described by its own schema
    Object(Schema),
}

impl FieldType {
    /// Name used in violation messages and schema hints.
    fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Array(_) => "array",
            FieldType::Object(_) => "object",
        }
    }

    /// Name of a JSON value's type, for violation messages.
    fn value_type_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Constraints for a single field.
///
/// # Examples
///
/// ```
/// use muse_flow::FieldSpec;
///
/// let spec = FieldSpec::string()
///     .at_least(1)
///     .describe("The theme or concept for the poem stanza.");
/// assert!(*spec.required());
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct FieldSpec {
    /// The type a value must have
    #[getter(skip)]
    ty: FieldType,
    /// Whether the field must be present
    required: bool,
    /// Minimum length for string values
    min_len: Option<usize>,
    /// Human-readable description, carried as hint metadata only
    description: Option<String>,
}

impl FieldSpec {
    fn new(ty: FieldType) -> Self {
        Self {
            ty,
            required: true,
            min_len: None,
            description: None,
        }
    }

    /// A required string field.
    pub fn string() -> Self {
        Self::new(FieldType::String)
    }

    /// A required number field.
    pub fn number() -> Self {
        Self::new(FieldType::Number)
    }

    /// A required boolean field.
    pub fn boolean() -> Self {
        Self::new(FieldType::Boolean)
    }

    /// A required array of strings.
    pub fn string_array() -> Self {
        Self::new(FieldType::Array(Box::new(FieldType::String)))
    }

    /// A required array of objects, each conforming to `schema`.
    pub fn object_array(schema: Schema) -> Self {
        Self::new(FieldType::Array(Box::new(FieldType::Object(schema))))
    }

    /// Mark the field optional; absence and `null` are then valid.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Require string values to have at least `min` characters.
    pub fn at_least(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }

    /// Attach a human-readable description.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// The field's declared type.
    pub fn field_type(&self) -> &FieldType {
        &self.ty
    }
}

/// An ordered set of named field constraints.
///
/// # Examples
///
/// ```
/// use muse_flow::{FieldSpec, Schema};
/// use muse_core::Record;
/// use serde_json::json;
///
/// let schema = Schema::new()
///     .field("theme", FieldSpec::string().at_least(1))
///     .field("existingPoem", FieldSpec::string().optional());
///
/// let input = Record::from_value(json!({"theme": "loss"})).unwrap();
/// assert!(schema.validate(&input).is_ok());
///
/// let bad = Record::from_value(json!({})).unwrap();
/// assert!(schema.validate(&bad).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    fields: Vec<(String, FieldSpec)>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field, consuming and returning the schema for chaining.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.push((name.into(), spec));
        self
    }

    /// Look up a field's spec by name.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, spec)| spec)
    }

    /// True when the schema declares the named field.
    pub fn has_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over declared fields in order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Validate a record against this schema.
    ///
    /// Validation never stops at the first failure: every failing field is
    /// reported. Unknown extra fields in the record are ignored.
    ///
    /// # Errors
    ///
    /// Returns the full set of field violations when any field fails.
    pub fn validate(&self, record: &Record) -> Result<(), Violations> {
        let mut violations = Violations::default();
        for (name, spec) in &self.fields {
            match record.get(name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        violations.push(FieldViolation::new(name, ViolationKind::Missing));
                    }
                }
                Some(value) => Self::check_value(name, spec, value, &mut violations),
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Check a present value against a field's spec.
    fn check_value(path: &str, spec: &FieldSpec, value: &Value, violations: &mut Violations) {
        Self::check_type(path, &spec.ty, spec.min_len, value, violations);
    }

    fn check_type(
        path: &str,
        ty: &FieldType,
        min_len: Option<usize>,
        value: &Value,
        violations: &mut Violations,
    ) {
        match ty {
            FieldType::String => match value.as_str() {
                Some(s) => {
                    if let Some(min) = min_len {
                        let len = s.chars().count();
                        if len == 0 {
                            violations.push(FieldViolation::new(path, ViolationKind::Empty));
                        } else if len < min {
                            violations.push(FieldViolation::new(
                                path,
                                ViolationKind::TooShort { min, len },
                            ));
                        }
                    }
                }
                None => Self::push_type_violation(path, ty, value, violations),
            },
            FieldType::Number => {
                if !value.is_number() {
                    Self::push_type_violation(path, ty, value, violations);
                }
            }
            FieldType::Boolean => {
                if !value.is_boolean() {
                    Self::push_type_violation(path, ty, value, violations);
                }
            }
            FieldType::Array(elem) => match value.as_array() {
                Some(items) => {
                    for (index, item) in items.iter().enumerate() {
                        let item_path = format!("{}[{}]", path, index);
                        Self::check_type(&item_path, elem, min_len, item, violations);
                    }
                }
                None => Self::push_type_violation(path, ty, value, violations),
            },
            FieldType::Object(schema) => match value.as_object() {
                Some(map) => Self::check_object(path, schema, map, violations),
                None => Self::push_type_violation(path, ty, value, violations),
            },
        }
    }

    fn check_object(
        path: &str,
        schema: &Schema,
        map: &Map<String, Value>,
        violations: &mut Violations,
    ) {
        for (name, spec) in &schema.fields {
            let field_path = format!("{}.{}", path, name);
            match map.get(name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        violations.push(FieldViolation::new(field_path, ViolationKind::Missing));
                    }
                }
                Some(value) => Self::check_value(&field_path, spec, value, violations),
            }
        }
    }

    /// Render a JSON-schema-style hint describing this schema.
    ///
    /// The hint carries field types, descriptions, and the required list.
    /// It steers the model toward the expected shape; runtime enforcement
    /// comes from [`Schema::validate`] alone.
    pub fn hint(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (name, spec) in &self.fields {
            properties.insert(name.clone(), Self::field_hint(spec));
            if spec.required {
                required.push(Value::String(name.clone()));
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    fn field_hint(spec: &FieldSpec) -> Value {
        let mut hint = Self::type_hint(&spec.ty);
        if let (Some(map), Some(description)) = (hint.as_object_mut(), &spec.description) {
            map.insert(
                "description".to_string(),
                Value::String(description.clone()),
            );
        }
        hint
    }

    fn type_hint(ty: &FieldType) -> Value {
        match ty {
            FieldType::Array(elem) => json!({
                "type": "array",
                "items": Self::type_hint(elem),
            }),
            FieldType::Object(schema) => schema.hint(),
            other => json!({"type": other.name()}),
        }
    }

    fn push_type_violation(
        path: &str,
        ty: &FieldType,
        value: &Value,
        violations: &mut Violations,
    ) {
        violations.push(FieldViolation::new(
            path,
            ViolationKind::WrongType {
                expected: ty.name(),
                found: FieldType::value_type_name(value),
            },
        ));
    }
}
