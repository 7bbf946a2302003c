//! Field rule and violation types.

use serde::Serialize;
use serde_json::Value;

/// JSON shape a field value must have before its constraints are checked.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Text,
    /// A number with no fractional part. Integral floats such as `1999.0`
    /// are accepted and normalized to integers.
    Integer,
    Number,
    /// An array whose elements must each be one of the listed strings.
    EnumList(&'static [&'static str]),
}

impl FieldType {
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            FieldType::Text => "a string",
            FieldType::Integer => "an integer",
            FieldType::Number => "a number",
            FieldType::EnumList(_) => "an array",
        }
    }
}

/// A check applied to a value that already has the right [`FieldType`].
/// Numeric bounds are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Min(f64),
    Max(f64),
    /// Strictly greater than zero.
    Positive,
    /// Syntactically valid absolute URL.
    Url,
}

/// Schema entry for a single field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    /// Inserted when the field is absent from a full record.
    pub default: Option<Value>,
    pub constraints: Vec<Constraint>,
    pub required_message: Option<&'static str>,
    pub type_message: Option<&'static str>,
    pub constraint_message: Option<&'static str>,
}

impl FieldRule {
    /// A required field with no constraints and generated messages.
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
            default: None,
            constraints: Vec::new(),
            required_message: None,
            type_message: None,
            constraint_message: None,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldType::Text)
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldType::Integer)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn enum_list(name: &'static str, allowed: &'static [&'static str]) -> Self {
        Self::new(name, FieldType::EnumList(allowed))
    }

    /// Make the field optional; a full record missing it gets `value`.
    pub fn default_value(mut self, value: Value) -> Self {
        self.required = false;
        self.default = Some(value);
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.constraints.push(Constraint::Min(min));
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.constraints.push(Constraint::Max(max));
        self
    }

    pub fn positive(mut self) -> Self {
        self.constraints.push(Constraint::Positive);
        self
    }

    pub fn url(mut self) -> Self {
        self.constraints.push(Constraint::Url);
        self
    }

    pub fn required_message(mut self, message: &'static str) -> Self {
        self.required_message = Some(message);
        self
    }

    pub fn type_message(mut self, message: &'static str) -> Self {
        self.type_message = Some(message);
        self
    }

    pub fn constraint_message(mut self, message: &'static str) -> Self {
        self.constraint_message = Some(message);
        self
    }
}

/// What went wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    InvalidType,
    NotInteger,
    TooSmall,
    TooBig,
    InvalidUrl,
    InvalidEnum,
}

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Top-level field name; empty when the input itself has the wrong shape.
    pub field: String,
    /// Element position for violations inside a list field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub kind: ViolationKind,
    pub message: String,
}

/// Ordered list of violations for one input. Serializes as a bare array.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed: {}", summarize(.issues))]
pub struct ValidationError {
    issues: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldViolation>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldViolation] {
        &self.issues
    }

    /// Whether any violation concerns `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    /// First violation reported for `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldViolation> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}

fn summarize(issues: &[FieldViolation]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
