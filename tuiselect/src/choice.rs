//! Choice descriptors consumed by the normalizer.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::value::Value;

/// Well-known field names on a raw choice record. Anything else is a
/// passthrough attribute.
pub const FIELD_LABEL: &str = "label";
pub const FIELD_VALUE: &str = "value";
pub const FIELD_ID: &str = "id";
pub const FIELD_SELECTED: &str = "selected";

/// Why a raw choice entry was rejected. Rejections are logged and the
/// entry skipped; they are never surfaced to the caller.
#[derive(Debug, Error, PartialEq)]
pub enum ChoiceError {
    #[error("choice entry is not a record (got {0})")]
    NotARecord(&'static str),
    #[error("choice entry is missing the `{0}` field")]
    MissingField(&'static str),
}

/// A parsed choice: display label, underlying value, optional identity
/// override, and passthrough attributes.
///
/// # Example
///
/// ```
/// use tuiselect::{Choice, Value};
///
/// let choice = Choice::new("Apple", 1).id("fruit-apple").selected(true);
/// let raw: Value = choice.into();
/// assert!(raw.as_record().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub value: Value,
    pub id: Option<String>,
    pub attributes: BTreeMap<String, Value>,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            id: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Override the list key; without it the stringified value is used.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Explicitly flag the choice as selected. The normalizer treats this
    /// as a signal only; the final flag is always computed.
    pub fn selected(mut self, selected: bool) -> Self {
        self.attributes
            .insert(FIELD_SELECTED.to_string(), Value::Bool(selected));
        self
    }

    /// Add a passthrough attribute for the rendered option.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The rendered option's key: `id` if present, else the stringified value.
    pub fn key(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| self.value.key_string())
    }

    /// Parse one raw entry. Conforming entries are records carrying a
    /// string `label` and a `value`.
    pub fn from_value(raw: &Value) -> Result<Self, ChoiceError> {
        let record = raw
            .as_record()
            .ok_or(ChoiceError::NotARecord(raw.type_name()))?;

        let label = record
            .get(FIELD_LABEL)
            .and_then(Value::as_str)
            .ok_or(ChoiceError::MissingField(FIELD_LABEL))?
            .to_string();
        let value = record
            .get(FIELD_VALUE)
            .cloned()
            .ok_or(ChoiceError::MissingField(FIELD_VALUE))?;
        let id = record.get(FIELD_ID).map(Value::key_string);

        let attributes = record
            .iter()
            .filter(|(name, _)| !matches!(name.as_str(), FIELD_LABEL | FIELD_VALUE | FIELD_ID))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Ok(Self {
            label,
            value,
            id,
            attributes,
        })
    }
}

impl From<Choice> for Value {
    fn from(choice: Choice) -> Self {
        let mut fields = choice.attributes;
        fields.insert(FIELD_LABEL.to_string(), Value::String(choice.label));
        fields.insert(FIELD_VALUE.to_string(), choice.value);
        if let Some(id) = choice.id {
            fields.insert(FIELD_ID.to_string(), Value::String(id));
        }
        Value::Record(fields)
    }
}
