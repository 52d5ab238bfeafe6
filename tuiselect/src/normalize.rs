//! Choice normalization: raw records plus an optional placeholder become
//! an ordered list of render-ready items.

use std::collections::BTreeMap;

use crate::choice::{Choice, FIELD_SELECTED};
use crate::value::Value;

/// Key of the synthetic placeholder item.
pub const PLACEHOLDER_KEY: &str = "placeholder";

/// Attributes carried on a rendered option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionAttributes {
    pub value: Value,
    /// Computed selection flag: value membership (or equality) against the
    /// model, forced off while a placeholder is present. This is what the
    /// rendered option carries.
    pub selected: bool,
    /// The caller's raw `selected` signal, before the computed flag
    /// replaced it. Items carrying `Some(true)` participate in default
    /// selection when the model value is empty.
    pub explicit_selected: Option<bool>,
    /// Passthrough attributes. Holds a `selected` entry only when the raw
    /// record supplied one explicitly, and then it mirrors the computed
    /// flag rather than the caller's value.
    pub extra: BTreeMap<String, Value>,
}

/// One entry of the normalized list, ready for rendering and selection
/// logic. Items are recomputed whenever the inputs change and carry no
/// identity across recomputation beyond their key.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    pub label: String,
    pub key: String,
    pub attributes: OptionAttributes,
}

impl NormalizedItem {
    fn placeholder(label: &str) -> Self {
        Self {
            label: label.to_string(),
            key: PLACEHOLDER_KEY.to_string(),
            attributes: OptionAttributes {
                value: Value::empty_string(),
                selected: true,
                explicit_selected: None,
                extra: BTreeMap::new(),
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.key == PLACEHOLDER_KEY
    }

    /// Whether this item participates in default selection: the computed
    /// flag, or the caller's explicit `selected` signal.
    pub fn default_selected(&self) -> bool {
        self.attributes.selected || self.attributes.explicit_selected == Some(true)
    }
}

/// Normalize a raw choice list against the current model value.
///
/// A non-empty placeholder contributes a synthetic first item that is
/// always selected and forces every real item to unselected. Entries that
/// are not conforming records are skipped, never an error.
pub fn normalize(choices: &[Value], model_value: &Value, placeholder: &str) -> Vec<NormalizedItem> {
    let placeholder_active = !placeholder.is_empty();
    let mut items = Vec::with_capacity(choices.len() + usize::from(placeholder_active));

    if placeholder_active {
        items.push(NormalizedItem::placeholder(placeholder));
    }

    for raw in choices {
        let choice = match Choice::from_value(raw) {
            Ok(choice) => choice,
            Err(err) => {
                log::debug!("[normalize] skipping entry: {err}");
                continue;
            }
        };

        let selected = match model_value.as_array() {
            Some(values) => values.contains(&choice.value) && !placeholder_active,
            None => *model_value == choice.value && !placeholder_active,
        };

        let key = choice.key();
        let mut extra = choice.attributes;
        // A caller-supplied `selected` is a default-selection signal, not
        // selection truth; the rendered attribute is always the computed
        // flag. The raw signal is kept for the synchronizer.
        let explicit_selected = extra.get(FIELD_SELECTED).and_then(Value::as_bool);
        if let Some(explicit) = extra.get_mut(FIELD_SELECTED) {
            *explicit = Value::Bool(selected);
        }

        items.push(NormalizedItem {
            label: choice.label,
            key,
            attributes: OptionAttributes {
                value: choice.value,
                selected,
                explicit_selected,
                extra,
            },
        });
    }

    items
}
