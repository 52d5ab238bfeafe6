//! Default-selection synchronization.
//!
//! A select control should never sit in an undecided state unless the
//! caller opted into one via a placeholder. These functions derive the
//! value to report when the model value is empty; [`crate::SelectState`]
//! invokes them as an explicit hook after every mutation that touches the
//! choices or the model value.

use crate::normalize::NormalizedItem;
use crate::value::Value;

/// The single-select default: first item flagged for default selection
/// (computed flag or explicit caller signal), else the first item in the
/// list.
pub fn single_default(items: &[NormalizedItem]) -> Option<&Value> {
    items
        .iter()
        .find(|item| item.default_selected())
        .or_else(|| items.first())
        .map(|item| &item.attributes.value)
}

/// The multi-select default: values of all items flagged for default
/// selection, in item order. May be empty.
pub fn multi_default(items: &[NormalizedItem]) -> Vec<Value> {
    items
        .iter()
        .filter(|item| item.default_selected())
        .map(|item| item.attributes.value.clone())
        .collect()
}

/// Resolve the value the control should report when the caller has not
/// supplied one. Returns `None` when the control is already decided.
///
/// The single-select branch fires on an empty-string model value and
/// suppresses emissions equal to it; emitting what the model already
/// holds would re-trigger the hook forever. With an active placeholder
/// the default resolves to the placeholder's empty value, so the
/// suppression also keeps placeholder controls quiet. The multi-select
/// branch stays quiet for the same reason when nothing is flagged: the
/// resolved list would equal the empty array the model already holds.
pub fn auto_select(items: &[NormalizedItem], model_value: &Value, multiple: bool) -> Option<Value> {
    if items.is_empty() {
        return None;
    }

    if model_value.is_empty_string() {
        let resolved = single_default(items)?.clone();
        if resolved == *model_value {
            log::debug!("[sync] default equals the current model value, not emitting");
            return None;
        }
        log::debug!("[sync] auto-selecting {resolved}");
        return Some(resolved);
    }

    if multiple && model_value.as_array().is_some_and(<[Value]>::is_empty) {
        let resolved = multi_default(items);
        if resolved.is_empty() {
            log::debug!("[sync] no flagged values, not emitting");
            return None;
        }
        log::debug!("[sync] auto-selecting {} flagged value(s)", resolved.len());
        return Some(Value::Array(resolved));
    }

    None
}
