//! Select form control state: props, normalization, the auto-select hook,
//! and translation of targeted key events into change events.

use std::collections::HashMap;

use crate::classes::{select_classes, InputSize, InputStyle};
use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};
use crate::normalize::{normalize, NormalizedItem};
use crate::sync::auto_select;
use crate::value::Value;

/// Props and interaction state for a single select control.
///
/// The model value is caller-owned: the control reports changes through
/// [`Event::Change`] and expects the host to feed the new value back via
/// [`SelectState::set_model_value`].
#[derive(Debug, Clone)]
pub struct SelectData {
    /// Raw choice records. Non-conforming entries are skipped during
    /// normalization.
    pub choices: Vec<Value>,
    /// Current selection: a scalar, or an array in multi-select mode.
    pub model_value: Value,
    /// Prompt option label; empty means no placeholder.
    pub placeholder: String,
    /// Selection mode.
    pub multiple: bool,
    /// Disables interaction.
    pub locked: bool,
    pub input_size: InputSize,
    pub input_style: InputStyle,
    /// Keyboard highlight among the normalized items.
    pub cursor: usize,
}

impl Default for SelectData {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
            model_value: Value::empty_string(),
            placeholder: String::new(),
            multiple: false,
            locked: false,
            input_size: InputSize::default(),
            input_style: InputStyle::default(),
            cursor: 0,
        }
    }
}

impl SelectData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choices(mut self, choices: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn model_value(mut self, value: impl Into<Value>) -> Self {
        self.model_value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn input_size(mut self, size: InputSize) -> Self {
        self.input_size = size;
        self
    }

    pub fn input_style(mut self, style: InputStyle) -> Self {
        self.input_style = style;
        self
    }

    /// Recompute the normalized items for the current props. Items carry
    /// no state across recomputation.
    pub fn items(&self) -> Vec<NormalizedItem> {
        normalize(&self.choices, &self.model_value, &self.placeholder)
    }

    /// The value the rendered widget binds to: in multi-select mode the
    /// model array, or an empty array when the model is not one.
    pub fn dom_value(&self) -> Value {
        if self.multiple {
            match &self.model_value {
                Value::Array(_) => self.model_value.clone(),
                _ => Value::Array(Vec::new()),
            }
        } else {
            self.model_value.clone()
        }
    }

    /// The computed class string for the control.
    pub fn classes(&self) -> String {
        select_classes(self.input_size, self.input_style, self.locked)
    }

    fn clamp_cursor(&mut self) {
        let len = self.items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Result of handling a key on a select control.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectEditResult {
    /// A new value was committed.
    Changed(Value),
    /// Key was handled but no value committed (cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Tracks select state for multiple elements.
#[derive(Debug, Default)]
pub struct SelectState {
    selects: HashMap<String, SelectData>,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control and run the auto-select hook once, reporting a
    /// default value if the control starts undecided.
    pub fn insert(&mut self, id: impl Into<String>, data: SelectData) -> Option<Event> {
        let id = id.into();
        self.selects.insert(id.clone(), data);
        self.sync(&id)
    }

    /// Get the control's data.
    pub fn get_data(&self, id: &str) -> Option<&SelectData> {
        self.selects.get(id)
    }

    /// Get mutable access to the control's data.
    pub fn get_data_mut(&mut self, id: &str) -> &mut SelectData {
        self.selects.entry(id.to_string()).or_default()
    }

    /// The control's current model value, `Null` if unknown.
    pub fn model_value(&self, id: &str) -> Value {
        self.selects
            .get(id)
            .map(|data| data.model_value.clone())
            .unwrap_or(Value::Null)
    }

    // -------------------------------------------------------------------------
    // Prop setters. Mutations that affect the choices or the model value
    // run the auto-select hook and return the change it produced, if any.
    // -------------------------------------------------------------------------

    pub fn set_choices(
        &mut self,
        id: &str,
        choices: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Option<Event> {
        let data = self.get_data_mut(id);
        data.choices = choices.into_iter().map(Into::into).collect();
        data.clamp_cursor();
        self.sync(id)
    }

    pub fn set_model_value(&mut self, id: &str, value: impl Into<Value>) -> Option<Event> {
        self.get_data_mut(id).model_value = value.into();
        self.sync(id)
    }

    pub fn set_placeholder(&mut self, id: &str, placeholder: impl Into<String>) -> Option<Event> {
        let data = self.get_data_mut(id);
        data.placeholder = placeholder.into();
        data.clamp_cursor();
        self.sync(id)
    }

    pub fn set_multiple(&mut self, id: &str, multiple: bool) -> Option<Event> {
        self.get_data_mut(id).multiple = multiple;
        self.sync(id)
    }

    pub fn set_locked(&mut self, id: &str, locked: bool) {
        self.get_data_mut(id).locked = locked;
    }

    /// The post-update hook: derive and report a default selection when
    /// the caller has not supplied one. Fires synchronously after the
    /// mutations above; emitting a value moves the model out of the
    /// triggering condition once the host feeds it back.
    pub fn sync(&mut self, id: &str) -> Option<Event> {
        let data = self.selects.get(id)?;
        let items = data.items();
        let value = auto_select(&items, &data.model_value, data.multiple)?;
        log::debug!("[select] {id}: reporting default {value:?}");
        Some(Event::Change {
            target: id.to_string(),
            value,
        })
    }

    /// Process events and handle select interaction.
    /// Returns events that were generated (Change) or passed through.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            match event {
                Event::Key {
                    target: Some(target),
                    key,
                    modifiers,
                } => {
                    let captures = find_element(root, target)
                        .map(|element| element.captures_input && !element.disabled)
                        .unwrap_or(false);

                    if captures && self.selects.contains_key(target) {
                        match self.handle_key(target, *key, *modifiers) {
                            SelectEditResult::Changed(value) => {
                                log::debug!("[select] {target}: change {value:?}");
                                output.push(Event::Change {
                                    target: target.clone(),
                                    value,
                                });
                                continue;
                            }
                            SelectEditResult::Handled => {
                                // Cursor moved, no event needed
                                continue;
                            }
                            SelectEditResult::Ignored => {
                                // Pass through
                            }
                        }
                    }
                    output.push(event.clone());
                }

                _ => output.push(event.clone()),
            }
        }

        output
    }

    /// Handle a key press for a select control.
    fn handle_key(&mut self, id: &str, key: Key, modifiers: Modifiers) -> SelectEditResult {
        if !modifiers.none() {
            return SelectEditResult::Ignored;
        }

        let Some(data) = self.selects.get_mut(id) else {
            return SelectEditResult::Ignored;
        };
        if data.locked {
            return SelectEditResult::Ignored;
        }

        let items = data.items();

        match key {
            Key::Up => {
                data.cursor = data.cursor.saturating_sub(1);
                SelectEditResult::Handled
            }

            Key::Down => {
                data.cursor = (data.cursor + 1).min(items.len().saturating_sub(1));
                SelectEditResult::Handled
            }

            Key::Home => {
                data.cursor = 0;
                SelectEditResult::Handled
            }

            Key::End => {
                data.cursor = items.len().saturating_sub(1);
                SelectEditResult::Handled
            }

            Key::Enter | Key::Char(' ') if !data.multiple => {
                match items.get(data.cursor) {
                    // Emitted values are not validated against the choice
                    // list; what the cursor points at is what goes out.
                    Some(item) => SelectEditResult::Changed(item.attributes.value.clone()),
                    None => SelectEditResult::Handled,
                }
            }

            Key::Char(' ') => match items.get(data.cursor) {
                Some(item) => {
                    let toggled = item.attributes.value.clone();
                    SelectEditResult::Changed(toggle_selection(&items, &data.model_value, &toggled))
                }
                None => SelectEditResult::Handled,
            },

            Key::Enter => {
                let selected = items
                    .iter()
                    .map(|item| &item.attributes.value)
                    .filter(|value| data.model_value.contains(value))
                    .cloned()
                    .collect();
                SelectEditResult::Changed(Value::Array(selected))
            }

            _ => SelectEditResult::Ignored,
        }
    }
}

/// Flip one value's membership in the multi-selection and report the full
/// selected list, in item order.
fn toggle_selection(items: &[NormalizedItem], model_value: &Value, toggled: &Value) -> Value {
    let was_selected = model_value.contains(toggled);

    let selected = items
        .iter()
        .map(|item| &item.attributes.value)
        .filter(|value| {
            if *value == toggled {
                !was_selected
            } else {
                model_value.contains(value)
            }
        })
        .cloned()
        .collect();

    Value::Array(selected)
}
