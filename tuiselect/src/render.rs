//! Rendered surface of the control: a focusable element carrying the
//! computed class string, a trigger row, and one option child per
//! normalized item.

use crate::color::Color;
use crate::element::Element;
use crate::normalize::NormalizedItem;
use crate::select::SelectData;
use crate::style::{Border, Style};
use crate::text::truncate_to_width;

/// Data keys written onto the produced elements.
pub const DATA_CLASS: &str = "class";
pub const DATA_OWNER: &str = "owner";
pub const DATA_KEY: &str = "key";
pub const DATA_VALUE: &str = "value";
pub const DATA_SELECTED: &str = "selected";

const TRIGGER_INDICATOR: &str = "▼";

/// ID of the trigger row inside a control.
pub fn trigger_id(select_id: &str) -> String {
    format!("{select_id}::trigger")
}

/// ID of one option row inside a control.
pub fn option_id(select_id: &str, key: &str) -> String {
    format!("{select_id}::opt::{key}")
}

/// Build the element subtree for a select control. `width` bounds the
/// trigger line; option rows carry their full label.
pub fn select_element(id: &str, data: &SelectData, width: u16) -> Element {
    let items = data.items();

    let mut children = Vec::with_capacity(items.len() + 1);
    children.push(trigger_element(id, &items, width));
    for item in &items {
        children.push(option_element(id, item));
    }

    Element::box_()
        .id(id)
        .focusable(true)
        .captures_input(true)
        .disabled(data.locked)
        .data(DATA_CLASS, data.classes())
        .style(Style::new().border(Border::Single))
        .style_focused(
            Style::new()
                .border(Border::Single)
                .background(Color::oklch(0.3, 0.02, 250.0))
                .bold(),
        )
        .style_disabled(
            Style::new()
                .border(Border::Single)
                .foreground(Color::oklch(0.7, 0.0, 0.0).darken(0.25))
                .dim(),
        )
        .children(children)
}

/// The closed-state row: selected labels (or the placeholder, which is
/// always the selected item when active) plus the dropdown indicator.
fn trigger_element(select_id: &str, items: &[NormalizedItem], width: u16) -> Element {
    let label = items
        .iter()
        .filter(|item| item.attributes.selected)
        .map(|item| item.label.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    // Indicator and the space before it.
    let inner_width = width.saturating_sub(2) as usize;
    let text = format!("{} {TRIGGER_INDICATOR}", truncate_to_width(&label, inner_width));

    Element::text(text).id(trigger_id(select_id))
}

fn option_element(select_id: &str, item: &NormalizedItem) -> Element {
    let mut element = Element::text(item.label.clone())
        .id(option_id(select_id, &item.key))
        .clickable(true)
        .data(DATA_OWNER, select_id)
        .data(DATA_KEY, item.key.clone())
        .data(DATA_VALUE, item.attributes.value.key_string())
        .data(DATA_SELECTED, item.attributes.selected.to_string());

    // Passthrough attributes; an explicit `selected` entry repeats the
    // computed flag by construction.
    for (name, value) in &item.attributes.extra {
        element = element.data(name.clone(), value.key_string());
    }

    element
}
