use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::element::{Content, Element};
use crate::event::{Event, Key, Modifiers};

/// Tracks which element is currently focused and processes raw key events.
///
/// Mouse handling and spatial navigation need layout information and stay
/// with the host framework; this tracker covers Tab/BackTab cycling,
/// Escape blur, and key targeting.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                    None => focusable[0].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[focusable.len() - 1].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(0) => focusable[focusable.len() - 1].clone(),
                    Some(i) => focusable[i - 1].clone(),
                    None => focusable[focusable.len() - 1].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm key events and produce high-level events.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], root: &Element) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            let CrosstermEvent::Key(key_event) = raw_event else {
                continue;
            };
            // Only process key press events (not release/repeat on some terminals)
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let key: Key = key_event.code.into();
            let modifiers: Modifiers = key_event.modifiers.into();

            // Tab/BackTab for focus navigation
            if key == Key::Tab {
                if let Some(old) = self.focused.clone() {
                    if let Some(new) = self.focus_next(root) {
                        events.push(Event::Blur { target: old });
                        events.push(Event::Focus { target: new });
                    }
                } else if let Some(new) = self.focus_next(root) {
                    events.push(Event::Focus { target: new });
                }
                continue;
            }

            if key == Key::BackTab {
                if let Some(old) = self.focused.clone() {
                    if let Some(new) = self.focus_prev(root) {
                        events.push(Event::Blur { target: old });
                        events.push(Event::Focus { target: new });
                    }
                } else if let Some(new) = self.focus_prev(root) {
                    events.push(Event::Focus { target: new });
                }
                continue;
            }

            // Escape blurs focused element; only emits key event if nothing focused
            if key == Key::Escape {
                if let Some(old) = self.focused.take() {
                    events.push(Event::Blur { target: old });
                    continue;
                }
            }

            events.push(Event::Key {
                target: self.focused.clone(),
                key,
                modifiers,
            });
        }

        events
    }
}

/// Collect all focusable element IDs in tree order, skipping disabled
/// elements (they don't receive input).
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
