//! Styling enumerations and their class-name mapping.
//!
//! Pure string mapping with no behavioral effect: the host framework
//! decides what the classes mean.

/// Size variants of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    #[default]
    Default,
    ExtraSmall,
    Small,
    Medium,
}

impl InputSize {
    pub fn class(self) -> Option<&'static str> {
        match self {
            InputSize::Default => None,
            InputSize::ExtraSmall => Some("form-field-textual--xs"),
            InputSize::Small => Some("form-field-textual--s"),
            InputSize::Medium => Some("form-field-textual--m"),
        }
    }
}

/// Style variants of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputStyle {
    #[default]
    Default,
    Bare,
}

impl InputStyle {
    pub fn class(self) -> Option<&'static str> {
        match self {
            InputStyle::Default => None,
            InputStyle::Bare => Some("form-field-textual--bare"),
        }
    }
}

/// Classes every select control carries.
pub const BASE_CLASSES: &str = "form-field-textual form-field-select";

const LOCKED_CLASSES: &str = "icon_background--s icon--lock";

/// Compute the full class string for a control.
pub fn select_classes(size: InputSize, style: InputStyle, locked: bool) -> String {
    let mut classes = String::from(BASE_CLASSES);
    let variants = [size.class(), style.class(), locked.then_some(LOCKED_CLASSES)];
    for class in variants.into_iter().flatten() {
        classes.push(' ');
        classes.push_str(class);
    }
    classes
}
