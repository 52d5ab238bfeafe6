use serde_json::json;
use tuiselect::{Choice, Event, InputSize, InputStyle, select_classes, SelectData, SelectState, Value};

fn choices(raw: serde_json::Value) -> Vec<Value> {
    serde_json::from_value(raw).expect("valid test choices")
}

fn change(target: &str, value: impl Into<Value>) -> Event {
    Event::Change {
        target: target.to_string(),
        value: value.into(),
    }
}

// ============================================================================
// Registration and the sync hook
// ============================================================================

#[test]
fn test_insert_reports_default_for_undecided_control() {
    let mut state = SelectState::new();
    let data = SelectData::new().choices(choices(json!([
        { "label": "A", "value": 1 },
        { "label": "B", "value": 2 }
    ])));

    assert_eq!(state.insert("color", data), Some(change("color", 1)));
}

#[test]
fn test_insert_is_quiet_with_placeholder() {
    let mut state = SelectState::new();
    let data = SelectData::new()
        .placeholder("Pick one")
        .choices(choices(json!([
            { "label": "A", "value": 1 },
            { "label": "B", "value": 2 }
        ])));

    assert_eq!(state.insert("color", data), None);
}

#[test]
fn test_insert_multi_reports_flagged_defaults() {
    let mut state = SelectState::new();
    let data = SelectData::new()
        .multiple(true)
        .model_value(Value::Array(Vec::new()))
        .choices(vec![
            Value::from(Choice::new("A", 1).selected(true)),
            Value::from(Choice::new("B", 2)),
        ]);

    assert_eq!(
        state.insert("tags", data),
        Some(change("tags", Value::Array(vec![Value::from(1)])))
    );
}

#[test]
fn test_set_choices_runs_the_hook() {
    let mut state = SelectState::new();
    state.insert("color", SelectData::new());

    let event = state.set_choices("color", choices(json!([{ "label": "A", "value": 1 }])));
    assert_eq!(event, Some(change("color", 1)));
}

#[test]
fn test_feeding_the_reported_value_back_settles() {
    let mut state = SelectState::new();
    let data = SelectData::new().choices(choices(json!([{ "label": "A", "value": 1 }])));

    let Some(Event::Change { value, .. }) = state.insert("color", data) else {
        panic!("expected a default to be reported");
    };
    assert_eq!(state.set_model_value("color", value), None);
    assert_eq!(state.model_value("color"), Value::from(1));
}

#[test]
fn test_echoing_host_settles_multi_without_flags() {
    let mut state = SelectState::new();
    let data = SelectData::new()
        .multiple(true)
        .model_value(Value::Array(Vec::new()))
        .choices(choices(json!([{ "label": "A", "value": 1 }])));

    // An echoing host feeds every reported change straight back. With no
    // flagged choice the hook must go quiet instead of re-reporting the
    // empty array round after round.
    let mut event = state.insert("tags", data);
    for _ in 0..5 {
        let Some(Event::Change { target, value }) = event else {
            break;
        };
        event = state.set_model_value(&target, value);
    }
    assert_eq!(event, None);
    assert_eq!(state.model_value("tags"), Value::Array(Vec::new()));
}

#[test]
fn test_echoing_host_settles_multi_with_flags() {
    let mut state = SelectState::new();
    let data = SelectData::new()
        .multiple(true)
        .model_value(Value::Array(Vec::new()))
        .choices(vec![
            Value::from(Choice::new("A", 1).selected(true)),
            Value::from(Choice::new("B", 2)),
        ]);

    let mut event = state.insert("tags", data);
    let mut rounds = 0;
    while let Some(Event::Change { target, value }) = event {
        event = state.set_model_value(&target, value);
        rounds += 1;
        assert!(rounds <= 5, "hook never settled");
    }
    assert_eq!(rounds, 1);
    assert_eq!(state.model_value("tags"), Value::Array(vec![Value::from(1)]));
}

#[test]
fn test_model_value_of_unknown_control() {
    let state = SelectState::new();
    assert_eq!(state.model_value("nope"), Value::Null);
}

#[test]
fn test_set_multiple_flips_dom_value_quietly() {
    let mut state = SelectState::new();
    let data = SelectData::new()
        .model_value("red")
        .choices(choices(json!([{ "label": "Red", "value": "red" }])));
    state.insert("color", data);

    // A scalar model is a decided value in either mode, so the hook has
    // nothing to report; only the widget binding changes.
    assert_eq!(state.set_multiple("color", true), None);
    assert_eq!(
        state.get_data("color").unwrap().dom_value(),
        Value::Array(Vec::new())
    );

    assert_eq!(state.set_multiple("color", false), None);
    assert_eq!(state.get_data("color").unwrap().dom_value(), Value::from("red"));
}

#[test]
fn test_set_placeholder_silences_the_default() {
    let mut state = SelectState::new();
    state.insert("color", SelectData::new());

    assert_eq!(state.set_placeholder("color", "Pick one"), None);
    let event = state.set_choices("color", choices(json!([{ "label": "A", "value": 1 }])));
    assert_eq!(event, None);
    assert!(state.get_data("color").unwrap().items()[0].is_placeholder());
}

#[test]
fn test_set_locked_updates_classes_without_events() {
    let mut state = SelectState::new();
    state.insert("color", SelectData::new().model_value("red"));

    state.set_locked("color", true);
    let data = state.get_data("color").unwrap();
    assert!(data.locked);
    assert!(data.classes().contains("icon--lock"));

    state.set_locked("color", false);
    assert!(!state.get_data("color").unwrap().classes().contains("icon--lock"));
}

// ============================================================================
// dom_value
// ============================================================================

#[test]
fn test_dom_value_multi_coerces_scalar_to_empty_array() {
    let data = SelectData::new().multiple(true).model_value("red");
    assert_eq!(data.dom_value(), Value::Array(Vec::new()));
}

#[test]
fn test_dom_value_multi_passes_arrays_through() {
    let model = Value::Array(vec![Value::from(1)]);
    let data = SelectData::new().multiple(true).model_value(model.clone());
    assert_eq!(data.dom_value(), model);
}

#[test]
fn test_dom_value_single_is_the_model() {
    let data = SelectData::new().model_value("red");
    assert_eq!(data.dom_value(), Value::from("red"));
}

// ============================================================================
// Class mapping
// ============================================================================

#[test]
fn test_base_classes() {
    assert_eq!(
        select_classes(InputSize::Default, InputStyle::Default, false),
        "form-field-textual form-field-select"
    );
}

#[test]
fn test_size_variants() {
    for (size, class) in [
        (InputSize::ExtraSmall, "form-field-textual--xs"),
        (InputSize::Small, "form-field-textual--s"),
        (InputSize::Medium, "form-field-textual--m"),
    ] {
        assert_eq!(
            select_classes(size, InputStyle::Default, false),
            format!("form-field-textual form-field-select {class}")
        );
    }
}

#[test]
fn test_bare_and_locked() {
    assert_eq!(
        select_classes(InputSize::Small, InputStyle::Bare, true),
        "form-field-textual form-field-select form-field-textual--s \
         form-field-textual--bare icon_background--s icon--lock"
    );
}

#[test]
fn test_data_classes_follow_props() {
    let data = SelectData::new()
        .input_size(InputSize::Medium)
        .input_style(InputStyle::Bare);
    assert_eq!(
        data.classes(),
        "form-field-textual form-field-select form-field-textual--m form-field-textual--bare"
    );
}
