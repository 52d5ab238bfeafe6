use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use tuiselect::{
    select_element, Element, Event, FocusState, Key, Modifiers, SelectData, SelectState, Value,
};

fn choices(raw: serde_json::Value) -> Vec<Value> {
    serde_json::from_value(raw).expect("valid test choices")
}

fn fruit_data() -> SelectData {
    SelectData::new().model_value("").choices(choices(json!([
        { "label": "Apple", "value": 1 },
        { "label": "Banana", "value": 2 },
        { "label": "Cherry", "value": 3 }
    ])))
}

fn key_event(target: &str, key: Key) -> Event {
    Event::Key {
        target: Some(target.to_string()),
        key,
        modifiers: Modifiers::new(),
    }
}

fn setup(data: SelectData) -> (SelectState, Element) {
    let mut state = SelectState::new();
    state.insert("fruit", data);
    let root = select_element("fruit", state.get_data("fruit").unwrap(), 40);
    (state, root)
}

// ============================================================================
// Single-select interaction
// ============================================================================

#[test]
fn test_enter_commits_cursor_item() {
    let (mut state, root) = setup(fruit_data());

    let events = vec![
        key_event("fruit", Key::Down),
        key_event("fruit", Key::Enter),
    ];
    let output = state.process_events(&events, &root);

    assert_eq!(
        output,
        vec![Event::Change {
            target: "fruit".to_string(),
            value: Value::from(2),
        }]
    );
}

#[test]
fn test_space_commits_in_single_mode() {
    let (mut state, root) = setup(fruit_data());

    let output = state.process_events(&[key_event("fruit", Key::Char(' '))], &root);

    assert_eq!(
        output,
        vec![Event::Change {
            target: "fruit".to_string(),
            value: Value::from(1),
        }]
    );
}

#[test]
fn test_cursor_movement_produces_no_events() {
    let (mut state, root) = setup(fruit_data());

    let events = vec![
        key_event("fruit", Key::Down),
        key_event("fruit", Key::Down),
        key_event("fruit", Key::Up),
        key_event("fruit", Key::End),
        key_event("fruit", Key::Home),
    ];
    assert!(state.process_events(&events, &root).is_empty());
}

#[test]
fn test_cursor_clamps_at_both_ends() {
    let (mut state, root) = setup(fruit_data());

    let mut events = vec![key_event("fruit", Key::Up); 3];
    events.extend(vec![key_event("fruit", Key::Down); 10]);
    events.push(key_event("fruit", Key::Enter));
    let output = state.process_events(&events, &root);

    assert_eq!(
        output,
        vec![Event::Change {
            target: "fruit".to_string(),
            value: Value::from(3),
        }]
    );
}

#[test]
fn test_placeholder_commits_empty_value() {
    let (mut state, root) = setup(fruit_data().placeholder("Pick one"));

    // Cursor starts on the placeholder item.
    let output = state.process_events(&[key_event("fruit", Key::Enter)], &root);

    assert_eq!(
        output,
        vec![Event::Change {
            target: "fruit".to_string(),
            value: Value::empty_string(),
        }]
    );
}

// ============================================================================
// Multi-select interaction
// ============================================================================

#[test]
fn test_space_toggles_and_reports_item_order() {
    let data = fruit_data()
        .multiple(true)
        .model_value(Value::Array(vec![Value::from(3)]));
    let (mut state, root) = setup(data);

    // Toggle Apple on; Cherry is already selected. Item order wins over
    // selection order.
    let output = state.process_events(&[key_event("fruit", Key::Char(' '))], &root);

    assert_eq!(
        output,
        vec![Event::Change {
            target: "fruit".to_string(),
            value: Value::Array(vec![Value::from(1), Value::from(3)]),
        }]
    );
}

#[test]
fn test_space_toggles_off() {
    let data = fruit_data()
        .multiple(true)
        .model_value(Value::Array(vec![Value::from(1), Value::from(3)]));
    let (mut state, root) = setup(data);

    let output = state.process_events(&[key_event("fruit", Key::Char(' '))], &root);

    assert_eq!(
        output,
        vec![Event::Change {
            target: "fruit".to_string(),
            value: Value::Array(vec![Value::from(3)]),
        }]
    );
}

#[test]
fn test_enter_commits_current_list() {
    let data = fruit_data()
        .multiple(true)
        .model_value(Value::Array(vec![Value::from(3), Value::from(1)]));
    let (mut state, root) = setup(data);

    let output = state.process_events(&[key_event("fruit", Key::Enter)], &root);

    assert_eq!(
        output,
        vec![Event::Change {
            target: "fruit".to_string(),
            value: Value::Array(vec![Value::from(1), Value::from(3)]),
        }]
    );
}

// ============================================================================
// Passthrough
// ============================================================================

#[test]
fn test_locked_control_passes_keys_through() {
    let (mut state, root) = setup(fruit_data().locked(true));

    let events = vec![key_event("fruit", Key::Enter)];
    assert_eq!(state.process_events(&events, &root), events);
}

#[test]
fn test_modified_keys_pass_through() {
    let (mut state, root) = setup(fruit_data());

    let events = vec![Event::Key {
        target: Some("fruit".to_string()),
        key: Key::Down,
        modifiers: Modifiers::ctrl(),
    }];
    assert_eq!(state.process_events(&events, &root), events);
}

#[test]
fn test_unknown_target_passes_through() {
    let (mut state, root) = setup(fruit_data());

    let events = vec![key_event("other", Key::Enter)];
    assert_eq!(state.process_events(&events, &root), events);
}

#[test]
fn test_unhandled_keys_pass_through() {
    let (mut state, root) = setup(fruit_data());

    let events = vec![key_event("fruit", Key::Char('x'))];
    assert_eq!(state.process_events(&events, &root), events);
}

#[test]
fn test_non_key_events_pass_through() {
    let (mut state, root) = setup(fruit_data());

    let events = vec![Event::Focus {
        target: "fruit".to_string(),
    }];
    assert_eq!(state.process_events(&events, &root), events);
}

// ============================================================================
// Focus integration
// ============================================================================

fn press(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_tab_focuses_then_keys_target_the_control() {
    let mut selects = SelectState::new();
    selects.insert("fruit", fruit_data());
    let root = Element::box_()
        .id("app")
        .child(select_element("fruit", selects.get_data("fruit").unwrap(), 40));

    let mut focus = FocusState::new();
    let raw = vec![press(KeyCode::Tab), press(KeyCode::Down), press(KeyCode::Enter)];
    let events = focus.process_events(&raw, &root);

    assert_eq!(
        events[0],
        Event::Focus {
            target: "fruit".to_string()
        }
    );
    assert_eq!(focus.focused(), Some("fruit"));

    let output = selects.process_events(&events, &root);
    assert!(output.contains(&Event::Change {
        target: "fruit".to_string(),
        value: Value::from(2),
    }));
}

#[test]
fn test_tab_skips_locked_control() {
    let mut selects = SelectState::new();
    selects.insert("fruit", fruit_data().locked(true));
    let root = Element::box_()
        .id("app")
        .child(select_element("fruit", selects.get_data("fruit").unwrap(), 40));

    let mut focus = FocusState::new();
    let events = focus.process_events(&[press(KeyCode::Tab)], &root);

    assert!(events.is_empty());
    assert_eq!(focus.focused(), None);
}
