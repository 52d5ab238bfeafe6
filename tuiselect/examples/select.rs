use std::fs::File;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use simplelog::{Config, LevelFilter, WriteLogger};
use tuiselect::{
    select_element, Choice, Element, Event, FocusState, SelectData, SelectState, Value,
};

/// Scripted walk through a select control: register it, let the
/// synchronizer report a default, then drive it with synthetic key
/// presses the way a host event loop would.
fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("select.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut focus = FocusState::new();
    let mut selects = SelectState::new();

    let data = SelectData::new()
        .placeholder("Pick a fruit")
        .choices(vec![
            Value::from(Choice::new("Apple", 1)),
            Value::from(Choice::new("Banana", 2)),
            Value::from(Choice::new("Cherry", 3).attribute("note", "seasonal")),
        ]);
    if let Some(event) = selects.insert("fruit", data) {
        report(&mut selects, event);
    } else {
        println!("placeholder active, no default reported");
    }

    // Tab to focus the control, walk down two items, commit.
    let script = [
        press(KeyCode::Tab),
        press(KeyCode::Down),
        press(KeyCode::Down),
        press(KeyCode::Enter),
    ];

    let root = ui(&selects);
    let events = focus.process_events(&script, &root);
    for event in selects.process_events(&events, &root) {
        match event {
            Event::Focus { target } => println!("focused {target}"),
            Event::Blur { target } => println!("blurred {target}"),
            change @ Event::Change { .. } => report(&mut selects, change),
            Event::Key { key, .. } => println!("unhandled key {key:?}"),
        }
    }

    println!("final model value: {}", selects.model_value("fruit"));
    Ok(())
}

fn ui(selects: &SelectState) -> Element {
    let data = selects.get_data("fruit").expect("control registered");
    Element::box_()
        .id("app")
        .child(select_element("fruit", data, 40))
}

/// Host side of the contract: a reported change is fed back into the
/// model value, which may in turn report again.
fn report(selects: &mut SelectState, event: Event) {
    let Event::Change { target, value } = event else {
        return;
    };
    println!("{target} changed to {value:?}");
    if let Some(next) = selects.set_model_value(&target, value) {
        report(selects, next);
    }
}

fn press(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}
