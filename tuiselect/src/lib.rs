pub mod choice;
pub mod classes;
pub mod color;
pub mod element;
pub mod event;
pub mod focus;
pub mod normalize;
pub mod render;
pub mod select;
pub mod style;
pub mod sync;
pub mod text;
pub mod value;

pub use choice::{Choice, ChoiceError};
pub use classes::{select_classes, InputSize, InputStyle};
pub use color::Color;
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use normalize::{normalize, NormalizedItem, OptionAttributes};
pub use render::select_element;
pub use select::{SelectData, SelectState};
pub use style::{Border, Style, TextStyle};
pub use sync::auto_select;
pub use value::Value;
