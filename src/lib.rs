pub mod editor;
pub mod error;
pub mod key;
pub mod keybinding;
pub mod parse;
pub mod text_area;
pub mod traits;
pub mod types;
pub mod view;
pub mod wrap;

#[cfg(feature = "crossterm")]
pub mod backend;

pub use crate::editor::{DEFAULT_EDITOR, EditFn, simple_editor};
pub use crate::error::ParseError;
pub use crate::key::{Key, KeyName, Modifier};
pub use crate::keybinding::{Handler, Keybinding, Keybindings};
pub use crate::parse::{ParsedKey, must_parse, must_parse_all, parse, parse_all};
pub use crate::text_area::{TextArea, TextAreaBuilder};
pub use crate::traits::{Editor, EditorFn};
pub use crate::types::{Cell, TextAreaConfig};
pub use crate::view::View;
