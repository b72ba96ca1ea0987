use crate::key::{Key, KeyName, Modifier};
use crate::traits::EditorFn;
use crate::view::View;

/// Signature of function editors such as [`simple_editor`].
pub type EditFn = fn(&mut View, Key, Modifier) -> bool;

/// The editor installed on new views.
pub const DEFAULT_EDITOR: EditorFn<EditFn> = EditorFn(simple_editor as EditFn);

/// Emacs-flavoured line editing.
///
/// Arrows move, Alt+arrows (or Alt+B / Alt+F) move by word, Ctrl+A / Ctrl+E
/// jump to the line ends, Ctrl+U / Ctrl+K cut to them, Ctrl+W or
/// Alt+Backspace cut the previous word and Ctrl+Y yanks it back. Insert
/// toggles overwrite mode. Any other character is typed.
pub fn simple_editor(view: &mut View, key: Key, modifier: Modifier) -> bool {
    let alt = modifier.contains(Modifier::ALT);
    let name = key.name();
    let text_area = view.text_area_mut();

    match name {
        KeyName::Backspace | KeyName::Backspace2 if alt => text_area.back_space_word(),
        KeyName::CtrlW => text_area.back_space_word(),
        KeyName::Backspace | KeyName::Backspace2 => text_area.back_space_char(),
        KeyName::CtrlD | KeyName::Delete => text_area.delete_char(),
        KeyName::ArrowDown => text_area.move_cursor_down(),
        KeyName::ArrowUp => text_area.move_cursor_up(),
        KeyName::ArrowLeft if alt => text_area.move_left_word(),
        KeyName::Rune if alt && key.ch() == Some('b') => text_area.move_left_word(),
        KeyName::ArrowLeft => text_area.move_cursor_left(),
        KeyName::ArrowRight if alt => text_area.move_right_word(),
        KeyName::Rune if alt && key.ch() == Some('f') => text_area.move_right_word(),
        KeyName::ArrowRight => text_area.move_cursor_right(),
        KeyName::Enter => text_area.type_character("\n"),
        KeyName::Space => text_area.type_character(" "),
        KeyName::Insert => text_area.toggle_overwrite(),
        KeyName::CtrlU => text_area.delete_to_start_of_line(),
        KeyName::CtrlK => text_area.delete_to_end_of_line(),
        KeyName::CtrlA | KeyName::Home => text_area.go_to_start_of_line(),
        KeyName::CtrlE | KeyName::End => text_area.go_to_end_of_line(),
        KeyName::CtrlY => text_area.yank(),
        _ => match key.ch() {
            Some(ch) if ch != '\0' => {
                let mut buf = [0; 4];
                text_area.type_character(ch.encode_utf8(&mut buf));
            }
            _ => return false,
        },
    }

    view.render_text_area();
    true
}
