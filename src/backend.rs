//! Translation of crossterm events into [`Key`] / [`Modifier`] pairs.
//!
//! Terminals deliver Ctrl chords as control codes, so Ctrl+letter and the
//! punctuation chords map onto the named Ctrl keys rather than onto a
//! modifier. Only Alt survives as a [`Modifier`].

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::key::{Key, KeyName, Modifier};

/// Translates a terminal event. Resizes, focus changes, pastes and key
/// releases yield `None`.
pub fn translate_event(event: &Event) -> Option<(Key, Modifier)> {
    match event {
        Event::Key(key) => translate_key_event(key),
        Event::Mouse(mouse) => translate_mouse_event(mouse),
        _ => None,
    }
}

pub fn translate_key_event(event: &KeyEvent) -> Option<(Key, Modifier)> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let modifier = if event.modifiers.contains(KeyModifiers::ALT) {
        Modifier::ALT
    } else {
        Modifier::NONE
    };

    let key = match event.code {
        KeyCode::Char(ch) if ctrl => ctrl_key(ch).map_or(Key::with_rune(ch), Key::with_name),
        KeyCode::Char(' ') => Key::with_name(KeyName::Space),
        KeyCode::Char(ch) => Key::with_rune(ch),
        KeyCode::Backspace if ctrl => Key::with_name(KeyName::Backspace),
        KeyCode::Backspace => Key::with_name(KeyName::Backspace2),
        KeyCode::Enter => Key::with_name(KeyName::Enter),
        KeyCode::Tab => Key::with_name(KeyName::Tab),
        KeyCode::Esc => Key::with_name(KeyName::Esc),
        KeyCode::Insert => Key::with_name(KeyName::Insert),
        KeyCode::Delete => Key::with_name(KeyName::Delete),
        KeyCode::Home => Key::with_name(KeyName::Home),
        KeyCode::End => Key::with_name(KeyName::End),
        KeyCode::PageUp => Key::with_name(KeyName::PgUp),
        KeyCode::PageDown => Key::with_name(KeyName::PgDn),
        KeyCode::Up => Key::with_name(KeyName::ArrowUp),
        KeyCode::Down => Key::with_name(KeyName::ArrowDown),
        KeyCode::Left => Key::with_name(KeyName::ArrowLeft),
        KeyCode::Right => Key::with_name(KeyName::ArrowRight),
        KeyCode::F(n) => Key::with_name(function_key(n)?),
        KeyCode::Null => Key::with_name(KeyName::CtrlSpace),
        _ => return None,
    };
    Some((key, modifier))
}

pub fn translate_mouse_event(event: &MouseEvent) -> Option<(Key, Modifier)> {
    let mut modifier = if event.modifiers.contains(KeyModifiers::ALT) {
        Modifier::ALT
    } else {
        Modifier::NONE
    };

    let name = match event.kind {
        MouseEventKind::Down(button) => mouse_button(button),
        MouseEventKind::Drag(button) => {
            modifier |= Modifier::MOTION;
            mouse_button(button)
        }
        MouseEventKind::Up(_) => KeyName::MouseRelease,
        MouseEventKind::ScrollUp => KeyName::MouseWheelUp,
        MouseEventKind::ScrollDown => KeyName::MouseWheelDown,
        _ => return None,
    };
    Some((Key::with_name(name), modifier))
}

fn mouse_button(button: MouseButton) -> KeyName {
    match button {
        MouseButton::Left => KeyName::MouseLeft,
        MouseButton::Middle => KeyName::MouseMiddle,
        MouseButton::Right => KeyName::MouseRight,
    }
}

fn function_key(n: u8) -> Option<KeyName> {
    let name = match n {
        1 => KeyName::F1,
        2 => KeyName::F2,
        3 => KeyName::F3,
        4 => KeyName::F4,
        5 => KeyName::F5,
        6 => KeyName::F6,
        7 => KeyName::F7,
        8 => KeyName::F8,
        9 => KeyName::F9,
        10 => KeyName::F10,
        11 => KeyName::F11,
        12 => KeyName::F12,
        _ => return None,
    };
    Some(name)
}

/// The control code a terminal sends for Ctrl+`ch`.
fn ctrl_key(ch: char) -> Option<KeyName> {
    let name = match ch.to_ascii_lowercase() {
        ' ' | '2' | '~' | '@' => KeyName::CtrlSpace,
        'a' => KeyName::CtrlA,
        'b' => KeyName::CtrlB,
        'c' => KeyName::CtrlC,
        'd' => KeyName::CtrlD,
        'e' => KeyName::CtrlE,
        'f' => KeyName::CtrlF,
        'g' => KeyName::CtrlG,
        'h' => KeyName::Backspace,
        'i' => KeyName::Tab,
        'j' => KeyName::CtrlJ,
        'k' => KeyName::CtrlK,
        'l' => KeyName::CtrlL,
        'm' => KeyName::Enter,
        'n' => KeyName::CtrlN,
        'o' => KeyName::CtrlO,
        'p' => KeyName::CtrlP,
        'q' => KeyName::CtrlQ,
        'r' => KeyName::CtrlR,
        's' => KeyName::CtrlS,
        't' => KeyName::CtrlT,
        'u' => KeyName::CtrlU,
        'v' => KeyName::CtrlV,
        'w' => KeyName::CtrlW,
        'x' => KeyName::CtrlX,
        'y' => KeyName::CtrlY,
        'z' => KeyName::CtrlZ,
        '3' | '[' => KeyName::Esc,
        '4' | '\\' => KeyName::CtrlBackslash,
        '5' | ']' => KeyName::CtrlRsqBracket,
        '6' => KeyName::Ctrl6,
        '7' | '/' | '_' => KeyName::CtrlSlash,
        '8' => KeyName::Backspace2,
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_table_folds_classic_aliases() {
        assert_eq!(ctrl_key('h'), Some(KeyName::Backspace));
        assert_eq!(ctrl_key('M'), Some(KeyName::Enter));
        assert_eq!(ctrl_key('['), Some(KeyName::Esc));
        assert_eq!(ctrl_key('_'), Some(KeyName::CtrlSlash));
        assert_eq!(ctrl_key('!'), None);
    }

    #[test]
    fn function_keys_stop_at_twelve() {
        assert_eq!(function_key(12), Some(KeyName::F12));
        assert_eq!(function_key(13), None);
    }
}
