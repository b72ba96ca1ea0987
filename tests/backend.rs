#![cfg(feature = "crossterm")]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use cui_edit::backend::{translate_event, translate_key_event, translate_mouse_event};
use cui_edit::{Key, KeyName, Modifier, must_parse};

fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<(Key, Modifier)> {
    translate_key_event(&KeyEvent::new(code, modifiers))
}

fn mouse(kind: MouseEventKind, modifiers: KeyModifiers) -> Option<(Key, Modifier)> {
    translate_mouse_event(&MouseEvent {
        kind,
        column: 3,
        row: 4,
        modifiers,
    })
}

fn named(name: KeyName, modifier: Modifier) -> Option<(Key, Modifier)> {
    Some((Key::with_name(name), modifier))
}

#[test]
fn plain_characters_are_runes() {
    assert_eq!(
        key(KeyCode::Char('a'), KeyModifiers::NONE),
        Some((Key::with_rune('a'), Modifier::NONE))
    );
    assert_eq!(
        key(KeyCode::Char('A'), KeyModifiers::SHIFT),
        Some((Key::with_rune('A'), Modifier::NONE))
    );
    assert_eq!(
        key(KeyCode::Char('字'), KeyModifiers::NONE),
        Some((Key::with_rune('字'), Modifier::NONE))
    );
}

#[test]
fn space_is_a_named_key() {
    assert_eq!(key(KeyCode::Char(' '), KeyModifiers::NONE), named(KeyName::Space, Modifier::NONE));
}

#[test]
fn ctrl_chords_become_ctrl_keys() {
    assert_eq!(key(KeyCode::Char('a'), KeyModifiers::CONTROL), named(KeyName::CtrlA, Modifier::NONE));
    assert_eq!(key(KeyCode::Char('w'), KeyModifiers::CONTROL), named(KeyName::CtrlW, Modifier::NONE));
    assert_eq!(key(KeyCode::Char('h'), KeyModifiers::CONTROL), named(KeyName::Backspace, Modifier::NONE));
    assert_eq!(key(KeyCode::Char(' '), KeyModifiers::CONTROL), named(KeyName::CtrlSpace, Modifier::NONE));
    assert_eq!(key(KeyCode::Char('['), KeyModifiers::CONTROL), named(KeyName::Esc, Modifier::NONE));
}

#[test]
fn alt_is_kept_as_a_modifier() {
    assert_eq!(
        key(KeyCode::Char('b'), KeyModifiers::ALT),
        Some((Key::with_rune('b'), Modifier::ALT))
    );
    assert_eq!(key(KeyCode::Left, KeyModifiers::ALT), named(KeyName::ArrowLeft, Modifier::ALT));
}

#[test]
fn backspace_flavours() {
    assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), named(KeyName::Backspace2, Modifier::NONE));
    assert_eq!(key(KeyCode::Backspace, KeyModifiers::CONTROL), named(KeyName::Backspace, Modifier::NONE));
}

#[test]
fn special_keys() {
    assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), named(KeyName::Enter, Modifier::NONE));
    assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), named(KeyName::Esc, Modifier::NONE));
    assert_eq!(key(KeyCode::PageDown, KeyModifiers::NONE), named(KeyName::PgDn, Modifier::NONE));
    assert_eq!(key(KeyCode::F(7), KeyModifiers::NONE), named(KeyName::F7, Modifier::NONE));
    assert_eq!(key(KeyCode::F(20), KeyModifiers::NONE), None);
    assert_eq!(key(KeyCode::CapsLock, KeyModifiers::NONE), None);
}

#[test]
fn releases_are_ignored() {
    let release = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(translate_key_event(&release), None);

    let repeat = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Repeat);
    assert_eq!(translate_key_event(&repeat), Some((Key::with_rune('a'), Modifier::NONE)));
}

#[test]
fn mouse_events() {
    assert_eq!(
        mouse(MouseEventKind::Down(MouseButton::Left), KeyModifiers::NONE),
        named(KeyName::MouseLeft, Modifier::NONE)
    );
    assert_eq!(
        mouse(MouseEventKind::Drag(MouseButton::Right), KeyModifiers::NONE),
        named(KeyName::MouseRight, Modifier::MOTION)
    );
    assert_eq!(
        mouse(MouseEventKind::Up(MouseButton::Left), KeyModifiers::NONE),
        named(KeyName::MouseRelease, Modifier::NONE)
    );
    assert_eq!(
        mouse(MouseEventKind::ScrollDown, KeyModifiers::ALT),
        named(KeyName::MouseWheelDown, Modifier::ALT)
    );
    assert_eq!(mouse(MouseEventKind::Moved, KeyModifiers::NONE), None);
}

#[test]
fn other_events_are_ignored() {
    assert_eq!(translate_event(&Event::Resize(80, 24)), None);
    assert_eq!(translate_event(&Event::FocusGained), None);
    assert_eq!(
        translate_event(&Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))),
        named(KeyName::Tab, Modifier::NONE)
    );
}

#[test]
fn translated_keys_match_parsed_bindings() {
    for (binding, code, modifiers) in [
        ("ctrl+c", KeyCode::Char('c'), KeyModifiers::CONTROL),
        ("alt+enter", KeyCode::Enter, KeyModifiers::ALT),
        ("q", KeyCode::Char('q'), KeyModifiers::NONE),
        ("space", KeyCode::Char(' '), KeyModifiers::NONE),
        ("pgup", KeyCode::PageUp, KeyModifiers::NONE),
    ] {
        let parsed = must_parse(binding);
        assert_eq!(key(code, modifiers), Some((parsed.key, parsed.modifier)), "{binding}");
    }
}
