use std::fmt;

/// Named keys understood by bindings and editors.
///
/// This enum is backend-agnostic. Terminal backends translate their own
/// events into these names (see the `backend` module for crossterm).
/// Several classic terminal chords share one code and therefore one
/// variant, e.g. Ctrl+H is [`KeyName::Backspace`] and Ctrl+M is
/// [`KeyName::Enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyName {
    /// The zero value of an uninitialized [`Key`].
    #[default]
    Unset,
    /// A literal character; the character itself lives in [`Key::ch`].
    Rune,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Insert,
    Delete,
    Home,
    End,
    PgUp,
    PgDn,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Ctrl+Space, also sent for Ctrl+2 and Ctrl+~.
    CtrlSpace,
    CtrlA,
    CtrlB,
    CtrlC,
    CtrlD,
    CtrlE,
    CtrlF,
    CtrlG,
    /// Backspace as sent by Ctrl+H.
    Backspace,
    /// Tab, also Ctrl+I.
    Tab,
    CtrlJ,
    CtrlK,
    CtrlL,
    /// Enter, also Ctrl+M.
    Enter,
    CtrlN,
    CtrlO,
    CtrlP,
    CtrlQ,
    CtrlR,
    CtrlS,
    CtrlT,
    CtrlU,
    CtrlV,
    CtrlW,
    CtrlX,
    CtrlY,
    CtrlZ,
    /// Escape, also Ctrl+[ and Ctrl+3.
    Esc,
    /// Ctrl+\, also Ctrl+4.
    CtrlBackslash,
    /// Ctrl+], also Ctrl+5.
    CtrlRsqBracket,
    Ctrl6,
    /// Ctrl+/, also Ctrl+7 and Ctrl+_.
    CtrlSlash,
    Space,
    /// The DEL code most terminals send for the Backspace key, also Ctrl+8.
    Backspace2,

    MouseLeft,
    MouseMiddle,
    MouseRight,
    MouseRelease,
    MouseWheelUp,
    MouseWheelDown,
}

impl KeyName {
    /// The canonical name of this key, as accepted by the binding parser.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "Unset",
            Self::Rune => "Rune",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
            Self::Insert => "Insert",
            Self::Delete => "Delete",
            Self::Home => "Home",
            Self::End => "End",
            Self::PgUp => "Pgup",
            Self::PgDn => "Pgdn",
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::CtrlSpace => "CtrlSpace",
            Self::CtrlA => "CtrlA",
            Self::CtrlB => "CtrlB",
            Self::CtrlC => "CtrlC",
            Self::CtrlD => "CtrlD",
            Self::CtrlE => "CtrlE",
            Self::CtrlF => "CtrlF",
            Self::CtrlG => "CtrlG",
            Self::Backspace => "Backspace",
            Self::Tab => "Tab",
            Self::CtrlJ => "CtrlJ",
            Self::CtrlK => "CtrlK",
            Self::CtrlL => "CtrlL",
            Self::Enter => "Enter",
            Self::CtrlN => "CtrlN",
            Self::CtrlO => "CtrlO",
            Self::CtrlP => "CtrlP",
            Self::CtrlQ => "CtrlQ",
            Self::CtrlR => "CtrlR",
            Self::CtrlS => "CtrlS",
            Self::CtrlT => "CtrlT",
            Self::CtrlU => "CtrlU",
            Self::CtrlV => "CtrlV",
            Self::CtrlW => "CtrlW",
            Self::CtrlX => "CtrlX",
            Self::CtrlY => "CtrlY",
            Self::CtrlZ => "CtrlZ",
            Self::Esc => "Esc",
            Self::CtrlBackslash => "CtrlBackslash",
            Self::CtrlRsqBracket => "CtrlRsqBracket",
            Self::Ctrl6 => "Ctrl6",
            Self::CtrlSlash => "CtrlSlash",
            Self::Space => "Space",
            Self::Backspace2 => "Backspace2",
            Self::MouseLeft => "MouseLeft",
            Self::MouseMiddle => "MouseMiddle",
            Self::MouseRight => "MouseRight",
            Self::MouseRelease => "MouseRelease",
            Self::MouseWheelUp => "MouseWheelUp",
            Self::MouseWheelDown => "MouseWheelDown",
        }
    }

    /// Whether this name denotes a mouse event rather than a keyboard key.
    pub fn is_mouse(self) -> bool {
        matches!(
            self,
            Self::MouseLeft
                | Self::MouseMiddle
                | Self::MouseRight
                | Self::MouseRelease
                | Self::MouseWheelUp
                | Self::MouseWheelDown
        )
    }
}

/// A single key: either a named special key or a literal character.
///
/// Keys are plain values. Two keys are equal when both the name and the
/// character payload match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Key {
    name: KeyName,
    ch: Option<char>,
}

impl Key {
    /// A named special key with no character payload.
    pub const fn with_name(name: KeyName) -> Self {
        Self { name, ch: None }
    }

    /// A literal character key.
    pub const fn with_rune(ch: char) -> Self {
        Self {
            name: KeyName::Rune,
            ch: Some(ch),
        }
    }

    pub fn name(&self) -> KeyName {
        self.name
    }

    /// The character carried by a rune key, `None` for named keys.
    pub fn ch(&self) -> Option<char> {
        self.ch
    }

    /// Whether this key was built by one of the constructors, as opposed to
    /// being the zero value.
    pub fn is_set(&self) -> bool {
        self.name != KeyName::Unset
    }

    pub fn is_rune(&self) -> bool {
        self.ch.is_some()
    }
}

impl From<KeyName> for Key {
    fn from(name: KeyName) -> Self {
        Self::with_name(name)
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Self::with_rune(ch)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ch {
            Some(ch) => write!(f, "{ch}"),
            None => f.write_str(self.name.as_str()),
        }
    }
}

bitflags::bitflags! {
    /// Modifier flags attached to a key press.
    ///
    /// Terminals only report Alt reliably; Ctrl and Shift are folded into the
    /// key itself (`CtrlA`, `'A'`). `MOTION` marks mouse drags and never
    /// overlaps `ALT`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifier: u8 {
        const ALT    = 0b0001;
        const MOTION = 0b0010;
    }
}

impl Modifier {
    pub const NONE: Modifier = Modifier::empty();
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str("+")?;
            }
            first = false;
            let mut chars = name.chars();
            if let Some(head) = chars.next() {
                write!(f, "{head}")?;
                for c in chars {
                    write!(f, "{}", c.to_ascii_lowercase())?;
                }
            }
        }
        Ok(())
    }
}
