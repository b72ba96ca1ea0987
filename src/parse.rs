//! Keybinding string grammar.
//!
//! A binding string is either a single character, bound literally, or a
//! `+`-separated list of case-insensitive tokens such as `Ctrl+A`,
//! `alt+left` or `pgup`. Lists of bindings are separated by commas.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::key::{Key, KeyName, Modifier};

/// Symbolic spellings and their canonical token.
static ALIASES: &[(&str, &str)] = &[
    ("/", "Slash"),
    ("\\", "Backslash"),
    ("[", "LsqBracket"),
    ("]", "RsqBracket"),
    ("_", "Underscore"),
    ("escape", "Esc"),
    ("~", "Tilde"),
    ("pageup", "Pgup"),
    ("pagedown", "Pgdn"),
    ("pgup", "Pgup"),
    ("pgdown", "Pgdn"),
    ("up", "ArrowUp"),
    ("down", "ArrowDown"),
    ("right", "ArrowRight"),
    ("left", "ArrowLeft"),
    ("ctl", "Ctrl"),
];

/// Canonical names, matched ignoring ASCII case.
static CANONICAL_KEYS: &[(&str, KeyName)] = &[
    ("KeyF1", KeyName::F1),
    ("KeyF2", KeyName::F2),
    ("KeyF3", KeyName::F3),
    ("KeyF4", KeyName::F4),
    ("KeyF5", KeyName::F5),
    ("KeyF6", KeyName::F6),
    ("KeyF7", KeyName::F7),
    ("KeyF8", KeyName::F8),
    ("KeyF9", KeyName::F9),
    ("KeyF10", KeyName::F10),
    ("KeyF11", KeyName::F11),
    ("KeyF12", KeyName::F12),
    ("KeyInsert", KeyName::Insert),
    ("KeyDelete", KeyName::Delete),
    ("KeyHome", KeyName::Home),
    ("KeyEnd", KeyName::End),
    ("KeyPgup", KeyName::PgUp),
    ("KeyPgdn", KeyName::PgDn),
    ("KeyArrowUp", KeyName::ArrowUp),
    ("KeyArrowDown", KeyName::ArrowDown),
    ("KeyArrowLeft", KeyName::ArrowLeft),
    ("KeyArrowRight", KeyName::ArrowRight),
    ("KeyCtrlTilde", KeyName::CtrlSpace),
    ("KeyCtrl2", KeyName::CtrlSpace),
    ("KeyCtrlSpace", KeyName::CtrlSpace),
    ("KeyCtrlA", KeyName::CtrlA),
    ("KeyCtrlB", KeyName::CtrlB),
    ("KeyCtrlC", KeyName::CtrlC),
    ("KeyCtrlD", KeyName::CtrlD),
    ("KeyCtrlE", KeyName::CtrlE),
    ("KeyCtrlF", KeyName::CtrlF),
    ("KeyCtrlG", KeyName::CtrlG),
    ("KeyBackspace", KeyName::Backspace),
    ("KeyCtrlH", KeyName::Backspace),
    ("KeyTab", KeyName::Tab),
    ("KeyCtrlI", KeyName::Tab),
    ("KeyCtrlJ", KeyName::CtrlJ),
    ("KeyCtrlK", KeyName::CtrlK),
    ("KeyCtrlL", KeyName::CtrlL),
    ("KeyEnter", KeyName::Enter),
    ("KeyCtrlM", KeyName::Enter),
    ("KeyCtrlN", KeyName::CtrlN),
    ("KeyCtrlO", KeyName::CtrlO),
    ("KeyCtrlP", KeyName::CtrlP),
    ("KeyCtrlQ", KeyName::CtrlQ),
    ("KeyCtrlR", KeyName::CtrlR),
    ("KeyCtrlS", KeyName::CtrlS),
    ("KeyCtrlT", KeyName::CtrlT),
    ("KeyCtrlU", KeyName::CtrlU),
    ("KeyCtrlV", KeyName::CtrlV),
    ("KeyCtrlW", KeyName::CtrlW),
    ("KeyCtrlX", KeyName::CtrlX),
    ("KeyCtrlY", KeyName::CtrlY),
    ("KeyCtrlZ", KeyName::CtrlZ),
    ("KeyEsc", KeyName::Esc),
    ("KeyCtrlLsqBracket", KeyName::Esc),
    ("KeyCtrl3", KeyName::Esc),
    ("KeyCtrl4", KeyName::CtrlBackslash),
    ("KeyCtrlBackslash", KeyName::CtrlBackslash),
    ("KeyCtrl5", KeyName::CtrlRsqBracket),
    ("KeyCtrlRsqBracket", KeyName::CtrlRsqBracket),
    ("KeyCtrl6", KeyName::Ctrl6),
    ("KeyCtrl7", KeyName::CtrlSlash),
    ("KeyCtrlSlash", KeyName::CtrlSlash),
    ("KeyCtrlUnderscore", KeyName::CtrlSlash),
    ("KeySpace", KeyName::Space),
    ("KeyBackspace2", KeyName::Backspace2),
    ("KeyCtrl8", KeyName::Backspace2),
    ("MouseLeft", KeyName::MouseLeft),
    ("MouseMiddle", KeyName::MouseMiddle),
    ("MouseRight", KeyName::MouseRight),
    ("MouseRelease", KeyName::MouseRelease),
    ("MouseWheelUp", KeyName::MouseWheelUp),
    ("MouseWheelDown", KeyName::MouseWheelDown),
];

/// The result of parsing one binding string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub key: Key,
    pub modifier: Modifier,
    /// Normalized tokens that produced `key`, Alt excluded.
    pub tokens: Vec<String>,
}

/// Parses a single binding such as `"Ctrl+A"`, `"alt+left"` or `"@"`.
pub fn parse(input: &str) -> Result<ParsedKey, ParseError> {
    let mut chars = input.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(ParsedKey {
            key: Key::with_rune(ch),
            modifier: Modifier::NONE,
            tokens: vec![input.to_string()],
        });
    }

    let mut modifier = Modifier::NONE;
    let mut tokens = Vec::new();
    for token in input
        .split(|c: char| c == '+' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let normalized = normalize_token(token);
        if normalized.eq_ignore_ascii_case("Alt") {
            modifier |= Modifier::ALT;
            continue;
        }
        tokens.push(normalized);
    }

    let joined = tokens.concat();
    let lookup = if joined.to_ascii_lowercase().contains("mouse") {
        joined
    } else {
        format!("Key{joined}")
    };

    match CANONICAL_KEYS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&lookup))
    {
        Some(&(_, name)) => Ok(ParsedKey {
            key: Key::with_name(name),
            modifier,
            tokens,
        }),
        None => {
            tracing::debug!("unsupported keybinding {:?} ({})", input, lookup);
            Err(ParseError::Unsupported {
                lookup,
                modifier,
                tokens,
            })
        }
    }
}

/// Parses a comma-separated list of bindings, e.g. `"ctrl+c, q, esc"`.
pub fn parse_all(input: &str) -> Result<Vec<ParsedKey>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    input
        .split(',')
        .map(|item| {
            parse(item.trim()).map_err(|err| ParseError::InList {
                item: item.to_string(),
                request: input.to_string(),
                source: Box::new(err),
            })
        })
        .collect()
}

/// Like [`parse`], but panics on malformed input.
///
/// Meant for bindings written into the program itself, where a typo is a
/// bug rather than a runtime condition.
pub fn must_parse(input: &str) -> ParsedKey {
    match parse(input) {
        Ok(key) => key,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`parse_all`], but panics on malformed input.
pub fn must_parse_all(input: &str) -> Vec<ParsedKey> {
    match parse_all(input) {
        Ok(keys) => keys,
        Err(err) => panic!("{err}"),
    }
}

fn normalize_token(token: &str) -> String {
    let lower = token.to_lowercase();
    if let Some(&(_, canonical)) = ALIASES.iter().find(|(alias, _)| *alias == lower) {
        return canonical.to_string();
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(only), None) => only.to_uppercase().collect(),
        (Some(head), Some(_)) => {
            let mut title: String = head.to_uppercase().collect();
            title.push_str(&token[head.len_utf8()..]);
            title
        }
        (None, _) => String::new(),
    }
}

impl FromStr for ParsedKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier.contains(Modifier::ALT) {
            f.write_str("Alt+")?;
        }
        if self.tokens.is_empty() {
            write!(f, "{}", self.key)
        } else {
            f.write_str(&self.tokens.join("+"))
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParsedKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ParsedKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
