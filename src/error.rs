use crate::key::Modifier;

/// Errors produced while turning binding strings into keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No key matches the normalized tokens.
    #[error("unsupported keybinding: {lookup}{}", modifier_suffix(.modifier))]
    Unsupported {
        /// The joined name that was looked up, e.g. `KeyCtrlQq`.
        lookup: String,
        /// Modifiers found before the lookup failed.
        modifier: Modifier,
        /// Normalized tokens, Alt excluded.
        tokens: Vec<String>,
    },

    #[error("must have at least one keybinding")]
    Empty,

    /// One entry of a comma-separated list failed to parse.
    #[error("could not parse keybinding '{item}' from request '{request}': {source}")]
    InList {
        item: String,
        request: String,
        #[source]
        source: Box<ParseError>,
    },
}

fn modifier_suffix(modifier: &Modifier) -> String {
    if modifier.is_empty() {
        String::new()
    } else {
        format!(" (+{modifier})")
    }
}
