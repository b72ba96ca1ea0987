/// One cell of a text area's wrapped presentation.
///
/// Cells are rebuilt from the content after every edit and only ever read by
/// renderers. Each cell holds one grapheme cluster, a hard line break, or a
/// soft line break inserted by word wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The grapheme cluster shown in this cell; `"\n"` for line breaks.
    pub text: String,
    /// Display width in terminal columns (0 for line breaks, 2 for wide glyphs).
    pub width: usize,
    /// Zero-based display column.
    pub x: usize,
    /// Zero-based display row.
    pub y: usize,
    /// Byte offset into the unwrapped content. Soft breaks carry the offset
    /// of the grapheme that follows them, since they stand for no content.
    pub content_index: usize,
    /// Whether this cell is a line break inserted by wrapping.
    pub soft_break: bool,
}

impl Cell {
    /// Whether this cell ends its display row.
    pub fn is_line_break(&self) -> bool {
        self.soft_break || is_hard_break(&self.text)
    }
}

pub(crate) fn is_hard_break(grapheme: &str) -> bool {
    grapheme == "\n" || grapheme == "\r\n"
}

/// Wrapping settings of a text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextAreaConfig {
    /// Insert soft line breaks at word boundaries.
    pub auto_wrap: bool,
    /// Column budget for wrapping; 0 disables wrapping even with `auto_wrap`.
    pub auto_wrap_width: usize,
}

impl TextAreaConfig {
    /// Wrapping enabled at `width` columns.
    pub fn wrapped(width: usize) -> Self {
        Self {
            auto_wrap: true,
            auto_wrap_width: width,
        }
    }

    pub(crate) fn wrap_width(&self) -> Option<usize> {
        (self.auto_wrap && self.auto_wrap_width > 0).then_some(self.auto_wrap_width)
    }
}
