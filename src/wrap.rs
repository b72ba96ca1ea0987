//! Word wrapping of text area content into display cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::types::{Cell, is_hard_break};

/// Splits `content` into display cells, wrapping at `wrap_width` columns.
///
/// Every cluster other than a line break takes at least one column, so no
/// two cells on a row share a column. Lines are only broken after whitespace, so a word longer than the width
/// overflows instead of being split. Whitespace at the end of a display line
/// is kept. The second value lists, for each inserted soft break, the byte
/// offset in `content` where the new display line begins.
///
/// After a footnote marker such as `[1]: ` the space following the colon is
/// not a break opportunity, and a git trailer line such as
/// `Signed-off-by: ...` is never wrapped.
pub fn content_to_cells(content: &str, wrap_width: Option<usize>) -> (Vec<Cell>, Vec<usize>) {
    let mut cells: Vec<Cell> = Vec::with_capacity(content.len());
    let mut soft_breaks = Vec::new();
    let mut line_width = 0;
    let mut break_at: Option<usize> = None;
    let mut marker = Marker::Start;
    let mut wrap_line = true;

    for (index, grapheme) in content.grapheme_indices(true) {
        if is_hard_break(grapheme) {
            cells.push(Cell {
                text: grapheme.to_string(),
                width: 0,
                x: 0,
                y: 0,
                content_index: index,
                soft_break: false,
            });
            line_width = 0;
            break_at = None;
            marker = Marker::Start;
            wrap_line = true;
            continue;
        }

        let width = grapheme.width().max(1);
        if let Some(max_width) = wrap_width.filter(|_| wrap_line) {
            if is_blank(grapheme) {
                match marker {
                    Marker::Trailer => wrap_line = false,
                    Marker::Footnote => {}
                    _ => break_at = Some(cells.len() + 1),
                }
            } else if line_width + width > max_width {
                if let Some(at) = break_at.take() {
                    let content_index = cells.get(at).map_or(index, |cell| cell.content_index);
                    cells.insert(
                        at,
                        Cell {
                            text: "\n".to_string(),
                            width: 0,
                            x: 0,
                            y: 0,
                            content_index,
                            soft_break: true,
                        },
                    );
                    soft_breaks.push(content_index);

                    // The partial word moves to the new line.
                    line_width = 0;
                    marker = Marker::Start;
                    for cell in &cells[at + 1..] {
                        line_width += cell.width;
                        marker = marker.advance(&cell.text);
                    }
                }
            }
            marker = marker.advance(grapheme);
        }

        cells.push(Cell {
            text: grapheme.to_string(),
            width,
            x: 0,
            y: 0,
            content_index: index,
            soft_break: false,
        });
        line_width += width;
    }

    assign_positions(&mut cells);
    tracing::trace!(
        "wrapped {} bytes into {} cells at width {:?}, {} soft breaks",
        content.len(),
        cells.len(),
        wrap_width,
        soft_breaks.len()
    );
    (cells, soft_breaks)
}

fn assign_positions(cells: &mut [Cell]) {
    let (mut x, mut y) = (0, 0);
    for cell in cells {
        cell.x = x;
        cell.y = y;
        if cell.is_line_break() {
            x = 0;
            y += 1;
        } else {
            x += cell.width;
        }
    }
}

fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

/// Recognizes a footnote marker (`[12]:`) or a git trailer token
/// (`Signed-off-by:`) at the start of a display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Start,
    FootnoteOpen,
    FootnoteDigits,
    FootnoteClose,
    Footnote,
    TrailerToken { hyphenated: bool },
    Trailer,
    Failed,
}

impl Marker {
    fn advance(self, grapheme: &str) -> Self {
        let mut chars = grapheme.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => return Self::Failed,
        };

        match (self, ch) {
            (Self::Start, '[') => Self::FootnoteOpen,
            (Self::Start, c) if c.is_ascii_alphabetic() => Self::TrailerToken { hyphenated: false },
            (Self::FootnoteOpen | Self::FootnoteDigits, c) if c.is_ascii_digit() => {
                Self::FootnoteDigits
            }
            (Self::FootnoteDigits, ']') => Self::FootnoteClose,
            (Self::FootnoteClose, ':') => Self::Footnote,
            (Self::TrailerToken { .. }, '-') => Self::TrailerToken { hyphenated: true },
            (Self::TrailerToken { hyphenated }, c) if c.is_ascii_alphanumeric() => {
                Self::TrailerToken { hyphenated }
            }
            (Self::TrailerToken { hyphenated: true }, ':') => Self::Trailer,
            _ => Self::Failed,
        }
    }
}
