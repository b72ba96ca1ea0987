use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Cell, TextAreaConfig};
use crate::wrap;

/// Editable text buffer behind an editable view.
///
/// Content is addressed by byte offset and the cursor always sits on a
/// grapheme cluster boundary. Every change rebuilds the wrapped [`Cell`]
/// presentation, which renderers read through [`TextArea::cells`] and
/// [`TextArea::cursor_xy`]. Operations never fail: positions past either end
/// of the buffer clamp to the nearest valid one.
#[derive(Debug, Clone, Default)]
pub struct TextArea {
    content: String,
    cells: Vec<Cell>,
    soft_breaks: Vec<usize>,
    cursor: usize,
    clipboard: String,
    config: TextAreaConfig,
    overwrite: bool,
    dirty: bool,
}

/// Builds a [`TextArea`] with initial settings and content.
#[derive(Debug, Default)]
pub struct TextAreaBuilder {
    config: TextAreaConfig,
    content: String,
}

impl TextAreaBuilder {
    pub fn auto_wrap(mut self, auto_wrap: bool) -> Self {
        self.config.auto_wrap = auto_wrap;
        self
    }

    /// Enables wrapping at `width` columns.
    pub fn auto_wrap_width(mut self, width: usize) -> Self {
        self.config.auto_wrap = true;
        self.config.auto_wrap_width = width;
        self
    }

    pub fn config(mut self, config: TextAreaConfig) -> Self {
        self.config = config;
        self
    }

    /// Initial content. The cursor starts at the beginning.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> TextArea {
        let mut text_area = TextArea {
            content: self.content,
            config: self.config,
            ..TextArea::default()
        };
        text_area.update_cells();
        text_area
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TextAreaBuilder {
        TextAreaBuilder::default()
    }

    pub fn with_config(config: TextAreaConfig) -> Self {
        Self::builder().config(config).build()
    }

    // Accessors

    /// The unwrapped content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The content as displayed, with soft breaks rendered as newlines.
    pub fn wrapped_content(&self) -> String {
        self.cells.iter().map(|cell| cell.text.as_str()).collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Content offsets at which wrapping started a new display line.
    pub fn soft_breaks(&self) -> &[usize] {
        &self.soft_breaks
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    pub fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn config(&self) -> TextAreaConfig {
        self.config
    }

    /// Whether an editing or motion call ran since the last
    /// [`TextArea::take_dirty`], even one that left the buffer as it was.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns and clears the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // Settings

    pub fn set_config(&mut self, config: TextAreaConfig) {
        if self.config != config {
            self.config = config;
            self.update_cells();
        }
    }

    pub fn set_auto_wrap(&mut self, auto_wrap: bool) {
        self.set_config(TextAreaConfig {
            auto_wrap,
            ..self.config
        });
    }

    /// Sets the wrap width, typically the viewport width after a resize.
    pub fn set_auto_wrap_width(&mut self, width: usize) {
        self.set_config(TextAreaConfig {
            auto_wrap_width: width,
            ..self.config
        });
    }

    // Content

    /// Replaces the whole content and moves the cursor to its end.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.content.len();
        self.update_cells();
    }

    /// Types one grapheme cluster at the cursor.
    ///
    /// In overwrite mode the cluster under the cursor is replaced, except at
    /// the end of the buffer or on a line break, where typing inserts.
    pub fn type_character(&mut self, ch: &str) {
        self.put(ch);
        self.update_cells();
    }

    pub fn type_string(&mut self, s: &str) {
        for grapheme in s.graphemes(true) {
            self.put(grapheme);
        }
        self.update_cells();
    }

    pub fn back_space_char(&mut self) {
        self.dirty = true;
        if self.cursor == 0 {
            return;
        }
        let start = self.prev_boundary(self.cursor);
        self.content.replace_range(start..self.cursor, "");
        self.cursor = start;
        self.update_cells();
    }

    pub fn delete_char(&mut self) {
        self.dirty = true;
        if self.cursor == self.content.len() {
            return;
        }
        let end = self.next_boundary(self.cursor);
        self.content.replace_range(self.cursor..end, "");
        self.update_cells();
    }

    /// Deletes the word before the cursor into the clipboard.
    ///
    /// Whitespace right before the cursor goes along with the word. At the
    /// start of a line this joins the line with the previous one instead.
    pub fn back_space_word(&mut self) {
        self.dirty = true;
        if self.cursor == 0 {
            return;
        }
        if self.at_line_start() {
            self.back_space_char();
            return;
        }
        let start = self.word_start_before(self.cursor);
        self.cut(start..self.cursor);
    }

    /// Cuts from the cursor to the start of the current line.
    pub fn delete_to_start_of_line(&mut self) {
        self.dirty = true;
        if self.cursor == 0 {
            return;
        }
        if self.at_line_start() {
            self.back_space_char();
            return;
        }
        let start = self.line_start(self.cursor);
        self.cut(start..self.cursor);
    }

    /// Cuts from the cursor to the end of the current line.
    pub fn delete_to_end_of_line(&mut self) {
        self.dirty = true;
        if self.cursor == self.content.len() {
            return;
        }
        if self.at_line_end() {
            self.delete_char();
            return;
        }
        let end = self.line_end(self.cursor);
        self.cut(self.cursor..end);
    }

    /// Types the clipboard contents at the cursor. The clipboard is kept, so
    /// yanking again repeats the insertion.
    pub fn yank(&mut self) {
        self.dirty = true;
        if self.clipboard.is_empty() {
            return;
        }
        let clipboard = self.clipboard.clone();
        self.type_string(&clipboard);
    }

    /// Empties the buffer. The clipboard survives.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.update_cells();
    }

    pub fn toggle_overwrite(&mut self) {
        self.overwrite = !self.overwrite;
        self.dirty = true;
    }

    // Cursor motion

    /// Moves the cursor to `offset`, clamped to the content and rounded up to
    /// the next grapheme boundary.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = self.snap(offset);
        self.dirty = true;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.prev_boundary(self.cursor);
        self.dirty = true;
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = self.next_boundary(self.cursor);
        self.dirty = true;
    }

    /// Moves one display row up, keeping the display column where possible.
    pub fn move_cursor_up(&mut self) {
        let (x, y) = self.cursor_xy();
        self.set_cursor_2d(x as isize, y as isize - 1);
    }

    /// Moves one display row down, keeping the display column where possible.
    pub fn move_cursor_down(&mut self) {
        let (x, y) = self.cursor_xy();
        self.set_cursor_2d(x as isize, y as isize + 1);
    }

    pub fn move_left_word(&mut self) {
        self.dirty = true;
        if self.cursor == 0 {
            return;
        }
        self.cursor = if self.at_line_start() {
            self.prev_boundary(self.cursor)
        } else {
            self.word_start_before(self.cursor)
        };
    }

    pub fn move_right_word(&mut self) {
        self.dirty = true;
        if self.cursor == self.content.len() {
            return;
        }
        self.cursor = if self.at_line_end() {
            self.next_boundary(self.cursor)
        } else {
            self.word_end_after(self.cursor)
        };
    }

    /// Moves to the start of the current hard line.
    pub fn go_to_start_of_line(&mut self) {
        self.cursor = self.line_start(self.cursor);
        self.dirty = true;
    }

    /// Moves to the end of the current hard line, before its newline.
    pub fn go_to_end_of_line(&mut self) {
        self.cursor = self.line_end(self.cursor);
        self.dirty = true;
    }

    // Cell addressing

    /// The cursor as a display (column, row) pair.
    pub fn cursor_xy(&self) -> (usize, usize) {
        let index = self.content_to_cell_cursor(self.cursor);
        if let Some(cell) = self.cells.get(index) {
            return (cell.x, cell.y);
        }
        match self.cells.last() {
            None => (0, 0),
            Some(last) if last.is_line_break() => (0, last.y + 1),
            Some(last) => (last.x + last.width, last.y),
        }
    }

    /// Places the cursor at display column `x` of display row `y`.
    ///
    /// Negative coordinates clamp to 0. A column inside a wide glyph moves to
    /// the following cell, a column past the end of a row moves to the end of
    /// that row, and a row past the last one moves to the end of the content.
    pub fn set_cursor_2d(&mut self, x: isize, y: isize) {
        let x = x.max(0) as usize;
        let y = y.max(0) as usize;

        let mut index = self
            .cells
            .iter()
            .position(|cell| cell.y == y && (cell.x >= x || cell.is_line_break()))
            .unwrap_or(self.cells.len());
        if index > 0 && self.cells.get(index).is_some_and(|cell| cell.soft_break) {
            index -= 1;
        }

        self.cursor = self.cell_to_content_cursor(index);
        self.dirty = true;
    }

    /// Maps a content offset to the index of the cell displaying it.
    ///
    /// An offset where a soft break was inserted maps to the cell after the
    /// break; the end of the content maps to `cells().len()`.
    pub fn content_to_cell_cursor(&self, offset: usize) -> usize {
        let index = self
            .cells
            .partition_point(|cell| cell.content_index < offset);
        match self.cells.get(index) {
            Some(cell) if cell.soft_break => index + 1,
            _ => index,
        }
    }

    /// Maps a cell index back to a content offset.
    pub fn cell_to_content_cursor(&self, index: usize) -> usize {
        self.cells
            .get(index)
            .map_or(self.content.len(), |cell| cell.content_index)
    }

    // Internals

    fn update_cells(&mut self) {
        let (cells, soft_breaks) = wrap::content_to_cells(&self.content, self.config.wrap_width());
        self.cells = cells;
        self.soft_breaks = soft_breaks;
        self.dirty = true;
    }

    /// Inserts or overwrites one grapheme without rebuilding cells.
    fn put(&mut self, grapheme: &str) {
        if grapheme.is_empty() {
            return;
        }
        let at = self.cursor;
        let end = self.next_boundary(at);
        let replaceable = self.overwrite
            && grapheme != "\n"
            && end > at
            && !matches!(&self.content[at..end], "\n" | "\r\n");
        if replaceable {
            self.content.replace_range(at..end, grapheme);
        } else {
            self.content.insert_str(at, grapheme);
        }
        self.cursor = self.snap(at + grapheme.len());
    }

    fn cut(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.clipboard = self.content[range.clone()].to_string();
        self.content.replace_range(range.clone(), "");
        self.cursor = range.start;
        self.update_cells();
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.content[..pos]
            .graphemes(true)
            .next_back()
            .map_or(0, |g| pos - g.len())
    }

    fn next_boundary(&self, pos: usize) -> usize {
        self.content[pos..]
            .graphemes(true)
            .next()
            .map_or(pos, |g| pos + g.len())
    }

    /// The first grapheme boundary at or after `pos`.
    fn snap(&self, pos: usize) -> usize {
        if pos >= self.content.len() {
            return self.content.len();
        }
        self.content
            .grapheme_indices(true)
            .map(|(index, _)| index)
            .find(|&index| index >= pos)
            .unwrap_or(self.content.len())
    }

    fn at_line_start(&self) -> bool {
        self.content[..self.cursor].ends_with('\n')
    }

    fn at_line_end(&self) -> bool {
        let rest = &self.content[self.cursor..];
        rest.starts_with('\n') || rest.starts_with("\r\n")
    }

    fn line_start(&self, pos: usize) -> usize {
        self.content[..pos].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, pos: usize) -> usize {
        let end = self.content[pos..]
            .find('\n')
            .map_or(self.content.len(), |i| pos + i);
        if self.content[..end].ends_with('\r') && end > pos {
            end - 1
        } else {
            end
        }
    }

    /// Start of the word ending at `pos`, skipping whitespace first.
    fn word_start_before(&self, pos: usize) -> usize {
        let line_start = self.line_start(pos);
        let mut graphemes = self.content[line_start..pos]
            .grapheme_indices(true)
            .rev()
            .skip_while(|(_, g)| WordClass::of(g) == WordClass::Space)
            .peekable();

        let Some(&(first, g)) = graphemes.peek() else {
            return line_start;
        };
        let class = WordClass::of(g);
        let mut start = line_start + first;
        for (index, g) in graphemes {
            if WordClass::of(g) != class {
                break;
            }
            start = line_start + index;
        }
        start
    }

    /// End of the word starting at `pos`, skipping whitespace first.
    fn word_end_after(&self, pos: usize) -> usize {
        let line_end = self.line_end(pos);
        let mut graphemes = self.content[pos..line_end]
            .grapheme_indices(true)
            .skip_while(|(_, g)| WordClass::of(g) == WordClass::Space)
            .peekable();

        let Some(&(_, g)) = graphemes.peek() else {
            return line_end;
        };
        let class = WordClass::of(g);
        let mut end = line_end;
        for (index, g) in graphemes {
            if WordClass::of(g) != class {
                end = pos + index;
                break;
            }
        }
        end
    }
}

/// Character classes whose boundaries delimit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordClass {
    Space,
    Alphanumeric,
    Punctuation,
}

impl WordClass {
    fn of(grapheme: &str) -> Self {
        match grapheme.chars().next() {
            Some(c) if c.is_whitespace() => Self::Space,
            Some(c) if c.is_alphanumeric() => Self::Alphanumeric,
            _ => Self::Punctuation,
        }
    }
}
