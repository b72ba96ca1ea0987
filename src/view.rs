use std::fmt;
use std::rc::Rc;

use crate::editor::DEFAULT_EDITOR;
use crate::key::{Key, Modifier};
use crate::text_area::TextArea;
use crate::traits::Editor;

/// A named screen region that can own an editable [`TextArea`].
///
/// Only the parts keybinding dispatch and editing need live here; drawing
/// is left to the host, which polls [`View::take_render_request`].
pub struct View {
    name: String,
    editable: bool,
    text_area: TextArea,
    editor: Rc<dyn Editor>,
    needs_render: bool,
}

impl View {
    /// A non-editable view using [`DEFAULT_EDITOR`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            editable: false,
            text_area: TextArea::default(),
            editor: Rc::new(DEFAULT_EDITOR),
            needs_render: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether key presses go to the editor.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub fn text_area(&self) -> &TextArea {
        &self.text_area
    }

    pub fn text_area_mut(&mut self) -> &mut TextArea {
        &mut self.text_area
    }

    pub fn set_editor(&mut self, editor: impl Editor + 'static) {
        self.editor = Rc::new(editor);
    }

    /// Feeds a key press to this view's editor. Returns whether it was
    /// consumed.
    pub fn edit(&mut self, key: Key, modifier: Modifier) -> bool {
        let editor = Rc::clone(&self.editor);
        editor.edit(self, key, modifier)
    }

    /// Asks the host to redraw this view's text.
    pub fn render_text_area(&mut self) {
        self.needs_render = true;
    }

    /// Returns and clears the pending redraw request.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    /// Adapts wrapping to a new inner width.
    pub fn resize(&mut self, width: usize) {
        self.text_area.set_auto_wrap_width(width);
        self.needs_render = true;
    }

    pub fn cursor_xy(&self) -> (usize, usize) {
        self.text_area.cursor_xy()
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("name", &self.name)
            .field("editable", &self.editable)
            .field("text_area", &self.text_area)
            .field("needs_render", &self.needs_render)
            .finish_non_exhaustive()
    }
}
