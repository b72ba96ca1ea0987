use crate::key::{Key, Modifier};
use crate::view::View;

/// Turns key presses into edits of a view's text area.
///
/// Returns `false` when the key was not consumed, so the host can handle it
/// some other way. Editing itself never fails.
pub trait Editor {
    fn edit(&self, view: &mut View, key: Key, modifier: Modifier) -> bool;
}

/// Adapts a plain function or closure into an [`Editor`].
#[derive(Debug, Clone, Copy)]
pub struct EditorFn<F>(pub F);

impl<F> Editor for EditorFn<F>
where
    F: Fn(&mut View, Key, Modifier) -> bool,
{
    fn edit(&self, view: &mut View, key: Key, modifier: Modifier) -> bool {
        (self.0)(view, key, modifier)
    }
}
