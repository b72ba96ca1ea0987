//! Registry of key bindings and the lookup that routes key presses.

use std::fmt;
use std::rc::Rc;

use crate::error::ParseError;
use crate::key::{Key, Modifier};
use crate::parse::parse_all;
use crate::view::View;

/// Callback run when a binding matches. `C` is the host's own state.
pub type Handler<C> = Rc<dyn Fn(&mut C, Option<&mut View>) -> anyhow::Result<()>>;

/// One key press bound to a handler, optionally scoped to a view.
pub struct Keybinding<C> {
    view_name: String,
    key: Key,
    modifier: Modifier,
    handler: Handler<C>,
}

impl<C> Keybinding<C> {
    /// An empty `view_name` makes the binding global.
    pub fn new(
        view_name: impl Into<String>,
        key: Key,
        modifier: Modifier,
        handler: Handler<C>,
    ) -> Self {
        Self {
            view_name: view_name.into(),
            key,
            modifier,
            handler,
        }
    }

    pub fn view_name(&self) -> &str {
        &self.view_name
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn handler(&self) -> &Handler<C> {
        &self.handler
    }

    pub fn is_global(&self) -> bool {
        self.view_name.is_empty()
    }

    pub fn matches_keypress(&self, key: Key, modifier: Modifier) -> bool {
        self.key == key && self.modifier == modifier
    }

    /// Whether this binding applies to `view`.
    ///
    /// Editable views swallow plain characters, so character bindings never
    /// match them.
    pub fn matches_view(&self, view: Option<&View>) -> bool {
        let Some(view) = view else {
            return false;
        };
        if view.is_editable() && self.key.is_rune() {
            return false;
        }
        self.view_name == view.name()
    }
}

impl<C> Clone for Keybinding<C> {
    fn clone(&self) -> Self {
        Self {
            view_name: self.view_name.clone(),
            key: self.key,
            modifier: self.modifier,
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<C> fmt::Debug for Keybinding<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keybinding")
            .field("view_name", &self.view_name)
            .field("key", &self.key)
            .field("modifier", &self.modifier)
            .finish_non_exhaustive()
    }
}

/// Bindings in registration order.
pub struct Keybindings<C> {
    bindings: Vec<Keybinding<C>>,
}

impl<C> Default for Keybindings<C> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<C> fmt::Debug for Keybindings<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.bindings).finish()
    }
}

impl<C> Keybindings<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keybinding<C>> {
        self.bindings.iter()
    }

    /// Registers one binding. Existing bindings for the same key are kept
    /// and win, since lookup goes in registration order.
    pub fn bind<F>(&mut self, view_name: &str, key: Key, modifier: Modifier, handler: F)
    where
        F: Fn(&mut C, Option<&mut View>) -> anyhow::Result<()> + 'static,
    {
        self.bindings
            .push(Keybinding::new(view_name, key, modifier, Rc::new(handler)));
    }

    /// Parses `keys` (e.g. `"ctrl+c, q"`) and binds every entry to
    /// `handler`. Nothing is registered when any entry is malformed.
    pub fn bind_str<F>(&mut self, view_name: &str, keys: &str, handler: F) -> Result<(), ParseError>
    where
        F: Fn(&mut C, Option<&mut View>) -> anyhow::Result<()> + 'static,
    {
        let parsed = parse_all(keys)?;
        let handler: Handler<C> = Rc::new(handler);
        for key in parsed {
            self.bindings.push(Keybinding::new(
                view_name,
                key.key,
                key.modifier,
                Rc::clone(&handler),
            ));
        }
        Ok(())
    }

    /// Removes the bindings of `view_name` for this exact key press.
    pub fn delete(&mut self, view_name: &str, key: Key, modifier: Modifier) {
        self.bindings.retain(|binding| {
            !(binding.view_name == view_name && binding.matches_keypress(key, modifier))
        });
    }

    /// Removes every binding scoped to `view_name`.
    pub fn delete_view(&mut self, view_name: &str) {
        self.bindings
            .retain(|binding| binding.view_name != view_name);
    }

    /// Finds the binding for a key press on `view`.
    ///
    /// View bindings are tried first. Failing that, a global binding for the
    /// key press applies, unless it binds a character and `view` is editable.
    pub fn find(&self, view: Option<&View>, key: Key, modifier: Modifier) -> Option<&Keybinding<C>> {
        if let Some(binding) = self
            .bindings
            .iter()
            .find(|binding| binding.matches_keypress(key, modifier) && binding.matches_view(view))
        {
            return Some(binding);
        }

        let editable = view.is_some_and(View::is_editable);
        self.bindings.iter().find(|binding| {
            binding.is_global()
                && binding.matches_keypress(key, modifier)
                && (!editable || !binding.key.is_rune())
        })
    }

    /// Routes a key press: runs the matching handler, or hands the key to
    /// the editor of an editable view.
    ///
    /// Returns whether anything consumed the key. Handler errors are passed
    /// through.
    pub fn dispatch(
        &self,
        ctx: &mut C,
        mut view: Option<&mut View>,
        key: Key,
        modifier: Modifier,
    ) -> anyhow::Result<bool> {
        if let Some(binding) = self.find(view.as_deref(), key, modifier) {
            tracing::trace!(
                "key {} ({}) bound in {:?}",
                key,
                modifier,
                binding.view_name
            );
            let handler = Rc::clone(&binding.handler);
            if let Err(err) = handler(ctx, view) {
                tracing::debug!("handler for {} ({}) failed: {:#}", key, modifier, err);
                return Err(err);
            }
            return Ok(true);
        }

        match view.as_deref_mut() {
            Some(view) if view.is_editable() => {
                tracing::trace!("key {} ({}) passed to editor of {:?}", key, modifier, view.name());
                Ok(view.edit(key, modifier))
            }
            _ => Ok(false),
        }
    }
}
