#![forbid(unsafe_code)]

//! Button panel: a paged row of toggleable pads.
//!
//! Each pad shows one sequence element. Toggling a pad flips its selection
//! flag and hands the element to the registered listener, which usually
//! forwards it to the console's notification bus.

use crate::window::{PagingError, Slot, WindowPaginator};
use std::fmt;

type ToggleListener<T> = Box<dyn FnMut(&T, bool)>;

/// A paged set of toggleable elements.
pub struct ButtonPanel<T> {
    items: Vec<T>,
    window: WindowPaginator,
    on_toggle: Option<ToggleListener<T>>,
}

impl<T: fmt::Debug> fmt::Debug for ButtonPanel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonPanel")
            .field("items", &self.items)
            .field("window", &self.window)
            .field("has_listener", &self.on_toggle.is_some())
            .finish()
    }
}

impl<T> ButtonPanel<T> {
    /// Create a panel over `items` showing `window_size` pads.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroWindow`] when `window_size` is zero.
    pub fn new(items: Vec<T>, window_size: usize) -> Result<Self, PagingError> {
        let window = WindowPaginator::new(items.len(), window_size)?;
        Ok(Self {
            items,
            window,
            on_toggle: None,
        })
    }

    /// Register the toggle listener.
    #[must_use]
    pub fn on_toggle(mut self, listener: impl FnMut(&T, bool) + 'static) -> Self {
        self.set_on_toggle(listener);
        self
    }

    /// Replace the toggle listener.
    pub fn set_on_toggle(&mut self, listener: impl FnMut(&T, bool) + 'static) {
        self.on_toggle = Some(Box::new(listener));
    }

    /// Replace the elements and rewind to the first page.
    ///
    /// Selection flags belong to the old elements and are cleared.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.window.clear_selection();
        self.window.reset(self.items.len());
    }

    /// All elements.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The underlying paginator.
    #[must_use]
    pub fn window(&self) -> &WindowPaginator {
        &self.window
    }

    /// Move one page forward. See [`WindowPaginator::advance`].
    pub fn advance(&mut self) -> bool {
        self.window.advance()
    }

    /// Move one page back. See [`WindowPaginator::retreat`].
    pub fn retreat(&mut self) -> bool {
        self.window.retreat()
    }

    /// Toggle the element at a sequence index and notify the listener.
    ///
    /// Returns the new flag, or `None` when `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let selected = self.window.toggle(index)?;
        if let (Some(listener), Some(item)) = (self.on_toggle.as_mut(), self.items.get(index)) {
            listener(item, selected);
        }
        Some(selected)
    }

    /// Toggle the element shown in a window slot.
    ///
    /// Padding slots and positions past the window are ignored.
    pub fn toggle_slot(&mut self, position: usize) -> Option<bool> {
        let index = self.window.visible_range().get(position).copied()?;
        self.toggle(index)
    }

    /// Elements in the visible window, in order.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.window
            .visible_range()
            .iter()
            .filter_map(|&index| self.items.get(index))
    }

    /// Every window slot with its element and selection flag; padding slots
    /// yield `None`.
    pub fn pads(&self) -> impl Iterator<Item = Option<(&T, bool)>> + '_ {
        self.window.slots().map(|slot| match slot {
            Slot::Index(index) => self
                .items
                .get(index)
                .map(|item| (item, self.window.is_selected(index))),
            Slot::Padding => None,
        })
    }

    /// Selected elements in sequence order.
    pub fn selected_items(&self) -> impl Iterator<Item = &T> + '_ {
        self.window
            .selected_indices()
            .iter()
            .filter_map(|&index| self.items.get(index))
    }
}
