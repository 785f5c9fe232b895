#![forbid(unsafe_code)]

//! Bounded window paginator.
//!
//! # Invariants
//!
//! 1. `visible_range().len() + overflow_padding() == window_size()` in every
//!    reachable state.
//! 2. `cursor() <= len()`.
//! 3. `visible_range()` is a run of consecutive indices starting where the
//!    last refill started.
//!
//! # Paging
//!
//! [`advance`](WindowPaginator::advance) refuses to move once the window
//! shows the last index; it never scrolls partially.
//! [`retreat`](WindowPaginator::retreat) moves the cursor back two windows
//! and refills forward from there. Starting from a full page this lands on
//! the previous page. After a short final page it lands earlier than a page
//! boundary, so `retreat` then `advance` does not always return to the same
//! window.

use std::collections::BTreeSet;
use std::fmt;

/// Errors raised when constructing a paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingError {
    /// The requested window has no slots.
    ZeroWindow,
}

impl fmt::Display for PagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindow => write!(f, "window size must be greater than zero"),
        }
    }
}

impl std::error::Error for PagingError {}

/// One rendered cell of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A sequence index.
    Index(usize),
    /// Filler after the end of the sequence.
    Padding,
}

impl Slot {
    /// The sequence index, if this slot shows one.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(index),
            Self::Padding => None,
        }
    }
}

/// Cursor-driven fixed-size window over a sequence of `len` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowPaginator {
    len: usize,
    window_size: usize,
    /// Index of the next unseen element when paging forward.
    cursor: usize,
    visible: Vec<usize>,
    padding: usize,
    selected: BTreeSet<usize>,
}

impl WindowPaginator {
    /// Create a paginator over `len` elements showing `window_size` slots.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroWindow`] when `window_size` is zero.
    pub fn new(len: usize, window_size: usize) -> Result<Self, PagingError> {
        if window_size == 0 {
            return Err(PagingError::ZeroWindow);
        }
        let mut window = Self {
            len: 0,
            window_size,
            cursor: 0,
            visible: Vec::with_capacity(window_size),
            padding: window_size,
            selected: BTreeSet::new(),
        };
        window.reset(len);
        Ok(window)
    }

    /// Rewind to the first page of a sequence of `len` elements.
    ///
    /// Called when the owning view loads or the sequence length changes.
    /// Selection flags for indices past the new end are dropped.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.cursor = 0;
        self.fill_from_cursor();
        self.selected.retain(|&index| index < len);
        #[cfg(feature = "tracing")]
        self.log_transition("reset");
    }

    /// Move one page forward.
    ///
    /// Returns `false` without touching the window when the last index is
    /// already visible or the cursor sits at the end.
    pub fn advance(&mut self) -> bool {
        let shows_last = self
            .visible
            .last()
            .is_some_and(|&last| last + 1 == self.len);
        if shows_last || self.cursor >= self.len {
            return false;
        }
        self.fill_from_cursor();
        #[cfg(feature = "tracing")]
        self.log_transition("advance");
        true
    }

    /// Move one page back.
    ///
    /// The cursor jumps back two windows (clamped at zero) and the window is
    /// refilled forward from there. Returns `false` when the cursor is zero.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self
            .cursor
            .saturating_sub(self.window_size.saturating_mul(2));
        self.fill_from_cursor();
        #[cfg(feature = "tracing")]
        self.log_transition("retreat");
        true
    }

    /// Flip the selection flag of a sequence index.
    ///
    /// Returns the new flag, or `None` when `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let selected = self.selected.insert(index);
        if !selected {
            self.selected.remove(&index);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "paging.toggle", index, selected);
        Some(selected)
    }

    /// Indices currently shown, in order.
    #[inline]
    #[must_use]
    pub fn visible_range(&self) -> &[usize] {
        &self.visible
    }

    /// Number of placeholder slots after the visible indices.
    #[inline]
    #[must_use]
    pub const fn overflow_padding(&self) -> usize {
        self.padding
    }

    /// Index of the next unseen element when paging forward.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sequence length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the window.
    #[inline]
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Every slot of the window: visible indices, then padding.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.visible
            .iter()
            .copied()
            .map(Slot::Index)
            .chain(std::iter::repeat_n(Slot::Padding, self.padding))
    }

    /// Whether a sequence index is selected.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Selected indices in ascending order.
    #[must_use]
    pub fn selected_indices(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// Drop every selection flag.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Zero-based page of the first visible index.
    #[must_use]
    pub fn page(&self) -> usize {
        self.visible
            .first()
            .map_or(0, |&first| first / self.window_size)
    }

    /// Number of pages needed to show the whole sequence.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.len.div_ceil(self.window_size)
    }

    /// Capture cursor, length and selection.
    #[must_use]
    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            len: self.len,
            window_size: self.window_size,
            start: self.visible.first().copied().unwrap_or(self.cursor),
            selected: self.selected.iter().copied().collect(),
        }
    }

    /// Rebuild a paginator from a snapshot.
    ///
    /// The window is refilled forward from the saved first visible index,
    /// clamped to the last index of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroWindow`] when the snapshot's window is empty.
    pub fn from_snapshot(snapshot: &WindowSnapshot) -> Result<Self, PagingError> {
        let mut window = Self::new(snapshot.len, snapshot.window_size)?;
        window.cursor = snapshot.start.min(snapshot.len.saturating_sub(1));
        window.fill_from_cursor();
        window.selected = snapshot
            .selected
            .iter()
            .copied()
            .filter(|&index| index < snapshot.len)
            .collect();
        Ok(window)
    }

    fn fill_from_cursor(&mut self) {
        self.visible.clear();
        while self.visible.len() < self.window_size && self.cursor < self.len {
            self.visible.push(self.cursor);
            self.cursor += 1;
        }
        self.padding = self.window_size - self.visible.len();
    }

    #[cfg(feature = "tracing")]
    fn log_transition(&self, action: &str) {
        tracing::debug!(
            message = "paging.transition",
            action,
            cursor = self.cursor,
            len = self.len,
            visible = self.visible.len(),
            padding = self.padding
        );
    }
}

/// Persistable paginator state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSnapshot {
    /// Sequence length.
    pub len: usize,
    /// Window size.
    pub window_size: usize,
    /// First visible index.
    pub start: usize,
    /// Selected indices.
    pub selected: Vec<usize>,
}
