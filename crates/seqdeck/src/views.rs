#![forbid(unsafe_code)]

//! Console views wired to the notification bus.
//!
//! Views own their state behind `Rc<RefCell<..>>` so bus callbacks can update
//! it. Every view keeps its own state; two navigators over the same ticker
//! page independently and are only kept in step by the events they both
//! receive.
//!
//! Callbacks borrow the view state mutably, so publishing from inside
//! [`StepNavigator::with_window`] or [`ControlPanels::with_panels`] panics.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use seqdeck_bus::Subscription;
use seqdeck_panels::{GroupOptions, Panel, group_with};
use seqdeck_paging::{ButtonPanel, PagingError, Slot, WindowPaginator};
use tracing::debug;

use crate::events::{ConsoleBus, ConsoleEvent, Topic, emit};
use crate::ticker::{Granularity, TickerStatus};

// ── Step navigator ──────────────────────────────────────────────────────

/// A paged step view over one granularity of the ticker.
#[derive(Debug)]
pub struct StepNavigator {
    granularity: Granularity,
    window: Rc<RefCell<WindowPaginator>>,
    subscriptions: Vec<Subscription>,
}

impl StepNavigator {
    /// Create a navigator sized from the current ticker status.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::ZeroWindow`] when `window_size` is zero.
    pub fn new(
        granularity: Granularity,
        status: &TickerStatus,
        window_size: usize,
    ) -> Result<Self, PagingError> {
        let window = WindowPaginator::new(status.sequence_len(granularity), window_size)?;
        Ok(Self {
            granularity,
            window: Rc::new(RefCell::new(window)),
            subscriptions: Vec::new(),
        })
    }

    /// Follow ticker updates (and beat positions for beat views) on `bus`.
    ///
    /// The subscriptions live as long as the navigator.
    pub fn attach(&mut self, bus: &ConsoleBus) {
        let granularity = self.granularity;
        let window = Rc::clone(&self.window);
        self.subscriptions
            .push(bus.subscribe(Topic::Ticker, move |event| {
                if let ConsoleEvent::Ticker(status) = event {
                    resync(&mut window.borrow_mut(), status.sequence_len(granularity));
                }
            }));

        if granularity == Granularity::Beat {
            let window = Rc::clone(&self.window);
            self.subscriptions
                .push(bus.subscribe(Topic::BeatAdvanced, move |event| {
                    if let ConsoleEvent::BeatAdvanced { beat } = event {
                        reveal(&mut window.borrow_mut(), *beat);
                    }
                }));
        }
    }

    /// Stop following the bus.
    pub fn detach(&mut self) {
        self.subscriptions.clear();
    }

    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Move one page forward.
    pub fn advance(&self) -> bool {
        self.window.borrow_mut().advance()
    }

    /// Move one page back.
    pub fn retreat(&self) -> bool {
        self.window.borrow_mut().retreat()
    }

    /// Flip the selection flag of a step.
    pub fn toggle(&self, index: usize) -> Option<bool> {
        self.window.borrow_mut().toggle(index)
    }

    /// Page until `index` is visible. Returns whether the window moved.
    pub fn reveal(&self, index: usize) -> bool {
        reveal(&mut self.window.borrow_mut(), index)
    }

    #[must_use]
    pub fn visible_range(&self) -> Vec<usize> {
        self.window.borrow().visible_range().to_vec()
    }

    #[must_use]
    pub fn overflow_padding(&self) -> usize {
        self.window.borrow().overflow_padding()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.window.borrow().cursor()
    }

    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        self.window.borrow().slots().collect()
    }

    /// Run `f` against the paginator.
    pub fn with_window<R>(&self, f: impl FnOnce(&WindowPaginator) -> R) -> R {
        f(&self.window.borrow())
    }
}

fn resync(window: &mut WindowPaginator, len: usize) {
    if window.len() == len {
        return;
    }
    debug!(message = "views.resync", from = window.len(), to = len);
    window.reset(len);
}

fn reveal(window: &mut WindowPaginator, index: usize) -> bool {
    if index >= window.len() || window.visible_range().contains(&index) {
        return false;
    }
    window.reset(window.len());
    while !window.visible_range().contains(&index) && window.advance() {}
    true
}

// ── Control panels ──────────────────────────────────────────────────────

/// Grouped control panels for the selected instrument.
#[derive(Debug)]
pub struct ControlPanels {
    options: GroupOptions,
    panels: Rc<RefCell<Vec<Panel>>>,
    subscriptions: Vec<Subscription>,
}

impl Default for ControlPanels {
    fn default() -> Self {
        Self::new(GroupOptions::default())
    }
}

impl ControlPanels {
    #[must_use]
    pub fn new(options: GroupOptions) -> Self {
        Self {
            options,
            panels: Rc::new(RefCell::new(Vec::new())),
            subscriptions: Vec::new(),
        }
    }

    /// Regroup from a fresh control list.
    pub fn load<S: AsRef<str>>(&self, names: &[S]) {
        *self.panels.borrow_mut() = group_with(names, &self.options);
    }

    /// Regroup whenever a control list is published on `bus`.
    pub fn attach(&mut self, bus: &ConsoleBus) {
        let options = self.options.clone();
        let panels = Rc::clone(&self.panels);
        self.subscriptions
            .push(bus.subscribe(Topic::ControlsLoaded, move |event| {
                if let ConsoleEvent::ControlsLoaded(names) = event {
                    let grouped = group_with(names, &options);
                    debug!(message = "views.controls", names = names.len(), panels = grouped.len());
                    *panels.borrow_mut() = grouped;
                }
            }));
    }

    /// Stop following the bus.
    pub fn detach(&mut self) {
        self.subscriptions.clear();
    }

    #[must_use]
    pub fn options(&self) -> &GroupOptions {
        &self.options
    }

    /// Snapshot of the current panels.
    #[must_use]
    pub fn panels(&self) -> Vec<Panel> {
        self.panels.borrow().clone()
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.borrow().len()
    }

    /// Run `f` against the current panels without cloning.
    pub fn with_panels<R>(&self, f: impl FnOnce(&[Panel]) -> R) -> R {
        f(&self.panels.borrow())
    }
}

// ── Step buttons ────────────────────────────────────────────────────────

/// A button panel whose toggles are published as [`Topic::StepToggled`].
///
/// # Errors
///
/// Returns [`PagingError::ZeroWindow`] when `window_size` is zero.
pub fn step_buttons<T: Display + 'static>(
    items: Vec<T>,
    window_size: usize,
    bus: &ConsoleBus,
) -> Result<ButtonPanel<T>, PagingError> {
    let bus = bus.clone();
    Ok(ButtonPanel::new(items, window_size)?.on_toggle(move |item, selected| {
        emit(
            &bus,
            ConsoleEvent::StepToggled {
                label: item.to_string(),
                selected,
            },
        );
    }))
}
