#![forbid(unsafe_code)]

//! SeqDeck public facade crate.
//!
//! Re-exports the grouping, paging and bus crates and wires them into the
//! views a sequencing console needs: control panels rebuilt when an
//! instrument's control list loads, and step navigators that follow the
//! ticker.
//!
//! # Example
//!
//! ```
//! use seqdeck::prelude::*;
//!
//! let bus = ConsoleBus::new();
//! let status = TickerStatus::new(24, 4, 8, 2);
//! let mut ticks = StepNavigator::new(Granularity::Tick, &status, 16).unwrap();
//! ticks.attach(&bus);
//!
//! assert_eq!(ticks.visible_range(), (0..16).collect::<Vec<_>>());
//!
//! emit(&bus, ConsoleEvent::Ticker(TickerStatus::new(12, 4, 8, 2)));
//! assert_eq!(ticks.visible_range(), (0..12).collect::<Vec<_>>());
//! assert_eq!(ticks.overflow_padding(), 4);
//! ```

pub mod config;
pub mod error;
pub mod events;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod ticker;
pub mod views;

// --- Core re-exports -------------------------------------------------------

pub use seqdeck_bus::{Bus, Subscription};
pub use seqdeck_panels::{
    FallbackLayout, GroupOptions, Panel, PrefixTrim, SingletonPolicy, find_panel, group, group_with,
    leaf_total,
};
pub use seqdeck_paging::{
    ButtonPanel, DEFAULT_WINDOW_SIZE, PagingError, Slot, WindowPaginator, WindowSnapshot,
};

pub use config::{ConfigError, ConsoleConfig, PagingConfig};
pub use error::{Error, Result};
pub use events::{ConsoleBus, ConsoleEvent, Topic, emit};
pub use ticker::{Granularity, TickerStatus};
pub use views::{ControlPanels, StepNavigator, step_buttons};

/// Common imports for console hosts.
pub mod prelude {
    pub use crate::events::{ConsoleBus, ConsoleEvent, Topic, emit};
    pub use crate::ticker::{Granularity, TickerStatus};
    pub use crate::views::{ControlPanels, StepNavigator, step_buttons};
    pub use crate::{ButtonPanel, GroupOptions, Panel, WindowPaginator, group};
}
