#![forbid(unsafe_code)]

//! Control-name grouping for SeqDeck.
//!
//! Instruments expose long flat lists of control names ("Filter Cutoff",
//! "Filter Resonance", "LFO Rate", "Pan", ...). This crate folds such a list
//! into a two-level hierarchy of [`Panel`]s so a console can show one panel
//! per control family instead of one endless table.
//!
//! # Example
//!
//! ```
//! use seqdeck_panels::group;
//!
//! let panels = group(&["Filter Cutoff", "Filter Resonance", "Pan"]);
//!
//! assert_eq!(panels.len(), 2);
//! assert_eq!(panels[0].name(), "Filter");
//! assert_eq!(panels[0].children().len(), 2);
//! assert_eq!(panels[1].name(), "Other");
//! ```

pub mod group;
pub mod panel;

pub use group::{
    DEFAULT_FALLBACK_LABEL, FallbackLayout, GroupOptions, PrefixTrim, SingletonPolicy, group,
    group_with,
};
pub use panel::{Panel, find_panel, leaf_total};
