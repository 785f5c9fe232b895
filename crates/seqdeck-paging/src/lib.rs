#![forbid(unsafe_code)]

//! Window paging for SeqDeck step views.
//!
//! Sequencer views (ticks of a beat, beats of a bar, bars, parts, or any
//! symbol list) render a fixed number of cells. [`WindowPaginator`] keeps a
//! cursor over the sequence and always reports exactly `window_size` slots:
//! the visible indices followed by padding placeholders.
//!
//! [`ButtonPanel`] pairs a paginator with the sequence elements and a toggle
//! listener, for pad-style views where each cell can be switched on and off.
//!
//! # Example
//!
//! ```
//! use seqdeck_paging::WindowPaginator;
//!
//! let mut window = WindowPaginator::new(20, 16).unwrap();
//! assert_eq!(window.visible_range(), (0..16).collect::<Vec<_>>().as_slice());
//!
//! assert!(window.advance());
//! assert_eq!(window.visible_range(), &[16, 17, 18, 19]);
//! assert_eq!(window.overflow_padding(), 12);
//! ```

pub mod buttons;
pub mod window;

pub use buttons::ButtonPanel;
pub use window::{PagingError, Slot, WindowPaginator, WindowSnapshot};

/// Window size used by the console's step views.
pub const DEFAULT_WINDOW_SIZE: usize = 16;
