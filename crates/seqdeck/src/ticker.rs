#![forbid(unsafe_code)]

//! Ticker status as pushed by the host.
//!
//! The sequencer service reports its timing layout; step views only need the
//! length of the sequence at their own granularity.

/// Sequence granularity a step view pages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Granularity {
    /// Ticks within one beat.
    Tick,
    /// Beats within one bar.
    Beat,
    /// Bars within the pattern.
    Bar,
    /// Parts (tracks) of the song.
    Part,
}

/// Timing layout reported by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct TickerStatus {
    /// Tick resolution of one beat.
    pub ticks_per_beat: usize,
    /// Beats in one bar.
    pub beats_per_bar: usize,
    /// Bars in the current pattern.
    pub bars: usize,
    /// Parts (tracks) in the song.
    pub parts: usize,
}

impl TickerStatus {
    /// Build a status from the four sequence lengths.
    ///
    /// ```
    /// use seqdeck::{Granularity, TickerStatus};
    ///
    /// let status = TickerStatus::new(96, 4, 16, 3);
    /// assert_eq!(status.sequence_len(Granularity::Beat), 4);
    /// ```
    #[must_use]
    pub const fn new(ticks_per_beat: usize, beats_per_bar: usize, bars: usize, parts: usize) -> Self {
        Self {
            ticks_per_beat,
            beats_per_bar,
            bars,
            parts,
        }
    }

    /// Sequence length at the given granularity.
    #[must_use]
    pub const fn sequence_len(&self, granularity: Granularity) -> usize {
        match granularity {
            Granularity::Tick => self.ticks_per_beat,
            Granularity::Beat => self.beats_per_bar,
            Granularity::Bar => self.bars,
            Granularity::Part => self.parts,
        }
    }
}
