#![forbid(unsafe_code)]

//! Console event kinds and payloads.

use crate::ticker::TickerStatus;
use seqdeck_bus::Bus;

/// Event kinds views can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Ticker layout changed.
    Ticker,
    /// Playback moved to a new beat.
    BeatAdvanced,
    /// An instrument's control names finished loading.
    ControlsLoaded,
    /// A step pad was switched on or off.
    StepToggled,
}

/// Payload carried on the console bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Ticker(TickerStatus),
    BeatAdvanced { beat: usize },
    ControlsLoaded(Vec<String>),
    StepToggled { label: String, selected: bool },
}

impl ConsoleEvent {
    /// The kind this payload is published under.
    #[must_use]
    pub const fn topic(&self) -> Topic {
        match self {
            Self::Ticker(_) => Topic::Ticker,
            Self::BeatAdvanced { .. } => Topic::BeatAdvanced,
            Self::ControlsLoaded(_) => Topic::ControlsLoaded,
            Self::StepToggled { .. } => Topic::StepToggled,
        }
    }
}

/// The bus console views share.
pub type ConsoleBus = Bus<Topic, ConsoleEvent>;

/// Publish an event under its own topic. Returns the number of subscribers
/// notified.
pub fn emit(bus: &ConsoleBus, event: ConsoleEvent) -> usize {
    bus.publish(&event.topic(), &event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_routes_by_payload_topic() {
        let bus = ConsoleBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = bus.subscribe(Topic::BeatAdvanced, move |event| {
            sink.borrow_mut().push(event.clone());
        });

        assert_eq!(emit(&bus, ConsoleEvent::BeatAdvanced { beat: 2 }), 1);
        assert_eq!(emit(&bus, ConsoleEvent::ControlsLoaded(vec![])), 0);
        assert_eq!(*seen.borrow(), vec![ConsoleEvent::BeatAdvanced { beat: 2 }]);
    }
}
