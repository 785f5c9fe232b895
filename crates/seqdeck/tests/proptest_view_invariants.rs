//! Property-based invariant tests for bus-driven views.
//!
//! 1. A navigator's sequence length always tracks the last ticker status.
//! 2. A length change rewinds to the first page; an unchanged length keeps it.
//! 3. Control panels always hold every loaded name.

use proptest::prelude::*;
use seqdeck::prelude::*;
use seqdeck::{WindowPaginator, leaf_total};

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Ticker(TickerStatus),
    Advance,
    Retreat,
}

fn status() -> impl Strategy<Value = TickerStatus> {
    (0usize..64, 0usize..16, 0usize..40, 0usize..8)
        .prop_map(|(ticks, beats, bars, parts)| TickerStatus::new(ticks, beats, bars, parts))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => status().prop_map(Op::Ticker),
        2 => Just(Op::Advance),
        2 => Just(Op::Retreat),
    ]
}

fn granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Tick),
        Just(Granularity::Beat),
        Just(Granularity::Bar),
        Just(Granularity::Part),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Navigators follow the ticker
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn navigator_tracks_ticker(
        initial in status(),
        granularity in granularity(),
        size in 1usize..20,
        ops in proptest::collection::vec(op(), 0..40),
    ) {
        let bus = ConsoleBus::new();
        let mut nav = StepNavigator::new(granularity, &initial, size).unwrap();
        nav.attach(&bus);
        let mut expected_len = initial.sequence_len(granularity);

        for op in &ops {
            match op {
                Op::Ticker(next) => {
                    let before = nav.visible_range();
                    let len = next.sequence_len(granularity);
                    emit(&bus, ConsoleEvent::Ticker(*next));
                    if len == expected_len {
                        prop_assert_eq!(nav.visible_range(), before);
                    } else {
                        prop_assert_eq!(nav.visible_range(), (0..len.min(size)).collect::<Vec<_>>());
                    }
                    expected_len = len;
                }
                Op::Advance => {
                    nav.advance();
                }
                Op::Retreat => {
                    nav.retreat();
                }
            }
            prop_assert_eq!(nav.with_window(WindowPaginator::len), expected_len);
            prop_assert_eq!(nav.visible_range().len() + nav.overflow_padding(), size);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Control panels keep every name
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn loaded_controls_are_all_listed(
        names in proptest::collection::vec("[a-c]{1,2}( [A-Za-z]{1,4}){0,2}", 0..30),
    ) {
        let bus = ConsoleBus::new();
        let mut controls = ControlPanels::default();
        controls.attach(&bus);
        emit(&bus, ConsoleEvent::ControlsLoaded(names.clone()));

        let panels = controls.panels();
        for name in &names {
            prop_assert!(
                panels
                    .iter()
                    .any(|panel| panel.child_names().any(|child| child == name.as_str())),
                "{} missing", name
            );
        }
        let mut distinct = names.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert!(leaf_total(&panels) >= distinct.len());
    }
}
