#![forbid(unsafe_code)]

//! Grouping tracing events.
//!
//! Run:
//!   cargo test -p seqdeck-panels --features tracing --test grouping_tracing

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use seqdeck_panels::{FallbackLayout, GroupOptions, group, group_with};
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Clone, Default)]
struct CapturedEvent {
    message: Option<String>,
    counts: HashMap<String, u64>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        struct FieldVisitor(CapturedEvent);
        impl tracing::field::Visit for FieldVisitor {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                if field.name() == "message" {
                    self.0.message = Some(value.to_owned());
                }
            }

            fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
                self.0.counts.insert(field.name().to_owned(), value);
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.0.message = Some(format!("{value:?}").trim_matches('"').to_owned());
                }
            }
        }
        let mut visitor = FieldVisitor(CapturedEvent::default());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(visitor.0);
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: Arc::clone(&events),
    });
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

fn group_events(events: &[CapturedEvent]) -> Vec<&CapturedEvent> {
    events
        .iter()
        .filter(|event| event.message.as_deref() == Some("panels.group"))
        .collect()
}

const CONTROLS: [&str; 6] = [
    "Pan",
    "LFO Rate",
    "Volume",
    "LFO Depth",
    "Filter Cutoff",
    "Filter Cutoff",
];

#[test]
fn group_reports_counts() {
    let events = capture(|| {
        let _ = group(&CONTROLS);
    });
    let grouped = group_events(&events);
    assert_eq!(grouped.len(), 1);
    let counts = &grouped[0].counts;
    assert_eq!(counts.get("names"), Some(&6));
    assert_eq!(counts.get("buckets"), Some(&4));
    assert_eq!(counts.get("panels"), Some(&4));
    assert_eq!(counts.get("promoted"), Some(&3));
}

#[test]
fn merged_layout_reports_fewer_panels() {
    let options = GroupOptions::default().with_fallback_layout(FallbackLayout::Merged);
    let events = capture(|| {
        let _ = group_with(&CONTROLS, &options);
    });
    let grouped = group_events(&events);
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].counts.get("panels"), Some(&2));
    assert_eq!(grouped[0].counts.get("promoted"), Some(&3));
}

#[test]
fn empty_input_still_logs() {
    let events = capture(|| {
        let _ = group::<&str>(&[]);
    });
    let grouped = group_events(&events);
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].counts.get("names"), Some(&0));
    assert_eq!(grouped[0].counts.get("panels"), Some(&0));
}
