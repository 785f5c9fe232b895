#![forbid(unsafe_code)]

//! Paging tracing events.
//!
//! Run:
//!   cargo test -p seqdeck-paging --features tracing --test paging_tracing

use std::sync::{Arc, Mutex};

use seqdeck_paging::WindowPaginator;
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

#[derive(Debug, Clone, Default)]
struct CapturedEvent {
    message: Option<String>,
    action: Option<String>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        struct FieldVisitor(CapturedEvent);
        impl tracing::field::Visit for FieldVisitor {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                match field.name() {
                    "message" => self.0.message = Some(value.to_owned()),
                    "action" => self.0.action = Some(value.to_owned()),
                    _ => {}
                }
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                let text = format!("{value:?}").trim_matches('"').to_owned();
                match field.name() {
                    "message" => self.0.message = Some(text),
                    "action" => self.0.action = Some(text),
                    _ => {}
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

#[test]
fn transitions_emit_actions_in_order() {
    let events = capture(|| {
        let mut window = WindowPaginator::new(40, 16).unwrap();
        window.advance();
        window.retreat();
    });
    let actions: Vec<&str> = events
        .iter()
        .filter(|event| event.message.as_deref() == Some("paging.transition"))
        .filter_map(|event| event.action.as_deref())
        .collect();
    assert_eq!(actions, vec!["reset", "advance", "retreat"]);
}

#[test]
fn rejected_advance_is_silent() {
    let events = capture(|| {
        let mut window = WindowPaginator::new(8, 16).unwrap();
        assert!(!window.advance());
    });
    let transitions = events
        .iter()
        .filter(|event| event.message.as_deref() == Some("paging.transition"))
        .count();
    assert_eq!(transitions, 1);
}

#[test]
fn toggle_is_traced() {
    let events = capture(|| {
        let mut window = WindowPaginator::new(8, 4).unwrap();
        window.toggle(2);
        window.toggle(99);
    });
    let toggles = events
        .iter()
        .filter(|event| event.message.as_deref() == Some("paging.toggle"))
        .count();
    assert_eq!(toggles, 1);
}
