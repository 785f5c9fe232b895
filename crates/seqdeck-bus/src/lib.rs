#![forbid(unsafe_code)]

//! Notification bus for SeqDeck views.
//!
//! Sequencer views react to pushes from the host application: the ticker
//! advanced, the ticks-per-beat changed, a control list finished loading.
//! [`Bus`] is the registry those pushes go through. Views subscribe to an
//! event kind and receive every payload published under it.
//!
//! # Design
//!
//! The registry lives in shared, reference-counted storage
//! (`Rc<RefCell<..>>`); cloning a [`Bus`] hands out another handle to the same
//! registry. Subscribers are stored as weak references and kept alive by the
//! [`Subscription`] guard returned from [`Bus::subscribe`].
//!
//! # Invariants
//!
//! 1. Subscribers of a kind are called in registration order.
//! 2. A dropped [`Subscription`] is never called again; its entry is pruned
//!    on the next publish.
//! 3. No registry borrow is held while callbacks run, so callbacks may
//!    publish or subscribe.
//!
//! # Example
//!
//! ```
//! use seqdeck_bus::Bus;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let bus: Bus<&str, u32> = Bus::new();
//! let last = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&last);
//! let _sub = bus.subscribe("beat", move |beat| sink.set(*beat));
//!
//! assert_eq!(bus.publish(&"beat", &3), 1);
//! assert_eq!(last.get(), 3);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, debug_span};
use web_time::Instant;

type CallbackRc<P> = Rc<dyn Fn(&P)>;
type CallbackWeak<P> = Weak<dyn Fn(&P)>;

struct Entry<K, P> {
    kind: K,
    callback: CallbackWeak<P>,
}

struct BusInner<K, P> {
    subscribers: Vec<Entry<K, P>>,
    published: u64,
}

/// A shared publish/subscribe registry keyed by event kind.
pub struct Bus<K, P> {
    inner: Rc<RefCell<BusInner<K, P>>>,
}

// Manual Clone: shares the same Rc.
impl<K, P> Clone for Bus<K, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K, P> Default for Bus<K, P> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                subscribers: Vec::new(),
                published: 0,
            })),
        }
    }
}

impl<K: fmt::Debug, P> fmt::Debug for Bus<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Bus")
            .field(
                "kinds",
                &inner.subscribers.iter().map(|entry| &entry.kind).collect::<Vec<_>>(),
            )
            .field("published", &inner.published)
            .finish()
    }
}

impl<K: PartialEq + fmt::Debug + 'static, P: 'static> Bus<K, P> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to payloads published under `kind`.
    ///
    /// Dropping the returned guard unsubscribes the callback.
    pub fn subscribe(&self, kind: K, callback: impl Fn(&P) + 'static) -> Subscription {
        let strong: CallbackRc<P> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(Entry {
            kind,
            callback: weak,
        });
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Deliver `payload` to every live subscriber of `kind`.
    ///
    /// Returns the number of subscribers notified.
    pub fn publish(&self, kind: &K, payload: &P) -> usize {
        // Collect first so no borrow is held while callbacks run.
        let callbacks: Vec<CallbackRc<P>> = {
            let mut inner = self.inner.borrow_mut();
            inner.published += 1;
            inner
                .subscribers
                .retain(|entry| entry.callback.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter(|entry| entry.kind == *kind)
                .filter_map(|entry| entry.callback.upgrade())
                .collect()
        };

        let start = Instant::now();
        let _span = debug_span!(
            "bus.publish",
            kind = ?kind,
            subscribers = callbacks.len(),
            duration_us = tracing::field::Empty
        )
        .entered();

        for callback in &callbacks {
            callback(payload);
        }

        let duration_us = start.elapsed().as_micros() as u64;
        tracing::Span::current().record("duration_us", duration_us);
        debug!(
            kind = ?kind,
            subscribers = callbacks.len(),
            duration_us,
            "bus delivered"
        );
        callbacks.len()
    }

    /// Number of live subscribers for `kind`.
    #[must_use]
    pub fn subscriber_count(&self, kind: &K) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|entry| entry.kind == *kind && entry.callback.strong_count() > 0)
            .count()
    }

    /// Total number of `publish` calls on this registry.
    #[must_use]
    pub fn published(&self) -> u64 {
        self.inner.borrow().published
    }
}

/// RAII guard for a bus subscriber.
///
/// Dropping it releases the only strong reference to the callback, so the
/// weak entry in the registry stops upgrading.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
