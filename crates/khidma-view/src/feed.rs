// SPDX-License-Identifier: MIT
//
// Viewport event plumbing.
//
// The UI layer adapts real scroll/intersection events onto an `EventFeed`;
// controllers subscribe and get a `Subscription` guard back.  Tests drive a
// `BroadcastFeed` directly, no webview required.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

/// One observed region in an intersection batch.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Section identifier of the observed region.
    pub id: String,
    /// Whether the region currently intersects the viewport band.
    pub is_intersecting: bool,
    /// Signed distance (px) from the region center to the band center.
    pub center_offset: f64,
}

/// Callback invoked with the current scroll offset in px.
pub type ScrollHandler = Arc<dyn Fn(f64) + Send + Sync>;

/// Callback invoked with each batch of intersection entries.
pub type IntersectionHandler = Arc<dyn Fn(&[IntersectionEntry]) + Send + Sync>;

/// Host-side event source injected into each controller.
pub trait EventFeed {
    fn subscribe_scroll(&self, handler: ScrollHandler) -> Subscription;
    fn subscribe_intersections(&self, handler: IntersectionHandler) -> Subscription;
}

/// Guard for one active subscription.
///
/// `cancel` releases the underlying registration; calling it again (or
/// dropping after cancel) is a no-op.  Dropping an un-cancelled guard
/// releases it, so a subscription can never outlive its controller.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Release the subscription. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(release) = self.cancel.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Default)]
struct FeedInner {
    next_id: u64,
    scroll: HashMap<u64, ScrollHandler>,
    intersections: HashMap<u64, IntersectionHandler>,
}

/// Concrete `EventFeed` the host drives by calling `emit_*`.
///
/// Cheaply cloneable; all clones share one handler registry.  Handlers are
/// invoked outside the registry lock so they may subscribe or cancel freely.
#[derive(Clone, Default)]
pub struct BroadcastFeed {
    inner: Arc<Mutex<FeedInner>>,
}

impl BroadcastFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a scroll offset to every scroll subscriber.
    pub fn emit_scroll(&self, offset: f64) {
        let handlers: Vec<ScrollHandler> = {
            let inner = self.inner.lock().expect("feed lock poisoned");
            inner.scroll.values().cloned().collect()
        };
        for handler in handlers {
            handler(offset);
        }
    }

    /// Deliver an intersection batch to every intersection subscriber.
    pub fn emit_intersections(&self, entries: &[IntersectionEntry]) {
        let handlers: Vec<IntersectionHandler> = {
            let inner = self.inner.lock().expect("feed lock poisoned");
            inner.intersections.values().cloned().collect()
        };
        for handler in handlers {
            handler(entries);
        }
    }

    fn allocate_id(&self) -> u64 {
        let mut inner = self.inner.lock().expect("feed lock poisoned");
        inner.next_id += 1;
        inner.next_id
    }
}

impl EventFeed for BroadcastFeed {
    fn subscribe_scroll(&self, handler: ScrollHandler) -> Subscription {
        let id = self.allocate_id();
        self.inner
            .lock()
            .expect("feed lock poisoned")
            .scroll
            .insert(id, handler);
        debug!(id, "scroll subscription added");

        let inner = Arc::clone(&self.inner);
        Subscription::new(move || {
            inner.lock().expect("feed lock poisoned").scroll.remove(&id);
            debug!(id, "scroll subscription released");
        })
    }

    fn subscribe_intersections(&self, handler: IntersectionHandler) -> Subscription {
        let id = self.allocate_id();
        self.inner
            .lock()
            .expect("feed lock poisoned")
            .intersections
            .insert(id, handler);
        debug!(id, "intersection subscription added");

        let inner = Arc::clone(&self.inner);
        Subscription::new(move || {
            inner
                .lock()
                .expect("feed lock poisoned")
                .intersections
                .remove(&id);
            debug!(id, "intersection subscription released");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn emit_scroll_reaches_subscribers() {
        let feed = BroadcastFeed::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_in = Arc::clone(&hits);
        let _sub = feed.subscribe_scroll(Arc::new(move |_| {
            hits_in.fetch_add(1, Ordering::SeqCst);
        }));

        feed.emit_scroll(10.0);
        feed.emit_scroll(20.0);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn cancelled_subscription_stops_receiving() {
        let feed = BroadcastFeed::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_in = Arc::clone(&hits);
        let mut sub = feed.subscribe_scroll(Arc::new(move |_| {
            hits_in.fetch_add(1, Ordering::SeqCst);
        }));

        feed.emit_scroll(10.0);
        sub.cancel();
        feed.emit_scroll(20.0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn double_cancel_is_a_no_op() {
        let feed = BroadcastFeed::new();
        let mut sub = feed.subscribe_scroll(Arc::new(|_| {}));
        sub.cancel();
        sub.cancel();
    }

    #[test]
    fn dropping_the_guard_releases_the_subscription() {
        let feed = BroadcastFeed::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_in = Arc::clone(&hits);
        {
            let _sub = feed.subscribe_scroll(Arc::new(move |_| {
                hits_in.fetch_add(1, Ordering::SeqCst);
            }));
        }
        feed.emit_scroll(10.0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn intersection_batches_are_delivered_intact() {
        let feed = BroadcastFeed::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in = Arc::clone(&seen);
        let _sub = feed.subscribe_intersections(Arc::new(move |entries| {
            seen_in
                .lock()
                .expect("seen lock")
                .push(entries.to_vec());
        }));

        feed.emit_intersections(&[IntersectionEntry {
            id: "visas".into(),
            is_intersecting: true,
            center_offset: -12.0,
        }]);

        let batches = seen.lock().expect("seen lock");
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0][0].id, "visas");
    }
}
