// SPDX-License-Identifier: MIT
//
// Scroll-to-top button visibility: a boolean derived from the scroll
// offset crossing a fixed threshold, recomputed on every scroll event.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::feed::{EventFeed, ScrollHandler, Subscription};

/// Publishes `offset > threshold` for each reported scroll offset.
pub struct ScrollTopController {
    threshold: f64,
    show_tx: Arc<watch::Sender<bool>>,
    subscription: Option<Subscription>,
}

impl ScrollTopController {
    pub fn new(threshold: f64) -> Self {
        let (show_tx, _) = watch::channel(false);
        Self {
            threshold,
            show_tx: Arc::new(show_tx),
            subscription: None,
        }
    }

    /// Begin consuming scroll offsets from `feed`.
    ///
    /// Restarting releases the previous subscription first.
    pub fn start(&mut self, feed: &dyn EventFeed) {
        self.stop();

        let tx = Arc::clone(&self.show_tx);
        let threshold = self.threshold;
        let handler: ScrollHandler = Arc::new(move |offset| {
            let show = offset > threshold;
            let changed = tx.send_if_modified(|current| {
                if *current == show {
                    false
                } else {
                    *current = show;
                    true
                }
            });
            if changed {
                debug!(show, offset, "scroll-to-top visibility changed");
            }
        });

        self.subscription = Some(feed.subscribe_scroll(handler));
        info!(threshold = self.threshold, "scroll tracking started");
    }

    /// Stop observing scroll events. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
            info!("scroll tracking stopped");
        }
    }

    /// Whether the button should currently be visible.
    pub fn visible(&self) -> bool {
        *self.show_tx.borrow()
    }

    /// Watch the visibility flag.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.show_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::BroadcastFeed;

    fn controller_on(feed: &BroadcastFeed) -> ScrollTopController {
        let mut controller = ScrollTopController::new(400.0);
        controller.start(feed);
        controller
    }

    #[test]
    fn hidden_before_any_scroll() {
        let controller = ScrollTopController::new(400.0);
        assert!(!controller.visible());
    }

    #[test]
    fn shows_past_the_threshold_and_hides_below_it() {
        let feed = BroadcastFeed::new();
        let controller = controller_on(&feed);

        feed.emit_scroll(100.0);
        assert!(!controller.visible());

        feed.emit_scroll(401.0);
        assert!(controller.visible());

        feed.emit_scroll(12.0);
        assert!(!controller.visible());
    }

    #[test]
    fn threshold_itself_does_not_show_the_button() {
        let feed = BroadcastFeed::new();
        let controller = controller_on(&feed);

        feed.emit_scroll(400.0);
        assert!(!controller.visible());
    }

    #[test]
    fn watchers_only_wake_on_transitions() {
        let feed = BroadcastFeed::new();
        let controller = controller_on(&feed);
        let mut rx = controller.subscribe();

        feed.emit_scroll(50.0);
        feed.emit_scroll(60.0);
        assert!(!rx.has_changed().expect("channel open"));

        feed.emit_scroll(500.0);
        assert!(rx.has_changed().expect("channel open"));
        assert!(*rx.borrow_and_update());
    }

    #[test]
    fn stop_releases_the_subscription() {
        let feed = BroadcastFeed::new();
        let mut controller = controller_on(&feed);

        controller.stop();
        feed.emit_scroll(900.0);
        assert!(!controller.visible());
    }

    #[test]
    fn stop_twice_is_a_no_op() {
        let feed = BroadcastFeed::new();
        let mut controller = controller_on(&feed);
        controller.stop();
        controller.stop();
    }
}
