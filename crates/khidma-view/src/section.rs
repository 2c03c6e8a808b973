// SPDX-License-Identifier: MIT
//
// Active-section tracking for navigation highlighting.
//
// The host observes each page section against a narrow band around the
// viewport's vertical center and reports intersection batches through the
// event feed.  Among intersecting registered sections, the one whose center
// sits closest to the band center wins — a deliberate, deterministic
// replacement for the original site's last-reported-wins behavior.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::feed::{EventFeed, IntersectionHandler, Subscription};

/// Tracks which registered section is currently active.
///
/// Lifecycle: `register` the section ids once after initial render, then
/// `start` observation; `stop` releases the subscription and is idempotent.
/// Before the first observation the active id is the configured default.
pub struct SectionTracker {
    active_tx: Arc<watch::Sender<String>>,
    registered: Vec<String>,
    subscription: Option<Subscription>,
}

impl SectionTracker {
    /// Create a tracker reporting `default_id` until observation starts.
    pub fn new(default_id: &str) -> Self {
        let (active_tx, _) = watch::channel(default_id.to_string());
        Self {
            active_tx: Arc::new(active_tx),
            registered: Vec::new(),
            subscription: None,
        }
    }

    /// Replace the set of observed section ids.
    ///
    /// Takes effect on the next `start`; ids reported for sections outside
    /// this set are ignored.
    pub fn register(&mut self, ids: impl IntoIterator<Item = String>) {
        self.registered = ids.into_iter().collect();
        debug!(sections = self.registered.len(), "sections registered");
    }

    /// Begin consuming intersection batches from `feed`.
    ///
    /// Restarting releases the previous subscription first, so at most one
    /// observation subscription exists per tracker.
    pub fn start(&mut self, feed: &dyn EventFeed) {
        self.stop();

        let tx = Arc::clone(&self.active_tx);
        let registered: Arc<[String]> = self.registered.clone().into();
        let handler: IntersectionHandler = Arc::new(move |entries| {
            let winner = entries
                .iter()
                .filter(|e| e.is_intersecting && registered.iter().any(|id| *id == e.id))
                .min_by(|a, b| a.center_offset.abs().total_cmp(&b.center_offset.abs()));
            if let Some(entry) = winner {
                let changed = tx.send_if_modified(|active| {
                    if *active == entry.id {
                        false
                    } else {
                        entry.id.clone_into(active);
                        true
                    }
                });
                if changed {
                    debug!(section = %entry.id, "active section changed");
                }
            }
        });

        self.subscription = Some(feed.subscribe_intersections(handler));
        info!("section tracking started");
    }

    /// Stop observing and release the subscription. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
            info!("section tracking stopped");
        }
    }

    /// The currently active section id.
    pub fn active(&self) -> String {
        self.active_tx.borrow().clone()
    }

    /// Watch the active section id.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.active_tx.subscribe()
    }
}
