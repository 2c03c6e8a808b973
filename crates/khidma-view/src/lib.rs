// SPDX-License-Identifier: MIT
//
// Khidma — Headless view controllers.
//
// Each controller owns one piece of derived page state and publishes it
// through a `tokio::sync::watch` channel: single writer, any number of
// readers.  Viewport input arrives through the `EventFeed` abstraction
// rather than global window listeners, so every controller runs (and tests)
// without a real viewport.

pub mod carousel;
pub mod feed;
pub mod scroll_top;
pub mod section;

pub use carousel::Carousel;
pub use feed::{BroadcastFeed, EventFeed, IntersectionEntry, Subscription};
pub use scroll_top::ScrollTopController;
pub use section::SectionTracker;
