// SPDX-License-Identifier: MIT
//
// Testimonials carousel: a cyclic index with timed auto-advance.
//
// The autoplay timer is a single spawned task sleeping one period per tick.
// Every manual transition replaces that task with a fresh one, so exactly
// one pending auto-advance exists at any instant; `stop` aborts it and is
// idempotent.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use khidma_core::error::{KhidmaError, Result};

/// Cycles an index over `len` slides, wrapping modulo `len`.
pub struct Carousel {
    len: usize,
    period: Duration,
    index_tx: Arc<watch::Sender<usize>>,
    autoplay: Option<JoinHandle<()>>,
}

impl Carousel {
    /// Create a carousel over `len` slides starting at index 0.
    ///
    /// The timer is not armed until [`start`](Self::start).
    pub fn new(len: usize, period: Duration) -> Result<Self> {
        if len == 0 {
            return Err(KhidmaError::EmptyCarousel);
        }
        let (index_tx, _) = watch::channel(0);
        Ok(Self {
            len,
            period,
            index_tx: Arc::new(index_tx),
            autoplay: None,
        })
    }

    /// Arm the autoplay timer, replacing any already-running one.
    pub fn start(&mut self) {
        self.abort_timer();

        let tx = Arc::clone(&self.index_tx);
        let len = self.len;
        let period = self.period;
        self.autoplay = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                tx.send_modify(|i| *i = (*i + 1) % len);
                debug!("carousel auto-advanced");
            }
        }));
        debug!(period_ms = period.as_millis() as u64, "carousel autoplay armed");
    }

    /// Stop the autoplay timer. Idempotent; no tick fires afterwards.
    pub fn stop(&mut self) {
        if self.abort_timer() {
            info!("carousel autoplay stopped");
        }
    }

    /// Advance to the next slide and reset the timer.
    pub fn next(&mut self) {
        let len = self.len;
        self.index_tx.send_modify(|i| *i = (*i + 1) % len);
        self.reset_timer();
    }

    /// Go back one slide and reset the timer.
    pub fn prev(&mut self) {
        let len = self.len;
        self.index_tx.send_modify(|i| *i = (*i + len - 1) % len);
        self.reset_timer();
    }

    /// Jump straight to slide `index` and reset the timer.
    ///
    /// An out-of-range index is ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len {
            debug!(index, len = self.len, "carousel jump out of range ignored");
            return;
        }
        self.index_tx.send_modify(|i| *i = index);
        self.reset_timer();
    }

    /// Currently displayed slide index.
    pub fn index(&self) -> usize {
        *self.index_tx.borrow()
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Watch the slide index.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index_tx.subscribe()
    }

    /// Restart the timer after a manual transition — but only while autoplay
    /// is running.  After `stop`, manual navigation must not re-arm it.
    fn reset_timer(&mut self) {
        if self.autoplay.is_some() {
            self.start();
        }
    }

    fn abort_timer(&mut self) -> bool {
        match self.autoplay.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.abort_timer();
    }
}
