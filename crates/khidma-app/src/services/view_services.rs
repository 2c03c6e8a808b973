// SPDX-License-Identifier: MIT
//
// Central service layer — owns the view controllers and provides thin
// lock-and-call methods for the Dioxus components.
//
// The controllers are `Send` but need `&mut` for their transitions, so they
// are wrapped in `Arc<Mutex<>>` for sharing across closures and the Dioxus
// task pool.  Contention is negligible: every call is a few loads and
// stores.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use khidma_catalog::{data, links};
use khidma_core::SiteConfig;
use khidma_core::error::Result;
use khidma_view::{BroadcastFeed, Carousel, IntersectionEntry, ScrollTopController, SectionTracker};

/// Optional configuration override next to the binary.
const CONFIG_FILE: &str = "site.json";

/// Shared view services accessible from all components via
/// `use_context::<ViewServices>()`.
///
/// All fields are cheaply cloneable (Arc-wrapped) so the struct can be
/// passed into closures and async blocks without lifetime issues.
#[derive(Clone)]
pub struct ViewServices {
    config: Arc<SiteConfig>,
    feed: BroadcastFeed,
    carousel: Arc<Mutex<Carousel>>,
    sections: Arc<Mutex<SectionTracker>>,
    scroll_top: Arc<Mutex<ScrollTopController>>,
}

impl ViewServices {
    /// Initialise all controllers. Call once at app startup.
    ///
    /// Controllers are created but not started; [`start`](Self::start) arms
    /// them once the page is mounted.
    pub fn init() -> Result<Self> {
        let config = load_config();

        let carousel = Carousel::new(data::testimonials().len(), config.carousel_period())?;

        let mut sections = SectionTracker::new(&config.default_section);
        sections.register(data::section_ids());

        let scroll_top = ScrollTopController::new(config.scroll_top_threshold);

        info!("view services initialised");
        Ok(Self {
            config: Arc::new(config),
            feed: BroadcastFeed::new(),
            carousel: Arc::new(Mutex::new(carousel)),
            sections: Arc::new(Mutex::new(sections)),
            scroll_top: Arc::new(Mutex::new(scroll_top)),
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    // -- Lifecycle -----------------------------------------------------------

    /// Start observation and the carousel autoplay.
    ///
    /// Must run inside the async runtime (the carousel spawns its timer
    /// task); restarting is safe.
    pub fn start(&self) {
        self.sections
            .lock()
            .expect("sections lock poisoned")
            .start(&self.feed);
        self.scroll_top
            .lock()
            .expect("scroll lock poisoned")
            .start(&self.feed);
        self.carousel
            .lock()
            .expect("carousel lock poisoned")
            .start();
        info!("view controllers started");
    }

    /// Stop every controller and release their subscriptions. Idempotent.
    pub fn teardown(&self) {
        self.sections.lock().expect("sections lock poisoned").stop();
        self.scroll_top.lock().expect("scroll lock poisoned").stop();
        self.carousel.lock().expect("carousel lock poisoned").stop();
        info!("view controllers stopped");
    }

    // -- Viewport adapter ----------------------------------------------------

    /// Report a section's visibility (from the webview's visibility events).
    pub fn note_section_visibility(&self, id: &str, visible: bool, center_offset: f64) {
        self.feed.emit_intersections(&[IntersectionEntry {
            id: id.to_string(),
            is_intersecting: visible,
            center_offset,
        }]);
    }

    /// Report the current scroll offset in px.
    pub fn note_scroll(&self, offset: f64) {
        self.feed.emit_scroll(offset);
    }

    // -- Derived state snapshots ---------------------------------------------

    pub fn active_section(&self) -> String {
        self.sections
            .lock()
            .expect("sections lock poisoned")
            .active()
    }

    pub fn show_scroll_top(&self) -> bool {
        self.scroll_top
            .lock()
            .expect("scroll lock poisoned")
            .visible()
    }

    pub fn testimonial_index(&self) -> usize {
        self.carousel
            .lock()
            .expect("carousel lock poisoned")
            .index()
    }

    // -- Carousel navigation -------------------------------------------------

    pub fn next_testimonial(&self) {
        self.carousel.lock().expect("carousel lock poisoned").next();
    }

    pub fn prev_testimonial(&self) {
        self.carousel.lock().expect("carousel lock poisoned").prev();
    }

    pub fn go_to_testimonial(&self, index: usize) {
        self.carousel
            .lock()
            .expect("carousel lock poisoned")
            .go_to(index);
    }

    // -- Contact links -------------------------------------------------------

    /// General-inquiry WhatsApp link, ready for an anchor href.
    pub fn general_link(&self) -> String {
        match links::general_contact_link(&self.config) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!(error = %e, "general contact link failed");
                String::from("https://wa.me/")
            }
        }
    }

    /// Per-service WhatsApp link, ready for an anchor href.
    pub fn service_link(&self, service_name: &str) -> String {
        match links::service_contact_link(&self.config, service_name) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!(error = %e, service = service_name, "service contact link failed");
                String::from("https://wa.me/")
            }
        }
    }

    /// Display form of the WhatsApp number.
    pub fn formatted_number(&self) -> String {
        links::format_phone_number(&self.config.whatsapp_number)
    }
}

/// Load `site.json` overrides if present, otherwise the built-in defaults.
fn load_config() -> SiteConfig {
    match SiteConfig::load(CONFIG_FILE) {
        Ok(config) => {
            info!("loaded {CONFIG_FILE} overrides");
            config
        }
        Err(e) => {
            debug!(error = %e, "no usable {CONFIG_FILE}, using defaults");
            SiteConfig::default()
        }
    }
}
