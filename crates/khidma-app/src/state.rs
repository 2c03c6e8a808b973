// SPDX-License-Identifier: MIT
//
// Global application state — one snapshot struct behind a Dioxus signal.

use crate::services::view_services::ViewServices;

/// Shared page state accessible to all components via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live search query typed into the search box.
    pub search_term: String,
    /// Whether the search dropdown is open.
    pub search_focused: bool,
    /// Section currently highlighted in the navigation.
    pub active_section: String,
    /// Whether the scroll-to-top button is shown.
    pub show_scroll_top: bool,
    /// Testimonial currently displayed by the carousel.
    pub testimonial_index: usize,
    /// Card id briefly flashed after a suggestion jump, if any.
    pub flash_target: Option<String>,
}

impl AppState {
    /// Create the initial state from the view services.
    pub fn new(svc: &ViewServices) -> Self {
        Self {
            search_term: String::new(),
            search_focused: false,
            active_section: svc.config().default_section.clone(),
            show_scroll_top: false,
            testimonial_index: 0,
            flash_target: None,
        }
    }
}
