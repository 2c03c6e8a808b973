// SPDX-License-Identifier: MIT
//
// Site configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunable site settings.
///
/// Everything here has a sensible default matching the live site; the app
/// optionally overrides it from a `site.json` next to the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// WhatsApp destination, digits only (country code included).
    pub whatsapp_number: String,
    /// Testimonial auto-advance period in milliseconds.
    pub carousel_period_ms: u64,
    /// Scroll offset (px) past which the scroll-to-top button appears.
    pub scroll_top_threshold: f64,
    /// Section considered active before any viewport observation arrives.
    pub default_section: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "966598158587".into(),
            carousel_period_ms: 5000,
            scroll_top_threshold: 400.0,
            default_section: "passports".into(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Carousel period as a `Duration`.
    pub fn carousel_period(&self) -> Duration {
        Duration::from_millis(self.carousel_period_ms)
    }
}
