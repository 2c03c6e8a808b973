// SPDX-License-Identifier: MIT
//
// Khidma — Static service catalog plus the pure logic layered on it:
// incremental search with match highlighting and WhatsApp contact links.

pub mod data;
pub mod links;
pub mod search;

pub use data::{catalog, section_ids, testimonials};
pub use links::{format_phone_number, general_contact_link, service_contact_link, slugify};
pub use search::{filter_catalog, highlight, Highlight};
