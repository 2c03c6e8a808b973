// SPDX-License-Identifier: MIT
//
// Khidma — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::SiteConfig;
pub use error::KhidmaError;
pub use types::*;
