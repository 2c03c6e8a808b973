// SPDX-License-Identifier: MIT
//
// Unified error types for Khidma.

use thiserror::Error;

/// Top-level error type for all Khidma operations.
///
/// The presentation layer itself is total over its inputs — missing lookup
/// targets are silent no-ops, never errors.  What remains is construction
/// and ambient I/O.
#[derive(Debug, Error)]
pub enum KhidmaError {
    // -- View state --
    #[error("carousel requires at least one slide")]
    EmptyCarousel,

    // -- Contact links --
    #[error("contact link construction failed: {0}")]
    Link(#[from] url::ParseError),

    // -- Configuration --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, KhidmaError>;
