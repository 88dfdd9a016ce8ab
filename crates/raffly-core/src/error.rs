//! Core error type.
//!
//! The eligibility and search engines are total and never fail; errors only
//! arise at the catalog boundary (loading a snapshot, resolving a lookup).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("event '{identifier}' not found in catalog")]
    EventNotFound { identifier: String },

    #[error("failed to read event snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid event snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
