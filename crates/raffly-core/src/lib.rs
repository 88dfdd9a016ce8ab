//! Domain layer between the lottery backend and UI consumers (CLI).
//!
//! This crate owns the business logic and domain model for the raffly
//! workspace:
//!
//! - **Domain model** ([`model`]) — the canonical [`Event`] snapshot with
//!   [`EventId`] and [`EventStatus`]. Events are read-only for the duration
//!   of display; mutations happen on the backend, never here.
//!
//! - **Eligibility engine** ([`eligibility`]) — pure per-event checks:
//!   registration-window state, waitlist capacity, available spots, and
//!   geolocation-radius membership. Every operation is total; missing
//!   geolocation data fails open (no restriction).
//!
//! - **Search engine** ([`search`]) — derived views over an event
//!   collection: case-insensitive free-text matching on name/description,
//!   tag-set intersection, and the composed [`EventFilter`].
//!
//! - **[`EventCatalog`]** ([`catalog`]) — the in-memory snapshot collection
//!   supplied by an external data source (by default a JSON export), with
//!   id-or-name resolution for interactive lookups.
//!
//! - **Geospatial math** ([`geo`]) — spherical haversine distances backing
//!   the radius check.

pub mod catalog;
pub mod eligibility;
pub mod error;
pub mod geo;
pub mod model;
pub mod search;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::EventCatalog;
pub use error::CoreError;
pub use geo::{GeoFence, GeoPoint, haversine_km};
pub use search::{ALL_EVENTS_TAG, EventFilter, filter_by_tags, filter_by_text};

// Re-export model types at the crate root for ergonomics.
pub use model::{Event, EventId, EventStatus};
