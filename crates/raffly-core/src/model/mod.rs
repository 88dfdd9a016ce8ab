//! Canonical domain types.

mod event;
mod event_id;

pub use event::{Event, EventStatus};
pub use event_id::EventId;
