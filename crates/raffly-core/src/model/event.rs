// ── Event domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event_id::EventId;

/// Lifecycle state of an event, as reported by the backend.
///
/// Wire form is snake_case (`"lottery_drawn"`); the `Display` impl renders
/// the badge text shown to entrants ("Lottery Drawn").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum EventStatus {
    #[default]
    Open,
    Closed,
    LotteryDrawn,
    Completed,
}

impl EventStatus {
    /// Still accepting waitlist registrations (subject to the window check).
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// The canonical event snapshot.
///
/// Constructed by the organizer flow on the backend and read-only here:
/// the client computes eligibility and filtered views over it but never
/// persists mutations. Wire format is camelCase JSON with epoch-millisecond
/// timestamps, matching the backend's document shape. Absent optional
/// fields mean "unlimited" (waitlist) or "unrestricted" (geolocation),
/// never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub organizer_id: String,

    // Descriptive
    pub name: String,
    pub description: String,
    /// Display tags, order-preserving ("Sports", "Music", ...).
    pub tags: Vec<String>,

    // Scheduling. Calendar/time-of-day strings are display-only and not
    // validated here; the registration window is what gates eligibility.
    pub date: String,
    pub time: String,
    pub end_time: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub registration_opens: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub registration_closes: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub lottery_draw_date: Option<DateTime<Utc>>,

    // Venue
    pub location: String,
    pub location_address: String,

    // Capacity
    pub capacity: u32,
    pub confirmed_count: u32,
    pub waitlist_count: u32,
    /// None means the waitlist is unbounded.
    pub waitlist_limit: Option<u32>,

    // Geolocation restriction. All-or-nothing in practice: if any of
    // lat/lng/radius is absent the restriction is inactive (fail-open).
    pub geolocation_enabled: bool,
    pub geolocation_lat: Option<f64>,
    pub geolocation_lng: Option<f64>,
    /// Kilometers. Documented range 1-500, passed through unvalidated.
    pub geolocation_radius: Option<u32>,

    // Commerce
    pub price: f64,

    pub status: EventStatus,

    // Media
    pub poster_image_url: Option<String>,
    pub qr_code_url: Option<String>,

    // Moderation
    pub is_flagged: bool,
    pub flag_count: u32,

    // Audit
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            id: EventId::new(""),
            organizer_id: String::new(),
            name: String::new(),
            description: String::new(),
            tags: Vec::new(),
            date: String::new(),
            time: String::new(),
            end_time: String::new(),
            registration_opens: DateTime::UNIX_EPOCH,
            registration_closes: DateTime::UNIX_EPOCH,
            lottery_draw_date: None,
            location: String::new(),
            location_address: String::new(),
            capacity: 0,
            confirmed_count: 0,
            waitlist_count: 0,
            waitlist_limit: None,
            geolocation_enabled: false,
            geolocation_lat: None,
            geolocation_lng: None,
            geolocation_radius: None,
            price: 0.0,
            status: EventStatus::Open,
            poster_image_url: None,
            qr_code_url: None,
            is_flagged: false,
            flag_count: 0,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }
}
