//! Per-event eligibility checks.
//!
//! Everything here is a total, side-effect-free function of one [`Event`]
//! snapshot plus caller-supplied context (the current time, an entrant
//! coordinate). Validation of ill-formed snapshots belongs to the
//! creation/edit flow on the backend; a window with `closes < opens` simply
//! never reports open, and a negative-radius fence simply never matches.

use chrono::{DateTime, Utc};

use crate::geo::{GeoFence, GeoPoint};
use crate::model::Event;

impl Event {
    /// Whether the event is accepting waitlist registrations at `now`.
    ///
    /// Requires all three of: status is `Open`, `now` inside the
    /// registration window (boundaries inclusive), and the waitlist not
    /// full. There are no partial eligibility states.
    pub fn is_registration_open(&self, now: DateTime<Utc>) -> bool {
        self.status.is_open()
            && now >= self.registration_opens
            && now <= self.registration_closes
            && !self.is_waitlist_full()
    }

    /// True iff a waitlist limit exists and has been reached.
    /// An absent limit means the waitlist is never full.
    pub fn is_waitlist_full(&self) -> bool {
        self.waitlist_limit
            .is_some_and(|limit| self.waitlist_count >= limit)
    }

    /// Confirmed-attendee spots still available. Clamps to zero when the
    /// backend has over-confirmed past capacity.
    pub fn available_spots(&self) -> u32 {
        self.capacity.saturating_sub(self.confirmed_count)
    }

    /// The event's geolocation restriction, if it is actually active.
    ///
    /// All-or-nothing: `None` unless geolocation is enabled and lat, lng,
    /// and radius are all present. Callers treating `None` as "allowed"
    /// get the fail-open behavior the restriction is specified with.
    pub fn geofence(&self) -> Option<GeoFence> {
        if !self.geolocation_enabled {
            return None;
        }
        let center = GeoPoint::new(self.geolocation_lat?, self.geolocation_lng?);
        let radius_km = f64::from(self.geolocation_radius?);
        Some(GeoFence::new(center, radius_km))
    }

    /// Whether an entrant at `point` satisfies the geolocation restriction.
    /// Fails open: an inactive or incomplete restriction admits everyone.
    pub fn is_within_geolocation_radius(&self, point: GeoPoint) -> bool {
        self.geofence().is_none_or(|fence| fence.contains(point))
    }

    /// Price for display: "Free" for exactly 0.0, else a two-decimal
    /// dollar amount.
    pub fn formatted_price(&self) -> String {
        if self.price == 0.0 {
            "Free".to_owned()
        } else {
            format!("${:.2}", self.price)
        }
    }

    /// Waitlist occupancy for display, e.g. "28 / 40 on waiting list" or
    /// "28 on waiting list" when unbounded.
    pub fn waitlist_label(&self) -> String {
        match self.waitlist_limit {
            Some(limit) => format!("{} / {} on waiting list", self.waitlist_count, limit),
            None => format!("{} on waiting list", self.waitlist_count),
        }
    }

    /// Geolocation badge for display ("Within 10km"), only when the
    /// restriction is active.
    pub fn geofence_label(&self) -> Option<String> {
        let radius = self.geolocation_radius?;
        self.geolocation_enabled
            .then(|| format!("Within {radius}km"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{EventId, EventStatus};

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    /// An open event with a live registration window around t=5_000.
    fn open_event() -> Event {
        Event {
            id: EventId::new("evt-1"),
            name: "Summer Basketball Tournament".into(),
            status: EventStatus::Open,
            registration_opens: at(1_000),
            registration_closes: at(10_000),
            capacity: 50,
            ..Event::default()
        }
    }

    // ── Registration window ─────────────────────────────────────────

    #[test]
    fn open_within_window() {
        assert!(open_event().is_registration_open(at(5_000)));
    }

    #[test]
    fn window_boundaries_are_inclusive() {
        let event = open_event();
        assert!(event.is_registration_open(at(1_000)));
        assert!(event.is_registration_open(at(10_000)));
        assert!(!event.is_registration_open(at(999)));
        assert!(!event.is_registration_open(at(10_001)));
    }

    #[test]
    fn closed_regardless_of_timestamps_when_status_not_open() {
        for status in [
            EventStatus::Closed,
            EventStatus::LotteryDrawn,
            EventStatus::Completed,
        ] {
            let event = Event {
                status,
                ..open_event()
            };
            assert!(!event.is_registration_open(at(5_000)), "status {status}");
        }
    }

    #[test]
    fn full_waitlist_closes_registration() {
        let event = Event {
            waitlist_limit: Some(30),
            waitlist_count: 30,
            ..open_event()
        };
        assert!(!event.is_registration_open(at(5_000)));
    }

    #[test]
    fn inverted_window_is_always_closed() {
        let event = Event {
            registration_opens: at(10_000),
            registration_closes: at(1_000),
            ..open_event()
        };
        assert!(!event.is_registration_open(at(5_000)));
        assert!(!event.is_registration_open(at(1_000)));
        assert!(!event.is_registration_open(at(10_000)));
    }

    // ── Waitlist ────────────────────────────────────────────────────

    #[test]
    fn absent_limit_is_never_full() {
        let event = Event {
            waitlist_limit: None,
            waitlist_count: u32::MAX,
            ..Event::default()
        };
        assert!(!event.is_waitlist_full());
    }

    #[test]
    fn limit_reached_and_exceeded_is_full() {
        let mut event = Event {
            waitlist_limit: Some(40),
            waitlist_count: 39,
            ..Event::default()
        };
        assert!(!event.is_waitlist_full());
        event.waitlist_count = 40;
        assert!(event.is_waitlist_full());
        event.waitlist_count = 41;
        assert!(event.is_waitlist_full());
    }

    // ── Capacity ────────────────────────────────────────────────────

    #[test]
    fn available_spots_basic() {
        let event = Event {
            capacity: 50,
            confirmed_count: 20,
            ..Event::default()
        };
        assert_eq!(event.available_spots(), 30);
    }

    #[test]
    fn available_spots_clamps_to_zero_when_over_confirmed() {
        let event = Event {
            capacity: 50,
            confirmed_count: 52,
            ..Event::default()
        };
        assert_eq!(event.available_spots(), 0);
    }

    // ── Geolocation ─────────────────────────────────────────────────

    fn fenced_event() -> Event {
        Event {
            geolocation_enabled: true,
            geolocation_lat: Some(43.6532),
            geolocation_lng: Some(-79.3832),
            geolocation_radius: Some(10),
            ..Event::default()
        }
    }

    #[test]
    fn disabled_geolocation_admits_any_coordinate() {
        let event = Event {
            geolocation_enabled: false,
            geolocation_lat: Some(43.6532),
            geolocation_lng: Some(-79.3832),
            geolocation_radius: Some(10),
            ..Event::default()
        };
        assert!(event.is_within_geolocation_radius(GeoPoint::new(-89.0, 179.0)));
        assert!(event.geofence().is_none());
    }

    #[test]
    fn incomplete_geolocation_fields_fail_open() {
        for missing in 0..3 {
            let mut event = fenced_event();
            match missing {
                0 => event.geolocation_lat = None,
                1 => event.geolocation_lng = None,
                _ => event.geolocation_radius = None,
            }
            assert!(event.geofence().is_none());
            assert!(event.is_within_geolocation_radius(GeoPoint::new(0.0, 0.0)));
        }
    }

    #[test]
    fn nearby_entrant_is_inside_the_fence() {
        // ~5.4 km from the event, radius 10 km.
        assert!(fenced_event().is_within_geolocation_radius(GeoPoint::new(43.7, -79.4)));
    }

    #[test]
    fn distant_entrant_is_outside_the_fence() {
        // 40+ km from the event.
        assert!(!fenced_event().is_within_geolocation_radius(GeoPoint::new(44.0, -79.0)));
    }

    // ── Display helpers ─────────────────────────────────────────────

    #[test]
    fn free_events_format_as_free() {
        assert_eq!(Event::default().formatted_price(), "Free");
    }

    #[test]
    fn paid_events_format_with_two_decimals() {
        let event = Event {
            price: 12.5,
            ..Event::default()
        };
        assert_eq!(event.formatted_price(), "$12.50");
    }

    #[test]
    fn waitlist_label_with_and_without_limit() {
        let mut event = Event {
            waitlist_count: 28,
            waitlist_limit: Some(40),
            ..Event::default()
        };
        assert_eq!(event.waitlist_label(), "28 / 40 on waiting list");
        event.waitlist_limit = None;
        assert_eq!(event.waitlist_label(), "28 on waiting list");
    }

    #[test]
    fn geofence_label_only_when_active() {
        assert_eq!(fenced_event().geofence_label().as_deref(), Some("Within 10km"));
        assert_eq!(Event::default().geofence_label(), None);
    }
}
