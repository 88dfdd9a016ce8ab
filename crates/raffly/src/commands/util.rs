//! Shared helpers for command handlers.

use raffly_core::{EventCatalog, GeoPoint};

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;

/// Everything an event command needs: the loaded snapshot plus the
/// profile's saved entrant location.
pub struct SnapshotContext {
    pub catalog: EventCatalog,
    pub home: Option<(f64, f64)>,
}

/// Load the event snapshot for the active profile, honoring flag overrides.
pub fn load_snapshot(global: &GlobalOpts) -> Result<SnapshotContext, CliError> {
    let cfg = config::load_config_or_default();
    let profile = config::active_profile(global, &cfg)?;

    let path = config::events_file(global, profile)?;
    let catalog = EventCatalog::load_from_path(&path)?;
    tracing::debug!(count = catalog.len(), "event snapshot ready");

    Ok(SnapshotContext {
        catalog,
        home: profile.and_then(config::Profile::home_location),
    })
}

/// Validate a coordinate pair typed at the CLI boundary.
pub fn validated_point(lat: f64, lng: f64) -> Result<GeoPoint, CliError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CliError::Validation {
            field: "lat".into(),
            reason: format!("latitude must be within ±90°, got {lat}"),
        });
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(CliError::Validation {
            field: "lng".into(),
            reason: format!("longitude must be within ±180°, got {lng}"),
        });
    }
    Ok(GeoPoint::new(lat, lng))
}

/// Resolve the entrant's coordinate: explicit flags first, then the
/// profile's saved location. Half a coordinate is a usage error.
pub fn entrant_point(
    lat: Option<f64>,
    lng: Option<f64>,
    saved: Option<(f64, f64)>,
) -> Result<Option<GeoPoint>, CliError> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => validated_point(lat, lng).map(Some),
        (None, None) => match saved {
            Some((lat, lng)) => validated_point(lat, lng).map(Some),
            None => Ok(None),
        },
        _ => Err(CliError::Validation {
            field: "lat/lng".into(),
            reason: "provide both --lat and --lng, or neither".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_range_checks() {
        assert!(validated_point(43.65, -79.38).is_ok());
        assert!(validated_point(90.1, 0.0).is_err());
        assert!(validated_point(0.0, -180.5).is_err());
    }

    #[test]
    fn flags_take_priority_over_saved_location() {
        let point = entrant_point(Some(1.0), Some(2.0), Some((43.0, -79.0)))
            .expect("valid pair")
            .expect("some point");
        assert!((point.lat - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn half_a_coordinate_is_an_error() {
        assert!(entrant_point(Some(1.0), None, None).is_err());
        assert!(entrant_point(None, Some(2.0), None).is_err());
    }

    #[test]
    fn no_coordinate_anywhere_is_none() {
        assert!(entrant_point(None, None, None).expect("ok").is_none());
    }
}
