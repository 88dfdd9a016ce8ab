// ── Geospatial math ──
//
// Spherical haversine only. Eligibility radii are 1-500 km and the radius
// check is a coarse gate, so ellipsoidal corrections are not worth it.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A coordinate in degrees latitude / longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_km(self, other: Self) -> f64 {
        haversine_km(self, other)
    }
}

/// A circular eligibility region: center plus radius in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFence {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl GeoFence {
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// True iff `point` lies within the fence (boundary inclusive).
    pub fn contains(self, point: GeoPoint) -> bool {
        haversine_km(self.center, point) <= self.radius_km
    }
}

/// Great-circle distance between two coordinates in kilometers.
///
/// Standard double-precision haversine on a sphere of radius 6371.0 km.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
