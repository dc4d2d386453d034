//! Spherical-earth helpers used by the timeline, heading and validation code.
//!
//! Headings follow the aviation yaw convention: 0° is north, positive is
//! clockwise, and every value handed out is folded into (-180, 180].

use serde::{Deserialize, Serialize};

/// Mean earth radius used by the Haversine distance.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    /// Height above ground.
    #[serde(default)]
    pub height: f64,
    /// Terrain elevation above sea level.
    #[serde(default)]
    pub ground_height: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            height: 0.0,
            ground_height: 0.0,
        }
    }

    pub fn with_elevation(lat: f64, lng: f64, ground_height: f64, height: f64) -> Self {
        Self {
            lat,
            lng,
            height,
            ground_height,
        }
    }

    /// Total elevation above sea level.
    pub fn elevation(&self) -> f64 {
        self.ground_height + self.height
    }

    fn same_position(&self, other: &GeoPoint) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

/// Initial great-circle bearing from `from` to `to` in (-180, 180].
///
/// Coincident points have no defined bearing and yield 0.
pub fn heading(from: GeoPoint, to: GeoPoint) -> f64 {
    if from.same_position(&to) {
        return 0.0;
    }

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    normalize_heading(y.atan2(x).to_degrees())
}

/// Elevation angle from `from` to `to` in degrees, positive when climbing.
pub fn pitch(from: GeoPoint, to: GeoPoint) -> f64 {
    let horizontal = distance(from, to);
    let vertical = to.elevation() - from.elevation();
    if horizontal == 0.0 && vertical == 0.0 {
        return 0.0;
    }

    let degrees = vertical.atan2(horizontal).to_degrees();
    if degrees.is_finite() {
        degrees
    } else {
        0.0
    }
}

/// Haversine great-circle distance in meters.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let half_lat = (delta_lat / 2.0).sin();
    let half_lng = (delta_lng / 2.0).sin();
    let h = half_lat * half_lat + lat_a.cos() * lat_b.cos() * half_lng * half_lng;
    // Rounding can push `h` a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);

    EARTH_RADIUS_M * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Folds any angle into (-180, 180]. Non-finite input maps to 0.
pub fn normalize_heading(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180].
pub fn heading_delta(from: f64, to: f64) -> f64 {
    normalize_heading(to - from)
}

/// Rotates `from` toward `to` along the shorter arc.
///
/// `fraction` is clamped to [0, 1].
pub fn interpolate_heading(from: f64, to: f64, fraction: f64) -> f64 {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    normalize_heading(from + heading_delta(from, to) * fraction)
}
