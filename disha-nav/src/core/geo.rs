//! Spherical-earth geometry.
//!
//! Distances are in meters, angles in degrees. Bearings follow the compass
//! convention (0 = north, clockwise positive).

use super::angle::normalize_degrees;
use super::types::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Longest great-circle distance between two points: half the circumference.
pub const MAX_SURFACE_DISTANCE_M: f64 = std::f64::consts::PI * EARTH_RADIUS_M;

/// Coordinates closer than this (degrees) are treated as the same point.
const SAME_POINT_EPSILON_DEG: f64 = 1e-12;

/// Great-circle distance in meters (Haversine).
///
/// Symmetric in its arguments and finite for antipodal points.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h slightly past 1 for antipodal input
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial bearing (forward azimuth) from `a` toward `b`, in [0, 360).
///
/// Returns 0 when the points coincide, where the direction is undefined.
pub fn initial_bearing_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    if same_point(a, b) {
        return 0.0;
    }
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let y = dlon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos();
    normalize_degrees(y.atan2(x).to_degrees() + 360.0)
}

/// Shift `origin` by a local north/east displacement in meters.
///
/// Small-angle tangent-plane approximation. Good for campus-scale offsets
/// (under roughly 10 km); error grows with distance and near the poles.
pub fn offset_point(origin: GeoPoint, north_m: f64, east_m: f64) -> GeoPoint {
    let dlat = north_m / EARTH_RADIUS_M;
    let dlon = east_m / (EARTH_RADIUS_M * origin.latitude.to_radians().cos());
    let latitude = (origin.latitude + dlat.to_degrees()).clamp(-90.0, 90.0);
    let longitude = wrap_longitude(origin.longitude + dlon.to_degrees());
    GeoPoint::new(latitude, longitude)
}

/// Walk `distance_m` meters from `origin` along the great circle starting at
/// `bearing_deg`.
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let phi1 = origin.latitude.to_radians();
    let lambda1 = origin.longitude.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let sin_phi2 = (sin_phi1 * cos_delta + cos_phi1 * sin_delta * theta.cos()).clamp(-1.0, 1.0);
    let phi2 = sin_phi2.asin();
    let lambda2 = lambda1
        + (theta.sin() * sin_delta * cos_phi1).atan2(cos_delta - sin_phi1 * sin_phi2);

    GeoPoint::new(phi2.to_degrees(), wrap_longitude(lambda2.to_degrees()))
}

/// Wrap longitude into [-180, 180).
#[inline]
pub fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

#[inline]
fn same_point(a: GeoPoint, b: GeoPoint) -> bool {
    (a.latitude - b.latitude).abs() < SAME_POINT_EPSILON_DEG
        && (a.longitude - b.longitude).abs() < SAME_POINT_EPSILON_DEG
}
