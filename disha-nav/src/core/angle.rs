//! Compass angle arithmetic.
//!
//! All angles are in degrees, 0 = north, clockwise positive.

/// Normalize angle to [0, 360).
///
/// # Example
/// ```
/// use disha_nav::core::angle::normalize_degrees;
///
/// assert_eq!(normalize_degrees(370.0), 10.0);
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// ```
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Angle to rotate a marker so it points at `target_deg` while the device
/// faces `heading_deg`. Result in [0, 360).
#[inline]
pub fn relative_bearing_deg(target_deg: f64, heading_deg: f64) -> f64 {
    normalize_degrees(target_deg - heading_deg + 360.0)
}

/// Shortest signed turn from `from_deg` to `to_deg`, in (-180, 180].
///
/// Positive means turn clockwise (right).
#[inline]
pub fn signed_angle_diff_deg(from_deg: f64, to_deg: f64) -> f64 {
    let d = normalize_degrees(to_deg - from_deg);
    if d > 180.0 { d - 360.0 } else { d }
}
