//! Shared fixtures for DishaNav integration tests.

#![allow(dead_code)]

use disha_nav::core::{distance_m, offset_point};
use disha_nav::{DishaConfig, GeoPoint, PoiCategory, PointOfInterest, PositionSample};

/// Dhaka campus reference point.
pub const CAMPUS: GeoPoint = GeoPoint::new(23.8103, 90.4125);

/// Roughly 111 m due north of [`CAMPUS`].
pub const CAMPUS_NORTH: GeoPoint = GeoPoint::new(23.8113, 90.4125);

/// Configuration with first-fix generation turned off.
pub fn manual_config() -> DishaConfig {
    let mut config = DishaConfig::default();
    config.generation.on_first_fix = false;
    config
}

/// Hand-built POI at `location`, measured from [`CAMPUS`].
pub fn poi_at(id: &str, location: GeoPoint) -> PointOfInterest {
    PointOfInterest {
        id: id.to_string(),
        name: format!("Classic {}", id),
        category: PoiCategory::Museum,
        location,
        distance_m: distance_m(CAMPUS, location),
        description: PoiCategory::Museum.description().to_string(),
    }
}

/// Position fix with 5 m accuracy.
pub fn fix(point: GeoPoint, timestamp_ms: i64) -> PositionSample {
    PositionSample::new(point, 5.0, timestamp_ms)
}

/// Straight walk from `start` in `n` equal local offsets.
pub fn straight_walk(start: GeoPoint, north_m: f64, east_m: f64, n: usize) -> Vec<GeoPoint> {
    (0..=n)
        .map(|i| {
            let f = i as f64 / n as f64;
            offset_point(start, north_m * f, east_m * f)
        })
        .collect()
}
