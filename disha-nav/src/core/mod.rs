//! Core types and pure geometry.
//!
//! Everything here is stateless and deterministic.

pub mod angle;
pub mod geo;
pub mod types;

pub use angle::{normalize_degrees, relative_bearing_deg, signed_angle_diff_deg};
pub use geo::{
    EARTH_RADIUS_M, MAX_SURFACE_DISTANCE_M, destination_point, distance_m, initial_bearing_deg,
    offset_point, wrap_longitude,
};
pub use types::{GeoPoint, OrientationSample, PositionSample};
