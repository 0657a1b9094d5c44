//! Rendering projection.

use serde::{Deserialize, Serialize};

/// Distance over which the proximity bar drains from full to empty, meters.
const PROXIMITY_RANGE_M: f64 = 10_000.0;

/// Everything an AR or map view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub poi_id: String,
    pub poi_name: String,
    pub distance_m: f64,
    /// Arrow rotation relative to screen-up; absent until a heading arrives.
    pub relative_bearing_deg: Option<f64>,
    /// North-up compass dial rotation; absent until a heading arrives.
    pub compass_rotation_deg: Option<f64>,
    /// 100 at the target, falling linearly to 0 at 10 km.
    pub proximity_percent: f64,
    pub arrived: bool,
}

/// Proximity bar fill for a given distance, in [0, 100].
pub fn proximity_percent(distance_m: f64) -> f64 {
    (100.0 * (1.0 - distance_m / PROXIMITY_RANGE_M)).clamp(0.0, 100.0)
}
