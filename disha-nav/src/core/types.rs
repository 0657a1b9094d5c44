//! Sample and coordinate types shared by every module.

use serde::{Deserialize, Serialize};

use crate::error::{DishaError, Result};

/// A WGS84 coordinate in degrees.
///
/// Latitude lies in [-90, 90], longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point without range checks.
    ///
    /// Intended for literals and for values produced by the geo functions,
    /// which always stay in range.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a point, rejecting non-finite or out-of-range coordinates.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DishaError::InvalidArgument(format!(
                "latitude {} outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DishaError::InvalidArgument(format!(
                "longitude {} outside [-180, 180]",
                longitude
            )));
        }
        Ok(Self::new(latitude, longitude))
    }
}

/// A position fix from the geolocation provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub point: GeoPoint,
    /// Horizontal accuracy radius in meters.
    pub accuracy_m: f64,
    /// Milliseconds since Unix epoch.
    pub timestamp_ms: i64,
}

impl PositionSample {
    pub fn new(point: GeoPoint, accuracy_m: f64, timestamp_ms: i64) -> Self {
        Self {
            point,
            accuracy_m: accuracy_m.max(0.0),
            timestamp_ms,
        }
    }
}

/// A device orientation reading.
///
/// `heading_deg` is the compass heading (0 = north, clockwise). Pitch and
/// roll are the front/back and left/right tilt when the device reports them;
/// they are carried through for the renderer and not used in any math here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientationSample {
    pub heading_deg: f64,
    #[serde(default)]
    pub pitch_deg: Option<f64>,
    #[serde(default)]
    pub roll_deg: Option<f64>,
}

impl OrientationSample {
    /// Heading-only sample.
    pub fn heading(heading_deg: f64) -> Self {
        Self {
            heading_deg,
            pitch_deg: None,
            roll_deg: None,
        }
    }

    /// Attach tilt angles.
    pub fn with_tilt(mut self, pitch_deg: f64, roll_deg: f64) -> Self {
        self.pitch_deg = Some(pitch_deg);
        self.roll_deg = Some(roll_deg);
        self
    }
}
