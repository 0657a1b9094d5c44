//! Navigation state held by a session.
//!
//! [`NavigationState`] is the read-only projection handed to the renderer.
//! Only [`NavigationSession`](super::NavigationSession) mutates it.

use serde::{Deserialize, Serialize};

use crate::core::{OrientationSample, PositionSample};
use crate::poi::PointOfInterest;

/// Latest inputs plus the quantities derived from them.
///
/// Every field is optional: nothing is known until the matching sample or
/// selection arrives, and derived fields stay empty until their inputs exist.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub(super) user_position: Option<PositionSample>,
    pub(super) selected_poi: Option<PointOfInterest>,
    pub(super) last_orientation: Option<OrientationSample>,
    pub(super) distance_to_target_m: Option<f64>,
    pub(super) absolute_bearing_deg: Option<f64>,
    pub(super) relative_bearing_deg: Option<f64>,
}

impl NavigationState {
    /// Most recent position fix.
    pub fn user_position(&self) -> Option<&PositionSample> {
        self.user_position.as_ref()
    }

    /// Current navigation target.
    pub fn selected_poi(&self) -> Option<&PointOfInterest> {
        self.selected_poi.as_ref()
    }

    /// Most recent orientation reading.
    pub fn last_orientation(&self) -> Option<&OrientationSample> {
        self.last_orientation.as_ref()
    }

    /// Great-circle distance from the user to the target, meters.
    pub fn distance_to_target_m(&self) -> Option<f64> {
        self.distance_to_target_m
    }

    /// Compass bearing from the user to the target, in [0, 360).
    pub fn absolute_bearing_deg(&self) -> Option<f64> {
        self.absolute_bearing_deg
    }

    /// Angle to rotate the AR marker relative to where the device faces,
    /// in [0, 360).
    pub fn relative_bearing_deg(&self) -> Option<f64> {
        self.relative_bearing_deg
    }

    /// Check whether the user is within `arrival_radius_m` of the target.
    pub fn has_arrived(&self, arrival_radius_m: f64) -> bool {
        self.distance_to_target_m
            .is_some_and(|d| d <= arrival_radius_m)
    }

    /// Drop the target and everything derived from it.
    pub(super) fn clear_target(&mut self) {
        self.selected_poi = None;
        self.distance_to_target_m = None;
        self.absolute_bearing_deg = None;
        self.relative_bearing_deg = None;
    }
}
