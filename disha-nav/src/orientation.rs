//! Device orientation tracking.
//!
//! [`OrientationTracker`] combines the latest compass heading with an
//! absolute target bearing and keeps the relative bearing current: the angle
//! an on-screen arrow must be rotated (clockwise, from screen-up) to point at
//! the target.
//!
//! ```text
//!   Uninitialized ──update_orientation()──▶ Tracking
//!         │                                   │
//!   set_target_bearing()               set_target_bearing()
//!   (stored, no output)                update_orientation()
//!                                      (relative bearing recomputed)
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{normalize_degrees, relative_bearing_deg};

/// Tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TrackerState {
    /// No orientation sample received yet.
    #[default]
    Uninitialized,

    /// At least one heading received; holds the latest one.
    Tracking { heading_deg: f64 },
}

impl TrackerState {
    /// Convert to string for logs and UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerState::Uninitialized => "UNINITIALIZED",
            TrackerState::Tracking { .. } => "TRACKING",
        }
    }
}

/// Turns compass headings into an orientation-relative target angle.
#[derive(Debug, Clone, Default)]
pub struct OrientationTracker {
    state: TrackerState,
    target_bearing_deg: Option<f64>,
    relative_bearing_deg: Option<f64>,
}

impl OrientationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new compass heading.
    ///
    /// Returns the recomputed relative bearing when a target is set.
    /// Non-finite headings are dropped and leave the state unchanged.
    pub fn update_orientation(&mut self, heading_deg: f64) -> Option<f64> {
        if !heading_deg.is_finite() {
            warn!("Ignoring non-finite heading {}", heading_deg);
            return self.relative_bearing_deg;
        }
        let heading_deg = normalize_degrees(heading_deg);
        if self.state == TrackerState::Uninitialized {
            debug!("Orientation tracking started at {:.1}°", heading_deg);
        }
        self.state = TrackerState::Tracking { heading_deg };
        self.recompute()
    }

    /// Set the absolute bearing to the target.
    ///
    /// Takes effect against the last known heading immediately. While no
    /// heading has been received the bearing is stored and `None` returned.
    pub fn set_target_bearing(&mut self, bearing_deg: f64) -> Option<f64> {
        self.target_bearing_deg = Some(normalize_degrees(bearing_deg));
        self.recompute()
    }

    /// Forget the target. The heading is kept.
    pub fn clear_target(&mut self) {
        self.target_bearing_deg = None;
        self.relative_bearing_deg = None;
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackerState::Tracking { .. })
    }

    /// Latest heading, if any.
    pub fn heading_deg(&self) -> Option<f64> {
        match self.state {
            TrackerState::Uninitialized => None,
            TrackerState::Tracking { heading_deg } => Some(heading_deg),
        }
    }

    pub fn target_bearing_deg(&self) -> Option<f64> {
        self.target_bearing_deg
    }

    /// Latest relative bearing, in [0, 360).
    pub fn relative_bearing_deg(&self) -> Option<f64> {
        self.relative_bearing_deg
    }

    /// Rotation for a north-up compass dial so that north stays north while
    /// the device turns: the negated heading, in [0, 360).
    pub fn compass_rotation_deg(&self) -> Option<f64> {
        self.heading_deg().map(|h| normalize_degrees(-h))
    }

    fn recompute(&mut self) -> Option<f64> {
        let relative = match (self.state, self.target_bearing_deg) {
            (TrackerState::Tracking { heading_deg }, Some(target)) => {
                Some(relative_bearing_deg(target, heading_deg))
            }
            _ => None,
        };
        if let Some(r) = relative {
            trace!("Relative bearing {:.1}°", r);
        }
        self.relative_bearing_deg = relative;
        relative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_uninitialized() {
        let tracker = OrientationTracker::new();
        assert_eq!(tracker.state(), TrackerState::Uninitialized);
        assert!(!tracker.is_tracking());
        assert!(tracker.heading_deg().is_none());
        assert!(tracker.relative_bearing_deg().is_none());
    }

    #[test]
    fn test_first_update_starts_tracking() {
        let mut tracker = OrientationTracker::new();
        assert!(tracker.update_orientation(45.0).is_none());
        assert_eq!(tracker.state(), TrackerState::Tracking { heading_deg: 45.0 });
        assert_eq!(tracker.state().as_str(), "TRACKING");
    }

    #[test]
    fn test_target_pending_while_uninitialized() {
        let mut tracker = OrientationTracker::new();
        assert!(tracker.set_target_bearing(90.0).is_none());
        assert_eq!(tracker.target_bearing_deg(), Some(90.0));
        assert!(tracker.relative_bearing_deg().is_none());

        // First heading resolves the pending target
        let r = tracker.update_orientation(0.0).unwrap();
        assert_relative_eq!(r, 90.0);
    }

    #[test]
    fn test_facing_target() {
        let mut tracker = OrientationTracker::new();
        tracker.set_target_bearing(90.0);
        assert_relative_eq!(tracker.update_orientation(90.0).unwrap(), 0.0);
    }

    #[test]
    fn test_heading_north_target_east() {
        let mut tracker = OrientationTracker::new();
        tracker.set_target_bearing(90.0);
        assert_relative_eq!(tracker.update_orientation(0.0).unwrap(), 90.0);
    }

    #[test]
    fn test_wrap_around() {
        let mut tracker = OrientationTracker::new();
        tracker.set_target_bearing(10.0);
        assert_relative_eq!(tracker.update_orientation(350.0).unwrap(), 20.0);
    }

    #[test]
    fn test_target_change_uses_last_heading() {
        let mut tracker = OrientationTracker::new();
        tracker.update_orientation(30.0);
        assert_relative_eq!(tracker.set_target_bearing(120.0).unwrap(), 90.0);
        assert_relative_eq!(tracker.set_target_bearing(0.0).unwrap(), 330.0);
    }

    #[test]
    fn test_inputs_normalized() {
        let mut tracker = OrientationTracker::new();
        tracker.set_target_bearing(-90.0);
        assert_eq!(tracker.target_bearing_deg(), Some(270.0));
        tracker.update_orientation(450.0);
        assert_eq!(tracker.heading_deg(), Some(90.0));
        assert_relative_eq!(tracker.relative_bearing_deg().unwrap(), 180.0);
    }

    #[test]
    fn test_clear_target_keeps_heading() {
        let mut tracker = OrientationTracker::new();
        tracker.update_orientation(10.0);
        tracker.set_target_bearing(20.0);
        tracker.clear_target();
        assert!(tracker.relative_bearing_deg().is_none());
        assert!(tracker.target_bearing_deg().is_none());
        assert_eq!(tracker.heading_deg(), Some(10.0));
        assert!(tracker.update_orientation(15.0).is_none());
    }

    #[test]
    fn test_non_finite_heading_ignored() {
        let mut tracker = OrientationTracker::new();
        assert!(tracker.update_orientation(f64::NAN).is_none());
        assert_eq!(tracker.state(), TrackerState::Uninitialized);

        tracker.set_target_bearing(10.0);
        tracker.update_orientation(350.0);
        assert_relative_eq!(tracker.update_orientation(f64::NAN).unwrap(), 20.0);
        assert_relative_eq!(tracker.update_orientation(f64::INFINITY).unwrap(), 20.0);
        assert_eq!(tracker.heading_deg(), Some(350.0));
    }

    #[test]
    fn test_compass_rotation() {
        let mut tracker = OrientationTracker::new();
        assert!(tracker.compass_rotation_deg().is_none());
        tracker.update_orientation(90.0);
        assert_relative_eq!(tracker.compass_rotation_deg().unwrap(), 270.0);
        tracker.update_orientation(0.0);
        assert_relative_eq!(tracker.compass_rotation_deg().unwrap(), 0.0);
    }
}
