//! # DishaNav
//!
//! Geometry core for campus navigation with an AR direction overlay.
//!
//! ## Overview
//!
//! - **Geo math** ([`core`]): Haversine distance, initial bearing, local
//!   offsets and great-circle projection on a spherical Earth
//! - **POI generation** ([`poi`]): random points of interest inside a radius
//!   band around the user
//! - **Orientation tracking** ([`orientation`]): compass heading plus target
//!   bearing to an on-screen arrow angle
//! - **Navigation session** ([`navigation`]): orchestrates samples and
//!   exposes the state the renderer reads
//!
//! ## Quick Start
//!
//! ```rust
//! use disha_nav::{DishaConfig, GeoPoint, NavigationSession, OrientationSample, PositionSample};
//!
//! let config = DishaConfig::default();
//! let mut session = NavigationSession::with_seed(&config, 7);
//!
//! // First fix also generates POIs around the user
//! session.on_position_update(PositionSample::new(GeoPoint::new(23.8103, 90.4125), 5.0, 0));
//! session.select_poi_by_id("poi-0").unwrap();
//! session.on_orientation_update(OrientationSample::heading(0.0));
//!
//! let frame = session.render_frame().unwrap();
//! println!("{} is {:.0}m away", frame.poi_name, frame.distance_m);
//! ```
//!
//! ## Conventions
//!
//! - Distances in meters, angles in degrees
//! - Bearings: 0 = north, clockwise positive, normalized to [0, 360)

pub mod config;
pub mod core;
pub mod error;
pub mod navigation;
pub mod orientation;
pub mod poi;

// Re-export commonly used types
pub use config::DishaConfig;
pub use crate::core::{GeoPoint, OrientationSample, PositionSample};
pub use error::{DishaError, Result};
pub use navigation::{NavigationSession, NavigationState, RenderFrame, SessionEvent};
pub use orientation::{OrientationTracker, TrackerState};
pub use poi::{PoiCategory, PoiGenerator, PointOfInterest};
