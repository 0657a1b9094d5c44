//! Navigation session: position and heading in, render parameters out.
//!
//! # Architecture
//!
//! ```text
//! Geolocation ──PositionSample──┐
//!                               ▼
//!                      NavigationSession ──▶ NavigationState / RenderFrame
//!                        │          ▲                 (map or AR view)
//!             set_target_bearing    │ relative bearing
//!                        ▼          │
//! Compass ──OrientationSample──▶ OrientationTracker
//! ```
//!
//! # Key Types
//!
//! - [`NavigationSession`]: applies samples in delivery order and keeps the
//!   derived distance/bearing/relative-bearing consistent
//! - [`NavigationState`]: read-only view of the latest inputs and outputs
//! - [`RenderFrame`]: flattened per-frame parameters for the renderer

mod frame;
mod session;
mod state;

pub use frame::{RenderFrame, proximity_percent};
pub use session::{NavigationSession, SessionEvent};
pub use state::NavigationState;
