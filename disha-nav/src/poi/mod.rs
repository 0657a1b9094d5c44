//! Points of interest and their random generation.
//!
//! # Key Types
//!
//! - [`PointOfInterest`]: an immutable named place with its distance from the
//!   generation origin
//! - [`PoiCategory`]: closed set of categories with fixed icon and description
//! - [`PoiGenerator`]: draws POIs inside a radius band around an origin

mod category;
mod generator;
mod point;

pub use category::{NAME_PREFIXES, PoiCategory};
pub use generator::PoiGenerator;
pub use point::{PointOfInterest, nearest};
