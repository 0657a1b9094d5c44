//! Point of interest type.

use serde::{Deserialize, Serialize};

use super::PoiCategory;
use crate::core::GeoPoint;

/// A named place the user can navigate to.
///
/// Created once by the generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Unique within a session (`poi-0`, `poi-1`, ...).
    pub id: String,
    pub name: String,
    pub category: PoiCategory,
    pub location: GeoPoint,
    /// Great-circle distance from the generation origin, meters.
    pub distance_m: f64,
    pub description: String,
}

impl PointOfInterest {
    /// Icon key for the map renderer.
    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }
}

/// The POI closest to where it was generated.
///
/// Ties keep the earlier entry. Returns `None` for an empty slice.
pub fn nearest(pois: &[PointOfInterest]) -> Option<&PointOfInterest> {
    pois.iter().min_by(|a, b| a.distance_m.total_cmp(&b.distance_m))
}
