//! Navigation session orchestration.
//!
//! A session owns the POI list, the orientation tracker and the navigation
//! state. Every inbound sample is applied synchronously and fully
//! recomputes the derived distance/bearing/relative-bearing triple before
//! returning, so the state is consistent between calls.
//!
//! Ending a session is dropping it; nothing outlives the object.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::frame::{RenderFrame, proximity_percent};
use super::state::NavigationState;
use crate::config::{DishaConfig, SessionSection};
use crate::core::{OrientationSample, PositionSample, distance_m, initial_bearing_deg};
use crate::error::{DishaError, Result};
use crate::orientation::OrientationTracker;
use crate::poi::{PoiGenerator, PointOfInterest};

/// A sample delivered by one of the device collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    Position(PositionSample),
    Orientation(OrientationSample),
}

/// Drives one navigation session.
pub struct NavigationSession {
    config: SessionSection,
    generator: PoiGenerator,
    tracker: OrientationTracker,
    state: NavigationState,
    pois: Vec<PointOfInterest>,
    /// Set once the first-fix generation has run (or been skipped).
    first_fix_handled: bool,
    generate_on_first_fix: bool,
}

impl NavigationSession {
    /// Create a session with an OS-seeded POI generator.
    pub fn new(config: &DishaConfig) -> Self {
        Self::with_generator(config, PoiGenerator::new(config.generation.clone()))
    }

    /// Create a session whose generated POIs are reproducible.
    pub fn with_seed(config: &DishaConfig, seed: u64) -> Self {
        Self::with_generator(
            config,
            PoiGenerator::with_seed(config.generation.clone(), seed),
        )
    }

    fn with_generator(config: &DishaConfig, generator: PoiGenerator) -> Self {
        Self {
            config: config.session.clone(),
            generator,
            tracker: OrientationTracker::new(),
            state: NavigationState::default(),
            pois: Vec::new(),
            first_fix_handled: false,
            generate_on_first_fix: config.generation.on_first_fix,
        }
    }

    // ========================================================================
    // Sample Ingestion
    // ========================================================================

    /// Apply one collaborator sample.
    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Position(sample) => self.on_position_update(sample),
            SessionEvent::Orientation(sample) => self.on_orientation_update(sample),
        }
    }

    /// Replace the user position and recompute against the selected POI.
    ///
    /// The first fix of a session also populates the POI list when
    /// `generation.on_first_fix` is enabled and no POIs were set yet.
    pub fn on_position_update(&mut self, sample: PositionSample) {
        self.state.user_position = Some(sample);

        if !self.first_fix_handled {
            self.first_fix_handled = true;
            if self.generate_on_first_fix && self.pois.is_empty() {
                match self.generator.generate_default(sample.point) {
                    Ok(pois) => self.pois = pois,
                    Err(e) => warn!("POI generation on first fix failed: {}", e),
                }
            }
        }

        self.recompute();
    }

    /// Store the heading and update the relative bearing.
    ///
    /// A sample with a non-finite heading is dropped.
    pub fn on_orientation_update(&mut self, sample: OrientationSample) {
        self.state.relative_bearing_deg = self.tracker.update_orientation(sample.heading_deg);
        if sample.heading_deg.is_finite() {
            self.state.last_orientation = Some(sample);
        }
    }

    // ========================================================================
    // Target Selection
    // ========================================================================

    /// Make `poi` the navigation target.
    ///
    /// Distance and bearing are computed immediately when a position is
    /// known; otherwise they wait for the next position update.
    pub fn select_poi(&mut self, poi: PointOfInterest) {
        if self.state.selected_poi.as_ref() != Some(&poi) {
            info!("Selected {} '{}'", poi.id, poi.name);
        }
        self.state.selected_poi = Some(poi);
        self.recompute();
    }

    /// Select one of this session's POIs by id.
    pub fn select_poi_by_id(&mut self, id: &str) -> Result<()> {
        let poi = self
            .pois
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DishaError::UnknownPoi(id.to_string()))?;
        self.select_poi(poi);
        Ok(())
    }

    /// Stop navigating. Position and orientation are kept.
    pub fn clear_selection(&mut self) {
        if let Some(poi) = &self.state.selected_poi {
            info!("Cleared selection of {}", poi.id);
        }
        self.state.clear_target();
        self.tracker.clear_target();
    }

    // ========================================================================
    // POI Management
    // ========================================================================

    /// Replace this session's POIs with a freshly generated set around the
    /// current position.
    ///
    /// Generated ids restart at `poi-0`, so a selection from the previous set
    /// is cleared. Returns `Ok(None)` when no position is known yet.
    pub fn generate_pois(
        &mut self,
        min_radius_m: f64,
        max_radius_m: f64,
        count: i64,
    ) -> Result<Option<&[PointOfInterest]>> {
        let Some(position) = self.state.user_position else {
            debug!("POI generation deferred: no position yet");
            return Ok(None);
        };
        let pois = self
            .generator
            .generate(position.point, min_radius_m, max_radius_m, count)?;
        self.replace_pois(pois);
        Ok(Some(self.pois.as_slice()))
    }

    /// Install an externally supplied POI list.
    ///
    /// Suppresses first-fix generation. A selection that is not part of the
    /// new list is cleared.
    pub fn set_pois(&mut self, pois: Vec<PointOfInterest>) {
        self.replace_pois(pois);
        self.first_fix_handled = true;
    }

    /// Swap the POI list, keeping ids unique within the session.
    fn replace_pois(&mut self, pois: Vec<PointOfInterest>) {
        self.pois = pois;
        if let Some(selected) = &self.state.selected_poi
            && !self.pois.contains(selected)
        {
            debug!("{} not in the new POI list", selected.id);
            self.clear_selection();
        }
    }

    pub fn pois(&self) -> &[PointOfInterest] {
        &self.pois
    }

    // ========================================================================
    // State Queries
    // ========================================================================

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn tracker(&self) -> &OrientationTracker {
        &self.tracker
    }

    /// Check whether the user is within the configured arrival radius.
    pub fn has_arrived(&self) -> bool {
        self.state.has_arrived(self.config.arrival_radius_m)
    }

    /// Projection for the rendering layer.
    ///
    /// `None` until a target is selected and its distance is known.
    pub fn render_frame(&self) -> Option<RenderFrame> {
        let poi = self.state.selected_poi.as_ref()?;
        let distance = self.state.distance_to_target_m?;
        Some(RenderFrame {
            poi_id: poi.id.clone(),
            poi_name: poi.name.clone(),
            distance_m: distance,
            relative_bearing_deg: self.state.relative_bearing_deg,
            compass_rotation_deg: self.tracker.compass_rotation_deg(),
            proximity_percent: proximity_percent(distance),
            arrived: self.has_arrived(),
        })
    }

    // ========================================================================
    // Recomputation
    // ========================================================================

    /// Recompute distance and bearing from the current inputs.
    ///
    /// A missing position or target is not an error; the derived fields keep
    /// their values until both inputs exist.
    fn recompute(&mut self) {
        let (Some(position), Some(poi)) = (&self.state.user_position, &self.state.selected_poi)
        else {
            return;
        };
        let distance = distance_m(position.point, poi.location);
        let bearing = initial_bearing_deg(position.point, poi.location);

        debug!(
            "{}: {:.1}m at {:.1}° (accuracy {:.1}m)",
            poi.id, distance, bearing, position.accuracy_m
        );

        self.state.distance_to_target_m = Some(distance);
        self.state.absolute_bearing_deg = Some(bearing);
        self.state.relative_bearing_deg = self.tracker.set_target_bearing(bearing);
    }
}
