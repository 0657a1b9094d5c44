//! Top-level configuration and its sections.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::defaults;
use crate::core::{GeoPoint, MAX_SURFACE_DISTANCE_M};
use crate::error::{DishaError, Result};

/// Main configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DishaConfig {
    #[serde(default)]
    pub generation: GenerationSection,
    #[serde(default)]
    pub session: SessionSection,
    #[serde(default)]
    pub simulation: SimulationSection,
}

/// POI generation settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationSection {
    /// Inner edge of the generation band in meters (default: 5000)
    #[serde(default = "defaults::min_radius_m")]
    pub min_radius_m: f64,

    /// Outer edge of the generation band in meters (default: 10000)
    #[serde(default = "defaults::max_radius_m")]
    pub max_radius_m: f64,

    /// Number of POIs to generate (default: 10)
    #[serde(default = "defaults::poi_count")]
    pub count: i64,

    /// Generate POIs around the first position fix of a session (default: true)
    #[serde(default = "defaults::enabled")]
    pub on_first_fix: bool,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            min_radius_m: defaults::min_radius_m(),
            max_radius_m: defaults::max_radius_m(),
            count: defaults::poi_count(),
            on_first_fix: defaults::enabled(),
        }
    }
}

/// Navigation session settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSection {
    /// Distance at which the target counts as reached, meters (default: 10)
    #[serde(default = "defaults::arrival_radius_m")]
    pub arrival_radius_m: f64,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            arrival_radius_m: defaults::arrival_radius_m(),
        }
    }
}

/// Synthetic walk used by `disha-sim`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationSection {
    /// Starting latitude in degrees
    #[serde(default = "defaults::origin_lat")]
    pub origin_lat: f64,

    /// Starting longitude in degrees
    #[serde(default = "defaults::origin_lon")]
    pub origin_lon: f64,

    /// Distance walked between position samples, meters (default: 25)
    #[serde(default = "defaults::step_m")]
    pub step_m: f64,

    /// Peak compass noise added to the walking heading, degrees (default: 15)
    #[serde(default = "defaults::heading_jitter_deg")]
    pub heading_jitter_deg: f64,

    /// Time between samples in milliseconds (default: 1000)
    #[serde(default = "defaults::sample_interval_ms")]
    pub sample_interval_ms: i64,

    /// Reported GPS accuracy radius, meters (default: 5)
    #[serde(default = "defaults::gps_accuracy_m")]
    pub gps_accuracy_m: f64,

    /// Upper bound on simulated samples (default: 1000)
    #[serde(default = "defaults::max_steps")]
    pub max_steps: usize,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            origin_lat: defaults::origin_lat(),
            origin_lon: defaults::origin_lon(),
            step_m: defaults::step_m(),
            heading_jitter_deg: defaults::heading_jitter_deg(),
            sample_interval_ms: defaults::sample_interval_ms(),
            gps_accuracy_m: defaults::gps_accuracy_m(),
            max_steps: defaults::max_steps(),
        }
    }
}

impl SimulationSection {
    /// Validated starting point.
    pub fn origin(&self) -> Result<GeoPoint> {
        GeoPoint::try_new(self.origin_lat, self.origin_lon)
    }
}

impl DishaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DishaError::Config(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DishaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let g = &self.generation;
        if !(g.min_radius_m.is_finite() && g.max_radius_m.is_finite()) || g.min_radius_m < 0.0 {
            return Err(DishaError::Config(format!(
                "generation radii must be finite and non-negative (min {}, max {})",
                g.min_radius_m, g.max_radius_m
            )));
        }
        if g.min_radius_m > g.max_radius_m {
            return Err(DishaError::Config(format!(
                "generation.min_radius_m ({}) exceeds generation.max_radius_m ({})",
                g.min_radius_m, g.max_radius_m
            )));
        }
        if g.max_radius_m > MAX_SURFACE_DISTANCE_M {
            return Err(DishaError::Config(format!(
                "generation.max_radius_m ({}) exceeds half the Earth's circumference ({:.0}m)",
                g.max_radius_m, MAX_SURFACE_DISTANCE_M
            )));
        }
        if g.count < 0 {
            return Err(DishaError::Config(format!(
                "generation.count must be non-negative, got {}",
                g.count
            )));
        }
        if self.session.arrival_radius_m.is_nan() || self.session.arrival_radius_m < 0.0 {
            return Err(DishaError::Config(format!(
                "session.arrival_radius_m must be non-negative, got {}",
                self.session.arrival_radius_m
            )));
        }
        if !self.simulation.step_m.is_finite() || self.simulation.step_m <= 0.0 {
            return Err(DishaError::Config(format!(
                "simulation.step_m must be positive, got {}",
                self.simulation.step_m
            )));
        }
        self.simulation
            .origin()
            .map_err(|e| DishaError::Config(format!("simulation origin: {}", e)))?;
        Ok(())
    }
}
