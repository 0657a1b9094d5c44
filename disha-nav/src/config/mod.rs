//! Configuration loading for DishaNav.
//!
//! All settings live in one TOML file; every field has a default, so an
//! empty file (or no file at all) is a valid configuration.
//!
//! ## Example TOML
//!
//! ```toml
//! [generation]
//! min_radius_m = 5000.0   # inner edge of the POI band
//! max_radius_m = 10000.0  # outer edge
//! count = 10
//! on_first_fix = true     # populate POIs around the first GPS fix
//!
//! [session]
//! arrival_radius_m = 10.0
//!
//! [simulation]
//! origin_lat = 23.8103
//! origin_lon = 90.4125
//! step_m = 25.0
//! heading_jitter_deg = 15.0
//! sample_interval_ms = 1000
//! ```

mod defaults;
mod disha;

pub use disha::{DishaConfig, GenerationSection, SessionSection, SimulationSection};
