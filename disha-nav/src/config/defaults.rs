//! Default value functions for serde deserialization.

// Generation defaults: 5-10 km band, 10 POIs
pub fn min_radius_m() -> f64 {
    5_000.0
}

pub fn max_radius_m() -> f64 {
    10_000.0
}

pub fn poi_count() -> i64 {
    10
}

pub fn enabled() -> bool {
    true
}

// Session defaults
pub fn arrival_radius_m() -> f64 {
    10.0
}

// Simulation defaults (Dhaka campus)
pub fn origin_lat() -> f64 {
    23.8103
}

pub fn origin_lon() -> f64 {
    90.4125
}

pub fn step_m() -> f64 {
    25.0
}

pub fn heading_jitter_deg() -> f64 {
    15.0
}

pub fn sample_interval_ms() -> i64 {
    1_000
}

pub fn gps_accuracy_m() -> f64 {
    5.0
}

pub fn max_steps() -> usize {
    1_000
}
