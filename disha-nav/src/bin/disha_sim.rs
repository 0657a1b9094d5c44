//! DishaSim - replays a synthetic walk through a navigation session
//!
//! Stands in for the browser geolocation and compass providers: starts at the
//! configured origin, lets the first fix generate POIs, picks the nearest one
//! and walks toward it with a noisy heading until it is reached.
//!
//! ```text
//! disha-sim [--config disha.toml] [--seed 42] [--steps 500]
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use disha_nav::config::SimulationSection;
use disha_nav::core::{destination_point, normalize_degrees, signed_angle_diff_deg};
use disha_nav::poi::nearest;
use disha_nav::{
    DishaConfig, DishaError, GeoPoint, NavigationSession, OrientationSample, PositionSample,
    Result, SessionEvent,
};

/// Default config file looked up in the working directory.
const DEFAULT_CONFIG: &str = "disha.toml";

#[derive(Parser, Debug)]
#[command(name = "disha-sim", about = "Simulate a walk to a generated POI")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for POI generation and walking noise
    #[arg(short, long)]
    seed: Option<u64>,

    /// Override simulation.max_steps
    #[arg(long)]
    steps: Option<usize>,

    /// Log a progress line every N samples
    #[arg(long, default_value_t = 10)]
    log_every: usize,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("disha_nav=info,disha_sim=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DishaConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => DishaConfig::load(Path::new(DEFAULT_CONFIG))?,
        None => {
            info!("Using default configuration");
            DishaConfig::default()
        }
    };
    if let Some(steps) = args.steps {
        config.simulation.max_steps = steps;
    }

    info!("DishaSim v{}", env!("CARGO_PKG_VERSION"));

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Seed: {}", seed);

    let mut session = NavigationSession::with_seed(&config, seed);
    let mut walker = Walker::new(&config.simulation, seed)?;

    // First fix: generates POIs when generation.on_first_fix is set
    session.handle(SessionEvent::Position(walker.sample()));
    if session.pois().is_empty() {
        session.generate_pois(
            config.generation.min_radius_m,
            config.generation.max_radius_m,
            config.generation.count,
        )?;
    }

    let target = nearest(session.pois())
        .cloned()
        .ok_or_else(|| DishaError::InvalidArgument("no POIs to navigate to".to_string()))?;
    info!(
        "Heading for {} '{}' ({}, icon {}), {:.0}m away",
        target.id,
        target.name,
        target.category,
        target.icon(),
        target.distance_m
    );
    session.select_poi(target);

    let mut step = 0;
    while step < config.simulation.max_steps && !session.has_arrived() {
        let Some(bearing) = session.state().absolute_bearing_deg() else {
            break;
        };
        let remaining = session.state().distance_to_target_m().unwrap_or(0.0);

        let heading = walker.face(bearing);
        session.handle(SessionEvent::Orientation(OrientationSample::heading(heading)));
        session.handle(SessionEvent::Position(walker.walk(heading, bearing, remaining)));
        step += 1;

        if step % args.log_every.max(1) == 0
            && let Some(frame) = session.render_frame()
        {
            let turn = frame
                .relative_bearing_deg
                .map(|r| signed_angle_diff_deg(0.0, r))
                .unwrap_or(0.0);
            info!(
                "step {:>4}: {:>7.1}m to go, turn {:+6.1}°, proximity {:5.1}%",
                step, frame.distance_m, turn, frame.proximity_percent
            );
        }
    }

    match session.render_frame() {
        Some(frame) if frame.arrived => {
            info!("Arrived at '{}' after {} samples", frame.poi_name, step);
        }
        Some(frame) => {
            warn!(
                "Stopped after {} samples, {:.1}m short of '{}'",
                step, frame.distance_m, frame.poi_name
            );
        }
        None => warn!("Session ended without a target"),
    }

    Ok(())
}

/// Synthetic pedestrian producing position and heading samples.
struct Walker {
    position: GeoPoint,
    timestamp_ms: i64,
    step_m: f64,
    jitter_deg: f64,
    interval_ms: i64,
    accuracy_m: f64,
    rng: StdRng,
}

impl Walker {
    fn new(config: &SimulationSection, seed: u64) -> Result<Self> {
        Ok(Self {
            position: config.origin()?,
            timestamp_ms: 0,
            step_m: config.step_m,
            jitter_deg: config.heading_jitter_deg.abs(),
            interval_ms: config.sample_interval_ms,
            accuracy_m: config.gps_accuracy_m,
            // Separate stream from the session's generator
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
        })
    }

    fn sample(&self) -> PositionSample {
        PositionSample::new(self.position, self.accuracy_m, self.timestamp_ms)
    }

    /// Compass heading while looking roughly toward `bearing`.
    fn face(&mut self, bearing: f64) -> f64 {
        normalize_degrees(bearing + self.jitter())
    }

    /// Take one step; the last one lands exactly on the target.
    fn walk(&mut self, heading: f64, bearing: f64, remaining_m: f64) -> PositionSample {
        self.position = if remaining_m <= self.step_m {
            destination_point(self.position, bearing, remaining_m)
        } else {
            destination_point(self.position, heading, self.step_m)
        };
        self.timestamp_ms += self.interval_ms;
        self.sample()
    }

    fn jitter(&mut self) -> f64 {
        if self.jitter_deg > 0.0 {
            self.rng.random_range(-self.jitter_deg..=self.jitter_deg)
        } else {
            0.0
        }
    }
}
