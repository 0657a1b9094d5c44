//! Random POI generation around an origin.
//!
//! Each POI gets a radius drawn uniformly from `[min, max]` and a bearing
//! drawn uniformly from `[0, 360)`, then is projected along the great circle.
//! Sampling the radius (not the area) uniformly places proportionally more
//! points near the inner edge of the band.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::category::NAME_PREFIXES;
use super::{PoiCategory, PointOfInterest};
use crate::config::GenerationSection;
use crate::core::{GeoPoint, MAX_SURFACE_DISTANCE_M, destination_point, distance_m};
use crate::error::{DishaError, Result};

/// Generates synthetic POIs.
pub struct PoiGenerator {
    config: GenerationSection,
    rng: StdRng,
}

impl PoiGenerator {
    /// Create a generator seeded from the OS.
    pub fn new(config: GenerationSection) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible generator.
    pub fn with_seed(config: GenerationSection, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Configured generation band.
    pub fn config(&self) -> &GenerationSection {
        &self.config
    }

    /// Generate using the configured band and count.
    pub fn generate_default(&mut self, origin: GeoPoint) -> Result<Vec<PointOfInterest>> {
        let (min, max, count) = (
            self.config.min_radius_m,
            self.config.max_radius_m,
            self.config.count,
        );
        self.generate(origin, min, max, count)
    }

    /// Generate `count` POIs between `min_radius_m` and `max_radius_m` of
    /// `origin`.
    ///
    /// Fails with [`DishaError::InvalidArgument`] when `count` is negative or
    /// the band is empty, negative, non-finite or reaches past the antipode.
    /// Nothing is generated in that case.
    ///
    /// `distance_m` on each POI is the Haversine distance back to `origin`,
    /// which may differ from the sampled radius by floating rounding.
    pub fn generate(
        &mut self,
        origin: GeoPoint,
        min_radius_m: f64,
        max_radius_m: f64,
        count: i64,
    ) -> Result<Vec<PointOfInterest>> {
        validate_band(min_radius_m, max_radius_m, count)?;

        let pois: Vec<PointOfInterest> = (0..count)
            .map(|i| self.generate_one(origin, min_radius_m, max_radius_m, i))
            .collect();

        info!(
            "Generated {} POIs within {:.0}-{:.0}m of ({:.5}, {:.5})",
            pois.len(),
            min_radius_m,
            max_radius_m,
            origin.latitude,
            origin.longitude
        );
        Ok(pois)
    }

    fn generate_one(
        &mut self,
        origin: GeoPoint,
        min_radius_m: f64,
        max_radius_m: f64,
        index: i64,
    ) -> PointOfInterest {
        let category = PoiCategory::ALL[self.rng.random_range(0..PoiCategory::ALL.len())];
        let prefix = NAME_PREFIXES[self.rng.random_range(0..NAME_PREFIXES.len())];

        let radius = self.rng.random_range(min_radius_m..=max_radius_m);
        let bearing = self.rng.random_range(0.0..360.0);
        let location = destination_point(origin, bearing, radius);
        let distance = distance_m(origin, location);

        debug!(
            "poi-{}: {} at {:.1}m / {:.1}° (haversine {:.3}m)",
            index,
            category.label(),
            radius,
            bearing,
            distance
        );

        PointOfInterest {
            id: format!("poi-{}", index),
            name: format!("{} {}", prefix, category.label()),
            category,
            location,
            distance_m: distance,
            description: category.description().to_string(),
        }
    }
}

fn validate_band(min_radius_m: f64, max_radius_m: f64, count: i64) -> Result<()> {
    if count < 0 {
        return Err(DishaError::InvalidArgument(format!(
            "count must be non-negative, got {}",
            count
        )));
    }
    if !min_radius_m.is_finite() || !max_radius_m.is_finite() {
        return Err(DishaError::InvalidArgument(format!(
            "radius band must be finite, got [{}, {}]",
            min_radius_m, max_radius_m
        )));
    }
    if min_radius_m < 0.0 {
        return Err(DishaError::InvalidArgument(format!(
            "min radius must be non-negative, got {}",
            min_radius_m
        )));
    }
    if min_radius_m > max_radius_m {
        return Err(DishaError::InvalidArgument(format!(
            "min radius {} exceeds max radius {}",
            min_radius_m, max_radius_m
        )));
    }
    // No point on the sphere is farther away than the antipode
    if max_radius_m > MAX_SURFACE_DISTANCE_M {
        return Err(DishaError::InvalidArgument(format!(
            "max radius {} exceeds half the Earth's circumference ({:.0}m)",
            max_radius_m, MAX_SURFACE_DISTANCE_M
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ORIGIN: GeoPoint = GeoPoint::new(23.8103, 90.4125);

    fn seeded(seed: u64) -> PoiGenerator {
        PoiGenerator::with_seed(GenerationSection::default(), seed)
    }

    #[test]
    fn test_generate_count_and_band() {
        let mut generator = seeded(7);
        let pois = generator.generate(ORIGIN, 100.0, 500.0, 10).unwrap();

        assert_eq!(pois.len(), 10);
        for poi in &pois {
            assert!(
                poi.distance_m >= 100.0 - 1e-6 && poi.distance_m <= 500.0 + 1e-6,
                "{} at {}m outside band",
                poi.id,
                poi.distance_m
            );
        }
    }

    #[test]
    fn test_stored_distance_matches_location() {
        let mut generator = seeded(11);
        for poi in generator.generate(ORIGIN, 50.0, 2000.0, 25).unwrap() {
            assert!((distance_m(ORIGIN, poi.location) - poi.distance_m).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ids_unique() {
        let mut generator = seeded(3);
        let pois = generator.generate(ORIGIN, 10.0, 20.0, 50).unwrap();
        let ids: HashSet<_> = pois.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(pois[0].id, "poi-0");
        assert_eq!(pois[49].id, "poi-49");
    }

    #[test]
    fn test_name_and_description_follow_category() {
        let mut generator = seeded(5);
        for poi in generator.generate(ORIGIN, 100.0, 200.0, 30).unwrap() {
            assert!(poi.name.ends_with(poi.category.label()));
            let prefix = poi.name.split(' ').next().unwrap();
            assert!(NAME_PREFIXES.contains(&prefix));
            assert_eq!(poi.description, poi.category.description());
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = seeded(42).generate(ORIGIN, 100.0, 500.0, 8).unwrap();
        let b = seeded(42).generate(ORIGIN, 100.0, 500.0, 8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        let pois = seeded(1).generate(ORIGIN, 100.0, 500.0, 0).unwrap();
        assert!(pois.is_empty());
    }

    #[test]
    fn test_degenerate_band() {
        let pois = seeded(1).generate(ORIGIN, 250.0, 250.0, 5).unwrap();
        for poi in pois {
            assert!((poi.distance_m - 250.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_inverted_band_rejected() {
        let err = seeded(1).generate(ORIGIN, 500.0, 100.0, 5).unwrap_err();
        assert!(matches!(err, DishaError::InvalidArgument(_)));
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = seeded(1).generate(ORIGIN, 100.0, 500.0, -1).unwrap_err();
        assert!(matches!(err, DishaError::InvalidArgument(_)));
    }

    #[test]
    fn test_non_finite_band_rejected() {
        assert!(seeded(1).generate(ORIGIN, 0.0, f64::INFINITY, 1).is_err());
        assert!(seeded(1).generate(ORIGIN, f64::NAN, 10.0, 1).is_err());
        assert!(seeded(1).generate(ORIGIN, -5.0, 10.0, 1).is_err());
    }

    #[test]
    fn test_band_beyond_half_circumference_rejected() {
        let equator = GeoPoint::new(0.0, 0.0);
        let err = seeded(1)
            .generate(equator, 30_000_000.0, 30_000_000.0, 3)
            .unwrap_err();
        assert!(matches!(err, DishaError::InvalidArgument(_)));
        assert!(seeded(1).generate(equator, 0.0, f64::MAX, 1).is_err());

        // The antipode itself is still reachable
        let pois = seeded(1)
            .generate(equator, 19_000_000.0, MAX_SURFACE_DISTANCE_M, 20)
            .unwrap();
        for poi in pois {
            assert!(poi.distance_m >= 19_000_000.0 - 1.0);
            assert!(poi.distance_m <= MAX_SURFACE_DISTANCE_M + 1.0);
        }
    }

    #[test]
    fn test_generate_default_uses_config() {
        let config = GenerationSection {
            min_radius_m: 1_000.0,
            max_radius_m: 2_000.0,
            count: 4,
            on_first_fix: true,
        };
        let pois = PoiGenerator::with_seed(config, 9)
            .generate_default(ORIGIN)
            .unwrap();
        assert_eq!(pois.len(), 4);
        assert!(pois.iter().all(|p| p.distance_m > 999.0 && p.distance_m < 2001.0));
    }
}
