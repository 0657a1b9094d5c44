//! POI generation through the public API.

mod common;

use common::{CAMPUS, fix};
use disha_nav::core::distance_m;
use disha_nav::poi::nearest;
use disha_nav::{DishaConfig, DishaError, NavigationSession, PoiGenerator};

#[test]
fn test_generate_hundred_to_five_hundred() {
    let mut generator = PoiGenerator::with_seed(Default::default(), 2024);
    let pois = generator.generate(CAMPUS, 100.0, 500.0, 10).unwrap();

    assert_eq!(pois.len(), 10);
    for poi in &pois {
        assert!(poi.distance_m >= 100.0 - 1e-6, "{} too close", poi.id);
        assert!(poi.distance_m <= 500.0 + 1e-6, "{} too far", poi.id);
        assert!((distance_m(CAMPUS, poi.location) - poi.distance_m).abs() < 1e-9);
    }
}

#[test]
fn test_inverted_band_fails() {
    let mut generator = PoiGenerator::with_seed(Default::default(), 2024);
    let result = generator.generate(CAMPUS, 500.0, 100.0, 5);
    assert!(matches!(result, Err(DishaError::InvalidArgument(_))));
}

#[test]
fn test_bearings_cover_all_quadrants() {
    let mut generator = PoiGenerator::with_seed(Default::default(), 99);
    let pois = generator.generate(CAMPUS, 100.0, 200.0, 200).unwrap();

    let mut quadrants = [0usize; 4];
    for poi in &pois {
        let b = disha_nav::core::initial_bearing_deg(CAMPUS, poi.location);
        quadrants[(b / 90.0) as usize % 4] += 1;
    }
    assert!(quadrants.iter().all(|&n| n > 20), "{:?}", quadrants);
}

#[test]
fn test_session_navigates_to_nearest_generated_poi() {
    let mut config = DishaConfig::default();
    config.generation.min_radius_m = 300.0;
    config.generation.max_radius_m = 800.0;
    config.generation.count = 5;

    let mut session = NavigationSession::with_seed(&config, 17);
    session.on_position_update(fix(CAMPUS, 0));
    assert_eq!(session.pois().len(), 5);

    let target = nearest(session.pois()).cloned().unwrap();
    session.select_poi_by_id(&target.id).unwrap();

    let distance = session.state().distance_to_target_m().unwrap();
    assert!((distance - target.distance_m).abs() < 1e-9);
    assert!(session.pois().iter().all(|p| p.distance_m >= distance - 1e-9));
}
