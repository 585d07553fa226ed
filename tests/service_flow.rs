//! End-to-end tests over the public library API

use chrono::Utc;
use shoreline::models::{AlertPriority, SafetyLevel};
use shoreline::weather::{ConditionsProvider, DemoProvider};
use shoreline::{geo, places, safety, AlertBoard, BeachCatalog, ConditionInputs, Coordinate, WaterQuality};

/// A visitor in Chennai searches for beaches and checks conditions,
/// the way the app's landing page does.
#[test]
fn test_visitor_flow_from_chennai() {
    let catalog = BeachCatalog::seeded().unwrap();

    // Resolve "chennai" through the location search box
    let matches = places::search("chennai").unwrap();
    let origin = matches[0].coordinate().unwrap();

    // Nearby beaches within 100 km, closest first
    let nearby = catalog.nearby(&origin, Some(100.0)).unwrap();
    assert_eq!(nearby.len(), 3);
    assert_eq!(nearby[0].status.beach.name, "Marina Beach");
    assert_eq!(nearby[1].status.beach.name, "Kovalam Beach");
    assert_eq!(nearby[2].status.beach.name, "Mahabalipuram Beach");
    assert!((nearby[2].distance_km - 51.4).abs() < 0.5);

    // Distances are already display-rounded to one decimal
    for result in &nearby {
        let scaled = result.distance_km * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    // Marina's rough conditions put it at caution despite being closest
    let marina = &nearby[0].status;
    assert_eq!(marina.safety.as_ref().unwrap().level, SafetyLevel::Caution);
    assert!(!marina.hazards.is_empty());
}

#[test]
fn test_safety_levels_track_condition_severity() {
    // Calm readings classify safe, severe readings unsafe, and the
    // composite score drives the boundary in between.
    let calm = ConditionInputs {
        wave_height_m: 0.5,
        wind_speed_kmh: 10.0,
        water_quality: WaterQuality::Good,
    };
    let rough = ConditionInputs {
        wave_height_m: 2.5,
        wind_speed_kmh: 40.0,
        water_quality: WaterQuality::Poor,
    };

    let calm_assessment = safety::assess(&calm).unwrap();
    let rough_assessment = safety::assess(&rough).unwrap();

    assert_eq!(calm_assessment.level, SafetyLevel::Safe);
    assert_eq!(calm_assessment.score, 1.0);
    assert_eq!(rough_assessment.level, SafetyLevel::Unsafe);
    assert_eq!(rough_assessment.score, 0.0);
}

#[test]
fn test_alert_feed_matches_catalog() {
    let catalog = BeachCatalog::seeded().unwrap();
    let board = AlertBoard::seeded();
    let now = Utc::now();

    // Every seeded alert points at a catalog beach
    for alert in board.active(None, now) {
        if let Some(beach_id) = alert.beach_id {
            assert!(catalog.beach(beach_id).is_ok());
        }
    }

    // The unsafe beach carries the high-priority alert
    let mahabalipuram_alerts = board.for_beach(3, now);
    assert_eq!(mahabalipuram_alerts.len(), 1);
    assert_eq!(mahabalipuram_alerts[0].priority, AlertPriority::High);
}

#[test]
fn test_distance_ranking_is_stable_and_symmetric() {
    let catalog = BeachCatalog::seeded().unwrap();
    let kovalam = Coordinate::new(12.7891, 80.2547).unwrap();
    let marina = Coordinate::new(13.0500, 80.2824).unwrap();

    let from_kovalam = geo::distance_km(&kovalam, &marina).unwrap();
    let from_marina = geo::distance_km(&marina, &kovalam).unwrap();
    assert!((from_kovalam - from_marina).abs() < 1e-9);

    // Querying from a beach's own coordinate ranks it first at 0.0 km
    let nearby = catalog.nearby(&kovalam, None).unwrap();
    assert_eq!(nearby[0].status.beach.id, 1);
    assert_eq!(nearby[0].distance_km, 0.0);
}

#[tokio::test]
async fn test_demo_conditions_for_seeded_beach() {
    let catalog = BeachCatalog::seeded().unwrap();
    let provider = DemoProvider;

    let marina = catalog.beach(2).unwrap();
    let weather = provider.weather(&marina.beach.coordinate).await.unwrap();
    let marine = provider.marine(&marina.beach.coordinate).await.unwrap();

    assert!(weather.temperature_c > 0.0);
    assert!(!weather.wind_direction.is_empty());
    assert!(marine.wave_height_m > 0.0);
}
