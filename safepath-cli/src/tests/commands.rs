//! Command execution against temporary datasets and fixed geocoders.

use super::helpers::{Workspace, settings_at};
use super::*;
use crate::dataset::{EngineSettings, FactorOverrides, HazardSource, write_json};
use crate::hazards::{HazardsConfig, execute_hazards};
use crate::route::{RouteConfig, execute_route};
use crate::score::{DEFAULT_GEOCODE_TIMEOUT, ScoreConfig, Target, execute_score};
use crate::status::execute_status;
use rstest::{fixture, rstest};
use safepath_core::test_support::FixedGeocoder;
use safepath_core::{
    Coordinate, DatasetError, Gazetteer, GeocodeError, SafetyError, SafetyLevel,
};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn score_config(target: Target, engine: EngineSettings) -> ScoreConfig {
    ScoreConfig {
        target,
        gazetteer: None,
        geocode_timeout: DEFAULT_GEOCODE_TIMEOUT,
        engine,
    }
}

fn origin() -> Target {
    Target::Coordinates {
        latitude: 0.0,
        longitude: 0.0,
    }
}

#[rstest]
fn scores_coordinates_against_file_dataset(workspace: Workspace) {
    let config = score_config(origin(), settings_at(Some(workspace.origin_hazard()), 10));
    let result = execute_score(&config, &Gazetteer::new()).expect("score");
    assert_eq!(result.crime_risk, 0.9);
    assert_eq!(result.safety_score, 12.5);
    assert_eq!(result.safety_level, SafetyLevel::Unsafe);
}

#[rstest]
fn empty_dataset_scores_with_default_risk(workspace: Workspace) {
    let hazards = workspace.write("empty.json", r#"{"hazards":[]}"#);
    let config = score_config(origin(), settings_at(Some(hazards), 10));
    let result = execute_score(&config, &Gazetteer::new()).expect("score");
    assert_eq!(result.crime_risk, 0.3);
    assert_eq!(result.safety_score, 87.5);
    assert_eq!(result.safety_level, SafetyLevel::Safe);
}

#[rstest]
fn resolves_places_through_the_geocoder(workspace: Workspace) {
    let config = score_config(
        Target::Place("null island".to_owned()),
        settings_at(Some(workspace.origin_hazard()), 10),
    );
    let origin = Coordinate::new(0.0, 0.0).expect("valid origin");
    let result = execute_score(&config, &FixedGeocoder::Found(origin)).expect("score");
    assert_eq!(result.coordinate, origin);
    assert_eq!(result.safety_score, 12.5);
}

#[rstest]
fn loads_gazetteer_files_case_insensitively(workspace: Workspace) {
    let path = workspace.write(
        "places.json",
        r#"{"places":{"Null Island":{"latitude":0.0,"longitude":0.0}}}"#,
    );
    let gazetteer = crate::dataset::gazetteer(Some(&path)).expect("gazetteer");
    let config = score_config(
        Target::Place("  NULL island ".to_owned()),
        settings_at(Some(workspace.origin_hazard()), 10),
    );
    let result = execute_score(&config, &gazetteer).expect("score");
    assert_eq!(result.crime_risk, 0.9);
}

#[rstest]
#[case(FixedGeocoder::NotFound)]
#[case(FixedGeocoder::TimedOut)]
fn geocoding_failures_surface(#[case] geocoder: FixedGeocoder) {
    let config = score_config(Target::Place("atlantis".to_owned()), settings_at(None, 10));
    let err = execute_score(&config, &geocoder).expect_err("geocoding should fail");
    match (geocoder, err) {
        (FixedGeocoder::NotFound, CliError::Geocode(GeocodeError::NotFound { query })) => {
            assert_eq!(query, "atlantis");
        }
        (FixedGeocoder::TimedOut, CliError::Geocode(GeocodeError::Timeout { timeout, .. })) => {
            assert_eq!(timeout, DEFAULT_GEOCODE_TIMEOUT);
        }
        (_, other) => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn invalid_coordinates_are_rejected() {
    let config = score_config(
        Target::Coordinates {
            latitude: 91.0,
            longitude: 0.0,
        },
        settings_at(None, 10),
    );
    let err = execute_score(&config, &Gazetteer::new()).expect_err("latitude 91 is invalid");
    assert!(matches!(
        err,
        CliError::Safety(SafetyError::InvalidCoordinate(_))
    ));
}

#[rstest]
fn non_positive_factor_is_a_configuration_error() {
    let factors = FactorOverrides {
        night: Some(0.0),
        ..FactorOverrides::default()
    };
    let engine = EngineSettings::new(None, factors, Some(3)).expect("settings");
    let err = execute_score(&score_config(origin(), engine), &Gazetteer::new())
        .expect_err("zero factor should be rejected");
    assert!(matches!(
        err,
        CliError::Safety(SafetyError::Configuration { bucket: "night", .. })
    ));
}

#[rstest]
fn missing_dataset_names_the_option(workspace: Workspace) {
    let missing = workspace.path("absent.json");
    let err = execute_status(&HazardSource::File(missing)).expect_err("missing file");
    match err {
        CliError::LoadDataset {
            field,
            source: DatasetError::Open { .. },
        } => assert_eq!(field, ARG_HAZARDS),
        other => panic!("expected LoadDataset, found {other:?}"),
    }
}

#[rstest]
fn evaluates_routes_at_the_configured_hour(workspace: Workspace) {
    let config = RouteConfig {
        from: (0.0, 0.0),
        to: (0.0, 0.05),
        engine: settings_at(Some(workspace.origin_hazard()), 12),
    };
    let route = execute_route(&config).expect("route");
    assert_eq!(route.waypoints.len(), 12);
    assert_eq!(route.warnings.first().map(|w| w.waypoint), Some(1));
    assert!(route.minimum_safety_score <= route.average_safety_score);
}

#[rstest]
fn route_rejects_invalid_endpoints() {
    let config = RouteConfig {
        from: (0.0, 0.0),
        to: (0.0, 181.0),
        engine: settings_at(None, 12),
    };
    let err = execute_route(&config).expect_err("longitude 181 is invalid");
    assert!(matches!(
        err,
        CliError::Safety(SafetyError::InvalidCoordinate(_))
    ));
}

#[rstest]
fn lists_sample_hazards_within_radius() {
    let config = HazardsConfig {
        center: (28.6139, 77.2090),
        radius_km: 2.0,
        hazards: HazardSource::Sample,
    };
    let report = execute_hazards(&config).expect("hazards");
    let categories: Vec<_> = report.hazards.iter().map(|h| h.category()).collect();
    assert_eq!(categories, vec!["theft", "harassment"]);
    assert_eq!(report.count, 2);
}

#[rstest]
fn status_reports_sample_size() {
    let report = execute_status(&HazardSource::Sample).expect("status");
    assert_eq!(report.status, "ok");
    assert_eq!(report.source, "built-in sample");
    assert_eq!(report.hazards_loaded, 4);
}

#[rstest]
fn writes_pretty_json_with_trailing_newline(workspace: Workspace) {
    let config = score_config(origin(), settings_at(Some(workspace.origin_hazard()), 10));
    let result = execute_score(&config, &Gazetteer::new()).expect("score");
    let mut buffer = Vec::new();
    write_json(&mut buffer, &result).expect("write json");
    let text = String::from_utf8(buffer).expect("utf-8 output");
    assert!(text.ends_with("}\n"));
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["safety_level"], "UNSAFE");
    assert_eq!(value["safety_score"], 12.5);
    assert_eq!(
        value["recommendations"][0],
        "High risk area - avoid if possible"
    );
}
