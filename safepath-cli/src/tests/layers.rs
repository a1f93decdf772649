//! Configuration layering through `ortho_config` merge layers.

use super::*;
use crate::dataset::HazardSource;
use crate::score::{Target, config_from_layers_for_test};
use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn invalid_layer_maps_to_configuration_error() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "lat": "north" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn later_layers_take_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "lat": 10.0,
            "lng": 20.0,
            "hazards": "from-file.json",
            "night_factor": 1.8,
        }),
        None,
    );
    composer.push_environment(json!({
        "lng": 21.0,
        "hour": 22,
    }));
    composer.push_cli(json!({
        "lat": 11.0,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(
        config.target,
        Target::Coordinates {
            latitude: 11.0,
            longitude: 21.0
        }
    );
    assert_eq!(
        config.engine.hazards,
        HazardSource::File(Utf8PathBuf::from("from-file.json"))
    );
    assert_eq!(config.engine.table.night, 1.8);
    assert_eq!(config.engine.hour, Some(22));
}

#[rstest]
fn layered_hour_is_still_validated() {
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({
        "place": "india gate",
        "hour": 30,
    }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("hour 30 should be rejected after merging");
    assert!(matches!(err, CliError::InvalidHour { hour: 30 }));
}
