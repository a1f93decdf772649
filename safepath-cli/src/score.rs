//! `score` command: safety of a single coordinate or named place.

use std::io::Write;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use safepath_core::{Geocoder, ScoreResult};
use serde::{Deserialize, Serialize};

use crate::dataset::{
    EngineSettings, FactorOverrides, coordinate, gazetteer, required, write_json,
};
use crate::{
    ARG_DAY_FACTOR, ARG_EVENING_FACTOR, ARG_GAZETTEER, ARG_GEOCODE_TIMEOUT_MS, ARG_HAZARDS,
    ARG_HOUR, ARG_LAT, ARG_LNG, ARG_NIGHT_FACTOR, ARG_PLACE, CliError, ENV_SCORE_LAT,
    ENV_SCORE_LNG,
};

/// Time allowed for a place-name lookup when none is configured.
pub(crate) const DEFAULT_GEOCODE_TIMEOUT: Duration = Duration::from_secs(1);

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score one location against the hazard dataset. Give either \
                 --lat and --lng, or --place with a gazetteer that knows the \
                 name. Time-risk factors and the hour can be overridden for \
                 reproducible results.",
    about = "Score a single location",
    allow_negative_numbers = true
)]
#[ortho_config(prefix = "SAFEPATH")]
pub(crate) struct ScoreArgs {
    /// Latitude in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees")]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude in decimal degrees.
    #[arg(long = ARG_LNG, value_name = "degrees")]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Place name to resolve through the gazetteer instead of coordinates.
    #[arg(long = ARG_PLACE, value_name = "name")]
    #[serde(default)]
    pub(crate) place: Option<String>,
    /// JSON gazetteer mapping place names to coordinates.
    #[arg(long = ARG_GAZETTEER, value_name = "path")]
    #[serde(default)]
    pub(crate) gazetteer: Option<Utf8PathBuf>,
    /// Milliseconds allowed for resolving --place.
    #[arg(long = ARG_GEOCODE_TIMEOUT_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) geocode_timeout_ms: Option<u64>,
    /// JSON hazard dataset; the built-in sample is used when omitted.
    #[arg(long = ARG_HAZARDS, value_name = "path")]
    #[serde(default)]
    pub(crate) hazards: Option<Utf8PathBuf>,
    /// Risk multiplier for 21:00 to 05:59.
    #[arg(long = ARG_NIGHT_FACTOR, value_name = "factor")]
    #[serde(default)]
    pub(crate) night_factor: Option<f64>,
    /// Risk multiplier for 18:00 to 20:59.
    #[arg(long = ARG_EVENING_FACTOR, value_name = "factor")]
    #[serde(default)]
    pub(crate) evening_factor: Option<f64>,
    /// Risk multiplier for 06:00 to 17:59.
    #[arg(long = ARG_DAY_FACTOR, value_name = "factor")]
    #[serde(default)]
    pub(crate) day_factor: Option<f64>,
    /// Evaluate at this hour (0-23) today instead of the current time.
    #[arg(long = ARG_HOUR, value_name = "hour")]
    #[serde(default)]
    pub(crate) hour: Option<u32>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// What the `score` command evaluates.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Target {
    /// Raw degrees, validated by the engine.
    Coordinates { latitude: f64, longitude: f64 },
    /// A place name for the geocoder.
    Place(String),
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) target: Target,
    pub(crate) gazetteer: Option<Utf8PathBuf>,
    pub(crate) geocode_timeout: Duration,
    pub(crate) engine: EngineSettings,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let target = match (args.place, args.lat, args.lng) {
            (Some(_), Some(_), _) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_LAT,
                    second: ARG_PLACE,
                });
            }
            (Some(_), None, Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_LNG,
                    second: ARG_PLACE,
                });
            }
            (Some(name), None, None) => Target::Place(name),
            (None, lat, lng) => Target::Coordinates {
                latitude: required(lat, ARG_LAT, ENV_SCORE_LAT)?,
                longitude: required(lng, ARG_LNG, ENV_SCORE_LNG)?,
            },
        };
        let factors = FactorOverrides {
            night: args.night_factor,
            evening: args.evening_factor,
            day: args.day_factor,
        };
        Ok(Self {
            target,
            gazetteer: args.gazetteer,
            geocode_timeout: args
                .geocode_timeout_ms
                .map_or(DEFAULT_GEOCODE_TIMEOUT, Duration::from_millis),
            engine: EngineSettings::new(args.hazards, factors, args.hour)?,
        })
    }
}

pub(crate) fn run_score(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let geocoder = gazetteer(config.gazetteer.as_deref())?;
    let result = execute_score(&config, &geocoder)?;
    write_json(writer, &result)
}

pub(crate) fn execute_score(
    config: &ScoreConfig,
    geocoder: &dyn Geocoder,
) -> Result<ScoreResult, CliError> {
    let engine = config.engine.build_engine()?;
    let at = config.engine.timestamp()?;
    let location = match &config.target {
        Target::Coordinates {
            latitude,
            longitude,
        } => coordinate(*latitude, *longitude)?,
        Target::Place(name) => {
            let resolved = geocoder.geocode(name, config.geocode_timeout)?;
            debug!("resolved '{name}' to {resolved}");
            resolved
        }
    };
    Ok(engine.score_at(location, &at)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
