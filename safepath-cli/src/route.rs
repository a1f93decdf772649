//! `route` command: safety along a straight route.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use safepath_core::RouteResult;
use safepath_scorer::RouteEvaluator;
use serde::{Deserialize, Serialize};

use crate::dataset::{EngineSettings, FactorOverrides, coordinate, required, write_json};
use crate::{
    ARG_DAY_FACTOR, ARG_EVENING_FACTOR, ARG_FROM_LAT, ARG_FROM_LNG, ARG_HAZARDS, ARG_HOUR,
    ARG_NIGHT_FACTOR, ARG_TO_LAT, ARG_TO_LNG, CliError, ENV_ROUTE_FROM_LAT, ENV_ROUTE_FROM_LNG,
    ENV_ROUTE_TO_LAT, ENV_ROUTE_TO_LNG,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Sample waypoints on the straight line between two \
                 coordinates, score each one, and report the average, the \
                 minimum, and a warning for every low-safety waypoint.",
    about = "Score a route between two coordinates",
    allow_negative_numbers = true
)]
#[ortho_config(prefix = "SAFEPATH")]
pub(crate) struct RouteArgs {
    /// Start latitude in decimal degrees.
    #[arg(long = ARG_FROM_LAT, value_name = "degrees")]
    #[serde(default)]
    pub(crate) from_lat: Option<f64>,
    /// Start longitude in decimal degrees.
    #[arg(long = ARG_FROM_LNG, value_name = "degrees")]
    #[serde(default)]
    pub(crate) from_lng: Option<f64>,
    /// End latitude in decimal degrees.
    #[arg(long = ARG_TO_LAT, value_name = "degrees")]
    #[serde(default)]
    pub(crate) to_lat: Option<f64>,
    /// End longitude in decimal degrees.
    #[arg(long = ARG_TO_LNG, value_name = "degrees")]
    #[serde(default)]
    pub(crate) to_lng: Option<f64>,
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

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    /// Start as raw `(latitude, longitude)` degrees.
    pub(crate) from: (f64, f64),
    /// End as raw `(latitude, longitude)` degrees.
    pub(crate) to: (f64, f64),
    pub(crate) engine: EngineSettings,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let from = (
            required(args.from_lat, ARG_FROM_LAT, ENV_ROUTE_FROM_LAT)?,
            required(args.from_lng, ARG_FROM_LNG, ENV_ROUTE_FROM_LNG)?,
        );
        let to = (
            required(args.to_lat, ARG_TO_LAT, ENV_ROUTE_TO_LAT)?,
            required(args.to_lng, ARG_TO_LNG, ENV_ROUTE_TO_LNG)?,
        );
        let factors = FactorOverrides {
            night: args.night_factor,
            evening: args.evening_factor,
            day: args.day_factor,
        };
        Ok(Self {
            from,
            to,
            engine: EngineSettings::new(args.hazards, factors, args.hour)?,
        })
    }
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let route = execute_route(&config)?;
    write_json(writer, &route)
}

pub(crate) fn execute_route(config: &RouteConfig) -> Result<RouteResult, CliError> {
    let start = coordinate(config.from.0, config.from.1)?;
    let end = coordinate(config.to.0, config.to.1)?;
    let engine = config.engine.build_engine()?;
    let at = config.engine.timestamp()?;
    Ok(RouteEvaluator::new(&engine).evaluate_route_at(start, end, &at)?)
}
