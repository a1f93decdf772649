//! `hazards` command: hazards within a radius of a coordinate.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use safepath_core::{Coordinate, HazardPoint};
use safepath_scorer::SafetyScoreEngine;
use safepath_scorer::proximity::NEARBY_RADIUS_KM;
use serde::{Deserialize, Serialize};

use crate::dataset::{HazardSource, coordinate, required, write_json};
use crate::{
    ARG_HAZARDS, ARG_LAT, ARG_LNG, ARG_RADIUS_KM, CliError, ENV_HAZARDS_LAT, ENV_HAZARDS_LNG,
};

/// CLI arguments for the `hazards` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    about = "List hazards near a coordinate, closest first",
    allow_negative_numbers = true
)]
#[ortho_config(prefix = "SAFEPATH")]
pub(crate) struct HazardsArgs {
    /// Latitude of the search centre in decimal degrees.
    #[arg(long = ARG_LAT, value_name = "degrees")]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the search centre in decimal degrees.
    #[arg(long = ARG_LNG, value_name = "degrees")]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Search radius in kilometres (inclusive). Defaults to 1 km.
    #[arg(long = ARG_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) radius_km: Option<f64>,
    /// JSON hazard dataset; the built-in sample is used when omitted.
    #[arg(long = ARG_HAZARDS, value_name = "path")]
    #[serde(default)]
    pub(crate) hazards: Option<Utf8PathBuf>,
}

impl HazardsArgs {
    pub(crate) fn into_config(self) -> Result<HazardsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        HazardsConfig::try_from(merged)
    }
}

/// Resolved `hazards` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HazardsConfig {
    pub(crate) center: (f64, f64),
    pub(crate) radius_km: f64,
    pub(crate) hazards: HazardSource,
}

impl TryFrom<HazardsArgs> for HazardsConfig {
    type Error = CliError;

    fn try_from(args: HazardsArgs) -> Result<Self, Self::Error> {
        let center = (
            required(args.lat, ARG_LAT, ENV_HAZARDS_LAT)?,
            required(args.lng, ARG_LNG, ENV_HAZARDS_LNG)?,
        );
        let radius_km = args.radius_km.unwrap_or(NEARBY_RADIUS_KM);
        if !(radius_km.is_finite() && radius_km >= 0.0) {
            return Err(CliError::InvalidRadius { radius_km });
        }
        Ok(Self {
            center,
            radius_km,
            hazards: HazardSource::from_option(args.hazards),
        })
    }
}

/// JSON body printed by the `hazards` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct HazardsReport {
    pub(crate) center: Coordinate,
    pub(crate) radius_km: f64,
    pub(crate) count: usize,
    pub(crate) hazards: Vec<HazardPoint>,
}

pub(crate) fn run_hazards(args: HazardsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_hazards(&config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_hazards(config: &HazardsConfig) -> Result<HazardsReport, CliError> {
    let center = coordinate(config.center.0, config.center.1)?;
    let engine = SafetyScoreEngine::with_default_table(config.hazards.load()?);
    let hazards = engine.hazards_within(&center, config.radius_km);
    Ok(HazardsReport {
        center,
        radius_km: config.radius_km,
        count: hazards.len(),
        hazards,
    })
}
