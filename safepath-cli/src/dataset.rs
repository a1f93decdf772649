//! Shared plumbing for the CLI commands: dataset selection, engine
//! construction, timestamps, and JSON output.

use std::fmt;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDateTime;
use log::{debug, info};
use safepath_core::{
    Coordinate, Gazetteer, HazardStore, MemoryHazardStore, SafetyError, load_gazetteer, load_hazards,
};
use safepath_scorer::{SafetyScoreEngine, TimeRiskTable, now};
use serde::Serialize;

use crate::{ARG_GAZETTEER, ARG_HAZARDS, CliError};

/// Engine type every command runs against.
pub(crate) type Engine = SafetyScoreEngine<MemoryHazardStore>;

/// Where hazards are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HazardSource {
    /// The built-in sample dataset.
    Sample,
    /// A JSON dataset on disk.
    File(Utf8PathBuf),
}

impl HazardSource {
    pub(crate) fn from_option(path: Option<Utf8PathBuf>) -> Self {
        path.map_or(Self::Sample, Self::File)
    }

    pub(crate) fn load(&self) -> Result<MemoryHazardStore, CliError> {
        match self {
            Self::Sample => {
                info!("no hazard dataset configured; using the built-in sample");
                Ok(MemoryHazardStore::sample())
            }
            Self::File(path) => load_hazards(path).map_err(|source| CliError::LoadDataset {
                field: ARG_HAZARDS,
                source,
            }),
        }
    }
}

impl fmt::Display for HazardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample => f.write_str("built-in sample"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

/// Optional overrides for the default time-risk factors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct FactorOverrides {
    pub(crate) night: Option<f64>,
    pub(crate) evening: Option<f64>,
    pub(crate) day: Option<f64>,
}

impl FactorOverrides {
    /// Apply the overrides on top of the default table. Validation happens
    /// when the engine is built.
    pub(crate) fn table(self) -> TimeRiskTable {
        let defaults = TimeRiskTable::default();
        TimeRiskTable {
            night: self.night.unwrap_or(defaults.night),
            evening: self.evening.unwrap_or(defaults.evening),
            day: self.day.unwrap_or(defaults.day),
        }
    }
}

/// Resolved settings for building a scoring engine.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EngineSettings {
    pub(crate) hazards: HazardSource,
    pub(crate) table: TimeRiskTable,
    pub(crate) hour: Option<u32>,
}

impl EngineSettings {
    pub(crate) fn new(
        hazards: Option<Utf8PathBuf>,
        factors: FactorOverrides,
        hour: Option<u32>,
    ) -> Result<Self, CliError> {
        Ok(Self {
            hazards: HazardSource::from_option(hazards),
            table: factors.table(),
            hour: check_hour(hour)?,
        })
    }

    pub(crate) fn build_engine(&self) -> Result<Engine, CliError> {
        let store = self.hazards.load()?;
        debug!("scoring against {} hazards from {}", store.len(), self.hazards);
        Ok(SafetyScoreEngine::new(store, self.table)?)
    }

    /// The instant every score in one command is evaluated at: today at
    /// the configured hour, or now.
    pub(crate) fn timestamp(&self) -> Result<NaiveDateTime, CliError> {
        let current = now();
        self.hour.map_or(Ok(current), |hour| {
            current
                .date()
                .and_hms_opt(hour, 0, 0)
                .ok_or(CliError::InvalidHour { hour })
        })
    }
}

pub(crate) const fn check_hour(hour: Option<u32>) -> Result<Option<u32>, CliError> {
    match hour {
        Some(invalid) if invalid > 23 => Err(CliError::InvalidHour { hour: invalid }),
        other => Ok(other),
    }
}

/// Pull a required option out of the merged configuration.
pub(crate) fn required<T>(
    value: Option<T>,
    field: &'static str,
    env: &'static str,
) -> Result<T, CliError> {
    value.ok_or(CliError::MissingArgument { field, env })
}

pub(crate) fn coordinate(latitude: f64, longitude: f64) -> Result<Coordinate, CliError> {
    Coordinate::new(latitude, longitude)
        .map_err(SafetyError::from)
        .map_err(CliError::from)
}

/// Load the configured gazetteer, or an empty one when none is set.
pub(crate) fn gazetteer(path: Option<&Utf8Path>) -> Result<Gazetteer, CliError> {
    path.map_or_else(
        || Ok(Gazetteer::new()),
        |file| {
            load_gazetteer(file).map_err(|source| CliError::LoadDataset {
                field: ARG_GAZETTEER,
                source,
            })
        },
    )
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
