//! `status` command: a health check over the configured dataset.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use safepath_scorer::SafetyScoreEngine;
use serde::{Deserialize, Serialize};

use crate::dataset::{HazardSource, write_json};
use crate::{ARG_HAZARDS, CliError};

/// CLI arguments for the `status` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Check that the hazard dataset loads")]
#[ortho_config(prefix = "SAFEPATH")]
pub(crate) struct StatusArgs {
    /// JSON hazard dataset; the built-in sample is used when omitted.
    #[arg(long = ARG_HAZARDS, value_name = "path")]
    #[serde(default)]
    pub(crate) hazards: Option<Utf8PathBuf>,
}

impl StatusArgs {
    pub(crate) fn into_config(self) -> Result<HazardSource, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(HazardSource::from(merged))
    }
}

impl From<StatusArgs> for HazardSource {
    fn from(args: StatusArgs) -> Self {
        Self::from_option(args.hazards)
    }
}

/// JSON body printed by the `status` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct StatusReport {
    pub(crate) status: &'static str,
    pub(crate) source: String,
    pub(crate) hazards_loaded: usize,
}

pub(crate) fn run_status(args: StatusArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let source = args.into_config()?;
    let report = execute_status(&source)?;
    write_json(writer, &report)
}

pub(crate) fn execute_status(source: &HazardSource) -> Result<StatusReport, CliError> {
    let engine = SafetyScoreEngine::with_default_table(source.load()?);
    Ok(StatusReport {
        status: "ok",
        source: source.to_string(),
        hazards_loaded: engine.hazard_count(),
    })
}
