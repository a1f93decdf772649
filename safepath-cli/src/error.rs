//! Error types emitted by the safepath CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use safepath_core::{DatasetError, GeocodeError, SafetyError};
use thiserror::Error;

/// Errors emitted by the safepath CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Two options that select the same input were both supplied.
    #[error("--{first} cannot be combined with --{second}")]
    ConflictingArguments {
        /// Option that was given first in the flag table.
        first: &'static str,
        /// Option it conflicts with.
        second: &'static str,
    },
    /// The hour override lies outside `0..=23`.
    #[error("hour {hour} is out of range (expected 0 to 23)")]
    InvalidHour {
        /// Rejected hour.
        hour: u32,
    },
    /// The search radius is negative or not finite.
    #[error("radius {radius_km} km must be a finite, non-negative number")]
    InvalidRadius {
        /// Rejected radius in kilometres.
        radius_km: f64,
    },
    /// Loading a JSON dataset failed.
    #[error("failed to load {field} dataset: {source}")]
    LoadDataset {
        /// Option naming the dataset.
        field: &'static str,
        /// Loader failure.
        #[source]
        source: DatasetError,
    },
    /// A place name could not be resolved.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
    /// The scoring engine rejected the request.
    #[error(transparent)]
    Safety(#[from] SafetyError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
