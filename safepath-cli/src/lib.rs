//! Command-line interface for the safepath scoring engine.
//!
//! Every subcommand layers its options from CLI flags, configuration files,
//! and `SAFEPATH_*` environment variables, builds one engine over the
//! configured hazard dataset, and prints its result as pretty JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod dataset;
mod error;
mod hazards;
mod route;
mod score;
mod status;

pub use error::CliError;

use hazards::HazardsArgs;
use route::RouteArgs;
use score::ScoreArgs;
use status::StatusArgs;

pub(crate) const ARG_HAZARDS: &str = "hazards";
pub(crate) const ARG_GAZETTEER: &str = "gazetteer";
pub(crate) const ARG_NIGHT_FACTOR: &str = "night-factor";
pub(crate) const ARG_EVENING_FACTOR: &str = "evening-factor";
pub(crate) const ARG_DAY_FACTOR: &str = "day-factor";
pub(crate) const ARG_HOUR: &str = "hour";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_PLACE: &str = "place";
pub(crate) const ARG_GEOCODE_TIMEOUT_MS: &str = "geocode-timeout-ms";
pub(crate) const ARG_FROM_LAT: &str = "from-lat";
pub(crate) const ARG_FROM_LNG: &str = "from-lng";
pub(crate) const ARG_TO_LAT: &str = "to-lat";
pub(crate) const ARG_TO_LNG: &str = "to-lng";
pub(crate) const ARG_RADIUS_KM: &str = "radius-km";

pub(crate) const ENV_SCORE_LAT: &str = "SAFEPATH_CMDS_SCORE_LAT";
pub(crate) const ENV_SCORE_LNG: &str = "SAFEPATH_CMDS_SCORE_LNG";
pub(crate) const ENV_ROUTE_FROM_LAT: &str = "SAFEPATH_CMDS_ROUTE_FROM_LAT";
pub(crate) const ENV_ROUTE_FROM_LNG: &str = "SAFEPATH_CMDS_ROUTE_FROM_LNG";
pub(crate) const ENV_ROUTE_TO_LAT: &str = "SAFEPATH_CMDS_ROUTE_TO_LAT";
pub(crate) const ENV_ROUTE_TO_LNG: &str = "SAFEPATH_CMDS_ROUTE_TO_LNG";
pub(crate) const ENV_HAZARDS_LAT: &str = "SAFEPATH_CMDS_HAZARDS_LAT";
pub(crate) const ENV_HAZARDS_LNG: &str = "SAFEPATH_CMDS_HAZARDS_LNG";

/// Run the safepath CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when parsing, configuration layering, dataset
/// loading, scoring, or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Score(args) => score::run_score(args, &mut stdout),
        Command::Route(args) => route::run_route(args, &mut stdout),
        Command::Hazards(args) => hazards::run_hazards(args, &mut stdout),
        Command::Status(args) => status::run_status(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "safepath",
    about = "Score the safety of locations and routes against known hazards",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single coordinate or named place.
    Score(ScoreArgs),
    /// Score waypoints along a straight route between two coordinates.
    Route(RouteArgs),
    /// List hazards within a radius of a coordinate.
    Hazards(HazardsArgs),
    /// Report how many hazards the configured dataset holds.
    Status(StatusArgs),
}

#[cfg(test)]
mod tests;
