//! Facade crate for the safepath location-safety engine.
//!
//! This crate re-exports the core domain types together with the scoring
//! engine and route evaluator. JSON dataset loading is available behind the
//! `store-json` feature.
//!
//! # Examples
//!
//! ```
//! use safepath_engine::{Coordinate, MemoryHazardStore, SafetyScoreEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = SafetyScoreEngine::with_default_table(MemoryHazardStore::sample());
//! assert_eq!(engine.hazard_count(), 4);
//! let result = engine.score_lat_lng(28.6139, 77.2090, None)?;
//! assert!(result.crime_risk >= 0.8);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use safepath_core::{
    Coordinate, DeliveryStatus, Gazetteer, GeocodeError, Geocoder, HazardPoint, HazardPointError,
    HazardStore, IncidentSummary, InvalidCoordinate, MemoryHazardStore, Notifier, Recommendation,
    RouteResult, RouteWarning, SafetyError, SafetyLevel, ScoreResult, Severity, Waypoint,
    sample_hazards,
};

#[cfg(feature = "store-json")]
pub use safepath_core::{DatasetError, load_gazetteer, load_hazards, parse_hazards};

pub use safepath_scorer::{
    RouteEvaluator, SafetyScoreEngine, TemporalRiskModel, TimeBucket, TimeRiskTable,
};

#[cfg(feature = "test-support")]
pub use safepath_core::test_support;
