//! Core domain types for the safepath engine.
//!
//! The crate defines validated coordinates and hazard points, the read-only
//! [`HazardStore`] data source, the result types produced by the scorer, and
//! the adapter traits for the geocoding and notification collaborators that
//! sit outside the scoring core.
//!
//! Constructors return `Result` so invalid input surfaces before any scoring
//! maths runs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coordinate;
pub mod error;
pub mod geocode;
pub mod hazard;
pub mod notify;
pub mod safety;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use error::SafetyError;
pub use geocode::{Gazetteer, GeocodeError, Geocoder};
pub use hazard::{HazardPoint, HazardPointError, Severity};
pub use notify::{DeliveryStatus, Notifier};
pub use safety::{
    IncidentSummary, Recommendation, RouteResult, RouteWarning, SafetyLevel, ScoreResult,
    Waypoint,
};
pub use store::{HazardStore, MemoryHazardStore, sample_hazards};

#[cfg(feature = "store-json")]
pub use geocode::load_gazetteer;
#[cfg(feature = "store-json")]
pub use store::{DatasetError, load_hazards, parse_hazards};
