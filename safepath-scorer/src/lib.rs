//! Location and route safety scoring.
//!
//! [`SafetyScoreEngine`] combines two independent signals into a `0..=100`
//! safety score:
//! - **Crime risk** from [`ProximityRiskModel`], the strongest distance-decayed
//!   contribution of any hazard in a [`HazardStore`](safepath_core::HazardStore).
//! - **Time risk** from [`TemporalRiskModel`], a multiplier chosen by the
//!   hour of day.
//!
//! [`RouteEvaluator`] samples waypoints along a straight line between two
//! coordinates and aggregates their scores.
//!
//! # Examples
//!
//! ```
//! use safepath_core::{Coordinate, MemoryHazardStore};
//! use safepath_scorer::{RouteEvaluator, SafetyScoreEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = SafetyScoreEngine::with_default_table(MemoryHazardStore::sample());
//! let india_gate = Coordinate::new(28.6129, 77.2295)?;
//! let here = engine.score(india_gate, None)?;
//! assert!((0.0..=100.0).contains(&here.safety_score));
//!
//! let route = RouteEvaluator::new(&engine)
//!     .evaluate_route(india_gate, Coordinate::new(28.6562, 77.2410)?)?;
//! assert!(route.minimum_safety_score <= route.average_safety_score);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod advice;
mod engine;
pub mod proximity;
mod route;
mod temporal;

pub use advice::{HIGH_RISK_TIME_FACTOR, LOW_SAFETY_SCORE, recommendations, route_warnings};
pub use engine::{MAX_SAFETY_SCORE, NonFiniteValue, SafetyScoreEngine, safety_score};
pub use proximity::ProximityRiskModel;
pub use route::{MIN_SEGMENTS, RouteEvaluator, SEGMENTS_PER_KM, sample_positions, segment_count};
pub use temporal::{TemporalRiskModel, TimeBucket, TimeRiskTable, now};
