//! Safety along a straight-line route.
//!
//! The route is sampled by interpolating latitude and longitude linearly in
//! degree space. This is not a geodesic path, and routes crossing the
//! antimeridian take the long way round.

use chrono::NaiveDateTime;
use log::{debug, warn};
use safepath_core::{
    Coordinate, HazardStore, RouteResult, SafetyError, SafetyLevel, Waypoint,
};

use crate::advice::route_warnings;
use crate::engine::SafetyScoreEngine;
use crate::temporal::now;

/// Minimum number of route segments, whatever the distance.
pub const MIN_SEGMENTS: usize = 3;
/// Segments sampled per kilometre of route.
pub const SEGMENTS_PER_KM: f64 = 2.0;

/// Number of segments used to sample a route of `distance_km`.
///
/// The route is scored at `segment_count + 1` positions, endpoints included.
///
/// # Examples
/// ```
/// use safepath_scorer::segment_count;
///
/// assert_eq!(segment_count(0.0), 3);
/// assert_eq!(segment_count(1.0), 3);
/// assert_eq!(segment_count(2.4), 4);
/// assert_eq!(segment_count(10.0), 20);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "flooring a non-negative distance into a sample count"
)]
#[must_use]
pub fn segment_count(distance_km: f64) -> usize {
    let scaled = (distance_km * SEGMENTS_PER_KM).floor();
    // `as` saturates; NaN becomes 0 and falls back to the minimum.
    (scaled as usize).max(MIN_SEGMENTS)
}

/// Positions sampled between `start` and `end`, both included.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "sample indices are small enough to convert to f64 exactly"
)]
#[must_use]
pub fn sample_positions(start: &Coordinate, end: &Coordinate, segments: usize) -> Vec<Coordinate> {
    let total = segments.max(1) as f64;
    (0..=segments)
        .map(|i| start.lerp(end, i as f64 / total))
        .collect()
}

/// Scores routes by sampling waypoints through a [`SafetyScoreEngine`].
///
/// # Examples
/// ```
/// use safepath_core::{Coordinate, MemoryHazardStore};
/// use safepath_scorer::{RouteEvaluator, SafetyScoreEngine};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let engine = SafetyScoreEngine::with_default_table(MemoryHazardStore::default());
/// let evaluator = RouteEvaluator::new(&engine);
/// let here = Coordinate::new(28.61, 77.21)?;
/// let route = evaluator.evaluate_route(here, here)?;
/// assert_eq!(route.waypoints.len(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'e, S> {
    engine: &'e SafetyScoreEngine<S>,
}

impl<'e, S: HazardStore> RouteEvaluator<'e, S> {
    /// Evaluate routes with `engine`.
    #[must_use]
    pub const fn new(engine: &'e SafetyScoreEngine<S>) -> Self {
        Self { engine }
    }

    /// Evaluate the route from `start` to `end` at the current local time.
    ///
    /// One timestamp is captured up front and shared by every waypoint.
    ///
    /// # Errors
    /// Propagates any [`SafetyError`] raised while scoring a waypoint.
    pub fn evaluate_route(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<RouteResult, SafetyError> {
        self.evaluate_route_at(start, end, &now())
    }

    /// Validate raw degrees and evaluate the route at the current time.
    ///
    /// # Errors
    /// Returns [`SafetyError::InvalidCoordinate`] when any value is out of
    /// range, otherwise the errors of [`Self::evaluate_route`].
    pub fn evaluate_route_lat_lng(
        &self,
        start_lat: f64,
        start_lng: f64,
        end_lat: f64,
        end_lng: f64,
    ) -> Result<RouteResult, SafetyError> {
        let start = Coordinate::new(start_lat, start_lng)?;
        let end = Coordinate::new(end_lat, end_lng)?;
        self.evaluate_route(start, end)
    }

    /// Evaluate the route from `start` to `end` with every waypoint scored
    /// at `at`.
    ///
    /// # Errors
    /// Propagates any [`SafetyError`] raised while scoring a waypoint; no
    /// partial route is returned.
    pub fn evaluate_route_at(
        &self,
        start: Coordinate,
        end: Coordinate,
        at: &NaiveDateTime,
    ) -> Result<RouteResult, SafetyError> {
        let distance_km = start.distance_km(&end);
        let segments = segment_count(distance_km);
        let waypoints = sample_positions(&start, &end, segments)
            .into_iter()
            .map(|coordinate| {
                self.engine
                    .score_at(coordinate, at)
                    .map(|scored| Waypoint {
                        coordinate,
                        safety_score: scored.safety_score,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (average, minimum) = summarise(&waypoints);
        let warnings = route_warnings(&waypoints);
        debug!(
            "route {start} -> {end}: {distance_km:.2} km, {} waypoints, average {average:.2}",
            waypoints.len()
        );
        if !warnings.is_empty() {
            warn!(
                "route {start} -> {end} passes {} low-safety waypoint(s)",
                warnings.len()
            );
        }

        Ok(RouteResult {
            start,
            end,
            distance_km,
            waypoints,
            average_safety_score: average,
            minimum_safety_score: minimum,
            overall_route_safety: SafetyLevel::from_score(average),
            warnings,
        })
    }
}

/// Mean and minimum waypoint score. An empty slice summarises to zero.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging a short list of scores"
)]
fn summarise(waypoints: &[Waypoint]) -> (f64, f64) {
    if waypoints.is_empty() {
        return (0.0, 0.0);
    }
    let total: f64 = waypoints.iter().map(|w| w.safety_score).sum();
    let minimum = waypoints
        .iter()
        .map(|w| w.safety_score)
        .fold(f64::INFINITY, f64::min);
    (total / waypoints.len() as f64, minimum)
}
