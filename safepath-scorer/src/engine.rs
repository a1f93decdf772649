//! Composite safety scoring for a single coordinate.

use chrono::NaiveDateTime;
use log::debug;
use safepath_core::{
    Coordinate, HazardPoint, HazardStore, SafetyError, SafetyLevel, ScoreResult,
};
use thiserror::Error;

use crate::advice::recommendations;
use crate::proximity::ProximityRiskModel;
use crate::temporal::{TemporalRiskModel, TimeRiskTable, now};

/// Upper bound of the safety scale.
pub const MAX_SAFETY_SCORE: f64 = 100.0;

/// A scoring step produced `NaN` or an infinity.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{quantity} evaluated to non-finite value {value}")]
pub struct NonFiniteValue {
    /// Which intermediate quantity went wrong.
    pub quantity: &'static str,
    /// The offending value.
    pub value: f64,
}

/// Combine crime risk and a time factor into a `0..=100` safety score.
///
/// `100 - crime_risk * 100` is divided (not multiplied) by `time_risk`, so
/// riskier hours pull the score down. The caller guarantees
/// `time_risk > 0`.
///
/// # Examples
/// ```
/// use safepath_scorer::safety_score;
///
/// assert_eq!(safety_score(0.9, 0.8), 12.5);
/// assert_eq!(safety_score(0.09, 0.8), 100.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the safety formula is defined over floating-point values"
)]
#[must_use]
pub fn safety_score(crime_risk: f64, time_risk: f64) -> f64 {
    let base_safety = MAX_SAFETY_SCORE - crime_risk * MAX_SAFETY_SCORE;
    (base_safety / time_risk).clamp(0.0, MAX_SAFETY_SCORE)
}

/// Scores coordinates against a hazard dataset and a time-risk table.
///
/// The engine holds no mutable state; share one instance (for example
/// behind an `Arc`) across every request and thread.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use safepath_core::{Coordinate, MemoryHazardStore, SafetyLevel};
/// use safepath_scorer::SafetyScoreEngine;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let engine = SafetyScoreEngine::with_default_table(MemoryHazardStore::default());
/// let noon = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .and_then(|d| d.and_hms_opt(12, 0, 0))
///     .ok_or("bad timestamp")?;
/// let result = engine.score(Coordinate::new(10.0, 10.0)?, Some(noon))?;
/// assert_eq!(result.crime_risk, 0.3);
/// assert_eq!(result.safety_level, SafetyLevel::Safe);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SafetyScoreEngine<S> {
    proximity: ProximityRiskModel<S>,
    temporal: TemporalRiskModel,
}

impl<S: HazardStore> SafetyScoreEngine<S> {
    /// Build an engine over `store` using `table` for time-of-day factors.
    ///
    /// # Errors
    /// Returns [`SafetyError::Configuration`] when the table contains a
    /// zero, negative, or non-finite factor.
    pub fn new(store: S, table: TimeRiskTable) -> Result<Self, SafetyError> {
        Ok(Self {
            proximity: ProximityRiskModel::new(store),
            temporal: TemporalRiskModel::new(table)?,
        })
    }

    /// Build an engine with the default night/evening/day factors.
    #[must_use]
    pub fn with_default_table(store: S) -> Self {
        Self {
            proximity: ProximityRiskModel::new(store),
            temporal: TemporalRiskModel::default(),
        }
    }

    /// Proximity model backing this engine.
    #[must_use]
    pub const fn proximity(&self) -> &ProximityRiskModel<S> {
        &self.proximity
    }

    /// Temporal model backing this engine.
    #[must_use]
    pub const fn temporal(&self) -> &TemporalRiskModel {
        &self.temporal
    }

    /// Score `coordinate` at `at`, or at the current local time when `None`.
    ///
    /// # Errors
    /// Returns [`SafetyError::Computation`] when an intermediate value is
    /// not finite.
    pub fn score(
        &self,
        coordinate: Coordinate,
        at: Option<NaiveDateTime>,
    ) -> Result<ScoreResult, SafetyError> {
        let timestamp = at.unwrap_or_else(now);
        self.score_at(coordinate, &timestamp)
    }

    /// Validate raw degrees and score them.
    ///
    /// # Errors
    /// Returns [`SafetyError::InvalidCoordinate`] for out-of-range input and
    /// otherwise the errors of [`Self::score`].
    pub fn score_lat_lng(
        &self,
        latitude: f64,
        longitude: f64,
        at: Option<NaiveDateTime>,
    ) -> Result<ScoreResult, SafetyError> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        self.score(coordinate, at)
    }

    /// Score `coordinate` at an explicit timestamp.
    ///
    /// # Errors
    /// Returns [`SafetyError::Computation`] when an intermediate value is
    /// not finite.
    pub fn score_at(
        &self,
        coordinate: Coordinate,
        at: &NaiveDateTime,
    ) -> Result<ScoreResult, SafetyError> {
        let crime_risk = finite("crime risk", self.proximity.risk(&coordinate))?;
        let time_risk = self.temporal.factor(at);
        let score = finite("safety score", safety_score(crime_risk, time_risk))?;
        debug!(
            "scored {coordinate} at {at}: crime risk {crime_risk:.3}, time factor {time_risk}, \
             safety {score:.2}"
        );
        Ok(ScoreResult {
            coordinate,
            safety_score: score,
            safety_level: SafetyLevel::from_score(score),
            crime_risk,
            time_risk_factor: time_risk,
            nearby_incidents: self.proximity.nearby_incidents(&coordinate),
            recommendations: recommendations(score, time_risk),
        })
    }

    /// Hazards no farther than `radius_km` from `center`, closest first.
    #[must_use]
    pub fn hazards_within(&self, center: &Coordinate, radius_km: f64) -> Vec<HazardPoint> {
        self.proximity.hazards_within(center, radius_km)
    }

    /// Number of hazards loaded.
    #[must_use]
    pub fn hazard_count(&self) -> usize {
        self.proximity.store().len()
    }
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, SafetyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SafetyError::computation(NonFiniteValue { quantity, value }))
    }
}
