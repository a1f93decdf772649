//! Recommendations and route warnings derived from score thresholds.

use safepath_core::safety::SAFE_THRESHOLD;
use safepath_core::{Recommendation, RouteWarning, Waypoint};

/// Scores below this trigger high-risk advice and route warnings.
pub const LOW_SAFETY_SCORE: f64 = 50.0;
/// Time-risk factors above this trigger time-of-day advice.
pub const HIGH_RISK_TIME_FACTOR: f64 = 1.3;

/// Advice for a location with `safety_score` at time factor `time_risk`.
///
/// The three rules are evaluated independently and every rule that applies
/// contributes, in the order: low score, risky time, safe area.
///
/// # Examples
/// ```
/// use safepath_core::Recommendation;
/// use safepath_scorer::recommendations;
///
/// let advice = recommendations(85.0, 1.5);
/// assert_eq!(
///     advice,
///     vec![
///         Recommendation::HighRiskTime,
///         Recommendation::TrustedTransport,
///         Recommendation::GenerallySafe,
///         Recommendation::StayAware,
///     ]
/// );
/// ```
#[must_use]
pub fn recommendations(safety_score: f64, time_risk: f64) -> Vec<Recommendation> {
    let mut advice = Vec::new();
    if safety_score < LOW_SAFETY_SCORE {
        advice.extend([
            Recommendation::AvoidArea,
            Recommendation::ShareLocation,
            Recommendation::TravelInGroups,
        ]);
    }
    if time_risk > HIGH_RISK_TIME_FACTOR {
        advice.extend([
            Recommendation::HighRiskTime,
            Recommendation::TrustedTransport,
        ]);
    }
    if safety_score >= SAFE_THRESHOLD {
        advice.extend([Recommendation::GenerallySafe, Recommendation::StayAware]);
    }
    advice
}

/// One warning per waypoint scoring below [`LOW_SAFETY_SCORE`], numbered
/// from 1.
///
/// Scores are compared at two decimal places, so 49.996 is not flagged.
#[must_use]
pub fn route_warnings(waypoints: &[Waypoint]) -> Vec<RouteWarning> {
    waypoints
        .iter()
        .enumerate()
        .filter(|(_, waypoint)| is_low(waypoint.safety_score))
        .map(|(index, waypoint)| RouteWarning {
            waypoint: index + 1,
            safety_score: waypoint.safety_score,
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "scores are compared in hundredths"
)]
fn is_low(safety_score: f64) -> bool {
    (safety_score * 100.0).round() < LOW_SAFETY_SCORE * 100.0
}
