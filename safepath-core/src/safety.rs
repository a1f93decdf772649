//! Result types produced by the scoring engine.
//!
//! Every value here is computed fresh per request and never persisted.
//! [`Recommendation`] and [`RouteWarning`] are typed, but render (via
//! `Display` and, with the `serde` feature, serialization) as the
//! human-readable strings handed to end users.

use crate::{Coordinate, Severity};

/// Lower bound (inclusive) of the [`SafetyLevel::Safe`] bracket.
pub const SAFE_THRESHOLD: f64 = 80.0;
/// Lower bound (inclusive) of the [`SafetyLevel::Moderate`] bracket.
pub const MODERATE_THRESHOLD: f64 = 60.0;
/// Lower bound (inclusive) of the [`SafetyLevel::Caution`] bracket.
pub const CAUTION_THRESHOLD: f64 = 40.0;

/// Categorical safety classification of a score.
///
/// # Examples
/// ```
/// use safepath_core::SafetyLevel;
///
/// assert_eq!(SafetyLevel::from_score(80.0), SafetyLevel::Safe);
/// assert_eq!(SafetyLevel::from_score(79.99), SafetyLevel::Moderate);
/// assert_eq!(SafetyLevel::from_score(12.5), SafetyLevel::Unsafe);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SafetyLevel {
    /// Score of at least 80.
    Safe,
    /// Score in `[60, 80)`.
    Moderate,
    /// Score in `[40, 60)`.
    Caution,
    /// Score below 40.
    Unsafe,
}

impl SafetyLevel {
    /// Classify a safety score. Lower bounds are inclusive.
    ///
    /// The brackets are exhaustive: anything that is not at least 40
    /// (including `NaN`) is [`SafetyLevel::Unsafe`].
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= SAFE_THRESHOLD {
            Self::Safe
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else if score >= CAUTION_THRESHOLD {
            Self::Caution
        } else {
            Self::Unsafe
        }
    }

    /// Return the level as an uppercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Moderate => "MODERATE",
            Self::Caution => "CAUTION",
            Self::Unsafe => "UNSAFE",
        }
    }
}

impl std::fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hazard seen from a query coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IncidentSummary {
    /// Incident category of the hazard.
    pub category: String,
    /// Severity bucket of the hazard.
    pub severity: Severity,
    /// Distance from the query coordinate in kilometres.
    pub distance_km: f64,
}

/// Advice attached to a [`ScoreResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Score below 50.
    AvoidArea,
    /// Score below 50.
    ShareLocation,
    /// Score below 50.
    TravelInGroups,
    /// Time-risk factor above 1.3.
    HighRiskTime,
    /// Time-risk factor above 1.3.
    TrustedTransport,
    /// Score of at least 80.
    GenerallySafe,
    /// Score of at least 80.
    StayAware,
}

impl Recommendation {
    /// Human-readable advice.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AvoidArea => "High risk area - avoid if possible",
            Self::ShareLocation => "Share your location with trusted contacts",
            Self::TravelInGroups => "Travel in groups",
            Self::HighRiskTime => "High-risk time period - extra caution advised",
            Self::TrustedTransport => "Consider using trusted transportation",
            Self::GenerallySafe => "Generally safe area",
            Self::StayAware => "Stay aware of surroundings",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Recommendation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Safety assessment of a single coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreResult {
    /// Query coordinate.
    pub coordinate: Coordinate,
    /// Safety score in `[0, 100]`; higher is safer.
    pub safety_score: f64,
    /// Classification of `safety_score`.
    pub safety_level: SafetyLevel,
    /// Proximity-derived crime risk in `[0, 1]`.
    pub crime_risk: f64,
    /// Time-of-day multiplier applied to the score.
    pub time_risk_factor: f64,
    /// Hazards within 1 km, closest first, at most five.
    pub nearby_incidents: Vec<IncidentSummary>,
    /// Advice derived from the score and time factor.
    pub recommendations: Vec<Recommendation>,
}

/// One sampled point along a route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Waypoint {
    /// Interpolated position.
    pub coordinate: Coordinate,
    /// Safety score of the position.
    pub safety_score: f64,
}

/// A low-safety waypoint flagged on a route.
///
/// # Examples
/// ```
/// use safepath_core::RouteWarning;
///
/// let warning = RouteWarning { waypoint: 2, safety_score: 45.04 };
/// assert_eq!(warning.to_string(), "Low safety zone at waypoint 2 (score: 45.0)");
///
/// let borderline = RouteWarning { waypoint: 1, safety_score: 49.98 };
/// assert_eq!(borderline.to_string(), "Low safety zone at waypoint 1 (score: 49.9)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteWarning {
    /// 1-based index of the waypoint.
    pub waypoint: usize,
    /// Score of the waypoint.
    pub safety_score: f64,
}

impl std::fmt::Display for RouteWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Hundredths first, then truncate, so a score under 50 never prints as 50.0.
        let hundredths = (self.safety_score * 100.0).round();
        let tenths = (hundredths / 10.0).floor() / 10.0;
        write!(
            f,
            "Low safety zone at waypoint {} (score: {tenths:.1})",
            self.waypoint
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RouteWarning {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Safety assessment of a straight-line route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteResult {
    /// Route origin.
    pub start: Coordinate,
    /// Route destination.
    pub end: Coordinate,
    /// Great-circle distance between `start` and `end` in kilometres.
    pub distance_km: f64,
    /// Sampled positions in travel order, endpoints included.
    pub waypoints: Vec<Waypoint>,
    /// Mean waypoint score.
    pub average_safety_score: f64,
    /// Lowest waypoint score.
    pub minimum_safety_score: f64,
    /// Classification of `average_safety_score`.
    pub overall_route_safety: SafetyLevel,
    /// One entry per waypoint scoring below 50.
    pub warnings: Vec<RouteWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, SafetyLevel::Safe)]
    #[case(80.0, SafetyLevel::Safe)]
    #[case(79.999, SafetyLevel::Moderate)]
    #[case(60.0, SafetyLevel::Moderate)]
    #[case(59.999, SafetyLevel::Caution)]
    #[case(40.0, SafetyLevel::Caution)]
    #[case(39.999, SafetyLevel::Unsafe)]
    #[case(0.0, SafetyLevel::Unsafe)]
    fn classifies_with_inclusive_lower_bounds(#[case] score: f64, #[case] expected: SafetyLevel) {
        assert_eq!(SafetyLevel::from_score(score), expected);
    }

    #[test]
    fn nan_is_unsafe() {
        assert_eq!(SafetyLevel::from_score(f64::NAN), SafetyLevel::Unsafe);
    }

    #[test]
    fn recommendation_display_matches_message() {
        assert_eq!(
            Recommendation::TravelInGroups.to_string(),
            Recommendation::TravelInGroups.message()
        );
    }

    #[rstest]
    #[case(45.0, "45.0")]
    #[case(44.999_999_999_999_99, "45.0")]
    #[case(12.34, "12.3")]
    #[case(49.94, "49.9")]
    #[case(49.99, "49.9")]
    fn warning_score_never_reads_as_threshold(#[case] safety_score: f64, #[case] shown: &str) {
        let warning = RouteWarning {
            waypoint: 1,
            safety_score,
        };
        assert_eq!(
            warning.to_string(),
            format!("Low safety zone at waypoint 1 (score: {shown})")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn strings_serialise_as_messages() {
        let json = serde_json::to_string(&(
            Recommendation::StayAware,
            RouteWarning {
                waypoint: 3,
                safety_score: 12.5,
            },
            SafetyLevel::Caution,
        ))
        .expect("serialise tuple");
        assert_eq!(
            json,
            r#"["Stay aware of surroundings","Low safety zone at waypoint 3 (score: 12.5)","CAUTION"]"#
        );
    }
}
