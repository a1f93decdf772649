//! Hazard points: fixed locations tagged with an incident category and a
//! severity, used as a proxy for historical risk.

use thiserror::Error;

use crate::Coordinate;

/// Coarse severity bucket attached to a hazard.
///
/// # Examples
/// ```
/// use safepath_core::Severity;
///
/// assert_eq!(Severity::High.as_str(), "high");
/// assert_eq!("Medium".parse::<Severity>(), Ok(Severity::Medium));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Minor incidents such as vandalism.
    Low,
    /// Incidents such as harassment.
    Medium,
    /// Serious incidents such as assault or theft.
    High,
}

impl Severity {
    /// Return the severity as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown severity '{s}'")),
        }
    }
}

/// Errors returned by [`HazardPoint::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HazardPointError {
    /// The severity score was outside `(0, 1]` or not finite.
    #[error("severity score {score} must be greater than 0.0 and at most 1.0")]
    InvalidSeverityScore {
        /// Rejected score.
        score: f64,
    },
    /// The category label was empty or whitespace.
    #[error("hazard category must not be empty")]
    EmptyCategory,
}

/// A fixed hazard location.
///
/// Hazard points are immutable once constructed.
///
/// # Examples
/// ```
/// use safepath_core::{Coordinate, HazardPoint, Severity};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let hazard = HazardPoint::new(
///     Coordinate::new(28.6139, 77.209)?,
///     Severity::High,
///     0.8,
///     "theft",
/// )?;
/// assert_eq!(hazard.category(), "theft");
/// assert!(HazardPoint::new(hazard.location(), Severity::Low, 0.0, "noise").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HazardPoint {
    location: Coordinate,
    severity: Severity,
    severity_score: f64,
    category: String,
}

impl HazardPoint {
    /// Validate and construct a [`HazardPoint`].
    ///
    /// # Errors
    /// Returns [`HazardPointError::InvalidSeverityScore`] when the score is
    /// not in `(0, 1]`, and [`HazardPointError::EmptyCategory`] when the
    /// category is blank.
    pub fn new(
        location: Coordinate,
        severity: Severity,
        severity_score: f64,
        category: impl Into<String>,
    ) -> Result<Self, HazardPointError> {
        if !(severity_score > 0.0 && severity_score <= 1.0) {
            return Err(HazardPointError::InvalidSeverityScore {
                score: severity_score,
            });
        }
        let label = category.into();
        if label.trim().is_empty() {
            return Err(HazardPointError::EmptyCategory);
        }
        Ok(Self {
            location,
            severity,
            severity_score,
            category: label,
        })
    }

    /// Where the hazard is.
    #[must_use]
    pub const fn location(&self) -> Coordinate {
        self.location
    }

    /// Severity bucket.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Numeric severity in `(0, 1]`.
    #[must_use]
    pub const fn severity_score(&self) -> f64 {
        self.severity_score
    }

    /// Incident category label, e.g. `"theft"`.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Great-circle distance from this hazard to `coordinate` in kilometres.
    #[must_use]
    pub fn distance_km(&self, coordinate: &Coordinate) -> f64 {
        self.location.distance_km(coordinate)
    }
}
