//! Errors surfaced by safety scoring and route evaluation.

use thiserror::Error;

use crate::InvalidCoordinate;

/// Boxed cause carried by [`SafetyError::Computation`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by the scoring engine and route evaluator.
///
/// Either a complete result is produced or one of these is returned; the
/// engine never hands back a partially populated result.
#[derive(Debug, Error)]
pub enum SafetyError {
    /// A latitude or longitude was out of range.
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
    /// A time-risk factor was zero, negative, or not finite.
    #[error("time-risk factor for {bucket} must be positive and finite, got {factor}")]
    Configuration {
        /// Name of the offending time bucket.
        bucket: &'static str,
        /// Rejected factor.
        factor: f64,
    },
    /// An unexpected failure while computing a result.
    #[error("safety computation failed: {source}")]
    Computation {
        /// Original cause.
        #[source]
        source: BoxedCause,
    },
}

impl SafetyError {
    /// Wrap an arbitrary error as [`SafetyError::Computation`].
    pub fn computation<E>(source: E) -> Self
    where
        E: Into<BoxedCause>,
    {
        Self::Computation {
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn computation_keeps_its_cause() {
        let err = SafetyError::computation("dataset checksum mismatch");
        let cause = err.source().expect("computation errors carry a cause");
        assert_eq!(cause.to_string(), "dataset checksum mismatch");
    }

    #[test]
    fn invalid_coordinate_converts() {
        let err: SafetyError = InvalidCoordinate {
            latitude: 95.0,
            longitude: 0.0,
        }
        .into();
        assert!(matches!(err, SafetyError::InvalidCoordinate(_)));
    }
}
