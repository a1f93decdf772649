//! Test-only collaborators and builders shared by unit and behaviour tests.

use std::sync::Mutex;
use std::time::Duration;

use crate::{
    Coordinate, DeliveryStatus, GeocodeError, Geocoder, HazardPoint, Notifier, Severity,
};

/// Build a hazard at `(latitude, longitude)` with the given score.
///
/// The severity bucket is derived from the score so callers only need to
/// care about the numeric value.
///
/// # Panics
/// Panics when the coordinate or score is invalid; test inputs are expected
/// to be well formed.
#[must_use]
pub fn hazard_at(latitude: f64, longitude: f64, severity_score: f64) -> HazardPoint {
    let severity = if severity_score >= 0.7 {
        Severity::High
    } else if severity_score >= 0.4 {
        Severity::Medium
    } else {
        Severity::Low
    };
    let location = Coordinate::new(latitude, longitude).expect("test coordinate must be valid");
    HazardPoint::new(location, severity, severity_score, "test-incident")
        .expect("test hazard must be valid")
}

/// [`Notifier`] that records messages and can fail chosen recipients.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    failing: Option<String>,
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create a notifier that fails delivery to `recipient` only.
    #[must_use]
    pub fn failing_for(recipient: &str) -> Self {
        Self {
            failing: Some(recipient.to_owned()),
            messages: Mutex::default(),
        }
    }

    /// Messages received so far, in order.
    ///
    /// # Panics
    /// Panics if the internal lock was poisoned by a panicking test.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, recipients: &[String], message: &str) -> Vec<DeliveryStatus> {
        self.messages
            .lock()
            .expect("notifier lock poisoned")
            .push(message.to_owned());
        recipients
            .iter()
            .map(|recipient| {
                if self.failing.as_deref() == Some(recipient.as_str()) {
                    DeliveryStatus::Failed {
                        recipient: recipient.clone(),
                        reason: "simulated delivery failure".to_owned(),
                    }
                } else {
                    DeliveryStatus::Sent {
                        recipient: recipient.clone(),
                    }
                }
            })
            .collect()
    }
}

/// [`Geocoder`] that answers every query with the same outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FixedGeocoder {
    /// Resolve every query to this coordinate.
    Found(Coordinate),
    /// Report every query as unknown.
    NotFound,
    /// Report every query as timed out.
    TimedOut,
}

impl Geocoder for FixedGeocoder {
    fn geocode(&self, query: &str, timeout: Duration) -> Result<Coordinate, GeocodeError> {
        match self {
            Self::Found(coordinate) => Ok(*coordinate),
            Self::NotFound => Err(GeocodeError::NotFound {
                query: query.to_owned(),
            }),
            Self::TimedOut => Err(GeocodeError::Timeout {
                query: query.to_owned(),
                timeout,
            }),
        }
    }
}
