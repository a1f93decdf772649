//! Hand recommendations and warnings to people.
//!
//! Notification (SMS or otherwise) is an external collaborator. The scoring
//! core produces plain strings; a boundary layer passes them to a
//! [`Notifier`]. Nothing inside the engine calls this trait.

/// Outcome of delivering a message to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
pub enum DeliveryStatus {
    /// The message was accepted for delivery.
    Sent {
        /// Recipient address, e.g. a phone number.
        recipient: String,
    },
    /// Delivery failed.
    Failed {
        /// Recipient address.
        recipient: String,
        /// Backend-provided reason.
        reason: String,
    },
}

impl DeliveryStatus {
    /// Report whether delivery succeeded.
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }

    /// Recipient the status refers to.
    #[must_use]
    pub fn recipient(&self) -> &str {
        match self {
            Self::Sent { recipient } | Self::Failed { recipient, .. } => recipient,
        }
    }
}

/// Send a message to a list of recipients.
///
/// Implementations return exactly one [`DeliveryStatus`] per recipient, in
/// input order. Per-recipient failures are reported as
/// [`DeliveryStatus::Failed`] rather than aborting the batch.
///
/// # Examples
///
/// ```rust
/// use safepath_core::{DeliveryStatus, Notifier};
///
/// struct Loopback;
///
/// impl Notifier for Loopback {
///     fn notify(&self, recipients: &[String], _message: &str) -> Vec<DeliveryStatus> {
///         recipients
///             .iter()
///             .map(|r| DeliveryStatus::Sent { recipient: r.clone() })
///             .collect()
///     }
/// }
///
/// let statuses = Loopback.notify(&["+910000000000".to_owned()], "stay safe");
/// assert!(statuses.iter().all(DeliveryStatus::is_sent));
/// ```
pub trait Notifier: Send + Sync {
    /// Deliver `message` to every recipient.
    fn notify(&self, recipients: &[String], message: &str) -> Vec<DeliveryStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingNotifier;
    use rstest::rstest;

    #[rstest]
    fn reports_one_status_per_recipient() {
        let notifier = RecordingNotifier::failing_for("+2");
        let recipients = vec!["+1".to_owned(), "+2".to_owned(), "+3".to_owned()];
        let statuses = notifier.notify(&recipients, "Low safety zone ahead");
        let recipients_seen: Vec<_> = statuses.iter().map(DeliveryStatus::recipient).collect();
        assert_eq!(recipients_seen, vec!["+1", "+2", "+3"]);
        assert_eq!(
            statuses.iter().filter(|s| s.is_sent()).count(),
            2,
            "only +2 should fail"
        );
        assert_eq!(notifier.messages(), vec!["Low safety zone ahead".to_owned()]);
    }
}
