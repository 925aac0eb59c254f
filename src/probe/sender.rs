//! The send capability the prober depends on.
//!
//! A sender turns one variant into exactly one of three answers:
//! - the endpoint accepted it ([`SendOutcome::Accepted`])
//! - the endpoint answered with an error status ([`SendOutcome::Rejected`])
//! - nothing was attempted ([`SendOutcome::Skipped`])
//!
//! Anything that prevents an HTTP response from arriving at all is a
//! [`TransportError`] and is never folded into one of those outcomes.

use serde_json::Value;
use thiserror::Error;

use crate::document::FieldTarget;

/// Capability: POST a JSON body and report how the endpoint answered.
pub trait FieldSender: Sync {
    /// Whether a target endpoint is configured at all.
    ///
    /// When this is `false` the prober never calls [`send`](Self::send).
    fn is_configured(&self) -> bool;

    /// Send `body`, the baseline with `omitted` removed.
    fn send(&self, body: &Value, omitted: &FieldTarget) -> Result<SendOutcome, TransportError>;
}

impl<T: FieldSender + ?Sized> FieldSender for &T {
    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    fn send(&self, body: &Value, omitted: &FieldTarget) -> Result<SendOutcome, TransportError> {
        (**self).send(body, omitted)
    }
}

/// How the endpoint answered a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Any non-error status.
    Accepted { status: u16 },
    /// Error status (4xx/5xx).
    Rejected(ValidationFailure),
    /// No request was attempted.
    Skipped,
}

impl SendOutcome {
    /// HTTP status, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Accepted { status } => Some(*status),
            Self::Rejected(failure) => Some(failure.status),
            Self::Skipped => None,
        }
    }
}

/// The endpoint rejected a variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("endpoint answered {status} without field '{field}'")]
pub struct ValidationFailure {
    /// Error status returned.
    pub status: u16,
    /// Label of the omitted field.
    pub field: String,
}

/// A request that never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    /// Where the request was going.
    pub url: String,
    /// What went wrong (DNS, refused connection, timeout, ...).
    pub message: String,
}

impl TransportError {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_status() {
        assert_eq!(SendOutcome::Accepted { status: 201 }.status(), Some(201));
        let rejected = SendOutcome::Rejected(ValidationFailure {
            status: 422,
            field: "name".into(),
        });
        assert_eq!(rejected.status(), Some(422));
        assert_eq!(SendOutcome::Skipped.status(), None);
    }

    #[test]
    fn validation_failure_message_names_field_and_status() {
        let failure = ValidationFailure {
            status: 400,
            field: "address/city".into(),
        };
        let msg = failure.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("address/city"));
    }

    #[test]
    fn transport_error_displays_message() {
        let err = TransportError::new("http://localhost:1", "connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.url, "http://localhost:1");
    }
}
