//! Field probing: the core of fieldprobe.
//!
//! A [`Prober`] walks the baseline document, builds one variant per field
//! with that field removed, hands each variant to a [`FieldSender`], and
//! classifies the field from the answer:
//!
//! | Sender answer            | Classification |
//! |--------------------------|----------------|
//! | error status (4xx/5xx)   | `Mandatory`    |
//! | any other status         | `Optional`     |
//! | nothing attempted        | `Unknown`      |
//!
//! Transport failures are not classifications; they abort the run.
//!
//! # Example
//!
//! ```
//! use fieldprobe::probe::{Classification, MockSender, Prober, SendOutcome};
//! use serde_json::json;
//!
//! let sender = MockSender::new(|body| {
//!     if body.get("id").is_none() {
//!         MockSender::reject(422)
//!     } else {
//!         SendOutcome::Accepted { status: 200 }
//!     }
//! });
//! let prober = Prober::new(&sender);
//! let doc = json!({"id": 7, "note": "hi"});
//!
//! let run = prober.run(&doc, 1).unwrap();
//! assert_eq!(run.results[0].classification, Classification::Mandatory);
//! assert_eq!(run.results[1].classification, Classification::Optional);
//! ```

pub mod engine;
pub mod http;
pub mod mock;
pub mod sender;

pub use engine::{ProbeRun, Prober, Probes};
pub use http::{HttpSender, DEFAULT_TIMEOUT};
pub use mock::MockSender;
pub use sender::{FieldSender, SendOutcome, TransportError, ValidationFailure};

use serde::Serialize;
use std::fmt;

use crate::document::{FieldPath, FieldTarget};

/// Verdict for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Omitting the field made the endpoint answer with an error status.
    Mandatory,
    /// The endpoint accepted the payload without the field.
    Optional,
    /// No request could be attempted.
    Unknown,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Optional => "optional",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&SendOutcome> for Classification {
    fn from(outcome: &SendOutcome) -> Self {
        match outcome {
            SendOutcome::Accepted { .. } => Self::Optional,
            SendOutcome::Rejected(_) => Self::Mandatory,
            SendOutcome::Skipped => Self::Unknown,
        }
    }
}

/// Result of probing one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Ancestor object keys.
    pub path: FieldPath,
    /// The omitted field's name.
    pub field: String,
    pub classification: Classification,
    /// HTTP status observed, if a response was received.
    pub status: Option<u16>,
}

impl ProbeResult {
    /// Classify `target` from the sender's answer.
    pub fn from_outcome(target: FieldTarget, outcome: &SendOutcome) -> Self {
        Self {
            path: target.path,
            field: target.name,
            classification: Classification::from(outcome),
            status: outcome.status(),
        }
    }

    /// A result for a field that could not be tested.
    pub fn unknown(target: FieldTarget) -> Self {
        Self::from_outcome(target, &SendOutcome::Skipped)
    }

    /// `address/city` style label.
    pub fn label(&self) -> String {
        if self.path.is_root() {
            self.field.clone()
        } else {
            format!("{}/{}", self.path, self.field)
        }
    }

    pub fn is_mandatory(&self) -> bool {
        self.classification == Classification::Mandatory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_from_outcome() {
        assert_eq!(
            Classification::from(&SendOutcome::Accepted { status: 204 }),
            Classification::Optional
        );
        assert_eq!(
            Classification::from(&MockSender::reject(400)),
            Classification::Mandatory
        );
        assert_eq!(
            Classification::from(&SendOutcome::Skipped),
            Classification::Unknown
        );
    }

    #[test]
    fn classification_display_is_lowercase() {
        assert_eq!(Classification::Mandatory.to_string(), "mandatory");
        assert_eq!(
            serde_json::to_value(Classification::Unknown).unwrap(),
            "unknown"
        );
    }

    #[test]
    fn result_label_matches_target_label() {
        let target = FieldTarget::new(FieldPath::root().child("address"), "city");
        let result = ProbeResult::from_outcome(target.clone(), &MockSender::reject(400));
        assert_eq!(result.label(), target.label());
        assert_eq!(result.status, Some(400));
        assert!(result.is_mandatory());
    }

    #[test]
    fn unknown_result_has_no_status() {
        let result = ProbeResult::unknown(FieldTarget::new(FieldPath::root(), "name"));
        assert_eq!(result.classification, Classification::Unknown);
        assert_eq!(result.status, None);
        assert!(!result.is_mandatory());
    }
}
