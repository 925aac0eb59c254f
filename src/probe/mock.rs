//! Scriptable sender for tests.
//!
//! `MockSender` answers from a closure and records every body it was sent,
//! so tests can check classifications, send counts and variant isolation
//! without a network.
//!
//! # Example
//!
//! ```
//! use fieldprobe::document::{FieldPath, FieldTarget};
//! use fieldprobe::probe::{FieldSender, MockSender};
//! use serde_json::json;
//!
//! let sender = MockSender::accept_all();
//! let target = FieldTarget::new(FieldPath::root(), "name");
//! sender.send(&json!({"id": 1}), &target).unwrap();
//!
//! assert_eq!(sender.call_count(), 1);
//! assert_eq!(sender.bodies(), vec![json!({"id": 1})]);
//! assert_eq!(sender.labels(), vec!["name".to_string()]);
//! ```

use serde_json::Value;
use std::sync::Mutex;

use crate::document::FieldTarget;

use super::sender::{FieldSender, SendOutcome, TransportError, ValidationFailure};

type Responder = Box<dyn Fn(&Value) -> SendOutcome + Send + Sync>;

/// Sender double that answers from a closure and records what it was sent.
pub struct MockSender {
    responder: Responder,
    configured: bool,
    fail_after: Option<usize>,
    sent: Mutex<Vec<(String, Value)>>,
}

impl MockSender {
    /// Answer every variant with `responder`.
    pub fn new(responder: impl Fn(&Value) -> SendOutcome + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            configured: true,
            fail_after: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Accept everything with `200`.
    pub fn accept_all() -> Self {
        Self::new(|_| SendOutcome::Accepted { status: 200 })
    }

    /// A sender with no target configured.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::accept_all()
        }
    }

    /// Behave like `inner` for `calls` sends, then fail every send with a
    /// transport error.
    pub fn failing_after(inner: MockSender, calls: usize) -> Self {
        Self {
            fail_after: Some(calls),
            ..inner
        }
    }

    /// A rejection outcome with `status`.
    pub fn reject(status: u16) -> SendOutcome {
        SendOutcome::Rejected(ValidationFailure {
            status,
            field: String::new(),
        })
    }

    /// Number of sends attempted.
    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    /// Bodies in the order they were sent.
    pub fn bodies(&self) -> Vec<Value> {
        self.lock().iter().map(|(_, body)| body.clone()).collect()
    }

    /// Omitted-field labels in the order they were sent.
    pub fn labels(&self) -> Vec<String> {
        self.lock().iter().map(|(label, _)| label.clone()).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, Value)>> {
        self.sent.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FieldSender for MockSender {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn send(&self, body: &Value, omitted: &FieldTarget) -> Result<SendOutcome, TransportError> {
        let calls = {
            let mut sent = self.lock();
            sent.push((omitted.label(), body.clone()));
            sent.len()
        };

        if self.fail_after.is_some_and(|limit| calls > limit) {
            return Err(TransportError::new("mock://endpoint", "connection refused"));
        }

        Ok(match (self.responder)(body) {
            SendOutcome::Rejected(failure) => SendOutcome::Rejected(ValidationFailure {
                field: omitted.label(),
                ..failure
            }),
            other => other,
        })
    }
}

impl std::fmt::Debug for MockSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSender")
            .field("configured", &self.configured)
            .field("fail_after", &self.fail_after)
            .field("calls", &self.call_count())
            .finish()
    }
}
