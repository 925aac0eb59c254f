//! fieldprobe - discover which fields of a JSON payload an endpoint requires.
//!
//! Starting from a known-good payload, fieldprobe omits one field at a time
//! (nested fields before the object that holds them), POSTs each variant to
//! the target endpoint, and classifies the field by the response: an error
//! status means the field is mandatory, anything else means it is optional.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`document`] - Payload loading, traversal order, and variant building
//! - [`error`] - Error types and result aliases
//! - [`probe`] - The probe engine and the HTTP sender
//! - [`report`] - Human and JSON report formatting
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use fieldprobe::probe::{Classification, MockSender, Prober, SendOutcome};
//! use serde_json::json;
//!
//! let sender = MockSender::new(|body| {
//!     if body.get("id").is_none() {
//!         MockSender::reject(400)
//!     } else {
//!         SendOutcome::Accepted { status: 200 }
//!     }
//! });
//! let prober = Prober::new(sender);
//! let run = prober.run(&json!({"id": 1, "note": "x"}), 1).unwrap();
//!
//! let mandatory: Vec<_> = run.mandatory().map(|r| r.label()).collect();
//! assert_eq!(mandatory, ["id"]);
//! assert_eq!(run.results[1].classification, Classification::Optional);
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod probe;
pub mod report;
pub mod ui;

pub use error::{ProbeError, Result};
