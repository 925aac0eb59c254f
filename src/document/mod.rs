//! Baseline documents, field addressing, and variant construction.
//!
//! This module holds everything the prober needs to know about the JSON it
//! is given:
//! - [`path`] - [`FieldPath`] and [`FieldTarget`] addressing
//! - [`loader`] - Reading the baseline payload from disk
//! - [`traversal`] - The ordered list of fields to probe
//! - [`variant`] - Building a copy of the baseline with one field removed
//!
//! # Example
//!
//! ```
//! use fieldprobe::document::{build_variant, plan_targets};
//! use serde_json::json;
//!
//! let baseline = json!({"a": {"b": 1, "c": 2}, "d": 3});
//! let targets = plan_targets(&baseline).unwrap();
//! let labels: Vec<String> = targets.iter().map(|t| t.label()).collect();
//! assert_eq!(labels, ["a/b", "a/c", "a", "d"]);
//!
//! let variant = build_variant(&baseline, &targets[0]);
//! assert_eq!(variant, json!({"a": {"c": 2}, "d": 3}));
//! ```

pub mod loader;
pub mod path;
pub mod traversal;
pub mod variant;

pub use loader::{load_document, parse_document};
pub use path::{FieldPath, FieldTarget};
pub use traversal::plan_targets;
pub use variant::build_variant;
