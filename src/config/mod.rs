//! Configuration loading, parsing, and validation for fieldprobe.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//! - `${VAR}` interpolation in [`interpolation`]
//!
//! # Example
//!
//! ```
//! use fieldprobe::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("fieldprobe.yml"),
//!     "url: http://localhost:8080/orders\nconcurrency: 4\n",
//! )
//! .unwrap();
//!
//! let config = load_merged_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.url.as_deref(), Some("http://localhost:8080/orders"));
//! assert_eq!(config.concurrency, 4);
//! ```
//!
//! # Configuration File Locations
//!
//! fieldprobe discovers and merges configuration in this order:
//! 1. Project config (`fieldprobe.yml`, or the file given with `--config`)
//! 2. Local overrides (`fieldprobe.local.yml`)
//!
//! Command-line flags are applied on top by the CLI.

pub mod interpolation;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use interpolation::{parse_interpolation, resolve_string, InterpolationContext, Segment};
pub use loader::{load_config_file, load_merged_config, parse_config, ConfigPaths};
pub use merger::{deep_merge, merge_configs};
pub use schema::ProbeConfig;
pub use validator::{validate, validate_config, ValidationError};
