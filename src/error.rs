//! Error types for fieldprobe operations.
//!
//! This module defines [`ProbeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - An endpoint rejecting a variant is *not* an error: it is resolved into a
//!   [`Classification::Mandatory`](crate::probe::Classification) result.
//! - `Transport` is fatal to the run and is worded so it cannot be mistaken
//!   for a mandatory-field finding.
//! - `UnconfiguredTarget` is never returned; its message is the single
//!   warning shown when no endpoint is configured.
//! - Use `anyhow::Error` (via `ProbeError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fieldprobe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The baseline document is not a JSON object.
    #[error("Invalid document: {message}")]
    InvalidDocument { message: String },

    /// Payload file not found.
    #[error("Payload not found: {path}")]
    PayloadNotFound { path: PathBuf },

    /// Payload file is not valid JSON.
    #[error("Failed to parse payload at {path}: {message}")]
    PayloadParse { path: PathBuf, message: String },

    /// The request for a variant never produced an HTTP response.
    #[error("Transport error while probing '{field}' at {url}: {message}")]
    Transport {
        field: String,
        url: String,
        message: String,
    },

    /// No target endpoint configured.
    #[error("No target URL configured; nothing will be sent and every field is reported as unknown")]
    UnconfiguredTarget,

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fieldprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
