//! Payload file loading.
//!
//! The baseline is read once, before any probing starts. A missing file or
//! malformed JSON aborts the run; the object-root check happens when the
//! probe targets are planned.

use crate::error::{ProbeError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load the baseline payload from a JSON file.
///
/// # Errors
///
/// Returns `PayloadNotFound` if the file doesn't exist.
/// Returns `PayloadParse` if the content is not valid JSON.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbeError::PayloadNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProbeError::Io(e)
        }
    })?;

    parse_document(&content, path)
}

/// Parse JSON content into a document.
///
/// `source_path` is only used for error reporting.
pub fn parse_document(content: &str, source_path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| ProbeError::PayloadParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
