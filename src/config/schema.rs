//! Configuration schema.
//!
//! ```yaml
//! url: https://api.example.com/orders
//! payload: payload.json
//! concurrency: 1
//! timeout_secs: 30
//! headers:
//!   Authorization: "Bearer ${API_TOKEN}"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::interpolation::{resolve_string, InterpolationContext};
use crate::error::Result;

/// Default payload file, relative to the working directory.
pub const DEFAULT_PAYLOAD: &str = "payload.json";

/// Root configuration for a probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Endpoint receiving the variants. Empty or absent means unconfigured.
    pub url: Option<String>,

    /// Baseline payload file.
    pub payload: PathBuf,

    /// Requests in flight at once.
    pub concurrency: usize,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Extra request headers.
    pub headers: BTreeMap<String, String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: None,
            payload: PathBuf::from(DEFAULT_PAYLOAD),
            concurrency: 1,
            timeout_secs: 30,
            headers: BTreeMap::new(),
        }
    }
}

impl ProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The URL with blank values treated as unset.
    pub fn target_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// Expand `${VAR}` references in the URL and header values.
    pub fn interpolate(mut self, context: &InterpolationContext) -> Result<Self> {
        if let Some(url) = &self.url {
            self.url = Some(resolve_string(url, context)?);
        }
        for value in self.headers.values_mut() {
            *value = resolve_string(value, context)?;
        }
        Ok(self)
    }
}
