//! HTTP sender.
//!
//! Posts each variant to the configured endpoint with a blocking client and
//! maps the status code onto a [`SendOutcome`].

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::redirect::Policy;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::document::FieldTarget;
use crate::error::{ProbeError, Result};

use super::sender::{FieldSender, SendOutcome, TransportError, ValidationFailure};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends variants to a single endpoint over HTTP(S).
#[derive(Debug)]
pub struct HttpSender {
    client: Client,
    url: Option<String>,
    timeout: Duration,
}

impl HttpSender {
    /// Create a sender for `url` with the default timeout and no extra headers.
    ///
    /// An empty or absent URL yields an unconfigured sender.
    pub fn new(url: Option<String>) -> Result<Self> {
        Self::with_options(url, DEFAULT_TIMEOUT, &BTreeMap::new())
    }

    /// Create a sender with a custom timeout and extra request headers.
    pub fn with_options(
        url: Option<String>,
        timeout: Duration,
        headers: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fieldprobe/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            // 3xx answers are classified as-is, never followed.
            .redirect(Policy::none())
            .default_headers(header_map(headers)?)
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            url: url.filter(|u| !u.trim().is_empty()),
            timeout,
        })
    }

    /// The target URL, if configured.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl FieldSender for HttpSender {
    fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    fn send(&self, body: &Value, omitted: &FieldTarget) -> std::result::Result<SendOutcome, TransportError> {
        let Some(url) = self.url.as_deref() else {
            return Ok(SendOutcome::Skipped);
        };

        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .map_err(|e| TransportError::new(url, describe(&e)))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            Ok(SendOutcome::Rejected(ValidationFailure {
                status: status.as_u16(),
                field: omitted.label(),
            }))
        } else {
            Ok(SendOutcome::Accepted {
                status: status.as_u16(),
            })
        }
    }
}

fn header_map(headers: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| ProbeError::ConfigValidationError {
                message: format!("invalid header name '{}'", name),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| ProbeError::ConfigValidationError {
                message: format!("invalid value for header '{}'", name),
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Flatten a reqwest error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "connection failed".to_string()
    } else {
        err.to_string()
    };

    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::FieldPath;
    use httpmock::prelude::*;
    use serde_json::json;

    fn target(name: &str) -> FieldTarget {
        FieldTarget::new(FieldPath::root(), name)
    }

    #[test]
    fn default_timeout_is_30_seconds() {
        let sender = HttpSender::new(Some("http://localhost/".into())).unwrap();
        assert_eq!(sender.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn empty_url_is_unconfigured() {
        let sender = HttpSender::new(Some("   ".into())).unwrap();
        assert!(!sender.is_configured());
        assert_eq!(sender.url(), None);

        let sender = HttpSender::new(None).unwrap();
        assert!(!sender.is_configured());
    }

    #[test]
    fn unconfigured_send_is_skipped() {
        let sender = HttpSender::new(None).unwrap();
        let outcome = sender.send(&json!({}), &target("name")).unwrap();
        assert_eq!(outcome, SendOutcome::Skipped);
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let mut headers = BTreeMap::new();
        headers.insert("bad header".to_string(), "x".to_string());
        let result = HttpSender::with_options(None, DEFAULT_TIMEOUT, &headers);
        assert!(matches!(
            result,
            Err(ProbeError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn success_status_is_accepted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/orders");
            then.status(201);
        });

        let sender = HttpSender::new(Some(server.url("/orders"))).unwrap();
        let outcome = sender.send(&json!({"a": 1}), &target("b")).unwrap();
        assert_eq!(outcome, SendOutcome::Accepted { status: 201 });
    }

    #[test]
    fn redirect_is_accepted_without_following() {
        let server = MockServer::start();
        let orders = server.mock(|when, then| {
            when.method(POST).path("/orders");
            then.status(302).header("location", "/moved");
        });
        let moved = server.mock(|when, then| {
            when.path("/moved");
            then.status(404);
        });

        let sender = HttpSender::new(Some(server.url("/orders"))).unwrap();
        let outcome = sender.send(&json!({"a": 1}), &target("b")).unwrap();

        assert_eq!(outcome, SendOutcome::Accepted { status: 302 });
        orders.assert();
        moved.assert_calls(0);
    }

    #[test]
    fn not_modified_is_accepted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/orders");
            then.status(304);
        });

        let sender = HttpSender::new(Some(server.url("/orders"))).unwrap();
        let outcome = sender.send(&json!({}), &target("name")).unwrap();
        assert_eq!(outcome, SendOutcome::Accepted { status: 304 });
    }

    #[test]
    fn client_error_is_rejected_with_label() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/orders");
            then.status(400).body("missing field");
        });

        let sender = HttpSender::new(Some(server.url("/orders"))).unwrap();
        let omitted = FieldTarget::new(FieldPath::root().child("address"), "city");
        let outcome = sender.send(&json!({}), &omitted).unwrap();
        assert_eq!(
            outcome,
            SendOutcome::Rejected(ValidationFailure {
                status: 400,
                field: "address/city".into(),
            })
        );
    }

    #[test]
    fn server_error_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/orders");
            then.status(500);
        });

        let sender = HttpSender::new(Some(server.url("/orders"))).unwrap();
        let outcome = sender.send(&json!({}), &target("name")).unwrap();
        assert_eq!(outcome.status(), Some(500));
        assert!(matches!(outcome, SendOutcome::Rejected(_)));
    }

    #[test]
    fn posts_json_body_with_json_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/orders")
                .header("content-type", "application/json")
                .header("accept", "application/json")
                .json_body(json!({"address": {"zip": null}}));
            then.status(200);
        });

        let sender = HttpSender::new(Some(server.url("/orders"))).unwrap();
        let outcome = sender
            .send(&json!({"address": {"zip": null}}), &target("name"))
            .unwrap();

        mock.assert();
        assert_eq!(outcome, SendOutcome::Accepted { status: 200 });
    }

    #[test]
    fn sends_configured_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/orders")
                .header("authorization", "Bearer secret");
            then.status(200);
        });

        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), "Bearer secret".to_string());
        let sender =
            HttpSender::with_options(Some(server.url("/orders")), DEFAULT_TIMEOUT, &headers)
                .unwrap();
        sender.send(&json!({}), &target("name")).unwrap();

        mock.assert();
    }

    #[test]
    fn refused_connection_is_transport_error() {
        let sender = HttpSender::with_options(
            Some("http://127.0.0.1:1/orders".into()),
            Duration::from_secs(5),
            &BTreeMap::new(),
        )
        .unwrap();

        let err = sender.send(&json!({}), &target("name")).unwrap_err();
        assert_eq!(err.url, "http://127.0.0.1:1/orders");
        assert!(!err.message.is_empty());
    }

    #[test]
    fn slow_endpoint_times_out_as_transport_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/slow");
            then.status(200).delay(Duration::from_secs(3));
        });

        let sender = HttpSender::with_options(
            Some(server.url("/slow")),
            Duration::from_millis(200),
            &BTreeMap::new(),
        )
        .unwrap();

        let err = sender.send(&json!({}), &target("name")).unwrap_err();
        assert!(
            err.message.contains("timed out"),
            "unexpected message: {}",
            err.message
        );
    }
}
