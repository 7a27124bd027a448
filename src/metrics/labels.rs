//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

/// Labels for the per-request counter: response status code and lowercased
/// HTTP method, e.g. `code="200", method="get"`
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct RequestLabels {
    pub code: String,
    pub method: String,
}

/// Label carrying the running service version on the `up` gauge
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct VersionLabels {
    pub version: String,
}

impl RequestLabels {
    /// Builds labels from a response status and a request method
    #[must_use]
    pub fn new(code: u16, method: &str) -> Self {
        Self {
            code: code.to_string(),
            method: method.to_ascii_lowercase(),
        }
    }
}
