// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus metrics registry and update logic

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::metrics::labels::{RequestLabels, VersionLabels};
use crate::metrics::process::ProcessCollector;
use crate::service::VERSION;

/// Registry holding the service metrics
///
/// The `up` gauge and the request counter are updated through typed
/// handles; process-level metrics are gathered by [`ProcessCollector`]
/// at scrape time. Counter updates are atomic, the mutex only guards
/// text encoding.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    up: Family<VersionLabels, Gauge>,
    http_requests: Family<RequestLabels, Counter>,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let up = Family::<VersionLabels, Gauge>::default();
        registry.register("up", "Service up with version information", up.clone());

        let http_requests = Family::<RequestLabels, Counter>::default();
        registry.register(
            "http_requests",
            "Count of all HTTP requests",
            http_requests.clone(),
        );

        registry.register_collector(Box::new(ProcessCollector::new()));

        Self {
            registry: Arc::new(Mutex::new(registry)),
            up,
            http_requests,
        }
    }

    /// Sets the `up` gauge to 1, labeled with the running version
    ///
    /// Called once right after the listener binds; the gauge never
    /// changes afterwards and does not reflect the health flag.
    pub fn set_up(&self) {
        self.up
            .get_or_create(&VersionLabels {
                version: VERSION.to_string(),
            })
            .set(1);
    }

    /// Increments the request counter for one completed request
    pub fn inc_requests(&self, labels: &RequestLabels) {
        self.http_requests.get_or_create(labels).inc();
    }

    /// Encodes every registered metric in the Prometheus text format
    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }
}
