// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and process collector for the demo service
//!
//! Contains label types, the Prometheus registry, and the procfs-backed
//! process collector.

mod labels;
mod process;
mod registry;


/// Labels for the request counter and the `up` gauge
pub use labels::{RequestLabels, VersionLabels};

/// Scrape-time process resource collector
pub use process::ProcessCollector;

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
