// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Probe Demo
//!
//! Minimal demo HTTP service for container orchestration platforms.
//!
//! This library provides a tiny, well-defined HTTP surface to exercise
//! health checks, readiness probes and Prometheus metrics scraping: a
//! greeting page, a JSON identity endpoint, a simulated failure route, a
//! one-way health flag and a metrics registry with process collectors.
//!
//! ## Main modules
//! - `api`: HTTP routes and handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `health`: shared health flag
//! - `metrics`: metrics registry and process collector
//! - `service`: version and hostname identity
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod health;
mod metrics;
mod service;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Args, Config};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Shared health flag
pub use health::HealthState;

/// Metrics registry, labels and process collector
pub use metrics::{MetricsRegistry, ProcessCollector, RequestLabels, VersionLabels};

/// Service identity helpers
pub use service::{ServiceInfo, VERSION, os_hostname};
