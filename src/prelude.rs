// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use probe_demo::prelude::*;
//! ```

// Core types
pub use crate::config::{Args, Config};
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::{AppState, create_router};

// Health and metrics
pub use crate::health::HealthState;
pub use crate::metrics::{MetricsRegistry, ProcessCollector, RequestLabels, VersionLabels};

// Service identity
pub use crate::service::{ServiceInfo, VERSION, os_hostname};
