// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Shared health flag exposed through `/health` and `/down`
//!
//! Two states: healthy (initial) and unhealthy (terminal). The only
//! transition is healthy → unhealthy via [`HealthState::mark_down`]; a
//! process restart is the only way back to healthy.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide health flag behind a reader/writer lock
///
/// Arbitrarily many health checks may read concurrently; marking the
/// service down takes the write lock and excludes all readers until the
/// transition is committed, so a reader never observes a torn value.
#[derive(Clone)]
pub struct HealthState {
    healthy: Arc<RwLock<bool>>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthState {
    /// Creates a new health state, initially healthy
    #[must_use]
    pub fn new() -> Self {
        Self {
            healthy: Arc::new(RwLock::new(true)),
        }
    }

    pub async fn is_healthy(&self) -> bool {
        *self.healthy.read().await
    }

    /// Marks the service unhealthy; there is no way back
    pub async fn mark_down(&self) {
        let mut healthy = self.healthy.write().await;
        tracing::debug!("Health state set to unhealthy");
        *healthy = false;
    }
}
