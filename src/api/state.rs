//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::health::HealthState;
use crate::metrics::MetricsRegistry;

/// Shared application state
///
/// Built once in `main` and handed to every handler; there is no other
/// process-wide mutable state.
pub struct AppState {
    pub config: Config,
    pub health: HealthState,
    pub metrics: MetricsRegistry,
}
