// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Service identity reported by the greeting page and the JSON API

use serde::{Deserialize, Serialize};

/// Service version baked in at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Immutable per-process identity: version and OS hostname
///
/// Serialized field names are `Version` and `Hostname` to keep the wire
/// contract of the `/api` endpoint stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceInfo {
    pub version: String,
    pub hostname: String,
}

impl ServiceInfo {
    /// Snapshot of the current service identity
    ///
    /// The hostname is resolved from the operating system on every call.
    #[must_use]
    pub fn current() -> Self {
        Self {
            version: VERSION.to_string(),
            hostname: os_hostname(),
        }
    }
}

/// OS hostname, or an empty string when resolution fails
///
/// A failed lookup must never fail the request that asked for it.
#[must_use]
pub fn os_hostname() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_default()
}
