// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod error;
mod health;
mod hello;
mod info;
mod metrics;

pub use error::error_handler;
pub use health::{down_handler, health_check};
pub use hello::hello_handler;
pub use info::api_handler;
pub use metrics::metrics_handler;
