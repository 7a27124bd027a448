// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the demo service
//!
//! Merges the command line (bind address) with environment variables
//! (page background color).

use clap::Parser;


/// Default configuration values
pub mod defaults {
    pub const BIND_ADDR: &str = "0.0.0.0:8080";
    pub const BACKGROUND_COLOR: &str = "white";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const BACKGROUND_COLOR: &str = "BACKGROUND_COLOR";
}

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "probe-demo", version, about = "Demo HTTP service for orchestration probes")]
pub struct Args {
    /// The socket address to bind to
    #[arg(long, default_value = defaults::BIND_ADDR)]
    pub bind: String,
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub background_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: defaults::BIND_ADDR.to_string(),
            background_color: defaults::BACKGROUND_COLOR.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the command line and environment variables
    pub fn load() -> Self {
        Self::from_args(Args::parse())
    }

    /// Builds configuration from already-parsed arguments
    ///
    /// `BACKGROUND_COLOR` is taken verbatim as a CSS color value; it is
    /// deliberately not validated.
    pub fn from_args(args: Args) -> Self {
        let background_color = std::env::var(env_vars::BACKGROUND_COLOR)
            .unwrap_or_else(|_| defaults::BACKGROUND_COLOR.to_string());

        Config {
            bind_addr: args.bind,
            background_color,
        }
    }
}
