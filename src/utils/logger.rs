// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment switch that raises the default log level to `debug`.
pub const VERBOSE_VAR: &str = "OPSDECK_VERBOSE";

/// Install a compact stderr logger. `RUST_LOG` overrides the default filter.
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

/// Whether `OPSDECK_VERBOSE` asks for debug output (`1`, `true`, `yes`).
pub fn verbose_from_env() -> bool {
    std::env::var(VERBOSE_VAR)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("opsdeck=debug,info")
    } else {
        EnvFilter::new("opsdeck=info,warn")
    }
}
