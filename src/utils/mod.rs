// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by the UI shell and startup code.

pub mod logger;

/// Install the global tracing subscriber.
pub use logger::init_logger;
