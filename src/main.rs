// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod api;
mod app;
mod config;
mod models;
mod mvu;
mod ui;
mod utils;

use anyhow::{Context, Result};

use crate::config::Config;

fn main() -> Result<()> {
    utils::init_logger(utils::logger::verbose_from_env());

    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(api = %config.api_base_url, "starting control panel");

    app::run(config)
}
