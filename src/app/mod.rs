// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the control panel UI.

use anyhow::{Context, Result, anyhow};
use eframe::egui;
use egui_phosphor::Variant;

use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::OpsDeckApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: Config) -> Result<()> {
    let client = ApiClient::new(&config).context("Failed to set up backend client")?;

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_min_inner_size([560.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "OpsDeck",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(OpsDeckApp::new(&cc.egui_ctx, client)))
        }),
    )
    .map_err(|err| anyhow!("UI terminated with an error: {err}"))
}
