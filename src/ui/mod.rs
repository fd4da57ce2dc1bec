// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the operations control panel.
//! Handles layout, the worker pool that talks to the backend, and frame scheduling.

pub mod components;

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::api::ApiClient;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::{action_panel, email_list, notices};

/// Number of threads executing backend commands.
const WORKER_THREADS: usize = 4;

/// Stateful egui application driving the MVU loop.
pub struct OpsDeckApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl OpsDeckApp {
    /// Spawn the command workers and build the initial model.
    ///
    /// Workers execute commands against `client` and wake the UI through `ctx` once a
    /// result message is queued.
    pub fn new(ctx: &egui::Context, client: ApiClient) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();
        let client = Arc::new(client);

        for _ in 0..WORKER_THREADS {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let client = Arc::clone(&client);
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, client.as_ref());
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                    ctx.request_repaint();
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for OpsDeckApp {
    /// Drives a single UI frame.
    ///
    /// Drains worker results into the inbox, stamps the frame clock, applies every queued
    /// message to the model (dispatching resulting commands to the workers), then renders the
    /// top bar, status bar, action panel, recipient modal and notices. Messages produced by
    /// the views are handled on the next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        let now = Instant::now();
        self.inbox.push(Msg::Tick(now));

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Operations");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    let email_msgs = email_list::view(ui, ctx, &self.model.emails);
                    self.inbox.extend(email_msgs.into_iter().map(Msg::Emails));
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui, now);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);
            let action_msgs = action_panel::view(ui, &self.model.actions);
            self.inbox.extend(action_msgs.into_iter().map(Msg::Actions));
        });

        let notice_msgs = notices::view(ctx, &self.model.notices);
        self.inbox.extend(notice_msgs.into_iter().map(Msg::Notices));

        self.schedule_repaint(ctx, now);
    }

    /// Required by eframe 0.34; all rendering happens in `update`, which eframe still calls
    /// immediately before this method every frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl OpsDeckApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Wake up for view-generated messages, the cooldown end, and notice expiry.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if !self.inbox.is_empty() {
            ctx.request_repaint();
            return;
        }

        let deadlines = [
            self.model.actions.cooldown_remaining(now),
            self.model
                .notices
                .next_expiry()
                .map(|at| at.saturating_duration_since(now)),
        ];
        if let Some(wait) = deadlines.into_iter().flatten().min() {
            ctx.request_repaint_after(wait.max(Duration::from_millis(16)));
        }
    }

    /// Render background activity and cooldown state.
    fn render_status(&self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            if let Some(remaining) = self.model.actions.cooldown_remaining(now) {
                ui.label(
                    egui::RichText::new(format!(
                        "{} Run started, controls unlock in {}s",
                        egui_phosphor::regular::HOURGLASS,
                        remaining.as_secs_f32().ceil() as u64
                    ))
                    .color(egui::Color32::from_gray(110)),
                );
            }
            if self.model.pending_commands > 0 {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(egui::Spinner::new().size(14.0))
                        .on_hover_text(format!(
                            "{} request(s) in flight",
                            self.model.pending_commands
                        ));
                });
            }
        });
    }
}
