// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Transient toast notices stacked in the bottom-right corner.

use std::time::{Duration, Instant};

/// How long a notice stays on screen once shown.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    id: u64,
    pub level: NoticeLevel,
    pub text: String,
    /// Set by the first tick after the notice was pushed.
    expires_at: Option<Instant>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticesModel {
    items: Vec<Notice>,
    next_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticesMsg {
    Push { level: NoticeLevel, text: String },
    Dismiss(u64),
    Tick(Instant),
}

impl NoticesModel {
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    /// Earliest pending expiry, used to schedule the next repaint.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.items.iter().filter_map(|n| n.expires_at).min()
    }
}

pub fn update(model: &mut NoticesModel, msg: NoticesMsg) {
    match msg {
        NoticesMsg::Push { level, text } => {
            model.next_id += 1;
            model.items.push(Notice {
                id: model.next_id,
                level,
                text,
                expires_at: None,
            });
        }
        NoticesMsg::Dismiss(id) => model.items.retain(|n| n.id != id),
        NoticesMsg::Tick(now) => {
            model.items.retain(|n| n.expires_at.is_none_or(|at| now < at));
            for notice in model.items.iter_mut().filter(|n| n.expires_at.is_none()) {
                notice.expires_at = Some(now + NOTICE_LIFETIME);
            }
        }
    }
}

pub fn view(ctx: &egui::Context, model: &NoticesModel) -> Vec<NoticesMsg> {
    let mut msgs = Vec::new();
    if model.items().is_empty() {
        return msgs;
    }

    egui::Area::new(egui::Id::new("opsdeck_notices"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -40.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for notice in model.items() {
                let (icon, color) = match notice.level {
                    NoticeLevel::Info => (
                        egui_phosphor::regular::INFO,
                        ui.visuals().hyperlink_color,
                    ),
                    NoticeLevel::Success => (
                        egui_phosphor::regular::CHECK_CIRCLE,
                        egui::Color32::from_rgb(46, 160, 67),
                    ),
                    NoticeLevel::Error => (
                        egui_phosphor::regular::WARNING_CIRCLE,
                        ui.visuals().error_fg_color,
                    ),
                };
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(320.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(icon).color(color));
                        ui.label(&notice.text);
                        if ui
                            .small_button(egui_phosphor::regular::X)
                            .on_hover_text("Dismiss")
                            .clicked()
                        {
                            msgs.push(NoticesMsg::Dismiss(notice.id));
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(model: &mut NoticesModel, text: &str) {
        update(
            model,
            NoticesMsg::Push {
                level: NoticeLevel::Info,
                text: text.into(),
            },
        );
    }

    #[test]
    fn notice_expires_five_seconds_after_first_tick() {
        let mut model = NoticesModel::default();
        push(&mut model, "hello");

        let t0 = Instant::now();
        update(&mut model, NoticesMsg::Tick(t0));
        assert_eq!(model.next_expiry(), Some(t0 + NOTICE_LIFETIME));

        update(
            &mut model,
            NoticesMsg::Tick(t0 + NOTICE_LIFETIME - Duration::from_millis(1)),
        );
        assert_eq!(model.items().len(), 1);

        update(&mut model, NoticesMsg::Tick(t0 + NOTICE_LIFETIME));
        assert!(model.items().is_empty());
    }

    #[test]
    fn later_notices_get_their_own_deadline() {
        let mut model = NoticesModel::default();
        let t0 = Instant::now();
        push(&mut model, "first");
        update(&mut model, NoticesMsg::Tick(t0));
        push(&mut model, "second");
        update(&mut model, NoticesMsg::Tick(t0 + Duration::from_secs(3)));

        update(&mut model, NoticesMsg::Tick(t0 + Duration::from_secs(6)));

        let texts: Vec<_> = model.items().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["second"]);
    }

    #[test]
    fn dismiss_removes_only_that_notice() {
        let mut model = NoticesModel::default();
        push(&mut model, "a");
        push(&mut model, "b");
        let first = model.items()[0].id;

        update(&mut model, NoticesMsg::Dismiss(first));

        assert_eq!(model.items().len(), 1);
        assert_eq!(model.items()[0].text, "b");
    }
}
