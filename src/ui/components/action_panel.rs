// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Upload/compare trigger panel with id filter and post-start cooldown.

use std::time::{Duration, Instant};

use crate::api::ApiError;
use crate::models::action::{ActionKind, ExecuteRequest};
use crate::models::ids::parse_ids;
use crate::ui::components::notices::NoticeLevel;

/// How long the trigger buttons stay disabled after a run was accepted.
pub const COOLDOWN: Duration = Duration::from_secs(5);

/// UI state for the trigger panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionPanelModel {
    include_projects: bool,
    ids_input: String,
    ids: Vec<u64>,
    ids_error: Option<String>,
    cooldown_until: Option<Instant>,
    in_flight: usize,
}

impl Default for ActionPanelModel {
    fn default() -> Self {
        Self {
            include_projects: true,
            ids_input: String::new(),
            ids: Vec::new(),
            ids_error: None,
            cooldown_until: None,
            in_flight: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionPanelMsg {
    IncludeProjectsChanged(bool),
    IdsInputChanged(String),
    Trigger(ActionKind),
    ExecuteCompleted {
        action: ActionKind,
        result: Result<(), ApiError>,
        completed_at: Instant,
    },
    Tick(Instant),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionPanelCommand {
    Execute {
        action: ActionKind,
        request: ExecuteRequest,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionPanelEvent {
    pub message: String,
    pub level: NoticeLevel,
}

impl ActionPanelModel {
    pub fn include_projects(&self) -> bool {
        self.include_projects
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub fn ids_error(&self) -> Option<&str> {
        self.ids_error.as_deref()
    }

    /// Buttons are usable only with a clean id filter and no cooldown running.
    pub fn controls_enabled(&self) -> bool {
        self.cooldown_until.is_none() && self.ids_error.is_none()
    }

    /// Time left on the cooldown as of `now`.
    pub fn cooldown_remaining(&self, now: Instant) -> Option<Duration> {
        self.cooldown_until.map(|until| until.saturating_duration_since(now))
    }
}

pub fn update(
    model: &mut ActionPanelModel,
    msg: ActionPanelMsg,
    cmds: &mut Vec<ActionPanelCommand>,
) -> Option<ActionPanelEvent> {
    match msg {
        ActionPanelMsg::IncludeProjectsChanged(value) => {
            model.include_projects = value;
            None
        }
        ActionPanelMsg::IdsInputChanged(text) => {
            match parse_ids(&text) {
                Ok(ids) => {
                    model.ids = ids;
                    model.ids_error = None;
                }
                Err(err) => {
                    model.ids.clear();
                    model.ids_error = Some(err.to_string());
                }
            }
            model.ids_input = text;
            None
        }
        ActionPanelMsg::Trigger(action) => {
            if !model.controls_enabled() {
                return None;
            }
            model.in_flight += 1;
            cmds.push(ActionPanelCommand::Execute {
                action,
                request: ExecuteRequest::new(action, model.include_projects, model.ids.clone()),
            });
            None
        }
        ActionPanelMsg::ExecuteCompleted {
            action,
            result,
            completed_at,
        } => {
            model.in_flight = model.in_flight.saturating_sub(1);
            match result {
                Ok(()) => {
                    tracing::info!(action = action.title(), "run started");
                    model.cooldown_until = Some(completed_at + COOLDOWN);
                    Some(ActionPanelEvent {
                        message: "The process has started".into(),
                        level: NoticeLevel::Info,
                    })
                }
                Err(err) => Some(ActionPanelEvent {
                    message: err.user_message("Failed to run, try again later"),
                    level: NoticeLevel::Error,
                }),
            }
        }
        ActionPanelMsg::Tick(now) => {
            if model.cooldown_until.is_some_and(|until| now >= until) {
                model.cooldown_until = None;
            }
            None
        }
    }
}

pub fn view(ui: &mut egui::Ui, model: &ActionPanelModel) -> Vec<ActionPanelMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        let mut include = model.include_projects();
        if ui
            .checkbox(&mut include, "include projects and funds")
            .changed()
        {
            msgs.push(ActionPanelMsg::IncludeProjectsChanged(include));
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("ids:");
            let mut input = model.ids_input.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut input).hint_text("3, 4, 23....."))
                .on_hover_text("Leave empty for everybody")
                .changed()
            {
                msgs.push(ActionPanelMsg::IdsInputChanged(input));
            }
        });
        if let Some(err) = model.ids_error() {
            ui.label(
                egui::RichText::new(format!("* {err}"))
                    .small()
                    .color(ui.visuals().error_fg_color),
            );
        } else if !model.ids().is_empty() {
            ui.label(
                egui::RichText::new(format!("{} id(s) selected", model.ids().len()))
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        }
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        let enabled = model.controls_enabled();
        for action in ActionKind::ALL {
            let button = egui::Button::new(format!("{} {}", action_icon(action), action.title()))
                .min_size(egui::vec2(140.0, 32.0));
            if ui
                .add_enabled(enabled, button)
                .on_disabled_hover_text(disabled_reason(model))
                .clicked()
            {
                msgs.push(ActionPanelMsg::Trigger(action));
            }
        }
        if model.in_flight > 0 {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });

    msgs
}

fn action_icon(action: ActionKind) -> &'static str {
    match action {
        ActionKind::UploadDelta => egui_phosphor::regular::UPLOAD_SIMPLE,
        ActionKind::Compare => egui_phosphor::regular::GIT_DIFF,
        ActionKind::UploadBulk => egui_phosphor::regular::CLOUD_ARROW_UP,
    }
}

fn disabled_reason(model: &ActionPanelModel) -> &'static str {
    if model.ids_error.is_some() {
        "Fix the ids field first"
    } else {
        "A run was just started; please wait a few seconds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::action::ExecuteMethod;

    fn started(model: &mut ActionPanelModel, at: Instant) {
        let mut cmds = Vec::new();
        update(
            model,
            ActionPanelMsg::ExecuteCompleted {
                action: ActionKind::Compare,
                result: Ok(()),
                completed_at: at,
            },
            &mut cmds,
        );
    }

    #[test]
    fn defaults_include_projects_and_no_filter() {
        let model = ActionPanelModel::default();
        assert!(model.include_projects());
        assert!(model.ids().is_empty());
        assert!(model.controls_enabled());
    }

    #[test]
    fn trigger_builds_payload_from_current_inputs() {
        let mut model = ActionPanelModel::default();
        let mut cmds = Vec::new();
        update(
            &mut model,
            ActionPanelMsg::IdsInputChanged("3, 4".into()),
            &mut cmds,
        );
        update(
            &mut model,
            ActionPanelMsg::IncludeProjectsChanged(false),
            &mut cmds,
        );

        update(
            &mut model,
            ActionPanelMsg::Trigger(ActionKind::UploadBulk),
            &mut cmds,
        );

        assert_eq!(
            cmds,
            vec![ActionPanelCommand::Execute {
                action: ActionKind::UploadBulk,
                request: ExecuteRequest {
                    method: ExecuteMethod::Upload,
                    include_projects: false,
                    ids: vec![3, 4],
                    is_delta: Some(false),
                },
            }]
        );
    }

    #[test]
    fn bad_ids_show_error_and_disable_triggers() {
        let mut model = ActionPanelModel::default();
        let mut cmds = Vec::new();
        update(
            &mut model,
            ActionPanelMsg::IdsInputChanged("3, x".into()),
            &mut cmds,
        );

        assert_eq!(model.ids_error(), Some("ids must be numbers"));
        assert!(model.ids().is_empty());
        assert!(!model.controls_enabled());

        update(
            &mut model,
            ActionPanelMsg::Trigger(ActionKind::Compare),
            &mut cmds,
        );
        assert!(cmds.is_empty());

        update(
            &mut model,
            ActionPanelMsg::IdsInputChanged(String::new()),
            &mut cmds,
        );
        assert!(model.ids_error().is_none());
        assert!(model.controls_enabled());
    }

    #[test]
    fn success_disables_for_exactly_five_seconds() {
        let mut model = ActionPanelModel::default();
        let mut cmds = Vec::new();
        let t0 = Instant::now();
        started(&mut model, t0);

        assert!(!model.controls_enabled());
        update(
            &mut model,
            ActionPanelMsg::Tick(t0 + COOLDOWN - Duration::from_millis(1)),
            &mut cmds,
        );
        assert!(!model.controls_enabled());
        assert_eq!(
            model.cooldown_remaining(t0 + Duration::from_secs(2)),
            Some(Duration::from_secs(3))
        );

        update(&mut model, ActionPanelMsg::Tick(t0 + COOLDOWN), &mut cmds);
        assert!(model.controls_enabled());
    }

    #[test]
    fn triggers_are_ignored_during_cooldown() {
        let mut model = ActionPanelModel::default();
        let mut cmds = Vec::new();
        started(&mut model, Instant::now());

        update(
            &mut model,
            ActionPanelMsg::Trigger(ActionKind::UploadDelta),
            &mut cmds,
        );

        assert!(cmds.is_empty());
    }

    #[test]
    fn success_emits_started_notice() {
        let mut model = ActionPanelModel::default();
        let mut cmds = Vec::new();
        update(
            &mut model,
            ActionPanelMsg::Trigger(ActionKind::UploadDelta),
            &mut cmds,
        );

        let event = update(
            &mut model,
            ActionPanelMsg::ExecuteCompleted {
                action: ActionKind::UploadDelta,
                result: Ok(()),
                completed_at: Instant::now(),
            },
            &mut cmds,
        )
        .unwrap();

        assert_eq!(event.message, "The process has started");
        assert_eq!(event.level, NoticeLevel::Info);
    }

    #[test]
    fn rejected_run_shows_server_text_and_stays_enabled() {
        let mut model = ActionPanelModel::default();
        let mut cmds = Vec::new();

        let event = update(
            &mut model,
            ActionPanelMsg::ExecuteCompleted {
                action: ActionKind::Compare,
                result: Err(ApiError::Remote {
                    status: 423,
                    body: "A run is already in progress".into(),
                }),
                completed_at: Instant::now(),
            },
            &mut cmds,
        )
        .unwrap();

        assert_eq!(event.message, "A run is already in progress");
        assert_eq!(event.level, NoticeLevel::Error);
        assert!(model.controls_enabled());
    }

    #[test]
    fn network_failure_uses_generic_text() {
        let mut model = ActionPanelModel::default();
        let mut cmds = Vec::new();

        let event = update(
            &mut model,
            ActionPanelMsg::ExecuteCompleted {
                action: ActionKind::Compare,
                result: Err(ApiError::Network("offline".into())),
                completed_at: Instant::now(),
            },
            &mut cmds,
        )
        .unwrap();

        assert_eq!(event.message, "Failed to run, try again later");
    }
}
