// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::api::Backend;
use crate::models::action::{ActionKind, ExecuteRequest};
use crate::ui::components::action_panel::{
    self, ActionPanelCommand, ActionPanelModel, ActionPanelMsg,
};
use crate::ui::components::email_list::{
    self, EmailListCommand, EmailListModel, EmailListMsg,
};
use crate::ui::components::notices::{self, NoticeLevel, NoticesModel, NoticesMsg};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Upload/compare trigger panel.
    pub actions: ActionPanelModel,
    /// Notification recipient modal.
    pub emails: EmailListModel,
    /// Toast notices.
    pub notices: NoticesModel,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Frame clock; drives the action cooldown and notice expiry.
    Tick(Instant),
    Actions(ActionPanelMsg),
    Emails(EmailListMsg),
    Notices(NoticesMsg),
}

/// Commands represent side-effects executed off the UI thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Execute {
        action: ActionKind,
        request: ExecuteRequest,
    },
    FetchEmails {
        session: u64,
    },
    CreateEmail(String),
    UpdateEmail {
        index: usize,
        old: String,
        new: String,
    },
    DeleteEmail(String),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Tick(now) => {
            let mut action_cmds = Vec::new();
            action_panel::update(&mut model.actions, ActionPanelMsg::Tick(now), &mut action_cmds);
            notices::update(&mut model.notices, NoticesMsg::Tick(now));
        }
        Msg::Actions(m) => {
            let mut action_cmds = Vec::new();
            if let Some(event) = action_panel::update(&mut model.actions, m, &mut action_cmds) {
                surface_event(model, event.message, event.level);
            }
            for c in action_cmds {
                match c {
                    ActionPanelCommand::Execute { action, request } => {
                        cmds.push(Command::Execute { action, request })
                    }
                }
            }
        }
        Msg::Emails(m) => {
            let mut email_cmds = Vec::new();
            if let Some(event) = email_list::update(&mut model.emails, m, &mut email_cmds) {
                surface_event(model, event.message, event.level);
            }
            for c in email_cmds {
                cmds.push(match c {
                    EmailListCommand::Fetch { session } => Command::FetchEmails { session },
                    EmailListCommand::Create(email) => Command::CreateEmail(email),
                    EmailListCommand::Update { index, old, new } => {
                        Command::UpdateEmail { index, old, new }
                    }
                    EmailListCommand::Delete(email) => Command::DeleteEmail(email),
                });
            }
        }
        Msg::Notices(m) => notices::update(&mut model.notices, m),
    }
}

/// Execute a command against the backend (blocking) and return the resulting message.
pub fn run_command<B: Backend + ?Sized>(cmd: Command, backend: &B) -> Msg {
    match cmd {
        Command::Execute { action, request } => {
            debug!(action = action.title(), ids = request.ids.len(), "triggering run");
            let result = backend.execute(&request);
            if let Err(err) = &result {
                warn!(action = action.title(), error = %err, "run was not started");
            }
            Msg::Actions(ActionPanelMsg::ExecuteCompleted {
                action,
                result,
                completed_at: Instant::now(),
            })
        }
        Command::FetchEmails { session } => {
            let result = backend.list_emails();
            if let Err(err) = &result {
                warn!(error = %err, "failed to fetch emails");
            }
            Msg::Emails(EmailListMsg::FetchCompleted { session, result })
        }
        Command::CreateEmail(email) => {
            let result = backend.create_email(&email);
            match &result {
                Ok(()) => info!(%email, "email added"),
                Err(err) => warn!(%email, error = %err, "failed to add email"),
            }
            Msg::Emails(EmailListMsg::AddCompleted { email, result })
        }
        Command::UpdateEmail { index, old, new } => {
            let result = backend.update_email(&old, &new);
            match &result {
                Ok(()) => info!(%old, %new, "email updated"),
                Err(err) => warn!(%old, %new, error = %err, "failed to update email"),
            }
            Msg::Emails(EmailListMsg::SaveCompleted {
                index,
                old,
                new,
                result,
            })
        }
        Command::DeleteEmail(email) => {
            let result = backend.delete_email(&email);
            match &result {
                Ok(()) => info!(%email, "email deleted"),
                Err(err) => warn!(%email, error = %err, "failed to delete email"),
            }
            Msg::Emails(EmailListMsg::DeleteCompleted { email, result })
        }
    }
}

/// Turn component feedback into a toast notice.
fn surface_event(model: &mut AppModel, message: String, level: NoticeLevel) {
    notices::update(
        &mut model.notices,
        NoticesMsg::Push {
            level,
            text: message,
        },
    );
}
