// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Notification recipient manager: a modal list synchronized with the backend.
//!
//! The model is the single writer of the local list. Every mutation is sent to the backend
//! as a command first and applied locally only when the matching `*Completed` message
//! reports success, so the list never shows something the server has not accepted.

use crate::api::ApiError;
use crate::models::email::is_valid_email;
use crate::ui::components::email_entry::{self, EmailEntry, EntryIntent, EntryMsg};
use crate::ui::components::notices::NoticeLevel;

pub const FETCH_FAILED: &str = "Error fetching emails";

const ADD_INPUT_ID: &str = "opsdeck_add_email_input";
const MODAL_ID: &str = "opsdeck_email_modal";
const CONFIRM_ID: &str = "opsdeck_delete_confirm";
const MODAL_WIDTH: f32 = 360.0;

/// UI state for the recipient modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailListModel {
    modal_open: bool,
    /// Bumped on every open; fetch results tagged with an older value are stale.
    session: u64,
    loading: bool,
    entries: Vec<EmailEntry>,
    error: Option<String>,
    new_email: String,
    adding: bool,
    pending_delete: Option<String>,
    focus_pending: bool,
}

/// Messages emitted by the recipient view or produced by finished commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmailListMsg {
    Open,
    Close,
    FetchCompleted {
        session: u64,
        result: Result<Vec<String>, ApiError>,
    },
    NewEmailChanged(String),
    AddRequested,
    AddCompleted {
        email: String,
        result: Result<(), ApiError>,
    },
    Entry {
        index: usize,
        msg: EntryMsg,
    },
    SaveCompleted {
        /// Row that issued the save.
        index: usize,
        old: String,
        new: String,
        result: Result<(), ApiError>,
    },
    ConfirmDelete,
    CancelDelete,
    DeleteCompleted {
        email: String,
        result: Result<(), ApiError>,
    },
    FocusApplied,
}

/// Backend calls requested by the component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmailListCommand {
    Fetch { session: u64 },
    Create(String),
    Update {
        index: usize,
        old: String,
        new: String,
    },
    Delete(String),
}

/// User-facing feedback surfaced as a notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailListEvent {
    pub message: String,
    pub level: NoticeLevel,
}

impl EmailListEvent {
    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Success,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}

impl EmailListModel {
    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn entries(&self) -> &[EmailEntry] {
        &self.entries
    }

    /// Current addresses in display order.
    pub fn addresses(&self) -> Vec<&str> {
        self.entries.iter().map(EmailEntry::address).collect()
    }

    /// Fetch failure text. When set, the add-email controls are hidden.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn new_email(&self) -> &str {
        &self.new_email
    }

    /// Address awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }
}

/// Apply a message to the model, pushing backend commands into `cmds`.
pub fn update(
    model: &mut EmailListModel,
    msg: EmailListMsg,
    cmds: &mut Vec<EmailListCommand>,
) -> Option<EmailListEvent> {
    match msg {
        EmailListMsg::Open => {
            if model.modal_open {
                return None;
            }
            model.modal_open = true;
            model.session += 1;
            model.loading = true;
            model.entries.clear();
            model.error = None;
            model.pending_delete = None;
            model.focus_pending = true;
            cmds.push(EmailListCommand::Fetch {
                session: model.session,
            });
            None
        }
        EmailListMsg::Close => {
            model.modal_open = false;
            model.loading = false;
            model.pending_delete = None;
            model.focus_pending = false;
            None
        }
        EmailListMsg::FetchCompleted { session, result } => {
            if !model.modal_open || session != model.session {
                tracing::debug!(session, current = model.session, "dropping stale email list");
                return None;
            }
            model.loading = false;
            match result {
                Ok(emails) => {
                    model.entries = emails.into_iter().map(EmailEntry::new).collect();
                    model.error = None;
                }
                Err(_) => {
                    model.entries.clear();
                    model.error = Some(FETCH_FAILED.to_string());
                }
            }
            None
        }
        EmailListMsg::NewEmailChanged(text) => {
            model.new_email = text;
            None
        }
        EmailListMsg::AddRequested => {
            let candidate = model.new_email.trim();
            if candidate.is_empty() {
                return Some(EmailListEvent::error("Please enter an email."));
            }
            if !is_valid_email(candidate) {
                return Some(EmailListEvent::error("Invalid email address"));
            }
            if model.adding {
                return None;
            }
            model.adding = true;
            cmds.push(EmailListCommand::Create(candidate.to_string()));
            None
        }
        EmailListMsg::AddCompleted { email, result } => {
            model.adding = false;
            match result {
                Ok(()) => {
                    model.entries.push(EmailEntry::new(email));
                    model.new_email.clear();
                    Some(EmailListEvent::success("Email added."))
                }
                Err(err) => Some(EmailListEvent::error(
                    err.user_message("Error adding email."),
                )),
            }
        }
        EmailListMsg::Entry { index, msg } => {
            let entry = model.entries.get_mut(index)?;
            match email_entry::update(entry, msg)? {
                EntryIntent::Save { old, new } => {
                    cmds.push(EmailListCommand::Update { index, old, new });
                }
                EntryIntent::Delete(email) => {
                    model.pending_delete = Some(email);
                }
            }
            None
        }
        EmailListMsg::SaveCompleted {
            index,
            old,
            new,
            result,
        } => match result {
            Ok(()) => {
                if let Some(entry) = issuing_entry(model, index, &old) {
                    entry.close_editor();
                }
                for entry in model.entries.iter_mut().filter(|e| e.address() == old) {
                    entry.rename(&new);
                }
                Some(EmailListEvent::success("Email updated."))
            }
            Err(err) => {
                if let Some(entry) = issuing_entry(model, index, &old) {
                    entry.save_failed();
                }
                Some(EmailListEvent::error(
                    err.user_message("Error updating email."),
                ))
            }
        },
        EmailListMsg::ConfirmDelete => {
            if let Some(email) = model.pending_delete.take() {
                cmds.push(EmailListCommand::Delete(email));
            }
            None
        }
        EmailListMsg::CancelDelete => {
            model.pending_delete = None;
            None
        }
        EmailListMsg::DeleteCompleted { email, result } => match result {
            Ok(()) => {
                model.entries.retain(|e| e.address() != email);
                Some(EmailListEvent::success("Email deleted."))
            }
            Err(ApiError::Remote { .. }) => Some(EmailListEvent::error("Failed to delete email.")),
            Err(_) => Some(EmailListEvent::error("Error deleting email.")),
        },
        EmailListMsg::FocusApplied => {
            model.focus_pending = false;
            None
        }
    }
}

/// The row at `index`, provided it still holds `address` (a delete may have shifted rows).
fn issuing_entry<'a>(
    model: &'a mut EmailListModel,
    index: usize,
    address: &str,
) -> Option<&'a mut EmailEntry> {
    model
        .entries
        .get_mut(index)
        .filter(|entry| entry.address() == address)
}

/// Render the "Show Email List" button and, when open, the modal and its confirmation dialog.
pub fn view(ui: &mut egui::Ui, ctx: &egui::Context, model: &EmailListModel) -> Vec<EmailListMsg> {
    let mut msgs = Vec::new();

    if ui
        .button(format!(
            "{} Show Email List",
            egui_phosphor::regular::ENVELOPE_SIMPLE
        ))
        .clicked()
    {
        msgs.push(EmailListMsg::Open);
    }

    if !model.is_open() {
        return msgs;
    }

    let modal = egui::Modal::new(egui::Id::new(MODAL_ID)).show(ctx, |ui| {
        ui.set_width(MODAL_WIDTH);
        ui.heading("Emails");
        ui.add_space(4.0);
        render_modal_body(ui, model, &mut msgs);
    });

    if let Some(email) = model.pending_delete() {
        let confirm = egui::Modal::new(egui::Id::new(CONFIRM_ID))
            .show(ctx, |ui| render_delete_confirmation(ui, email, &mut msgs));
        if confirm.should_close() {
            msgs.push(EmailListMsg::CancelDelete);
        }
    } else if modal.should_close() {
        msgs.push(EmailListMsg::Close);
    }

    msgs
}

fn render_modal_body(ui: &mut egui::Ui, model: &EmailListModel, msgs: &mut Vec<EmailListMsg>) {
    if model.is_loading() {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new().size(14.0));
            ui.label("Loading emails…");
        });
    }

    egui::ScrollArea::vertical()
        .max_height(320.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if !model.is_loading() && model.error().is_none() && model.entries().is_empty() {
                ui.label(
                    egui::RichText::new("No emails yet.")
                        .italics()
                        .color(egui::Color32::from_gray(110)),
                );
            }
            for (index, entry) in model.entries().iter().enumerate() {
                let entry_msgs = email_entry::view(ui, entry, index);
                msgs.extend(
                    entry_msgs
                        .into_iter()
                        .map(|msg| EmailListMsg::Entry { index, msg }),
                );
            }
        });

    ui.add_space(8.0);

    if let Some(error) = model.error() {
        ui.label(egui::RichText::new(error).color(ui.visuals().error_fg_color));
        if model.focus_pending && !ui.is_sizing_pass() {
            msgs.push(EmailListMsg::FocusApplied);
        }
    } else {
        render_add_row(ui, model, msgs);
    }

    ui.add_space(8.0);
    ui.separator();
    if ui.button("Close").clicked() {
        msgs.push(EmailListMsg::Close);
    }
}

fn render_add_row(ui: &mut egui::Ui, model: &EmailListModel, msgs: &mut Vec<EmailListMsg>) {
    ui.horizontal(|ui| {
        let mut input = model.new_email().to_string();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut input)
                .id(egui::Id::new(ADD_INPUT_ID))
                .hint_text("Enter new email"),
        );
        if resp.changed() {
            msgs.push(EmailListMsg::NewEmailChanged(input));
        }
        // The first pass of a new modal only measures it.
        if model.focus_pending && !ui.is_sizing_pass() {
            resp.request_focus();
            msgs.push(EmailListMsg::FocusApplied);
        }
        if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
            msgs.push(EmailListMsg::AddRequested);
        }

        let add = egui::Button::new(format!("{} Add Email", egui_phosphor::regular::PLUS));
        if ui.add_enabled(!model.adding, add).clicked() {
            msgs.push(EmailListMsg::AddRequested);
        }
    });
}

fn render_delete_confirmation(ui: &mut egui::Ui, email: &str, msgs: &mut Vec<EmailListMsg>) {
    ui.heading("Delete email");
    ui.label(format!("Are you sure you want to delete {email}?"));
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Delete").clicked() {
            msgs.push(EmailListMsg::ConfirmDelete);
        }
        if ui.button("Cancel").clicked() {
            msgs.push(EmailListMsg::CancelDelete);
        }
    });
}
