// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! One row of the recipient list with an inline view/edit toggle.

use crate::models::email::is_valid_email;

/// A stored address plus its local editor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailEntry {
    address: String,
    editor: EditorState,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Viewing,
    Editing(EditDraft),
}

/// In-progress edit of one address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    pub text: String,
    pub valid: bool,
    /// An update request for this draft is in flight.
    pub saving: bool,
}

/// Messages emitted by a single entry row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryMsg {
    StartEdit,
    DraftChanged(String),
    Save,
    Cancel,
    Delete,
}

/// Requests the entry hands up to the list manager; the entry itself never talks to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryIntent {
    Save { old: String, new: String },
    Delete(String),
}

impl EmailEntry {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            editor: EditorState::Viewing,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.editor, EditorState::Editing(_))
    }

    /// Apply a confirmed rename. Editor state is untouched.
    pub(crate) fn rename(&mut self, new_address: &str) {
        self.address = new_address.to_string();
    }

    /// Leave edit mode after the draft was accepted by the backend.
    pub(crate) fn close_editor(&mut self) {
        self.editor = EditorState::Viewing;
    }

    /// Re-enable the Save button after a rejected update; the draft is kept.
    pub(crate) fn save_failed(&mut self) {
        if let EditorState::Editing(draft) = &mut self.editor {
            draft.saving = false;
        }
    }
}

/// Apply a message to the entry. Returns an intent when the parent must act.
pub fn update(entry: &mut EmailEntry, msg: EntryMsg) -> Option<EntryIntent> {
    match msg {
        EntryMsg::StartEdit => {
            if !entry.is_editing() {
                entry.editor = EditorState::Editing(EditDraft {
                    text: entry.address.clone(),
                    valid: is_valid_email(&entry.address),
                    saving: false,
                });
            }
            None
        }
        EntryMsg::DraftChanged(text) => {
            if let EditorState::Editing(draft) = &mut entry.editor {
                draft.valid = is_valid_email(&text);
                draft.text = text;
            }
            None
        }
        EntryMsg::Save => match &mut entry.editor {
            EditorState::Editing(draft) if draft.valid && !draft.saving => {
                draft.saving = true;
                Some(EntryIntent::Save {
                    old: entry.address.clone(),
                    new: draft.text.clone(),
                })
            }
            _ => None,
        },
        EntryMsg::Cancel => {
            entry.editor = EditorState::Viewing;
            None
        }
        EntryMsg::Delete => {
            if entry.is_editing() {
                return None;
            }
            Some(EntryIntent::Delete(entry.address.clone()))
        }
    }
}

/// Render one entry row and return the messages it produced.
pub fn view(ui: &mut egui::Ui, entry: &EmailEntry, index: usize) -> Vec<EntryMsg> {
    let mut msgs = Vec::new();

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        match entry.editor() {
            EditorState::Viewing => {
                ui.horizontal(|ui| {
                    ui.label(entry.address());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(egui_phosphor::regular::TRASH_SIMPLE)
                            .on_hover_text("Delete")
                            .clicked()
                        {
                            msgs.push(EntryMsg::Delete);
                        }
                        if ui
                            .button(egui_phosphor::regular::PENCIL_SIMPLE)
                            .on_hover_text("Edit")
                            .clicked()
                        {
                            msgs.push(EntryMsg::StartEdit);
                        }
                    });
                });
            }
            EditorState::Editing(draft) => render_editor(ui, draft, index, &mut msgs),
        }
    });

    msgs
}

fn render_editor(ui: &mut egui::Ui, draft: &EditDraft, index: usize, msgs: &mut Vec<EntryMsg>) {
    let mut text = draft.text.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .id_salt(("email_edit", index))
            .hint_text("name@example.com")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        msgs.push(EntryMsg::DraftChanged(text));
    }

    if !draft.valid {
        ui.label(
            egui::RichText::new("Invalid email address")
                .small()
                .color(ui.visuals().error_fg_color),
        );
    }

    ui.horizontal(|ui| {
        let save = egui::Button::new(format!("{} Save", egui_phosphor::regular::CHECK));
        if ui
            .add_enabled(draft.valid && !draft.saving, save)
            .on_disabled_hover_text("Enter a valid email address")
            .clicked()
        {
            msgs.push(EntryMsg::Save);
        }
        if ui
            .button(format!("{} Cancel", egui_phosphor::regular::X))
            .clicked()
        {
            msgs.push(EntryMsg::Cancel);
        }
        if draft.saving {
            ui.add(egui::Spinner::new().size(12.0));
        }
    });
}
