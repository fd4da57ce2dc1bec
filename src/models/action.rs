// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Remote batch actions and their `/execute` payload.

use serde::Serialize;

/// One of the three batch operations the backend can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Upload only what changed since the last run.
    UploadDelta,
    /// Diff local and remote state without uploading.
    Compare,
    /// Upload the full scope.
    UploadBulk,
}

impl ActionKind {
    /// All actions in the order they are shown.
    pub const ALL: [ActionKind; 3] = [
        ActionKind::UploadDelta,
        ActionKind::Compare,
        ActionKind::UploadBulk,
    ];

    /// Button caption.
    pub fn title(self) -> &'static str {
        match self {
            ActionKind::UploadDelta => "Upload Delta",
            ActionKind::Compare => "Compare",
            ActionKind::UploadBulk => "Upload Bulk",
        }
    }

    fn method(self) -> ExecuteMethod {
        match self {
            ActionKind::UploadDelta | ActionKind::UploadBulk => ExecuteMethod::Upload,
            ActionKind::Compare => ExecuteMethod::Compare,
        }
    }

    fn is_delta(self) -> Option<bool> {
        match self {
            ActionKind::UploadDelta => Some(true),
            ActionKind::UploadBulk => Some(false),
            ActionKind::Compare => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecuteMethod {
    Upload,
    Compare,
}

/// JSON body posted to `/execute`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    pub method: ExecuteMethod,
    pub include_projects: bool,
    pub ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_delta: Option<bool>,
}

impl ExecuteRequest {
    pub fn new(kind: ActionKind, include_projects: bool, ids: Vec<u64>) -> Self {
        Self {
            method: kind.method(),
            include_projects,
            ids,
            is_delta: kind.is_delta(),
        }
    }
}
