// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod action_panel;
pub mod email_entry;
pub mod email_list;
pub mod notices;
