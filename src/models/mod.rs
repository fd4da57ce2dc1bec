// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types and validation helpers shared between UI and the API client.

pub mod action;
pub mod email;
pub mod ids;
