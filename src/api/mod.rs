// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Backend contract and its HTTP implementation.
//!
//! The UI never talks HTTP directly: commands are executed against a [`Backend`],
//! which the real app satisfies with [`ApiClient`] and tests with in-memory fakes.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

use crate::models::action::ExecuteRequest;

/// Remote list of notification recipients. Addresses are their own keys.
pub trait EmailStore {
    /// Fetch every stored address in server order.
    fn list_emails(&self) -> Result<Vec<String>, ApiError>;
    /// Store a new address.
    fn create_email(&self, email: &str) -> Result<(), ApiError>;
    /// Replace `old_email` with `new_email`.
    fn update_email(&self, old_email: &str, new_email: &str) -> Result<(), ApiError>;
    /// Remove an address.
    fn delete_email(&self, email: &str) -> Result<(), ApiError>;
}

/// Starts batch operations on the backend.
pub trait ActionRunner {
    fn execute(&self, request: &ExecuteRequest) -> Result<(), ApiError>;
}

/// Everything the command executor needs.
pub trait Backend: EmailStore + ActionRunner {}

impl<T: EmailStore + ActionRunner> Backend for T {}
