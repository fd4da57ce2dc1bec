// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Failure taxonomy for backend calls.

use thiserror::Error;

/// Why a backend call failed. Cloneable so it can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, timeout, TLS).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("server responded with {status}: {body}")]
    Remote { status: u16, body: String },
    /// A success response carried a body we could not understand.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show the operator: the server's own message when it sent one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Remote { body, .. } if !body.trim().is_empty() => body.trim().to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
