// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Blocking JSON-over-HTTP client for the backend. Called from worker threads only.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::{ActionRunner, ApiError, EmailStore};
use crate::config::Config;
use crate::models::action::ExecuteRequest;

/// HTTP implementation of [`EmailStore`] and [`ActionRunner`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    emails_url: Url,
    execute_url: Url,
}

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateEmailBody<'a> {
    old_email: &'a str,
    new_email: &'a str,
}

impl ApiClient {
    /// Build a client for the configured base URL.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let emails_url = config
            .api_base_url
            .join("emails")
            .context("Failed to derive /emails endpoint")?;
        let execute_url = config
            .api_base_url
            .join("execute")
            .context("Failed to derive /execute endpoint")?;

        Ok(Self {
            http,
            emails_url,
            execute_url,
        })
    }

    fn send(&self, op: &'static str, request: RequestBuilder) -> Result<Response, ApiError> {
        debug!(op, "sending request");
        let response = request.send().map_err(|err| {
            warn!(op, error = %err, "request failed");
            ApiError::from(err)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        warn!(op, status = status.as_u16(), "server rejected request");
        Err(ApiError::Remote {
            status: status.as_u16(),
            body,
        })
    }
}

impl EmailStore for ApiClient {
    fn list_emails(&self) -> Result<Vec<String>, ApiError> {
        let response = self.send("list_emails", self.http.get(self.emails_url.clone()))?;
        let emails = response.json::<Vec<String>>().map_err(|err| {
            warn!(error = %err, "email list was not a JSON string array");
            ApiError::Decode(err.to_string())
        })?;
        debug!(count = emails.len(), "fetched emails");
        Ok(emails)
    }

    fn create_email(&self, email: &str) -> Result<(), ApiError> {
        self.send(
            "create_email",
            self.http
                .post(self.emails_url.clone())
                .json(&EmailBody { email }),
        )
        .map(drop)
    }

    fn update_email(&self, old_email: &str, new_email: &str) -> Result<(), ApiError> {
        self.send(
            "update_email",
            self.http
                .put(self.emails_url.clone())
                .json(&UpdateEmailBody {
                    old_email,
                    new_email,
                }),
        )
        .map(drop)
    }

    fn delete_email(&self, email: &str) -> Result<(), ApiError> {
        self.send(
            "delete_email",
            self.http
                .delete(self.emails_url.clone())
                .json(&EmailBody { email }),
        )
        .map(drop)
    }
}

impl ActionRunner for ApiClient {
    fn execute(&self, request: &ExecuteRequest) -> Result<(), ApiError> {
        self.send(
            "execute",
            self.http.post(self.execute_url.clone()).json(request),
        )
        .map(drop)
    }
}
