//! HTTP client for the TapChess backend
//!
//! | Operation          | Request                              |
//! |--------------------|--------------------------------------|
//! | `sign_in`          | `POST /auth/login`                   |
//! | `register_account` | `POST /auth/register`                |
//! | `delete_account`   | `DELETE /auth/users/{id}`            |
//! | `put_record`       | `PUT /records/{collection}/{key}`    |
//!
//! Uses the blocking reqwest client so no async runtime is needed; callers are
//! expected to run these on a background task.

use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::{AuthError, AuthResult, IdentityHandle, IdentityProvider, RecordStore, Session};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize, Debug)]
struct LoginResponse {
    token: String,
    user_id: String,
}

#[derive(Deserialize, Debug)]
struct RegisterResponse {
    user_id: String,
}

/// Identity provider and record store behind one base URL
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> AuthResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map non-success statuses: 4xx means the backend said no, anything else is transport
fn check(response: Response) -> AuthResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.to_string()
    } else {
        body
    };
    if status.is_client_error() {
        Err(AuthError::Rejected(message))
    } else {
        Err(AuthError::Transport(format!("{status}: {message}")))
    }
}

impl IdentityProvider for HttpBackend {
    fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session> {
        debug!("[AUTH] POST /auth/login for {email}");
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&Credentials { email, password })
            .send()?;
        let body: LoginResponse = check(response)?.json()?;
        Ok(Session {
            user_id: body.user_id,
            email: email.to_string(),
            token: body.token,
        })
    }

    fn register_account(&self, email: &str, password: &str) -> AuthResult<IdentityHandle> {
        debug!("[AUTH] POST /auth/register for {email}");
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(&Credentials { email, password })
            .send()?;
        let body: RegisterResponse = check(response)?.json()?;
        Ok(IdentityHandle {
            user_id: body.user_id,
            email: email.to_string(),
        })
    }

    fn delete_account(&self, handle: &IdentityHandle) -> AuthResult<()> {
        info!("[AUTH] DELETE /auth/users/{}", handle.user_id);
        let response = self
            .client
            .delete(self.url(&format!("/auth/users/{}", handle.user_id)))
            .send()?;
        check(response)?;
        Ok(())
    }
}

impl RecordStore for HttpBackend {
    fn put_record(&self, collection: &str, key: &str, fields: &serde_json::Value) -> AuthResult<()> {
        debug!("[AUTH] PUT /records/{collection}/{key}");
        let response = self
            .client
            .put(self.url(&format!("/records/{collection}/{key}")))
            .json(fields)
            .send()?;
        check(response)?;
        Ok(())
    }
}
