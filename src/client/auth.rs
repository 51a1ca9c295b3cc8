//! Authentication handling for the Checkvist API.
//!
//! Exchanges a username + API key for an opaque session token via the login
//! endpoint. The endpoint returns the token as a quoted JSON string
//! (`"abc123"`); surrounding quotes and whitespace are stripped before the
//! token is stored. Every other endpoint then receives the token as a
//! `token` parameter.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::error::{Error, Result};

/// Account credentials, fixed for the lifetime of the client.
///
/// The API key is the "remote key" from the account's profile page, not the
/// account password.
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }
}

/// Checkvist authentication handler.
///
/// Owns the credentials and the session token. A token is absent until
/// [`authenticate`](CheckvistAuth::authenticate) succeeds (or a saved one is
/// injected with [`set_token`](CheckvistAuth::set_token)); operations must
/// not hit the network without one.
pub struct CheckvistAuth {
    base_url: String,
    client: Client,
    credentials: Credentials,
    token: Option<String>,
}

impl CheckvistAuth {
    pub fn new(base_url: String, credentials: Credentials) -> Self {
        Self {
            base_url,
            client: Client::new(),
            credentials,
            token: None,
        }
    }

    /// Exchange the stored credentials for a session token.
    ///
    /// Success is HTTP 200 exactly; any other status leaves the client
    /// unauthenticated and returns [`Error::AuthenticationFailed`] with the
    /// response body attached.
    pub async fn authenticate(&mut self, timeout: Duration) -> Result<()> {
        tracing::info!("authenticating user: {}", self.credentials.username);

        #[derive(Serialize)]
        struct LoginForm<'a> {
            username: &'a str,
            remote_key: &'a str,
        }

        let login_url = format!("{}/auth/login.json", self.base_url);
        tracing::debug!("POST {}", login_url);

        let response = self
            .client
            .post(&login_url)
            .form(&LoginForm {
                username: &self.credentials.username,
                remote_key: &self.credentials.api_key,
            })
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("authentication failed with status {}: {}", status, body);
            return Err(Error::AuthenticationFailed {
                status: status.as_u16(),
                body,
            });
        }

        // The body is the bare token wrapped in JSON string quotes.
        let token = clean_token(&response.text().await?);
        tracing::debug!("received token: {}...", token_preview(&token));
        self.token = Some(token);
        tracing::info!(
            "authentication successful for user: {}",
            self.credentials.username
        );

        Ok(())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Inject a previously obtained token, skipping the login round-trip.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }
}

/// Strip the JSON string quoting (and any stray whitespace) the login
/// endpoint wraps around the raw token.
fn clean_token(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}

/// First few bytes of the token for log output. Falls back to the whole
/// token when byte 10 is not a character boundary.
fn token_preview(token: &str) -> &str {
    token.get(..10).unwrap_or(token)
}
