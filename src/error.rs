//! Error types for the Checkvist API client.
//!
//! Failure and a legitimately empty success payload are never conflated:
//! every operation returns `Result<serde_json::Value, Error>`, and the
//! variants below carry enough detail (HTTP status, parsed error body) for
//! callers to branch on.

use thiserror::Error;

/// Errors returned by [`CheckvistClient`](crate::CheckvistClient) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation was invoked before a successful
    /// [`authenticate`](crate::CheckvistClient::authenticate) call. The
    /// request is never sent.
    #[error("not authenticated: call authenticate() before issuing requests")]
    NotAuthenticated,

    /// The login endpoint answered with a non-200 status. No token is stored
    /// and the client stays unauthenticated.
    #[error("authentication failed with status {status}")]
    AuthenticationFailed { status: u16, body: String },

    /// The server answered an operation with a non-2xx status. `body` holds
    /// the parsed JSON error payload, or the raw response text as a JSON
    /// string when the body does not parse.
    #[error("request failed with status {status}")]
    RequestFailed { status: u16, body: serde_json::Value },

    /// A network-level fault: DNS, TLS, connect, timeout, or reading the
    /// response body. Distinct from application failures so callers can tell
    /// "the server said no" from "the server was unreachable".
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body is not valid JSON.
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
