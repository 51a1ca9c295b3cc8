//! # Checkvist HTTP Client
//!
//! This module provides a direct HTTP client for the Checkvist API, handling
//! authentication, checklist management, tasks, and task notes.
//!
//! ## Modules
//!
//! - [`auth`] - Credential storage and the login/token exchange
//! - [`client`] - Main HTTP client implementation with all API methods
//! - [`types`] - Identifier and parameter types for API requests
//!
//! ## Quick Start
//!
//! ```no_run
//! use checkvist_api::client::CheckvistClient;
//!
//! # async fn example() -> checkvist_api::Result<()> {
//! let mut client = CheckvistClient::new("user@example.com", "api-key");
//!
//! // Exchange credentials for a session token
//! client.authenticate().await?;
//!
//! // Fetch all active lists
//! let lists = client.get_lists().await?;
//! println!("{lists:#}");
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use auth::{CheckvistAuth, Credentials};
pub use client::CheckvistClient;
pub use types::*;
