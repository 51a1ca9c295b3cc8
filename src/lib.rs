//! # Checkvist API Library
//!
//! This library provides a typed async client for the [Checkvist] hosted
//! outline/checklist service. It wraps the service's HTTP+JSON API: exchange
//! account credentials for a session token once, then drive checklists,
//! tasks, and task notes through plain method calls.
//!
//! Request parameters are typed ([`ListId`], [`NewTask`], [`Visibility`],
//! and friends in the [`client`] module); response payloads come back as
//! pass-through [`serde_json::Value`]s, preserving whatever fields the
//! service returns.
//!
//! [Checkvist]: https://checkvist.com
//!
//! ## Quick Start
//!
//! ```no_run
//! use checkvist_api::{CheckvistClient, NewTask, Position};
//!
//! # async fn example() -> checkvist_api::Result<()> {
//! let mut client = CheckvistClient::new("user@example.com", "api-key");
//! client.authenticate().await?;
//!
//! let list = client.create_list("Groceries", checkvist_api::Visibility::Private).await?;
//! let list_id = checkvist_api::ListId::new(list["id"].as_i64().unwrap_or_default());
//!
//! let mut task = NewTask::new("milk");
//! task.tags = Some("errand urgent".to_string());
//! task.position = Position::Top;
//! client.add_task(list_id, &task).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::{
    CheckvistAuth, CheckvistClient, Credentials, ListId, NewTask, NoteId, Position, TaskId,
    TaskStatus, TaskUpdate, Visibility,
};
pub use error::{Error, Result};
