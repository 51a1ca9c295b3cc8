use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;

use crate::client::{
    auth::{CheckvistAuth, Credentials},
    types::*,
};
use crate::error::{Error, Result};

/// Production host. Every endpoint path hangs off it, with a `.json` suffix.
pub const DEFAULT_BASE_URL: &str = "https://checkvist.com";

/// Default bound on any single request, login included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Checkvist outline/checklist API.
///
/// Holds the credentials and session token; every operation is one
/// authenticated HTTP round-trip returning the response body as pass-through
/// JSON. Call [`authenticate`](CheckvistClient::authenticate) once before
/// anything else; operations invoked without a token fail fast with
/// [`Error::NotAuthenticated`] instead of sending a tokenless request.
pub struct CheckvistClient {
    base_url: String,
    client: Client,
    auth: CheckvistAuth,
    timeout: Duration,
    debug: bool,
}

impl CheckvistClient {
    /// Build a client against the production host.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, username, api_key)
    }

    /// Build a client against a different host (a staging instance, or a
    /// local mock in tests). A trailing slash on `base_url` is stripped.
    pub fn with_base_url(
        base_url: impl Into<String>,
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            auth: CheckvistAuth::new(base_url.clone(), Credentials::new(username, api_key)),
            base_url,
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }

    /// Toggle pretty-printed response bodies on the debug log stream.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Bound every request (login included) by `timeout`.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Obtain a session token for the configured credentials.
    pub async fn authenticate(&mut self) -> Result<()> {
        self.auth.authenticate(self.timeout).await
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn token(&self) -> Option<&str> {
        self.auth.token()
    }

    /// Inject a previously obtained token, skipping the login round-trip.
    pub fn set_token(&mut self, token: String) {
        self.auth.set_token(token);
    }

    /// Generic request contract shared by every operation.
    ///
    /// Prepends the session token to `params` (query string for GET/DELETE,
    /// form body for POST/PUT), sends with the bounded timeout, parses the
    /// body as JSON regardless of status, and maps non-2xx statuses to
    /// [`Error::RequestFailed`] carrying the parsed body.
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value> {
        let token = self.auth.token().ok_or(Error::NotAuthenticated)?;

        let url = format!("{}{}.json", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut form = Vec::with_capacity(params.len() + 1);
        form.push(("token", token.to_string()));
        form.extend(params);

        let reads = method == Method::GET || method == Method::DELETE;
        let builder = self.client.request(method, &url);
        let request = if reads {
            builder.query(&form)
        } else {
            builder.form(&form)
        };

        let response = request.timeout(self.timeout).send().await?;
        let status = response.status();
        let text = response.text().await?;

        // Parse best-effort regardless of status so the debug stream can
        // show error bodies too.
        let parsed: std::result::Result<Value, serde_json::Error> = serde_json::from_str(&text);

        if self.debug {
            match &parsed {
                Ok(value) => {
                    if let Ok(pretty) = serde_json::to_string_pretty(value) {
                        tracing::debug!("response {} from {}:\n{}", status, url, pretty);
                    }
                }
                Err(_) => tracing::debug!("non-JSON response {} from {}: {}", status, url, text),
            }
        }

        if !status.is_success() {
            let body = parsed.unwrap_or_else(|_| Value::String(text));
            tracing::error!("request to {} failed with status {}: {}", url, status, body);
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(parsed?)
    }

    // Account operations

    /// Fetch the authenticated user's account record.
    pub async fn get_user(&self) -> Result<Value> {
        self.request(Method::GET, "/auth/curr_user", Vec::new())
            .await
    }

    // List operations

    /// Fetch all active (non-archived) lists.
    pub async fn get_lists(&self) -> Result<Value> {
        self.request(Method::GET, "/checklists", Vec::new()).await
    }

    /// Fetch archived lists only.
    pub async fn get_archived_lists(&self) -> Result<Value> {
        let params = vec![("archived", "true".to_string())];
        self.request(Method::GET, "/checklists", params).await
    }

    /// Fetch a single list's metadata.
    pub async fn get_list_info(&self, list: ListId) -> Result<Value> {
        self.request(Method::GET, &format!("/checklists/{list}"), Vec::new())
            .await
    }

    /// Create a list.
    ///
    /// [`Visibility::Private`] is the server default and sends no flag; only
    /// [`Visibility::Public`] produces a `checklist[public]=1` field.
    pub async fn create_list(&self, name: &str, visibility: Visibility) -> Result<Value> {
        let mut params = vec![("checklist[name]", name.to_string())];
        if visibility == Visibility::Public {
            params.push(("checklist[public]", visibility.wire_code().to_string()));
        }
        self.request(Method::POST, "/checklists", params).await
    }

    /// Update a list's name and/or visibility; `None` fields stay untouched
    /// on the server.
    pub async fn update_list(
        &self,
        list: ListId,
        name: Option<&str>,
        visibility: Option<Visibility>,
    ) -> Result<Value> {
        let mut params = Vec::new();
        if let Some(name) = name {
            params.push(("checklist[name]", name.to_string()));
        }
        if let Some(visibility) = visibility {
            params.push(("checklist[public]", visibility.wire_code().to_string()));
        }
        self.request(Method::PUT, &format!("/checklists/{list}"), params)
            .await
    }

    /// Delete a list outright, tasks and all.
    pub async fn delete_list(&self, list: ListId) -> Result<Value> {
        self.request(Method::DELETE, &format!("/checklists/{list}"), Vec::new())
            .await
    }

    // Task operations

    /// Fetch every task in a list. `with_notes` folds each task's notes into
    /// the response.
    pub async fn get_tasks(&self, list: ListId, with_notes: bool) -> Result<Value> {
        let mut params = Vec::new();
        if with_notes {
            params.push(("with_notes", "true".to_string()));
        }
        self.request(Method::GET, &format!("/checklists/{list}/tasks"), params)
            .await
    }

    /// Fetch a single task.
    pub async fn get_task(&self, list: ListId, task: TaskId, with_notes: bool) -> Result<Value> {
        let mut params = Vec::new();
        if with_notes {
            params.push(("with_notes", "true".to_string()));
        }
        self.request(
            Method::GET,
            &format!("/checklists/{list}/tasks/{task}"),
            params,
        )
        .await
    }

    /// Create a task in a list.
    pub async fn add_task(&self, list: ListId, task: &NewTask) -> Result<Value> {
        let mut params = vec![("task[content]", task.content.clone())];
        if let Some(parent) = task.parent {
            params.push(("task[parent_id]", parent.to_string()));
        }
        if let Some(tags) = &task.tags {
            params.push(("task[tags]", normalize_tags(tags)));
        }
        if let Some(due) = &task.due_date {
            params.push(("task[due_date]", due.clone()));
        }
        if let Some(code) = task.position.wire_code() {
            params.push(("task[position]", code.to_string()));
        }
        if let Some(status) = task.status {
            params.push(("task[status]", status.wire_code().to_string()));
        }
        self.request(Method::POST, &format!("/checklists/{list}/tasks"), params)
            .await
    }

    /// Bulk-create tasks from the service's plain-text import format.
    pub async fn import_tasks(&self, list: ListId, import_content: &str) -> Result<Value> {
        let params = vec![("import_content", import_content.to_string())];
        self.request(Method::POST, &format!("/checklists/{list}/import"), params)
            .await
    }

    /// Update a task; omitted fields stay untouched on the server.
    pub async fn update_task(
        &self,
        list: ListId,
        task: TaskId,
        update: &TaskUpdate,
    ) -> Result<Value> {
        let mut params = Vec::new();
        if let Some(content) = &update.content {
            params.push(("task[content]", content.clone()));
        }
        if let Some(parent) = update.parent {
            params.push(("task[parent_id]", parent.to_string()));
        }
        if let Some(tags) = &update.tags {
            params.push(("task[tags]", normalize_tags(tags)));
        }
        if let Some(due) = &update.due_date {
            params.push(("task[due_date]", due.clone()));
        }
        if let Some(code) = update.position.wire_code() {
            params.push(("task[position]", code.to_string()));
        }
        self.request(
            Method::PUT,
            &format!("/checklists/{list}/tasks/{task}"),
            params,
        )
        .await
    }

    /// Mark a task closed.
    pub async fn close_task(&self, list: ListId, task: TaskId) -> Result<Value> {
        self.request(
            Method::POST,
            &format!("/checklists/{list}/tasks/{task}/close"),
            Vec::new(),
        )
        .await
    }

    /// Reopen a closed or invalidated task.
    pub async fn reopen_task(&self, list: ListId, task: TaskId) -> Result<Value> {
        self.request(
            Method::POST,
            &format!("/checklists/{list}/tasks/{task}/reopen"),
            Vec::new(),
        )
        .await
    }

    /// Mark a task invalidated ("won't do" rather than "done").
    pub async fn invalidate_task(&self, list: ListId, task: TaskId) -> Result<Value> {
        self.request(
            Method::POST,
            &format!("/checklists/{list}/tasks/{task}/invalidate"),
            Vec::new(),
        )
        .await
    }

    /// Delete a task and its subtree.
    pub async fn delete_task(&self, list: ListId, task: TaskId) -> Result<Value> {
        self.request(
            Method::DELETE,
            &format!("/checklists/{list}/tasks/{task}"),
            Vec::new(),
        )
        .await
    }

    // Note operations

    /// Fetch the notes attached to a task.
    pub async fn get_notes(&self, list: ListId, task: TaskId) -> Result<Value> {
        self.request(
            Method::GET,
            &format!("/checklists/{list}/tasks/{task}/comments"),
            Vec::new(),
        )
        .await
    }

    /// Attach a note to a task.
    pub async fn add_note(&self, list: ListId, task: TaskId, text: &str) -> Result<Value> {
        let params = vec![("comment[comment]", text.to_string())];
        self.request(
            Method::POST,
            &format!("/checklists/{list}/tasks/{task}/comments"),
            params,
        )
        .await
    }

    /// Replace a note's text.
    pub async fn update_note(
        &self,
        list: ListId,
        task: TaskId,
        note: NoteId,
        text: &str,
    ) -> Result<Value> {
        let params = vec![("comment[comment]", text.to_string())];
        self.request(
            Method::PUT,
            &format!("/checklists/{list}/tasks/{task}/comments/{note}"),
            params,
        )
        .await
    }

    /// Delete a note.
    pub async fn delete_note(&self, list: ListId, task: TaskId, note: NoteId) -> Result<Value> {
        self.request(
            Method::DELETE,
            &format!("/checklists/{list}/tasks/{task}/comments/{note}"),
            Vec::new(),
        )
        .await
    }
}
