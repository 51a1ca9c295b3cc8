//! Parameter types for the Checkvist API.
//!
//! Identifiers and the enum-like wire codes live here as dedicated types;
//! conversion to the service's string/int representation happens only when a
//! request is built. Response payloads stay pass-through
//! [`serde_json::Value`]s; the service owns the schema and this client does
//! not re-validate it.

use std::fmt;

/// Identifier of a checklist, the top-level resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(pub i64);

impl ListId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl From<i64> for ListId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a task within a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub i64);

impl TaskId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a note (comment) attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub i64);

impl NoteId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl From<i64> for NoteId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checklist visibility.
///
/// `Private` is the server default. On create only `Public` produces a
/// `checklist[public]=1` field; an update can send either code explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    pub(crate) fn wire_code(self) -> u8 {
        match self {
            Visibility::Private => 0,
            Visibility::Public => 1,
        }
    }
}

/// Where a task lands in its list.
///
/// Only `Top` is ever encoded, as the literal `task[position]=1`. `Bottom`
/// omits the field and lets the server append, which is its default anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Bottom,
    Top,
}

impl Position {
    pub(crate) fn wire_code(self) -> Option<u8> {
        match self {
            Position::Bottom => None,
            Position::Top => Some(1),
        }
    }
}

/// Task status forwarded verbatim on
/// [`add_task`](crate::CheckvistClient::add_task).
///
/// Wire codes match the service: `1` closes, `2` invalidates, `3` reopens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Closed,
    Invalidated,
    Reopened,
}

impl TaskStatus {
    pub(crate) fn wire_code(self) -> u8 {
        match self {
            TaskStatus::Closed => 1,
            TaskStatus::Invalidated => 2,
            TaskStatus::Reopened => 3,
        }
    }
}

/// Parameters for creating a task.
///
/// Only `content` is required; everything else defaults to "let the server
/// decide", so callers can struct-update from [`NewTask::new`]:
///
/// ```
/// use checkvist_api::{NewTask, Position};
///
/// let task = NewTask {
///     tags: Some("errands".to_string()),
///     position: Position::Top,
///     ..NewTask::new("buy milk")
/// };
/// assert_eq!(task.content, "buy milk");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    /// Task text. Required.
    pub content: String,
    /// Parent task for nesting; without one the task lands at the list root.
    pub parent: Option<TaskId>,
    /// Tag string, normalized by the space→comma heuristic before sending.
    ///
    /// When the string contains at least one space and no comma, every space
    /// is treated as a separator and replaced with a comma; otherwise it is
    /// passed through unchanged apart from trimming. A heuristic, not a
    /// tokenizer.
    pub tags: Option<String>,
    /// Due date in the service's smart syntax (`"2013-01-13"`, `"tomorrow"`,
    /// `"every Friday"`, ...); passed through unvalidated.
    pub due_date: Option<String>,
    /// Placement of the new task; defaults to the bottom of the list.
    pub position: Position,
    /// Initial status, forwarded as its wire code when present.
    pub status: Option<TaskStatus>,
}

impl NewTask {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

/// Parameters for updating a task. Every field is optional; omitted fields
/// stay untouched on the server.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub content: Option<String>,
    pub parent: Option<TaskId>,
    /// Tag string, normalized like [`NewTask::tags`].
    pub tags: Option<String>,
    pub due_date: Option<String>,
    /// `Top` moves the task to the top of its list; `Bottom` (the default)
    /// sends nothing and leaves ordering alone.
    pub position: Position,
}

/// Normalize a user-supplied tag string for the wire.
///
/// When the string contains at least one space and no comma, every space
/// becomes a comma separator; otherwise it passes through unchanged. The
/// trim of leading/trailing whitespace runs after the replacement, so space
/// padding turns into commas rather than disappearing.
pub(crate) fn normalize_tags(raw: &str) -> String {
    if raw.contains(' ') && !raw.contains(',') {
        raw.replace(' ', ",").trim().to_string()
    } else {
        raw.trim().to_string()
    }
}
