//! Records held by the store and the request/response payloads of each route.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: String,
    pub message: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Fields are optional so a missing field is reported as a validation error
/// rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SendMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageReply {
    pub response: String,
    pub message_id: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedTodo {
    pub message: String,
    pub todo: Todo,
}

#[derive(Debug, Serialize)]
pub struct DeletedTodo {
    pub message: String,
    pub remaining_todos: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageList {
    pub messages: Vec<MessageRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub todos_count: usize,
    pub messages_count: usize,
}
