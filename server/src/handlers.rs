use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::{Local, Utc};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::models::{
    CreateTodo, CreatedTodo, DeletedTodo, Health, MessageList, MessageReply, SendMessage,
    TodoList,
};
use crate::AppState;

type Payload = Result<Json<Map<String, Value>>, JsonRejection>;

/// Accepts only a non-empty JSON object, then reads it into the route's
/// request struct.
fn object_body<T: DeserializeOwned>(payload: Payload) -> Result<T, ApiError> {
    let Json(object) = payload?;
    if object.is_empty() {
        return Err(ApiError::BadRequest("No JSON data provided".to_string()));
    }
    Ok(serde_json::from_value(Value::Object(object))?)
}

pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("Todo & Echo API - {}", state.environment),
        "status": "running",
        "environment": state.environment,
        "endpoints": {
            "POST /api/message": "Send a message",
            "GET /api/todos": "Get all todos",
            "POST /api/todos": "Create a todo",
            "DELETE /api/todos/{id}": "Delete a todo",
            "GET /api/messages": "Get all messages",
            "GET /health": "Health check",
        },
    }))
}

pub async fn send_message(
    State(state): State<AppState>,
    payload: Payload,
) -> Result<Json<MessageReply>, ApiError> {
    let input: SendMessage = object_body(payload)?;
    let message = input
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Message is required".to_string()))?;

    let record = state.db.write().await.add_message(message);

    let current_time = Local::now().format("%H:%M:%S").to_string();
    tracing::info!(message_id = %record.id, message = %record.message, "Received message");

    Ok(Json(MessageReply {
        response: format!(
            "Hello! You said: '{}'. Message received at {current_time}",
            record.message
        ),
        message_id: record.id,
        timestamp: current_time,
    }))
}

pub async fn list_todos(State(state): State<AppState>) -> Json<TodoList> {
    let store = state.db.read().await;
    let todos = store.todos().to_vec();
    tracing::debug!(count = todos.len(), "Fetching todos");
    Json(TodoList {
        count: todos.len(),
        todos,
    })
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Payload,
) -> Result<(StatusCode, Json<CreatedTodo>), ApiError> {
    let input: CreateTodo = object_body(payload)?;
    let text = input
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Todo text is required".to_string()))?
        .to_string();

    let todo = state.db.write().await.add_todo(text);
    tracing::info!(todo_id = %todo.id, text = %todo.text, "Created todo");

    Ok((
        StatusCode::CREATED,
        Json(CreatedTodo {
            message: "Todo created successfully".to_string(),
            todo,
        }),
    ))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedTodo>, ApiError> {
    let Path(id) = path?;
    let mut store = state.db.write().await;
    store
        .remove_todo(&id)
        .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;
    let remaining_todos = store.todos().len();
    drop(store);

    tracing::info!(todo_id = %id, remaining_todos, "Deleted todo");
    Ok(Json(DeletedTodo {
        message: "Todo deleted successfully".to_string(),
        remaining_todos,
    }))
}

pub async fn list_messages(State(state): State<AppState>) -> Json<MessageList> {
    let store = state.db.read().await;
    let messages = store.messages().to_vec();
    Json(MessageList {
        count: messages.len(),
        messages,
    })
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let store = state.db.read().await;
    Json(Health {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        todos_count: store.todos().len(),
        messages_count: store.messages().len(),
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
