//! Stateless HTTP request builder and response parser for the todo & echo API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateTodo, CreatedTodo, DeletedTodo, ErrorBody, Health, MessageList, MessageReply,
    SendMessage, ServiceInfo, TodoList,
};

/// Synchronous, stateless client for the todo & echo API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_info(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/")
    }

    pub fn build_health(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/health")
    }

    pub fn build_send_message(&self, input: &SendMessage) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/api/message", input)
    }

    pub fn build_list_messages(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/api/messages")
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/api/todos")
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/api/todos", input)
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        self.bare(HttpMethod::Delete, &format!("/api/todos/{id}"))
    }

    pub fn parse_info(&self, response: HttpResponse) -> Result<ServiceInfo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_send_message(&self, response: HttpResponse) -> Result<MessageReply, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_list_messages(&self, response: HttpResponse) -> Result<MessageList, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<TodoList, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<CreatedTodo, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<DeletedTodo, ApiError> {
        parse_json(response, 200)
    }

    fn bare(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(
        &self,
        method: HttpMethod,
        path: &str,
        input: &impl Serialize,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            ..self.bare(method, path)
        })
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }

    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .map(|b| b.error);

    match (response.status, message) {
        (404, message) => Err(ApiError::NotFound(message.unwrap_or_default())),
        (status, Some(message)) => Err(ApiError::Api { status, message }),
        (status, None) => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
