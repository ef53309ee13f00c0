//! Synchronous API client core for the todo & echo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip.
//!
//! # Design
//! - `ApiClient` is stateless and holds only `base_url`.
//! - Each endpoint is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    CreateTodo, CreatedTodo, DeletedTodo, Health, MessageList, MessageRecord, MessageReply,
    SendMessage, ServiceInfo, Todo, TodoList,
};
