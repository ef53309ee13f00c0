//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe requests and responses as plain data. `ApiClient`
//! builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network; whoever embeds it executes the round-trip with
//! whatever HTTP stack it already has (the integration tests use ureq).
//!
//! Every field is owned (`String`, `Vec`), so a request can be handed to
//! another thread or runtime without borrowing from the client.

/// HTTP method for a request. The API only uses these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data. `path` is the absolute URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, handed back to
/// `ApiClient::parse_*` after the caller executed the request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
