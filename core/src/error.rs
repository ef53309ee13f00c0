//! Error types for the API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from other failures. Non-2xx responses that
//! carry the server's `{"error": ...}` body land in `Api`; anything else lands
//! in `HttpError` with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `ApiClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404. Holds the server's error message, if any.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The server rejected the request with a JSON error body.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The server returned an unexpected status without a JSON error body.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
