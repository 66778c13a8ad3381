//! Shared response envelope.
//!
//! `{ "message": ..., "error": ..., "data": ... }` with absent fields omitted
//! from the body rather than emitted as `null`. Every error response uses
//! this shape; the user endpoints also wrap successes in it.

use serde::Serialize;

/// Uniform success/error JSON wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A success body carrying a human-readable message and a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            error: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// An error body carrying only the `error` field.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            message: None,
            error: Some(error.into()),
            data: None,
        }
    }
}
