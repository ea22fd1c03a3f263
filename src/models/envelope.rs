//! The uniform response envelope returned by every resource endpoint.
//!
//! `{success, message?, data?}` is the only contract a resource client is
//! allowed to return; nothing above the HTTP adapter ever inspects status
//! codes or headers.

use serde::{Deserialize, Serialize};

/// Uniform response wrapper. Single-entity endpoints use `Envelope<T>`,
/// list endpoints `Envelope<Vec<T>>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying data.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Failed envelope carrying a server message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Consume the envelope, returning its payload if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
