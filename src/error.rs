//! Crate-level error taxonomy for the synchronization core.
//!
//! Three failure classes cross this layer:
//!
//! - **Transport**: the HTTP round-trip itself failed, or the server
//!   answered outside 2xx. Propagated unmodified.
//! - **Logical**: the envelope arrived with `success: false`. Only the
//!   `*_sync` adapter variants convert this into an error; plain variants
//!   hand the envelope back unexamined.
//! - **Caller-side**: no bearer token stored, or the token store itself
//!   failed before any network call was issued.
//!
//! The adapter never swallows errors and performs no retries; recovery is
//! the screen's responsibility.

use thiserror::Error;

use crate::traits::http::HttpError;
use crate::traits::tokens::TokenStoreError;

/// Fallback message used when a `success: false` envelope carries no
/// server-provided message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request was not successful";

/// Unified error type surfaced by the resource adapters.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The HTTP layer failed; the underlying error is passed through as-is.
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a well-formed envelope whose `success`
    /// flag was false. Carries the server's message.
    #[error("server rejected the request: {message}")]
    Logical { message: String },

    /// The response body could not be decoded as an envelope.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// No bearer token is available in the token store.
    #[error("no bearer token is stored; sign in first")]
    MissingToken,

    /// Reading or writing the token store failed.
    #[error("token storage error: {0}")]
    TokenStore(String),
}

impl ApiError {
    /// Build a logical failure from an optional server message, falling
    /// back to [`GENERIC_FAILURE_MESSAGE`].
    pub fn logical(message: Option<String>) -> Self {
        ApiError::Logical {
            message: message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    /// Whether this error came from a `success: false` envelope rather
    /// than a failed round-trip.
    pub fn is_logical(&self) -> bool {
        matches!(self, ApiError::Logical { .. })
    }
}

impl From<TokenStoreError> for ApiError {
    fn from(e: TokenStoreError) -> Self {
        ApiError::TokenStore(e.to_string())
    }
}
