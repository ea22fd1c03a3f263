//! Bearer-token storage trait abstraction.
//!
//! The synchronization adapter reads the signed-in user's bearer token
//! synchronously before every call. This trait abstracts where the token
//! lives (a JSON file in production, memory in tests). The adapter never
//! refreshes or validates the token; an expired one simply produces a
//! logical or transport failure downstream.

use serde::{Deserialize, Serialize};

/// Token storage errors.
#[derive(Debug, Clone)]
pub enum TokenStoreError {
    /// Failed to load the token
    LoadFailed(String),
    /// Failed to save the token
    SaveFailed(String),
    /// Failed to clear the token
    ClearFailed(String),
    /// IO error
    Io(String),
    /// Serialization/deserialization error
    Serialization(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for TokenStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenStoreError::LoadFailed(msg) => write!(f, "Failed to load token: {}", msg),
            TokenStoreError::SaveFailed(msg) => write!(f, "Failed to save token: {}", msg),
            TokenStoreError::ClearFailed(msg) => write!(f, "Failed to clear token: {}", msg),
            TokenStoreError::Io(msg) => write!(f, "IO error: {}", msg),
            TokenStoreError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            TokenStoreError::Other(msg) => write!(f, "Token store error: {}", msg),
        }
    }
}

impl std::error::Error for TokenStoreError {}

/// A persisted bearer token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
    /// The bearer token string sent in the `authorization` header.
    pub access_token: String,
    /// Token expiration time as Unix timestamp (seconds since epoch).
    pub expires_at: Option<i64>,
}

impl StoredToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Check if the token is past its recorded expiry. A token without an
    /// expiry is treated as non-expiring; the server is the authority.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => chrono::Utc::now().timestamp() >= expires_at,
            None => false,
        }
    }
}

/// Trait for bearer-token storage and retrieval.
///
/// Reads are synchronous: the adapter consults the store inline before
/// dispatching each request.
pub trait TokenStore: Send + Sync {
    /// Load the stored token, if any.
    fn load(&self) -> Result<Option<StoredToken>, TokenStoreError>;

    /// Persist a token.
    fn save(&self, token: &StoredToken) -> Result<(), TokenStoreError>;

    /// Remove any stored token.
    fn clear(&self) -> Result<(), TokenStoreError>;
}
