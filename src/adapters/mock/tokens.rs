//! In-memory token store for testing.
//!
//! Stores the bearer token in memory, suitable for testing without file
//! system access. Each operation can be toggled to fail.

use std::sync::{Arc, Mutex};

use crate::traits::{StoredToken, TokenStore, TokenStoreError};

/// In-memory [`TokenStore`] for testing.
#[derive(Debug, Clone)]
pub struct InMemoryTokenStore {
    /// Stored token
    token: Arc<Mutex<Option<StoredToken>>>,
    /// Whether load should fail
    load_should_fail: Arc<Mutex<bool>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryTokenStore {
    /// Create a new empty in-memory token store.
    pub fn new() -> Self {
        Self {
            token: Arc::new(Mutex::new(None)),
            load_should_fail: Arc::new(Mutex::new(false)),
            save_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a store holding the given bearer token.
    pub fn with_token(access_token: impl Into<String>) -> Self {
        let store = Self::new();
        *store.token.lock().unwrap() = Some(StoredToken::new(access_token));
        store
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<StoredToken>, TokenStoreError> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(TokenStoreError::LoadFailed("mock load failure".into()));
        }
        Ok(self.token.lock().unwrap().clone())
    }

    fn save(&self, token: &StoredToken) -> Result<(), TokenStoreError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(TokenStoreError::SaveFailed("mock save failure".into()));
        }
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
