//! File-based bearer-token store.
//!
//! Persists the signed-in user's token as JSON under
//! `~/.seamline/.token.json`. The path is injectable for tests.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::traits::{StoredToken, TokenStore, TokenStoreError};

/// The token directory name.
const TOKEN_DIR: &str = ".seamline";

/// The token file name.
const TOKEN_FILE: &str = ".token.json";

/// File-backed [`TokenStore`].
#[derive(Debug)]
pub struct FileTokenStore {
    /// Path to the token file.
    token_path: PathBuf,
}

impl FileTokenStore {
    /// Create a store rooted at the user's home directory.
    ///
    /// Fails if the home directory cannot be determined.
    pub fn new() -> Result<Self, TokenStoreError> {
        let home = dirs::home_dir()
            .ok_or_else(|| TokenStoreError::Other("Failed to determine home directory".into()))?;
        Ok(Self {
            token_path: home.join(TOKEN_DIR).join(TOKEN_FILE),
        })
    }

    /// Create a store over an explicit file path (used by tests).
    pub fn with_path(token_path: PathBuf) -> Self {
        Self { token_path }
    }

    /// Get the path to the token file.
    pub fn token_path(&self) -> &PathBuf {
        &self.token_path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<StoredToken>, TokenStoreError> {
        if !self.token_path.exists() {
            return Ok(None);
        }

        let file =
            File::open(&self.token_path).map_err(|e| TokenStoreError::Io(e.to_string()))?;
        let reader = BufReader::new(file);
        let token: StoredToken = serde_json::from_reader(reader)
            .map_err(|e| TokenStoreError::Serialization(e.to_string()))?;

        if token.access_token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(token))
        }
    }

    fn save(&self, token: &StoredToken) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent).map_err(|e| TokenStoreError::Io(e.to_string()))?;
        }

        let file =
            File::create(&self.token_path).map_err(|e| TokenStoreError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, token)
            .map_err(|e| TokenStoreError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| TokenStoreError::SaveFailed(e.to_string()))
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if self.token_path.exists() {
            fs::remove_file(&self.token_path)
                .map_err(|e| TokenStoreError::ClearFailed(e.to_string()))?;
        }
        Ok(())
    }
}
