use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Persistence for the session credential.
///
/// Only the session coordinator writes; the transport reads to attach the
/// `Authorization` header.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: Option<String>) -> Result<(), SessionError>;
}

/// Process-local store, used by tests and embedders that persist elsewhere
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set(&self, token: Option<String>) -> Result<(), SessionError> {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = token;
        Ok(())
    }
}

fn store_error(err: impl std::fmt::Display) -> SessionError {
    SessionError::TokenStore(err.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TokenFile {
    access_token: String,
    saved_at: DateTime<Utc>,
}

/// Token persisted as `token.json` inside the CLI config directory
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl FileTokenStore {
    pub fn open(config_dir: &Path) -> Result<Self, SessionError> {
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(store_error)?;
        }
        let path = config_dir.join("token.json");

        let cached = if path.exists() {
            let content = fs::read_to_string(&path).map_err(store_error)?;
            match serde_json::from_str::<TokenFile>(&content) {
                Ok(file) => Some(file.access_token),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable token file {}: {}", path.display(), e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            path,
            cached: RwLock::new(cached),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.cached.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn set(&self, token: Option<String>) -> Result<(), SessionError> {
        match &token {
            Some(access_token) => {
                let file = TokenFile {
                    access_token: access_token.clone(),
                    saved_at: Utc::now(),
                };
                let content = serde_json::to_string_pretty(&file).map_err(store_error)?;
                fs::write(&self.path, content).map_err(store_error)?;
            }
            None => {
                if self.path.exists() {
                    fs::remove_file(&self.path).map_err(store_error)?;
                }
            }
        }

        *self.cached.write().unwrap_or_else(|e| e.into_inner()) = token;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);
        store.set(Some("abc".into())).unwrap();
        assert_eq!(store.get().as_deref(), Some("abc"));
        store.set(None).unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileTokenStore::open(dir.path()).unwrap();
        store.set(Some("persisted".into())).unwrap();
        assert!(store.path().exists());

        let reopened = FileTokenStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get().as_deref(), Some("persisted"));

        reopened.set(None).unwrap();
        assert!(!reopened.path().exists());
        assert_eq!(FileTokenStore::open(dir.path()).unwrap().get(), None);
    }

    #[test]
    fn test_clearing_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::open(dir.path()).unwrap();
        assert!(store.set(None).is_ok());
    }
}
