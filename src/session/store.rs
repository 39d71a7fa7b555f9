//! Token Storage
//!
//! Persistence of the opaque authentication token behind a small
//! get/set/clear interface.

use std::sync::{Arc, RwLock};

use crate::error::StoreError;

/// Key the token is stored under
pub const TOKEN_KEY: &str = "token";

/// Where the session token lives between runs
pub trait TokenStore {
    /// The persisted token, if any
    fn get(&self) -> Option<String>;

    fn set(&self, token: &str) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        let slot = self.slot.read().unwrap_or_else(|poisoned| {
            tracing::warn!("Token store lock poisoned, reading last value");
            poisoned.into_inner()
        });
        slot.clone()
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::{FileTokenStore, StoredToken};

#[cfg(feature = "native")]
mod file {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use std::path::{Path, PathBuf};

    use super::TokenStore;
    use crate::error::StoreError;

    /// On-disk session record
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct StoredToken {
        pub token: String,
        pub saved_at: DateTime<Utc>,
    }

    /// JSON file store used by the terminal client
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Full stored record, including when it was saved
        pub fn load(&self) -> Option<StoredToken> {
            let content = std::fs::read_to_string(&self.path).ok()?;
            match serde_json::from_str::<StoredToken>(&content) {
                Ok(stored) if !stored.token.is_empty() => Some(stored),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable session file {:?}: {}", self.path, e);
                    None
                }
            }
        }
    }

    impl TokenStore for FileTokenStore {
        fn get(&self) -> Option<String> {
            self.load().map(|stored| stored.token)
        }

        fn set(&self, token: &str) -> Result<(), StoreError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let stored = StoredToken {
                token: token.to_string(),
                saved_at: Utc::now(),
            };
            std::fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
            tracing::debug!("Session token written to {:?}", self.path);
            Ok(())
        }

        fn clear(&self) -> Result<(), StoreError> {
            match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_shared_between_clones() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        assert!(store.get().is_none());

        other.set("abc").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc"));

        store.clear().unwrap();
        assert!(other.get().is_none());
    }

    #[test]
    fn test_memory_store_reads_through_poisoned_lock() {
        let store = MemoryTokenStore::with_token("abc");
        let slot = store.slot.clone();

        let _ = std::thread::spawn(move || {
            let _guard = slot.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(store.slot.is_poisoned());
        assert_eq!(store.get().as_deref(), Some("abc"));
        assert!(matches!(store.set("def"), Err(StoreError::Unavailable(_))));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("session.json"));

        assert!(store.get().is_none());
        store.set("token-123").unwrap();
        assert_eq!(store.get().as_deref(), Some("token-123"));
        assert!(store.load().unwrap().saved_at <= chrono::Utc::now());

        store.clear().unwrap();
        assert!(store.get().is_none());
        assert!(!store.path().exists());

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.get().is_none());
    }
}
